mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    Config, DocumentationConfig, ForbiddenConfig, LineLengthConfig, OrderingConfig, ReportConfig,
    ScannerConfig, SpacingConfig, SpecialPlacement, SymbolsConfig,
};
pub use validation::validate_config_semantics;

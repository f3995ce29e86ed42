#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// A documented, ordered and well-spaced source file.
pub const CLEAN_CPP: &str = r#"#include <algorithm>

#include "mob.h"


/**
 * @brief Draws the mob.
 *
 * @param bmp Where to draw.
 */
void Mob::draw(Bitmap* bmp) {
    render(bmp);
}


/**
 * @brief Ticks the mob.
 *
 * @param delta_t Time elapsed.
 */
void Mob::tick(float delta_t) {
    time += delta_t;
}
"#;

/// Local include before a system include, no spacing, no documentation.
pub const MESSY_CPP: &str = r#"#include "mob.h"
#include <vector>
void Mob::tick(float delta_t) {
}
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// Creates a local style-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }
}

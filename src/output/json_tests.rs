use std::path::Path;

use super::*;
use crate::extractor::SymbolExtractor;

#[test]
fn report_json_has_summary_and_files() {
    let mut report = Report {
        files_scanned: 2,
        ..Report::default()
    };
    let path = Path::new("source/mob.cpp");
    report.add(
        path,
        vec![Problem::new(
            path,
            ProblemKind::UnorderedIncludes,
            2,
            "2    \"mob.h\"".into(),
        )],
    );

    let output = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["files_scanned"], 2);
    assert_eq!(value["summary"]["files_with_problems"], 1);
    assert_eq!(value["summary"]["problem_count"], 1);
    let problem = &value["files"][0]["problems"][0];
    assert_eq!(value["files"][0]["path"], "source/mob.cpp");
    assert_eq!(problem["kind"], "unordered_includes");
    assert_eq!(problem["label"], "Unordered includes");
    assert_eq!(problem["line"], 2);
    assert_eq!(problem["detail"], "2    \"mob.h\"");
}

#[test]
fn empty_report_json() {
    let output = JsonFormatter.format(&Report::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["problem_count"], 0);
    assert_eq!(value["files"], serde_json::json!([]));
}

#[test]
fn symbols_json_flattens_model() {
    let model = SymbolExtractor::default().extract("#include \"mob.h\"\n\nint main(int argc) {\n}\n");

    let output = JsonFormatter
        .format_symbols(Path::new("main.cpp"), &model)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["path"], "main.cpp");
    assert_eq!(value["functions"][0]["name"], "main");
    assert_eq!(value["functions"][0]["parameters"], serde_json::json!(["argc"]));
    assert_eq!(value["includes"][0]["category"], "local");
    assert_eq!(value["constants"], serde_json::json!([]));
}

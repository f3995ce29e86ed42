use std::path::Path;

use super::*;

fn checker(patterns: &[&str]) -> ForbiddenChecker {
    let config = ForbiddenConfig {
        patterns: patterns.iter().map(ToString::to_string).collect(),
    };
    ForbiddenChecker::new(&config).unwrap()
}

#[test]
fn matching_lines_are_reported() {
    let source = "#include <iostream>\n\nvoid f() {\n    std::cout << x;\n}\n";
    let file = SourceFile::new(Path::new("game.cpp"), source, None);

    let problems = checker(&[r"\bcout\b", "<iostream>"]).check(&file);

    let lines: Vec<_> = problems.iter().map(|p| p.line).collect();
    assert_eq!(lines, vec![1, 4]);
    assert!(problems.iter().all(|p| p.kind == ProblemKind::ForbiddenToken));
    assert!(problems[1].detail.ends_with("std::cout << x;"));
}

#[test]
fn line_matching_several_patterns_is_reported_once() {
    let file = SourceFile::new(Path::new("a.cpp"), "cout cout\n", None);
    assert_eq!(checker(&["cout", "co"]).check(&file).len(), 1);
}

#[test]
fn no_patterns_means_no_findings() {
    let checker = checker(&[]);
    let file = SourceFile::new(Path::new("a.cpp"), "std::cout << 1;\n", None);

    assert!(checker.is_empty());
    assert!(checker.check(&file).is_empty());
}

#[test]
fn invalid_pattern_is_an_error() {
    let config = ForbiddenConfig {
        patterns: vec!["(unclosed".to_string()],
    };

    let err = ForbiddenChecker::new(&config).err().unwrap();

    assert!(matches!(err, StyleGuardError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"));
}

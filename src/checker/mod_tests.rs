use super::*;

fn names(checkers: &[Box<dyn Checker>]) -> Vec<&'static str> {
    checkers.iter().map(|c| c.name()).collect()
}

#[test]
fn default_config_builds_checkers_in_report_order() {
    let checkers = build_checkers(&Config::default()).unwrap();

    assert_eq!(
        names(&checkers),
        vec!["line-length", "ordering", "spacing", "documentation"]
    );
}

#[test]
fn forbidden_checker_added_when_patterns_exist() {
    let mut config = Config::default();
    config.forbidden.patterns = vec!["cout".to_string()];

    let checkers = build_checkers(&config).unwrap();

    assert_eq!(names(&checkers).last(), Some(&"forbidden"));
}

#[test]
fn disabled_checkers_are_skipped() {
    let mut config = Config::default();
    config.ordering.enabled = false;
    config.documentation.enabled = false;

    let checkers = build_checkers(&config).unwrap();

    assert_eq!(names(&checkers), vec!["line-length", "spacing"]);
}

#[test]
fn invalid_forbidden_pattern_fails_the_build() {
    let mut config = Config::default();
    config.forbidden.patterns = vec!["[".to_string()];

    assert!(build_checkers(&config).is_err());
}

#[test]
fn source_file_splits_lines_without_terminators() {
    let file = SourceFile::new(Path::new("a.cpp"), "a\r\nb\n\nc", None);
    assert_eq!(file.lines, vec!["a", "b", "", "c"]);
}

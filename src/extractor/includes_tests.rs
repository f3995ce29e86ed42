use super::*;

fn scanner() -> IncludeScanner {
    IncludeScanner::new(&["allegro".to_string()])
}

#[test]
fn classifies_include_categories() {
    let scanner = scanner();

    assert_eq!(scanner.categorize("<algorithm>"), IncludeCategory::System);
    assert_eq!(
        scanner.categorize("<allegro5/allegro.h>"),
        IncludeCategory::FrameworkLibrary
    );
    assert_eq!(scanner.categorize("\"mob.h\""), IncludeCategory::Local);
}

#[test]
fn framework_prefix_only_counts_inside_brackets() {
    assert_eq!(
        scanner().categorize("\"allegro_utils.h\""),
        IncludeCategory::Local
    );
}

#[test]
fn records_name_and_line() {
    let source = "/*\n * header\n */\n\n#include <csignal>\n#include \"general_utils.h\"  \n";
    let lines: Vec<&str> = source.lines().collect();

    let includes = scanner().scan(&lines);

    assert_eq!(includes.len(), 2);
    assert_eq!(includes[0].name, "<csignal>");
    assert_eq!(includes[0].line, 5);
    assert_eq!(includes[1].name, "\"general_utils.h\"");
    assert_eq!(includes[1].line, 6);
    assert_eq!(includes[1].category, IncludeCategory::Local);
}

#[test]
fn ignores_commented_and_indented_includes() {
    let source = "//#include <map>\n    #include <set>\n#include <vector>\n";
    let lines: Vec<&str> = source.lines().collect();

    let includes = scanner().scan(&lines);

    assert_eq!(includes.len(), 1);
    assert_eq!(includes[0].name, "<vector>");
}

#[test]
fn custom_framework_prefixes() {
    let scanner = IncludeScanner::new(&["imgui".to_string(), "SDL".to_string()]);

    assert_eq!(
        scanner.categorize("<SDL2/SDL.h>"),
        IncludeCategory::FrameworkLibrary
    );
    assert_eq!(scanner.categorize("<allegro5/allegro.h>"), IncludeCategory::System);
}

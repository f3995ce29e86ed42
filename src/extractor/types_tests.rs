use super::*;

fn function(namespace: &str, name: &str) -> Function {
    Function::new(namespace.to_string(), name.to_string(), 1, Vec::new())
}

#[test]
fn full_name_joins_namespace() {
    assert_eq!(function("Mob", "tick").full_name(), "Mob::tick");
    assert_eq!(function("", "main").full_name(), "main");
}

#[test]
fn method_has_namespace() {
    assert!(function("Mob", "tick").is_method());
    assert!(!function("", "main").is_method());
}

#[test]
fn constructor_matches_last_scope_segment() {
    assert!(function("Mob", "Mob").is_constructor_or_destructor());
    assert!(function("gui::Button", "Button").is_constructor_or_destructor());
    assert!(!function("gui::Button", "gui").is_constructor_or_destructor());
}

#[test]
fn destructor_is_special() {
    assert!(function("Mob", "~Mob").is_constructor_or_destructor());
}

#[test]
fn initializer_list_name_is_special() {
    assert!(function("Base", "Derived() : Base").is_constructor_or_destructor());
    assert!(!function("Mob", " : x").is_constructor_or_destructor());
}

#[test]
fn free_function_is_never_a_constructor() {
    assert!(!function("", "main").is_constructor_or_destructor());
}

#[test]
fn operator_names_collapse_for_ordering() {
    assert_eq!(function("Point", "operator==").ordering_name(), "operator");
    assert_eq!(function("Point", "operator+").ordering_name(), "operator");
    assert_eq!(function("Point", "operator").ordering_name(), "operator");
    assert_eq!(function("Point", "operate").ordering_name(), "operate");
}

#[test]
fn include_categories_order_system_first() {
    assert!(IncludeCategory::System < IncludeCategory::FrameworkLibrary);
    assert!(IncludeCategory::FrameworkLibrary < IncludeCategory::Local);
}

#[test]
fn empty_model() {
    assert!(SymbolModel::default().is_empty());
}

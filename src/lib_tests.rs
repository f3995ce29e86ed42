use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_PROBLEMS_FOUND);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_PROBLEMS_FOUND, EXIT_CONFIG_ERROR);
}

#[test]
fn exit_code_values() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_PROBLEMS_FOUND, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

use crate::parser::tests::check;
use crate::parser::{ParseConfig, parse};

#[test]
fn deep_nesting_degrades_to_a_diagnostic() {
    let depth = 1000;
    let source = format!("RETURN {}1{};", "(".repeat(depth), ")".repeat(depth));
    let result = check(&source);
    assert_eq!(result.directives().len(), 0);
    assert!(
        result
            .errors()
            .iter()
            .any(|e| e.message().contains("too deeply nested")),
        "expected a depth diagnostic, got: {:?}",
        result.errors()
    );
}

#[test]
fn nesting_below_the_limit_parses() {
    let depth = 100;
    let source = format!("RETURN {}1{};", "(".repeat(depth), ")".repeat(depth));
    let result = check(&source);
    assert!(result.errors().is_empty());
    assert_eq!(result.directives().len(), 1);
}

#[test]
fn the_limit_is_configurable() {
    let config = ParseConfig::new().with_max_depth(8);
    let result = parse("RETURN ((((((((((1))))))))));", &config);
    assert!(!result.is_success());
    assert!(
        result
            .errors()
            .iter()
            .any(|e| e.message().contains("too deeply nested"))
    );
}

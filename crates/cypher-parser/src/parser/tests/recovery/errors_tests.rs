use crate::parser::tests::{check, errs};

#[test]
fn dangling_operator_reports_under_the_terminator() {
    let result = check("RETURN 1 +;");
    assert_eq!(result.directives().len(), 0);
    assert!(!result.is_success());
    assert_eq!(result.errors().len(), 1);

    let error = &result.errors()[0];
    assert_eq!(error.position().offset, 10);
    assert_eq!(error.position().line, 1);
    assert_eq!(error.position().column, 11);
    assert_eq!(error.context(), "RETURN 1 +;");
    assert_eq!(error.context_offset(), 10);
    assert!(error.message().contains("expected an expression"));
}

#[test]
fn error_rendering_carries_a_caret() {
    insta::assert_snapshot!(errs("RETURN 1 +;"), @r"
    Invalid input ';': expected an expression (line 1, column 11, offset 10):
    RETURN 1 +;
              ^
    ");
}

#[test]
fn bad_directive_does_not_hide_the_next_one() {
    let result = check("RETURN +; RETURN 2;");
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.directives().len(), 1);
    assert!(result.is_success());
}

#[test]
fn synchronizes_at_clause_keywords() {
    let result = check("MATCH (n) BOGUS RETURN n;");
    assert_eq!(result.directives().len(), 0);
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].message().contains("Invalid input 'BOGUS'"));
}

#[test]
fn multiple_errors_in_one_statement_stay_ordered() {
    let result = check("WOOF RETURN 1 MEOW;");
    assert!(result.errors().len() >= 2);
    let offsets: Vec<usize> = result.errors().iter().map(|e| e.position().offset).collect();
    let mut sorted = offsets.clone();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted);
    assert_eq!(result.directives().len(), 0);
}

#[test]
fn unterminated_string_is_a_lexical_error() {
    let result = check("RETURN \"abc;");
    assert_eq!(result.directives().len(), 0);
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].message().contains("unterminated string"));
}

#[test]
fn unterminated_block_comment_is_reported() {
    let result = check("RETURN /* oops;");
    assert!(!result.is_success());
    assert!(!result.errors().is_empty());
}

#[test]
fn empty_statements_produce_nothing() {
    let result = check(";;");
    assert_eq!(result.directives().len(), 0);
    assert!(result.errors().is_empty());
    assert!(!result.is_success());
}

#[test]
fn garbage_bytes_are_reported_not_fatal() {
    let result = check("RETURN \u{1} 1; RETURN 2;");
    assert!(!result.errors().is_empty());
    assert_eq!(result.directives().len(), 1);
}

use crate::parser::tests::check;

#[test]
fn errors_on_later_lines_carry_absolute_positions() {
    let result = check("RETURN 1;\nRETURN +;");
    assert_eq!(result.errors().len(), 1);
    let error = &result.errors()[0];
    assert_eq!(error.position().offset, 18);
    assert_eq!(error.position().line, 2);
    assert_eq!(error.position().column, 9);
    assert_eq!(error.context(), "RETURN +;");
    assert_eq!(error.context_offset(), 8);
}

#[test]
fn crlf_counts_as_one_line_break() {
    let result = check("RETURN 1;\r\nRETURN +;");
    assert_eq!(result.errors().len(), 1);
    let error = &result.errors()[0];
    assert_eq!(error.position().line, 2);
    assert_eq!(error.position().column, 9);
}

#[test]
fn multibyte_codepoints_advance_one_column() {
    // `ё` is two bytes; the dangling `+` error lands after it
    let result = check("RETURN `ё` +;");
    assert_eq!(result.errors().len(), 1);
    let error = &result.errors()[0];
    assert_eq!(error.position().line, 1);
    // R(1)E(2)T(3)U(4)R(5)N(6) (7)`(8)ё(9)`(10) (11)+(12);(13)
    assert_eq!(error.position().column, 13);
    assert_eq!(error.position().offset, 13);
}

#[test]
fn directive_ranges_are_absolute() {
    let result = check("RETURN 1;\nRETURN 2;");
    assert_eq!(result.directives().len(), 2);
    let second = result.directives()[1].range();
    assert_eq!(second.start, 10);
    assert_eq!(second.end, 19);
}

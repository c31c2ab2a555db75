use crate::parser::cst::SyntaxKind;
use crate::parser::tests::{check, cst};

#[test]
fn top_level_comments_are_directives() {
    insta::assert_snapshot!(cst("// hello\nRETURN 1;"), @r#"
    LineComment
      CommentLine "// hello"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Integer
              IntegerLiteral "1"
      Semicolon ";"
    "#);
}

#[test]
fn block_comment_directive() {
    insta::assert_snapshot!(cst("/* a */ RETURN 1;"), @r#"
    BlockComment
      CommentBlock "/* a */"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Integer
              IntegerLiteral "1"
      Semicolon ";"
    "#);
}

#[test]
fn comment_only_input_is_a_successful_parse() {
    let result = check("// just a note");
    assert!(result.errors().is_empty());
    assert!(result.is_success());
    assert_eq!(result.directives().len(), 1);
    assert_eq!(result.directives()[0].kind(), SyntaxKind::LineComment);
    assert!(result.directives()[0].is_comment());
}

#[test]
fn inner_comment_is_not_a_directive() {
    let result = check("RETURN /* c */ 1;");
    assert!(result.errors().is_empty());
    assert_eq!(result.directives().len(), 1);
    assert_eq!(result.directives()[0].kind(), SyntaxKind::Statement);
}

#[test]
fn trailing_comment_after_statement() {
    let result = check("RETURN 1; // done");
    assert!(result.errors().is_empty());
    assert_eq!(result.directives().len(), 2);
    assert_eq!(result.directives()[1].kind(), SyntaxKind::LineComment);
}

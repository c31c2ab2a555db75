use crate::parser::tests::cst;

#[test]
fn bare_command() {
    insta::assert_snapshot!(cst(":help"), @r#"
    Command
      Colon ":"
      String
        Id "help"
    "#);
}

#[test]
fn command_with_word_and_string_args() {
    insta::assert_snapshot!(cst(":play \"movies\" arg-2\n"), @r#"
    Command
      Colon ":"
      String
        Id "play"
      String
        StringLiteral "\"movies\""
      String
        Id "arg-2"
    "#);
}

#[test]
fn command_then_statement() {
    insta::assert_snapshot!(cst(":x\nRETURN 1;"), @r#"
    Command
      Colon ":"
      String
        Id "x"
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

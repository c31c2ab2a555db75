use crate::parser::tests::cst;

#[test]
fn explain_and_profile_options() {
    insta::assert_snapshot!(cst("EXPLAIN PROFILE RETURN 1;"), @r#"
    Statement
      ExplainOption
        KwExplain "EXPLAIN"
      ProfileOption
        KwProfile "PROFILE"
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
fn cypher_option_with_version_and_params() {
    insta::assert_snapshot!(cst("CYPHER 2.3 planner=cost RETURN 1;"), @r#"
    Statement
      CypherOption
        KwCypher "CYPHER"
        String
          FloatLiteral "2.3"
        CypherOptionParam
          String
            Id "planner"
          Eq "="
          String
            Id "cost"
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
fn two_directives_from_one_input() {
    insta::assert_snapshot!(cst("RETURN 1; RETURN 2;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Integer
              IntegerLiteral "1"
      Semicolon ";"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Integer
              IntegerLiteral "2"
      Semicolon ";"
    "#);
}

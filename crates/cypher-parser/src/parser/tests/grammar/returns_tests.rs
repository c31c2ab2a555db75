use crate::parser::tests::cst;

#[test]
fn return_integer() {
    insta::assert_snapshot!(cst("RETURN 1;"), @r#"
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
fn return_distinct_with_alias() {
    insta::assert_snapshot!(cst("RETURN DISTINCT 1 AS x;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          KwDistinct "DISTINCT"
          Projection
            Integer
              IntegerLiteral "1"
            KwAs "AS"
            Identifier
              Id "x"
      Semicolon ";"
    "#);
}

#[test]
fn return_star() {
    insta::assert_snapshot!(cst("RETURN *;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Star "*"
      Semicolon ";"
    "#);
}

#[test]
fn return_order_skip_limit() {
    insta::assert_snapshot!(cst("RETURN n ORDER BY n.age DESC SKIP 2 LIMIT 10;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "n"
          OrderBy
            KwOrder "ORDER"
            KwBy "BY"
            SortItem
              PropertyOperator
                Identifier
                  Id "n"
                Dot "."
                PropName
                  Id "age"
              KwDesc "DESC"
          KwSkip "SKIP"
          Integer
            IntegerLiteral "2"
          KwLimit "LIMIT"
          Integer
            IntegerLiteral "10"
      Semicolon ";"
    "#);
}

#[test]
fn return_without_terminator() {
    insta::assert_snapshot!(cst("RETURN 1"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Integer
              IntegerLiteral "1"
    "#);
}

use crate::parser::tests::cst;

#[test]
fn and_binds_tighter_than_or() {
    insta::assert_snapshot!(cst("RETURN a OR b AND c;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            BinaryOperator
              Identifier
                Id "a"
              KwOr "OR"
              BinaryOperator
                Identifier
                  Id "b"
                KwAnd "AND"
                Identifier
                  Id "c"
      Semicolon ";"
    "#);
}

#[test]
fn product_binds_tighter_than_sum() {
    insta::assert_snapshot!(cst("RETURN 1 + 2 * 3;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            BinaryOperator
              Integer
                IntegerLiteral "1"
              Plus "+"
              BinaryOperator
                Integer
                  IntegerLiteral "2"
                Star "*"
                Integer
                  IntegerLiteral "3"
      Semicolon ";"
    "#);
}

#[test]
fn unary_minus() {
    insta::assert_snapshot!(cst("RETURN -1 - -2;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            BinaryOperator
              UnaryOperator
                Minus "-"
                Integer
                  IntegerLiteral "1"
              Minus "-"
              UnaryOperator
                Minus "-"
                Integer
                  IntegerLiteral "2"
      Semicolon ";"
    "#);
}

#[test]
fn comparisons_chain_flat() {
    insta::assert_snapshot!(cst("RETURN 1 < 2 <= 3;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Comparison
              Integer
                IntegerLiteral "1"
              Lt "<"
              Integer
                IntegerLiteral "2"
              Lte "<="
              Integer
                IntegerLiteral "3"
      Semicolon ";"
    "#);
}

#[test]
fn string_predicates_and_null_test() {
    insta::assert_snapshot!(cst(r#"RETURN a STARTS WITH "x" AND b IS NOT NULL;"#), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            BinaryOperator
              BinaryOperator
                Identifier
                  Id "a"
                KwStarts "STARTS"
                KwWith "WITH"
                String
                  StringLiteral "\"x\""
              KwAnd "AND"
              UnaryOperator
                Identifier
                  Id "b"
                KwIs "IS"
                KwNot "NOT"
                KwNull "NULL"
      Semicolon ";"
    "#);
}

#[test]
fn apply_and_apply_all() {
    insta::assert_snapshot!(cst("RETURN count(*), collect(DISTINCT x);"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            ApplyAllOperator
              FunctionName
                Id "count"
              ParenOpen "("
              Star "*"
              ParenClose ")"
          Comma ","
          Projection
            ApplyOperator
              FunctionName
                Id "collect"
              ParenOpen "("
              KwDistinct "DISTINCT"
              Identifier
                Id "x"
              ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn simple_case() {
    insta::assert_snapshot!(cst(r#"RETURN CASE x WHEN 1 THEN "a" ELSE "b" END;"#), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Case
              KwCase "CASE"
              Identifier
                Id "x"
              KwWhen "WHEN"
              Integer
                IntegerLiteral "1"
              KwThen "THEN"
              String
                StringLiteral "\"a\""
              KwElse "ELSE"
              String
                StringLiteral "\"b\""
              KwEnd "END"
      Semicolon ";"
    "#);
}

#[test]
fn list_comprehension() {
    insta::assert_snapshot!(cst("RETURN [x IN list WHERE x > 2 | x + 1];"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            ListComprehension
              BracketOpen "["
              Identifier
                Id "x"
              KwIn "IN"
              Identifier
                Id "list"
              KwWhere "WHERE"
              Comparison
                Identifier
                  Id "x"
                Gt ">"
                Integer
                  IntegerLiteral "2"
              Pipe "|"
              BinaryOperator
                Identifier
                  Id "x"
                Plus "+"
                Integer
                  IntegerLiteral "1"
              BracketClose "]"
      Semicolon ";"
    "#);
}

#[test]
fn collection_slice() {
    insta::assert_snapshot!(cst("RETURN [1, 2][0..1];"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            SliceOperator
              Collection
                BracketOpen "["
                Integer
                  IntegerLiteral "1"
                Comma ","
                Integer
                  IntegerLiteral "2"
                BracketClose "]"
              BracketOpen "["
              Integer
                IntegerLiteral "0"
              DotDot ".."
              Integer
                IntegerLiteral "1"
              BracketClose "]"
      Semicolon ";"
    "#);
}

#[test]
fn map_literal() {
    insta::assert_snapshot!(cst(r#"RETURN {name: "A", age: 1};"#), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Map
              BraceOpen "{"
              PropName
                Id "name"
              Colon ":"
              String
                StringLiteral "\"A\""
              Comma ","
              PropName
                Id "age"
              Colon ":"
              Integer
                IntegerLiteral "1"
              BraceClose "}"
      Semicolon ";"
    "#);
}

#[test]
fn parameters_both_forms() {
    insta::assert_snapshot!(cst("RETURN $p, {legacy};"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Parameter
              Param "$p"
          Comma ","
          Projection
            Parameter
              BraceOpen "{"
              Id "legacy"
              BraceClose "}"
      Semicolon ";"
    "#);
}

#[test]
fn labels_test_on_expression() {
    insta::assert_snapshot!(cst("RETURN n:Person;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            LabelsOperator
              Identifier
                Id "n"
              Colon ":"
              Label
                Id "Person"
      Semicolon ";"
    "#);
}

#[test]
fn reduce_expression() {
    insta::assert_snapshot!(cst("RETURN reduce(acc = 0, x IN list | acc + x);"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Reduce
              KwReduce "reduce"
              ParenOpen "("
              Identifier
                Id "acc"
              Eq "="
              Integer
                IntegerLiteral "0"
              Comma ","
              Identifier
                Id "x"
              KwIn "IN"
              Identifier
                Id "list"
              Pipe "|"
              BinaryOperator
                Identifier
                  Id "acc"
                Plus "+"
                Identifier
                  Id "x"
              ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn all_predicate() {
    insta::assert_snapshot!(cst("RETURN all(x IN xs WHERE x > 0);"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            All
              KwAll "all"
              ParenOpen "("
              Identifier
                Id "x"
              KwIn "IN"
              Identifier
                Id "xs"
              KwWhere "WHERE"
              Comparison
                Identifier
                  Id "x"
                Gt ">"
                Integer
                  IntegerLiteral "0"
              ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn parenthesized_expression_has_no_wrapper() {
    insta::assert_snapshot!(cst("RETURN (1 + 2) * 3;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            BinaryOperator
              ParenOpen "("
              BinaryOperator
                Integer
                  IntegerLiteral "1"
                Plus "+"
                Integer
                  IntegerLiteral "2"
              ParenClose ")"
              Star "*"
              Integer
                IntegerLiteral "3"
      Semicolon ";"
    "#);
}

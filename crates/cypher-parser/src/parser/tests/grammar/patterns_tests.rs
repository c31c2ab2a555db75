use crate::parser::tests::cst;

#[test]
fn node_pattern_with_labels_and_properties() {
    insta::assert_snapshot!(cst("MATCH (n:A:B {x: 1}) RETURN n;"), @r#"
    Statement
      Query
        Match
          KwMatch "MATCH"
          Pattern
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "n"
                Colon ":"
                Label
                  Id "A"
                Colon ":"
                Label
                  Id "B"
                Map
                  BraceOpen "{"
                  PropName
                    Id "x"
                  Colon ":"
                  Integer
                    IntegerLiteral "1"
                  BraceClose "}"
                ParenClose ")"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "n"
      Semicolon ";"
    "#);
}

#[test]
fn rel_pattern_with_type_and_range() {
    insta::assert_snapshot!(cst("MATCH (a)-[r:KNOWS*1..2]->(b) RETURN r;"), @r#"
    Statement
      Query
        Match
          KwMatch "MATCH"
          Pattern
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "a"
                ParenClose ")"
              RelPattern
                Minus "-"
                BracketOpen "["
                Identifier
                  Id "r"
                Colon ":"
                Reltype
                  Id "KNOWS"
                Range
                  Star "*"
                  Integer
                    IntegerLiteral "1"
                  DotDot ".."
                  Integer
                    IntegerLiteral "2"
                BracketClose "]"
                Minus "-"
                Gt ">"
              NodePattern
                ParenOpen "("
                Identifier
                  Id "b"
                ParenClose ")"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "r"
      Semicolon ";"
    "#);
}

#[test]
fn named_shortest_path() {
    insta::assert_snapshot!(cst("MATCH p = shortestPath((a)--(b)) RETURN p;"), @r#"
    Statement
      Query
        Match
          KwMatch "MATCH"
          Pattern
            NamedPath
              Identifier
                Id "p"
              Eq "="
              ShortestPath
                KwShortestPath "shortestPath"
                ParenOpen "("
                PatternPath
                  NodePattern
                    ParenOpen "("
                    Identifier
                      Id "a"
                    ParenClose ")"
                  RelPattern
                    Minus "-"
                    Minus "-"
                  NodePattern
                    ParenOpen "("
                    Identifier
                      Id "b"
                    ParenClose ")"
                ParenClose ")"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "p"
      Semicolon ";"
    "#);
}

#[test]
fn inbound_rel_shorthand() {
    insta::assert_snapshot!(cst("MATCH (a)<--(b) RETURN a;"), @r#"
    Statement
      Query
        Match
          KwMatch "MATCH"
          Pattern
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "a"
                ParenClose ")"
              RelPattern
                Lt "<"
                Minus "-"
                Minus "-"
              NodePattern
                ParenOpen "("
                Identifier
                  Id "b"
                ParenClose ")"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "a"
      Semicolon ";"
    "#);
}

#[test]
fn pattern_expression_in_where() {
    insta::assert_snapshot!(cst("MATCH (n) WHERE (n)-->(m) RETURN n;"), @r#"
    Statement
      Query
        Match
          KwMatch "MATCH"
          Pattern
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "n"
                ParenClose ")"
          KwWhere "WHERE"
          PatternPath
            NodePattern
              ParenOpen "("
              Identifier
                Id "n"
              ParenClose ")"
            RelPattern
              Minus "-"
              Minus "-"
              Gt ">"
            NodePattern
              ParenOpen "("
              Identifier
                Id "m"
              ParenClose ")"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "n"
      Semicolon ";"
    "#);
}

#[test]
fn rel_with_parameter_properties() {
    insta::assert_snapshot!(cst("MATCH (a)-[r $props]-(b) RETURN r;"), @r#"
    Statement
      Query
        Match
          KwMatch "MATCH"
          Pattern
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "a"
                ParenClose ")"
              RelPattern
                Minus "-"
                BracketOpen "["
                Identifier
                  Id "r"
                Parameter
                  Param "$props"
                BracketClose "]"
                Minus "-"
              NodePattern
                ParenOpen "("
                Identifier
                  Id "b"
                ParenClose ")"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "r"
      Semicolon ";"
    "#);
}

use crate::parser::tests::cst;

#[test]
fn create_index() {
    insta::assert_snapshot!(cst("CREATE INDEX ON :Person(name);"), @r#"
    Statement
      CreateNodePropIndex
        KwCreate "CREATE"
        KwIndex "INDEX"
        KwOn "ON"
        Colon ":"
        Label
          Id "Person"
        ParenOpen "("
        PropName
          Id "name"
        ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn drop_index() {
    insta::assert_snapshot!(cst("DROP INDEX ON :Person(name);"), @r#"
    Statement
      DropNodePropIndex
        KwDrop "DROP"
        KwIndex "INDEX"
        KwOn "ON"
        Colon ":"
        Label
          Id "Person"
        ParenOpen "("
        PropName
          Id "name"
        ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn create_unique_constraint() {
    insta::assert_snapshot!(cst("CREATE CONSTRAINT ON (n:Book) ASSERT n.isbn IS UNIQUE;"), @r#"
    Statement
      CreateUniqueNodePropConstraint
        KwCreate "CREATE"
        KwConstraint "CONSTRAINT"
        KwOn "ON"
        ParenOpen "("
        Identifier
          Id "n"
        Colon ":"
        Label
          Id "Book"
        ParenClose ")"
        KwAssert "ASSERT"
        PropertyOperator
          Identifier
            Id "n"
          Dot "."
          PropName
            Id "isbn"
        KwIs "IS"
        KwUnique "UNIQUE"
      Semicolon ";"
    "#);
}

#[test]
fn drop_unique_constraint() {
    insta::assert_snapshot!(cst("DROP CONSTRAINT ON (n:Book) ASSERT n.isbn IS UNIQUE;"), @r#"
    Statement
      DropUniqueNodePropConstraint
        KwDrop "DROP"
        KwConstraint "CONSTRAINT"
        KwOn "ON"
        ParenOpen "("
        Identifier
          Id "n"
        Colon ":"
        Label
          Id "Book"
        ParenClose ")"
        KwAssert "ASSERT"
        PropertyOperator
          Identifier
            Id "n"
          Dot "."
          PropName
            Id "isbn"
        KwIs "IS"
        KwUnique "UNIQUE"
      Semicolon ";"
    "#);
}

#[test]
fn create_node_existence_constraint() {
    insta::assert_snapshot!(cst("CREATE CONSTRAINT ON (n:Book) ASSERT exists(n.isbn);"), @r#"
    Statement
      CreateNodePropExistenceConstraint
        KwCreate "CREATE"
        KwConstraint "CONSTRAINT"
        KwOn "ON"
        ParenOpen "("
        Identifier
          Id "n"
        Colon ":"
        Label
          Id "Book"
        ParenClose ")"
        KwAssert "ASSERT"
        Id "exists"
        ParenOpen "("
        PropertyOperator
          Identifier
            Id "n"
          Dot "."
          PropName
            Id "isbn"
        ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn create_rel_existence_constraint() {
    insta::assert_snapshot!(cst("CREATE CONSTRAINT ON ()-[r:KNOWS]-() ASSERT exists(r.since);"), @r#"
    Statement
      CreateRelPropExistenceConstraint
        KwCreate "CREATE"
        KwConstraint "CONSTRAINT"
        KwOn "ON"
        ParenOpen "("
        ParenClose ")"
        Minus "-"
        BracketOpen "["
        Identifier
          Id "r"
        Colon ":"
        Reltype
          Id "KNOWS"
        BracketClose "]"
        Minus "-"
        ParenOpen "("
        ParenClose ")"
        KwAssert "ASSERT"
        Id "exists"
        ParenOpen "("
        PropertyOperator
          Identifier
            Id "r"
          Dot "."
          PropName
            Id "since"
        ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn create_unique_pattern_is_a_clause_not_a_schema_command() {
    insta::assert_snapshot!(cst("CREATE UNIQUE (a)-[:R]->(b);"), @r#"
    Statement
      Query
        Create
          KwCreate "CREATE"
          KwUnique "UNIQUE"
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
                Colon ":"
                Reltype
                  Id "R"
                BracketClose "]"
                Minus "-"
                Gt ">"
              NodePattern
                ParenOpen "("
                Identifier
                  Id "b"
                ParenClose ")"
      Semicolon ";"
    "#);
}

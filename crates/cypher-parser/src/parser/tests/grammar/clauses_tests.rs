use crate::parser::tests::cst;

#[test]
fn optional_match_with_where() {
    insta::assert_snapshot!(cst("OPTIONAL MATCH (n) WHERE n.age > 21 RETURN n;"), @r#"
    Statement
      Query
        Match
          KwOptional "OPTIONAL"
          KwMatch "MATCH"
          Pattern
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "n"
                ParenClose ")"
          KwWhere "WHERE"
          Comparison
            PropertyOperator
              Identifier
                Id "n"
              Dot "."
              PropName
                Id "age"
            Gt ">"
            Integer
              IntegerLiteral "21"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "n"
      Semicolon ";"
    "#);
}

#[test]
fn create_multiple_paths() {
    insta::assert_snapshot!(cst("CREATE (n), (m);"), @r#"
    Statement
      Query
        Create
          KwCreate "CREATE"
          Pattern
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "n"
                ParenClose ")"
            Comma ","
            PatternPath
              NodePattern
                ParenOpen "("
                Identifier
                  Id "m"
                ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn merge_with_on_create_action() {
    insta::assert_snapshot!(cst("MERGE (n:Person) ON CREATE SET n.created = 1;"), @r#"
    Statement
      Query
        Merge
          KwMerge "MERGE"
          PatternPath
            NodePattern
              ParenOpen "("
              Identifier
                Id "n"
              Colon ":"
              Label
                Id "Person"
              ParenClose ")"
          OnCreate
            KwOn "ON"
            KwCreate "CREATE"
            KwSet "SET"
            SetProperty
              PropertyOperator
                Identifier
                  Id "n"
                Dot "."
                PropName
                  Id "created"
              Eq "="
              Integer
                IntegerLiteral "1"
      Semicolon ";"
    "#);
}

#[test]
fn set_item_variants() {
    insta::assert_snapshot!(cst("SET n = {a: 1}, n += $m, n:Label, n.p = 2;"), @r#"
    Statement
      Query
        Set
          KwSet "SET"
          SetAllProperties
            Identifier
              Id "n"
            Eq "="
            Map
              BraceOpen "{"
              PropName
                Id "a"
              Colon ":"
              Integer
                IntegerLiteral "1"
              BraceClose "}"
          Comma ","
          MergeProperties
            Identifier
              Id "n"
            PlusEq "+="
            Parameter
              Param "$m"
          Comma ","
          SetLabels
            Identifier
              Id "n"
            Colon ":"
            Label
              Id "Label"
          Comma ","
          SetProperty
            PropertyOperator
              Identifier
                Id "n"
              Dot "."
              PropName
                Id "p"
            Eq "="
            Integer
              IntegerLiteral "2"
      Semicolon ";"
    "#);
}

#[test]
fn detach_delete() {
    insta::assert_snapshot!(cst("MATCH (n) DETACH DELETE n;"), @r#"
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
        Delete
          KwDetach "DETACH"
          KwDelete "DELETE"
          Identifier
            Id "n"
      Semicolon ";"
    "#);
}

#[test]
fn remove_labels_and_property() {
    insta::assert_snapshot!(cst("REMOVE n:Label, n.prop;"), @r#"
    Statement
      Query
        Remove
          KwRemove "REMOVE"
          RemoveLabels
            Identifier
              Id "n"
            Colon ":"
            Label
              Id "Label"
          Comma ","
          RemoveProperty
            PropertyOperator
              Identifier
                Id "n"
              Dot "."
              PropName
                Id "prop"
      Semicolon ";"
    "#);
}

#[test]
fn foreach_with_updating_clause() {
    insta::assert_snapshot!(cst("FOREACH (x IN xs | SET x.done = true);"), @r#"
    Statement
      Query
        Foreach
          KwForeach "FOREACH"
          ParenOpen "("
          Identifier
            Id "x"
          KwIn "IN"
          Identifier
            Id "xs"
          Pipe "|"
          Set
            KwSet "SET"
            SetProperty
              PropertyOperator
                Identifier
                  Id "x"
                Dot "."
                PropName
                  Id "done"
              Eq "="
              True
                KwTrue "true"
          ParenClose ")"
      Semicolon ";"
    "#);
}

#[test]
fn with_projections_and_where() {
    insta::assert_snapshot!(cst("MATCH (n) WITH n.x AS x WHERE x > 1 RETURN x;"), @r#"
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
        With
          KwWith "WITH"
          Projection
            PropertyOperator
              Identifier
                Id "n"
              Dot "."
              PropName
                Id "x"
            KwAs "AS"
            Identifier
              Id "x"
          KwWhere "WHERE"
          Comparison
            Identifier
              Id "x"
            Gt ">"
            Integer
              IntegerLiteral "1"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "x"
      Semicolon ";"
    "#);
}

#[test]
fn unwind_collection() {
    insta::assert_snapshot!(cst("UNWIND [1, 2] AS x RETURN x;"), @r#"
    Statement
      Query
        Unwind
          KwUnwind "UNWIND"
          Collection
            BracketOpen "["
            Integer
              IntegerLiteral "1"
            Comma ","
            Integer
              IntegerLiteral "2"
            BracketClose "]"
          KwAs "AS"
          Identifier
            Id "x"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "x"
      Semicolon ";"
    "#);
}

#[test]
fn call_with_yield() {
    insta::assert_snapshot!(cst("CALL db.labels() YIELD label RETURN label;"), @r#"
    Statement
      Query
        Call
          KwCall "CALL"
          ProcName
            Id "db"
            Dot "."
            Id "labels"
          ParenOpen "("
          ParenClose ")"
          KwYield "YIELD"
          Projection
            Identifier
              Id "label"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "label"
      Semicolon ";"
    "#);
}

#[test]
fn load_csv_under_periodic_commit() {
    let source =
        "USING PERIODIC COMMIT 500 LOAD CSV WITH HEADERS FROM \"f.csv\" AS line RETURN line;";
    insta::assert_snapshot!(cst(source), @r#"
    Statement
      Query
        UsingPeriodicCommit
          KwUsing "USING"
          KwPeriodic "PERIODIC"
          KwCommit "COMMIT"
          Integer
            IntegerLiteral "500"
        LoadCsv
          KwLoad "LOAD"
          KwCsv "CSV"
          KwWith "WITH"
          KwHeaders "HEADERS"
          KwFrom "FROM"
          String
            StringLiteral "\"f.csv\""
          KwAs "AS"
          Identifier
            Id "line"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "line"
      Semicolon ";"
    "#);
}

#[test]
fn start_point_forms() {
    insta::assert_snapshot!(cst("START n=node(*), m=node(1, 2), i=node:idx(key = \"v\") RETURN n;"), @r#"
    Statement
      Query
        Start
          KwStart "START"
          AllNodesScan
            Identifier
              Id "n"
            Eq "="
            KwNode "node"
            ParenOpen "("
            Star "*"
            ParenClose ")"
          Comma ","
          NodeIdLookup
            Identifier
              Id "m"
            Eq "="
            KwNode "node"
            ParenOpen "("
            Integer
              IntegerLiteral "1"
            Comma ","
            Integer
              IntegerLiteral "2"
            ParenClose ")"
          Comma ","
          NodeIndexLookup
            Identifier
              Id "i"
            Eq "="
            KwNode "node"
            Colon ":"
            IndexName
              Id "idx"
            ParenOpen "("
            PropName
              Id "key"
            Eq "="
            String
              StringLiteral "\"v\""
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
fn union_all_combines_queries() {
    insta::assert_snapshot!(cst("RETURN 1 UNION ALL RETURN 2;"), @r#"
    Statement
      Query
        Return
          KwReturn "RETURN"
          Projection
            Integer
              IntegerLiteral "1"
        Union
          KwUnion "UNION"
          KwAll "ALL"
        Return
          KwReturn "RETURN"
          Projection
            Integer
              IntegerLiteral "2"
      Semicolon ";"
    "#);
}

#[test]
fn match_with_index_hint() {
    insta::assert_snapshot!(cst("MATCH (n:A) USING INDEX n:A(x) WHERE n.x = 1 RETURN n;"), @r#"
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
                ParenClose ")"
          UsingIndexHint
            KwUsing "USING"
            KwIndex "INDEX"
            Identifier
              Id "n"
            Colon ":"
            Label
              Id "A"
            ParenOpen "("
            PropName
              Id "x"
            ParenClose ")"
          KwWhere "WHERE"
          Comparison
            PropertyOperator
              Identifier
                Id "n"
              Dot "."
              PropName
                Id "x"
            Eq "="
            Integer
              IntegerLiteral "1"
        Return
          KwReturn "RETURN"
          Projection
            Identifier
              Id "n"
      Semicolon ";"
    "#);
}

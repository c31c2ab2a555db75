//! Directive roots, statements, statement options and schema commands.

use super::super::core::Parser;
use super::super::cst::token_sets::CLAUSE_START;
use super::super::cst::{SyntaxKind, TokenSet};

const STATEMENT_RECOVERY: TokenSet =
    CLAUSE_START.union(TokenSet::new(&[SyntaxKind::Semicolon]));

impl Parser<'_> {
    /// Parse one directive's tokens into a `Root` tree.
    ///
    /// The root holds top-level comments (wrapped as comment nodes) and at
    /// most one statement; the segmenter guarantees nothing significant
    /// follows the statement terminator.
    pub(crate) fn parse_directive_root(&mut self) {
        self.start_node(SyntaxKind::Root);
        loop {
            self.bump_outer_trivia();
            match self.current() {
                SyntaxKind::Eof => break,
                // A bare terminator is an empty directive; keep the token,
                // produce nothing.
                SyntaxKind::Semicolon => {
                    self.bump();
                }
                _ => self.parse_statement(),
            }
        }
        self.finish_node();
    }

    fn parse_statement(&mut self) {
        self.start_node(SyntaxKind::Statement);
        self.parse_statement_options();
        match self.current() {
            SyntaxKind::KwCreate
                if matches!(
                    self.peek_nth(1),
                    SyntaxKind::KwIndex | SyntaxKind::KwConstraint
                ) =>
            {
                self.parse_schema_command()
            }
            SyntaxKind::KwDrop => self.parse_schema_command(),
            kind if CLAUSE_START.contains(kind) => self.parse_query(),
            SyntaxKind::Semicolon | SyntaxKind::Eof => {
                self.expected("a query or schema command");
            }
            _ => {
                self.expected("a query or schema command");
                self.synchronize(STATEMENT_RECOVERY);
                if self.at_set(CLAUSE_START) {
                    self.parse_query();
                }
            }
        }
        if !self.eat(SyntaxKind::Semicolon) && !self.eof() {
            self.expected("';'");
            self.synchronize(TokenSet::new(&[SyntaxKind::Semicolon]));
            self.eat(SyntaxKind::Semicolon);
        }
        self.finish_node();
    }

    fn parse_statement_options(&mut self) {
        loop {
            match self.current() {
                SyntaxKind::KwCypher => self.parse_cypher_option(),
                SyntaxKind::KwExplain => self.wrap_token(SyntaxKind::ExplainOption),
                SyntaxKind::KwProfile => self.wrap_token(SyntaxKind::ProfileOption),
                _ => break,
            }
        }
    }

    /// `CYPHER [version] [name=value ...]`
    fn parse_cypher_option(&mut self) {
        self.start_node(SyntaxKind::CypherOption);
        self.bump(); // CYPHER
        if matches!(
            self.current(),
            SyntaxKind::IntegerLiteral | SyntaxKind::FloatLiteral
        ) {
            self.wrap_token(SyntaxKind::String);
        }
        while self.at_identifier() && self.peek_nth(1) == SyntaxKind::Eq {
            self.parse_cypher_option_param();
        }
        self.finish_node();
    }

    fn parse_cypher_option_param(&mut self) {
        self.start_node(SyntaxKind::CypherOptionParam);
        self.wrap_token(SyntaxKind::String); // name
        self.eat(SyntaxKind::Eq);
        match self.current() {
            SyntaxKind::Id
            | SyntaxKind::EscapedId
            | SyntaxKind::StringLiteral
            | SyntaxKind::IntegerLiteral
            | SyntaxKind::FloatLiteral => self.wrap_token(SyntaxKind::String),
            _ => self.expected("an option value"),
        }
        self.finish_node();
    }

    /// `CREATE INDEX ON`, `DROP INDEX ON`, `CREATE CONSTRAINT ON`,
    /// `DROP CONSTRAINT ON`.
    fn parse_schema_command(&mut self) {
        let creating = self.at(SyntaxKind::KwCreate);
        if self.peek_nth(1) == SyntaxKind::KwIndex {
            let kind = if creating {
                SyntaxKind::CreateNodePropIndex
            } else {
                SyntaxKind::DropNodePropIndex
            };
            self.start_node(kind);
            self.bump(); // CREATE | DROP
            self.eat(SyntaxKind::KwIndex);
            self.expect(SyntaxKind::KwOn, "'ON'");
            self.expect(SyntaxKind::Colon, "':'");
            self.parse_name(SyntaxKind::Label, "a label");
            self.expect(SyntaxKind::ParenOpen, "'('");
            self.parse_name(SyntaxKind::PropName, "a property name");
            self.expect(SyntaxKind::ParenClose, "')'");
            self.finish_node();
            return;
        }
        self.parse_constraint(creating);
    }

    /// The constraint kind is only known once `ASSERT` has been read, so the
    /// node wraps retroactively from a checkpoint.
    fn parse_constraint(&mut self, creating: bool) {
        let checkpoint = self.checkpoint();
        self.bump(); // CREATE | DROP
        if !self.expect(SyntaxKind::KwConstraint, "'CONSTRAINT'") {
            // DROP of something else entirely
            self.start_node_at(checkpoint, SyntaxKind::Error);
            self.synchronize(TokenSet::new(&[SyntaxKind::Semicolon]));
            self.finish_node();
            return;
        }
        self.expect(SyntaxKind::KwOn, "'ON'");

        let on_relationship =
            self.at(SyntaxKind::ParenOpen) && self.peek_nth(1) == SyntaxKind::ParenClose;
        if on_relationship {
            // ()-[r:TYPE]-()
            self.bump(); // (
            self.eat(SyntaxKind::ParenClose);
            self.expect(SyntaxKind::Minus, "'-'");
            self.expect(SyntaxKind::BracketOpen, "'['");
            self.parse_identifier();
            self.expect(SyntaxKind::Colon, "':'");
            self.parse_name(SyntaxKind::Reltype, "a relationship type");
            self.expect(SyntaxKind::BracketClose, "']'");
            self.expect(SyntaxKind::Minus, "'-'");
            self.expect(SyntaxKind::ParenOpen, "'('");
            self.expect(SyntaxKind::ParenClose, "')'");
        } else {
            // (identifier:Label)
            self.expect(SyntaxKind::ParenOpen, "'('");
            self.parse_identifier();
            self.expect(SyntaxKind::Colon, "':'");
            self.parse_name(SyntaxKind::Label, "a label");
            self.expect(SyntaxKind::ParenClose, "')'");
        }

        self.expect(SyntaxKind::KwAssert, "'ASSERT'");

        let existence = self.at(SyntaxKind::Id)
            && self.current_text().eq_ignore_ascii_case("exists")
            && self.peek_nth(1) == SyntaxKind::ParenOpen;
        let kind = if existence {
            self.bump(); // exists
            self.eat(SyntaxKind::ParenOpen);
            self.parse_expression();
            self.expect(SyntaxKind::ParenClose, "')'");
            match (creating, on_relationship) {
                (true, false) => SyntaxKind::CreateNodePropExistenceConstraint,
                (false, false) => SyntaxKind::DropNodePropExistenceConstraint,
                (true, true) => SyntaxKind::CreateRelPropExistenceConstraint,
                (false, true) => SyntaxKind::DropRelPropExistenceConstraint,
            }
        } else {
            self.parse_postfix_expr();
            self.expect(SyntaxKind::KwIs, "'IS'");
            self.expect(SyntaxKind::KwUnique, "'UNIQUE'");
            if creating {
                SyntaxKind::CreateUniqueNodePropConstraint
            } else {
                SyntaxKind::DropUniqueNodePropConstraint
            }
        };
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }
}

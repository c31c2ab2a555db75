//! Query clauses.

use super::super::core::Parser;
use super::super::cst::token_sets::{CLAUSE_START, EXPR_FIRST};
use super::super::cst::{SyntaxKind, TokenSet};

const CLAUSE_RECOVERY: TokenSet =
    CLAUSE_START.union(TokenSet::new(&[SyntaxKind::Semicolon]));

impl Parser<'_> {
    /// `query := query-option* clause+` - clauses run until the statement
    /// terminator. A token that starts no clause puts the parser into
    /// synchronization and parsing resumes at the next clause keyword.
    pub(super) fn parse_query(&mut self) {
        self.start_node(SyntaxKind::Query);
        while self.at(SyntaxKind::KwUsing) && self.peek_nth(1) == SyntaxKind::KwPeriodic {
            self.parse_using_periodic_commit();
        }
        loop {
            match self.current() {
                SyntaxKind::Semicolon | SyntaxKind::Eof => break,
                kind if CLAUSE_START.contains(kind) => self.parse_clause(),
                _ => {
                    self.expected("a clause");
                    self.synchronize(CLAUSE_RECOVERY);
                }
            }
        }
        self.finish_node();
    }

    fn parse_using_periodic_commit(&mut self) {
        self.start_node(SyntaxKind::UsingPeriodicCommit);
        self.bump(); // USING
        self.eat(SyntaxKind::KwPeriodic);
        self.expect(SyntaxKind::KwCommit, "'COMMIT'");
        if self.at(SyntaxKind::IntegerLiteral) {
            self.wrap_token(SyntaxKind::Integer);
        }
        self.finish_node();
    }

    fn parse_clause(&mut self) {
        match self.current() {
            SyntaxKind::KwOptional | SyntaxKind::KwMatch => self.parse_match(),
            SyntaxKind::KwLoad => self.parse_load_csv(),
            SyntaxKind::KwStart => self.parse_start(),
            SyntaxKind::KwCreate => self.parse_create(),
            SyntaxKind::KwMerge => self.parse_merge(),
            SyntaxKind::KwSet => self.parse_set(),
            SyntaxKind::KwDetach | SyntaxKind::KwDelete => self.parse_delete(),
            SyntaxKind::KwRemove => self.parse_remove(),
            SyntaxKind::KwForeach => self.parse_foreach(),
            SyntaxKind::KwWith => self.parse_with(),
            SyntaxKind::KwUnwind => self.parse_unwind(),
            SyntaxKind::KwCall => self.parse_call(),
            SyntaxKind::KwReturn => self.parse_return(),
            SyntaxKind::KwUnion => self.parse_union(),
            SyntaxKind::KwUsing => {
                // USING PERIODIC COMMIT is handled at query level and hints
                // inside MATCH; a stray USING must be consumed here or the
                // clause loop would see it forever.
                self.expected_and_bump("a clause");
            }
            kind => unreachable!("parse_clause called on non-clause token {kind:?}"),
        }
    }

    fn parse_match(&mut self) {
        self.start_node(SyntaxKind::Match);
        self.eat(SyntaxKind::KwOptional);
        self.expect(SyntaxKind::KwMatch, "'MATCH'");
        self.parse_pattern();
        while self.at(SyntaxKind::KwUsing) && self.peek_nth(1) != SyntaxKind::KwPeriodic {
            self.parse_match_hint();
        }
        if self.eat(SyntaxKind::KwWhere) {
            self.parse_expression();
        }
        self.finish_node();
    }

    /// `USING INDEX n:Label(prop)` | `USING JOIN ON n, m` | `USING SCAN n:Label`
    fn parse_match_hint(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump(); // USING
        match self.current() {
            SyntaxKind::KwIndex => {
                self.bump();
                self.start_node_at(checkpoint, SyntaxKind::UsingIndexHint);
                self.parse_identifier();
                self.expect(SyntaxKind::Colon, "':'");
                self.parse_name(SyntaxKind::Label, "a label");
                self.expect(SyntaxKind::ParenOpen, "'('");
                self.parse_name(SyntaxKind::PropName, "a property name");
                self.expect(SyntaxKind::ParenClose, "')'");
                self.finish_node();
            }
            SyntaxKind::KwJoin => {
                self.bump();
                self.start_node_at(checkpoint, SyntaxKind::UsingJoinHint);
                self.expect(SyntaxKind::KwOn, "'ON'");
                self.parse_identifier();
                while self.eat(SyntaxKind::Comma) {
                    self.parse_identifier();
                }
                self.finish_node();
            }
            SyntaxKind::KwScan => {
                self.bump();
                self.start_node_at(checkpoint, SyntaxKind::UsingScanHint);
                self.parse_identifier();
                self.expect(SyntaxKind::Colon, "':'");
                self.parse_name(SyntaxKind::Label, "a label");
                self.finish_node();
            }
            _ => {
                self.start_node_at(checkpoint, SyntaxKind::Error);
                self.expected("'INDEX', 'JOIN' or 'SCAN'");
                self.finish_node();
            }
        }
    }

    fn parse_create(&mut self) {
        self.start_node(SyntaxKind::Create);
        self.bump(); // CREATE
        self.eat(SyntaxKind::KwUnique);
        self.parse_pattern();
        self.finish_node();
    }

    fn parse_merge(&mut self) {
        self.start_node(SyntaxKind::Merge);
        self.bump(); // MERGE
        self.parse_pattern_path();
        while self.at(SyntaxKind::KwOn) {
            self.parse_merge_action();
        }
        self.finish_node();
    }

    /// `ON MATCH SET ...` | `ON CREATE SET ...`
    fn parse_merge_action(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump(); // ON
        let kind = match self.current() {
            SyntaxKind::KwMatch => SyntaxKind::OnMatch,
            SyntaxKind::KwCreate => SyntaxKind::OnCreate,
            _ => {
                self.start_node_at(checkpoint, SyntaxKind::Error);
                self.expected("'MATCH' or 'CREATE'");
                self.finish_node();
                return;
            }
        };
        self.bump(); // MATCH | CREATE
        self.start_node_at(checkpoint, kind);
        self.expect(SyntaxKind::KwSet, "'SET'");
        self.parse_set_item();
        while self.eat(SyntaxKind::Comma) {
            self.parse_set_item();
        }
        self.finish_node();
    }

    fn parse_set(&mut self) {
        self.start_node(SyntaxKind::Set);
        self.bump(); // SET
        self.parse_set_item();
        while self.eat(SyntaxKind::Comma) {
            self.parse_set_item();
        }
        self.finish_node();
    }

    /// `n.prop = expr` | `n = expr` | `n += expr` | `n:Label1:Label2`
    fn parse_set_item(&mut self) {
        if self.at_identifier() {
            match self.peek_nth(1) {
                SyntaxKind::PlusEq => {
                    self.start_node(SyntaxKind::MergeProperties);
                    self.parse_identifier();
                    self.eat(SyntaxKind::PlusEq);
                    self.parse_expression();
                    self.finish_node();
                    return;
                }
                SyntaxKind::Eq => {
                    self.start_node(SyntaxKind::SetAllProperties);
                    self.parse_identifier();
                    self.eat(SyntaxKind::Eq);
                    self.parse_expression();
                    self.finish_node();
                    return;
                }
                SyntaxKind::Colon => {
                    self.start_node(SyntaxKind::SetLabels);
                    self.parse_identifier();
                    while self.eat(SyntaxKind::Colon) {
                        self.parse_name(SyntaxKind::Label, "a label");
                    }
                    self.finish_node();
                    return;
                }
                _ => {}
            }
        }
        self.start_node(SyntaxKind::SetProperty);
        self.parse_postfix_expr();
        self.expect(SyntaxKind::Eq, "'='");
        self.parse_expression();
        self.finish_node();
    }

    fn parse_delete(&mut self) {
        self.start_node(SyntaxKind::Delete);
        self.eat(SyntaxKind::KwDetach);
        self.expect(SyntaxKind::KwDelete, "'DELETE'");
        self.parse_expression();
        while self.eat(SyntaxKind::Comma) {
            self.parse_expression();
        }
        self.finish_node();
    }

    fn parse_remove(&mut self) {
        self.start_node(SyntaxKind::Remove);
        self.bump(); // REMOVE
        self.parse_remove_item();
        while self.eat(SyntaxKind::Comma) {
            self.parse_remove_item();
        }
        self.finish_node();
    }

    /// `n:Label1:Label2` | `n.prop`
    fn parse_remove_item(&mut self) {
        if self.at_identifier() && self.peek_nth(1) == SyntaxKind::Colon {
            self.start_node(SyntaxKind::RemoveLabels);
            self.parse_identifier();
            while self.eat(SyntaxKind::Colon) {
                self.parse_name(SyntaxKind::Label, "a label");
            }
            self.finish_node();
            return;
        }
        self.start_node(SyntaxKind::RemoveProperty);
        self.parse_postfix_expr();
        self.finish_node();
    }

    /// `FOREACH (x IN list | clause ...)`
    fn parse_foreach(&mut self) {
        self.start_node(SyntaxKind::Foreach);
        self.bump(); // FOREACH
        self.expect(SyntaxKind::ParenOpen, "'('");
        self.parse_identifier();
        self.expect(SyntaxKind::KwIn, "'IN'");
        self.parse_expression();
        self.expect(SyntaxKind::Pipe, "'|'");
        while self.at_set(CLAUSE_START) && !self.at(SyntaxKind::KwUnion) {
            self.parse_clause();
        }
        self.expect(SyntaxKind::ParenClose, "')'");
        self.finish_node();
    }

    fn parse_with(&mut self) {
        self.start_node(SyntaxKind::With);
        self.bump(); // WITH
        self.eat(SyntaxKind::KwDistinct);
        self.parse_projection_list();
        self.parse_projection_tail();
        if self.eat(SyntaxKind::KwWhere) {
            self.parse_expression();
        }
        self.finish_node();
    }

    fn parse_return(&mut self) {
        self.start_node(SyntaxKind::Return);
        self.bump(); // RETURN
        self.eat(SyntaxKind::KwDistinct);
        self.parse_projection_list();
        self.parse_projection_tail();
        self.finish_node();
    }

    /// `*` | `*, projections` | `projections`
    fn parse_projection_list(&mut self) {
        if self.eat(SyntaxKind::Star) {
            if !self.eat(SyntaxKind::Comma) {
                return;
            }
        }
        self.parse_projection();
        while self.eat(SyntaxKind::Comma) {
            self.parse_projection();
        }
    }

    fn parse_projection(&mut self) {
        self.start_node(SyntaxKind::Projection);
        self.parse_expression();
        if self.eat(SyntaxKind::KwAs) {
            self.parse_identifier();
        }
        self.finish_node();
    }

    /// `ORDER BY ...`, `SKIP n`, `LIMIT n` after a projection list.
    fn parse_projection_tail(&mut self) {
        if self.at(SyntaxKind::KwOrder) {
            self.parse_order_by();
        }
        if self.eat(SyntaxKind::KwSkip) {
            self.parse_expression();
        }
        if self.eat(SyntaxKind::KwLimit) {
            self.parse_expression();
        }
    }

    fn parse_order_by(&mut self) {
        self.start_node(SyntaxKind::OrderBy);
        self.bump(); // ORDER
        self.expect(SyntaxKind::KwBy, "'BY'");
        self.parse_sort_item();
        while self.eat(SyntaxKind::Comma) {
            self.parse_sort_item();
        }
        self.finish_node();
    }

    fn parse_sort_item(&mut self) {
        self.start_node(SyntaxKind::SortItem);
        self.parse_expression();
        match self.current() {
            SyntaxKind::KwAsc
            | SyntaxKind::KwAscending
            | SyntaxKind::KwDesc
            | SyntaxKind::KwDescending => self.bump(),
            _ => {}
        }
        self.finish_node();
    }

    fn parse_unwind(&mut self) {
        self.start_node(SyntaxKind::Unwind);
        self.bump(); // UNWIND
        self.parse_expression();
        self.expect(SyntaxKind::KwAs, "'AS'");
        self.parse_identifier();
        self.finish_node();
    }

    /// `CALL proc.name(args) [YIELD items]`
    fn parse_call(&mut self) {
        self.start_node(SyntaxKind::Call);
        self.bump(); // CALL
        if self.at_name() {
            self.start_node(SyntaxKind::ProcName);
            self.bump();
            while self.at(SyntaxKind::Dot) {
                self.bump();
                if self.at_name() {
                    self.bump();
                } else {
                    self.expected("a procedure name");
                    break;
                }
            }
            self.finish_node();
        } else {
            self.expected("a procedure name");
        }
        if self.eat(SyntaxKind::ParenOpen) {
            if self.at_set(EXPR_FIRST) {
                self.parse_expression();
                while self.eat(SyntaxKind::Comma) {
                    self.parse_expression();
                }
            }
            self.expect(SyntaxKind::ParenClose, "')'");
        }
        if self.eat(SyntaxKind::KwYield) {
            self.parse_projection();
            while self.eat(SyntaxKind::Comma) {
                self.parse_projection();
            }
        }
        self.finish_node();
    }

    /// `LOAD CSV [WITH HEADERS] FROM url AS id [FIELDTERMINATOR ","]`
    fn parse_load_csv(&mut self) {
        self.start_node(SyntaxKind::LoadCsv);
        self.bump(); // LOAD
        self.expect(SyntaxKind::KwCsv, "'CSV'");
        if self.at(SyntaxKind::KwWith) {
            self.bump();
            self.expect(SyntaxKind::KwHeaders, "'HEADERS'");
        }
        self.expect(SyntaxKind::KwFrom, "'FROM'");
        self.parse_expression();
        self.expect(SyntaxKind::KwAs, "'AS'");
        self.parse_identifier();
        if self.eat(SyntaxKind::KwFieldterminator) {
            if self.at(SyntaxKind::StringLiteral) {
                self.wrap_token(SyntaxKind::String);
            } else {
                self.expected("a string");
            }
        }
        self.finish_node();
    }

    fn parse_union(&mut self) {
        self.start_node(SyntaxKind::Union);
        self.bump(); // UNION
        self.eat(SyntaxKind::KwAll);
        self.finish_node();
    }

    fn parse_start(&mut self) {
        self.start_node(SyntaxKind::Start);
        self.bump(); // START
        self.parse_start_point();
        while self.eat(SyntaxKind::Comma) {
            self.parse_start_point();
        }
        if self.eat(SyntaxKind::KwWhere) {
            self.parse_expression();
        }
        self.finish_node();
    }

    /// `n=node(...)`, `n=node:index(...)`, `r=rel(...)` forms.
    fn parse_start_point(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_identifier();
        self.expect(SyntaxKind::Eq, "'='");
        let on_node = match self.current() {
            SyntaxKind::KwNode => true,
            SyntaxKind::KwRel | SyntaxKind::KwRelationship => false,
            _ => {
                self.start_node_at(checkpoint, SyntaxKind::Error);
                self.expected("'node', 'rel' or 'relationship'");
                self.finish_node();
                return;
            }
        };
        self.bump(); // node | rel | relationship

        let kind = if self.eat(SyntaxKind::Colon) {
            self.parse_name(SyntaxKind::IndexName, "an index name");
            self.expect(SyntaxKind::ParenOpen, "'('");
            let query_form = matches!(
                self.current(),
                SyntaxKind::StringLiteral | SyntaxKind::Param
            ) && self.peek_nth(1) == SyntaxKind::ParenClose;
            let kind = if query_form {
                self.parse_index_value();
                if on_node {
                    SyntaxKind::NodeIndexQuery
                } else {
                    SyntaxKind::RelIndexQuery
                }
            } else {
                self.parse_name(SyntaxKind::PropName, "a property name");
                self.expect(SyntaxKind::Eq, "'='");
                self.parse_index_value();
                if on_node {
                    SyntaxKind::NodeIndexLookup
                } else {
                    SyntaxKind::RelIndexLookup
                }
            };
            self.expect(SyntaxKind::ParenClose, "')'");
            kind
        } else {
            self.expect(SyntaxKind::ParenOpen, "'('");
            let kind = if self.eat(SyntaxKind::Star) {
                if on_node {
                    SyntaxKind::AllNodesScan
                } else {
                    SyntaxKind::AllRelsScan
                }
            } else {
                while self.at(SyntaxKind::IntegerLiteral) {
                    self.wrap_token(SyntaxKind::Integer);
                    if !self.eat(SyntaxKind::Comma) {
                        break;
                    }
                }
                if on_node {
                    SyntaxKind::NodeIdLookup
                } else {
                    SyntaxKind::RelIdLookup
                }
            };
            self.expect(SyntaxKind::ParenClose, "')'");
            kind
        };
        self.start_node_at(checkpoint, kind);
        self.finish_node();
    }

    fn parse_index_value(&mut self) {
        match self.current() {
            SyntaxKind::StringLiteral => self.wrap_token(SyntaxKind::String),
            SyntaxKind::Param => self.wrap_token(SyntaxKind::Parameter),
            _ => self.expected("a string or parameter"),
        }
    }
}

//! Expressions, from boolean chains down to atoms.
//!
//! Precedence, loosest binding first: OR, XOR, AND, NOT, comparison chains,
//! string/collection predicates (STARTS WITH, ENDS WITH, CONTAINS, =~, IN,
//! IS NULL), additive, multiplicative, power, unary sign, postfix (property
//! access, subscript, slice, labels test), atom. Binary chains wrap
//! left-associatively from a checkpoint.

use super::super::core::Parser;
use super::super::cst::token_sets::{COMPARISON_OPS, EXPR_FIRST};
use super::super::cst::SyntaxKind;

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self) {
        if !self.enter_recursion() {
            // Depth limit hit: absorb the rest of the expression so callers
            // still make progress.
            self.start_node(SyntaxKind::Error);
            while !self.eof() && !self.at(SyntaxKind::Semicolon) {
                self.bump();
            }
            self.finish_node();
            return;
        }
        self.parse_or_expr();
        self.exit_recursion();
    }

    fn parse_or_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_xor_expr();
        while self.at(SyntaxKind::KwOr) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
            self.bump();
            self.parse_xor_expr();
            self.finish_node();
        }
    }

    fn parse_xor_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_and_expr();
        while self.at(SyntaxKind::KwXor) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
            self.bump();
            self.parse_and_expr();
            self.finish_node();
        }
    }

    fn parse_and_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_not_expr();
        while self.at(SyntaxKind::KwAnd) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
            self.bump();
            self.parse_not_expr();
            self.finish_node();
        }
    }

    fn parse_not_expr(&mut self) {
        if self.at(SyntaxKind::KwNot) {
            self.start_node(SyntaxKind::UnaryOperator);
            self.bump();
            self.parse_not_expr();
            self.finish_node();
        } else {
            self.parse_comparison_expr();
        }
    }

    /// `a < b <= c` folds into a single chained comparison node.
    fn parse_comparison_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_predicate_expr();
        if self.at_set(COMPARISON_OPS) {
            self.start_node_at(checkpoint, SyntaxKind::Comparison);
            while self.at_set(COMPARISON_OPS) {
                self.bump();
                self.parse_predicate_expr();
            }
            self.finish_node();
        }
    }

    /// String predicates, `=~`, `IN` and `IS [NOT] NULL`.
    fn parse_predicate_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_additive_expr();
        loop {
            match self.current() {
                SyntaxKind::RegexEq | SyntaxKind::KwIn => {
                    self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
                    self.bump();
                    self.parse_additive_expr();
                    self.finish_node();
                }
                SyntaxKind::KwStarts => {
                    self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
                    self.bump();
                    self.expect(SyntaxKind::KwWith, "'WITH'");
                    self.parse_additive_expr();
                    self.finish_node();
                }
                SyntaxKind::KwEnds => {
                    self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
                    self.bump();
                    self.expect(SyntaxKind::KwWith, "'WITH'");
                    self.parse_additive_expr();
                    self.finish_node();
                }
                SyntaxKind::KwContains => {
                    self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
                    self.bump();
                    self.parse_additive_expr();
                    self.finish_node();
                }
                SyntaxKind::KwIs => {
                    // IS NULL / IS NOT NULL as a postfix unary operator
                    self.start_node_at(checkpoint, SyntaxKind::UnaryOperator);
                    self.bump();
                    self.eat(SyntaxKind::KwNot);
                    self.expect(SyntaxKind::KwNull, "'NULL'");
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_additive_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_multiplicative_expr();
        while matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
            self.bump();
            self.parse_multiplicative_expr();
            self.finish_node();
        }
    }

    fn parse_multiplicative_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_power_expr();
        while matches!(
            self.current(),
            SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent
        ) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
            self.bump();
            self.parse_power_expr();
            self.finish_node();
        }
    }

    fn parse_power_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_unary_expr();
        while self.at(SyntaxKind::Caret) {
            self.start_node_at(checkpoint, SyntaxKind::BinaryOperator);
            self.bump();
            self.parse_unary_expr();
            self.finish_node();
        }
    }

    fn parse_unary_expr(&mut self) {
        if matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus) {
            self.start_node(SyntaxKind::UnaryOperator);
            self.bump();
            self.parse_unary_expr();
            self.finish_node();
        } else {
            self.parse_postfix_expr();
        }
    }

    /// Property access, subscripts, slices and label tests chain on atoms.
    ///
    /// Also the entry point for positions that take a property expression
    /// but are followed by `=` or `IS` in the surrounding grammar (`SET
    /// n.p = ...`, `ASSERT n.p IS UNIQUE`), which the comparison and
    /// predicate levels would otherwise consume.
    pub(super) fn parse_postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_atom();
        loop {
            match self.current() {
                SyntaxKind::Dot => {
                    self.start_node_at(checkpoint, SyntaxKind::PropertyOperator);
                    self.bump();
                    self.parse_name(SyntaxKind::PropName, "a property name");
                    self.finish_node();
                }
                SyntaxKind::BracketOpen => {
                    self.bump();
                    let kind = if self.eat(SyntaxKind::DotDot) {
                        if self.at_set(EXPR_FIRST) {
                            self.parse_expression();
                        }
                        SyntaxKind::SliceOperator
                    } else {
                        self.parse_expression();
                        if self.eat(SyntaxKind::DotDot) {
                            if self.at_set(EXPR_FIRST) {
                                self.parse_expression();
                            }
                            SyntaxKind::SliceOperator
                        } else {
                            SyntaxKind::SubscriptOperator
                        }
                    };
                    self.start_node_at(checkpoint, kind);
                    self.expect(SyntaxKind::BracketClose, "']'");
                    self.finish_node();
                }
                SyntaxKind::Colon => {
                    self.start_node_at(checkpoint, SyntaxKind::LabelsOperator);
                    while self.eat(SyntaxKind::Colon) {
                        self.parse_name(SyntaxKind::Label, "a label");
                    }
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_atom(&mut self) {
        match self.current() {
            SyntaxKind::IntegerLiteral => self.wrap_token(SyntaxKind::Integer),
            SyntaxKind::FloatLiteral => self.wrap_token(SyntaxKind::Float),
            SyntaxKind::StringLiteral => self.wrap_token(SyntaxKind::String),
            SyntaxKind::Param => self.wrap_token(SyntaxKind::Parameter),
            SyntaxKind::KwTrue => self.wrap_token(SyntaxKind::True),
            SyntaxKind::KwFalse => self.wrap_token(SyntaxKind::False),
            SyntaxKind::KwNull => self.wrap_token(SyntaxKind::Null),
            SyntaxKind::Id | SyntaxKind::EscapedId => {
                if self.peek_nth(1) == SyntaxKind::ParenOpen {
                    self.parse_apply();
                } else {
                    self.start_node(SyntaxKind::Identifier);
                    self.bump();
                    self.finish_node();
                }
            }
            SyntaxKind::KwCase => self.parse_case(),
            SyntaxKind::KwFilter => self.parse_filter_or_extract(SyntaxKind::Filter),
            SyntaxKind::KwExtract => self.parse_filter_or_extract(SyntaxKind::Extract),
            SyntaxKind::KwReduce => self.parse_reduce(),
            SyntaxKind::KwAll => self.parse_predicate_function(SyntaxKind::All),
            SyntaxKind::KwAny => self.parse_predicate_function(SyntaxKind::Any),
            SyntaxKind::KwNone => self.parse_predicate_function(SyntaxKind::None),
            SyntaxKind::KwSingle => self.parse_predicate_function(SyntaxKind::Single),
            SyntaxKind::KwShortestPath | SyntaxKind::KwAllShortestPaths => {
                self.parse_shortest_path();
            }
            SyntaxKind::ParenOpen => {
                if self.pattern_ahead() {
                    self.parse_anonymous_pattern_path();
                } else {
                    self.bump();
                    self.parse_expression();
                    self.expect(SyntaxKind::ParenClose, "')'");
                }
            }
            SyntaxKind::BracketOpen => self.parse_bracketed_atom(),
            SyntaxKind::BraceOpen => self.parse_map_or_legacy_param(),
            SyntaxKind::UnterminatedString => self.lexical_error("unterminated string"),
            SyntaxKind::UnterminatedEscapedId => {
                self.lexical_error("unterminated quoted identifier")
            }
            SyntaxKind::UnterminatedComment => self.lexical_error("unterminated block comment"),
            _ => self.expected("an expression"),
        }
    }

    /// Report a lexical error token and consume it into an `Error` node.
    fn lexical_error(&mut self, message: &str) {
        let span = self.current_span();
        self.error_at(span, message);
        self.start_node(SyntaxKind::Error);
        self.bump();
        self.finish_node();
    }

    /// Function application: `name(args)`, `count(*)`, `collect(DISTINCT x)`.
    fn parse_apply(&mut self) {
        let checkpoint = self.checkpoint();
        self.start_node(SyntaxKind::FunctionName);
        self.bump();
        self.finish_node();
        self.eat(SyntaxKind::ParenOpen);
        self.eat(SyntaxKind::KwDistinct);
        let kind = if self.at(SyntaxKind::Star) && self.peek_nth(1) == SyntaxKind::ParenClose {
            self.bump(); // *
            SyntaxKind::ApplyAllOperator
        } else {
            if self.at_set(EXPR_FIRST) {
                self.parse_expression();
                while self.eat(SyntaxKind::Comma) {
                    self.parse_expression();
                }
            }
            SyntaxKind::ApplyOperator
        };
        self.start_node_at(checkpoint, kind);
        self.expect(SyntaxKind::ParenClose, "')'");
        self.finish_node();
    }

    /// `CASE [subject] (WHEN e THEN e)+ [ELSE e] END`
    fn parse_case(&mut self) {
        self.start_node(SyntaxKind::Case);
        self.bump(); // CASE
        if !self.at(SyntaxKind::KwWhen) {
            self.parse_expression();
        }
        if !self.at(SyntaxKind::KwWhen) {
            self.expected("'WHEN'");
        }
        while self.eat(SyntaxKind::KwWhen) {
            self.parse_expression();
            self.expect(SyntaxKind::KwThen, "'THEN'");
            self.parse_expression();
        }
        if self.eat(SyntaxKind::KwElse) {
            self.parse_expression();
        }
        self.expect(SyntaxKind::KwEnd, "'END'");
        self.finish_node();
    }

    /// `filter(x IN list WHERE pred)` / `extract(x IN list | expr)`
    fn parse_filter_or_extract(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump(); // filter | extract
        self.expect(SyntaxKind::ParenOpen, "'('");
        self.parse_identifier();
        self.expect(SyntaxKind::KwIn, "'IN'");
        self.parse_expression();
        if kind == SyntaxKind::Filter {
            if self.eat(SyntaxKind::KwWhere) {
                self.parse_expression();
            }
        } else if self.eat(SyntaxKind::Pipe) {
            self.parse_expression();
        }
        self.expect(SyntaxKind::ParenClose, "')'");
        self.finish_node();
    }

    /// `all(x IN list WHERE pred)` and friends.
    fn parse_predicate_function(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump(); // all | any | none | single
        self.expect(SyntaxKind::ParenOpen, "'('");
        self.parse_identifier();
        self.expect(SyntaxKind::KwIn, "'IN'");
        self.parse_expression();
        if self.eat(SyntaxKind::KwWhere) {
            self.parse_expression();
        }
        self.expect(SyntaxKind::ParenClose, "')'");
        self.finish_node();
    }

    /// `reduce(acc = init, x IN list | expr)`
    fn parse_reduce(&mut self) {
        self.start_node(SyntaxKind::Reduce);
        self.bump(); // reduce
        self.expect(SyntaxKind::ParenOpen, "'('");
        self.parse_identifier();
        self.expect(SyntaxKind::Eq, "'='");
        self.parse_expression();
        self.expect(SyntaxKind::Comma, "','");
        self.parse_identifier();
        self.expect(SyntaxKind::KwIn, "'IN'");
        self.parse_expression();
        self.expect(SyntaxKind::Pipe, "'|'");
        self.parse_expression();
        self.expect(SyntaxKind::ParenClose, "')'");
        self.finish_node();
    }

    /// `[...]` is a collection literal, a list comprehension or a pattern
    /// comprehension; LL(k) over the raw tokens decides which.
    fn parse_bracketed_atom(&mut self) {
        if matches!(self.peek_nth(1), SyntaxKind::Id | SyntaxKind::EscapedId)
            && self.peek_nth(2) == SyntaxKind::KwIn
        {
            self.parse_list_comprehension();
        } else if self.pattern_comprehension_ahead() {
            self.parse_pattern_comprehension();
        } else {
            self.parse_collection();
        }
    }

    fn parse_list_comprehension(&mut self) {
        self.start_node(SyntaxKind::ListComprehension);
        self.bump(); // [
        self.parse_identifier();
        self.eat(SyntaxKind::KwIn);
        self.parse_expression();
        if self.eat(SyntaxKind::KwWhere) {
            self.parse_expression();
        }
        if self.eat(SyntaxKind::Pipe) {
            self.parse_expression();
        }
        self.expect(SyntaxKind::BracketClose, "']'");
        self.finish_node();
    }

    /// `[p = (a)-->(b) WHERE pred | expr]`
    fn parse_pattern_comprehension(&mut self) {
        self.start_node(SyntaxKind::PatternComprehension);
        self.bump(); // [
        if self.at_identifier() && self.peek_nth(1) == SyntaxKind::Eq {
            self.parse_identifier();
            self.eat(SyntaxKind::Eq);
        }
        self.parse_anonymous_pattern_path();
        if self.eat(SyntaxKind::KwWhere) {
            self.parse_expression();
        }
        self.expect(SyntaxKind::Pipe, "'|'");
        self.parse_expression();
        self.expect(SyntaxKind::BracketClose, "']'");
        self.finish_node();
    }

    fn parse_collection(&mut self) {
        self.start_node(SyntaxKind::Collection);
        self.bump(); // [
        if self.at_set(EXPR_FIRST) {
            self.parse_expression();
            while self.eat(SyntaxKind::Comma) {
                self.parse_expression();
            }
        }
        self.expect(SyntaxKind::BracketClose, "']'");
        self.finish_node();
    }

    /// `{name}` is a legacy parameter; everything else in braces is a map.
    pub(super) fn parse_map_or_legacy_param(&mut self) {
        let legacy_param = {
            let k1 = self.peek_nth(1);
            (matches!(k1, SyntaxKind::Id | SyntaxKind::EscapedId) || k1.is_keyword())
                && self.peek_nth(2) == SyntaxKind::BraceClose
        };
        if legacy_param {
            self.start_node(SyntaxKind::Parameter);
            self.bump(); // {
            if self.at_name() {
                self.bump();
            }
            self.eat(SyntaxKind::BraceClose);
            self.finish_node();
            return;
        }
        self.start_node(SyntaxKind::Map);
        self.bump(); // {
        if self.at_name() {
            self.parse_map_entry();
            while self.eat(SyntaxKind::Comma) {
                self.parse_map_entry();
            }
        }
        self.expect(SyntaxKind::BraceClose, "'}'");
        self.finish_node();
    }

    fn parse_map_entry(&mut self) {
        self.parse_name(SyntaxKind::PropName, "a property name");
        self.expect(SyntaxKind::Colon, "':'");
        self.parse_expression();
    }

    /// From a `(`, decide whether a pattern path follows: scan to the
    /// matching close and look for an arrow.
    fn pattern_ahead(&mut self) -> bool {
        debug_assert!(self.at(SyntaxKind::ParenOpen));
        let mut depth = 0usize;
        let mut i = self.pos;
        while i < self.tokens.len() {
            match self.tokens[i].kind {
                SyntaxKind::ParenOpen => depth += 1,
                SyntaxKind::ParenClose => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        let next = self.next_significant(i + 1);
                        return matches!(
                            self.tokens.get(next).map(|t| t.kind),
                            Some(SyntaxKind::Minus | SyntaxKind::Lt)
                        );
                    }
                }
                _ => {}
            }
            i += 1;
        }
        false
    }

    /// From a `[`, decide whether a pattern comprehension follows:
    /// `[id = (...` or `[(...) -` / `[(...) <`.
    fn pattern_comprehension_ahead(&mut self) -> bool {
        debug_assert!(self.at(SyntaxKind::BracketOpen));
        let first = self.next_significant(self.pos + 1);
        match self.tokens.get(first).map(|t| t.kind) {
            Some(SyntaxKind::Id | SyntaxKind::EscapedId) => {
                let second = self.next_significant(first + 1);
                matches!(
                    self.tokens.get(second).map(|t| t.kind),
                    Some(SyntaxKind::Eq)
                )
            }
            Some(SyntaxKind::ParenOpen) => {
                let mut depth = 0usize;
                let mut i = first;
                while i < self.tokens.len() {
                    match self.tokens[i].kind {
                        SyntaxKind::ParenOpen => depth += 1,
                        SyntaxKind::ParenClose => {
                            depth = depth.saturating_sub(1);
                            if depth == 0 {
                                let next = self.next_significant(i + 1);
                                return matches!(
                                    self.tokens.get(next).map(|t| t.kind),
                                    Some(SyntaxKind::Minus | SyntaxKind::Lt)
                                );
                            }
                        }
                        _ => {}
                    }
                    i += 1;
                }
                false
            }
            _ => false,
        }
    }

    fn next_significant(&self, mut i: usize) -> usize {
        while i < self.tokens.len() && self.tokens[i].kind.is_trivia() {
            i += 1;
        }
        i
    }
}

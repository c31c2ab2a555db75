//! Grammar productions for Cypher.
//!
//! All `parse_*` methods extend `Parser`. The split follows the statement
//! grammar: directives and schema commands, query clauses, patterns, and
//! expressions.

mod clauses;
mod expressions;
mod patterns;
mod statements;

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Plain or backtick-quoted identifier.
    pub(super) fn at_identifier(&mut self) -> bool {
        matches!(self.current(), SyntaxKind::Id | SyntaxKind::EscapedId)
    }

    /// Name position where keywords are also acceptable (property names,
    /// labels, rel types, function names).
    pub(super) fn at_name(&mut self) -> bool {
        let kind = self.current();
        matches!(kind, SyntaxKind::Id | SyntaxKind::EscapedId) || kind.is_keyword()
    }

    /// Wrap the current identifier token in an `Identifier` node.
    pub(super) fn parse_identifier(&mut self) -> bool {
        if self.at_identifier() {
            self.start_node(SyntaxKind::Identifier);
            self.bump();
            self.finish_node();
            true
        } else {
            self.expected("an identifier");
            false
        }
    }

    /// Wrap a name token (identifier or keyword) in a node of `kind`.
    pub(super) fn parse_name(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.at_name() {
            self.start_node(kind);
            self.bump();
            self.finish_node();
            true
        } else {
            self.expected(what);
            false
        }
    }

    /// Wrap the current token in a node of `kind` unchecked.
    pub(super) fn wrap_token(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }
}

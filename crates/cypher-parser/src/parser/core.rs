//! Parser state machine and low-level operations.
//!
//! One `Parser` instance parses one directive's text into a lossless green
//! tree. Trivia tokens are buffered and flushed when the next node starts, so
//! node ranges never include leading whitespace. Recovery is explicit:
//! `NORMAL` until a syntax error, then `SYNCHRONIZING` while tokens are
//! skipped into an `Error` node, back to `NORMAL` at a clause-start keyword
//! or the end of the directive.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::Diagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RecoveryState {
    Normal,
    Synchronizing,
}

pub(crate) struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    trivia_buffer: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    diagnostics: Diagnostics,
    state: RecoveryState,
    depth: u32,
    max_depth: u32,
    last_diagnostic_pos: Option<TextSize>,
    debug_fuel: std::cell::Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>, max_depth: u32) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            state: RecoveryState::Normal,
            depth: 0,
            max_depth,
            last_diagnostic_pos: None,
            debug_fuel: std::cell::Cell::new(256),
        }
    }

    pub fn finish(mut self) -> (GreenNode, Diagnostics) {
        self.drain_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "parser is stuck: too many lookaheads without consuming"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }

    /// Kind of the current significant token, buffering trivia on the way.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        let mut seen = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if !kind.is_trivia() {
                if seen == n {
                    return kind;
                }
                seen += 1;
            }
            pos += 1;
        }
        SyntaxKind::Eof
    }

    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Text of the current significant token ("" at end of input).
    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.end_offset()), |t| t.span)
    }

    fn end_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&mut self) -> bool {
        self.current() == SyntaxKind::Eof
    }

    fn eof_raw(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    fn drain_trivia(&mut self) {
        for token in std::mem::take(&mut self.trivia_buffer) {
            self.token_raw(token);
        }
    }

    fn token_raw(&mut self, token: Token) {
        self.builder
            .token(token.kind.into(), token_text(self.source, &token));
    }

    /// Consume trivia at the directive's top level, wrapping comments in
    /// their own nodes so they surface as directives.
    pub(super) fn bump_outer_trivia(&mut self) {
        for token in std::mem::take(&mut self.trivia_buffer) {
            self.emit_outer_trivia(token);
        }
        while !self.eof_raw() && self.tokens[self.pos].kind.is_trivia() {
            let token = self.tokens[self.pos];
            self.pos += 1;
            self.emit_outer_trivia(token);
        }
    }

    fn emit_outer_trivia(&mut self, token: Token) {
        let wrap = match token.kind {
            SyntaxKind::CommentLine => Some(SyntaxKind::LineComment),
            SyntaxKind::CommentBlock => Some(SyntaxKind::BlockComment),
            _ => None,
        };
        match wrap {
            Some(node) => {
                self.builder.start_node(node.into());
                self.token_raw(token);
                self.builder.finish_node();
            }
            None => self.token_raw(token),
        }
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof_raw(), "bump called at end of input");
        self.reset_debug_fuel();
        self.drain_trivia();
        let token = self.tokens[self.pos];
        self.token_raw(token);
        self.pos += 1;
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit a diagnostic but don't consume (parent may handle).
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.expected(what);
        false
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    /// Report "Invalid input '...': expected WHAT" at the current token.
    pub(super) fn expected(&mut self, what: &str) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        let message = if self.eof() {
            format!("unexpected end of input: expected {what}")
        } else {
            let text = self.current_text();
            format!("Invalid input '{text}': expected {what}")
        };
        self.diagnostics.report(range, message);
    }

    pub(super) fn error_at(&mut self, range: TextRange, message: impl Into<String>) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(range, message.into());
    }

    /// Report at the current token and consume it into an `Error` node.
    pub(super) fn expected_and_bump(&mut self, what: &str) {
        self.expected(what);
        self.bump_as_error();
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Skip tokens into an `Error` node until one of `recovery` (or the end
    /// of the directive) comes up. This is the SYNCHRONIZING state.
    pub(super) fn synchronize(&mut self, recovery: TokenSet) {
        debug_assert_eq!(
            self.state,
            RecoveryState::Normal,
            "synchronize re-entered while already synchronizing"
        );
        if self.eof() || self.at_set(recovery) {
            return;
        }
        self.state = RecoveryState::Synchronizing;
        self.start_node(SyntaxKind::Error);
        while !self.eof() && !self.at_set(recovery) {
            self.bump();
        }
        self.finish_node();
        self.state = RecoveryState::Normal;
    }

    /// Guard for recursive productions. On exceeding the depth limit, report
    /// once and return false; the caller must consume something.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.max_depth {
            let range = self.current_span();
            if self.should_report(range.start()) {
                self.diagnostics
                    .report(range, "expression too deeply nested");
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }
}

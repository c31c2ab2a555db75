//! Parsing entry points and the parse result.
//!
//! # Architecture
//!
//! The input stream is segmented directive-by-directive (see [`segment`]),
//! each segment is lexed and parsed into its own lossless syntax tree, and
//! the surviving directives accumulate into a [`ParseResult`]. A directive
//! whose segment produced any diagnostic contributes its errors instead of a
//! directive; earlier and later directives are unaffected.
//!
//! Finalizing a result assigns every AST node a dense depth-first ordinal,
//! which is how the structural printer cites children.

mod command;
mod core;
pub mod cst;
mod grammar;
mod lexer;
mod segment;

#[cfg(test)]
mod tests;

use std::io::BufRead;
use std::ops::ControlFlow;

use indexmap::IndexMap;
use log::debug;

use crate::colorization::Colorization;
use crate::diagnostics::{Diagnostics, ParseError, extract_context};
use crate::error::Error;
use crate::source::{InputPosition, InputRange};
use cst::{SyntaxKind, SyntaxNode};
pub use lexer::{Token, lex, token_text};

const DEFAULT_MAX_DEPTH: u32 = 256;

/// Value-like parse configuration, reusable across parses.
#[derive(Debug, Clone, Copy)]
pub struct ParseConfig {
    error_colorization: Colorization,
    max_depth: u32,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self {
            error_colorization: Colorization::NONE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Scheme used when the result renders its errors.
    pub fn with_error_colorization(mut self, scheme: Colorization) -> Self {
        self.error_colorization = scheme;
        self
    }

    /// Expression nesting limit; beyond it the parser reports
    /// "expression too deeply nested" instead of recursing further.
    pub fn with_max_depth(mut self, limit: u32) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn error_colorization(&self) -> &Colorization {
        &self.error_colorization
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A top-level parsed unit: a statement, a client command, or a comment.
#[derive(Debug, Clone)]
pub struct Directive {
    syntax: SyntaxNode,
    base: InputPosition,
}

impl Directive {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }

    pub fn kind(&self) -> SyntaxKind {
        self.syntax.kind()
    }

    /// Absolute input range this directive spans.
    pub fn range(&self) -> InputRange {
        let range = self.syntax.text_range();
        InputRange::new(
            self.base.offset + usize::from(range.start()),
            self.base.offset + usize::from(range.end()),
        )
    }

    pub fn is_statement(&self) -> bool {
        self.kind() == SyntaxKind::Statement
    }

    pub fn is_command(&self) -> bool {
        self.kind() == SyntaxKind::Command
    }

    pub fn is_comment(&self) -> bool {
        self.kind().is_instance(SyntaxKind::Comment)
    }
}

/// The outcome of one parse call: directives, errors, and the backing trees.
///
/// Immutable once returned; safe to share across threads for reading.
#[derive(Debug)]
pub struct ParseResult {
    directives: Vec<Directive>,
    errors: Vec<ParseError>,
    /// AST nodes in depth-first order; the map index is the node's ordinal
    /// and the value is the node's absolute base offset.
    nodes: IndexMap<SyntaxNode, usize>,
    error_colorization: Colorization,
}

impl ParseResult {
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// At least one directive parsed.
    pub fn is_success(&self) -> bool {
        !self.directives.is_empty()
    }

    /// Number of AST nodes owned by this result.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node by ordinal, as assigned depth-first at finalization.
    pub fn node(&self, ordinal: usize) -> Option<&SyntaxNode> {
        self.nodes.get_index(ordinal).map(|(node, _)| node)
    }

    pub fn ordinal_of(&self, node: &SyntaxNode) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    /// Absolute input range of a node owned by this result.
    pub fn range_of(&self, node: &SyntaxNode) -> Option<InputRange> {
        let base = *self.nodes.get(node)?;
        let range = node.text_range();
        Some(InputRange::new(
            base + usize::from(range.start()),
            base + usize::from(range.end()),
        ))
    }

    /// Render all errors the way `cypher-lint` reports them, using the
    /// configured colorization.
    pub fn render_errors(&self, w: &mut impl std::io::Write) -> std::io::Result<()> {
        for error in &self.errors {
            writeln!(w, "{}", error.render(&self.error_colorization))?;
        }
        Ok(())
    }

    fn finalize(&mut self) {
        self.errors
            .sort_by_key(|e| (e.position().offset, e.position().line));
        let directives = std::mem::take(&mut self.directives);
        for directive in &directives {
            assign_ordinals(directive, &mut self.nodes);
        }
        self.directives = directives;
    }
}

/// Depth-first, children left-to-right.
fn assign_ordinals(directive: &Directive, nodes: &mut IndexMap<SyntaxNode, usize>) {
    let base = directive.base.offset;
    let mut stack = vec![directive.syntax.clone()];
    while let Some(node) = stack.pop() {
        nodes.insert(node.clone(), base);
        let children: Vec<SyntaxNode> = node.children().collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
}

/// Parse a complete source string.
pub fn parse(source: &str, config: &ParseConfig) -> ParseResult {
    parse_stream(std::io::Cursor::new(source), config)
        .expect("in-memory parse cannot fail")
}

/// Parse from a buffered reader, directive at a time.
pub fn parse_stream(reader: impl BufRead, config: &ParseConfig) -> Result<ParseResult, Error> {
    parse_stream_with_callback(reader, config, |_| ControlFlow::Continue(()))
}

/// Parse from a buffered reader, invoking `callback` after each directive.
/// Returning [`ControlFlow::Break`] stops parsing; the partial result is
/// returned.
pub fn parse_stream_with_callback(
    reader: impl BufRead,
    config: &ParseConfig,
    mut callback: impl FnMut(&Directive) -> ControlFlow<()>,
) -> Result<ParseResult, Error> {
    let mut segmenter = segment::Segmenter::new(reader);
    let mut result = ParseResult {
        directives: Vec::new(),
        errors: Vec::new(),
        nodes: IndexMap::new(),
        error_colorization: config.error_colorization,
    };

    'segments: while let Some(seg) = segmenter.next_segment()? {
        let (green, diagnostics) = if seg.is_command {
            command::parse_command_segment(&seg.text)
        } else {
            let tokens = lexer::lex(&seg.text);
            let mut parser = core::Parser::new(&seg.text, tokens, config.max_depth);
            parser.parse_directive_root();
            parser.finish()
        };

        let failed = !diagnostics.is_empty();
        collect_errors(&seg.text, seg.base, diagnostics, &mut result.errors);

        let root = SyntaxNode::new_root(green);
        for child in root.children() {
            let keep = match child.kind() {
                SyntaxKind::LineComment | SyntaxKind::BlockComment => true,
                SyntaxKind::Statement | SyntaxKind::Command => !failed,
                _ => false,
            };
            if !keep {
                continue;
            }
            let directive = Directive {
                syntax: child,
                base: seg.base,
            };
            let flow = callback(&directive);
            result.directives.push(directive);
            if flow.is_break() {
                debug!("parse stopped by consumer at {}", seg.base);
                break 'segments;
            }
        }
    }

    result.finalize();
    Ok(result)
}

/// Resolve segment-relative diagnostics into absolute parse errors.
fn collect_errors(
    text: &str,
    base: InputPosition,
    diagnostics: Diagnostics,
    out: &mut Vec<ParseError>,
) {
    for diag in diagnostics {
        let rel = usize::from(diag.range.start());
        let position = base.advance(&text.as_bytes()[..rel.min(text.len())]);
        let (context, context_offset) = extract_context(text, rel);
        out.push(ParseError {
            position,
            message: diag.message,
            context,
            context_offset,
        });
    }
}

//! Client command parsing.
//!
//! Commands (`:help`, `:schema ls`, ...) are line-oriented and their
//! arguments are words or quoted strings, not Cypher tokens, so they get a
//! dedicated scanner that builds the green tree directly. The tree stays
//! lossless: every byte of the segment lands in a token.

use rowan::GreenNodeBuilder;

use super::cst::SyntaxKind;
use crate::diagnostics::Diagnostics;
use rowan::TextRange;

pub(crate) fn parse_command_segment(
    text: &str,
) -> (rowan::GreenNode, Diagnostics) {
    let mut builder = GreenNodeBuilder::new();
    let mut diagnostics = Diagnostics::new();
    builder.start_node(SyntaxKind::Root.into());

    let bytes = text.as_bytes();
    let mut i = 0;

    // leading trivia and comments
    while i < bytes.len() {
        let rest = &text[i..];
        if rest.starts_with("//") {
            let end = rest.find('\n').map_or(text.len(), |n| i + n);
            builder.start_node(SyntaxKind::LineComment.into());
            builder.token(SyntaxKind::CommentLine.into(), &text[i..end]);
            builder.finish_node();
            i = end;
        } else if rest.starts_with("/*") {
            let end = rest.find("*/").map_or(text.len(), |n| i + n + 2);
            builder.start_node(SyntaxKind::BlockComment.into());
            builder.token(SyntaxKind::CommentBlock.into(), &text[i..end]);
            builder.finish_node();
            i = end;
        } else if bytes[i].is_ascii_whitespace() {
            let mut end = i;
            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            builder.token(SyntaxKind::Whitespace.into(), &text[i..end]);
            i = end;
        } else {
            break;
        }
    }

    if i < bytes.len() && bytes[i] == b':' {
        i = scan_command(text, i, &mut builder, &mut diagnostics);
    } else if i < bytes.len() {
        let range = span(i, bytes.len());
        diagnostics.report(range, "Invalid input: expected a client command");
        builder.start_node(SyntaxKind::Error.into());
        builder.token(SyntaxKind::Garbage.into(), &text[i..]);
        builder.finish_node();
        i = text.len();
    }

    // trailing trivia (the terminating newline)
    if i < bytes.len() {
        builder.token(SyntaxKind::Whitespace.into(), &text[i..]);
    }

    builder.finish_node();
    (builder.finish(), diagnostics)
}

fn scan_command(
    text: &str,
    start: usize,
    builder: &mut GreenNodeBuilder<'static>,
    diagnostics: &mut Diagnostics,
) -> usize {
    let bytes = text.as_bytes();
    builder.start_node(SyntaxKind::Command.into());
    builder.token(SyntaxKind::Colon.into(), ":");
    let mut i = start + 1;

    // command name: a bare word right after the colon
    let name_end = word_end(text, i);
    if name_end == i {
        diagnostics.report(span(start, i + 1), "expected a command name");
    } else {
        builder.start_node(SyntaxKind::String.into());
        builder.token(SyntaxKind::Id.into(), &text[i..name_end]);
        builder.finish_node();
        i = name_end;
    }

    // arguments until the terminating newline
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'\n' => break,
            b'\\' => {
                // line continuation (or a plain escaped byte)
                let end = (i + 2).min(bytes.len());
                builder.token(SyntaxKind::Whitespace.into(), &text[i..end]);
                i = end;
            }
            b if b.is_ascii_whitespace() => {
                let mut end = i;
                while end < bytes.len()
                    && bytes[end] != b'\n'
                    && bytes[end].is_ascii_whitespace()
                {
                    end += 1;
                }
                builder.token(SyntaxKind::Whitespace.into(), &text[i..end]);
                i = end;
            }
            b'"' | b'\'' => {
                let (end, closed) = string_end(bytes, i);
                builder.start_node(SyntaxKind::String.into());
                let kind = if closed {
                    SyntaxKind::StringLiteral
                } else {
                    diagnostics.report(span(i, end), "unterminated string");
                    SyntaxKind::UnterminatedString
                };
                builder.token(kind.into(), &text[i..end]);
                builder.finish_node();
                i = end;
            }
            _ => {
                let end = word_end(text, i);
                builder.start_node(SyntaxKind::String.into());
                builder.token(SyntaxKind::Id.into(), &text[i..end]);
                builder.finish_node();
                i = end;
            }
        }
    }

    builder.finish_node();
    i
}

/// End of a bare word: up to whitespace or a quote.
fn word_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = start;
    while i < bytes.len()
        && !bytes[i].is_ascii_whitespace()
        && bytes[i] != b'"'
        && bytes[i] != b'\''
    {
        i += 1;
    }
    i
}

/// Scan a quoted argument with backslash escapes. Returns (end, closed).
fn string_end(bytes: &[u8], start: usize) -> (usize, bool) {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return (i + 1, true),
            b'\n' => return (i, false),
            _ => i += 1,
        }
    }
    (bytes.len().min(i), false)
}

fn span(start: usize, end: usize) -> TextRange {
    TextRange::new((start as u32).into(), (end as u32).into())
}

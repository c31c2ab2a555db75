//! Parser test helpers.
//!
//! Grammar tests snapshot the lossless tree of each directive (trivia
//! hidden); recovery tests assert on the error list.

mod grammar;
mod recovery;

use std::fmt::Write;

use crate::parser::cst::{SyntaxElement, SyntaxNode};
use crate::parser::{ParseConfig, ParseResult, parse};

pub(crate) fn check(source: &str) -> ParseResult {
    parse(source, &ParseConfig::new())
}

/// Parse expecting no errors and dump the directive trees.
pub(crate) fn cst(source: &str) -> String {
    let result = check(source);
    assert!(
        result.errors().is_empty(),
        "unexpected parse errors:\n{}",
        errors(&result)
    );
    let mut out = String::new();
    for directive in result.directives() {
        dump_node(directive.syntax(), 0, &mut out);
    }
    out
}

/// Parse expecting errors; returns them rendered one per line.
pub(crate) fn errs(source: &str) -> String {
    let result = check(source);
    assert!(
        !result.errors().is_empty(),
        "expected parse errors for {source:?}"
    );
    errors(&result)
}

fn errors(result: &ParseResult) -> String {
    result
        .errors()
        .iter()
        .map(|e| format!("{e}\n"))
        .collect()
}

fn dump_node(node: &SyntaxNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    writeln!(out, "{indent}{:?}", node.kind()).expect("String write never fails");
    for element in node.children_with_tokens() {
        match element {
            SyntaxElement::Node(child) => dump_node(&child, depth + 1, out),
            SyntaxElement::Token(token) => {
                if !token.kind().is_trivia() {
                    let child_indent = "  ".repeat(depth + 1);
                    writeln!(out, "{child_indent}{:?} {:?}", token.kind(), token.text())
                        .expect("String write never fails");
                }
            }
        }
    }
}

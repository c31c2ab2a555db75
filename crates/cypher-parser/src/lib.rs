//! Parsing library for the Cypher graph query language.
//!
//! Takes Cypher source (a string or a byte stream) and produces a queryable
//! abstract syntax tree with precise source positions, recoverable error
//! diagnostics, and a width-respecting, optionally colorized structural
//! printer that cites subnodes by ordinal.
//!
//! # Example
//!
//! ```
//! use cypher_parser::{ParseConfig, parse};
//!
//! let result = parse("MATCH (n:Person) RETURN n.name;", &ParseConfig::new());
//! assert!(result.is_success());
//! assert!(result.errors().is_empty());
//! println!("{}", result.printer().dump());
//! ```
//!
//! Parsing is directive-at-a-time: syntax errors are recorded in the result
//! and parsing resumes with the next directive, so one bad statement never
//! hides the rest of the input.

pub mod ast;
mod colorization;
mod diagnostics;
mod error;
mod parser;
mod printer;
mod source;

pub use colorization::{ColorPair, Colorization};
pub use diagnostics::ParseError;
pub use error::Error;
pub use parser::cst::{CypherLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use parser::{
    Directive, ParseConfig, ParseResult, Token, lex, parse, parse_stream,
    parse_stream_with_callback, token_text,
};
pub use printer::AstPrinter;
pub use source::{InputPosition, InputRange};

/// Library version, reported by `cypher-lint --version`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Typed AST wrappers over syntax nodes.
//!
//! Each concrete node kind gets a wrapper with named-slot accessors; abstract
//! kinds (expression, clause, ...) get polymorphic wrappers whose `cast`
//! accepts any kind in the ancestor relation. Casts are cheap: a wrapper is
//! just the syntax node.
//!
//! Accessors return `Option`/iterators rather than panicking - a tree
//! produced under error recovery can miss any slot.

mod clauses;
mod expressions;
mod patterns;
mod statements;
mod terminals;

pub use clauses::*;
pub use expressions::*;
pub use patterns::*;
pub use statements::*;
pub use terminals::*;

use crate::parser::cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Common interface of all typed wrappers.
pub trait CypherNode: Sized {
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn can_cast(kind: SyntaxKind) -> bool;
    fn syntax(&self) -> &SyntaxNode;

    fn kind(&self) -> SyntaxKind {
        self.syntax().kind()
    }

    fn text_range(&self) -> rowan::TextRange {
        self.syntax().text_range()
    }

    /// Instance-of query over the parent-kind relation.
    fn is_instance(&self, ancestor: SyntaxKind) -> bool {
        self.kind().is_instance(ancestor)
    }
}

/// Wrapper for one concrete node kind.
macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) crate::parser::cst::SyntaxNode);

        impl crate::ast::CypherNode for $name {
            fn cast(node: crate::parser::cst::SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self(node))
            }

            fn can_cast(kind: crate::parser::cst::SyntaxKind) -> bool {
                kind == crate::parser::cst::SyntaxKind::$kind
            }

            fn syntax(&self) -> &crate::parser::cst::SyntaxNode {
                &self.0
            }
        }
    };
}

/// Wrapper for an abstract kind: casts accept every kind whose ancestor set
/// contains it.
macro_rules! ast_union {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) crate::parser::cst::SyntaxNode);

        impl crate::ast::CypherNode for $name {
            fn cast(node: crate::parser::cst::SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self(node))
            }

            fn can_cast(kind: crate::parser::cst::SyntaxKind) -> bool {
                kind.is_instance(crate::parser::cst::SyntaxKind::$kind)
            }

            fn syntax(&self) -> &crate::parser::cst::SyntaxNode {
                &self.0
            }
        }
    };
}

pub(crate) use ast_node;
pub(crate) use ast_union;

/// Slot lookup helpers shared by the wrappers.
pub(crate) mod support {
    use super::*;

    pub fn child<T: CypherNode>(parent: &SyntaxNode) -> Option<T> {
        parent.children().find_map(T::cast)
    }

    pub fn nth_child<T: CypherNode>(parent: &SyntaxNode, n: usize) -> Option<T> {
        parent.children().filter_map(T::cast).nth(n)
    }

    pub fn children<'a, T: CypherNode + 'a>(
        parent: &'a SyntaxNode,
    ) -> impl Iterator<Item = T> + 'a {
        parent.children().filter_map(T::cast)
    }

    pub fn token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
        parent
            .children_with_tokens()
            .filter_map(SyntaxElement::into_token)
            .find(|t| t.kind() == kind)
    }

    pub fn has_token(parent: &SyntaxNode, kind: SyntaxKind) -> bool {
        token(parent, kind).is_some()
    }

    /// First castable node positioned after the first token of `kind`.
    pub fn node_after_token<T: CypherNode>(parent: &SyntaxNode, kind: SyntaxKind) -> Option<T> {
        let mut seen = false;
        for element in parent.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Token(t) if t.kind() == kind => seen = true,
                rowan::NodeOrToken::Node(n) if seen => {
                    if let Some(cast) = T::cast(n) {
                        return Some(cast);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// First token of the node itself (skipping trivia), which carries the
    /// payload for terminal nodes.
    pub fn first_token(parent: &SyntaxNode) -> Option<SyntaxToken> {
        parent
            .children_with_tokens()
            .filter_map(SyntaxElement::into_token)
            .find(|t| !t.kind().is_trivia())
    }
}

/// Decode a backtick-quoted identifier (`` `a``b` `` becomes ``a`b``).
pub(crate) fn unescape_backticks(text: &str) -> String {
    let inner = text
        .strip_prefix('`')
        .unwrap_or(text)
        .strip_suffix('`')
        .unwrap_or_else(|| text.strip_prefix('`').unwrap_or(text));
    inner.replace("``", "`")
}

/// Decode a quoted string literal with backslash escapes.
pub(crate) fn unescape_string(text: &str) -> String {
    let mut chars = text.chars();
    let quote = match chars.next() {
        Some(c @ ('"' | '\'')) => c,
        _ => return text.to_string(),
    };
    let mut out = String::with_capacity(text.len());
    while let Some(c) = chars.next() {
        if c == quote && chars.as_str().is_empty() {
            break; // closing quote
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('u') => push_codepoint(&mut chars, 4, &mut out),
            Some('U') => push_codepoint(&mut chars, 8, &mut out),
            Some(other) => out.push(other),
            None => break,
        }
    }
    out
}

fn push_codepoint(chars: &mut std::str::Chars<'_>, digits: usize, out: &mut String) {
    let hex: String = chars.as_str().chars().take(digits).collect();
    if hex.len() == digits
        && let Ok(value) = u32::from_str_radix(&hex, 16)
        && let Some(c) = char::from_u32(value)
    {
        for _ in 0..digits {
            chars.next();
        }
        out.push(c);
    } else {
        // ill-formed escape: keep the introducer literally
        out.push(if digits == 4 { 'u' } else { 'U' });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescapes_simple_escapes() {
        assert_eq!(unescape_string(r#""a\nb""#), "a\nb");
        assert_eq!(unescape_string(r#"'it\'s'"#), "it's");
        assert_eq!(unescape_string(r#""back\\slash""#), "back\\slash");
    }

    #[test]
    fn unescapes_unicode() {
        assert_eq!(unescape_string("\"a\\u0041\""), "aA");
        assert_eq!(unescape_string(r#""\U0001F600""#), "\u{1F600}");
    }

    #[test]
    fn bad_unicode_escape_stays_literal() {
        assert_eq!(unescape_string(r#""\uZZZZ""#), "uZZZZ");
    }

    #[test]
    fn unescapes_backticks() {
        assert_eq!(unescape_backticks("`a``b`"), "a`b");
        assert_eq!(unescape_backticks("`plain`"), "plain");
    }
}

//! Terminal nodes: identifiers, literals, names and comments.

use super::support;
use super::{CypherNode, ast_node, ast_union, unescape_backticks, unescape_string};
use crate::parser::cst::SyntaxKind;

ast_node!(Identifier, Identifier);
ast_node!(Parameter, Parameter);
ast_node!(
    /// String literal node; also carries bare words in client commands.
    Str,
    String
);
ast_node!(Integer, Integer);
ast_node!(Float, Float);
ast_node!(True, True);
ast_node!(False, False);
ast_node!(Null, Null);
ast_union!(
    /// `TRUE` or `FALSE`.
    BooleanLiteral,
    Boolean
);
ast_node!(Label, Label);
ast_node!(Reltype, Reltype);
ast_node!(PropName, PropName);
ast_node!(FunctionName, FunctionName);
ast_node!(IndexName, IndexName);
ast_node!(ProcName, ProcName);
ast_node!(LineComment, LineComment);
ast_node!(BlockComment, BlockComment);
ast_union!(
    /// Line or block comment.
    Comment,
    Comment
);

/// Shared name decoding: plain token text, or backtick-stripped for escaped
/// identifiers.
fn decoded_name(node: &crate::parser::cst::SyntaxNode) -> Option<String> {
    let token = support::first_token(node)?;
    let text = token.text();
    Some(if token.kind() == SyntaxKind::EscapedId {
        unescape_backticks(text)
    } else {
        text.to_string()
    })
}

impl Identifier {
    pub fn name(&self) -> String {
        decoded_name(self.syntax()).unwrap_or_default()
    }
}

impl Parameter {
    /// Parameter name without the `$`/braces decoration.
    pub fn name(&self) -> String {
        let Some(token) = support::first_token(self.syntax()) else {
            return String::new();
        };
        match token.kind() {
            SyntaxKind::Param => {
                let text = token.text().strip_prefix('$').unwrap_or(token.text());
                if text.starts_with('`') {
                    unescape_backticks(text)
                } else {
                    text.to_string()
                }
            }
            // legacy `{name}`: the name token sits between the braces
            SyntaxKind::BraceOpen => self
                .syntax()
                .children_with_tokens()
                .filter_map(|e| e.into_token())
                .find(|t| {
                    !matches!(
                        t.kind(),
                        SyntaxKind::BraceOpen | SyntaxKind::BraceClose
                    ) && !t.kind().is_trivia()
                })
                .map(|t| t.text().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

impl Str {
    /// The decoded string value (escapes resolved, quotes stripped).
    pub fn value(&self) -> String {
        let Some(token) = support::first_token(self.syntax()) else {
            return String::new();
        };
        match token.kind() {
            SyntaxKind::StringLiteral | SyntaxKind::UnterminatedString => {
                unescape_string(token.text())
            }
            _ => token.text().to_string(),
        }
    }
}

impl Integer {
    /// Literal text as written.
    pub fn literal(&self) -> String {
        support::first_token(self.syntax())
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    /// Numeric value, honoring hex (`0x`) and octal (leading `0`) forms.
    pub fn value(&self) -> Option<i64> {
        let text = self.literal();
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            i64::from_str_radix(hex, 16).ok()
        } else if text.len() > 1 && text.starts_with('0') {
            i64::from_str_radix(&text, 8).ok()
        } else {
            text.parse().ok()
        }
    }
}

impl Float {
    pub fn literal(&self) -> String {
        support::first_token(self.syntax())
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    pub fn value(&self) -> Option<f64> {
        self.literal().parse().ok()
    }
}

impl BooleanLiteral {
    pub fn value(&self) -> bool {
        self.kind() == SyntaxKind::True
    }
}

macro_rules! named_terminal {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn name(&self) -> String {
                decoded_name(self.syntax()).unwrap_or_default()
            }
        })+
    };
}

named_terminal!(Label, Reltype, PropName, FunctionName, IndexName);

impl ProcName {
    /// Full dotted procedure name.
    pub fn name(&self) -> String {
        self.syntax()
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl Comment {
    /// Comment text without the delimiters.
    pub fn value(&self) -> String {
        let Some(token) = support::first_token(self.syntax()) else {
            return String::new();
        };
        let text = token.text();
        match token.kind() {
            SyntaxKind::CommentLine => text.strip_prefix("//").unwrap_or(text).to_string(),
            SyntaxKind::CommentBlock => text
                .strip_prefix("/*")
                .and_then(|t| t.strip_suffix("*/"))
                .unwrap_or(text)
                .to_string(),
            _ => text.to_string(),
        }
    }
}

impl LineComment {
    pub fn value(&self) -> String {
        Comment(self.0.clone()).value()
    }
}

impl BlockComment {
    pub fn value(&self) -> String {
        Comment(self.0.clone()).value()
    }
}

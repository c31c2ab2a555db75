//! Pattern wrappers: paths, node patterns, relationship patterns.

use super::support;
use super::{CypherNode, Expression, Identifier, Integer, Label, Reltype, ast_node, ast_union};
use crate::parser::cst::{SyntaxElement, SyntaxKind, SyntaxNode};

ast_node!(Pattern, Pattern);
ast_union!(
    /// Anonymous, named or shortest pattern path.
    PatternPath,
    PatternPath
);
ast_node!(NamedPath, NamedPath);
ast_node!(ShortestPath, ShortestPath);
ast_node!(NodePattern, NodePattern);
ast_node!(RelPattern, RelPattern);
ast_node!(Range, Range);

/// Relationship direction, read off the arrow tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outbound,
    Inbound,
    Bidirectional,
}

/// One element of a pattern path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternElement {
    Node(NodePattern),
    Rel(RelPattern),
}

impl PatternElement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::NodePattern => Some(PatternElement::Node(NodePattern(node))),
            SyntaxKind::RelPattern => Some(PatternElement::Rel(RelPattern(node))),
            _ => None,
        }
    }
}

impl Pattern {
    pub fn paths(&self) -> impl Iterator<Item = PatternPath> + '_ {
        support::children(self.syntax())
    }
}

impl PatternPath {
    /// Alternating node and relationship patterns. For named and shortest
    /// paths this reads through to the underlying anonymous path.
    pub fn elements(&self) -> Vec<PatternElement> {
        let node = match self.kind() {
            SyntaxKind::PatternPath => self.syntax().clone(),
            _ => match support::child::<PatternPath>(self.syntax()) {
                Some(inner) => return inner.elements(),
                None => self.syntax().clone(),
            },
        };
        node.children().filter_map(PatternElement::cast).collect()
    }

    pub fn nodes(&self) -> Vec<NodePattern> {
        self.elements()
            .into_iter()
            .filter_map(|e| match e {
                PatternElement::Node(n) => Some(n),
                PatternElement::Rel(_) => None,
            })
            .collect()
    }

    pub fn relationships(&self) -> Vec<RelPattern> {
        self.elements()
            .into_iter()
            .filter_map(|e| match e {
                PatternElement::Rel(r) => Some(r),
                PatternElement::Node(_) => None,
            })
            .collect()
    }
}

impl NamedPath {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn path(&self) -> Option<PatternPath> {
        support::child(self.syntax())
    }
}

impl ShortestPath {
    /// `shortestPath` finds a single path; `allShortestPaths` all of them.
    pub fn is_single(&self) -> bool {
        support::first_token(self.syntax())
            .is_some_and(|t| t.text().eq_ignore_ascii_case("shortestpath"))
    }

    pub fn path(&self) -> Option<PatternPath> {
        support::child(self.syntax())
    }
}

impl NodePattern {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        support::children(self.syntax())
    }

    /// Attached property map or parameter.
    pub fn properties(&self) -> Option<Expression> {
        self.syntax()
            .children()
            .find(|n| matches!(n.kind(), SyntaxKind::Map | SyntaxKind::Parameter))
            .and_then(Expression::cast)
    }
}

impl RelPattern {
    pub fn direction(&self) -> Direction {
        let has_left = support::has_token(self.syntax(), SyntaxKind::Lt);
        let has_right = support::has_token(self.syntax(), SyntaxKind::Gt);
        match (has_left, has_right) {
            (true, false) => Direction::Inbound,
            (false, true) => Direction::Outbound,
            _ => Direction::Bidirectional,
        }
    }

    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn reltypes(&self) -> impl Iterator<Item = Reltype> + '_ {
        support::children(self.syntax())
    }

    /// The `*range` of a variable-length relationship.
    pub fn varlength(&self) -> Option<Range> {
        support::child(self.syntax())
    }

    pub fn properties(&self) -> Option<Expression> {
        self.syntax()
            .children()
            .find(|n| matches!(n.kind(), SyntaxKind::Map | SyntaxKind::Parameter))
            .and_then(Expression::cast)
    }
}

impl Range {
    /// Lower bound; for an exact `*n` both bounds are the same node.
    pub fn start(&self) -> Option<Integer> {
        if self.has_dotdot() {
            self.integer_relative_to_dotdot(true)
        } else {
            support::child(self.syntax())
        }
    }

    /// Upper bound, if bounded.
    pub fn end(&self) -> Option<Integer> {
        if self.has_dotdot() {
            self.integer_relative_to_dotdot(false)
        } else {
            support::child(self.syntax())
        }
    }

    fn has_dotdot(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::DotDot)
    }

    fn integer_relative_to_dotdot(&self, before: bool) -> Option<Integer> {
        let mut past_dots = false;
        for element in self.syntax().children_with_tokens() {
            match element {
                SyntaxElement::Token(t) if t.kind() == SyntaxKind::DotDot => past_dots = true,
                SyntaxElement::Node(n) => {
                    if let Some(int) = Integer::cast(n)
                        && past_dots != before
                    {
                        return Some(int);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

//! Expression wrappers and the operator enumeration.

use super::support;
use super::{CypherNode, FunctionName, Identifier, Label, PropName, ast_node, ast_union};
use crate::parser::cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

ast_union!(
    /// Any expression node.
    Expression,
    Expression
);
ast_node!(UnaryOperator, UnaryOperator);
ast_node!(BinaryOperator, BinaryOperator);
ast_node!(Comparison, Comparison);
ast_node!(ApplyOperator, ApplyOperator);
ast_node!(ApplyAllOperator, ApplyAllOperator);
ast_node!(PropertyOperator, PropertyOperator);
ast_node!(SubscriptOperator, SubscriptOperator);
ast_node!(SliceOperator, SliceOperator);
ast_node!(LabelsOperator, LabelsOperator);
ast_node!(ListComprehension, ListComprehension);
ast_node!(PatternComprehension, PatternComprehension);
ast_node!(Case, Case);
ast_node!(Filter, Filter);
ast_node!(Extract, Extract);
ast_node!(Reduce, Reduce);
ast_node!(Collection, Collection);
ast_node!(Map, Map);

/// `all(...)`, `any(...)`, `none(...)`, `single(...)` share one wrapper -
/// same slots, four kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredicateFunction(pub(crate) SyntaxNode);

impl CypherNode for PredicateFunction {
    fn cast(node: SyntaxNode) -> Option<Self> {
        Self::can_cast(node.kind()).then(|| Self(node))
    }

    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::All | SyntaxKind::Any | SyntaxKind::None | SyntaxKind::Single
        )
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

/// Operators carried by unary, binary and comparison nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Or,
    Xor,
    And,
    Not,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
    Pow,
    UnaryPlus,
    UnaryMinus,
    Regex,
    In,
    StartsWith,
    EndsWith,
    Contains,
    IsNull,
    IsNotNull,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::And => "AND",
            Operator::Not => "NOT",
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanEqual => "<=",
            Operator::GreaterThanEqual => ">=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Mult => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "^",
            Operator::UnaryPlus => "+",
            Operator::UnaryMinus => "-",
            Operator::Regex => "=~",
            Operator::In => "IN",
            Operator::StartsWith => "STARTS WITH",
            Operator::EndsWith => "ENDS WITH",
            Operator::Contains => "CONTAINS",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn operator_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(SyntaxElement::into_token)
        .filter(|t| !t.kind().is_trivia())
}

fn binary_operator_of(token: SyntaxKind) -> Option<Operator> {
    Some(match token {
        SyntaxKind::KwOr => Operator::Or,
        SyntaxKind::KwXor => Operator::Xor,
        SyntaxKind::KwAnd => Operator::And,
        SyntaxKind::Eq => Operator::Equal,
        SyntaxKind::NotEq => Operator::NotEqual,
        SyntaxKind::Lt => Operator::LessThan,
        SyntaxKind::Gt => Operator::GreaterThan,
        SyntaxKind::Lte => Operator::LessThanEqual,
        SyntaxKind::Gte => Operator::GreaterThanEqual,
        SyntaxKind::Plus => Operator::Plus,
        SyntaxKind::Minus => Operator::Minus,
        SyntaxKind::Star => Operator::Mult,
        SyntaxKind::Slash => Operator::Div,
        SyntaxKind::Percent => Operator::Mod,
        SyntaxKind::Caret => Operator::Pow,
        SyntaxKind::RegexEq => Operator::Regex,
        SyntaxKind::KwIn => Operator::In,
        SyntaxKind::KwStarts => Operator::StartsWith,
        SyntaxKind::KwEnds => Operator::EndsWith,
        SyntaxKind::KwContains => Operator::Contains,
        _ => return None,
    })
}

impl UnaryOperator {
    pub fn operator(&self) -> Option<Operator> {
        let tokens: Vec<SyntaxToken> = operator_tokens(self.syntax()).collect();
        for (i, token) in tokens.iter().enumerate() {
            match token.kind() {
                SyntaxKind::Plus => return Some(Operator::UnaryPlus),
                SyntaxKind::Minus => return Some(Operator::UnaryMinus),
                SyntaxKind::KwNot => return Some(Operator::Not),
                SyntaxKind::KwIs => {
                    let negated = tokens[i..].iter().any(|t| t.kind() == SyntaxKind::KwNot);
                    return Some(if negated {
                        Operator::IsNotNull
                    } else {
                        Operator::IsNull
                    });
                }
                _ => {}
            }
        }
        None
    }

    pub fn argument(&self) -> Option<Expression> {
        support::child(self.syntax())
    }
}

impl BinaryOperator {
    pub fn operator(&self) -> Option<Operator> {
        operator_tokens(self.syntax()).find_map(|t| binary_operator_of(t.kind()))
    }

    pub fn left(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 0)
    }

    pub fn right(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 1)
    }
}

impl Comparison {
    /// Number of comparison operators in the chain.
    pub fn length(&self) -> usize {
        self.operators().len()
    }

    pub fn operators(&self) -> Vec<Operator> {
        operator_tokens(self.syntax())
            .filter_map(|t| binary_operator_of(t.kind()))
            .collect()
    }

    /// `length() + 1` chained operands.
    pub fn arguments(&self) -> impl Iterator<Item = Expression> + '_ {
        support::children(self.syntax())
    }
}

impl ApplyOperator {
    pub fn func_name(&self) -> Option<FunctionName> {
        support::child(self.syntax())
    }

    pub fn is_distinct(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwDistinct)
    }

    pub fn args(&self) -> impl Iterator<Item = Expression> + '_ {
        support::children(self.syntax())
    }
}

impl ApplyAllOperator {
    pub fn func_name(&self) -> Option<FunctionName> {
        support::child(self.syntax())
    }

    pub fn is_distinct(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwDistinct)
    }
}

impl PropertyOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::child(self.syntax())
    }

    pub fn prop_name(&self) -> Option<PropName> {
        support::child(self.syntax())
    }
}

impl SubscriptOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 0)
    }

    pub fn subscript(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 1)
    }
}

impl SliceOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 0)
    }

    /// Expression before the `..`, excluding the sliced value itself.
    pub fn start(&self) -> Option<Expression> {
        self.bound(true)
    }

    pub fn end(&self) -> Option<Expression> {
        self.bound(false)
    }

    fn bound(&self, before: bool) -> Option<Expression> {
        let mut past_dots = false;
        let mut seen_base = false;
        for element in self.syntax().children_with_tokens() {
            match element {
                SyntaxElement::Token(t) if t.kind() == SyntaxKind::DotDot => past_dots = true,
                SyntaxElement::Node(n) => {
                    if let Some(expr) = Expression::cast(n) {
                        if !seen_base {
                            seen_base = true;
                            continue;
                        }
                        if past_dots != before {
                            return Some(expr);
                        }
                    }
                }
                _ => {}
            }
        }
        None
    }
}

impl LabelsOperator {
    pub fn expression(&self) -> Option<Expression> {
        support::child(self.syntax())
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        support::children(self.syntax())
    }
}

impl ListComprehension {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwIn)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwWhere)
    }

    pub fn eval(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::Pipe)
    }
}

impl PatternComprehension {
    pub fn identifier(&self) -> Option<Identifier> {
        // only a direct child names the path; identifiers inside the
        // pattern belong to deeper nodes
        support::child(self.syntax())
    }

    pub fn path(&self) -> Option<super::PatternPath> {
        support::child(self.syntax())
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwWhere)
    }

    pub fn eval(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::Pipe)
    }
}

impl Case {
    /// The subject expression of a simple `CASE x WHEN ...`; `None` for the
    /// searched form.
    pub fn expression(&self) -> Option<Expression> {
        for element in self.syntax().children_with_tokens() {
            match element {
                SyntaxElement::Token(t) if t.kind() == SyntaxKind::KwWhen => return None,
                SyntaxElement::Node(n) => return Expression::cast(n),
                _ => {}
            }
        }
        None
    }

    /// `(predicate, value)` pairs of the `WHEN ... THEN ...` alternatives.
    pub fn alternatives(&self) -> Vec<(Expression, Expression)> {
        let mut out = Vec::new();
        let mut pending: Option<Expression> = None;
        let mut in_alternatives = false;
        let mut after_else = false;
        for element in self.syntax().children_with_tokens() {
            match element {
                SyntaxElement::Token(t) => match t.kind() {
                    SyntaxKind::KwWhen => in_alternatives = true,
                    SyntaxKind::KwElse => after_else = true,
                    _ => {}
                },
                SyntaxElement::Node(n) => {
                    if !in_alternatives || after_else {
                        continue;
                    }
                    let Some(expr) = Expression::cast(n) else {
                        continue;
                    };
                    match pending.take() {
                        Some(predicate) => out.push((predicate, expr)),
                        None => pending = Some(expr),
                    }
                }
            }
        }
        out
    }

    /// The `ELSE` expression.
    pub fn default(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwElse)
    }
}

impl Filter {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwIn)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwWhere)
    }
}

impl Extract {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwIn)
    }

    pub fn eval(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::Pipe)
    }
}

impl PredicateFunction {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwIn)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwWhere)
    }
}

impl Reduce {
    pub fn accumulator(&self) -> Option<Identifier> {
        support::nth_child(self.syntax(), 0)
    }

    pub fn init(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::Eq)
    }

    pub fn identifier(&self) -> Option<Identifier> {
        support::children::<Identifier>(self.syntax()).nth(1)
    }

    pub fn expression(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwIn)
    }

    pub fn eval(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::Pipe)
    }
}

impl Collection {
    pub fn elements(&self) -> impl Iterator<Item = Expression> + '_ {
        support::children(self.syntax())
    }
}

impl Map {
    /// Key/value pairs in source order.
    pub fn entries(&self) -> Vec<(PropName, Expression)> {
        let mut out = Vec::new();
        let mut pending: Option<PropName> = None;
        for child in self.syntax().children() {
            if let Some(key) = PropName::cast(child.clone()) {
                pending = Some(key);
            } else if let Some(value) = Expression::cast(child)
                && let Some(key) = pending.take()
            {
                out.push((key, value));
            }
        }
        out
    }
}

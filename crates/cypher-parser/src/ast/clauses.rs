//! Query and clause wrappers.

use super::support;
use super::{
    CypherNode, Expression, Identifier, IndexName, Integer, Label, Pattern, PatternPath,
    ProcName, PropName, PropertyOperator, Str, ast_node, ast_union,
};
use crate::parser::cst::SyntaxKind;

ast_node!(Query, Query);
ast_union!(QueryOption, QueryOption);
ast_node!(UsingPeriodicCommit, UsingPeriodicCommit);
ast_union!(
    /// Any clause of a query.
    Clause,
    QueryClause
);
ast_node!(Match, Match);
ast_union!(MatchHint, MatchHint);
ast_node!(UsingIndexHint, UsingIndexHint);
ast_node!(UsingJoinHint, UsingJoinHint);
ast_node!(UsingScanHint, UsingScanHint);
ast_node!(Merge, Merge);
ast_union!(MergeAction, MergeAction);
ast_node!(OnMatch, OnMatch);
ast_node!(OnCreate, OnCreate);
ast_node!(Create, Create);
ast_node!(Set, Set);
ast_union!(SetItem, SetItem);
ast_node!(SetProperty, SetProperty);
ast_node!(SetAllProperties, SetAllProperties);
ast_node!(MergeProperties, MergeProperties);
ast_node!(SetLabels, SetLabels);
ast_node!(Delete, Delete);
ast_node!(Remove, Remove);
ast_union!(RemoveItem, RemoveItem);
ast_node!(RemoveLabels, RemoveLabels);
ast_node!(RemoveProperty, RemoveProperty);
ast_node!(Foreach, Foreach);
ast_node!(With, With);
ast_node!(Unwind, Unwind);
ast_node!(Call, Call);
ast_node!(Return, Return);
ast_node!(Projection, Projection);
ast_node!(OrderBy, OrderBy);
ast_node!(SortItem, SortItem);
ast_node!(Union, Union);
ast_node!(LoadCsv, LoadCsv);
ast_node!(Start, Start);
ast_union!(StartPoint, StartPoint);
ast_node!(NodeIndexLookup, NodeIndexLookup);
ast_node!(NodeIndexQuery, NodeIndexQuery);
ast_node!(NodeIdLookup, NodeIdLookup);
ast_node!(AllNodesScan, AllNodesScan);
ast_node!(RelIndexLookup, RelIndexLookup);
ast_node!(RelIndexQuery, RelIndexQuery);
ast_node!(RelIdLookup, RelIdLookup);
ast_node!(AllRelsScan, AllRelsScan);

impl Query {
    pub fn options(&self) -> impl Iterator<Item = QueryOption> + '_ {
        support::children(self.syntax())
    }

    pub fn clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        support::children(self.syntax())
    }
}

impl UsingPeriodicCommit {
    pub fn limit(&self) -> Option<Integer> {
        support::child(self.syntax())
    }
}

impl Match {
    pub fn is_optional(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwOptional)
    }

    pub fn pattern(&self) -> Option<Pattern> {
        support::child(self.syntax())
    }

    pub fn hints(&self) -> impl Iterator<Item = MatchHint> + '_ {
        support::children(self.syntax())
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwWhere)
    }
}

impl UsingIndexHint {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn label(&self) -> Option<Label> {
        support::child(self.syntax())
    }

    pub fn prop_name(&self) -> Option<PropName> {
        support::child(self.syntax())
    }
}

impl UsingJoinHint {
    pub fn identifiers(&self) -> impl Iterator<Item = Identifier> + '_ {
        support::children(self.syntax())
    }
}

impl UsingScanHint {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn label(&self) -> Option<Label> {
        support::child(self.syntax())
    }
}

impl Merge {
    pub fn path(&self) -> Option<PatternPath> {
        support::child(self.syntax())
    }

    pub fn actions(&self) -> impl Iterator<Item = MergeAction> + '_ {
        support::children(self.syntax())
    }
}

impl OnMatch {
    pub fn items(&self) -> impl Iterator<Item = SetItem> + '_ {
        support::children(self.syntax())
    }
}

impl OnCreate {
    pub fn items(&self) -> impl Iterator<Item = SetItem> + '_ {
        support::children(self.syntax())
    }
}

impl Create {
    pub fn is_unique(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwUnique)
    }

    pub fn pattern(&self) -> Option<Pattern> {
        support::child(self.syntax())
    }
}

impl Set {
    pub fn items(&self) -> impl Iterator<Item = SetItem> + '_ {
        support::children(self.syntax())
    }
}

impl SetProperty {
    pub fn property(&self) -> Option<PropertyOperator> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 1)
    }
}

impl SetAllProperties {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 1)
    }
}

impl MergeProperties {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::nth_child(self.syntax(), 1)
    }
}

impl SetLabels {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        support::children(self.syntax())
    }
}

impl Delete {
    pub fn is_detach(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwDetach)
    }

    pub fn expressions(&self) -> impl Iterator<Item = Expression> + '_ {
        support::children(self.syntax())
    }
}

impl Remove {
    pub fn items(&self) -> impl Iterator<Item = RemoveItem> + '_ {
        support::children(self.syntax())
    }
}

impl RemoveLabels {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        support::children(self.syntax())
    }
}

impl RemoveProperty {
    pub fn property(&self) -> Option<PropertyOperator> {
        support::child(self.syntax())
    }
}

impl Foreach {
    pub fn identifier(&self) -> Option<Identifier> {
        support::child(self.syntax())
    }

    pub fn expression(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwIn)
    }

    pub fn clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        support::children(self.syntax())
    }
}

impl With {
    pub fn is_distinct(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwDistinct)
    }

    /// `WITH *` includes the existing projections.
    pub fn includes_existing(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::Star)
    }

    pub fn projections(&self) -> impl Iterator<Item = Projection> + '_ {
        support::children(self.syntax())
    }

    pub fn order_by(&self) -> Option<OrderBy> {
        support::child(self.syntax())
    }

    pub fn skip(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwSkip)
    }

    pub fn limit(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwLimit)
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwWhere)
    }
}

impl Return {
    pub fn is_distinct(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwDistinct)
    }

    pub fn includes_existing(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::Star)
    }

    pub fn projections(&self) -> impl Iterator<Item = Projection> + '_ {
        support::children(self.syntax())
    }

    pub fn order_by(&self) -> Option<OrderBy> {
        support::child(self.syntax())
    }

    pub fn skip(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwSkip)
    }

    pub fn limit(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwLimit)
    }
}

impl Projection {
    pub fn expression(&self) -> Option<Expression> {
        support::child(self.syntax())
    }

    pub fn alias(&self) -> Option<Identifier> {
        support::node_after_token(self.syntax(), SyntaxKind::KwAs)
    }
}

impl OrderBy {
    pub fn items(&self) -> impl Iterator<Item = SortItem> + '_ {
        support::children(self.syntax())
    }
}

impl SortItem {
    pub fn expression(&self) -> Option<Expression> {
        support::child(self.syntax())
    }

    pub fn is_ascending(&self) -> bool {
        !support::has_token(self.syntax(), SyntaxKind::KwDesc)
            && !support::has_token(self.syntax(), SyntaxKind::KwDescending)
    }
}

impl Union {
    pub fn is_all(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwAll)
    }
}

impl Unwind {
    pub fn expression(&self) -> Option<Expression> {
        support::child(self.syntax())
    }

    pub fn alias(&self) -> Option<Identifier> {
        support::node_after_token(self.syntax(), SyntaxKind::KwAs)
    }
}

impl Call {
    pub fn proc_name(&self) -> Option<ProcName> {
        support::child(self.syntax())
    }

    pub fn args(&self) -> impl Iterator<Item = Expression> + '_ {
        support::children(self.syntax())
    }

    pub fn yield_items(&self) -> impl Iterator<Item = Projection> + '_ {
        support::children(self.syntax())
    }
}

impl LoadCsv {
    pub fn has_headers(&self) -> bool {
        support::has_token(self.syntax(), SyntaxKind::KwHeaders)
    }

    pub fn url(&self) -> Option<Expression> {
        support::child(self.syntax())
    }

    pub fn identifier(&self) -> Option<Identifier> {
        support::node_after_token(self.syntax(), SyntaxKind::KwAs)
    }

    pub fn field_terminator(&self) -> Option<Str> {
        support::node_after_token(self.syntax(), SyntaxKind::KwFieldterminator)
    }
}

impl Start {
    pub fn points(&self) -> impl Iterator<Item = StartPoint> + '_ {
        support::children(self.syntax())
    }

    pub fn predicate(&self) -> Option<Expression> {
        support::node_after_token(self.syntax(), SyntaxKind::KwWhere)
    }
}

macro_rules! index_lookup {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(self.syntax())
            }

            pub fn index_name(&self) -> Option<IndexName> {
                support::child(self.syntax())
            }

            pub fn prop_name(&self) -> Option<PropName> {
                support::child(self.syntax())
            }

            /// The looked-up value: a string or a parameter.
            pub fn lookup(&self) -> Option<Expression> {
                support::nth_child(self.syntax(), 1)
            }
        })+
    };
}

index_lookup!(NodeIndexLookup, RelIndexLookup);

macro_rules! index_query {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(self.syntax())
            }

            pub fn index_name(&self) -> Option<IndexName> {
                support::child(self.syntax())
            }

            pub fn query(&self) -> Option<Expression> {
                support::nth_child(self.syntax(), 1)
            }
        })+
    };
}

index_query!(NodeIndexQuery, RelIndexQuery);

macro_rules! id_lookup {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(self.syntax())
            }

            pub fn ids(&self) -> impl Iterator<Item = Integer> + '_ {
                support::children(self.syntax())
            }
        })+
    };
}

id_lookup!(NodeIdLookup, RelIdLookup);

macro_rules! all_scan {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(self.syntax())
            }
        })+
    };
}

all_scan!(AllNodesScan, AllRelsScan);

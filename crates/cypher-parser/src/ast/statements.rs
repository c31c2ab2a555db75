//! Statements, statement options, schema commands and client commands.

use super::support;
use super::{
    CypherNode, Expression, Identifier, Label, PropName, Reltype, Str, ast_node, ast_union,
};

ast_node!(Statement, Statement);
ast_union!(
    /// `CYPHER`, `EXPLAIN` or `PROFILE`.
    StatementOption,
    StatementOption
);
ast_node!(CypherOption, CypherOption);
ast_node!(CypherOptionParam, CypherOptionParam);
ast_node!(ExplainOption, ExplainOption);
ast_node!(ProfileOption, ProfileOption);
ast_union!(
    /// A query or a schema command.
    StatementBody,
    StatementBody
);
ast_union!(
    /// Any `CREATE`/`DROP` `INDEX`/`CONSTRAINT` command.
    SchemaCommand,
    SchemaCommand
);
ast_node!(CreateNodePropIndex, CreateNodePropIndex);
ast_node!(DropNodePropIndex, DropNodePropIndex);
ast_node!(CreateUniqueNodePropConstraint, CreateUniqueNodePropConstraint);
ast_node!(DropUniqueNodePropConstraint, DropUniqueNodePropConstraint);
ast_node!(
    CreateNodePropExistenceConstraint,
    CreateNodePropExistenceConstraint
);
ast_node!(
    DropNodePropExistenceConstraint,
    DropNodePropExistenceConstraint
);
ast_node!(
    CreateRelPropExistenceConstraint,
    CreateRelPropExistenceConstraint
);
ast_node!(DropRelPropExistenceConstraint, DropRelPropExistenceConstraint);
ast_node!(Command, Command);

impl Statement {
    pub fn options(&self) -> impl Iterator<Item = StatementOption> + '_ {
        support::children(self.syntax())
    }

    pub fn body(&self) -> Option<StatementBody> {
        support::child(self.syntax())
    }
}

impl CypherOption {
    pub fn version(&self) -> Option<Str> {
        support::child(self.syntax())
    }

    pub fn params(&self) -> impl Iterator<Item = CypherOptionParam> + '_ {
        support::children(self.syntax())
    }
}

impl CypherOptionParam {
    pub fn name(&self) -> Option<Str> {
        support::nth_child(self.syntax(), 0)
    }

    pub fn value(&self) -> Option<Str> {
        support::nth_child(self.syntax(), 1)
    }
}

/// Node-label constraints share the `(identifier:Label) ASSERT expression`
/// shape; slots are positional.
macro_rules! node_constraint {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(self.syntax())
            }

            pub fn label(&self) -> Option<Label> {
                support::child(self.syntax())
            }

            pub fn expression(&self) -> Option<Expression> {
                // slot 2: the identifier itself is an expression, skip it
                self.syntax().children().nth(2).and_then(Expression::cast)
            }
        })+
    };
}

node_constraint!(
    CreateUniqueNodePropConstraint,
    DropUniqueNodePropConstraint,
    CreateNodePropExistenceConstraint,
    DropNodePropExistenceConstraint
);

macro_rules! rel_constraint {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn identifier(&self) -> Option<Identifier> {
                support::child(self.syntax())
            }

            pub fn reltype(&self) -> Option<Reltype> {
                support::child(self.syntax())
            }

            pub fn expression(&self) -> Option<Expression> {
                self.syntax().children().nth(2).and_then(Expression::cast)
            }
        })+
    };
}

rel_constraint!(CreateRelPropExistenceConstraint, DropRelPropExistenceConstraint);

macro_rules! prop_index {
    ($($name:ident),+ $(,)?) => {
        $(impl $name {
            pub fn label(&self) -> Option<Label> {
                support::child(self.syntax())
            }

            pub fn prop_name(&self) -> Option<PropName> {
                support::child(self.syntax())
            }
        })+
    };
}

prop_index!(CreateNodePropIndex, DropNodePropIndex);

impl Command {
    pub fn name(&self) -> Option<Str> {
        support::nth_child(self.syntax(), 0)
    }

    pub fn args(&self) -> impl Iterator<Item = Str> + '_ {
        support::children(self.syntax()).skip(1)
    }
}

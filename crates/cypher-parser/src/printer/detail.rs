//! Per-kind detail strings, citing children by ordinal (`@N`).

use crate::ast::{self, CypherNode};
use crate::parser::ParseResult;
use crate::parser::cst::{SyntaxKind as K, SyntaxNode};

/// One-line human-readable summary of a node, or "" when the kind name
/// says it all.
pub(super) fn detail(r: &ParseResult, node: &SyntaxNode) -> String {
    let n = node.clone();
    match node.kind() {
        K::Statement => statement(r, ast::Statement::cast(n).expect("kind checked")),
        K::CypherOption => cypher_option(r, ast::CypherOption::cast(n).expect("kind checked")),
        K::CypherOptionParam => {
            let p = ast::CypherOptionParam::cast(n).expect("kind checked");
            format!("{}={}", opt(r, p.name()), opt(r, p.value()))
        }
        K::CreateNodePropIndex => {
            let i = ast::CreateNodePropIndex::cast(n).expect("kind checked");
            format!("ON=:{}({})", opt(r, i.label()), opt(r, i.prop_name()))
        }
        K::DropNodePropIndex => {
            let i = ast::DropNodePropIndex::cast(n).expect("kind checked");
            format!("ON=:{}({})", opt(r, i.label()), opt(r, i.prop_name()))
        }
        K::CreateUniqueNodePropConstraint => {
            let c = ast::CreateUniqueNodePropConstraint::cast(n).expect("kind checked");
            unique_constraint(r, opt(r, c.identifier()), opt(r, c.label()), c.expression())
        }
        K::DropUniqueNodePropConstraint => {
            let c = ast::DropUniqueNodePropConstraint::cast(n).expect("kind checked");
            unique_constraint(r, opt(r, c.identifier()), opt(r, c.label()), c.expression())
        }
        K::CreateNodePropExistenceConstraint => {
            let c = ast::CreateNodePropExistenceConstraint::cast(n).expect("kind checked");
            existence(r, "(", ")", opt(r, c.identifier()), opt(r, c.label()), c.expression())
        }
        K::DropNodePropExistenceConstraint => {
            let c = ast::DropNodePropExistenceConstraint::cast(n).expect("kind checked");
            existence(r, "(", ")", opt(r, c.identifier()), opt(r, c.label()), c.expression())
        }
        K::CreateRelPropExistenceConstraint => {
            let c = ast::CreateRelPropExistenceConstraint::cast(n).expect("kind checked");
            existence(
                r,
                "()-[",
                "]-()",
                opt(r, c.identifier()),
                opt(r, c.reltype()),
                c.expression(),
            )
        }
        K::DropRelPropExistenceConstraint => {
            let c = ast::DropRelPropExistenceConstraint::cast(n).expect("kind checked");
            existence(
                r,
                "()-[",
                "]-()",
                opt(r, c.identifier()),
                opt(r, c.reltype()),
                c.expression(),
            )
        }
        K::Query => {
            let q = ast::Query::cast(n).expect("kind checked");
            format!("clauses=[{}]", join(r, q.clauses()))
        }
        K::UsingPeriodicCommit => {
            let u = ast::UsingPeriodicCommit::cast(n).expect("kind checked");
            u.limit()
                .map(|l| format!("limit={}", o(r, &l)))
                .unwrap_or_default()
        }
        K::LoadCsv => load_csv(r, ast::LoadCsv::cast(n).expect("kind checked")),
        K::Start => {
            let s = ast::Start::cast(n).expect("kind checked");
            let mut parts = vec![format!("points=[{}]", join(r, s.points()))];
            if let Some(w) = s.predicate() {
                parts.push(format!("where={}", o(r, &w)));
            }
            parts.join(", ")
        }
        K::NodeIndexLookup => {
            let l = ast::NodeIndexLookup::cast(n).expect("kind checked");
            format!(
                "{}=node:{}({} = {})",
                opt(r, l.identifier()),
                opt(r, l.index_name()),
                opt(r, l.prop_name()),
                opt(r, l.lookup())
            )
        }
        K::RelIndexLookup => {
            let l = ast::RelIndexLookup::cast(n).expect("kind checked");
            format!(
                "{}=rel:{}({} = {})",
                opt(r, l.identifier()),
                opt(r, l.index_name()),
                opt(r, l.prop_name()),
                opt(r, l.lookup())
            )
        }
        K::NodeIndexQuery => {
            let q = ast::NodeIndexQuery::cast(n).expect("kind checked");
            format!(
                "{}=node:{}({})",
                opt(r, q.identifier()),
                opt(r, q.index_name()),
                opt(r, q.query())
            )
        }
        K::RelIndexQuery => {
            let q = ast::RelIndexQuery::cast(n).expect("kind checked");
            format!(
                "{}=rel:{}({})",
                opt(r, q.identifier()),
                opt(r, q.index_name()),
                opt(r, q.query())
            )
        }
        K::NodeIdLookup => {
            let l = ast::NodeIdLookup::cast(n).expect("kind checked");
            format!("{}=node({})", opt(r, l.identifier()), join(r, l.ids()))
        }
        K::RelIdLookup => {
            let l = ast::RelIdLookup::cast(n).expect("kind checked");
            format!("{}=rel({})", opt(r, l.identifier()), join(r, l.ids()))
        }
        K::AllNodesScan => {
            let s = ast::AllNodesScan::cast(n).expect("kind checked");
            format!("{}=node(*)", opt(r, s.identifier()))
        }
        K::AllRelsScan => {
            let s = ast::AllRelsScan::cast(n).expect("kind checked");
            format!("{}=rel(*)", opt(r, s.identifier()))
        }
        K::Match => match_clause(r, ast::Match::cast(n).expect("kind checked")),
        K::UsingIndexHint => {
            let h = ast::UsingIndexHint::cast(n).expect("kind checked");
            format!(
                "{}:{}({})",
                opt(r, h.identifier()),
                opt(r, h.label()),
                opt(r, h.prop_name())
            )
        }
        K::UsingJoinHint => {
            let h = ast::UsingJoinHint::cast(n).expect("kind checked");
            format!("on=[{}]", join(r, h.identifiers()))
        }
        K::UsingScanHint => {
            let h = ast::UsingScanHint::cast(n).expect("kind checked");
            format!("{}:{}", opt(r, h.identifier()), opt(r, h.label()))
        }
        K::Merge => {
            let m = ast::Merge::cast(n).expect("kind checked");
            let mut parts = vec![format!("path={}", opt(r, m.path()))];
            let actions = join(r, m.actions());
            if !actions.is_empty() {
                parts.push(format!("actions=[{actions}]"));
            }
            parts.join(", ")
        }
        K::OnMatch => {
            let a = ast::OnMatch::cast(n).expect("kind checked");
            format!("items=[{}]", join(r, a.items()))
        }
        K::OnCreate => {
            let a = ast::OnCreate::cast(n).expect("kind checked");
            format!("items=[{}]", join(r, a.items()))
        }
        K::Create => {
            let c = ast::Create::cast(n).expect("kind checked");
            let mut parts = Vec::new();
            if c.is_unique() {
                parts.push("UNIQUE".to_string());
            }
            parts.push(format!("pattern={}", opt(r, c.pattern())));
            parts.join(", ")
        }
        K::Set => {
            let s = ast::Set::cast(n).expect("kind checked");
            format!("items=[{}]", join(r, s.items()))
        }
        K::SetProperty => {
            let s = ast::SetProperty::cast(n).expect("kind checked");
            format!("{}={}", opt(r, s.property()), opt(r, s.expression()))
        }
        K::SetAllProperties => {
            let s = ast::SetAllProperties::cast(n).expect("kind checked");
            format!("{}={}", opt(r, s.identifier()), opt(r, s.expression()))
        }
        K::MergeProperties => {
            let s = ast::MergeProperties::cast(n).expect("kind checked");
            format!("{}+={}", opt(r, s.identifier()), opt(r, s.expression()))
        }
        K::SetLabels => {
            let s = ast::SetLabels::cast(n).expect("kind checked");
            format!("{}{}", opt(r, s.identifier()), labels_suffix(r, s.labels()))
        }
        K::Delete => {
            let d = ast::Delete::cast(n).expect("kind checked");
            let mut parts = Vec::new();
            if d.is_detach() {
                parts.push("DETACH".to_string());
            }
            parts.push(format!("expressions=[{}]", join(r, d.expressions())));
            parts.join(", ")
        }
        K::Remove => {
            let rm = ast::Remove::cast(n).expect("kind checked");
            format!("items=[{}]", join(r, rm.items()))
        }
        K::RemoveLabels => {
            let rm = ast::RemoveLabels::cast(n).expect("kind checked");
            format!("{}{}", opt(r, rm.identifier()), labels_suffix(r, rm.labels()))
        }
        K::RemoveProperty => {
            let rm = ast::RemoveProperty::cast(n).expect("kind checked");
            format!("prop={}", opt(r, rm.property()))
        }
        K::Foreach => {
            let f = ast::Foreach::cast(n).expect("kind checked");
            format!(
                "[{} IN {} | {}]",
                opt(r, f.identifier()),
                opt(r, f.expression()),
                join(r, f.clauses())
            )
        }
        K::With => {
            let w = ast::With::cast(n).expect("kind checked");
            projecting_clause(
                w.is_distinct(),
                w.includes_existing(),
                join(r, w.projections()),
                w.order_by().map(|x| o(r, &x)),
                w.skip().map(|x| o(r, &x)),
                w.limit().map(|x| o(r, &x)),
                w.predicate().map(|x| o(r, &x)),
            )
        }
        K::Unwind => {
            let u = ast::Unwind::cast(n).expect("kind checked");
            format!(
                "expression={}, alias={}",
                opt(r, u.expression()),
                opt(r, u.alias())
            )
        }
        K::Call => {
            let c = ast::Call::cast(n).expect("kind checked");
            let mut parts = vec![format!("name={}", opt(r, c.proc_name()))];
            parts.push(format!("args=[{}]", join(r, c.args())));
            let yields = join(r, c.yield_items());
            if !yields.is_empty() {
                parts.push(format!("yield=[{yields}]"));
            }
            parts.join(", ")
        }
        K::Return => {
            let ret = ast::Return::cast(n).expect("kind checked");
            projecting_clause(
                ret.is_distinct(),
                ret.includes_existing(),
                join(r, ret.projections()),
                ret.order_by().map(|x| o(r, &x)),
                ret.skip().map(|x| o(r, &x)),
                ret.limit().map(|x| o(r, &x)),
                None,
            )
        }
        K::Projection => {
            let p = ast::Projection::cast(n).expect("kind checked");
            match p.alias() {
                Some(alias) => format!(
                    "expression={}, alias={}",
                    opt(r, p.expression()),
                    o(r, &alias)
                ),
                None => format!("expression={}", opt(r, p.expression())),
            }
        }
        K::OrderBy => {
            let ob = ast::OrderBy::cast(n).expect("kind checked");
            format!("items=[{}]", join(r, ob.items()))
        }
        K::SortItem => {
            let s = ast::SortItem::cast(n).expect("kind checked");
            let dir = if s.is_ascending() {
                "ASCENDING"
            } else {
                "DESCENDING"
            };
            format!("expression={}, {dir}", opt(r, s.expression()))
        }
        K::Union => {
            let u = ast::Union::cast(n).expect("kind checked");
            if u.is_all() {
                "ALL".to_string()
            } else {
                String::new()
            }
        }
        K::UnaryOperator => {
            let u = ast::UnaryOperator::cast(n).expect("kind checked");
            let arg = opt(r, u.argument());
            match u.operator() {
                Some(op @ (ast::Operator::IsNull | ast::Operator::IsNotNull)) => {
                    format!("{arg} {op}")
                }
                Some(op) => format!("{op} {arg}"),
                None => arg,
            }
        }
        K::BinaryOperator => {
            let b = ast::BinaryOperator::cast(n).expect("kind checked");
            let op = b.operator().map(|op| op.to_string()).unwrap_or_default();
            format!("{} {op} {}", opt(r, b.left()), opt(r, b.right()))
        }
        K::Comparison => {
            let c = ast::Comparison::cast(n).expect("kind checked");
            let args: Vec<String> = c.arguments().map(|a| o(r, &a)).collect();
            let ops = c.operators();
            let mut out = String::new();
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    let op = ops.get(i - 1).map(|op| op.as_str()).unwrap_or("?");
                    out.push_str(&format!(" {op} "));
                }
                out.push_str(arg);
            }
            out
        }
        K::ApplyOperator => {
            let a = ast::ApplyOperator::cast(n).expect("kind checked");
            let distinct = if a.is_distinct() { "DISTINCT " } else { "" };
            format!("{}({distinct}{})", opt(r, a.func_name()), join(r, a.args()))
        }
        K::ApplyAllOperator => {
            let a = ast::ApplyAllOperator::cast(n).expect("kind checked");
            let distinct = if a.is_distinct() { "DISTINCT " } else { "" };
            format!("{}({distinct}*)", opt(r, a.func_name()))
        }
        K::PropertyOperator => {
            let p = ast::PropertyOperator::cast(n).expect("kind checked");
            format!("{}.{}", opt(r, p.expression()), opt(r, p.prop_name()))
        }
        K::SubscriptOperator => {
            let s = ast::SubscriptOperator::cast(n).expect("kind checked");
            format!("{}[{}]", opt(r, s.expression()), opt(r, s.subscript()))
        }
        K::SliceOperator => {
            let s = ast::SliceOperator::cast(n).expect("kind checked");
            format!(
                "{}[{}..{}]",
                opt(r, s.expression()),
                s.start().map(|e| o(r, &e)).unwrap_or_default(),
                s.end().map(|e| o(r, &e)).unwrap_or_default()
            )
        }
        K::LabelsOperator => {
            let l = ast::LabelsOperator::cast(n).expect("kind checked");
            format!("{}{}", opt(r, l.expression()), labels_suffix(r, l.labels()))
        }
        K::ListComprehension => {
            let lc = ast::ListComprehension::cast(n).expect("kind checked");
            comprehension(
                r,
                lc.identifier().map(|i| o(r, &i)),
                opt(r, lc.expression()),
                lc.predicate(),
                lc.eval(),
            )
        }
        K::PatternComprehension => {
            let pc = ast::PatternComprehension::cast(n).expect("kind checked");
            let mut out = String::from("[");
            if let Some(id) = pc.identifier() {
                out.push_str(&format!("{}=", o(r, &id)));
            }
            out.push_str(&opt(r, pc.path()));
            if let Some(p) = pc.predicate() {
                out.push_str(&format!(" WHERE {}", o(r, &p)));
            }
            if let Some(e) = pc.eval() {
                out.push_str(&format!(" | {}", o(r, &e)));
            }
            out.push(']');
            out
        }
        K::Case => {
            let c = ast::Case::cast(n).expect("kind checked");
            let mut parts = Vec::new();
            if let Some(e) = c.expression() {
                parts.push(format!("expression={}", o(r, &e)));
            }
            let alts: Vec<String> = c
                .alternatives()
                .iter()
                .map(|(p, v)| format!("({}:{})", o(r, p), o(r, v)))
                .collect();
            parts.push(format!("alternatives=[{}]", alts.join(", ")));
            if let Some(d) = c.default() {
                parts.push(format!("default={}", o(r, &d)));
            }
            parts.join(", ")
        }
        K::Filter => {
            let f = ast::Filter::cast(n).expect("kind checked");
            comprehension(
                r,
                f.identifier().map(|i| o(r, &i)),
                opt(r, f.expression()),
                f.predicate(),
                None,
            )
        }
        K::Extract => {
            let e = ast::Extract::cast(n).expect("kind checked");
            comprehension(
                r,
                e.identifier().map(|i| o(r, &i)),
                opt(r, e.expression()),
                None,
                e.eval(),
            )
        }
        K::All | K::Any | K::Single | K::None => {
            let p = ast::PredicateFunction::cast(n).expect("kind checked");
            comprehension(
                r,
                p.identifier().map(|i| o(r, &i)),
                opt(r, p.expression()),
                p.predicate(),
                None,
            )
        }
        K::Reduce => {
            let red = ast::Reduce::cast(n).expect("kind checked");
            format!(
                "[{}={}, {} IN {} | {}]",
                opt(r, red.accumulator()),
                opt(r, red.init()),
                opt(r, red.identifier()),
                opt(r, red.expression()),
                opt(r, red.eval())
            )
        }
        K::Collection => {
            let c = ast::Collection::cast(n).expect("kind checked");
            format!("[{}]", join(r, c.elements()))
        }
        K::Map => {
            let m = ast::Map::cast(n).expect("kind checked");
            let entries: Vec<String> = m
                .entries()
                .iter()
                .map(|(k, v)| format!("{}:{}", o(r, k), o(r, v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        K::Identifier => {
            let id = ast::Identifier::cast(n).expect("kind checked");
            format!("`{}`", id.name())
        }
        K::Parameter => {
            let p = ast::Parameter::cast(n).expect("kind checked");
            format!("${}", p.name())
        }
        K::String => {
            let s = ast::Str::cast(n).expect("kind checked");
            format!("\"{}\"", escape_display(&s.value()))
        }
        K::Integer => ast::Integer::cast(n).expect("kind checked").literal(),
        K::Float => ast::Float::cast(n).expect("kind checked").literal(),
        K::Label => format!(":`{}`", ast::Label::cast(n).expect("kind checked").name()),
        K::Reltype => format!(":`{}`", ast::Reltype::cast(n).expect("kind checked").name()),
        K::PropName => format!("`{}`", ast::PropName::cast(n).expect("kind checked").name()),
        K::FunctionName => {
            format!("`{}`", ast::FunctionName::cast(n).expect("kind checked").name())
        }
        K::IndexName => format!("`{}`", ast::IndexName::cast(n).expect("kind checked").name()),
        K::ProcName => format!("`{}`", ast::ProcName::cast(n).expect("kind checked").name()),
        K::Pattern => {
            let p = ast::Pattern::cast(n).expect("kind checked");
            format!("paths=[{}]", join(r, p.paths()))
        }
        K::PatternPath => {
            let elements: Vec<String> = n
                .children()
                .map(|c| format!("@{}", r.ordinal_of(&c).unwrap_or_default()))
                .collect();
            format!("[{}]", elements.join(", "))
        }
        K::NamedPath => {
            let p = ast::NamedPath::cast(n).expect("kind checked");
            format!("{}={}", opt(r, p.identifier()), opt(r, p.path()))
        }
        K::ShortestPath => {
            let p = ast::ShortestPath::cast(n).expect("kind checked");
            format!("single={}, path={}", p.is_single(), opt(r, p.path()))
        }
        K::NodePattern => node_pattern(r, ast::NodePattern::cast(n).expect("kind checked")),
        K::RelPattern => rel_pattern(r, ast::RelPattern::cast(n).expect("kind checked")),
        K::Range => range_detail(r, ast::Range::cast(n).expect("kind checked")),
        K::Command => {
            let c = ast::Command::cast(n).expect("kind checked");
            format!("name={}, args=[{}]", opt(r, c.name()), join(r, c.args()))
        }
        K::LineComment => {
            let c = ast::LineComment::cast(n).expect("kind checked");
            format!("//{}", c.value())
        }
        K::BlockComment => {
            let c = ast::BlockComment::cast(n).expect("kind checked");
            format!("/*{}*/", c.value())
        }
        _ => String::new(),
    }
}

/// `@N` for a typed node.
fn o<T: CypherNode>(r: &ParseResult, node: &T) -> String {
    format!("@{}", r.ordinal_of(node.syntax()).unwrap_or_default())
}

/// `@N` for an optional slot; "?" marks a slot recovery left unfilled.
fn opt<T: CypherNode>(r: &ParseResult, node: Option<T>) -> String {
    node.map_or_else(|| "?".to_string(), |n| o(r, &n))
}

fn join<T: CypherNode>(r: &ParseResult, nodes: impl Iterator<Item = T>) -> String {
    nodes.map(|n| o(r, &n)).collect::<Vec<_>>().join(", ")
}

fn labels_suffix(r: &ParseResult, labels: impl Iterator<Item = ast::Label>) -> String {
    labels.map(|l| format!(":{}", o(r, &l))).collect()
}

fn statement(r: &ParseResult, s: ast::Statement) -> String {
    let options = join(r, s.options());
    let body = s.body().map(|b| o(r, &b));
    let mut parts = Vec::new();
    if !options.is_empty() {
        parts.push(format!("options=[{options}]"));
    }
    if let Some(body) = body {
        parts.push(format!("body={body}"));
    }
    parts.join(", ")
}

fn cypher_option(r: &ParseResult, c: ast::CypherOption) -> String {
    let mut parts = Vec::new();
    if let Some(v) = c.version() {
        parts.push(format!("version={}", o(r, &v)));
    }
    let params = join(r, c.params());
    if !params.is_empty() {
        parts.push(format!("params=[{params}]"));
    }
    parts.join(", ")
}

fn unique_constraint(
    r: &ParseResult,
    identifier: String,
    label: String,
    expression: Option<ast::Expression>,
) -> String {
    format!(
        "ON=({identifier}:{label}), IS UNIQUE=({})",
        expression.map_or_else(|| "?".to_string(), |e| o(r, &e))
    )
}

fn existence(
    r: &ParseResult,
    open: &str,
    close: &str,
    identifier: String,
    entity: String,
    expression: Option<ast::Expression>,
) -> String {
    format!(
        "ON={open}{identifier}:{entity}{close}, ASSERT exists({})",
        expression.map_or_else(|| "?".to_string(), |e| o(r, &e))
    )
}

fn load_csv(r: &ParseResult, l: ast::LoadCsv) -> String {
    let mut parts = Vec::new();
    if l.has_headers() {
        parts.push("WITH HEADERS".to_string());
    }
    parts.push(format!("url={}", opt(r, l.url())));
    parts.push(format!("identifier={}", opt(r, l.identifier())));
    if let Some(t) = l.field_terminator() {
        parts.push(format!("field_terminator={}", o(r, &t)));
    }
    parts.join(", ")
}

fn match_clause(r: &ParseResult, m: ast::Match) -> String {
    let mut parts = Vec::new();
    if m.is_optional() {
        parts.push("OPTIONAL".to_string());
    }
    parts.push(format!("pattern={}", opt(r, m.pattern())));
    let hints = join(r, m.hints());
    if !hints.is_empty() {
        parts.push(format!("hints=[{hints}]"));
    }
    if let Some(w) = m.predicate() {
        parts.push(format!("where={}", o(r, &w)));
    }
    parts.join(", ")
}

fn projecting_clause(
    distinct: bool,
    includes_existing: bool,
    projections: String,
    order_by: Option<String>,
    skip: Option<String>,
    limit: Option<String>,
    predicate: Option<String>,
) -> String {
    let mut parts = Vec::new();
    if distinct {
        parts.push("DISTINCT".to_string());
    }
    if includes_existing {
        parts.push("*".to_string());
    }
    parts.push(format!("projections=[{projections}]"));
    if let Some(ob) = order_by {
        parts.push(format!("order_by={ob}"));
    }
    if let Some(s) = skip {
        parts.push(format!("skip={s}"));
    }
    if let Some(l) = limit {
        parts.push(format!("limit={l}"));
    }
    if let Some(w) = predicate {
        parts.push(format!("where={w}"));
    }
    parts.join(", ")
}

fn comprehension(
    r: &ParseResult,
    identifier: Option<String>,
    expression: String,
    predicate: Option<ast::Expression>,
    eval: Option<ast::Expression>,
) -> String {
    let mut out = String::from("[");
    out.push_str(&identifier.unwrap_or_else(|| "?".to_string()));
    out.push_str(&format!(" IN {expression}"));
    if let Some(p) = predicate {
        out.push_str(&format!(" WHERE {}", o(r, &p)));
    }
    if let Some(e) = eval {
        out.push_str(&format!(" | {}", o(r, &e)));
    }
    out.push(']');
    out
}

fn node_pattern(r: &ParseResult, np: ast::NodePattern) -> String {
    let mut out = String::from("(");
    if let Some(id) = np.identifier() {
        out.push_str(&o(r, &id));
    }
    out.push_str(&labels_suffix(r, np.labels()));
    if let Some(props) = np.properties() {
        out.push_str(&format!(" {{{}}}", o(r, &props)));
    }
    out.push(')');
    out
}

fn rel_pattern(r: &ParseResult, rp: ast::RelPattern) -> String {
    let mut inner = String::new();
    if let Some(id) = rp.identifier() {
        inner.push_str(&o(r, &id));
    }
    let types: Vec<String> = rp.reltypes().map(|t| format!(":{}", o(r, &t))).collect();
    inner.push_str(&types.join("|"));
    if let Some(range) = rp.varlength() {
        inner.push_str(&format!("*{}", o(r, &range)));
    }
    if let Some(props) = rp.properties() {
        inner.push_str(&format!(" {{{}}}", o(r, &props)));
    }
    let (head, tail) = match rp.direction() {
        ast::Direction::Inbound => ("<-[", "]-"),
        ast::Direction::Outbound => ("-[", "]->"),
        ast::Direction::Bidirectional => ("-[", "]-"),
    };
    format!("{head}{inner}{tail}")
}

fn range_detail(r: &ParseResult, range: ast::Range) -> String {
    let start = range.start();
    let end = range.end();
    match (start, end) {
        (None, None) => "*".to_string(),
        (Some(s), None) => format!("*{}..", o(r, &s)),
        (None, Some(e)) => format!("*..{}", o(r, &e)),
        (Some(s), Some(e)) => {
            if s.syntax() == e.syntax() {
                format!("*{}", o(r, &s))
            } else {
                format!("*{}..{}", o(r, &s), o(r, &e))
            }
        }
    }
}

/// Escape control characters for single-line display.
fn escape_display(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

//! Syntax kinds for Cypher.
//!
//! One `SyntaxKind` enumeration covers token kinds (produced by the lexer)
//! and AST node kinds (produced by the parser). Logos derives token
//! recognition; node kinds carry no token/regex attributes. `CypherLang`
//! implements rowan's `Language` trait for tree construction.
//!
//! Node kind discriminants start at a fixed base and are append-only: the
//! numbering is public contract and must not be reshuffled between minor
//! versions. Abstract kinds (`Expression`, `QueryClause`, ...) are never
//! instantiated in trees; they exist so the parent-kind relation can be
//! expressed and queried.

use rowan::Language;

// The enum lives in its own module so the `use SyntaxKind::*;` glob import
// below (needed so the impls can refer to variants unqualified) does not
// shadow prelude names like `None`/`Some` inside the Logos-derived impl,
// which matches on `Option<u8>`/`Option<u64>` lookahead bytes internally.
mod kind_enum {
    use logos::Logos;
    use super::NODE_BASE;

    /// All token and node kinds. Tokens first, then nodes from [`super::NODE_BASE`],
    /// then the `__Last` sentinel.
    #[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[repr(u16)]
    pub enum SyntaxKind {
    // --- Punctuation and operators ---
    #[token(";")]
    Semicolon = 0,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    /// `..` for slices and variable-length ranges.
    #[token("..")]
    DotDot,
    #[token(":")]
    Colon,
    #[token("|")]
    Pipe,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("<>")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    Lte,
    #[token(">=")]
    Gte,
    #[token("=~")]
    RegexEq,

    // --- Literals and names ---
    /// Decimal, hex (`0x...`) and octal (`0...`) integers. The textual form
    /// is preserved; classification happens on access.
    #[regex("0[xX][0-9a-fA-F]+|[0-9]+")]
    IntegerLiteral,
    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+")]
    FloatLiteral,
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLiteral,
    /// Backtick-quoted identifier; embedded backticks are doubled.
    #[regex(r"`(?:[^`]|``)*`")]
    EscapedId,
    /// `$name`, `$123` or ``$`quoted` `` parameter.
    #[regex(r"\$(?:[A-Za-z_][A-Za-z0-9_]*|[0-9]+|`(?:[^`]|``)*`)")]
    Param,
    /// Plain identifier. Keywords are carved out of these by the lexer's
    /// post-pass; non-ASCII identifiers require backticks.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Id,

    // --- Trivia ---
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    #[regex(r"//[^\n]*")]
    CommentLine,
    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    CommentBlock,

    // --- Lexical error tokens ---
    /// A string that never closes. Matches only when the closed form cannot.
    #[regex(r#""(?:[^"\\]|\\.)*"#)]
    #[regex(r"'(?:[^'\\]|\\.)*")]
    UnterminatedString,
    #[regex(r"`(?:[^`]|``)*")]
    UnterminatedEscapedId,
    #[regex(r"/\*(?:[^*]|\*[^/])*")]
    UnterminatedComment,
    /// Coalesced run of bytes no rule matched.
    Garbage,
    /// Lookahead sentinel; never stored in trees.
    Eof,

    // --- Keywords (case-insensitive; produced by the lexer post-pass) ---
    KwAll,
    KwAllShortestPaths,
    KwAnd,
    KwAny,
    KwAs,
    KwAsc,
    KwAscending,
    KwAssert,
    KwBy,
    KwCall,
    KwCase,
    KwCommit,
    KwConstraint,
    KwContains,
    KwCreate,
    KwCsv,
    KwCypher,
    KwDelete,
    KwDesc,
    KwDescending,
    KwDetach,
    KwDistinct,
    KwDrop,
    KwElse,
    KwEnd,
    KwEnds,
    KwExplain,
    KwExtract,
    KwFalse,
    KwFieldterminator,
    KwFilter,
    KwForeach,
    KwFrom,
    KwHeaders,
    KwIn,
    KwIndex,
    KwIs,
    KwJoin,
    KwLimit,
    KwLoad,
    KwMatch,
    KwMerge,
    KwNode,
    KwNone,
    KwNot,
    KwNull,
    KwOn,
    KwOptional,
    KwOr,
    KwOrder,
    KwPeriodic,
    KwProfile,
    KwReduce,
    KwRel,
    KwRelationship,
    KwRemove,
    KwReturn,
    KwScan,
    KwSet,
    KwShortestPath,
    KwSingle,
    KwSkip,
    KwStart,
    KwStarts,
    KwThen,
    KwTrue,
    KwUnion,
    KwUnique,
    KwUnwind,
    KwUsing,
    KwWhen,
    KwWhere,
    KwWith,
    KwXor,
    KwYield,

    // --- AST node kinds (public, append-only numbering) ---
    Statement = NODE_BASE,
    /// Abstract: `CYPHER`/`EXPLAIN`/`PROFILE` statement options.
    StatementOption,
    CypherOption,
    CypherOptionParam,
    ExplainOption,
    ProfileOption,
    /// Abstract: a statement body is a query or a schema command.
    StatementBody,
    /// Abstract: schema commands.
    SchemaCommand,
    CreateNodePropIndex,
    DropNodePropIndex,
    CreateUniqueNodePropConstraint,
    DropUniqueNodePropConstraint,
    CreateNodePropExistenceConstraint,
    DropNodePropExistenceConstraint,
    CreateRelPropExistenceConstraint,
    DropRelPropExistenceConstraint,
    Query,
    /// Abstract: query options.
    QueryOption,
    UsingPeriodicCommit,
    /// Abstract: query clauses.
    QueryClause,
    LoadCsv,
    Start,
    /// Abstract: `START` points.
    StartPoint,
    NodeIndexLookup,
    NodeIndexQuery,
    NodeIdLookup,
    AllNodesScan,
    RelIndexLookup,
    RelIndexQuery,
    RelIdLookup,
    AllRelsScan,
    Match,
    /// Abstract: `MATCH` hints.
    MatchHint,
    UsingIndexHint,
    UsingJoinHint,
    UsingScanHint,
    Merge,
    /// Abstract: `ON MATCH` / `ON CREATE` actions.
    MergeAction,
    OnMatch,
    OnCreate,
    Create,
    Set,
    /// Abstract: items of a `SET` clause.
    SetItem,
    SetProperty,
    SetAllProperties,
    MergeProperties,
    SetLabels,
    Delete,
    Remove,
    /// Abstract: items of a `REMOVE` clause.
    RemoveItem,
    RemoveLabels,
    RemoveProperty,
    Foreach,
    With,
    Unwind,
    Call,
    Return,
    Projection,
    OrderBy,
    SortItem,
    Union,
    /// Abstract: expressions.
    Expression,
    UnaryOperator,
    BinaryOperator,
    Comparison,
    ApplyOperator,
    ApplyAllOperator,
    PropertyOperator,
    SubscriptOperator,
    SliceOperator,
    LabelsOperator,
    ListComprehension,
    PatternComprehension,
    Case,
    Filter,
    Extract,
    Reduce,
    All,
    Any,
    Single,
    None,
    Collection,
    Map,
    Identifier,
    Parameter,
    String,
    Integer,
    Float,
    /// Abstract: boolean literals.
    Boolean,
    True,
    False,
    Null,
    Label,
    Reltype,
    PropName,
    FunctionName,
    IndexName,
    ProcName,
    Pattern,
    PatternPath,
    NamedPath,
    ShortestPath,
    NodePattern,
    RelPattern,
    Range,
    Command,
    /// Abstract: comments.
    Comment,
    LineComment,
    BlockComment,
    Error,
    /// Internal root wrapping the directives of one parsed segment.
    Root,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __Last,
    }
}
pub use kind_enum::SyntaxKind;

/// First node-kind discriminant. Node kinds are numbered from here so token
/// churn cannot renumber them.
pub const NODE_BASE: u16 = 120;

const LAST_TOKEN: u16 = SyntaxKind::KwYield as u16;

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | CommentLine | CommentBlock)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        let k = self as u16;
        (KwAll as u16..=KwYield as u16).contains(&k)
    }

    #[inline]
    pub fn is_node(self) -> bool {
        (self as u16) >= NODE_BASE && self != __Last
    }

    /// The kinds this kind directly declares as parents. The relation forms
    /// a DAG; use [`SyntaxKind::is_instance`] for the transitive query.
    pub fn parent_kinds(self) -> &'static [SyntaxKind] {
        match self {
            CypherOption | ExplainOption | ProfileOption => &[StatementOption],
            Query | SchemaCommand => &[StatementBody],
            CreateNodePropIndex
            | DropNodePropIndex
            | CreateUniqueNodePropConstraint
            | DropUniqueNodePropConstraint
            | CreateNodePropExistenceConstraint
            | DropNodePropExistenceConstraint
            | CreateRelPropExistenceConstraint
            | DropRelPropExistenceConstraint => &[SchemaCommand],
            UsingPeriodicCommit => &[QueryOption],
            LoadCsv | Start | Match | Merge | Create | Set | Delete | Remove | Foreach | With
            | Unwind | Call | Return | Union => &[QueryClause],
            NodeIndexLookup | NodeIndexQuery | NodeIdLookup | AllNodesScan | RelIndexLookup
            | RelIndexQuery | RelIdLookup | AllRelsScan => &[StartPoint],
            UsingIndexHint | UsingJoinHint | UsingScanHint => &[MatchHint],
            OnMatch | OnCreate => &[MergeAction],
            SetProperty | SetAllProperties | MergeProperties | SetLabels => &[SetItem],
            RemoveLabels | RemoveProperty => &[RemoveItem],
            UnaryOperator | BinaryOperator | Comparison | ApplyOperator | ApplyAllOperator
            | PropertyOperator | SubscriptOperator | SliceOperator | LabelsOperator
            | ListComprehension | PatternComprehension | Case | Filter | Extract | Reduce | All
            | Any | Single | SyntaxKind::None | Collection | Map | Identifier | Parameter
            | String | Integer | Float | Null => &[Expression],
            Boolean | PatternPath => &[Expression],
            True | False => &[Boolean],
            NamedPath | ShortestPath => &[PatternPath],
            LineComment | BlockComment => &[Comment],
            _ => &[],
        }
    }

    /// Whether `ancestor` is this kind or appears in its transitive
    /// parent-kind closure.
    pub fn is_instance(self, ancestor: SyntaxKind) -> bool {
        if self == ancestor {
            return true;
        }
        self.parent_kinds().iter().any(|p| p.is_instance(ancestor))
    }

    /// Display name used by the structural printer.
    ///
    /// Only meaningful for node kinds; token kinds fall back to their debug
    /// name.
    pub fn ast_name(self) -> &'static str {
        match self {
            Statement => "statement",
            StatementOption => "statement option",
            CypherOption => "CYPHER",
            CypherOptionParam => "cypher parameter",
            ExplainOption => "EXPLAIN",
            ProfileOption => "PROFILE",
            StatementBody => "statement body",
            SchemaCommand => "schema command",
            CreateNodePropIndex => "create index",
            DropNodePropIndex => "drop index",
            CreateUniqueNodePropConstraint => "create unique constraint",
            DropUniqueNodePropConstraint => "drop unique constraint",
            CreateNodePropExistenceConstraint => "create node prop constraint",
            DropNodePropExistenceConstraint => "drop node prop constraint",
            CreateRelPropExistenceConstraint => "create rel prop constraint",
            DropRelPropExistenceConstraint => "drop rel prop constraint",
            Query => "query",
            QueryOption => "query option",
            UsingPeriodicCommit => "USING PERIODIC COMMIT",
            QueryClause => "query clause",
            LoadCsv => "LOAD CSV",
            Start => "START",
            StartPoint => "start point",
            NodeIndexLookup => "node index lookup",
            NodeIndexQuery => "node index query",
            NodeIdLookup => "node id lookup",
            AllNodesScan => "all nodes scan",
            RelIndexLookup => "rel index lookup",
            RelIndexQuery => "rel index query",
            RelIdLookup => "rel id lookup",
            AllRelsScan => "all rels scan",
            Match => "MATCH",
            MatchHint => "match hint",
            UsingIndexHint => "USING INDEX",
            UsingJoinHint => "USING JOIN ON",
            UsingScanHint => "USING SCAN",
            Merge => "MERGE",
            MergeAction => "merge action",
            OnMatch => "ON MATCH",
            OnCreate => "ON CREATE",
            Create => "CREATE",
            Set => "SET",
            SetItem => "set item",
            SetProperty => "set property",
            SetAllProperties => "set all properties",
            MergeProperties => "merge properties",
            SetLabels => "set labels",
            Delete => "DELETE",
            Remove => "REMOVE",
            RemoveItem => "remove item",
            RemoveLabels => "remove labels",
            RemoveProperty => "remove property",
            Foreach => "FOREACH",
            With => "WITH",
            Unwind => "UNWIND",
            Call => "CALL",
            Return => "RETURN",
            Projection => "projection",
            OrderBy => "ORDER BY",
            SortItem => "sort item",
            Union => "UNION",
            Expression => "expression",
            UnaryOperator => "unary operator",
            BinaryOperator => "binary operator",
            Comparison => "comparison",
            ApplyOperator => "apply",
            ApplyAllOperator => "apply all",
            PropertyOperator => "property",
            SubscriptOperator => "subscript",
            SliceOperator => "slice",
            LabelsOperator => "has labels",
            ListComprehension => "list comprehension",
            PatternComprehension => "pattern comprehension",
            Case => "case",
            Filter => "filter",
            Extract => "extract",
            Reduce => "reduce",
            All => "all",
            Any => "any",
            Single => "single",
            SyntaxKind::None => "none",
            Collection => "collection",
            Map => "map",
            Identifier => "identifier",
            Parameter => "parameter",
            String => "string",
            Integer => "integer",
            Float => "float",
            Boolean => "boolean",
            True => "TRUE",
            False => "FALSE",
            Null => "NULL",
            Label => "label",
            Reltype => "rel type",
            PropName => "prop name",
            FunctionName => "function name",
            IndexName => "index name",
            ProcName => "proc name",
            Pattern => "pattern",
            PatternPath => "pattern path",
            NamedPath => "named path",
            ShortestPath => "shortestPath",
            NodePattern => "node pattern",
            RelPattern => "rel pattern",
            Range => "range",
            Command => "command",
            Comment => "comment",
            LineComment => "line_comment",
            BlockComment => "block_comment",
            Error => "error",
            Root => "root",
            _ => "token",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CypherLang {}

impl Language for CypherLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(
            raw.0 <= LAST_TOKEN || (NODE_BASE..__Last as u16).contains(&raw.0),
            "raw kind {} out of range",
            raw.0
        );
        // SAFETY: the value is a discriminant we produced; SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<CypherLang>;
pub type SyntaxToken = rowan::SyntaxToken<CypherLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 256-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; 4]);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 256.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut words = [0u64; 4];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 256, "SyntaxKind value exceeds TokenSet capacity");
            words[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(words)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 256 {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        let mut i = 0u16;
        while i < __Last as u16 {
            if (i <= LAST_TOKEN || i >= NODE_BASE) && self.contains(CypherLang::kind_from_raw(rowan::SyntaxKind(i))) {
                list.entry(&CypherLang::kind_from_raw(rowan::SyntaxKind(i)));
            }
            i += 1;
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that can begin a clause. Doubles as the recovery set while
    /// synchronizing after a syntax error.
    pub const CLAUSE_START: TokenSet = TokenSet::new(&[
        KwMatch,
        KwOptional,
        KwUsing,
        KwLoad,
        KwStart,
        KwCreate,
        KwMerge,
        KwSet,
        KwDelete,
        KwDetach,
        KwRemove,
        KwForeach,
        KwWith,
        KwUnwind,
        KwCall,
        KwReturn,
        KwUnion,
    ]);

    /// FIRST set of expressions.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        IntegerLiteral,
        FloatLiteral,
        StringLiteral,
        EscapedId,
        Param,
        Id,
        ParenOpen,
        BracketOpen,
        BraceOpen,
        Plus,
        Minus,
        KwTrue,
        KwFalse,
        KwNull,
        KwNot,
        KwCase,
        KwFilter,
        KwExtract,
        KwReduce,
        KwAll,
        KwAny,
        KwNone,
        KwSingle,
        KwShortestPath,
        KwAllShortestPaths,
    ]);

    /// Comparison operator tokens (chainable).
    pub const COMPARISON_OPS: TokenSet = TokenSet::new(&[Eq, NotEq, Lt, Gt, Lte, Gte]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kinds_start_at_base() {
        assert_eq!(Statement as u16, NODE_BASE);
        assert!((KwYield as u16) < NODE_BASE);
    }

    #[test]
    fn ancestor_chain_is_transitive() {
        assert!(True.is_instance(Boolean));
        assert!(True.is_instance(Expression));
        assert!(!True.is_instance(QueryClause));
        assert!(CreateUniqueNodePropConstraint.is_instance(SchemaCommand));
        assert!(CreateUniqueNodePropConstraint.is_instance(StatementBody));
        assert!(ShortestPath.is_instance(Expression));
        assert!(Match.is_instance(QueryClause));
        assert!(!Match.is_instance(Expression));
    }

    #[test]
    fn every_kind_is_its_own_instance() {
        assert!(Expression.is_instance(Expression));
        assert!(Integer.is_instance(Integer));
    }

    #[test]
    fn token_set_spans_all_words() {
        let set = TokenSet::new(&[Semicolon, KwYield, Statement, Root]);
        assert!(set.contains(Semicolon));
        assert!(set.contains(KwYield));
        assert!(set.contains(Statement));
        assert!(set.contains(Root));
        assert!(!set.contains(KwMatch));
    }

    #[test]
    fn keyword_range_is_tight() {
        assert!(KwAll.is_keyword());
        assert!(KwYield.is_keyword());
        assert!(!Id.is_keyword());
        assert!(!Statement.is_keyword());
    }
}

//! Lexer for Cypher source.
//!
//! Produces span-based tokens without storing text - text is sliced from the
//! source only when needed. Keywords are case-insensitive, so the logos rules
//! only recognize identifiers; a post-pass classifies them against a static
//! lowercase keyword table.
//!
//! ## Error handling
//!
//! Unterminated strings, quoted identifiers and block comments have their own
//! token kinds so the parser can report them precisely. Any other
//! unrecognized bytes coalesce into single `Garbage` tokens rather than one
//! error per byte.

use logos::Logos;
use phf::phf_map;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Maps lowercased identifier text to keyword kinds.
static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "all" => SyntaxKind::KwAll,
    "allshortestpaths" => SyntaxKind::KwAllShortestPaths,
    "and" => SyntaxKind::KwAnd,
    "any" => SyntaxKind::KwAny,
    "as" => SyntaxKind::KwAs,
    "asc" => SyntaxKind::KwAsc,
    "ascending" => SyntaxKind::KwAscending,
    "assert" => SyntaxKind::KwAssert,
    "by" => SyntaxKind::KwBy,
    "call" => SyntaxKind::KwCall,
    "case" => SyntaxKind::KwCase,
    "commit" => SyntaxKind::KwCommit,
    "constraint" => SyntaxKind::KwConstraint,
    "contains" => SyntaxKind::KwContains,
    "create" => SyntaxKind::KwCreate,
    "csv" => SyntaxKind::KwCsv,
    "cypher" => SyntaxKind::KwCypher,
    "delete" => SyntaxKind::KwDelete,
    "desc" => SyntaxKind::KwDesc,
    "descending" => SyntaxKind::KwDescending,
    "detach" => SyntaxKind::KwDetach,
    "distinct" => SyntaxKind::KwDistinct,
    "drop" => SyntaxKind::KwDrop,
    "else" => SyntaxKind::KwElse,
    "end" => SyntaxKind::KwEnd,
    "ends" => SyntaxKind::KwEnds,
    "explain" => SyntaxKind::KwExplain,
    "extract" => SyntaxKind::KwExtract,
    "false" => SyntaxKind::KwFalse,
    "fieldterminator" => SyntaxKind::KwFieldterminator,
    "filter" => SyntaxKind::KwFilter,
    "foreach" => SyntaxKind::KwForeach,
    "from" => SyntaxKind::KwFrom,
    "headers" => SyntaxKind::KwHeaders,
    "in" => SyntaxKind::KwIn,
    "index" => SyntaxKind::KwIndex,
    "is" => SyntaxKind::KwIs,
    "join" => SyntaxKind::KwJoin,
    "limit" => SyntaxKind::KwLimit,
    "load" => SyntaxKind::KwLoad,
    "match" => SyntaxKind::KwMatch,
    "merge" => SyntaxKind::KwMerge,
    "node" => SyntaxKind::KwNode,
    "none" => SyntaxKind::KwNone,
    "not" => SyntaxKind::KwNot,
    "null" => SyntaxKind::KwNull,
    "on" => SyntaxKind::KwOn,
    "optional" => SyntaxKind::KwOptional,
    "or" => SyntaxKind::KwOr,
    "order" => SyntaxKind::KwOrder,
    "periodic" => SyntaxKind::KwPeriodic,
    "profile" => SyntaxKind::KwProfile,
    "reduce" => SyntaxKind::KwReduce,
    "rel" => SyntaxKind::KwRel,
    "relationship" => SyntaxKind::KwRelationship,
    "remove" => SyntaxKind::KwRemove,
    "return" => SyntaxKind::KwReturn,
    "scan" => SyntaxKind::KwScan,
    "set" => SyntaxKind::KwSet,
    "shortestpath" => SyntaxKind::KwShortestPath,
    "single" => SyntaxKind::KwSingle,
    "skip" => SyntaxKind::KwSkip,
    "start" => SyntaxKind::KwStart,
    "starts" => SyntaxKind::KwStarts,
    "then" => SyntaxKind::KwThen,
    "true" => SyntaxKind::KwTrue,
    "union" => SyntaxKind::KwUnion,
    "unique" => SyntaxKind::KwUnique,
    "unwind" => SyntaxKind::KwUnwind,
    "using" => SyntaxKind::KwUsing,
    "when" => SyntaxKind::KwWhen,
    "where" => SyntaxKind::KwWhere,
    "with" => SyntaxKind::KwWith,
    "xor" => SyntaxKind::KwXor,
    "yield" => SyntaxKind::KwYield,
};

fn keyword_kind(ident: &str) -> Option<SyntaxKind> {
    if !ident.is_ascii() {
        return None;
    }
    KEYWORDS.get(ident.to_ascii_lowercase().as_str()).copied()
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the logos output:
/// - Classifies identifier tokens against the keyword table
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }

                let span = lexer.span();
                let kind = if kind == SyntaxKind::Id {
                    keyword_kind(lexer.slice()).unwrap_or(SyntaxKind::Id)
                } else {
                    kind
                };
                tokens.push(Token::new(kind, range_to_text_range(span)));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use SyntaxKind::*;
    use std::string::String;

    fn kinds(source: &str) -> Vec<SyntaxKind> {
        lex(source)
            .iter()
            .map(|t| t.kind)
            .filter(|k| *k != Whitespace)
            .collect()
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(kinds("MATCH match MaTcH"), vec![KwMatch, KwMatch, KwMatch]);
    }

    #[test]
    fn identifiers_survive_classification() {
        assert_eq!(kinds("matcher n"), vec![Id, Id]);
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(
            kinds("1 017 0x1A 1.5 .5 1e10 1.5e-3"),
            vec![
                IntegerLiteral,
                IntegerLiteral,
                IntegerLiteral,
                FloatLiteral,
                FloatLiteral,
                FloatLiteral,
                FloatLiteral
            ]
        );
    }

    #[test]
    fn dotdot_does_not_eat_floats() {
        assert_eq!(
            kinds("a[1..2]"),
            vec![
                Id,
                BracketOpen,
                IntegerLiteral,
                DotDot,
                IntegerLiteral,
                BracketClose
            ]
        );
    }

    #[test]
    fn strings_both_quotes() {
        assert_eq!(kinds(r#""a" 'b' "a\"b""#), vec![
            StringLiteral,
            StringLiteral,
            StringLiteral
        ]);
    }

    #[test]
    fn unterminated_string_is_reported() {
        assert_eq!(kinds(r#"RETURN "abc"#), vec![KwReturn, UnterminatedString]);
    }

    #[test]
    fn escaped_identifiers() {
        assert_eq!(kinds("`a b` `a``b`"), vec![EscapedId, EscapedId]);
        assert_eq!(kinds("`open"), vec![UnterminatedEscapedId]);
    }

    #[test]
    fn parameters() {
        assert_eq!(kinds("$name $1 $`odd name`"), vec![Param, Param, Param]);
    }

    #[test]
    fn comments() {
        assert_eq!(lex("// line\n")[0].kind, CommentLine);
        assert_eq!(kinds("/* block */"), vec![CommentBlock]);
        assert_eq!(kinds("/* open"), vec![UnterminatedComment]);
    }

    #[test]
    fn operators() {
        assert_eq!(
            kinds("<> <= >= =~ += .. ^ %"),
            vec![NotEq, Lte, Gte, RegexEq, PlusEq, DotDot, Caret, Percent]
        );
    }

    #[test]
    fn garbage_coalesces() {
        let tokens = lex("a \u{1}\u{2} b");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Id, Whitespace, Garbage, Whitespace, Id]);
    }

    #[test]
    fn spans_reconstruct_source() {
        let source = "MATCH (n:Person) RETURN n.name; // done";
        let tokens = lex(source);
        let rebuilt: String = tokens.iter().map(|t| token_text(source, t)).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn unicode_in_backticks() {
        let source = "`país`";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, EscapedId);
        assert_eq!(token_text(source, &tokens[0]), source);
    }
}

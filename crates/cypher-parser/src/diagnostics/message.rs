//! Resolved parse errors with positions and context snippets.

use crate::colorization::Colorization;
use crate::source::InputPosition;

/// Widest context snippet, in codepoints.
const MAX_CONTEXT_WIDTH: usize = 72;

/// A recoverable syntax or lexical error.
///
/// Carries the absolute position of the offending token, a human-readable
/// message, the line of input containing the error (windowed when long), and
/// the byte offset into that snippet where a caret should point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) position: InputPosition,
    pub(crate) message: String,
    pub(crate) context: String,
    pub(crate) context_offset: usize,
}

impl ParseError {
    pub fn position(&self) -> InputPosition {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The line of input containing the error, possibly windowed.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Byte offset into [`ParseError::context`] where the caret points.
    pub fn context_offset(&self) -> usize {
        self.context_offset
    }

    /// Render the error the way `cypher-lint` reports it, wrapping elements
    /// in the scheme's escapes.
    pub fn render(&self, colors: &Colorization) -> String {
        let caret_pad = self.context[..self.context_offset].chars().count();
        format!(
            "{} {}({}){}:\n{}{}{}\n{:pad$}^",
            self.message,
            colors.error_message.begin,
            self.position,
            colors.error_message.end,
            colors.error_context.begin,
            self.context,
            colors.error_context.end,
            "",
            pad = caret_pad,
        )
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&Colorization::NONE))
    }
}

/// Extract the line containing `offset` from `text`, windowed to
/// [`MAX_CONTEXT_WIDTH`] codepoints. Returns the snippet and the byte offset
/// of `offset` within it.
pub(crate) fn extract_context(text: &str, offset: usize) -> (String, usize) {
    let offset = offset.min(text.len());
    let line_start = text[..offset]
        .rfind(['\n', '\r'])
        .map_or(0, |idx| idx + 1);
    let line_end = text[offset..]
        .find(['\n', '\r'])
        .map_or(text.len(), |idx| offset + idx);
    let line = &text[line_start..line_end];
    let caret = offset - line_start;

    if line.chars().count() <= MAX_CONTEXT_WIDTH {
        return (line.to_string(), caret);
    }

    // Window the line so the caret sits inside it, preferring to show what
    // precedes the error.
    let caret_chars = line[..caret].chars().count();
    let skip = caret_chars.saturating_sub(MAX_CONTEXT_WIDTH * 3 / 4);
    let start = line
        .char_indices()
        .nth(skip)
        .map_or(0, |(idx, _)| idx);
    let windowed: String = line[start..].chars().take(MAX_CONTEXT_WIDTH).collect();
    (windowed, caret - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_the_error_line() {
        let (ctx, caret) = extract_context("RETURN 1 +;", 10);
        assert_eq!(ctx, "RETURN 1 +;");
        assert_eq!(caret, 10);
    }

    #[test]
    fn context_spans_one_line_only() {
        let (ctx, caret) = extract_context("RETURN 1;\nRETURN +;\nRETURN 2;", 17);
        assert_eq!(ctx, "RETURN +;");
        assert_eq!(caret, 7);
    }

    #[test]
    fn long_lines_are_windowed() {
        let text = format!("RETURN {}x", "a + ".repeat(50));
        let (ctx, caret) = extract_context(&text, text.len() - 1);
        assert!(ctx.chars().count() <= 72);
        assert!(caret < ctx.len());
        assert_eq!(ctx.as_bytes()[caret], b'x');
    }

    #[test]
    fn render_places_caret() {
        let err = ParseError {
            position: InputPosition {
                offset: 10,
                line: 1,
                column: 11,
            },
            message: "Invalid input ';'".to_string(),
            context: "RETURN 1 +;".to_string(),
            context_offset: 10,
        };
        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "Invalid input ';' (line 1, column 11, offset 10):\nRETURN 1 +;\n          ^"
        );
    }
}

//! Structural printer for parse results.
//!
//! Renders every AST node on one line:
//!
//! ```text
//! @0   0..9  statement         body=@1
//! @1   0..8  > query           clauses=[@2]
//! ```
//!
//! The ordinal, range and kind columns are never truncated; the detail
//! string is cut with an ellipsis when it would exceed the configured
//! output width. Every element is wrapped in the colorization scheme's
//! begin/end escapes.

mod detail;

use std::io::Write;

use crate::colorization::Colorization;
use crate::parser::cst::SyntaxNode;
use crate::parser::ParseResult;

/// Builder-style printer borrowed from a result; the tree is never mutated.
pub struct AstPrinter<'r> {
    result: &'r ParseResult,
    width: usize,
    colors: Colorization,
}

impl ParseResult {
    pub fn printer(&self) -> AstPrinter<'_> {
        AstPrinter::new(self)
    }
}

impl<'r> AstPrinter<'r> {
    pub(crate) fn new(result: &'r ParseResult) -> Self {
        Self {
            result,
            width: 0,
            colors: Colorization::NONE,
        }
    }

    /// Soft output width; 0 leaves lines unbounded.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn colorization(mut self, colors: Colorization) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = Vec::new();
        self.print(&mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("printer output is UTF-8")
    }

    pub fn print(&self, w: &mut impl Write) -> std::io::Result<()> {
        let rows = self.collect_rows();
        let Some(layout) = Layout::measure(&rows) else {
            return Ok(());
        };
        for row in &rows {
            self.print_row(w, row, &layout)?;
        }
        Ok(())
    }

    fn collect_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for directive in self.result.directives() {
            self.collect_node(directive.syntax(), 0, &mut rows);
        }
        rows
    }

    fn collect_node(&self, node: &SyntaxNode, depth: usize, rows: &mut Vec<Row>) {
        let ordinal = self
            .result
            .ordinal_of(node)
            .expect("printed node belongs to this result");
        let range = self
            .result
            .range_of(node)
            .expect("printed node belongs to this result");
        rows.push(Row {
            ordinal,
            range: format!("{range}"),
            depth,
            name: node.kind().ast_name(),
            detail: detail::detail(self.result, node),
        });
        for child in node.children() {
            self.collect_node(&child, depth + 1, rows);
        }
    }

    fn print_row(&self, w: &mut impl Write, row: &Row, layout: &Layout) -> std::io::Result<()> {
        let c = &self.colors;
        let ordinal = format!("@{}", row.ordinal);
        let indent = "> ".repeat(row.depth);

        write!(
            w,
            "{}{:<ow$}{} {}{:>rw$}{}  {}{}{}{}{}{}",
            c.ast_ordinal.begin,
            ordinal,
            c.ast_ordinal.end,
            c.ast_range.begin,
            row.range,
            c.ast_range.end,
            c.ast_indent.begin,
            indent,
            c.ast_indent.end,
            c.ast_type.begin,
            row.name,
            c.ast_type.end,
            ow = layout.ordinal_width,
            rw = layout.range_width,
        )?;

        if !row.detail.is_empty() {
            let used = layout.ordinal_width + 1 + layout.range_width + 2;
            let label_len = indent.len() + row.name.len();
            let pad = layout.label_width.saturating_sub(label_len) + 2;
            let detail = self.fit_detail(&row.detail, used + layout.label_width + 2);
            if !detail.is_empty() {
                write!(
                    w,
                    "{:pad$}{}{}{}",
                    "",
                    c.ast_desc.begin,
                    detail,
                    c.ast_desc.end,
                    pad = pad,
                )?;
            }
        }
        writeln!(w)
    }

    /// Truncate a detail string so the full line stays within the width.
    fn fit_detail(&self, detail: &str, prefix_columns: usize) -> String {
        if self.width == 0 {
            return detail.to_string();
        }
        let available = self.width.saturating_sub(prefix_columns);
        let chars = detail.chars().count();
        if chars <= available {
            return detail.to_string();
        }
        if available <= 3 {
            return String::new();
        }
        let mut out: String = detail.chars().take(available - 3).collect();
        out.push_str("...");
        out
    }
}

struct Row {
    ordinal: usize,
    range: String,
    depth: usize,
    name: &'static str,
    detail: String,
}

struct Layout {
    ordinal_width: usize,
    range_width: usize,
    label_width: usize,
}

impl Layout {
    fn measure(rows: &[Row]) -> Option<Layout> {
        if rows.is_empty() {
            return None;
        }
        let ordinal_width = rows
            .iter()
            .map(|r| format!("@{}", r.ordinal).len())
            .max()?;
        let range_width = rows.iter().map(|r| r.range.len()).max()?;
        let label_width = rows.iter().map(|r| r.depth * 2 + r.name.len()).max()?;
        Some(Layout {
            ordinal_width,
            range_width,
            label_width,
        })
    }
}

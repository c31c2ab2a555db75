//! Collection of in-flight diagnostics, ranged over one directive's text.

use rowan::TextRange;

/// A syntax problem at a range of the current directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Diagnostic {
    pub range: TextRange,
    pub message: String,
}

/// Accumulates diagnostics while a directive parses.
#[derive(Debug, Clone, Default)]
pub(crate) struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn report(&mut self, range: TextRange, message: impl Into<String>) {
        self.0.push(Diagnostic {
            range,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

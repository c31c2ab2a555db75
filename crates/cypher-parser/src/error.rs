//! Library error type.
//!
//! Syntax and lexical problems never surface here - they are recorded in the
//! parse result. Only resource-level failures abort a parse.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// The input stream failed while reading.
    #[error("input stream error: {0}")]
    Io(#[from] std::io::Error),
}

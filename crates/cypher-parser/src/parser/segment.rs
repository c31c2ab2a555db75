//! Streaming directive segmenter.
//!
//! Splits the input stream into directive-sized chunks without holding the
//! whole input in memory. A chunk ends at a top-level `;` (outside strings,
//! quoted identifiers and comments), at end of input, or - when the first
//! significant byte is `:` - at an unescaped newline, so client commands
//! stay line-oriented. The segmenter carries the absolute input position of
//! every chunk it hands out.

use std::io::BufRead;

use log::{debug, warn};

use crate::source::InputPosition;

/// One directive's worth of input.
#[derive(Debug)]
pub(crate) struct Segment {
    pub text: String,
    pub base: InputPosition,
    pub is_command: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    SingleQuoted,
    DoubleQuoted,
    Backticked,
    LineComment,
    BlockComment,
}

pub(crate) struct Segmenter<R> {
    reader: R,
    buf: Vec<u8>,
    pos: InputPosition,
    eof: bool,
}

impl<R: BufRead> Segmenter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: InputPosition::START,
            eof: false,
        }
    }

    fn fill(&mut self) -> std::io::Result<()> {
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            self.eof = true;
        }
        Ok(())
    }

    /// Scan out the next directive chunk, or `None` at end of input.
    pub fn next_segment(&mut self) -> std::io::Result<Option<Segment>> {
        let mut state = State::Code;
        let mut is_command = false;
        let mut seen_significant = false;
        let mut end: Option<usize> = None;
        let mut i = 0;

        'scan: loop {
            if i >= self.buf.len() {
                if self.eof {
                    break 'scan;
                }
                self.fill()?;
                continue;
            }
            let b = self.buf[i];
            // two-byte decisions wait for the next byte to arrive
            let needs_peek = matches!(
                (state, b),
                (State::Code, b'/')
                    | (State::BlockComment, b'*')
                    | (State::Code, b'\\')
                    | (State::SingleQuoted | State::DoubleQuoted, b'\\')
            );
            if needs_peek && i + 1 >= self.buf.len() && !self.eof {
                self.fill()?;
                continue;
            }
            let next = self.buf.get(i + 1).copied();

            match state {
                State::Code => match b {
                    b';' if !is_command => {
                        end = Some(i);
                        break 'scan;
                    }
                    b'\n' if is_command => {
                        end = Some(i);
                        break 'scan;
                    }
                    b'\\' if is_command => {
                        // line continuation: swallow the escaped byte
                        i += 1;
                    }
                    b'"' => {
                        seen_significant = true;
                        state = State::DoubleQuoted;
                    }
                    b'\'' => {
                        seen_significant = true;
                        state = State::SingleQuoted;
                    }
                    b'`' => {
                        seen_significant = true;
                        state = State::Backticked;
                    }
                    b'/' if next == Some(b'/') => {
                        state = State::LineComment;
                        i += 1;
                    }
                    b'/' if next == Some(b'*') => {
                        state = State::BlockComment;
                        i += 1;
                    }
                    b':' if !seen_significant => {
                        seen_significant = true;
                        is_command = true;
                    }
                    b if !b.is_ascii_whitespace() => {
                        seen_significant = true;
                    }
                    _ => {}
                },
                State::DoubleQuoted => match b {
                    b'\\' => i += 1,
                    b'"' => state = State::Code,
                    _ => {}
                },
                State::SingleQuoted => match b {
                    b'\\' => i += 1,
                    b'\'' => state = State::Code,
                    _ => {}
                },
                State::Backticked => {
                    if b == b'`' {
                        state = State::Code;
                    }
                }
                State::LineComment => {
                    if b == b'\n' {
                        state = State::Code;
                        if is_command {
                            end = Some(i);
                            break 'scan;
                        }
                    }
                }
                State::BlockComment => {
                    if b == b'*' && next == Some(b'/') {
                        state = State::Code;
                        i += 1;
                    }
                }
            }
            i += 1;
        }

        let end = match end {
            Some(e) => e,
            None if self.buf.is_empty() => return Ok(None),
            None => self.buf.len() - 1,
        };

        let chunk: Vec<u8> = self.buf.drain(..=end).collect();
        let base = self.pos;
        self.pos = self.pos.advance(&chunk);
        let text = match String::from_utf8(chunk) {
            Ok(text) => text,
            // Ill-formed UTF-8 degrades to the replacement character; the
            // lexer reports the resulting garbage.
            Err(err) => {
                warn!("ill-formed UTF-8 in directive at {base}");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        debug!(
            "segment at {}: {} bytes, command={}",
            base,
            text.len(),
            is_command
        );
        Ok(Some(Segment {
            text,
            base,
            is_command,
        }))
    }
}

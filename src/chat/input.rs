//! Input line classification
//!
//! Lines are handled as raw bytes: any encoding the terminal produces is
//! compared and echoed unchanged.

/// The only command that ends a session (case-sensitive)
pub const EXIT_SENTINEL: &str = "exit";

/// What a single input line asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// The line is exactly [`EXIT_SENTINEL`]
    Exit,
    /// The line is empty
    Empty,
    /// Any other bytes, echoed back verbatim
    Text(&'a [u8]),
}

impl<'a> Input<'a> {
    /// Classify a line that has already had its line ending removed.
    ///
    /// Comparison is byte-for-byte: no trimming, no case folding, no decoding.
    pub fn classify(line: &'a [u8]) -> Self {
        if line == EXIT_SENTINEL.as_bytes() {
            Input::Exit
        } else if line.is_empty() {
            Input::Empty
        } else {
            Input::Text(line)
        }
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Exit => "exit",
            Input::Empty => "empty",
            Input::Text(_) => "text",
        }
    }
}

/// Remove one trailing `\n` (or `\r\n`) from a raw line
pub fn strip_line_ending(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}

//! Parser errors.

/// Errors returned by [`Parser::splice_lines`](super::Parser::splice_lines).
///
/// Both variants are caller contract violations. Malformed ANSI content is
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    #[error("Invalid line number {line}: document has {len} lines")]
    InvalidLineNumber { line: usize, len: usize },

    #[error("Invalid line count {count}: only {available} lines available from line {line}")]
    InvalidLineCount {
        line: usize,
        count: usize,
        available: usize,
    },
}

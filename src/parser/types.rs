//! Parser data types.
//!
//! - Span: a styled byte range of one line
//! - ParsedLine: the cached parse result of one line
//! - ParserOptions: switches that change SGR interpretation

use serde::Serialize;

use crate::style::{SgrOptions, Style};

/// A styled half-open byte range `[offset, offset + length)` of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
    #[serde(flatten)]
    pub style: Style,
}

impl Span {
    pub fn new(offset: usize, length: usize, style: Style) -> Self {
        Self {
            offset,
            length,
            style,
        }
    }

    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether this span covers escape-sequence bytes rather than text.
    pub fn is_escape(&self) -> bool {
        self.style.is_escape()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The slice of `line` this span covers.
    ///
    /// Returns `None` if the span does not belong to `line`.
    pub fn text<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.offset..self.end())
    }
}

/// Cached parse result of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedLine {
    /// Style in effect at the start of the line.
    pub seed: Style,
    pub spans: Vec<Span>,
}

/// Options for a [`Parser`](super::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Read SGR 21 as "double underline" instead of "bold off".
    pub double_underline: bool,
}

impl From<ParserOptions> for SgrOptions {
    fn from(options: ParserOptions) -> Self {
        SgrOptions {
            double_underline: options.double_underline,
        }
    }
}

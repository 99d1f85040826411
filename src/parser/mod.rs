//! Incremental ANSI line parser.
//!
//! Keeps the raw text of every line, the spans computed for it, and the
//! style carried from the end of the last line into the next one. Lines are
//! added with [`Parser::append_line`] and edited with
//! [`Parser::splice_lines`], which re-parses only until the style entering a
//! cached line matches what it was before the edit.
//!
//! The parser is synchronous and does no locking. One instance tracks one
//! document; callers serialize access to it.

mod error;
mod scan;
mod types;


pub use error::SpliceError;
pub use scan::{parse_line, parse_params};
pub use types::{ParserOptions, Span};

use tracing::debug;
use types::ParsedLine;

use crate::style::Style;

/// Incremental parse state of one document.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
    /// Raw text of every line, without line terminators.
    lines: Vec<String>,
    /// Parse result per line, index-aligned with `lines`.
    /// `None` only while a splice is re-parsing.
    parsed: Vec<Option<ParsedLine>>,
    /// Style carried into the line after the last one.
    final_style: Style,
}

impl Parser {
    /// Create an empty parser with the given options.
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Build a parser from a whole document, one `append_line` per line.
    pub fn from_text(text: &str, options: ParserOptions) -> Self {
        let mut parser = Self::new(options);
        for line in text.lines() {
            parser.append_line(line);
        }
        parser
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Raw text of every line.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Spans of every line, index-aligned with [`lines`](Self::lines).
    pub fn line_spans(&self) -> impl ExactSizeIterator<Item = &[Span]> + '_ {
        self.parsed
            .iter()
            .map(|parsed| parsed.as_ref().map_or(&[][..], |p| p.spans.as_slice()))
    }

    /// Spans of one line.
    pub fn spans(&self, line: usize) -> Option<&[Span]> {
        self.parsed
            .get(line)?
            .as_ref()
            .map(|parsed| parsed.spans.as_slice())
    }

    /// Style in effect at the start of `line`.
    pub fn seed_style(&self, line: usize) -> Option<Style> {
        self.parsed.get(line)?.as_ref().map(|parsed| parsed.seed)
    }

    /// Style that the next appended line will start with.
    pub fn final_style(&self) -> Style {
        self.final_style
    }

    /// Drop all lines and reset the carried style.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.parsed.clear();
        self.final_style = Style::default();
    }

    /// Parse `text` as a new last line and return its spans.
    pub fn append_line(&mut self, text: &str) -> &[Span] {
        let seed = self.final_style;
        let (spans, end_style) = parse_line(text, seed, self.options.into());

        self.lines.push(text.to_string());
        self.parsed.push(Some(ParsedLine { seed, spans }));
        self.final_style = end_style;

        self.parsed
            .last()
            .and_then(Option::as_ref)
            .map_or(&[][..], |parsed| parsed.spans.as_slice())
    }

    /// Replace `count` lines starting at `start` with `new_lines`.
    ///
    /// Re-parses from `start` until the style entering a previously parsed
    /// line is unchanged, or until the end of the document. Returns the
    /// number of lines whose spans were recomputed; they start at `start`.
    pub fn splice_lines<I, S>(
        &mut self,
        start: usize,
        count: usize,
        new_lines: I,
    ) -> Result<usize, SpliceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let len = self.lines.len();
        if start > len {
            return Err(SpliceError::InvalidLineNumber { line: start, len });
        }
        let available = len - start;
        if count > available {
            return Err(SpliceError::InvalidLineCount {
                line: start,
                count,
                available,
            });
        }

        let seed = self.seed_style(start).unwrap_or(self.final_style);

        let new_lines: Vec<String> = new_lines.into_iter().map(Into::into).collect();
        let inserted = new_lines.len();
        self.lines.splice(start..start + count, new_lines);
        self.parsed
            .splice(start..start + count, std::iter::repeat_with(|| None).take(inserted));

        let affected = self.reparse_from(start, seed);
        debug!(
            start,
            removed = count,
            inserted,
            affected,
            total = self.lines.len(),
            "Spliced lines"
        );
        Ok(affected)
    }

    /// Re-parse forward from `line` with `style` as its seed.
    fn reparse_from(&mut self, mut line: usize, mut style: Style) -> usize {
        let first = line;

        while line < self.lines.len() {
            if let Some(cached) = &self.parsed[line] {
                if cached.seed == style {
                    debug!(line, "Re-parse converged");
                    return line - first;
                }
            }

            let (spans, end_style) = parse_line(&self.lines[line], style, self.options.into());
            self.parsed[line] = Some(ParsedLine { seed: style, spans });
            style = end_style;
            line += 1;
        }

        self.final_style = style;
        line - first
    }
}

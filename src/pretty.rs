//! Escape-stripped ("pretty") view of parsed text.
//!
//! Drops the bytes of every recognized SGR sequence and moves the remaining
//! spans onto the stripped text, so the same styles can be shown without the
//! raw escape codes. Bytes the parser treated as text (malformed or
//! non-SGR sequences) stay in the output.

use serde::Serialize;

use crate::parser::{Parser, ParserOptions, Span};

/// One line of the stripped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrettyLine {
    pub text: String,
    /// Spans over `text`; they tile it like the spans of the raw line.
    pub spans: Vec<Span>,
}

/// Strip escape spans from one parsed line.
pub fn project_line(text: &str, spans: &[Span]) -> PrettyLine {
    let mut pretty = PrettyLine {
        text: String::with_capacity(text.len()),
        spans: Vec::with_capacity(spans.len()),
    };

    for span in spans.iter().filter(|span| !span.is_escape()) {
        if let Some(slice) = span.text(text) {
            pretty
                .spans
                .push(Span::new(pretty.text.len(), slice.len(), span.style));
            pretty.text.push_str(slice);
        }
    }

    pretty
}

/// Stripped view of every line.
pub fn project(parser: &Parser) -> Vec<PrettyLine> {
    parser
        .lines()
        .iter()
        .zip(parser.line_spans())
        .map(|(text, spans)| project_line(text, spans))
        .collect()
}

/// The whole document without escape sequences, lines joined by `\n`.
pub fn strip(parser: &Parser) -> String {
    project(parser)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse `text` and strip it in one go.
pub fn strip_text(text: &str, options: ParserOptions) -> String {
    strip(&Parser::from_text(text, options))
}

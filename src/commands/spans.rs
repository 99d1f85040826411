//! Spans command handler

use anyhow::Result;
use serde::Serialize;

use ansi_highlight::cli::GlobalArgs;
use ansi_highlight::{Parser, Span};

use super::{format_span, parse_input};

#[derive(Serialize)]
struct LineSpans<'a> {
    line: usize,
    spans: &'a [Span],
}

/// Handle the spans command.
#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs, file: &str, json: bool) -> Result<()> {
    let (_, parser) = parse_input(global, file)?;
    let output = if json {
        render_json(&parser)?
    } else {
        render_text(&parser)
    };
    print!("{}", output);
    Ok(())
}

/// One line of output per span.
pub fn render_text(parser: &Parser) -> String {
    let mut output = String::new();
    for (line, spans) in parser.line_spans().enumerate() {
        for span in spans {
            output.push_str(&format_span(line, span));
            output.push('\n');
        }
    }
    output
}

/// Pretty JSON array with one entry per line.
pub fn render_json(parser: &Parser) -> Result<String> {
    let lines: Vec<LineSpans> = parser
        .line_spans()
        .enumerate()
        .map(|(line, spans)| LineSpans { line, spans })
        .collect();
    let mut json = serde_json::to_string_pretty(&lines)?;
    json.push('\n');
    Ok(json)
}

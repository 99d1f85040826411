//! Splice command handler

use anyhow::Result;
use serde::Serialize;

use ansi_highlight::cli::GlobalArgs;
use ansi_highlight::{Parser, Span, Style};

use super::{format_span, parse_input};

/// What a splice changed.
#[derive(Debug, Serialize)]
pub struct SpliceReport {
    pub affected: usize,
    pub total_lines: usize,
    pub final_style: Style,
    pub lines: Vec<ReparsedLine>,
}

#[derive(Debug, Serialize)]
pub struct ReparsedLine {
    pub line: usize,
    pub text: String,
    pub spans: Vec<Span>,
}

/// Handle the splice command.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    global: &GlobalArgs,
    file: &str,
    start: usize,
    count: usize,
    lines: &[String],
    json: bool,
) -> Result<()> {
    let (_, mut parser) = parse_input(global, file)?;
    let report = apply(&mut parser, start, count, lines)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Apply the splice and collect the re-parsed lines.
pub fn apply(
    parser: &mut Parser,
    start: usize,
    count: usize,
    lines: &[String],
) -> Result<SpliceReport> {
    let affected = parser.splice_lines(start, count, lines.iter().cloned())?;
    let lines = (start..start + affected)
        .map(|line| ReparsedLine {
            line,
            text: parser.lines()[line].clone(),
            spans: parser.spans(line).map(<[Span]>::to_vec).unwrap_or_default(),
        })
        .collect();

    Ok(SpliceReport {
        affected,
        total_lines: parser.len(),
        final_style: parser.final_style(),
        lines,
    })
}

pub fn render_text(report: &SpliceReport) -> String {
    let mut output = format!(
        "Re-parsed {} line(s), {} total\n",
        report.affected, report.total_lines
    );
    for line in &report.lines {
        for span in &line.spans {
            output.push_str(&format_span(line.line, span));
            output.push('\n');
        }
    }
    output.push_str(&format!("Final style: {}\n", report.final_style));
    output
}

//! Command handlers for the ansi-highlight CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod decorations;
pub mod splice;
pub mod spans;
pub mod strip;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

use ansi_highlight::cli::GlobalArgs;
use ansi_highlight::{Config, Parser, ParserOptions, Span};

/// Read the whole input named on the command line; `-` is stdin.
pub fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(file).with_context(|| format!("Failed to read file: {}", file))
}

/// Load the config named by `--config`, or the default one.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Parser options from the config, with command-line overrides applied.
pub fn parser_options(global: &GlobalArgs, config: &Config) -> ParserOptions {
    let mut options = config.parser_options();
    if global.double_underline {
        options.double_underline = true;
    }
    options
}

/// Load the config and parse the input in one step.
pub fn parse_input(global: &GlobalArgs, file: &str) -> Result<(Config, Parser)> {
    let config = load_config(global)?;
    let text = read_input(file)?;
    let parser = Parser::from_text(&text, parser_options(global, &config));
    Ok((config, parser))
}

/// One-line text form of a span: `LINE:OFFSET+LENGTH KIND STYLE`.
pub fn format_span(line: usize, span: &Span) -> String {
    let kind = if span.is_escape() { "escape" } else { "text" };
    format!(
        "{}:{}+{} {} {}",
        line, span.offset, span.length, kind, span.style
    )
}

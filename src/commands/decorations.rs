//! Decorations command handler

use anyhow::Result;
use serde::Serialize;

use ansi_highlight::cli::GlobalArgs;
use ansi_highlight::config::DecorationConfig;
use ansi_highlight::decoration::{
    AnsiDecorationProvider, Decoration, DecorationRange, DecorationRegistry,
    PrettyDecorationProvider,
};
use ansi_highlight::Parser;

use super::parse_input;

/// One decoration type and where it applies.
#[derive(Debug, Serialize)]
pub struct DecorationEntry {
    pub decoration: Decoration,
    pub ranges: Vec<DecorationRange>,
}

/// Handle the decorations command.
#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs, file: &str, pretty: bool) -> Result<()> {
    let (config, parser) = parse_input(global, file)?;
    let entries = collect(&parser, &config.decorations, pretty);
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

/// Run the provider for the requested view and gather its output.
pub fn collect(parser: &Parser, config: &DecorationConfig, pretty: bool) -> Vec<DecorationEntry> {
    let mut registry = DecorationRegistry::new();
    if pretty {
        registry.add(PrettyDecorationProvider::new(config.clone()));
    } else {
        registry.add(AnsiDecorationProvider::new(config.clone()));
    }

    let mut entries = Vec::new();
    registry.execute(parser, |_, decoration, ranges| {
        entries.push(DecorationEntry {
            decoration: decoration.clone(),
            ranges: ranges.to_vec(),
        });
    });
    entries
}

//! Strip command handler

use anyhow::Result;

use ansi_highlight::cli::GlobalArgs;
use ansi_highlight::pretty;

use super::parse_input;

/// Print the input with escape sequences removed.
#[cfg(not(tarpaulin_include))]
pub fn handle(global: &GlobalArgs, file: &str) -> Result<()> {
    let (_, parser) = parse_input(global, file)?;
    let text = pretty::strip(&parser);
    if text.is_empty() {
        return Ok(());
    }
    println!("{}", text);
    Ok(())
}

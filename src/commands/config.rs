//! Config subcommands handler

use anyhow::Result;

use ansi_highlight::cli::GlobalArgs;
use ansi_highlight::Config;

use super::load_config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    print!("{}", render(&config)?);
    Ok(())
}

/// Print the path of the config file in use.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(global: &GlobalArgs) -> Result<()> {
    let path = match &global.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}

/// TOML form of a config.
pub fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

//! Configuration management
//!
//! The config file lives at `~/.config/ansi-highlight/config.toml`. Every
//! field has a default, so a missing file or a partial one is fine.

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::parser::ParserOptions;

impl Config {
    /// Get the config file path (~/.config/ansi-highlight/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ansi-highlight)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Parser options derived from the `[parser]` table
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions::from(&self.parser)
    }
}

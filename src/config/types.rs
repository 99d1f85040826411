//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::parser::ParserOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub decorations: DecorationConfig,
}

/// How escape sequences are interpreted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Read SGR 21 as double underline instead of "bold off"
    #[serde(default)]
    pub double_underline: bool,
}

impl From<&ParserConfig> for ParserOptions {
    fn from(config: &ParserConfig) -> Self {
        ParserOptions {
            double_underline: config.double_underline,
        }
    }
}

/// How resolved styles are presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationConfig {
    /// Opacity applied to the raw bytes of escape sequences
    #[serde(default = "default_escape_opacity")]
    pub escape_opacity: String,
    /// Opacity applied to faint (SGR 2) text
    #[serde(default = "default_faint_opacity")]
    pub faint_opacity: String,
}

pub fn default_escape_opacity() -> String {
    "50%".to_string()
}

pub fn default_faint_opacity() -> String {
    "50%".to_string()
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            escape_opacity: default_escape_opacity(),
            faint_opacity: default_faint_opacity(),
        }
    }
}

impl DecorationConfig {
    /// Validate configuration values.
    ///
    /// Opacities are percentages in `0%..=100%`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("decorations.escape_opacity", &self.escape_opacity),
            ("decorations.faint_opacity", &self.faint_opacity),
        ] {
            let valid = value
                .strip_suffix('%')
                .and_then(|n| n.trim().parse::<f64>().ok())
                .is_some_and(|n| (0.0..=100.0).contains(&n));
            if !valid {
                return Err(format!(
                    "{} '{}' must be a percentage between 0% and 100%",
                    name, value
                ));
            }
        }
        Ok(())
    }
}

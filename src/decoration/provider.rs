//! Decoration providers.
//!
//! A provider turns a parsed document into grouped ranges and resolves the
//! group keys into decorations. Two views are supported:
//! - raw: the document as written, escape bytes dimmed
//! - pretty: the escape-stripped projection from [`crate::pretty`]

use anyhow::Result;
use std::collections::HashMap;

use super::{group_spans, resolve_style, Decoration, DecorationGroups};
use crate::config::DecorationConfig;
use crate::parser::Parser;
use crate::pretty;

/// Source of decorations for a parsed document.
pub trait DecorationProvider {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Ranges to decorate, grouped by decoration key.
    fn provide(&mut self, parser: &Parser) -> Result<DecorationGroups>;

    /// Decoration for a key returned by [`provide`](Self::provide).
    ///
    /// `Ok(None)` means the key is known but should not be drawn.
    fn resolve(&mut self, key: &str) -> Result<Option<Decoration>>;
}

/// Memoized key resolution shared by the built-in providers.
#[derive(Debug, Clone, Default)]
struct ResolvedKeys {
    config: DecorationConfig,
    cache: HashMap<String, Decoration>,
}

impl ResolvedKeys {
    fn new(config: DecorationConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
        }
    }

    fn get(&mut self, key: &str) -> Result<Decoration> {
        if let Some(decoration) = self.cache.get(key) {
            return Ok(decoration.clone());
        }
        let decoration = resolve_style(key, &self.config)?;
        self.cache.insert(key.to_string(), decoration.clone());
        Ok(decoration)
    }
}

/// Decorates the raw document, escape sequences included.
#[derive(Debug, Clone, Default)]
pub struct AnsiDecorationProvider {
    keys: ResolvedKeys,
}

impl AnsiDecorationProvider {
    pub fn new(config: DecorationConfig) -> Self {
        Self {
            keys: ResolvedKeys::new(config),
        }
    }

    /// Number of keys resolved so far.
    pub fn cached_keys(&self) -> usize {
        self.keys.cache.len()
    }
}

impl DecorationProvider for AnsiDecorationProvider {
    fn name(&self) -> &str {
        "ansi"
    }

    fn provide(&mut self, parser: &Parser) -> Result<DecorationGroups> {
        Ok(group_spans(parser.line_spans())?)
    }

    fn resolve(&mut self, key: &str) -> Result<Option<Decoration>> {
        self.keys.get(key).map(Some)
    }
}

/// Decorates the escape-stripped projection of the document.
///
/// Ranges refer to offsets in [`pretty::project`] lines, not the raw text.
#[derive(Debug, Clone, Default)]
pub struct PrettyDecorationProvider {
    keys: ResolvedKeys,
}

impl PrettyDecorationProvider {
    pub fn new(config: DecorationConfig) -> Self {
        Self {
            keys: ResolvedKeys::new(config),
        }
    }
}

impl DecorationProvider for PrettyDecorationProvider {
    fn name(&self) -> &str {
        "pretty"
    }

    fn provide(&mut self, parser: &Parser) -> Result<DecorationGroups> {
        let lines = pretty::project(parser);
        Ok(group_spans(lines.iter().map(|line| line.spans.as_slice()))?)
    }

    fn resolve(&mut self, key: &str) -> Result<Option<Decoration>> {
        let decoration = self.keys.get(key)?;
        // Text drawn with no overrides needs no decoration type.
        Ok((decoration != Decoration::default()).then_some(decoration))
    }
}

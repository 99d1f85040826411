//! Editor decorations for parsed ANSI text.
//!
//! Spans are grouped by a canonical key derived from their style, so every
//! distinct style becomes one decoration type applied to many ranges. Keys
//! are resolved to visual [`Decoration`]s through a fixed theme palette.
//!
//! # Key format
//!
//! Escape-sequence spans share the key `"escape"`. Every other span uses the
//! JSON form of its style with a fixed field order and colors in their
//! scalar encoding:
//!
//! ```text
//! {"background":16777456,"foreground":16777217,"attributes":1,"font":0}
//! ```

mod palette;
mod provider;
mod registry;

pub use palette::{color_value, resolve_style, style_decoration, theme_color_name, ColorValue, Decoration};
pub use provider::{AnsiDecorationProvider, DecorationProvider, PrettyDecorationProvider};
pub use registry::{DecorationRegistry, ProviderId};

use serde::Serialize;
use std::collections::HashMap;

use crate::parser::Span;
use crate::style::Style;

/// Key shared by all escape-sequence spans.
pub const ESCAPE_KEY: &str = "escape";

/// Errors from encoding or decoding decoration keys.
#[derive(Debug, thiserror::Error)]
pub enum DecorationError {
    #[error("Failed to encode decoration key: {0}")]
    EncodeKey(#[source] serde_json::Error),

    #[error("Invalid decoration key {key:?}: {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A byte range on one line that a decoration applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecorationRange {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// Ranges grouped by decoration key, in order of first appearance.
pub type DecorationGroups = Vec<(String, Vec<DecorationRange>)>;

/// Grouping key for a span style.
pub fn decoration_key(style: &Style) -> Result<String, DecorationError> {
    if style.is_escape() {
        return Ok(ESCAPE_KEY.to_string());
    }
    serde_json::to_string(style).map_err(DecorationError::EncodeKey)
}

/// Decode a non-escape key back into its style.
pub fn decode_key(key: &str) -> Result<Style, DecorationError> {
    serde_json::from_str(key).map_err(|source| DecorationError::InvalidKey {
        key: key.to_string(),
        source,
    })
}

/// Group the spans of consecutive lines by decoration key.
///
/// The first item of `lines` is line 0. Empty spans are skipped.
pub fn group_spans<'a, I>(lines: I) -> Result<DecorationGroups, DecorationError>
where
    I: IntoIterator<Item = &'a [Span]>,
{
    let mut groups: DecorationGroups = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (line, spans) in lines.into_iter().enumerate() {
        for span in spans.iter().filter(|span| !span.is_empty()) {
            let range = DecorationRange {
                line,
                start: span.offset,
                end: span.end(),
            };
            let key = decoration_key(&span.style)?;
            match index.get(&key) {
                Some(&slot) => groups[slot].1.push(range),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push((key, vec![range]));
                }
            }
        }
    }

    Ok(groups)
}

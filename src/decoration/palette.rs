//! Style key to visual decoration resolution.
//!
//! Palette colors map to the editor theme's terminal colors so the output
//! follows the user's theme. RGB colors are passed through as hex.

use serde::Serialize;
use std::fmt;

use super::{decode_key, DecorationError, ESCAPE_KEY};
use crate::config::DecorationConfig;
use crate::style::{AttributeFlags, Color, Style};

/// Theme color names, indexed by palette index (bright entries offset by 8),
/// followed by the two default sentinels.
const THEME_COLORS: [&str; 18] = [
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
    "terminal.foreground",
    "terminal.background",
];

const CONCEALED_OPACITY: &str = "0%";

/// A color as the editor should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Name of a theme color.
    Theme(&'static str),
    /// `#rrggbb`.
    Hex(String),
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Theme(name) => write!(f, "{}", name),
            ColorValue::Hex(hex) => write!(f, "{}", hex),
        }
    }
}

/// Visual attributes of one decoration type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decoration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ColorValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorValue>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    /// CSS-style text decorations: `underline`, `line-through`, `overline`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_decoration: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
}

/// Theme color name for a palette color or default sentinel.
pub fn theme_color_name(color: Color) -> Option<&'static str> {
    let index = match color {
        Color::Named { color, bright } => {
            usize::from(color.index()) + if bright { 8 } else { 0 }
        }
        Color::DefaultForeground => 16,
        Color::DefaultBackground => 17,
        Color::Rgb { .. } => return None,
    };
    THEME_COLORS.get(index).copied()
}

/// Renderable form of any color.
pub fn color_value(color: Color) -> ColorValue {
    match theme_color_name(color) {
        Some(name) => ColorValue::Theme(name),
        // Only RGB colors lack a theme name; their scalar is 0xRRGGBB.
        None => ColorValue::Hex(format!("#{:06x}", color.to_scalar())),
    }
}

/// Decoration for a text style.
///
/// A slot holding its own default color (default foreground as foreground,
/// default background as background) is left unset.
pub fn style_decoration(style: &Style, config: &DecorationConfig) -> Decoration {
    let attrs = style.attributes;

    let (foreground, background) = if attrs.contains(AttributeFlags::INVERSE) {
        (style.background, style.foreground)
    } else {
        (style.foreground, style.background)
    };

    let mut text_decoration = Vec::new();
    if attrs.intersects(AttributeFlags::UNDERLINE | AttributeFlags::DOUBLE_UNDERLINE) {
        text_decoration.push("underline");
    }
    if attrs.contains(AttributeFlags::CROSSED_OUT) {
        text_decoration.push("line-through");
    }
    if attrs.contains(AttributeFlags::OVERLINED) {
        text_decoration.push("overline");
    }

    let opacity = if attrs.contains(AttributeFlags::CONCEAL) {
        Some(CONCEALED_OPACITY.to_string())
    } else if attrs.contains(AttributeFlags::FAINT) {
        Some(config.faint_opacity.clone())
    } else {
        None
    };

    Decoration {
        foreground: (foreground != Color::DefaultForeground).then(|| color_value(foreground)),
        background: (background != Color::DefaultBackground).then(|| color_value(background)),
        bold: attrs.contains(AttributeFlags::BOLD),
        italic: attrs.intersects(AttributeFlags::ITALIC | AttributeFlags::FRAKTUR),
        text_decoration,
        opacity,
    }
}

/// Resolve a decoration key to a decoration.
pub fn resolve_style(key: &str, config: &DecorationConfig) -> Result<Decoration, DecorationError> {
    if key == ESCAPE_KEY {
        return Ok(Decoration {
            opacity: Some(config.escape_opacity.clone()),
            ..Decoration::default()
        });
    }
    let style = decode_key(key)?;
    Ok(style_decoration(&style, config))
}

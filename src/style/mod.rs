//! Terminal text style model.
//!
//! Contains the data types that describe the attribute state of a terminal:
//! - Color: palette, default sentinel, or RGB color
//! - AttributeFlags: SGR attribute bitset
//! - Style: colors + attributes + font index
//!
//! SGR parameter application lives in [`sgr`].

mod color;
pub mod sgr;

pub use color::{convert_8bit_color, Color, NamedColor, BRIGHT_FLAG, NAMED_FLAG};
pub use sgr::{apply_sgr_parameters, SgrOptions};

use serde::{Deserialize, Serialize};
use std::fmt;

bitflags::bitflags! {
    /// Text attributes set by SGR codes.
    ///
    /// `ESCAPE_SEQUENCE` is never part of a carried style. It only marks
    /// spans that cover the raw bytes of an escape sequence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct AttributeFlags: u32 {
        const BOLD             = 1 << 0;
        const FAINT            = 1 << 1;
        const ITALIC           = 1 << 2;
        const UNDERLINE        = 1 << 3;
        const SLOW_BLINK       = 1 << 4;
        const RAPID_BLINK      = 1 << 5;
        const INVERSE          = 1 << 6;
        const CONCEAL          = 1 << 7;
        const CROSSED_OUT      = 1 << 8;
        const FRAKTUR          = 1 << 9;
        const DOUBLE_UNDERLINE = 1 << 10;
        const PROPORTIONAL     = 1 << 11;
        const FRAMED           = 1 << 12;
        const ENCIRCLED        = 1 << 13;
        const OVERLINED        = 1 << 14;
        const SUPERSCRIPT      = 1 << 15;
        const SUBSCRIPT        = 1 << 16;

        const ESCAPE_SEQUENCE  = 1 << 31;
    }
}

impl AttributeFlags {
    /// Set `on` and clear its mutually exclusive counterpart.
    pub fn set_exclusive(&mut self, on: AttributeFlags, off: AttributeFlags) {
        self.insert(on);
        self.remove(off);
    }
}

/// The attribute state in effect at some point of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "EncodedStyle", try_from = "EncodedStyle")]
pub struct Style {
    pub background: Color,
    pub foreground: Color,
    pub attributes: AttributeFlags,
    /// Alternative font selected by SGR 10-19, in `0..=9`.
    pub font_index: u8,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::DefaultBackground,
            foreground: Color::DefaultForeground,
            attributes: AttributeFlags::empty(),
            font_index: 0,
        }
    }
}

impl Style {
    /// Copy of this style tagged as covering an escape sequence.
    pub fn as_escape(self) -> Self {
        Self {
            attributes: self.attributes | AttributeFlags::ESCAPE_SEQUENCE,
            ..self
        }
    }

    /// Whether this style marks escape-sequence bytes.
    pub fn is_escape(&self) -> bool {
        self.attributes.contains(AttributeFlags::ESCAPE_SEQUENCE)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fg={} bg={}", self.foreground, self.background)?;
        let attributes = self.attributes - AttributeFlags::ESCAPE_SEQUENCE;
        if !attributes.is_empty() {
            let names: Vec<String> = attributes
                .iter_names()
                .map(|(name, _)| name.to_lowercase())
                .collect();
            write!(f, " attrs={}", names.join("|"))?;
        }
        if self.font_index != 0 {
            write!(f, " font={}", self.font_index)?;
        }
        Ok(())
    }
}

/// Canonical, field-ordered wire form of a [`Style`].
///
/// Colors use their scalar encoding so identical styles always produce
/// byte-identical keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct EncodedStyle {
    background: u32,
    foreground: u32,
    attributes: u32,
    font: u8,
}

impl From<Style> for EncodedStyle {
    fn from(style: Style) -> Self {
        Self {
            background: style.background.to_scalar(),
            foreground: style.foreground.to_scalar(),
            attributes: style.attributes.bits(),
            font: style.font_index,
        }
    }
}

impl TryFrom<EncodedStyle> for Style {
    type Error = String;

    fn try_from(encoded: EncodedStyle) -> Result<Self, Self::Error> {
        let background = Color::from_scalar(encoded.background)
            .ok_or_else(|| format!("invalid background color {:#x}", encoded.background))?;
        let foreground = Color::from_scalar(encoded.foreground)
            .ok_or_else(|| format!("invalid foreground color {:#x}", encoded.foreground))?;
        let attributes = AttributeFlags::from_bits(encoded.attributes)
            .ok_or_else(|| format!("invalid attribute bits {:#x}", encoded.attributes))?;
        if encoded.font > 9 {
            return Err(format!("invalid font index {}", encoded.font));
        }
        Ok(Self {
            background,
            foreground,
            attributes,
            font_index: encoded.font,
        })
    }
}

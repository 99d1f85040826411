//! Terminal colors.
//!
//! A [`Color`] is either one of the eight palette entries (optionally in
//! their bright variant), one of the two terminal default sentinels, or a
//! 24-bit RGB triple. Every color also has a compact 32-bit scalar form used
//! when styles are encoded as grouping keys:
//!
//! - bit 24 set: palette color, bit 25 marks the bright variant, the low byte
//!   is the palette index (`0xf0`/`0xf1` for the default background/foreground)
//! - bit 24 clear: `R << 16 | G << 8 | B`

use std::cmp::Ordering;
use std::fmt;

/// Scalar flag marking a palette (non-RGB) color.
pub const NAMED_FLAG: u32 = 1 << 24;
/// Scalar flag marking the bright half of the palette.
pub const BRIGHT_FLAG: u32 = 1 << 25;

const DEFAULT_BACKGROUND_INDEX: u32 = 0xf0;
const DEFAULT_FOREGROUND_INDEX: u32 = 0xf1;

/// The eight base palette entries, in SGR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// Palette entry for an index in `0..=7`.
    pub fn from_index(index: u32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Palette entry for the low three bits of `index`.
    pub fn from_low_bits(index: u32) -> Self {
        Self::ALL[(index & 0b111) as usize]
    }

    /// Palette index in `0..=7`.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A terminal color.
///
/// Ordering follows the scalar encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's own foreground color.
    DefaultForeground,
    /// The terminal's own background color.
    DefaultBackground,
    /// One of the sixteen palette colors.
    Named { color: NamedColor, bright: bool },
    /// A direct 24-bit color.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Normal-intensity palette color (SGR 30-37 / 40-47).
    pub const fn named(color: NamedColor) -> Self {
        Color::Named {
            color,
            bright: false,
        }
    }

    /// Bright palette color (SGR 90-97 / 100-107).
    pub const fn bright(color: NamedColor) -> Self {
        Color::Named {
            color,
            bright: true,
        }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Build a truecolor value from SGR `38;2;R;G;B` components.
    ///
    /// Returns `None` if any component is outside `0..=255`.
    pub fn from_components(r: u32, g: u32, b: u32) -> Option<Self> {
        Some(Color::Rgb {
            r: u8::try_from(r).ok()?,
            g: u8::try_from(g).ok()?,
            b: u8::try_from(b).ok()?,
        })
    }

    /// Whether this is a palette color or a default sentinel.
    pub fn is_named(self) -> bool {
        !matches!(self, Color::Rgb { .. })
    }

    /// Encode as the 32-bit scalar form.
    pub fn to_scalar(self) -> u32 {
        match self {
            Color::DefaultBackground => NAMED_FLAG | DEFAULT_BACKGROUND_INDEX,
            Color::DefaultForeground => NAMED_FLAG | DEFAULT_FOREGROUND_INDEX,
            Color::Named { color, bright } => {
                let flags = if bright {
                    NAMED_FLAG | BRIGHT_FLAG
                } else {
                    NAMED_FLAG
                };
                flags | u32::from(color.index())
            }
            Color::Rgb { r, g, b } => {
                (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
            }
        }
    }

    /// Decode the 32-bit scalar form.
    ///
    /// Returns `None` for bit patterns no color encodes to.
    pub fn from_scalar(value: u32) -> Option<Self> {
        if value & NAMED_FLAG == 0 {
            if value > 0x00ff_ffff {
                return None;
            }
            let [_, r, g, b] = value.to_be_bytes();
            return Some(Color::Rgb { r, g, b });
        }

        let bright = value & BRIGHT_FLAG != 0;
        let index = value & !(NAMED_FLAG | BRIGHT_FLAG);
        match (index, bright) {
            (DEFAULT_BACKGROUND_INDEX, false) => Some(Color::DefaultBackground),
            (DEFAULT_FOREGROUND_INDEX, false) => Some(Color::DefaultForeground),
            _ => NamedColor::from_index(index).map(|color| Color::Named { color, bright }),
        }
    }
}

impl Ord for Color {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_scalar().cmp(&other.to_scalar())
    }
}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::DefaultForeground => write!(f, "default-fg"),
            Color::DefaultBackground => write!(f, "default-bg"),
            Color::Named { color, bright } => {
                let name = format!("{:?}", color).to_lowercase();
                if *bright {
                    write!(f, "bright-{}", name)
                } else {
                    write!(f, "{}", name)
                }
            }
            Color::Rgb { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// Map an xterm 256-color palette index to a [`Color`].
///
/// - `0..=7`: normal palette
/// - `8..=15`: bright palette
/// - `16..=231`: 6x6x6 color cube
/// - `232..=255`: 24-step grayscale ramp
pub fn convert_8bit_color(index: u8) -> Color {
    match index {
        0..=7 => Color::named(NamedColor::from_low_bits(u32::from(index))),
        8..=15 => Color::bright(NamedColor::from_low_bits(u32::from(index))),
        232..=255 => {
            let level = scale(u32::from(index - 232), 23);
            Color::rgb(level, level, level)
        }
        _ => {
            let cube = u32::from(index - 16);
            let r6 = cube / 36;
            let g6 = (cube / 6) % 6;
            let b6 = cube % 6;
            Color::rgb(scale(r6, 5), scale(g6, 5), scale(b6, 5))
        }
    }
}

/// `255 * step / steps`, truncated.
fn scale(step: u32, steps: u32) -> u8 {
    u8::try_from(255 * step / steps).unwrap_or(u8::MAX)
}

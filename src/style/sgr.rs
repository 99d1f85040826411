//! SGR (Select Graphic Rendition) parameter handling.
//!
//! Applies the parameters of an `ESC [ ... m` sequence to a [`Style`]:
//! - Attributes (bold, faint, italic, underline, blink, ...)
//! - Font selection (10-19)
//! - Palette, 256-color and RGB colors for foreground and background
//!
//! Unknown codes are ignored.

use tracing::trace;

use super::{convert_8bit_color, AttributeFlags, Color, NamedColor, Style};

/// Parser-wide switches that change how individual SGR codes are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SgrOptions {
    /// Read SGR 21 as "double underline" instead of "bold off".
    pub double_underline: bool,
}

/// Which color slot an extended color sequence targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
    Underline,
}

/// Apply SGR parameters to `style` in place.
///
/// An empty parameter list behaves like `[0]`.
pub fn apply_sgr_parameters(params: &[u32], style: &mut Style, options: SgrOptions) {
    if params.is_empty() {
        *style = Style::default();
        return;
    }

    let mut i = 0;

    while i < params.len() {
        let code = params[i];
        match code {
            0 => {
                *style = Style::default();
            }
            1 => style.attributes.set_exclusive(AttributeFlags::BOLD, AttributeFlags::FAINT),
            2 => style.attributes.set_exclusive(AttributeFlags::FAINT, AttributeFlags::BOLD),
            3 => style.attributes.set_exclusive(AttributeFlags::ITALIC, AttributeFlags::FRAKTUR),
            4 => style
                .attributes
                .set_exclusive(AttributeFlags::UNDERLINE, AttributeFlags::DOUBLE_UNDERLINE),
            5 => style
                .attributes
                .set_exclusive(AttributeFlags::SLOW_BLINK, AttributeFlags::RAPID_BLINK),
            6 => style
                .attributes
                .set_exclusive(AttributeFlags::RAPID_BLINK, AttributeFlags::SLOW_BLINK),
            7 => style.attributes.insert(AttributeFlags::INVERSE),
            8 => style.attributes.insert(AttributeFlags::CONCEAL),
            9 => style.attributes.insert(AttributeFlags::CROSSED_OUT),
            10..=19 => style.font_index = (code - 10) as u8,
            20 => style.attributes.set_exclusive(AttributeFlags::FRAKTUR, AttributeFlags::ITALIC),
            21 => {
                if options.double_underline {
                    style
                        .attributes
                        .set_exclusive(AttributeFlags::DOUBLE_UNDERLINE, AttributeFlags::UNDERLINE);
                } else {
                    style.attributes.remove(AttributeFlags::BOLD);
                }
            }
            22 => style.attributes.remove(AttributeFlags::BOLD | AttributeFlags::FAINT),
            23 => style.attributes.remove(AttributeFlags::ITALIC | AttributeFlags::FRAKTUR),
            24 => style
                .attributes
                .remove(AttributeFlags::UNDERLINE | AttributeFlags::DOUBLE_UNDERLINE),
            25 => style
                .attributes
                .remove(AttributeFlags::SLOW_BLINK | AttributeFlags::RAPID_BLINK),
            26 => style.attributes.insert(AttributeFlags::PROPORTIONAL),
            27 => style.attributes.remove(AttributeFlags::INVERSE),
            28 => style.attributes.remove(AttributeFlags::CONCEAL),
            29 => style.attributes.remove(AttributeFlags::CROSSED_OUT),
            30..=37 => style.foreground = palette(code - 30, false),
            38 => i += extended_color(&params[i + 1..], style, Layer::Foreground),
            39 => style.foreground = Color::DefaultForeground,
            40..=47 => style.background = palette(code - 40, false),
            48 => i += extended_color(&params[i + 1..], style, Layer::Background),
            49 => style.background = Color::DefaultBackground,
            50 => style.attributes.remove(AttributeFlags::PROPORTIONAL),
            51 => style
                .attributes
                .set_exclusive(AttributeFlags::FRAMED, AttributeFlags::ENCIRCLED),
            52 => style
                .attributes
                .set_exclusive(AttributeFlags::ENCIRCLED, AttributeFlags::FRAMED),
            53 => style.attributes.insert(AttributeFlags::OVERLINED),
            54 => style
                .attributes
                .remove(AttributeFlags::FRAMED | AttributeFlags::ENCIRCLED),
            55 => style.attributes.remove(AttributeFlags::OVERLINED),
            // Underline color: arguments are consumed, the color is not tracked.
            58 => i += extended_color(&params[i + 1..], style, Layer::Underline),
            59 => {}
            73 => style
                .attributes
                .set_exclusive(AttributeFlags::SUPERSCRIPT, AttributeFlags::SUBSCRIPT),
            74 => style
                .attributes
                .set_exclusive(AttributeFlags::SUBSCRIPT, AttributeFlags::SUPERSCRIPT),
            90..=97 => style.foreground = palette(code - 90, true),
            100..=107 => style.background = palette(code - 100, true),
            _ => trace!(code, "Ignoring unsupported SGR code"),
        }
        i += 1;
    }
}

/// Color for a `30..=37`-style code; only the low three bits of `index` count.
fn palette(index: u32, bright: bool) -> Color {
    let color = NamedColor::from_low_bits(index);
    if bright {
        Color::bright(color)
    } else {
        Color::named(color)
    }
}

/// Handle the arguments following a 38/48/58 code.
///
/// `args` starts right after the introducing code. Returns how many of them
/// were consumed: 2 for `5;N`, 4 for `2;R;G;B`, 0 for any other form.
/// Out-of-range or missing values leave the style unchanged.
fn extended_color(args: &[u32], style: &mut Style, layer: Layer) -> usize {
    let (color, consumed) = match args.first() {
        Some(5) => {
            let color = args
                .get(1)
                .and_then(|&n| u8::try_from(n).ok())
                .map(convert_8bit_color);
            (color, 2)
        }
        Some(2) => {
            let color = match (args.get(1), args.get(2), args.get(3)) {
                (Some(&r), Some(&g), Some(&b)) => Color::from_components(r, g, b),
                _ => None,
            };
            (color, 4)
        }
        _ => (None, 0),
    };

    match (color, layer) {
        (Some(color), Layer::Foreground) => style.foreground = color,
        (Some(color), Layer::Background) => style.background = color,
        (Some(_), Layer::Underline) => {}
        (None, _) => trace!(args = ?args, ?layer, "Ignoring malformed extended color"),
    }

    consumed
}

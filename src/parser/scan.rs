//! Single-line scanner.
//!
//! Splits one line into text spans and `ESC [ params m` escape spans,
//! threading the style through the line. Anything that is not a well-formed
//! SGR sequence is folded into the surrounding text.

use tracing::trace;

use super::types::Span;
use crate::style::{apply_sgr_parameters, SgrOptions, Style};

const ESC: u8 = 0x1b;

/// Parse one line starting from `seed`.
///
/// Returns the line's spans and the style in effect at its end. The spans
/// are contiguous, ordered, and cover every byte of `text` exactly once.
pub fn parse_line(text: &str, seed: Style, options: SgrOptions) -> (Vec<Span>, Style) {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut style = seed;
    let mut spans = Vec::new();
    // Start of the bytes not yet covered by a span.
    let mut text_offset = 0;
    let mut index = 0;

    while index < len {
        if bytes[index] != ESC {
            let esc_offset = find_byte(bytes, ESC, index).unwrap_or(len);
            spans.push(Span::new(text_offset, esc_offset - text_offset, style));
            text_offset = esc_offset;
            index = esc_offset;
            continue;
        }

        if index == len - 1 {
            break;
        }

        if bytes[index + 1] != b'[' {
            index += 1;
            continue;
        }

        let Some(m_offset) = find_byte(bytes, b'm', index + 2) else {
            trace!(offset = index, "Unterminated CSI, treating as text");
            index += 1;
            continue;
        };

        let args = &text[index + 2..m_offset];
        if !args.bytes().all(|b| b.is_ascii_digit() || b == b';') {
            trace!(offset = index, args, "Not an SGR sequence, treating as text");
            index = m_offset;
            continue;
        }

        // Bytes skipped one at a time above are still text.
        if text_offset < index {
            spans.push(Span::new(text_offset, index - text_offset, style));
        }

        spans.push(Span::new(index, m_offset - index + 1, style.as_escape()));
        apply_sgr_parameters(&parse_params(args), &mut style, options);

        text_offset = m_offset + 1;
        index = m_offset + 1;
    }

    // Trailing text. Zero-length only for an empty line or after a closing
    // escape, where it carries the end-of-line style.
    let ends_in_escape = spans.last().map_or(true, Span::is_escape);
    if text_offset < len || ends_in_escape {
        spans.push(Span::new(text_offset, len - text_offset, style));
    }

    (spans, style)
}

/// Split an SGR argument string into numeric parameters.
///
/// Empty fields are dropped; an all-empty list becomes `[0]`. Values too
/// large for `u32` saturate, which no SGR code accepts.
pub fn parse_params(args: &str) -> Vec<u32> {
    let mut params: Vec<u32> = args
        .split(';')
        .filter(|arg| !arg.is_empty())
        .map(|arg| arg.parse().unwrap_or(u32::MAX))
        .collect();
    if params.is_empty() {
        params.push(0);
    }
    params
}

fn find_byte(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|pos| from + pos)
}

//! SGR parameter application tests

use ansi_highlight::style::{apply_sgr_parameters, SgrOptions};
use ansi_highlight::{AttributeFlags, Color, NamedColor, Style};

fn apply(params: &[u32]) -> Style {
    apply_sgr_parameters_from(Style::default(), params)
}

fn apply_sgr_parameters_from(mut style: Style, params: &[u32]) -> Style {
    apply_sgr_parameters(params, &mut style, SgrOptions::default());
    style
}

#[test]
fn reset_is_idempotent() {
    let styled = apply(&[1, 3, 4, 31, 44, 15]);
    let once = apply_sgr_parameters_from(styled, &[0]);
    let twice = apply_sgr_parameters_from(once, &[0]);
    assert_eq!(once, Style::default());
    assert_eq!(twice, once);
}

#[test]
fn bold_and_faint_are_exclusive() {
    let style = apply(&[1, 2]);
    assert!(style.attributes.contains(AttributeFlags::FAINT));
    assert!(!style.attributes.contains(AttributeFlags::BOLD));

    let style = apply(&[2, 1]);
    assert!(style.attributes.contains(AttributeFlags::BOLD));
    assert!(!style.attributes.contains(AttributeFlags::FAINT));
}

#[test]
fn blink_rates_are_exclusive() {
    let style = apply(&[5, 6]);
    assert!(style.attributes.contains(AttributeFlags::RAPID_BLINK));
    assert!(!style.attributes.contains(AttributeFlags::SLOW_BLINK));
    assert!(apply(&[5, 6, 25]).attributes.is_empty());
}

#[test]
fn italic_and_fraktur_are_exclusive() {
    let style = apply(&[3, 20]);
    assert_eq!(style.attributes, AttributeFlags::FRAKTUR);
    assert!(apply(&[3, 20, 23]).attributes.is_empty());
}

#[test]
fn framed_and_encircled_are_exclusive() {
    assert_eq!(apply(&[51, 52]).attributes, AttributeFlags::ENCIRCLED);
    assert!(apply(&[51, 54]).attributes.is_empty());
}

#[test]
fn superscript_and_subscript_are_exclusive() {
    assert_eq!(apply(&[73, 74]).attributes, AttributeFlags::SUBSCRIPT);
    assert_eq!(apply(&[74, 73]).attributes, AttributeFlags::SUPERSCRIPT);
}

#[test]
fn eight_bit_colors() {
    assert_eq!(apply(&[38, 5, 196]).foreground, Color::rgb(255, 0, 0));
    assert_eq!(apply(&[38, 5, 232]).foreground, Color::rgb(0, 0, 0));
    assert_eq!(apply(&[48, 5, 255]).background, Color::rgb(255, 255, 255));
    assert_eq!(apply(&[38, 5, 3]).foreground, Color::named(NamedColor::Yellow));
}

#[test]
fn truecolor() {
    let style = apply(&[38, 2, 10, 20, 30]);
    assert_eq!(style.foreground, Color::rgb(10, 20, 30));
    assert_eq!(style.foreground.to_scalar(), 0x0A141E);
}

#[test]
fn truecolor_out_of_range_is_ignored_but_consumed() {
    let style = apply(&[38, 2, 300, 0, 0, 1]);
    assert_eq!(style.foreground, Color::DefaultForeground);
    assert!(style.attributes.contains(AttributeFlags::BOLD));
}

#[test]
fn eight_bit_index_out_of_range_is_ignored() {
    let style = apply(&[48, 5, 256, 4]);
    assert_eq!(style.background, Color::DefaultBackground);
    assert!(style.attributes.contains(AttributeFlags::UNDERLINE));
}

#[test]
fn extended_color_with_unknown_mode_consumes_nothing() {
    // `38;7` is not a color form, so 7 is read as inverse.
    let style = apply(&[38, 7]);
    assert_eq!(style.foreground, Color::DefaultForeground);
    assert!(style.attributes.contains(AttributeFlags::INVERSE));
}

#[test]
fn underline_color_is_consumed_without_effect() {
    let style = apply(&[58, 2, 1, 2, 3, 9]);
    assert_eq!(style.foreground, Color::DefaultForeground);
    assert_eq!(style.attributes, AttributeFlags::CROSSED_OUT);

    let style = apply(&[58, 5, 100, 59]);
    assert_eq!(style, Style::default());
}

#[test]
fn bright_colors() {
    let style = apply(&[93, 104]);
    assert_eq!(style.foreground, Color::bright(NamedColor::Yellow));
    assert_eq!(style.background, Color::bright(NamedColor::Blue));
}

#[test]
fn default_color_codes() {
    let style = apply(&[31, 41, 39, 49]);
    assert_eq!(style, Style::default());
}

#[test]
fn double_underline_option() {
    let mut style = apply(&[1, 4]);
    apply_sgr_parameters(
        &[21],
        &mut style,
        SgrOptions {
            double_underline: true,
        },
    );
    assert!(style.attributes.contains(AttributeFlags::BOLD));
    assert!(style.attributes.contains(AttributeFlags::DOUBLE_UNDERLINE));
    assert!(!style.attributes.contains(AttributeFlags::UNDERLINE));
}

#[test]
fn unknown_codes_are_ignored() {
    assert_eq!(apply(&[60, 99, 1000, u32::MAX]), Style::default());
}

#[test]
fn carried_style_never_has_escape_marker() {
    let style = apply(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 20, 21, 26, 51, 53, 73]);
    assert!(!style.is_escape());
}

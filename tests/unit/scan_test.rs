//! Line scanning tests against realistic compiler output

use ansi_highlight::parser::parse_line;
use ansi_highlight::style::SgrOptions;
use ansi_highlight::{AttributeFlags, Color, NamedColor, Span, Style};

use crate::helpers::{assert_tiles, load_fixture, parse_fixture};

fn scan(text: &str) -> (Vec<Span>, Style) {
    let (spans, style) = parse_line(text, Style::default(), SgrOptions::default());
    assert_tiles(text, &spans);
    (spans, style)
}

#[test]
fn every_fixture_line_is_tiled() {
    let text = load_fixture("build.log");
    let parser = parse_fixture("build.log");
    assert_eq!(parser.len(), text.lines().count());
    for (line, spans) in parser.lines().iter().zip(parser.line_spans()) {
        assert_tiles(line, spans);
    }
}

#[test]
fn compiler_header_is_bold() {
    let parser = parse_fixture("build.log");
    let line = &parser.lines()[0];
    let spans = parser.spans(0).unwrap();
    let compiling = spans.iter().find(|s| !s.is_escape()).unwrap();
    assert_eq!(compiling.text(line), Some("   Compiling"));
    assert_eq!(compiling.style.attributes, AttributeFlags::BOLD);
    assert_eq!(spans.last().unwrap().style, Style::default());
}

#[test]
fn combined_parameters_in_one_sequence() {
    let parser = parse_fixture("build.log");
    let line = &parser.lines()[3];
    let error = parser.spans(3).unwrap()[1];
    assert_eq!(error.text(line), Some("error[E0308]"));
    assert_eq!(error.style.foreground, Color::named(NamedColor::Red));
    assert!(error.style.attributes.contains(AttributeFlags::BOLD));
}

#[test]
fn extended_colors_from_fixture() {
    let parser = parse_fixture("build.log");
    let line = &parser.lines()[6];
    let spans: Vec<&Span> = parser
        .spans(6)
        .unwrap()
        .iter()
        .filter(|s| !s.is_escape())
        .collect();

    assert_eq!(spans[0].text(line), Some("orange"));
    assert_eq!(spans[0].style.foreground, Color::rgb(255, 102, 0));
    assert_eq!(spans[1].text(line), Some(" on dark"));
    assert_eq!(spans[1].style.background, Color::rgb(10, 20, 30));
    assert_eq!(spans[2].text(line), Some(" done"));
    assert_eq!(spans[2].style, Style::default());
}

#[test]
fn erase_line_sequence_is_plain_text() {
    let (spans, style) = scan("a\x1b[2Kb");
    assert!(spans.iter().all(|span| !span.is_escape()));
    assert!(spans.iter().all(|span| span.style == Style::default()));
    assert_eq!(style, Style::default());
}

#[test]
fn colon_separated_parameters_are_text() {
    let (spans, style) = scan("\x1b[4:3mx");
    assert_eq!(spans, vec![Span::new(0, 7, Style::default())]);
    assert_eq!(style, Style::default());
}

#[test]
fn truecolor_sequence_span_length() {
    let (spans, _) = scan("\x1b[38;2;10;20;30mX");
    assert_eq!(spans[0], Span::new(0, 16, Style::default().as_escape()));
    assert_eq!(spans[1].style.foreground, Color::rgb(10, 20, 30));
}

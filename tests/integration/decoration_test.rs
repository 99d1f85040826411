//! Decoration grouping, resolution and registry tests

use anyhow::Result;

use ansi_highlight::config::DecorationConfig;
use ansi_highlight::decoration::{
    decoration_key, group_spans, AnsiDecorationProvider, ColorValue, Decoration,
    DecorationGroups, DecorationProvider, DecorationRange, DecorationRegistry,
    PrettyDecorationProvider, ProviderId, ESCAPE_KEY,
};
use ansi_highlight::{pretty, Parser, ParserOptions};

use crate::helpers::parse_fixture;

/// Always bolds the first byte of the document.
struct FirstByte;

impl DecorationProvider for FirstByte {
    fn name(&self) -> &str {
        "first-byte"
    }

    fn provide(&mut self, _parser: &Parser) -> Result<DecorationGroups> {
        Ok(vec![(
            "custom".to_string(),
            vec![DecorationRange {
                line: 0,
                start: 0,
                end: 1,
            }],
        )])
    }

    fn resolve(&mut self, key: &str) -> Result<Option<Decoration>> {
        anyhow::ensure!(key == "custom", "unexpected key {}", key);
        Ok(Some(Decoration {
            bold: true,
            ..Decoration::default()
        }))
    }
}

#[test]
fn every_non_empty_span_lands_in_exactly_one_group() {
    let parser = parse_fixture("build.log");
    let groups = group_spans(parser.line_spans()).unwrap();

    let grouped: usize = groups.iter().map(|(_, ranges)| ranges.len()).sum();
    let non_empty = parser
        .line_spans()
        .flat_map(|spans| spans.iter())
        .filter(|span| !span.is_empty())
        .count();
    assert_eq!(grouped, non_empty);

    let mut keys: Vec<&str> = groups.iter().map(|(key, _)| key.as_str()).collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total, "keys are unique");
}

#[test]
fn escape_group_covers_all_sequences() {
    let parser = parse_fixture("build.log");
    let groups = group_spans(parser.line_spans()).unwrap();
    let escapes = &groups.iter().find(|(key, _)| key == ESCAPE_KEY).unwrap().1;
    let expected = parser
        .line_spans()
        .flat_map(|spans| spans.iter())
        .filter(|span| span.is_escape())
        .count();
    assert_eq!(escapes.len(), expected);
}

#[test]
fn raw_ranges_slice_to_styled_text() {
    let parser = Parser::from_text("a \x1b[32mgreen\x1b[0m b", ParserOptions::default());
    let mut provider = AnsiDecorationProvider::new(DecorationConfig::default());
    let groups = provider.provide(&parser).unwrap();

    let green = groups
        .iter()
        .find_map(|(key, ranges)| {
            let decoration = provider.resolve(key).unwrap()?;
            (decoration.foreground == Some(ColorValue::Theme("terminal.ansiGreen")))
                .then(|| ranges.clone())
        })
        .unwrap();

    let line = &parser.lines()[0];
    assert_eq!(green.len(), 1);
    assert_eq!(&line[green[0].start..green[0].end], "green");
}

#[test]
fn pretty_ranges_slice_to_stripped_text() {
    let parser = parse_fixture("build.log");
    let stripped = pretty::project(&parser);
    let mut provider = PrettyDecorationProvider::new(DecorationConfig::default());

    for (key, ranges) in provider.provide(&parser).unwrap() {
        assert_ne!(key, ESCAPE_KEY);
        for range in ranges {
            let text = &stripped[range.line].text;
            assert!(range.end <= text.len());
            assert!(!text[range.start..range.end].contains('\x1b'));
        }
    }
}

#[test]
fn bright_and_rgb_colors_resolve() {
    let parser = Parser::from_text(
        "\x1b[95mpink\x1b[38;2;1;2;3mrgb\x1b[7minverse",
        ParserOptions::default(),
    );
    let mut provider = AnsiDecorationProvider::default();
    let decorations: Vec<Decoration> = provider
        .provide(&parser)
        .unwrap()
        .iter()
        .filter(|(key, _)| key != ESCAPE_KEY)
        .map(|(key, _)| provider.resolve(key).unwrap().unwrap())
        .collect();

    assert_eq!(
        decorations[0].foreground,
        Some(ColorValue::Theme("terminal.ansiBrightMagenta"))
    );
    assert_eq!(
        decorations[1].foreground,
        Some(ColorValue::Hex("#010203".to_string()))
    );
    // Inverse moves the RGB foreground to the background.
    assert_eq!(
        decorations[2].background,
        Some(ColorValue::Hex("#010203".to_string()))
    );
    assert_eq!(
        decorations[2].foreground,
        Some(ColorValue::Theme("terminal.background"))
    );
}

#[test]
fn keys_are_stable_across_parsers() {
    let a = Parser::from_text("\x1b[1;33mx", ParserOptions::default());
    let b = Parser::from_text("\x1b[33m\x1b[1my", ParserOptions::default());
    let key_a = decoration_key(&a.spans(0).unwrap().last().unwrap().style).unwrap();
    let key_b = decoration_key(&b.spans(0).unwrap().last().unwrap().style).unwrap();
    assert_eq!(key_a, key_b);
}

#[test]
fn registry_runs_providers_in_order() {
    let parser = Parser::from_text("\x1b[1mx", ParserOptions::default());
    let mut registry = DecorationRegistry::new();
    let custom = registry.add(FirstByte);
    let ansi = registry.add(AnsiDecorationProvider::default());

    let mut order: Vec<ProviderId> = Vec::new();
    let applied = registry.execute(&parser, |id, _, _| order.push(id));

    assert_eq!(applied, 3);
    assert_eq!(order, vec![custom, ansi, ansi]);
}

#[test]
fn removed_provider_no_longer_runs() {
    let parser = Parser::from_text("x", ParserOptions::default());
    let mut registry = DecorationRegistry::new();
    let custom = registry.add(FirstByte);
    assert!(registry.remove(custom));

    let applied = registry.execute(&parser, |_, _, _| panic!("nothing registered"));
    assert_eq!(applied, 0);
    assert!(registry.is_empty());
}

#[test]
fn configured_opacities_flow_through() {
    let config = DecorationConfig {
        escape_opacity: "30%".to_string(),
        faint_opacity: "60%".to_string(),
    };
    let parser = Parser::from_text("\x1b[2mdim", ParserOptions::default());
    let mut registry = DecorationRegistry::new();
    registry.add(AnsiDecorationProvider::new(config));

    let mut opacities = Vec::new();
    registry.execute(&parser, |_, decoration, _| {
        opacities.push(decoration.opacity.clone());
    });
    assert_eq!(
        opacities,
        vec![Some("30%".to_string()), Some("60%".to_string())]
    );
}

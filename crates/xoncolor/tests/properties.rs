//! Property-based tests for scanning, bounding and rendering.

use proptest::prelude::*;
use xoncolor::{
    glyph_for,
    test_support::{Event, RecordingTarget},
    tokenize, Color, ColorCode, ColorParser, PlainRenderer, RenderConfig, RichRenderer, Token,
};

// Carets, digits, hex letters, newlines and qfont glyphs in one alphabet
const ESCAPE_HEAVY: &str = "[\\^xa-fA-F0-9gz \\n\\x{E100}-\\x{E1FF}]{0,64}";

fn token_text(input: &str) -> String {
    let mut out = String::new();
    for token in tokenize(input) {
        match token {
            Token::Literal(s) => out.push_str(s),
            Token::Caret => out.push('^'),
            Token::QFont(i) => out.push(glyph_for(i)),
            Token::NewLine => out.push('\n'),
            Token::Color(_) => {}
        }
    }
    out
}

/// Colored text whose plain rendering contains no carets.
fn caret_free_markup() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        "[a-zA-Z .,!]{0,8}",
        "\\^[0-9]",
        "\\^x[0-9a-fA-F]{3}",
        Just("\n".to_string()),
        (0u32..=0xFF).prop_map(|i| char::from_u32(0xE100 + i).unwrap().to_string()),
    ];
    prop::collection::vec(part, 0..16).prop_map(|parts| parts.concat())
}

fn brightness_range() -> impl Strategy<Value = (u8, u8)> {
    (any::<u8>(), any::<u8>()).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn plain_output_is_token_text(s in ESCAPE_HEAVY) {
        prop_assert_eq!(PlainRenderer::default().convert(&s), token_text(&s));
    }

    #[test]
    fn plain_output_is_token_text_for_any_string(s in "\\PC*") {
        prop_assert_eq!(PlainRenderer::default().convert(&s), token_text(&s));
    }

    #[test]
    fn plain_is_idempotent(s in caret_free_markup()) {
        let plain = PlainRenderer::default();
        let once = plain.convert(&s);
        prop_assert_eq!(plain.convert(&once), once);
    }

    #[test]
    fn bounded_brightness_in_range(
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
        (min, max) in brightness_range()
    ) {
        let value = Color::rgb(r, g, b).bounded(min, max).brightness();
        prop_assert!(min <= value && value <= max, "{} not in {}..={}", value, min, max);
    }

    #[test]
    fn bounded_is_identity_in_range(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let c = Color::rgb(r, g, b);
        prop_assert_eq!(c.bounded(0, 255), c);
        prop_assert_eq!(c.bounded(c.brightness(), c.brightness()), c);
    }

    #[test]
    fn hex_nibbles_duplicate(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let code = format!("^x{:x}{:X}{:x}", r, g, b);
        let tokens: Vec<_> = tokenize(&code).collect();
        prop_assert_eq!(tokens, vec![Token::Color(ColorCode::Rgb(r, g, b))]);
        prop_assert_eq!(
            ColorCode::Rgb(r, g, b).to_color(),
            Color::rgb(r * 0x11, g * 0x11, b * 0x11)
        );
    }

    #[test]
    fn fragments_are_paired_and_appends_nonempty(
        s in ESCAPE_HEAVY,
        (min, max) in brightness_range()
    ) {
        let config = RenderConfig::new(Color::rgb(192, 192, 192), min, max).unwrap();
        let mut target = RecordingTarget::new();
        ColorParser::new(config).parse(&s, &mut target).unwrap();

        let mut open = false;
        for event in &target.events {
            match event {
                Event::Start(_) => {
                    prop_assert!(!open, "nested start");
                    open = true;
                }
                Event::End => {
                    prop_assert!(open, "end without start");
                    open = false;
                }
                Event::NewLine => prop_assert!(!open, "line break inside a fragment"),
                Event::Append(text) => {
                    prop_assert!(open);
                    prop_assert!(!text.is_empty());
                }
                Event::ChangeColor(c) => {
                    prop_assert!(open);
                    prop_assert!(min <= c.brightness() && c.brightness() <= max);
                }
                Event::QFont(_) => prop_assert!(open),
            }
        }
        prop_assert!(!open);
        prop_assert_eq!(target.events.is_empty(), s.is_empty());
    }

    #[test]
    fn rich_text_matches_plain(s in ESCAPE_HEAVY) {
        let doc = RichRenderer::default().to_document(&s);
        prop_assert_eq!(doc.plain_text(), PlainRenderer::default().convert(&s));
    }

    #[test]
    fn double_caret_never_changes_color(d in 0u8..10, tail in "[a-z]{0,5}") {
        let mut target = RecordingTarget::new();
        ColorParser::default().parse(&format!("^^{d}{tail}"), &mut target).unwrap();
        prop_assert_eq!(target.count(|e| matches!(e, Event::ChangeColor(_))), 0);
    }
}

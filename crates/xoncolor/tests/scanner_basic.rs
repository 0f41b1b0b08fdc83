use pretty_assertions::assert_eq;
use xoncolor::{tokenize, ColorCode, Scanner, Token};

fn tokens(input: &str) -> Vec<Token<'_>> {
    tokenize(input).collect()
}

#[test]
fn palette_codes_split_literals() {
    assert_eq!(
        tokens("^1red^7white"),
        vec![
            Token::Color(ColorCode::Palette(1)),
            Token::Literal("red"),
            Token::Color(ColorCode::Palette(7)),
            Token::Literal("white"),
        ]
    );
}

#[test]
fn hex_code_keeps_nibbles() {
    assert_eq!(
        tokens("^xF0aok"),
        vec![Token::Color(ColorCode::Rgb(0xF, 0x0, 0xA)), Token::Literal("ok")]
    );
}

#[test]
fn double_caret_wins_over_digit() {
    assert_eq!(tokens("^^1"), vec![Token::Caret, Token::Literal("1")]);
    assert_eq!(
        tokens("^^^1"),
        vec![Token::Caret, Token::Color(ColorCode::Palette(1))]
    );
    assert_eq!(tokens("^^^"), vec![Token::Caret, Token::Literal("^")]);
}

#[test]
fn malformed_escapes_are_literal() {
    assert_eq!(tokens("^xzzz"), vec![Token::Literal("^xzzz")]);
    assert_eq!(tokens("^"), vec![Token::Literal("^")]);
    assert_eq!(tokens("end ^x1"), vec![Token::Literal("end ^x1")]);
    assert_eq!(tokens("^a^"), vec![Token::Literal("^a^")]);
    assert_eq!(
        tokens("^x12^3"),
        vec![Token::Literal("^x12"), Token::Color(ColorCode::Palette(3))]
    );
}

#[test]
fn newline_is_its_own_token() {
    assert_eq!(
        tokens("a\n\nb"),
        vec![
            Token::Literal("a"),
            Token::NewLine,
            Token::NewLine,
            Token::Literal("b"),
        ]
    );
}

#[test]
fn qfont_range_only() {
    assert_eq!(
        tokens("x\u{E141}\u{E1FF}y"),
        vec![
            Token::Literal("x"),
            Token::QFont(0x41),
            Token::QFont(0xFF),
            Token::Literal("y"),
        ]
    );
    assert_eq!(tokens("\u{E0FF}\u{E200}"), vec![Token::Literal("\u{E0FF}\u{E200}")]);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokens("").is_empty());
}

#[test]
fn scanner_restarts() {
    let input = "^1a^^\nb\u{E100}";
    let mut scanner = Scanner::new(input);
    assert_eq!(scanner.input(), input);
    let first: Vec<_> = scanner.clone().collect();
    let drained: Vec<_> = scanner.by_ref().collect();
    assert_eq!(first, drained);
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.offset(), input.len());

    scanner.reset();
    assert_eq!(scanner.offset(), 0);
    assert_eq!(scanner.collect::<Vec<_>>(), first);
}

#[test]
fn offsets_advance_without_gaps() {
    let input = "pre^2mid^x0f0^^\n\u{E120}^xq post";
    let mut scanner = Scanner::new(input);
    let mut covered = 0;
    while let Some(token) = scanner.next() {
        let width = match token {
            Token::Literal(s) => s.len(),
            Token::Caret => 2,
            Token::Color(ColorCode::Palette(_)) => 2,
            Token::Color(ColorCode::Rgb(..)) => 5,
            Token::NewLine => 1,
            Token::QFont(_) => '\u{E100}'.len_utf8(),
        };
        covered += width;
        assert_eq!(scanner.offset(), covered, "after {token:?}");
    }
    assert_eq!(covered, input.len());
}

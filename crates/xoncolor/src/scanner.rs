//! Tokenizer for the caret escape language.
//!
//! | input            | token                   |
//! |------------------|-------------------------|
//! | `^^`             | [`Token::Caret`]        |
//! | `^0` .. `^9`     | [`ColorCode::Palette`]  |
//! | `^xRGB` (hex)    | [`ColorCode::Rgb`]      |
//! | `\n`             | [`Token::NewLine`]      |
//! | `U+E100..U+E1FF` | [`Token::QFont`]        |
//!
//! Everything else, including incomplete escapes such as a trailing `^x1`,
//! is literal text.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    color::{hex_value, Color},
    qfont::qfont_index,
};

// Alternation order is precedence: `^^` wins over a digit that follows it.
static ESCAPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\^\^|\^[0-9]|\^x[0-9A-Fa-f]{3}|\n|[\x{E100}-\x{E1FF}]")
        .unwrap_or_else(|e| panic!("escape pattern failed to compile: {e}"))
});

/// Payload of a color directive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorCode {
    /// `^<digit>`
    Palette(u8),
    /// `^xRGB`, one nibble per channel
    Rgb(u8, u8, u8),
}

impl ColorCode {
    /// The unbounded color this code selects.
    pub fn to_color(self) -> Color {
        match self {
            ColorCode::Palette(digit) => Color::from_palette(digit).unwrap_or_default(),
            ColorCode::Rgb(r, g, b) => Color::from_nibbles(r, g, b),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of text with no directives in it.
    Literal(&'a str),
    Color(ColorCode),
    /// `^^`, a literal caret
    Caret,
    QFont(u8),
    NewLine,
}

impl<'a> Token<'a> {
    fn from_escape(escape: &'a str) -> Self {
        match escape.as_bytes() {
            b"^^" => Token::Caret,
            b"\n" => Token::NewLine,
            [b'^', d @ b'0'..=b'9'] => Token::Color(ColorCode::Palette(d - b'0')),
            [b'^', b'x', r, g, b] => match (hex_value(*r), hex_value(*g), hex_value(*b)) {
                (Some(r), Some(g), Some(b)) => Token::Color(ColorCode::Rgb(r, g, b)),
                _ => Token::Literal(escape),
            },
            _ => escape
                .chars()
                .next()
                .and_then(qfont_index)
                .map_or(Token::Literal(escape), Token::QFont),
        }
    }
}

/// Lazy token stream over a string.
///
/// Tokens are produced left to right and cover the input exactly. Cloning or
/// calling [`reset`](Self::reset) restarts the scan.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    // Next escape at or after `pos`, found while emitting the literal before it
    lookahead: Option<(usize, usize)>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            lookahead: None,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.lookahead = None;
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    fn next_escape(&mut self) -> Option<(usize, usize)> {
        if let Some(found) = self.lookahead.take() {
            return Some(found);
        }
        ESCAPE_PATTERN
            .find_at(self.input, self.pos)
            .map(|m| (m.start(), m.end()))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        match self.next_escape() {
            Some((begin, end)) if begin == start => {
                self.pos = end;
                Some(Token::from_escape(&self.input[begin..end]))
            }
            Some((begin, end)) => {
                self.lookahead = Some((begin, end));
                self.pos = begin;
                Some(Token::Literal(&self.input[start..begin]))
            }
            None => {
                self.pos = self.input.len();
                Some(Token::Literal(&self.input[start..]))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

pub fn tokenize(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

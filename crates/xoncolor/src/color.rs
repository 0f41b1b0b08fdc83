//! Color values, the caret palette and brightness bounding.
use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// An opaque RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Colors selected by `^0` .. `^9`.
///
/// `^8` and `^9` are the engine's translucent white and half-brightness white;
/// both come out as mid grey once composited onto a console background.
pub const PALETTE: [Color; 10] = [
    Color::rgb(0x00, 0x00, 0x00), // black
    Color::rgb(0xFF, 0x00, 0x00), // red
    Color::rgb(0x00, 0xFF, 0x00), // green
    Color::rgb(0xFF, 0xFF, 0x00), // yellow
    Color::rgb(0x00, 0x00, 0xFF), // blue
    Color::rgb(0x00, 0xFF, 0xFF), // cyan
    Color::rgb(0xFF, 0x00, 0xFF), // magenta
    Color::rgb(0xFF, 0xFF, 0xFF), // white
    Color::rgb(0x80, 0x80, 0x80), // grey
    Color::rgb(0x80, 0x80, 0x80), // grey
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette entry for the digit in `^<digit>`.
    pub fn from_palette(digit: u8) -> Option<Self> {
        PALETTE.get(digit as usize).copied()
    }

    /// Expands the three nibbles of `^xRGB` to full channels (`0xa` -> `0xaa`).
    pub fn from_nibbles(r: u8, g: u8, b: u8) -> Self {
        Self::rgb((r & 0x0F) * 0x11, (g & 0x0F) * 0x11, (b & 0x0F) * 0x11)
    }

    /// Turns a color code like `2`, `^2`, `x1aF` or `^x1aF` into its true,
    /// unbounded color.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.strip_prefix('^').unwrap_or(code);
        match code.as_bytes() {
            [d @ b'0'..=b'9'] => Self::from_palette(d - b'0'),
            [b'x', r, g, b] => Some(Self::from_nibbles(
                hex_value(*r)?,
                hex_value(*g)?,
                hex_value(*b)?,
            )),
            _ => None,
        }
    }

    /// HSV value: the brightest channel.
    pub fn brightness(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Rescales the color so its [`brightness`](Self::brightness) lies in
    /// `[min, max]`, keeping the ratio between channels.
    ///
    /// Colors already in range are returned unchanged. Black has no hue to
    /// keep, so raising it yields the grey `(min, min, min)`. An inverted
    /// range is read as `[min, min]`.
    pub fn bounded(self, min: u8, max: u8) -> Self {
        let max = max.max(min);
        let value = self.brightness();
        if value < min {
            if value == 0 {
                Self::rgb(min, min, min)
            } else {
                self.scaled(value, min)
            }
        } else if value > max {
            self.scaled(value, max)
        } else {
            self
        }
    }

    // `from` is the current brightness and never zero; the brightest channel
    // lands exactly on `to`.
    fn scaled(self, from: u8, to: u8) -> Self {
        let (from, to) = (u32::from(from), u32::from(to));
        let scale = |c: u8| ((u32::from(c) * to + from / 2) / from) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

pub(crate) fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 0xA),
        b'A'..=b'F' => Some(c - b'A' + 0xA),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rgb` or `#rrggbb` (the `#` is optional).
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let digits = hex
            .bytes()
            .map(hex_value)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(invalid)?;
        match digits.as_slice() {
            [r, g, b] => Ok(Self::from_nibbles(*r, *g, *b)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2)),
            _ => Err(invalid()),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

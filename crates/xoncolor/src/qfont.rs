//! The qfont glyph table.
//!
//! The game font maps bytes to bitmap glyphs; chat text carries them as
//! private-use code points `U+E100 + index`. The upper half of the font is a
//! second (differently colored) copy of the lower half, so both halves map to
//! the same characters here.

/// First code point of the private-use block carrying qfont glyphs.
pub const QFONT_BASE: u32 = 0xE100;

// Icons in slots 0x00..0x20; NUL, TAB, LF and CR become spaces so a glyph can
// never break a line. The caret slot (0x5E) is a modifier circumflex so a glyph
// never starts a color code in plain output.
const LOW_GLYPHS: [char; 32] = [
    ' ', '#', '#', '#', '#', '.', '#', '#', '#', ' ', ' ', '#', ' ', ' ', '.', '.', '[', ']', '0',
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '<', '=', '>',
];

// Slots 0x80..0x90 differ from their lower-half twins.
const HIGH_ICONS: [char; 16] = [
    '<', '=', '>', '#', '#', '.', '#', '#', '#', '#', ' ', '#', ' ', '>', '.', '.',
];

const fn build_table() -> [char; 256] {
    let mut table = [' '; 256];
    let mut i = 0;
    while i < 256 {
        let low = i & 0x7F;
        table[i] = if i >= 0x80 && low < 0x10 {
            HIGH_ICONS[low]
        } else if low < 0x20 {
            LOW_GLYPHS[low]
        } else if low == 0x5E {
            '\u{02C6}'
        } else if low == 0x7F {
            '<'
        } else {
            low as u8 as char
        };
        i += 1;
    }
    table
}

/// Replacement character for every qfont index.
pub const QFONT_TABLE: [char; 256] = build_table();

pub fn glyph_for(index: u8) -> char {
    QFONT_TABLE[index as usize]
}

/// Index of a qfont code point, `None` for any other character.
pub fn qfont_index(ch: char) -> Option<u8> {
    u8::try_from((ch as u32).checked_sub(QFONT_BASE)?).ok()
}

/// Code point carrying the glyph at `index`.
pub fn qfont_char(index: u8) -> char {
    char::from_u32(QFONT_BASE + u32::from(index)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

//! xoncolor: Xonotic color code toolkit.
//! Scans caret escapes (`^1`, `^x0af`, `^^`) and qfont glyphs, bounds color
//! brightness for legibility, and renders to styled runs or plain text.

pub mod color;
pub mod config;
mod error;
pub mod parser;
pub mod plain;
pub mod qfont;
pub mod rich;
pub mod scanner;
pub use color::{Color, PALETTE};
pub use config::RenderConfig;
pub use error::{ColorError, Result};
pub use parser::ColorParser;
pub use plain::{strip_colors, PlainRenderer, PlainTarget};
pub use qfont::glyph_for;
pub use rich::{RichRenderer, RichTarget, StyledDocument, StyledRun, StyledSink};
pub use scanner::{tokenize, ColorCode, Scanner, Token};

// Test utilities
pub mod test_support;

/// Receiver of the callbacks emitted by [`ColorParser::parse`].
///
/// Calls always arrive as `on_start`, any mix of `on_append_string`,
/// `on_change_color` and `on_qfont`, then `on_end`. A line break is reported
/// as `on_end`, `on_new_line`, `on_start` with the color still in effect.
pub trait ColorTarget {
    type Error;

    /// Begins a fragment with the given color.
    fn on_start(&mut self, color: Color) -> std::result::Result<(), Self::Error>;

    /// Ends a fragment, undoing whatever `on_start` set up.
    fn on_end(&mut self) -> std::result::Result<(), Self::Error>;

    /// Appends text in the current color. Never called with an empty string.
    fn on_append_string(&mut self, text: &str) -> std::result::Result<(), Self::Error>;

    fn on_new_line(&mut self) -> std::result::Result<(), Self::Error>;

    /// Changes the color used by subsequent appends.
    fn on_change_color(&mut self, color: Color) -> std::result::Result<(), Self::Error>;

    /// Shows a qfont glyph.
    /// Default implementation appends the table character from [`glyph_for`].
    fn on_qfont(&mut self, index: u8) -> std::result::Result<(), Self::Error> {
        let mut buf = [0u8; 4];
        self.on_append_string(glyph_for(index).encode_utf8(&mut buf))
    }
}

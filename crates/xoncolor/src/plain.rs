//! Plain rendering: text with every directive removed.
use std::convert::Infallible;

use crate::{
    color::Color, config::RenderConfig, error::infallible, parser::ColorParser, ColorTarget,
};

/// [`ColorTarget`] accumulating uncolored text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainTarget {
    output: String,
}

impl PlainTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl ColorTarget for PlainTarget {
    type Error = Infallible;

    fn on_start(&mut self, _color: Color) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_append_string(&mut self, text: &str) -> Result<(), Self::Error> {
        self.output.push_str(text);
        Ok(())
    }

    fn on_new_line(&mut self) -> Result<(), Self::Error> {
        self.output.push('\n');
        Ok(())
    }

    fn on_change_color(&mut self, _color: Color) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Converts colored text to plain strings, e.g. for sorting, logs or tool-tips.
#[derive(Clone, Debug, Default)]
pub struct PlainRenderer {
    parser: ColorParser,
}

impl PlainRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            parser: ColorParser::new(config),
        }
    }

    pub fn parser(&self) -> &ColorParser {
        &self.parser
    }

    pub fn convert(&self, text: &str) -> String {
        let mut target = PlainTarget::new();
        infallible(self.parser.parse(text, &mut target));
        target.into_string()
    }

    /// Same output as [`convert`](Self::convert): plain text has no paragraph
    /// boundary to suppress.
    pub fn convert_fragment(&self, text: &str) -> String {
        self.convert(text)
    }

    /// Converts each line and joins them with `\n`.
    pub fn convert_lines<I>(&self, lines: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut target = PlainTarget::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                infallible(target.on_new_line());
            }
            infallible(self.parser.parse(line.as_ref(), &mut target));
        }
        target.into_string()
    }
}

/// Strips color codes from `text` and replaces qfont glyphs.
pub fn strip_colors(text: &str) -> String {
    PlainRenderer::default().convert(text)
}

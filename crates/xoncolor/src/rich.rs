//! Rich rendering: colored runs inserted into a styled text sink.
use std::convert::Infallible;

use crate::{
    color::Color, config::RenderConfig, error::infallible, parser::ColorParser, ColorTarget,
};

/// Destination of rich output, written at an insertion cursor.
pub trait StyledSink {
    type Error;

    /// Sets the color used by subsequent inserts.
    fn set_color(&mut self, color: Color) -> Result<(), Self::Error>;
    fn insert_text(&mut self, text: &str) -> Result<(), Self::Error>;
    fn insert_line_break(&mut self) -> Result<(), Self::Error>;

    /// Called when a fragment ends. Default implementation does nothing.
    fn reset_style(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Text rendered in a single color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub color: Color,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// In-memory sink: lines of runs, appended at the end of the current line.
///
/// Consecutive inserts in the same color merge into one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledDocument {
    lines: Vec<Vec<StyledRun>>,
    cur: usize,
    color: Color,
}

impl StyledDocument {
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            cur: 0,
            color: RenderConfig::default().default_color(),
        }
    }

    pub fn lines(&self) -> &[Vec<StyledRun>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All runs in document order, line breaks dropped.
    pub fn runs(&self) -> impl Iterator<Item = &StyledRun> {
        self.lines.iter().flatten()
    }

    pub fn into_runs(self) -> Vec<StyledRun> {
        self.lines.into_iter().flatten().collect()
    }

    /// The document's text, lines joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|run| run.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for StyledDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledSink for StyledDocument {
    type Error = Infallible;

    fn set_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.color = color;
        Ok(())
    }

    fn insert_text(&mut self, text: &str) -> Result<(), Self::Error> {
        if text.is_empty() {
            return Ok(());
        }
        if self.cur >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        let line = &mut self.lines[self.cur];
        match line.last_mut() {
            Some(run) if run.color == self.color => run.text.push_str(text),
            _ => line.push(StyledRun::new(text, self.color)),
        }
        Ok(())
    }

    fn insert_line_break(&mut self) -> Result<(), Self::Error> {
        self.cur += 1;
        if self.cur >= self.lines.len() {
            self.lines.push(Vec::new());
        }
        Ok(())
    }
}

/// [`ColorTarget`] forwarding parser callbacks to a [`StyledSink`].
pub struct RichTarget<'a, S: ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: StyledSink + ?Sized> RichTarget<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }
}

impl<S: StyledSink + ?Sized> ColorTarget for RichTarget<'_, S> {
    type Error = S::Error;

    fn on_start(&mut self, color: Color) -> Result<(), Self::Error> {
        self.sink.set_color(color)
    }

    fn on_end(&mut self) -> Result<(), Self::Error> {
        self.sink.reset_style()
    }

    fn on_append_string(&mut self, text: &str) -> Result<(), Self::Error> {
        self.sink.insert_text(text)
    }

    fn on_new_line(&mut self) -> Result<(), Self::Error> {
        self.sink.insert_line_break()
    }

    fn on_change_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.sink.set_color(color)
    }
}

/// Renders colored text into a [`StyledSink`].
#[derive(Clone, Debug, Default)]
pub struct RichRenderer {
    parser: ColorParser,
}

impl RichRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            parser: ColorParser::new(config),
        }
    }

    pub fn parser(&self) -> &ColorParser {
        &self.parser
    }

    /// Renders `text` as a paragraph: a line break follows it.
    pub fn convert<S: StyledSink + ?Sized>(&self, text: &str, sink: &mut S) -> Result<(), S::Error> {
        self.convert_fragment(text, sink)?;
        sink.insert_line_break()
    }

    /// Renders `text` inline, leaving the cursor right after it.
    pub fn convert_fragment<S: StyledSink + ?Sized>(
        &self,
        text: &str,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        self.parser.parse(text, &mut RichTarget::new(sink))
    }

    /// Renders each line as a paragraph.
    pub fn convert_lines<S, I>(&self, lines: I, sink: &mut S) -> Result<(), S::Error>
    where
        S: StyledSink + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.convert(line.as_ref(), sink)?;
        }
        Ok(())
    }

    /// Renders `text` inline into a fresh [`StyledDocument`].
    pub fn to_document(&self, text: &str) -> StyledDocument {
        let mut doc = StyledDocument::new();
        infallible(self.convert_fragment(text, &mut doc));
        doc
    }

    /// The `(text, color)` runs of `text`, line breaks dropped.
    pub fn to_runs(&self, text: &str) -> Vec<StyledRun> {
        self.to_document(text).into_runs()
    }
}

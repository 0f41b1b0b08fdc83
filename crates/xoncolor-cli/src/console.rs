use std::fmt::Write;

use xoncolor::{Color, RichRenderer, StyledSink};

/// Sink producing 24-bit ANSI colored text for a terminal.
pub struct AnsiSink {
    out: String,
}

impl AnsiSink {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn into_ansi_string(self) -> String {
        self.out
    }
}

impl StyledSink for AnsiSink {
    type Error = std::fmt::Error;

    fn set_color(&mut self, color: Color) -> Result<(), Self::Error> {
        write!(self.out, "\x1B[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    fn insert_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.out.push_str(text);
        Ok(())
    }

    fn insert_line_break(&mut self) -> Result<(), Self::Error> {
        self.out.push('\n');
        Ok(())
    }

    fn reset_style(&mut self) -> Result<(), Self::Error> {
        self.out.push_str("\x1B[0m");
        Ok(())
    }
}

/// Convenience: render colored text into an ANSI String.
pub fn render_to_ansi(
    renderer: &RichRenderer,
    text: &str,
    fragment: bool,
) -> Result<String, std::fmt::Error> {
    let mut sink = AnsiSink::new();
    if fragment {
        renderer.convert_fragment(text, &mut sink)?;
    } else {
        renderer.convert(text, &mut sink)?;
    }
    Ok(sink.into_ansi_string())
}

/// Renders every line as its own paragraph. As a fragment, the lines are
/// separated by line breaks but the output does not end with one.
pub fn render_lines_to_ansi<'a>(
    renderer: &RichRenderer,
    lines: impl IntoIterator<Item = &'a str>,
    fragment: bool,
) -> Result<String, std::fmt::Error> {
    let mut sink = AnsiSink::new();
    if fragment {
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                sink.insert_line_break()?;
            }
            renderer.convert_fragment(line, &mut sink)?;
        }
    } else {
        renderer.convert_lines(lines, &mut sink)?;
    }
    Ok(sink.into_ansi_string())
}

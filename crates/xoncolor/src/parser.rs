//! The driver: turns the token stream into [`ColorTarget`] callbacks.
use crate::{
    color::Color,
    config::RenderConfig,
    scanner::{Scanner, Token},
    ColorTarget,
};

/// Parses Xonotic-colored strings and reports them to a [`ColorTarget`].
///
/// The parser only holds its [`RenderConfig`]; all per-call state lives in
/// [`parse`](Self::parse), so one parser can serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct ColorParser {
    config: RenderConfig,
}

/// State of a single `parse` call.
struct ParseState {
    color: Color,
    pending: String,
    open: bool,
}

impl ParseState {
    fn new(color: Color) -> Self {
        Self {
            color,
            pending: String::new(),
            open: false,
        }
    }

    fn flush<T: ColorTarget + ?Sized>(&mut self, target: &mut T) -> Result<(), T::Error> {
        if !self.pending.is_empty() {
            target.on_append_string(&self.pending)?;
            self.pending.clear();
        }
        Ok(())
    }
}

impl ColorParser {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Turns a code like `2` or `x123` into its true color, not bounded.
    pub fn to_color(&self, code: &str) -> Option<Color> {
        Color::from_code(code)
    }

    /// Clamps `color` into the configured brightness range.
    pub fn bounded_color(&self, color: Color) -> Color {
        color.bounded(self.config.min_brightness(), self.config.max_brightness())
    }

    /// Parses `text`, emitting callbacks on `target`.
    ///
    /// Empty input produces no callbacks at all. Text between state changes
    /// is delivered in a single `on_append_string`.
    pub fn parse<T: ColorTarget + ?Sized>(
        &self,
        text: &str,
        target: &mut T,
    ) -> Result<(), T::Error> {
        let mut state = ParseState::new(self.config.default_color());
        let mut tokens = 0usize;
        for token in Scanner::new(text) {
            tokens += 1;
            if !state.open {
                target.on_start(state.color)?;
                state.open = true;
            }
            match token {
                Token::Literal(s) => state.pending.push_str(s),
                Token::Caret => state.pending.push('^'),
                Token::Color(code) => {
                    let color = self.bounded_color(code.to_color());
                    if color != state.color {
                        state.flush(target)?;
                        target.on_change_color(color)?;
                        state.color = color;
                    }
                }
                Token::QFont(index) => {
                    state.flush(target)?;
                    target.on_qfont(index)?;
                }
                Token::NewLine => {
                    state.flush(target)?;
                    target.on_end()?;
                    target.on_new_line()?;
                    target.on_start(state.color)?;
                }
            }
        }
        if state.open {
            state.flush(target)?;
            target.on_end()?;
        }
        tracing::trace!(len = text.len(), tokens, "parsed colored text");
        Ok(())
    }
}

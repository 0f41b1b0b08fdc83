//! Test support utilities for xoncolor.
//!
//! This module provides helper types that are useful for asserting the exact
//! callback sequence of the parser, but are not part of the rendering API.

use std::convert::Infallible;

use crate::{Color, ColorTarget};

/// One parser callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Start(Color),
    End,
    Append(String),
    NewLine,
    ChangeColor(Color),
    QFont(u8),
}

/// A target recording every callback it receives.
///
/// `on_qfont` is recorded as [`Event::QFont`] rather than expanded to text.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub events: Vec<Event>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl ColorTarget for RecordingTarget {
    type Error = Infallible;

    fn on_start(&mut self, color: Color) -> Result<(), Self::Error> {
        self.events.push(Event::Start(color));
        Ok(())
    }

    fn on_end(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::End);
        Ok(())
    }

    fn on_append_string(&mut self, text: &str) -> Result<(), Self::Error> {
        self.events.push(Event::Append(text.to_string()));
        Ok(())
    }

    fn on_new_line(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::NewLine);
        Ok(())
    }

    fn on_change_color(&mut self, color: Color) -> Result<(), Self::Error> {
        self.events.push(Event::ChangeColor(color));
        Ok(())
    }

    fn on_qfont(&mut self, index: u8) -> Result<(), Self::Error> {
        self.events.push(Event::QFont(index));
        Ok(())
    }
}

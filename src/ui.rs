//! Terminal styling for prompts, diagnostics and color previews.
//!
//! Styling is opt-in per [`Palette`]; a disabled palette returns its input
//! unchanged so output stays clean when piped or under `NO_COLOR`.

use crossterm::style::{Color, Stylize};

use crate::color::hex_to_rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Palette that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn title(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(Color::Green).bold().to_string()
    }

    pub fn hint(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(Color::DarkGrey).to_string()
    }

    pub fn warn(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(Color::Yellow).to_string()
    }

    pub fn error(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(Color::Red).to_string()
    }

    pub fn success(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(Color::Green).to_string()
    }

    /// Small filled block painted in `hex`, or an empty string when styling
    /// is off or the value does not parse.
    pub fn swatch(&self, hex: &str) -> String {
        if !self.color {
            return String::new();
        }
        match hex_to_rgb(hex) {
            Some((r, g, b)) => format!(" {}", "██".with(Color::Rgb { r, g, b })),
            None => String::new(),
        }
    }
}

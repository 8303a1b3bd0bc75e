//! Colour rendering for codes
//!
//! Pegs are drawn as coloured blocks on capable terminals and as plain
//! symbols everywhere else.

use crate::core::{Code, Colour, Feedback};
use colored::Colorize;

/// Turns pegs into printable strings
pub trait ColourRenderer {
    /// Render a single peg
    fn peg(&self, colour: Colour) -> String;

    /// Render a whole code
    fn code(&self, code: &Code) -> String {
        code.pegs().iter().map(|&colour| self.peg(colour)).collect()
    }

    /// Render feedback as `✓in_place ?in_colour`
    fn feedback(&self, feedback: Feedback) -> String {
        feedback.to_string()
    }
}

/// ANSI colour blocks via `colored`
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl ColourRenderer for AnsiRenderer {
    fn peg(&self, colour: Colour) -> String {
        let cell = format!(" {} ", colour.symbol());
        let painted = match colour {
            Colour::Blue => cell.on_blue(),
            Colour::Red => cell.on_red(),
            Colour::Green => cell.on_green(),
            Colour::Yellow => cell.on_yellow(),
            Colour::Purple => cell.on_purple(),
            Colour::Cyan => cell.on_cyan(),
        };
        painted.black().bold().to_string()
    }

    fn feedback(&self, feedback: Feedback) -> String {
        format!(
            "{} {}",
            format!("✓{}", feedback.in_place).green().bold(),
            format!("?{}", feedback.in_colour).yellow()
        )
    }
}

/// Bare symbols, for pipes and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl ColourRenderer for PlainRenderer {
    fn peg(&self, colour: Colour) -> String {
        colour.symbol().to_string()
    }
}

/// Pick a renderer for the terminal
#[must_use]
pub fn renderer(plain: bool) -> Box<dyn ColourRenderer> {
    if plain {
        Box::new(PlainRenderer)
    } else {
        Box::new(AnsiRenderer)
    }
}

//! Formatting utilities for terminal output

use super::render::ColourRenderer;
use crate::core::{Code, Feedback};

/// Format a duration given in seconds as `1 h, 2 min, 3 s`
///
/// Durations under a second keep one decimal, longer ones are truncated to
/// whole seconds.
#[must_use]
pub fn time_to_str(seconds: f64) -> String {
    let mut remaining = seconds.max(0.0);
    let mut text = String::new();

    if remaining > 3600.0 {
        let hours = (remaining / 3600.0).floor();
        text.push_str(&format!("{hours:.0} h, "));
        remaining %= 3600.0;
    }

    if remaining > 60.0 {
        let minutes = (remaining / 60.0).floor();
        text.push_str(&format!("{minutes:.0} min, "));
        remaining %= 60.0;
    }

    if remaining < 1.0 {
        text.push_str(&format!("{remaining:.1} s"));
    } else {
        text.push_str(&format!("{:.0} s", remaining.floor()));
    }

    text
}

/// A guess with its feedback, as `✓in_place <pegs> ?in_colour`
#[must_use]
pub fn guess_row(renderer: &dyn ColourRenderer, guess: &Code, feedback: Feedback) -> String {
    format!(
        "✓{} {} ?{}",
        feedback.in_place,
        renderer.code(guess),
        feedback.in_colour
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).max(usize::from(value > 0)).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::output::render::PlainRenderer;

    #[test]
    fn time_sub_second() {
        assert_eq!(time_to_str(0.34), "0.3 s");
        assert_eq!(time_to_str(0.0), "0.0 s");
    }

    #[test]
    fn time_seconds_truncated() {
        assert_eq!(time_to_str(5.9), "5 s");
    }

    #[test]
    fn time_minutes_and_hours() {
        assert_eq!(time_to_str(125.0), "2 min, 5 s");
        assert_eq!(time_to_str(3725.0), "1 h, 2 min, 5 s");
    }

    #[test]
    fn time_exact_minute_stays_in_seconds() {
        assert_eq!(time_to_str(60.0), "60 s");
    }

    #[test]
    fn row_layout() {
        let code = Code::parse("BRG", &Alphabet::new(3).unwrap(), 3).unwrap();
        assert_eq!(
            guess_row(&PlainRenderer, &code, Feedback::new(1, 2)),
            "✓1 BRG ?2"
        );
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0, 10, 4), "░░░░");
        assert_eq!(create_progress_bar(10, 10, 4), "████");
        assert_eq!(create_progress_bar(1, 100, 4), "█░░░");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}

//! User-facing output sinks.
//!
//! Messages the user must see go through [`Reporter`] instead of straight to
//! the console, so tests can capture them per instance.

use owo_colors::OwoColorize;

/// Sink for user-facing messages.
pub trait Reporter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes styled messages to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Styled rendering of an error line.
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "error".red().bold(), message)
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{}", Self::format_error(message));
    }
}

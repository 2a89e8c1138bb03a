use crate::ui;
use colored::Colorize;
use std::io::{self, Write};

/// Single-frame status line for blocking queries of unknown duration.
///
/// The process is single-threaded, so the spinner draws once when created
/// and is cleared when finished or dropped.
pub struct Spinner {
    message: String,
    active: bool,
}

impl Spinner {
    /// Create and draw a new spinner. Quiet mode never draws.
    pub fn new(message: &str) -> Self {
        let spinner = Self {
            message: message.to_string(),
            active: !ui::is_quiet(),
        };
        spinner.draw();
        spinner
    }

    /// Stop the spinner with error message
    pub fn finish_with_error(mut self, message: &str) {
        self.stop();
        ui::error(message);
    }

    /// Stop the spinner silently
    pub fn finish(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        print!("\r{:width$}\r", "", width = self.message.chars().count() + 8);
        io::stdout().flush().unwrap_or(());
    }

    fn draw(&self) {
        if !self.active {
            return;
        }
        print!("\r{} {}...", "⠋".cyan().bold(), self.message);
        io::stdout().flush().unwrap_or(());
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_creation() {
        let spinner = Spinner::new("Testing");
        assert_eq!(spinner.message, "Testing");
    }

    #[test]
    fn test_quiet_spinner_is_inactive() {
        ui::set_quiet(true);
        let spinner = Spinner::new("Quiet");
        ui::set_quiet(false);
        assert!(!spinner.active);
    }
}

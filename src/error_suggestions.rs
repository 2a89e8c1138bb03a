//! Error suggestions and helpful messages
//!
//! Provides actionable suggestions for common error scenarios

use crate::error::PacwiseError;
use crate::project_identity;
use colored::Colorize;

/// Extension trait to add suggestions to errors
pub trait ErrorSuggestions {
    /// Get a helpful suggestion for this error
    fn suggestion(&self) -> Option<String>;

    /// Display the error with its suggestion
    fn display_with_suggestion(&self) -> String;
}

impl ErrorSuggestions for PacwiseError {
    fn suggestion(&self) -> Option<String> {
        match self {
            PacwiseError::BackendMissing { helper, remedy } => Some(format!(
                "Install {} manually:\n  {}",
                helper,
                remedy.cyan()
            )),
            PacwiseError::SourceUnavailable(_) => Some(format!(
                "Check that pacman works ({}) and that you are online for AUR searches",
                "pacman -Ss pacman".cyan()
            )),
            PacwiseError::ActionFailed { output, command, .. } => {
                if output.contains("lock") || output.contains("db.lck") {
                    Some(format!(
                        "Another package manager process is running\nIf not, remove the stale lock: {}",
                        "sudo rm /var/lib/pacman/db.lck".red()
                    ))
                } else if command.starts_with("makepkg") {
                    Some(format!(
                        "Make sure the build tools are installed: {}",
                        "sudo pacman -S --needed base-devel".cyan()
                    ))
                } else {
                    Some(format!(
                        "Scroll up for the package manager's own message, or check the log: {}",
                        project_identity::cli_with("info").cyan()
                    ))
                }
            }
            PacwiseError::InvalidPackageName(_) => Some(
                "Package names may contain letters, digits and @ . _ + - only".to_string(),
            ),
            PacwiseError::ConfigError(msg) => {
                if msg.contains("Unknown setting") || msg.contains("Invalid value") {
                    Some(format!(
                        "Run '{}' to list settings and their values",
                        project_identity::cli_with("config show").cyan()
                    ))
                } else {
                    Some(format!(
                        "Fix or remove the file shown by '{}'",
                        project_identity::cli_with("config path").cyan()
                    ))
                }
            }
            PacwiseError::SystemCommandFailed { command, .. } => Some(format!(
                "Check that '{}' is installed and in your PATH",
                command.split_whitespace().next().unwrap_or(command).cyan()
            )),
            PacwiseError::RemoteFetchError(_) => Some(format!(
                "The AUR may be unreachable; install an AUR helper or disable it with '{}'",
                project_identity::cli_with("config set aur-search false").cyan()
            )),
            _ => None,
        }
    }

    fn display_with_suggestion(&self) -> String {
        let base_msg = format!("{}", self);

        if let Some(suggestion) = self.suggestion() {
            format!("{}\n\n{}", base_msg.red().bold(), suggestion)
        } else {
            base_msg.red().bold().to_string()
        }
    }
}

/// Display an error with its suggestion to the user
pub fn display_error_with_suggestion(error: &PacwiseError) {
    eprintln!("{}", error.display_with_suggestion());
}

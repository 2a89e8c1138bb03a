//! Input sanitization for package names
//!
//! Every name handed to pacman or a helper passes through here first, so a
//! typed query can never smuggle extra arguments or shell syntax.

use crate::error::{PacwiseError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum package name length accepted by pacman.
pub const MAX_PACKAGE_NAME_LEN: usize = 255;

/// Arch package names: alphanumeric start, then alphanumeric or `@._+-`.
static SAFE_PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9@._+-]*$").expect("Invalid regex pattern")
});

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&<>\\'"\s]"#).expect("Invalid regex pattern"));

/// Validate a package name or query before it reaches an external command.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PacwiseError::InvalidPackageName(
            "package name cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_PACKAGE_NAME_LEN {
        let preview: String = name.chars().take(50).collect();
        return Err(PacwiseError::InvalidPackageName(format!(
            "too long (max {} chars): {}...",
            MAX_PACKAGE_NAME_LEN, preview
        )));
    }

    if SHELL_DANGEROUS.is_match(name) {
        return Err(PacwiseError::InvalidPackageName(format!(
            "contains unsafe characters: {}",
            name
        )));
    }

    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(PacwiseError::InvalidPackageName(format!(
            "contains invalid characters: {}",
            name
        )));
    }

    Ok(())
}

/// Truncate text to `max` characters for table display.
pub fn truncate_for_display(input: &str, max: usize) -> String {
    if input.chars().count() > max {
        let kept: String = input.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        input.to_string()
    }
}

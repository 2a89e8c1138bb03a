//! Central project identity contract.
//!
//! Runtime identity values used for paths, env vars and user-facing hints.

pub const DISPLAY_NAME: &str = "Pacwise";
pub const BINARY_NAME: &str = "pacwise";
pub const CONFIG_DIR_NAME: &str = "pacwise";
pub const ENV_PREFIX: &str = "PACWISE";
pub const CONFIG_FILE_BASENAME: &str = "config.json";
pub const LOG_FILE_BASENAME: &str = "pacwise.log";
pub const AUR_BASE_URL: &str = "https://aur.archlinux.org";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

/// Render a CLI invocation hint, e.g. `pacwise config show`.
pub fn cli_with(args: &str) -> String {
    format!("{} {}", BINARY_NAME, args)
}

pub fn aur_clone_url(package: &str) -> String {
    format!("{}/{}.git", AUR_BASE_URL, package)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_uses_prefix() {
        assert_eq!(env_key("LOG"), "PACWISE_LOG");
    }

    #[test]
    fn clone_url_points_at_aur() {
        assert_eq!(aur_clone_url("yay"), "https://aur.archlinux.org/yay.git");
    }
}

//! AUR helper bootstrap
//!
//! Builds yay or paru from its AUR git repository with `makepkg`. Runs only
//! when `auto-install-helper` is enabled and an AUR action needs a helper.

use crate::core::types::Tool;
use crate::dispatch::run_step;
use crate::error::{PacwiseError, Result};
use crate::project_identity;
use crate::ui;
use crate::utils::process::{CommandRunner, CommandSpec};

/// Helper to bootstrap when none is installed.
pub fn helper_to_install(preferred: Tool) -> Tool {
    if preferred.is_aur_helper() {
        preferred
    } else {
        Tool::Yay
    }
}

/// Remedial instructions carried by `BackendMissing`.
pub fn manual_remedy(helper: Tool) -> String {
    format!(
        "git clone {} && cd {} && makepkg -si  (or run '{}')",
        project_identity::aur_clone_url(helper.binary()),
        helper,
        project_identity::cli_with("config set auto-install-helper true")
    )
}

pub fn backend_missing(helper: Tool) -> PacwiseError {
    PacwiseError::BackendMissing {
        helper: helper.to_string(),
        remedy: manual_remedy(helper),
    }
}

/// Clone and build `helper` in a temporary directory.
///
/// git is installed through pacman first when missing.
pub fn install_helper(runner: &dyn CommandRunner, helper: Tool) -> Result<()> {
    ui::info(&format!("{} not found, building it from the AUR...", helper));
    tracing::info!(%helper, "bootstrapping AUR helper");

    if !runner.program_exists("git") {
        ui::indent("Installing git dependency...", 1);
        let spec = CommandSpec::new("pacman")
            .sudo(true)
            .args(["-S", "--needed", "--noconfirm", "git"]);
        run_step(runner, "install git", &spec)?;
    }

    let workdir = tempfile::Builder::new()
        .prefix(&format!("{}-", project_identity::BINARY_NAME))
        .tempdir()?;

    let clone = CommandSpec::new("git")
        .arg("clone")
        .arg(project_identity::aur_clone_url(helper.binary()))
        .current_dir(workdir.path());
    run_step(runner, &format!("clone {}", helper), &clone)?;

    let build = CommandSpec::new("makepkg")
        .args(["-si", "--noconfirm"])
        .current_dir(workdir.path().join(helper.binary()));
    run_step(runner, &format!("build {}", helper), &build)?;

    ui::success(&format!("{} installed successfully", helper));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::process::mock::MockRunner;

    #[test]
    fn installs_git_when_missing() {
        let runner = MockRunner::new();
        install_helper(&runner, Tool::Paru).unwrap();
        assert_eq!(
            runner.executed(),
            [
                "sudo pacman -S --needed --noconfirm git",
                "git clone https://aur.archlinux.org/paru.git",
                "makepkg -si --noconfirm",
            ]
        );
    }

    #[test]
    fn failed_clone_stops_before_build() {
        let runner = MockRunner::new()
            .with_program("git")
            .on_run("git clone https://aur.archlinux.org/yay.git", 128);

        let err = install_helper(&runner, Tool::Yay).unwrap_err();
        assert!(matches!(err, PacwiseError::ActionFailed { code: Some(128), .. }));
        assert_eq!(runner.executed(), ["git clone https://aur.archlinux.org/yay.git"]);
    }

    #[test]
    fn pacman_preference_bootstraps_yay() {
        assert_eq!(helper_to_install(Tool::Pacman), Tool::Yay);
        assert_eq!(helper_to_install(Tool::Paru), Tool::Paru);
    }

    #[test]
    fn remedy_names_clone_url() {
        assert!(manual_remedy(Tool::Yay).contains("https://aur.archlinux.org/yay.git"));
    }
}

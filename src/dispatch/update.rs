//! System update plans.

use crate::core::types::Tool;
use crate::dispatch::plan::{Step, tool_command, with_noconfirm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UpdateMode {
    /// Update with the configured tool (-Syu)
    #[default]
    Standard,
    /// Include AUR packages through a helper
    Full,
    /// Refresh package databases first (-Syyu)
    Refresh,
    /// Force refresh, then update AUR packages too
    Force,
}

impl UpdateMode {
    pub fn describe(&self) -> &'static str {
        match self {
            UpdateMode::Standard => "Update official repository packages",
            UpdateMode::Full => "Update all packages including AUR",
            UpdateMode::Refresh => "Refresh package databases and update",
            UpdateMode::Force => "Force refresh databases and update all packages",
        }
    }
}

/// An update plan plus an optional warning for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub steps: Vec<Step>,
    pub warning: Option<String>,
}

/// `tool` is the configured front-end; `helper` the first installed AUR
/// helper, if any.
pub fn update_plan(mode: UpdateMode, tool: Tool, helper: Option<Tool>, noconfirm: bool) -> UpdatePlan {
    let step = |t: Tool, flag: &str| {
        Step::run(format!("{} {}", t, flag), with_noconfirm(tool_command(t).arg(flag), noconfirm))
    };
    let mut warning = None;

    let steps = match mode {
        UpdateMode::Standard => vec![step(tool, "-Syu")],
        UpdateMode::Refresh => vec![step(tool, "-Syyu")],
        UpdateMode::Full => {
            if tool.is_aur_helper() {
                vec![step(tool, "-Syu")]
            } else if let Some(h) = helper {
                vec![step(h, "-Syu")]
            } else {
                warning = Some("No AUR helper available, updating official repositories only".to_string());
                vec![step(Tool::Pacman, "-Syu")]
            }
        }
        UpdateMode::Force => {
            if tool.is_aur_helper() {
                vec![step(tool, "-Syyu")]
            } else {
                let mut steps = vec![step(Tool::Pacman, "-Syyu")];
                if let Some(h) = helper {
                    steps.push(step(h, "-Syu"));
                }
                steps
            }
        }
    };

    UpdatePlan { steps, warning }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::plan::StepKind;

    fn commands(plan: &UpdatePlan) -> Vec<String> {
        plan.steps
            .iter()
            .filter_map(|s| match &s.kind {
                StepKind::Run(spec) => Some(spec.display()),
                StepKind::RemoveOrphans => None,
            })
            .collect()
    }

    #[test]
    fn standard_uses_sudo_only_for_pacman() {
        let plan = update_plan(UpdateMode::Standard, Tool::Pacman, None, false);
        assert_eq!(commands(&plan), ["sudo pacman -Syu"]);

        let plan = update_plan(UpdateMode::Standard, Tool::Yay, Some(Tool::Yay), true);
        assert_eq!(commands(&plan), ["yay -Syu --noconfirm"]);
    }

    #[test]
    fn full_falls_back_to_pacman_with_warning() {
        let plan = update_plan(UpdateMode::Full, Tool::Pacman, None, false);
        assert_eq!(commands(&plan), ["sudo pacman -Syu"]);
        assert!(plan.warning.is_some());

        let plan = update_plan(UpdateMode::Full, Tool::Pacman, Some(Tool::Paru), false);
        assert_eq!(commands(&plan), ["paru -Syu"]);
        assert!(plan.warning.is_none());
    }

    #[test]
    fn refresh_forces_database_sync() {
        let plan = update_plan(UpdateMode::Refresh, Tool::Pacman, Some(Tool::Yay), false);
        assert_eq!(commands(&plan), ["sudo pacman -Syyu"]);
    }

    #[test]
    fn force_adds_helper_pass() {
        let plan = update_plan(UpdateMode::Force, Tool::Pacman, Some(Tool::Yay), false);
        assert_eq!(commands(&plan), ["sudo pacman -Syyu", "yay -Syu"]);

        let plan = update_plan(UpdateMode::Force, Tool::Paru, Some(Tool::Paru), false);
        assert_eq!(commands(&plan), ["paru -Syyu"]);
    }
}

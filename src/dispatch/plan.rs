//! Command plans for package actions.

use crate::core::types::{Action, ActionFlag, ActionRequest, Tool};
use crate::utils::process::CommandSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Run(CommandSpec),
    /// Query orphans, then remove them; skipped when there are none
    RemoveOrphans,
}

/// One ordered step of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub kind: StepKind,
}

impl Step {
    pub fn run(label: impl Into<String>, spec: CommandSpec) -> Self {
        Self {
            label: label.into(),
            kind: StepKind::Run(spec),
        }
    }

    pub fn remove_orphans() -> Self {
        Self {
            label: "remove orphans".to_string(),
            kind: StepKind::RemoveOrphans,
        }
    }
}

/// Base invocation of a tool, with `sudo` for pacman.
pub fn tool_command(tool: Tool) -> CommandSpec {
    CommandSpec::new(tool.binary()).sudo(tool.needs_sudo())
}

pub(crate) fn with_noconfirm(spec: CommandSpec, noconfirm: bool) -> CommandSpec {
    if noconfirm { spec.arg("--noconfirm") } else { spec }
}

/// Steps for `request`, with installs routed through `tool`.
///
/// Removal always goes through pacman, whatever the package origin.
pub fn action_steps(request: &ActionRequest, tool: Tool, noconfirm: bool) -> Vec<Step> {
    let name = request.target.name();
    let mut steps = Vec::new();

    match request.action {
        Action::Install => {
            let spec = tool_command(tool).args(["-S", name]);
            steps.push(Step::run("install", with_noconfirm(spec, noconfirm)));
        }
        Action::Remove | Action::Purge => {
            let flag = if request.action == Action::Purge || request.has(ActionFlag::RemoveDependencies) {
                "-Rns"
            } else {
                "-R"
            };
            let spec = tool_command(Tool::Pacman).args([flag, name]);
            steps.push(Step::run("remove", with_noconfirm(spec, noconfirm)));

            if request.has(ActionFlag::CleanupOrphans) {
                steps.push(Step::remove_orphans());
            }
            if request.has(ActionFlag::CleanCache) {
                steps.push(Step::run("clean cache", clean_cache_command(noconfirm)));
            }
        }
    }
    steps
}

pub fn clean_cache_command(noconfirm: bool) -> CommandSpec {
    with_noconfirm(tool_command(Tool::Pacman).arg("-Sc"), noconfirm)
}

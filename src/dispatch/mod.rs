//! # Action Dispatch
//!
//! Executes a confirmed [`ActionRequest`] against the system package manager.
//!
//! ```text
//! Idle -> EnsureBackend -> Dispatch -> Done
//! ```
//!
//! `EnsureBackend` picks (or bootstraps) the tool before any mutating
//! command runs. `Dispatch` runs the planned steps in order and stops at the
//! first failure.

pub mod bootstrap;
pub mod orphans;
pub mod plan;
pub mod update;

use crate::config::Config;
use crate::core::types::{ActionRequest, Source, Tool};
use crate::error::{PacwiseError, Result};
use crate::packages::installed_helper;
use crate::ui;
use crate::utils::process::{CommandRunner, CommandSpec};
use crate::utils::sanitize::validate_package_name;
use plan::{Step, StepKind};
use std::rc::Rc;
use update::UpdateMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Ran successfully; holds the rendered command
    Ran(String),
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedStep {
    pub label: String,
    pub status: StepStatus,
}

/// Successful result of a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub tool: Tool,
    pub steps: Vec<CompletedStep>,
}

impl ActionOutcome {
    /// Commands that actually ran, in order.
    pub fn commands(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|s| match &s.status {
                StepStatus::Ran(cmd) => Some(cmd.as_str()),
                StepStatus::Skipped(_) => None,
            })
            .collect()
    }
}

enum Phase {
    Idle,
    EnsureBackend,
    Dispatch(Tool),
    Done(ActionOutcome),
}

pub struct Dispatcher {
    runner: Rc<dyn CommandRunner>,
    preferred: Tool,
    auto_install_helper: bool,
    noconfirm: bool,
}

impl Dispatcher {
    pub fn new(config: &Config, runner: Rc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            preferred: config.preferred_helper,
            auto_install_helper: config.auto_install_helper,
            noconfirm: config.noconfirm,
        }
    }

    pub fn execute(&self, request: &ActionRequest) -> Result<ActionOutcome> {
        validate_package_name(request.target.name())?;

        let mut phase = Phase::Idle;
        loop {
            phase = match phase {
                Phase::Idle => {
                    tracing::info!(
                        action = %request.action,
                        package = request.target.name(),
                        source = %request.target.source(),
                        "dispatching"
                    );
                    Phase::EnsureBackend
                }
                Phase::EnsureBackend => Phase::Dispatch(self.ensure_backend(request)?),
                Phase::Dispatch(tool) => {
                    let steps = plan::action_steps(request, tool, self.noconfirm);
                    Phase::Done(self.run_steps(tool, &steps)?)
                }
                Phase::Done(outcome) => return Ok(outcome),
            };
        }
    }

    /// Fail early, without running anything, when `request` cannot be
    /// carried out: pacman is missing, or an AUR target has no helper and
    /// bootstrapping is disabled.
    pub fn preflight(&self, request: &ActionRequest) -> Result<()> {
        self.require_pacman()?;
        let needs_helper = !request.action.targets_installed() && request.target.source() == Source::Aur;
        if needs_helper
            && !self.auto_install_helper
            && installed_helper(self.preferred, self.runner.as_ref()).is_none()
        {
            return Err(bootstrap::backend_missing(bootstrap::helper_to_install(self.preferred)));
        }
        Ok(())
    }

    /// Tool able to carry out `request`, bootstrapping an AUR helper when
    /// allowed. Runs nothing mutating unless a bootstrap is needed.
    pub fn ensure_backend(&self, request: &ActionRequest) -> Result<Tool> {
        if request.action.targets_installed() {
            self.require_pacman()?;
            return Ok(Tool::Pacman);
        }

        match request.target.source() {
            Source::Official => {
                self.require_pacman()?;
                Ok(self.configured_tool())
            }
            Source::Aur => {
                if let Some(helper) = installed_helper(self.preferred, self.runner.as_ref()) {
                    return Ok(helper);
                }
                let helper = bootstrap::helper_to_install(self.preferred);
                if !self.auto_install_helper {
                    return Err(bootstrap::backend_missing(helper));
                }
                bootstrap::install_helper(self.runner.as_ref(), helper)?;
                Ok(helper)
            }
        }
    }

    /// The preferred tool when installed, else pacman.
    pub fn configured_tool(&self) -> Tool {
        if self.preferred.is_aur_helper() && self.runner.program_exists(self.preferred.binary()) {
            self.preferred
        } else {
            Tool::Pacman
        }
    }

    fn require_pacman(&self) -> Result<()> {
        if self.runner.program_exists("pacman") {
            Ok(())
        } else {
            Err(PacwiseError::SystemCommandFailed {
                command: "pacman".to_string(),
                reason: "not found in PATH (is this an Arch-based system?)".to_string(),
            })
        }
    }

    pub fn update(&self, mode: UpdateMode) -> Result<ActionOutcome> {
        self.require_pacman()?;
        let tool = self.configured_tool();
        let helper = installed_helper(self.preferred, self.runner.as_ref());
        let plan = update::update_plan(mode, tool, helper, self.noconfirm);
        if let Some(warning) = &plan.warning {
            ui::warning(warning);
        }
        tracing::info!(?mode, %tool, "system update");
        self.run_steps(tool, &plan.steps)
    }

    pub fn remove_orphans(&self, orphans: &[String]) -> Result<ActionOutcome> {
        let step = Step::run("remove orphans", orphans::removal_command(orphans, self.noconfirm));
        self.run_steps(Tool::Pacman, std::slice::from_ref(&step))
    }

    /// Run `steps` in order, stopping at the first failure.
    pub fn run_steps(&self, tool: Tool, steps: &[Step]) -> Result<ActionOutcome> {
        let mut completed = Vec::with_capacity(steps.len());

        for (i, step) in steps.iter().enumerate() {
            if ui::was_interrupted() {
                return Err(PacwiseError::Interrupted);
            }
            if steps.len() > 1 {
                ui::info(&format!("Step {}/{}: {}", i + 1, steps.len(), step.label));
            }

            let status = match &step.kind {
                StepKind::Run(spec) => StepStatus::Ran(run_step(self.runner.as_ref(), &step.label, spec)?),
                StepKind::RemoveOrphans => self.run_orphan_step(&step.label)?,
            };
            completed.push(CompletedStep {
                label: step.label.clone(),
                status,
            });
        }

        Ok(ActionOutcome {
            tool,
            steps: completed,
        })
    }

    fn run_orphan_step(&self, label: &str) -> Result<StepStatus> {
        let found = orphans::list_orphans(self.runner.as_ref()).map_err(|e| PacwiseError::ActionFailed {
            step: label.to_string(),
            command: orphans::query_command().display(),
            code: None,
            output: e.to_string(),
        })?;

        if found.is_empty() {
            ui::indent("No orphaned packages found", 1);
            return Ok(StepStatus::Skipped("no orphaned packages".to_string()));
        }

        let spec = orphans::removal_command(&found, self.noconfirm);
        Ok(StepStatus::Ran(run_step(self.runner.as_ref(), label, &spec)?))
    }
}

/// Run one interactive command, mapping any failure to `ActionFailed`.
pub(crate) fn run_step(runner: &dyn CommandRunner, label: &str, spec: &CommandSpec) -> Result<String> {
    let command = spec.display();
    tracing::info!(step = label, %command, "running");

    let code = runner.run_interactive(spec).map_err(|e| PacwiseError::ActionFailed {
        step: label.to_string(),
        command: command.clone(),
        code: None,
        output: e.to_string(),
    })?;

    tracing::info!(step = label, %command, ?code, "finished");
    if code != Some(0) {
        return Err(PacwiseError::ActionFailed {
            step: label.to_string(),
            command,
            code,
            output: String::new(),
        });
    }
    Ok(command)
}

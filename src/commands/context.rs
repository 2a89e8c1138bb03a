use crate::config::Config;
use crate::core::resolver::Resolver;
use crate::core::selector::Selector;
use crate::core::types::Action;
use crate::dispatch::Dispatcher;
use crate::packages::CandidateFetcher;
use crate::ui;
use crate::utils::backup::snapshot_installed;
use crate::utils::paths;
use crate::utils::process::{CommandRunner, SystemRunner};
use std::io::{Stdout, StdinLock};
use std::path::PathBuf;
use std::rc::Rc;

/// Per-run state shared by every command.
pub struct Context {
    pub config: Config,
    pub runner: Rc<dyn CommandRunner>,
    /// `--yes`: answer every prompt with its affirmative default
    pub yes: bool,
}

impl Context {
    pub fn new(config: Config, yes: bool) -> Self {
        Self::with_runner(config, yes, Rc::new(SystemRunner::new()))
    }

    pub fn with_runner(config: Config, yes: bool, runner: Rc<dyn CommandRunner>) -> Self {
        Self { config, runner, yes }
    }

    pub fn resolver(&self, action: Action) -> Resolver {
        let fetcher = CandidateFetcher::for_action(action, &self.config, Rc::clone(&self.runner));
        Resolver::new(fetcher, self.config.ranker())
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(&self.config, Rc::clone(&self.runner))
    }

    pub fn selector(&self) -> Selector<StdinLock<'static>, Stdout> {
        Selector::stdio().with_max_retries(self.config.max_retries)
    }

    /// Ask before a mutating step unless `--yes` or `confirm-before-action`
    /// is off.
    pub fn confirm(&self, question: &str) -> bool {
        if self.yes || !self.config.confirm_before_action {
            return true;
        }
        ui::prompt_yes_no(question)
    }

    /// Snapshot the package list when backups are enabled. A failed
    /// snapshot only warns.
    pub fn backup(&self) -> Option<PathBuf> {
        if !self.config.backup_before_operations {
            return None;
        }
        let snapshot = paths::backups_dir().and_then(|dir| snapshot_installed(self.runner.as_ref(), &dir));
        match snapshot {
            Ok(path) => {
                ui::verbose(&format!("Package list saved to {}", path.display()));
                Some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "package list backup failed");
                ui::warning(&format!("Could not back up package list: {}", e));
                None
            }
        }
    }
}

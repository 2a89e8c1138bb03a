//! Candidate Source Adapter
//!
//! Fans a query out to every available [`PackageSource`] and merges the
//! results into one list of unique names.

use crate::config::Config;
use crate::core::types::{Action, Candidate, Source, Tool};
use crate::error::{PacwiseError, Result};
use crate::packages::aur_rpc::AurRpcSource;
use crate::packages::helper::HelperSource;
use crate::packages::installed::InstalledSource;
use crate::packages::pacman::PacmanSource;
use crate::packages::traits::PackageSource;
use crate::ui;
use crate::utils::process::CommandRunner;
use std::collections::HashMap;
use std::rc::Rc;

pub struct CandidateFetcher {
    sources: Vec<Box<dyn PackageSource>>,
}

impl CandidateFetcher {
    pub fn new(sources: Vec<Box<dyn PackageSource>>) -> Self {
        Self { sources }
    }

    /// Sources appropriate for `action`: the local database for remove and
    /// purge, sync repos plus one AUR source for install.
    pub fn for_action(action: Action, config: &Config, runner: Rc<dyn CommandRunner>) -> Self {
        if action.targets_installed() {
            return Self::new(vec![Box::new(InstalledSource::new(runner))]);
        }
        Self::remote(config, runner)
    }

    /// Sync repositories plus the first installed AUR helper, or the AUR
    /// RPC when no helper is installed.
    pub fn remote(config: &Config, runner: Rc<dyn CommandRunner>) -> Self {
        let mut sources: Vec<Box<dyn PackageSource>> =
            vec![Box::new(PacmanSource::new(Rc::clone(&runner)))];

        match installed_helper(config.preferred_helper, runner.as_ref()) {
            Some(tool) => sources.push(Box::new(HelperSource::new(tool, runner))),
            None => sources.push(Box::new(AurRpcSource::new(config.aur_search))),
        }
        Self::new(sources)
    }

    /// Query every available source and merge the results.
    ///
    /// A failing source is reported and skipped; the fetch only fails when
    /// no source could be queried at all.
    pub fn fetch(&self, query: &str) -> Result<Vec<Candidate>> {
        let mut batches = Vec::new();
        let mut failures = Vec::new();

        for source in &self.sources {
            if !source.is_available() {
                tracing::debug!(source = source.name(), "source unavailable, skipping");
                continue;
            }
            match source.search(query) {
                Ok(found) => {
                    tracing::debug!(source = source.name(), count = found.len(), "source answered");
                    batches.push(found);
                }
                Err(e) => {
                    tracing::warn!(source = source.name(), error = %e, "source failed");
                    ui::warning(&format!("{}: {}", source.name(), e));
                    failures.push(format!("{}: {}", source.name(), e));
                }
            }
        }

        if batches.is_empty() {
            let reason = if failures.is_empty() {
                "no package manager backend could be invoked".to_string()
            } else {
                failures.join("; ")
            };
            return Err(PacwiseError::SourceUnavailable(reason));
        }

        Ok(merge_candidates(batches))
    }
}

/// First installed AUR helper, trying the preferred one first.
pub fn installed_helper(preferred: Tool, runner: &dyn CommandRunner) -> Option<Tool> {
    let mut order = Vec::with_capacity(3);
    if preferred.is_aur_helper() {
        order.push(preferred);
    }
    order.extend(Tool::AUR_HELPERS.iter().copied().filter(|t| *t != preferred));
    order.into_iter().find(|tool| runner.program_exists(tool.binary()))
}

/// Deduplicate by name, keeping first-seen order. An official entry
/// replaces an AUR entry of the same name.
pub fn merge_candidates(batches: Vec<Vec<Candidate>>) -> Vec<Candidate> {
    let mut merged: Vec<Candidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for candidate in batches.into_iter().flatten() {
        match index.get(candidate.name()) {
            Some(&i) => {
                if merged[i].source() == Source::Aur && candidate.source() == Source::Official {
                    merged[i] = candidate;
                }
            }
            None => {
                index.insert(candidate.name().to_string(), merged.len());
                merged.push(candidate);
            }
        }
    }
    merged
}

use crate::core::types::{Candidate, Source};
use crate::error::Result;
use crate::packages::pacman::query_stdout;
use crate::packages::search_parsing::{parse_installed_list, parse_name_list};
use crate::packages::traits::PackageSource;
use crate::utils::process::{CommandRunner, CommandSpec};
use std::collections::HashSet;
use std::rc::Rc;

/// Locally installed packages, used to resolve remove and purge targets.
///
/// Returns the whole local database; the ranker does the filtering.
/// Foreign packages (`pacman -Qm`) are tagged as AUR.
pub struct InstalledSource {
    runner: Rc<dyn CommandRunner>,
}

impl InstalledSource {
    pub fn new(runner: Rc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl PackageSource for InstalledSource {
    fn name(&self) -> &str {
        "local"
    }

    fn is_available(&self) -> bool {
        self.runner.program_exists("pacman")
    }

    fn search(&self, _query: &str) -> Result<Vec<Candidate>> {
        let list_spec = CommandSpec::new("pacman").arg("-Q");
        let installed = query_stdout(&list_spec, self.runner.capture(&list_spec)?)?;

        let foreign_spec = CommandSpec::new("pacman").arg("-Qmq");
        let foreign: HashSet<String> =
            parse_name_list(&query_stdout(&foreign_spec, self.runner.capture(&foreign_spec)?)?)
                .into_iter()
                .collect();

        Ok(parse_installed_list(&installed, Source::Official)
            .into_iter()
            .map(|candidate| {
                if foreign.contains(candidate.name()) {
                    Candidate::with_metadata(candidate.name(), Source::Aur, candidate.metadata().clone())
                } else {
                    candidate
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::process::mock::MockRunner;

    #[test]
    fn foreign_packages_are_tagged_aur() {
        let runner = MockRunner::new()
            .with_program("pacman")
            .on_capture("pacman -Q", 0, "vlc 3.0-1\nyay 12.3-1\n")
            .on_capture("pacman -Qmq", 0, "yay\n");
        let source = InstalledSource::new(Rc::new(runner));

        let found = source.search("anything").unwrap();
        assert_eq!(found[0].source(), Source::Official);
        assert_eq!(found[1].source(), Source::Aur);
        assert!(found[1].is_installed());
    }
}

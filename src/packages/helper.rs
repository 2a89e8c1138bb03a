use crate::core::types::{Candidate, Source, Tool};
use crate::error::Result;
use crate::packages::pacman::query_stdout;
use crate::packages::search_parsing::parse_search_output;
use crate::packages::traits::PackageSource;
use crate::utils::process::{CommandRunner, CommandSpec};
use std::rc::Rc;

/// AUR search through an installed helper (`yay -Ss --aur`, `paru -Ss --aur`).
pub struct HelperSource {
    tool: Tool,
    runner: Rc<dyn CommandRunner>,
}

impl HelperSource {
    pub fn new(tool: Tool, runner: Rc<dyn CommandRunner>) -> Self {
        Self { tool, runner }
    }
}

impl PackageSource for HelperSource {
    fn name(&self) -> &str {
        self.tool.binary()
    }

    fn is_available(&self) -> bool {
        self.tool.is_aur_helper() && self.runner.program_exists(self.tool.binary())
    }

    fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        // Helpers pass the term to the AUR RPC, which matches it literally.
        let spec = CommandSpec::new(self.tool.binary()).args(["-Ss", "--aur", query.trim()]);
        let output = self.runner.capture(&spec)?;
        let candidates = parse_search_output(&query_stdout(&spec, output)?);

        // --aur should already restrict results; drop anything else.
        Ok(candidates
            .into_iter()
            .filter(|c| c.source() == Source::Aur)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::process::mock::MockRunner;

    #[test]
    fn keeps_only_aur_results() {
        let runner = MockRunner::new().with_program("yay").on_capture(
            "yay -Ss --aur chrome",
            0,
            "aur/google-chrome 130-1 (+2104 12.5)\n    Google browser\nextra/chromium 130-1\n    Chromium\n",
        );
        let source = HelperSource::new(Tool::Yay, Rc::new(runner));

        assert!(source.is_available());
        let found = source.search("chrome").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "google-chrome");
    }

    #[test]
    fn query_is_passed_without_regex_escaping() {
        let runner = MockRunner::new().with_program("yay").on_capture(
            "yay -Ss --aur libsigc++",
            0,
            "aur/libsigc++-git 3.6.0-1 (+3 0.00)\n    Callback framework for C++\n",
        );
        let source = HelperSource::new(Tool::Yay, Rc::new(runner));

        let found = source.search(" libsigc++ ").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "libsigc++-git");
    }

    #[test]
    fn pacman_is_never_a_helper_source() {
        let runner = MockRunner::new().with_program("pacman");
        assert!(!HelperSource::new(Tool::Pacman, Rc::new(runner)).is_available());
    }
}

use crate::core::types::Candidate;
use crate::error::{PacwiseError, Result};
use crate::packages::search_parsing::{parse_search_output, parse_sync_list};
use crate::packages::traits::PackageSource;
use crate::utils::process::{CapturedOutput, CommandRunner, CommandSpec};
use std::rc::Rc;

/// Official repositories through `pacman -Ss`.
pub struct PacmanSource {
    runner: Rc<dyn CommandRunner>,
    universe_fallback: bool,
}

impl PacmanSource {
    pub fn new(runner: Rc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            universe_fallback: true,
        }
    }

    /// When the regex search finds nothing, rank against every sync
    /// package instead so misspellings still resolve.
    pub fn with_universe_fallback(mut self, enabled: bool) -> Self {
        self.universe_fallback = enabled;
        self
    }

    fn sync_universe(&self) -> Result<Vec<Candidate>> {
        let spec = CommandSpec::new("pacman").arg("-Sl");
        let output = self.runner.capture(&spec)?;
        let stdout = query_stdout(&spec, output)?;
        Ok(parse_sync_list(&stdout))
    }
}

impl PackageSource for PacmanSource {
    fn name(&self) -> &str {
        "pacman"
    }

    fn is_available(&self) -> bool {
        self.runner.program_exists("pacman")
    }

    fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        let spec = CommandSpec::new("pacman").args(["-Ss", &escape_ere(query)]);
        let output = self.runner.capture(&spec)?;
        let candidates = parse_search_output(&query_stdout(&spec, output)?);

        if candidates.is_empty() && self.universe_fallback {
            tracing::debug!(query, "no direct matches, ranking against the sync universe");
            return self.sync_universe();
        }
        Ok(candidates)
    }
}

/// Accept a query result; pacman and helpers exit 1 with no output when
/// nothing matched. Any other failure carries stderr verbatim.
pub(crate) fn query_stdout(spec: &CommandSpec, output: CapturedOutput) -> Result<String> {
    if output.success() {
        return Ok(output.stdout);
    }
    if output.code == Some(1) && output.stdout.trim().is_empty() && output.stderr.trim().is_empty() {
        return Ok(String::new());
    }
    Err(PacwiseError::SystemCommandFailed {
        command: spec.display(),
        reason: if output.stderr.trim().is_empty() {
            format!("exit code {:?}", output.code)
        } else {
            output.stderr.trim_end().to_string()
        },
    })
}

/// Escape POSIX extended regex metacharacters; pacman `-Ss` treats its
/// argument as a regex.
pub fn escape_ere(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(
            c,
            '.' | '[' | ']' | '{' | '}' | '(' | ')' | '\\' | '*' | '+' | '?' | '|' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

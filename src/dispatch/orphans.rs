//! Orphaned dependency discovery and removal.

use crate::core::types::Tool;
use crate::dispatch::plan::{tool_command, with_noconfirm};
use crate::error::Result;
use crate::packages::pacman::query_stdout;
use crate::packages::search_parsing::parse_name_list;
use crate::utils::process::{CommandRunner, CommandSpec};

/// Orphans shown before asking; the rest are only counted.
pub const PREVIEW_LIMIT: usize = 10;

pub fn query_command() -> CommandSpec {
    CommandSpec::new("pacman").arg("-Qtdq")
}

/// Packages installed as dependencies that nothing requires any more.
pub fn list_orphans(runner: &dyn CommandRunner) -> Result<Vec<String>> {
    let spec = query_command();
    let stdout = query_stdout(&spec, runner.capture(&spec)?)?;
    Ok(parse_name_list(&stdout))
}

pub fn removal_command(orphans: &[String], noconfirm: bool) -> CommandSpec {
    with_noconfirm(
        tool_command(Tool::Pacman).arg("-Rns").args(orphans.iter().cloned()),
        noconfirm,
    )
}

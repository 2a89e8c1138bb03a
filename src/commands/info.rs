//! System overview: package count, tool availability, recent log.

use crate::commands::Context;
use crate::core::types::Tool;
use crate::error::Result;
use crate::logging;
use crate::packages::pacman::query_stdout;
use crate::packages::search_parsing::parse_name_list;
use crate::ui;
use crate::utils::paths;
use crate::utils::process::CommandSpec;
use colored::Colorize;

const LOG_LINES: usize = 5;

/// Auxiliary programs used by the helper bootstrap.
const BUILD_TOOLS: [&str; 2] = ["git", "makepkg"];

pub fn run(ctx: &Context) -> Result<()> {
    ui::header("System Information");

    let spec = CommandSpec::new("pacman").arg("-Qq");
    match ctx.runner.capture(&spec).and_then(|out| query_stdout(&spec, out)) {
        Ok(stdout) => ui::keyval("Installed packages", &parse_name_list(&stdout).len().to_string()),
        Err(e) => ui::keyval("Installed packages", &format!("unknown ({})", e)),
    }
    ui::keyval("Preferred tool", &ctx.config.preferred_helper.to_string());

    ui::header("Package managers");
    for tool in Tool::ALL {
        print_availability(tool.binary(), ctx.runner.program_exists(tool.binary()));
    }
    for program in BUILD_TOOLS {
        print_availability(program, ctx.runner.program_exists(program));
    }

    ui::header("Files");
    ui::keyval("Config", &paths::config_file()?.display().to_string());
    let log_path = paths::log_file()?;
    ui::keyval("Log", &log_path.display().to_string());
    ui::keyval("Backups", &paths::backups_dir()?.display().to_string());

    let recent = logging::tail(&log_path, LOG_LINES)?;
    if !recent.is_empty() {
        ui::header("Recent activity");
        for line in recent {
            ui::indent(&line, 1);
        }
    }
    Ok(())
}

fn print_availability(program: &str, available: bool) {
    let mark = if available {
        "✓ installed".green().to_string()
    } else {
        "✗ not found".red().to_string()
    };
    ui::indent(&format!("{:<10} {}", program, mark), 1);
}

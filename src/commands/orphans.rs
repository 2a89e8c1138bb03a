//! Orphaned package cleanup.

use crate::commands::Context;
use crate::dispatch::orphans::{PREVIEW_LIMIT, list_orphans};
use crate::error::Result;
use crate::ui;

pub fn run(ctx: &Context) -> Result<()> {
    ui::info("Checking for orphaned packages...");
    let orphans = list_orphans(ctx.runner.as_ref())?;

    if orphans.is_empty() {
        ui::success("No orphaned packages found");
        return Ok(());
    }

    ui::warning(&format!("Found {} orphaned packages:", orphans.len()));
    for line in preview(&orphans) {
        ui::indent(&line, 1);
    }

    if !ctx.confirm("Remove these orphaned packages?") {
        ui::info("Orphaned package removal cancelled.");
        return Ok(());
    }

    remove(ctx, &orphans)
}

/// Remove `orphans`, reporting the backup path on failure.
pub fn remove(ctx: &Context, orphans: &[String]) -> Result<()> {
    let backup = ctx.backup();
    match ctx.dispatcher().remove_orphans(orphans) {
        Ok(_) => {
            tracing::info!(count = orphans.len(), "orphans removed");
            ui::success(&format!("Removed {} orphaned packages", orphans.len()));
            Ok(())
        }
        Err(e) => {
            if let Some(path) = backup {
                ui::warning(&format!("Package list backup available at: {}", path.display()));
            }
            Err(e)
        }
    }
}

fn preview(orphans: &[String]) -> Vec<String> {
    let mut lines: Vec<String> = orphans
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|pkg| format!("• {}", pkg))
        .collect();
    if orphans.len() > PREVIEW_LIMIT {
        lines.push(format!("... and {} more", orphans.len() - PREVIEW_LIMIT));
    }
    lines
}

//! System update followed by an orphan check.

use crate::commands::{Context, orphans};
use crate::dispatch::orphans::list_orphans;
use crate::dispatch::update::UpdateMode;
use crate::error::Result;
use crate::ui;

pub fn run(ctx: &Context, mode: UpdateMode) -> Result<()> {
    ui::info(&format!("Updating system ({})...", mode.describe()));

    let backup = ctx.backup();
    if let Err(e) = ctx.dispatcher().update(mode) {
        ui::error("System update failed!");
        if let Some(path) = backup {
            ui::warning(&format!("Package list backup available at: {}", path.display()));
        }
        return Err(e);
    }
    ui::success("System update completed successfully!");

    let found = match list_orphans(ctx.runner.as_ref()) {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!(error = %e, "orphan check after update failed");
            return Ok(());
        }
    };
    if found.is_empty() || ctx.yes {
        return Ok(());
    }

    ui::warning(&format!("Found {} orphaned packages", found.len()));
    if ui::prompt_yes_no_default("Remove orphaned packages?", false) {
        orphans::remove(ctx, &found)?;
    }
    Ok(())
}

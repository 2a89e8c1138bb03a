//! Install, remove and purge: resolve the typed name, confirm, dispatch.

use crate::commands::Context;
use crate::core::resolver::Resolution;
use crate::core::types::{Action, ActionFlag, ActionRequest, SelectionOutcome};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::ui;
use colored::Colorize;

pub fn run(ctx: &Context, action: Action, query: &str, flags: &[ActionFlag]) -> Result<()> {
    let resolver = ctx.resolver(action);
    ui::info(&format!("Searching for '{}'...", query));

    let resolution = {
        let mut selector = ctx.selector();
        resolver.resolve(query, action, flags.iter().copied(), &mut selector)?
    };

    let request = match resolution {
        Resolution::Request(request) => request,
        Resolution::Outcome(SelectionOutcome::NoMatch) => {
            let scope = if action.targets_installed() {
                "among installed packages"
            } else {
                "in the repositories or the AUR"
            };
            ui::warning(&format!("No package matching '{}' found {}", query, scope));
            return Ok(());
        }
        Resolution::Outcome(_) => {
            ui::info("Cancelled.");
            return Ok(());
        }
    };

    let dispatcher = ctx.dispatcher();
    if !ready(ctx, &dispatcher, &request)? {
        ui::info("Cancelled.");
        return Ok(());
    }

    let backup = ctx.backup();
    match dispatcher.execute(&request) {
        Ok(outcome) => {
            tracing::info!(
                action = %request.action,
                package = request.target.name(),
                tool = %outcome.tool,
                "action completed"
            );
            ui::success(&format!("{} {} completed", request.target.name(), noun(action)));
            Ok(())
        }
        Err(e) => {
            tracing::error!(action = %request.action, package = request.target.name(), error = %e, "action failed");
            if let Some(path) = backup {
                ui::warning(&format!("Package list backup available at: {}", path.display()));
            }
            Err(e)
        }
    }
}

/// Reject requests the dispatcher cannot carry out, then ask the user.
/// Nothing is prompted or backed up for a request that would fail anyway.
fn ready(ctx: &Context, dispatcher: &Dispatcher, request: &ActionRequest) -> Result<bool> {
    dispatcher.preflight(request)?;
    Ok(should_proceed(ctx, request))
}

fn should_proceed(ctx: &Context, request: &ActionRequest) -> bool {
    let name = request.target.name();

    if request.action == Action::Install && request.target.is_installed() && !ctx.yes {
        let reinstall = ui::prompt_yes_no_default(&format!("'{}' is already installed. Reinstall?", name), false);
        if !reinstall {
            return false;
        }
    }

    if request.action == Action::Purge && !ctx.yes && ctx.config.confirm_before_action {
        ui::warning(&format!(
            "{} removes '{}' with its unneeded dependencies, then orphans and cached packages",
            "Purge".red().bold(),
            name
        ));
    }

    ctx.confirm(&format!(
        "{} '{}' ({})?",
        capitalize(request.action.verb()),
        name,
        request.target.repo()
    ))
}

fn noun(action: Action) -> &'static str {
    match action {
        Action::Install => "installation",
        Action::Remove => "removal",
        Action::Purge => "purge",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Interactive menu, shown when no subcommand is given.

use crate::commands::{Context, action, info, orphans, search, update};
use crate::core::types::{Action, ActionFlag};
use crate::dispatch::update::UpdateMode;
use crate::error::Result;
use crate::error_suggestions::display_error_with_suggestion;
use crate::project_identity;
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Install,
    Remove,
    Purge,
    Search,
    Update,
    Orphans,
    Info,
    Quit,
}

const ITEMS: [(MenuItem, &str); 7] = [
    (MenuItem::Install, "Install package"),
    (MenuItem::Remove, "Remove package"),
    (MenuItem::Purge, "Purge package (with dependencies and cache)"),
    (MenuItem::Search, "Search packages"),
    (MenuItem::Update, "Update system"),
    (MenuItem::Orphans, "Remove orphaned packages"),
    (MenuItem::Info, "System information"),
];

fn parse_item(input: &str) -> Option<MenuItem> {
    match input.trim().to_lowercase().as_str() {
        "0" | "q" | "quit" | "exit" => Some(MenuItem::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ITEMS.get(i))
            .map(|(item, _)| *item),
    }
}

fn parse_update_mode(input: &str) -> Option<UpdateMode> {
    match input.trim() {
        "" | "1" => Some(UpdateMode::Standard),
        "2" => Some(UpdateMode::Full),
        "3" => Some(UpdateMode::Refresh),
        "4" => Some(UpdateMode::Force),
        _ => None,
    }
}

/// Loop until the user quits or input ends. Errors are reported and the
/// loop continues.
pub fn run(ctx: &Context) -> Result<()> {
    loop {
        ui::header(&format!("{} - {}", project_identity::DISPLAY_NAME, ctx.config.preferred_helper));
        for (i, (_, label)) in ITEMS.iter().enumerate() {
            ui::indent(&format!("{}. {}", i + 1, label), 1);
        }
        ui::indent("0. Quit", 1);

        let Some(input) = ui::prompt_line("Choose an option:") else {
            return Ok(());
        };
        let Some(item) = parse_item(&input) else {
            ui::warning(&format!("Invalid option '{}'", input));
            continue;
        };
        if item == MenuItem::Quit {
            return Ok(());
        }

        if let Err(e) = run_item(ctx, item) {
            tracing::error!(error = %e, ?item, "menu action failed");
            display_error_with_suggestion(&e);
        }
        if ui::was_interrupted() {
            return Ok(());
        }
    }
}

fn run_item(ctx: &Context, item: MenuItem) -> Result<()> {
    match item {
        MenuItem::Install => with_name(|name| action::run(ctx, Action::Install, name, &[])),
        MenuItem::Remove => with_name(|name| {
            let flags = if ui::prompt_yes_no_default("Also remove unneeded dependencies?", true) {
                vec![ActionFlag::RemoveDependencies]
            } else {
                Vec::new()
            };
            action::run(ctx, Action::Remove, name, &flags)
        }),
        MenuItem::Purge => with_name(|name| action::run(ctx, Action::Purge, name, &[])),
        MenuItem::Search => with_name(|name| search::run(ctx, name, None)),
        MenuItem::Update => {
            for (i, mode) in [
                UpdateMode::Standard,
                UpdateMode::Full,
                UpdateMode::Refresh,
                UpdateMode::Force,
            ]
            .iter()
            .enumerate()
            {
                ui::indent(&format!("{}. {}", i + 1, mode.describe()), 1);
            }
            let Some(input) = ui::prompt_line("Update mode [1]:") else {
                return Ok(());
            };
            match parse_update_mode(&input) {
                Some(mode) => update::run(ctx, mode),
                None => {
                    ui::warning(&format!("Invalid update mode '{}'", input));
                    Ok(())
                }
            }
        }
        MenuItem::Orphans => orphans::run(ctx),
        MenuItem::Info => info::run(ctx),
        MenuItem::Quit => Ok(()),
    }
}

fn with_name(f: impl FnOnce(&str) -> Result<()>) -> Result<()> {
    match ui::prompt_line("Package name:") {
        Some(name) if !name.is_empty() => f(&name),
        _ => Ok(()),
    }
}

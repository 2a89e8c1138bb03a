//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command, GlobalFlags};
use crate::commands::{self, Context};
use crate::config::{ColorMode, Config};
use crate::core::types::{Action, ActionFlag};
use crate::error::Result;
use crate::ui;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    if let Some(Command::Config { command }) = &args.command {
        ui::init_colors(if args.global.no_color {
            ColorMode::Never
        } else {
            ColorMode::Auto
        });
        return commands::config::run(command);
    }

    let config = apply_global_flags(Config::load()?, &args.global);
    ui::init_colors(config.color);
    tracing::debug!(?config, "effective configuration");

    let ctx = Context::new(config, args.global.yes);

    match &args.command {
        None => commands::menu::run(&ctx),

        Some(Command::Install { package }) => commands::action::run(&ctx, Action::Install, package, &[]),

        Some(Command::Remove {
            package,
            deps,
            orphans,
            clean_cache,
        }) => {
            let flags = remove_flags(*deps, *orphans, *clean_cache);
            commands::action::run(&ctx, Action::Remove, package, &flags)
        }

        Some(Command::Purge { package }) => commands::action::run(&ctx, Action::Purge, package, &[]),

        Some(Command::Search { query, limit }) => commands::search::run(&ctx, query, *limit),

        Some(Command::Update { mode }) => commands::update::run(&ctx, *mode),

        Some(Command::Orphans) => commands::orphans::run(&ctx),

        Some(Command::Info) => commands::info::run(&ctx),

        Some(Command::Config { .. }) => Ok(()),
    }
}

/// Per-run overrides from the command line.
pub fn apply_global_flags(mut config: Config, global: &GlobalFlags) -> Config {
    if let Some(tool) = global.helper {
        config.preferred_helper = tool;
    }
    if global.yes {
        config.noconfirm = true;
        config.confirm_before_action = false;
    }
    if global.no_color {
        config.color = ColorMode::Never;
    }
    config
}

fn remove_flags(deps: bool, orphans: bool, clean_cache: bool) -> Vec<ActionFlag> {
    [
        (deps, ActionFlag::RemoveDependencies),
        (orphans, ActionFlag::CleanupOrphans),
        (clean_cache, ActionFlag::CleanCache),
    ]
    .into_iter()
    .filter_map(|(on, flag)| on.then_some(flag))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Tool;

    fn flags(yes: bool, no_color: bool, helper: Option<Tool>) -> GlobalFlags {
        GlobalFlags {
            verbose: false,
            quiet: false,
            yes,
            no_color,
            helper,
        }
    }

    #[test]
    fn yes_skips_prompts_and_package_manager_confirmation() {
        let config = apply_global_flags(Config::default(), &flags(true, false, None));
        assert!(config.noconfirm);
        assert!(!config.confirm_before_action);
    }

    #[test]
    fn helper_and_color_overrides() {
        let config = apply_global_flags(Config::default(), &flags(false, true, Some(Tool::Yay)));
        assert_eq!(config.preferred_helper, Tool::Yay);
        assert_eq!(config.color, ColorMode::Never);
        assert!(config.confirm_before_action);
    }

    #[test]
    fn remove_flags_map_to_action_flags() {
        assert_eq!(
            remove_flags(true, false, true),
            [ActionFlag::RemoveDependencies, ActionFlag::CleanCache]
        );
        assert!(remove_flags(false, false, false).is_empty());
    }
}

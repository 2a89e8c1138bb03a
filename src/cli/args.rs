use crate::core::types::Tool;
use crate::dispatch::update::UpdateMode;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pacwise",
    about = "Fuzzy package resolution for pacman, yay and paru",
    long_about = "Install, remove and purge Arch packages by partial or misspelled name.\n\
                  Matches from the official repositories and the AUR are ranked and\n\
                  offered for selection. Run without a subcommand for an interactive menu.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output (mirror the operation log to stderr)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts and pass --noconfirm to the package manager
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Package manager to prefer for this run (pacman, yay, paru)
    #[arg(long, value_name = "TOOL", global = true)]
    pub helper: Option<Tool>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install a package, choosing among close matches
    Install {
        /// Package name, partial or misspelled
        package: String,
    },

    /// Remove an installed package
    Remove {
        /// Package name, partial or misspelled
        package: String,

        /// Also remove dependencies no longer needed (-Rns)
        #[arg(short = 'd', long)]
        deps: bool,

        /// Remove orphaned packages afterwards
        #[arg(long)]
        orphans: bool,

        /// Clean the package cache afterwards
        #[arg(long)]
        clean_cache: bool,
    },

    /// Remove a package with its dependencies, then orphans and cache
    Purge {
        /// Package name, partial or misspelled
        package: String,
    },

    /// List ranked matches without installing anything
    Search {
        query: String,

        /// Maximum number of results (1-10)
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Update the system
    Update {
        #[arg(value_enum, default_value_t = UpdateMode::Standard)]
        mode: UpdateMode,
    },

    /// Remove orphaned packages
    Orphans,

    /// Show installed package count, available tools and recent log
    Info,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Show all settings
    Show,
    /// Print one setting
    Get { key: String },
    /// Change a setting
    Set { key: String, value: String },
    /// Restore a setting's default
    Reset { key: String },
    /// Print the config file location
    Path,
}

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod error_suggestions;
pub mod logging;
pub mod packages;
pub mod project_identity;
pub mod ui;
pub mod utils;

use clap::Parser;
use error::PacwiseError;
use std::process::exit;

/// Exit status after Ctrl-C.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Run pacwise CLI entrypoint.
pub fn run_cli() {
    // 1. Parse args and set output switches
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    // 2. Operation log
    let log_path = logging::init(args.global.verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), ?log_path, "starting");

    // 3. Signal handling: never interrupt a running package transaction
    ctrlc::set_handler(move || {
        ui::mark_interrupted();
        if utils::process::transaction_active() {
            eprintln!();
            ui::warning("Waiting for the package manager to finish...");
        } else {
            eprintln!();
            ui::warning("Operation cancelled by user.");
            exit(EXIT_INTERRUPTED);
        }
    })
    .expect("Error setting Ctrl-C handler");

    // 4. Run
    if let Err(e) = cli::dispatcher::dispatch(&args) {
        tracing::error!(error = %e, "command failed");
        error_suggestions::display_error_with_suggestion(&e);
        exit(exit_code(&e));
    }
    if ui::was_interrupted() {
        exit(EXIT_INTERRUPTED);
    }
}

fn exit_code(error: &PacwiseError) -> i32 {
    match error {
        PacwiseError::Interrupted => EXIT_INTERRUPTED,
        _ => 1,
    }
}

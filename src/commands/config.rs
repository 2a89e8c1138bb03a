//! Config Command
//!
//! Show and change settings in the JSON config file.

use crate::cli::args::ConfigCommand;
use crate::config::settings::Settings;
use crate::error::Result;
use crate::ui as output;

/// Run the config command
pub fn run(command: &ConfigCommand) -> Result<()> {
    let mut settings = Settings::load()?;

    match command {
        ConfigCommand::Show => show_all_settings(&settings)?,
        ConfigCommand::Get { key } => println!("{}", settings.get(key)?),
        ConfigCommand::Set { key, value } => {
            settings.set(key, value)?;
            tracing::info!(%key, %value, "setting changed");
            output::success(&format!("Set {} = {}", key, settings.get(key)?));
        }
        ConfigCommand::Reset { key } => {
            settings.reset(key)?;
            output::success(&format!("Reset {} to default ({})", key, settings.get(key)?));
        }
        ConfigCommand::Path => println!("{}", settings.path().display()),
    }

    Ok(())
}

fn show_all_settings(settings: &Settings) -> Result<()> {
    output::header("Current Settings");
    for (key, value) in settings.all()? {
        println!("  {}: {}", key, value);
    }

    println!();
    output::info(&format!("Config file: {}", settings.path().display()));
    if !settings.path().exists() {
        output::indent("(not created yet, showing defaults)", 1);
    }
    Ok(())
}

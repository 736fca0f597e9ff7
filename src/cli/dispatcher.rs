//! Command dispatcher
//!
//! Loads the plugin into an in-memory host and runs one command through it,
//! the same way an embedding host would.

use crate::args::CommandArgs;
use crate::cli::args::Cli;
use crate::config::Settings;
use crate::error::{OpkgError, Result};
use crate::project_identity::{COMMAND_NAME, VERSION_COMMAND_NAME};
use crate::registry::{self, CommandTable};
use crate::ui;
use crate::winget::Winget;

/// Dispatch the parsed CLI invocation
pub fn dispatch(args: &Cli) -> Result<()> {
    let settings = resolve_settings(args);
    ui::init_colors(settings.color);

    let winget = Winget::from_settings(&settings);
    ui::verbose(&format!(
        "winget program: {} (available: {})",
        winget.program(),
        winget.is_available()
    ));

    let mut table = CommandTable::new();
    registry::register(Some(&mut table), winget);

    if args.list_commands {
        ui::info(&format!("{} registered commands", table.len()));
        for name in table.names() {
            ui::keyval(name, table.help(name).unwrap_or_default());
        }
        return Ok(());
    }

    let (name, payload) = if args.plugin_version {
        (VERSION_COMMAND_NAME, CommandArgs::Absent)
    } else {
        (COMMAND_NAME, CommandArgs::from(args.args.clone()))
    };

    let reply = table
        .invoke(name, payload)
        .ok_or_else(|| OpkgError::UnknownCommand(name.to_string()))?;
    println!("{}", reply);

    Ok(())
}

/// Environment settings with CLI flags on top. Bad env values fall back to defaults.
fn resolve_settings(args: &Cli) -> Settings {
    let mut settings = Settings::from_env().unwrap_or_else(|e| {
        ui::warning(&format!("{}; using defaults", e));
        Settings::default()
    });

    if let Some(color) = args.global.color {
        settings.color = color;
    }

    settings
}

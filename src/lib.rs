pub mod args;
pub mod cli;
pub mod config;
pub mod error;
pub mod project_identity;
pub mod registry;
pub mod router;
pub mod ui;
pub mod winget;

pub use args::CommandArgs;
pub use error::{OpkgError, Result};
pub use registry::{CommandTable, Host, RegisterCommand, register};
pub use winget::Winget;

use clap::Parser;
use std::process::exit;

/// Run the opkg CLI entrypoint.
pub fn run_cli() {
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}

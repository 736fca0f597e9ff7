//! # Host registration
//!
//! A host hands the plugin an optional [`Host`]. Hosts that can take commands
//! expose a [`RegisterCommand`] capability through
//! [`Host::command_registrar`]; hosts that cannot simply keep the default
//! `None` and [`register`] leaves them alone.
//!
//! [`CommandTable`] is a minimal host used by the `opkg` binary and tests.

use crate::args::CommandArgs;
use crate::project_identity::{
    COMMAND_HELP, COMMAND_NAME, VERSION_COMMAND_HELP, VERSION_COMMAND_NAME, version_string,
};
use crate::router;
use crate::winget::Winget;
use std::collections::BTreeMap;

/// Handler invoked with the raw payload of one command call
pub type CommandHandler = Box<dyn Fn(CommandArgs) -> String + Send + Sync>;

/// Capability: accept named commands.
pub trait RegisterCommand {
    fn register_command(&mut self, name: &str, handler: CommandHandler, help_text: Option<&str>);
}

/// Anything the plugin can be loaded into.
pub trait Host {
    /// The host's command-registration capability, if it has one.
    fn command_registrar(&mut self) -> Option<&mut dyn RegisterCommand> {
        None
    }
}

/// Register `opkg` and `opkg.version` with `host`.
///
/// No host, or a host without the capability, is not an error.
/// Calling again replaces the previous entries.
pub fn register(host: Option<&mut dyn Host>, winget: Winget) {
    let Some(registrar) = host.and_then(|h| h.command_registrar()) else {
        return;
    };

    registrar.register_command(
        COMMAND_NAME,
        Box::new(move |args| router::dispatch(&winget, args)),
        Some(COMMAND_HELP),
    );
    registrar.register_command(
        VERSION_COMMAND_NAME,
        Box::new(|_args| version_string()),
        Some(VERSION_COMMAND_HELP),
    );
}

struct Entry {
    handler: CommandHandler,
    help: Option<String>,
}

/// In-memory command host
#[derive(Default)]
pub struct CommandTable {
    entries: BTreeMap<String, Entry>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run command `name`; `None` if nothing is registered under it.
    pub fn invoke(&self, name: &str, args: impl Into<CommandArgs>) -> Option<String> {
        self.entries
            .get(name)
            .map(|entry| (entry.handler)(args.into()))
    }

    pub fn help(&self, name: &str) -> Option<&str> {
        self.entries.get(name)?.help.as_deref()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RegisterCommand for CommandTable {
    fn register_command(&mut self, name: &str, handler: CommandHandler, help_text: Option<&str>) {
        self.entries.insert(
            name.to_string(),
            Entry {
                handler,
                help: help_text.map(str::to_string),
            },
        );
    }
}

impl Host for CommandTable {
    fn command_registrar(&mut self) -> Option<&mut dyn RegisterCommand> {
        Some(self)
    }
}

//! Subcommand routing.
//!
//! [`dispatch`] is the only place errors become text: every branch below
//! returns `Result<String>` and the error's `Display` is the reply.

use crate::args::CommandArgs;
use crate::error::{OpkgError, Result};
use crate::project_identity::{self, cli_with};
use crate::ui;
use crate::winget::Winget;
use std::io::{self, Write};
use std::str::FromStr;

pub const USAGE: &str = "opkg commands:\n  opkg search <name>\n  opkg install <id|name>\n  opkg update\n  opkg remove <id|name>\n  opkg version";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Version,
    Search,
    Install,
    Update,
    Remove,
}

impl FromStr for Subcommand {
    type Err = OpkgError;

    fn from_str(token: &str) -> Result<Self> {
        match token.to_lowercase().as_str() {
            "version" => Ok(Subcommand::Version),
            "search" => Ok(Subcommand::Search),
            "install" => Ok(Subcommand::Install),
            "update" => Ok(Subcommand::Update),
            "remove" => Ok(Subcommand::Remove),
            _ => Err(OpkgError::UnknownCommand(token.to_string())),
        }
    }
}

/// Route one `opkg` invocation and return the reply for the host.
///
/// Install progress is echoed to stdout while the install runs.
pub fn dispatch(winget: &Winget, args: impl Into<CommandArgs>) -> String {
    dispatch_with_sink(winget, args, &mut io::stdout())
}

/// [`dispatch`] with install progress echoed to `sink`.
pub fn dispatch_with_sink(
    winget: &Winget,
    args: impl Into<CommandArgs>,
    sink: &mut dyn Write,
) -> String {
    let tokens = args.into().normalize();
    match route(winget, &tokens, sink) {
        Ok(reply) => reply,
        Err(e) => {
            ui::verbose(&format!("opkg {:?} failed: {:?}", tokens, e));
            e.to_string()
        }
    }
}

fn route(winget: &Winget, tokens: &[String], sink: &mut dyn Write) -> Result<String> {
    let Some((first, tail)) = tokens.split_first() else {
        return Ok(USAGE.to_string());
    };

    match first.parse::<Subcommand>()? {
        Subcommand::Version => Ok(project_identity::version_string()),
        Subcommand::Search => {
            require_args(tail, "search <name>")?;
            winget.run(&prefixed("search", tail))
        }
        Subcommand::Install => {
            require_args(tail, "install <id|name>")?;
            winget.install(&tail.join(" "), sink)
        }
        Subcommand::Update => winget.run(&["source".to_string(), "update".to_string()]),
        Subcommand::Remove => {
            require_args(tail, "remove <id|name>")?;
            winget.run(&prefixed("uninstall", tail))
        }
    }
}

fn require_args(tail: &[String], usage: &str) -> Result<()> {
    if tail.is_empty() {
        Err(OpkgError::Usage(cli_with(usage)))
    } else {
        Ok(())
    }
}

fn prefixed(verb: &str, tail: &[String]) -> Vec<String> {
    std::iter::once(verb.to_string())
        .chain(tail.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests;

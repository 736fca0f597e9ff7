//! # winget relay
//!
//! Everything that touches the external package manager lives here:
//!
//! - [`probe`]: platform + PATH gate checked before any spawn
//! - [`batch`]: run to completion and relay combined output
//! - [`install`]: long-running install with live progress
//! - [`progress`]: line splitting and percentage extraction for install output
//!
//! Every spawn goes through [`Winget`], which owns the program to run and the
//! probe that decides whether running it is allowed.

pub mod batch;
pub mod install;
pub mod probe;
pub mod progress;

pub use probe::{FixedProbe, SystemProbe, ToolProbe};

use crate::config::Settings;
use crate::error::{OpkgError, Result};
use crate::project_identity;
use crate::ui;
use std::io;
use std::process::{Command, Stdio};

/// Handle on the winget executable.
pub struct Winget {
    program: String,
    probe: Box<dyn ToolProbe>,
}

impl Winget {
    /// `winget` from PATH, gated by the real platform check.
    pub fn new() -> Self {
        Self::with_probe(project_identity::TOOL_NAME, SystemProbe)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_probe(settings.winget_program.clone(), SystemProbe)
    }

    pub fn with_probe(program: impl Into<String>, probe: impl ToolProbe + 'static) -> Self {
        Self {
            program: program.into(),
            probe: Box::new(probe),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn is_available(&self) -> bool {
        self.probe.is_available(&self.program)
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            ui::verbose(&format!("'{}' did not pass the availability check", self.program));
            Err(OpkgError::ToolUnavailable {
                tool: project_identity::TOOL_NAME.to_string(),
            })
        }
    }

    /// Base command with stdin detached; callers wire stdout/stderr.
    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());
        ui::verbose(&format!("Running {:?}", cmd));
        cmd
    }

    fn spawn_failed(&self, err: io::Error) -> OpkgError {
        OpkgError::SpawnFailed {
            tool: project_identity::TOOL_NAME.to_string(),
            reason: err.to_string(),
        }
    }
}

impl Default for Winget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

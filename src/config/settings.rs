//! Settings Module
//!
//! Resolves opkg runtime settings (winget program, color) from the environment.
//! Command-line flags are applied on top by the CLI layer.

use crate::error::{OpkgError, Result};
use crate::project_identity;
use std::fmt;
use std::str::FromStr;

/// Terminal color policy for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    const VALID: [&'static str; 3] = ["auto", "always", "never"];
}

impl FromStr for ColorMode {
    type Err = OpkgError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(invalid_value("color", value, &ColorMode::VALID)),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program spawned for every winget call (name on PATH or a path)
    pub winget_program: String,
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winget_program: project_identity::TOOL_NAME.to_string(),
            color: ColorMode::Auto,
        }
    }
}

impl Settings {
    /// Load settings from `OPKG_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup. Unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(program) = lookup(&project_identity::env_key("WINGET")) {
            if program.trim().is_empty() {
                return Err(OpkgError::Config(format!(
                    "{} cannot be empty",
                    project_identity::env_key("WINGET")
                )));
            }
            settings.winget_program = program.trim().to_string();
        }

        if let Some(color) = lookup(&project_identity::env_key("COLOR")) {
            settings.color = color.parse()?;
        }

        Ok(settings)
    }
}

fn invalid_value(key: &str, value: &str, valid: &[&str]) -> OpkgError {
    OpkgError::Config(format!(
        "Invalid value for '{}': '{}'. Valid: {}",
        key,
        value,
        valid.join(", ")
    ))
}

//! Central project identity contract.
//!
//! This module is the single source of truth for names the host sees.
//! Command names are part of the host contract; keep them stable.

/// Plugin version, shared by `opkg version` and `opkg.version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DISPLAY_NAME: &str = "OpenPack";
pub const COMMAND_NAME: &str = "opkg";
pub const VERSION_COMMAND_NAME: &str = "opkg.version";
pub const COMMAND_HELP: &str = "OpenPack app installer (winget)";
pub const VERSION_COMMAND_HELP: &str = "OpenPack plugin version";
pub const ENV_PREFIX: &str = "OPKG";

/// The package manager every subcommand is relayed to.
pub const TOOL_NAME: &str = "winget";

/// The only platform where the tool is considered usable.
pub const TOOL_PLATFORM: &str = "windows";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn version_string() -> String {
    format!("{} version {}", DISPLAY_NAME, VERSION)
}

pub fn cli_with(args: &str) -> String {
    format!("{} {}", COMMAND_NAME, args)
}

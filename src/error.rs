use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpkgError {
    #[error("{tool} is not available on this system.")]
    ToolUnavailable { tool: String },

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Failed to run {tool}: {reason}")]
    SpawnFailed { tool: String, reason: String },

    #[error("Unknown opkg command. Try: opkg")]
    UnknownCommand(String),

    /// Invalid settings value (environment or CLI)
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OpkgError>;

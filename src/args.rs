//! Command argument normalization.
//!
//! Hosts hand the plugin whatever payload they have: nothing, a pre-split
//! list, or a single command line. [`CommandArgs`] captures those shapes and
//! [`CommandArgs::normalize`] turns every one of them into the same ordered
//! token list.

use serde_json::Value;

/// Loosely-typed argument payload received from a host.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CommandArgs {
    /// No payload at all
    #[default]
    Absent,
    /// Pre-split tokens; each element keeps its own position
    Sequence(Vec<Value>),
    /// A single value, split on whitespace during normalization
    Scalar(Value),
}

impl CommandArgs {
    /// Convert the payload into ordered string tokens. Never fails.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            CommandArgs::Absent => Vec::new(),
            CommandArgs::Sequence(items) => items.iter().map(value_to_string).collect(),
            CommandArgs::Scalar(value) => value_to_string(value)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// String form of a payload value: strings without quotes, everything else as JSON text.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<Value> for CommandArgs {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CommandArgs::Absent,
            Value::Array(items) => CommandArgs::Sequence(items),
            other => CommandArgs::Scalar(other),
        }
    }
}

impl From<&str> for CommandArgs {
    fn from(line: &str) -> Self {
        CommandArgs::Scalar(Value::String(line.to_string()))
    }
}

impl From<String> for CommandArgs {
    fn from(line: String) -> Self {
        CommandArgs::Scalar(Value::String(line))
    }
}

impl From<Vec<String>> for CommandArgs {
    fn from(tokens: Vec<String>) -> Self {
        CommandArgs::Sequence(tokens.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for CommandArgs {
    fn from(tokens: Vec<&str>) -> Self {
        tokens.as_slice().into()
    }
}

impl From<&[&str]> for CommandArgs {
    fn from(tokens: &[&str]) -> Self {
        CommandArgs::Sequence(tokens.iter().map(|t| Value::String(t.to_string())).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandArgs {
    fn from(tokens: [&str; N]) -> Self {
        tokens.as_slice().into()
    }
}

impl<T: Into<CommandArgs>> From<Option<T>> for CommandArgs {
    fn from(args: Option<T>) -> Self {
        args.map(Into::into).unwrap_or_default()
    }
}

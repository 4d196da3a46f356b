//! Engine configuration fields, values and validation errors

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The value type of a configuration field.
///
/// A closed set: every kind knows how to parse user-supplied text into a
/// [`ConfigValue`], so front ends never deal in runtime type objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    Text,
}

impl FieldKind {
    /// Parse user-supplied text into a value of this kind.
    pub fn parse(self, input: &str) -> Result<ConfigValue, ConfigError> {
        let input = input.trim();
        match self {
            FieldKind::Integer => input
                .parse::<i64>()
                .map(ConfigValue::Integer)
                .map_err(|_| self.unparsable(input)),
            FieldKind::Float => input
                .parse::<f64>()
                .map(ConfigValue::Float)
                .map_err(|_| self.unparsable(input)),
            FieldKind::Boolean => match input.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Ok(ConfigValue::Boolean(true)),
                "false" | "no" | "n" | "0" => Ok(ConfigValue::Boolean(false)),
                _ => Err(self.unparsable(input)),
            },
            FieldKind::Text => Ok(ConfigValue::Text(input.to_string())),
        }
    }

    /// Lowercase kind name for prompts and error messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::Text => "text",
        }
    }

    fn unparsable(self, input: &str) -> ConfigError {
        ConfigError::Unparsable {
            kind: self,
            input: input.to_string(),
        }
    }
}

/// A configuration value of one of the closed field kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConfigValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl ConfigValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            ConfigValue::Integer(_) => FieldKind::Integer,
            ConfigValue::Float(_) => FieldKind::Float,
            ConfigValue::Boolean(_) => FieldKind::Boolean,
            ConfigValue::Text(_) => FieldKind::Text,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Integer(n) => write!(f, "{n}"),
            ConfigValue::Float(x) => write!(f, "{x}"),
            ConfigValue::Boolean(b) => write!(f, "{b}"),
            ConfigValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One configurable engine parameter: value kind, default and display label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigField {
    pub kind: FieldKind,
    pub default: ConfigValue,
    pub label: String,
}

impl ConfigField {
    pub fn new(kind: FieldKind, default: ConfigValue, label: impl Into<String>) -> Self {
        Self {
            kind,
            default,
            label: label.into(),
        }
    }
}

/// Ordered configuration schema: field name and field, in declaration order.
pub type ConfigSchema = Vec<(String, ConfigField)>;

/// Values written back by the presentation layer, keyed by field name.
pub type ConfigValues = HashMap<String, ConfigValue>;

/// A rejected or malformed configuration.
///
/// Carries display text only. Non-fatal: the caller is expected to re-prompt
/// the user and retry; a rejected configuration never partially mutates an
/// engine.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("no value supplied for '{0}'")]
    Missing(String),

    #[error("'{field}' expects a value of kind {}, got {}", .expected.name(), .found.name())]
    WrongKind {
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error("not a valid {}: '{input}'", .kind.name())]
    Unparsable { kind: FieldKind, input: String },

    #[error("'{field}' {reason}")]
    Rejected { field: String, reason: String },
}

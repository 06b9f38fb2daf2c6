//! Error types for the configuration layer.
//!
//! Control operations never fail; these only surface when loading an
//! [`Appearance`](crate::Appearance) or parsing colors.

use std::path::PathBuf;

/// Errors that can occur while parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The input was empty or whitespace.
    #[error("Empty color")]
    Empty,

    /// The input is not one of the supported color forms.
    #[error("Unrecognized color: {0}")]
    Unrecognized(String),

    /// A color function had the wrong number of arguments.
    #[error("Expected {expected} components in {input}, found {found}")]
    Arity {
        input: String,
        expected: String,
        found: usize,
    },

    /// A component could not be parsed or is out of range.
    #[error("Invalid component {component} in {input}")]
    Component { input: String, component: String },
}

impl ColorParseError {
    pub(crate) fn component(input: &str, component: &str) -> Self {
        Self::Component {
            input: input.to_string(),
            component: component.to_string(),
        }
    }
}

/// Errors that can occur while loading an appearance configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds a value the control cannot use.
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

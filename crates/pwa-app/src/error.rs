//! Application error types.
//!
//! Only configuration handling can fail at this level; the interactive
//! components degrade into state instead of returning errors.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading or saving error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to {operation} config file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("Invalid config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be serialised.
    #[error("Failed to serialize config")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },
}

impl ConfigError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the config file at {}", operation, path.display()),
            Self::Parse { path, source } => format!(
                "The config file at {} could not be read: {}",
                path.display(),
                source
            ),
            Self::Serialize { .. } => "The configuration could not be written.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { operation, .. } if *operation == "read" => {
                Some("Check that the file exists and you have permission to read it.")
            }
            Self::Io { .. } => Some("Check that you have permission to write to this location."),
            Self::Parse { .. } => {
                Some("Fix the reported entry or delete the file to fall back to defaults.")
            }
            Self::Serialize { .. } => None,
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

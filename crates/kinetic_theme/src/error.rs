//! Theme configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown color token `{0}`")]
    UnknownColor(String),

    #[error("invalid color for `{token}`: `{value}` (expected #rrggbb or #rrggbbaa)")]
    InvalidColor { token: String, value: String },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

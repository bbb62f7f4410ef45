//! Error types for the configuration boundary
//!
//! Gesture recognition and motion resolution never fail; these errors only
//! arise when turning strings or config files into typed options.

use thiserror::Error;

/// Errors raised while parsing presets, easings, or configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A preset name outside the closed set for its kind
    #[error("Unknown {kind} preset: '{name}'")]
    UnknownPreset { kind: &'static str, name: String },

    /// An easing string that is neither a token nor a cubic-bezier literal
    #[error("Invalid easing: '{0}'")]
    InvalidEasing(String),

    /// Malformed TOML configuration
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn unknown_preset(kind: &'static str, name: impl Into<String>) -> Self {
        ConfigError::UnknownPreset {
            kind,
            name: name.into(),
        }
    }
}

/// Result type for configuration parsing
pub type Result<T> = std::result::Result<T, ConfigError>;

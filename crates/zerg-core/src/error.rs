//! Error types for zerg-core.

use thiserror::Error;

/// Everything that can go wrong while configuring a dispatcher.
///
/// Rule strings, module names and messages are never validated; only sink
/// subscriptions and loaded configuration can be rejected.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown log level `{0}` (expected one of verbose, debug, info, warn, error)")]
    UnknownLevel(String),

    #[error("unknown console colour `{color}` for level `{level}`")]
    UnknownColor { level: String, color: String },

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

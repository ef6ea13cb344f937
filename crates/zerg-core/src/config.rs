//! Configuration types for zerg.
//!
//! [`ZergConfig::load`] layers an optional TOML file and `ZERG_*`
//! environment variables on top of the built-in defaults.
//! [`ZergConfig::defaults`] returns the same defaults without touching the
//! filesystem or the environment (useful in tests).
//!
//! Environment overrides use `__` between nested keys, and `ZERG_RULES` is a
//! comma separated list:
//!
//! ```sh
//! ZERG_RULES='api*,-api.health' ZERG_CONSOLE__LEVELS='warn,error' zerg check api.users
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::types::LevelSet;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
rules = []

[console]
enabled          = true
levels           = ["verbose", "debug", "info", "warn", "error"]
show_timestamps  = false
timestamp_format = "%H:%M:%S%.3f"

[console.colors]
verbose = "gray"
debug   = "cyan"
info    = "green"
warn    = "yellow"
error   = "red"
"#;

const ENV_PREFIX: &str = "ZERG";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ZergConfig {
    /// Raw rule strings, in priority order.
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// `[console]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Level names the console sink subscribes to.
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
    #[serde(default)]
    pub show_timestamps: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default)]
    pub colors: ColorsConfig,
}

fn default_enabled() -> bool { true }
fn default_levels() -> Vec<String> {
    ["verbose", "debug", "info", "warn", "error"].map(String::from).to_vec()
}
fn default_timestamp_format() -> String { "%H:%M:%S%.3f".to_string() }

impl ConsoleConfig {
    /// The configured levels as a set. Fails on an unknown level name.
    pub fn level_set(&self) -> Result<LevelSet, ConfigurationError> {
        LevelSet::parse(&self.levels)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            levels: default_levels(),
            show_timestamps: false,
            timestamp_format: default_timestamp_format(),
            colors: ColorsConfig::default(),
        }
    }
}

/// `[console.colors]` section: one colour name per level.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorsConfig {
    #[serde(default = "default_verbose")]
    pub verbose: String,
    #[serde(default = "default_debug")]
    pub debug: String,
    #[serde(default = "default_info")]
    pub info: String,
    #[serde(default = "default_warn")]
    pub warn: String,
    #[serde(default = "default_error")]
    pub error: String,
}

fn default_verbose() -> String { "gray".to_string() }
fn default_debug() -> String { "cyan".to_string() }
fn default_info() -> String { "green".to_string() }
fn default_warn() -> String { "yellow".to_string() }
fn default_error() -> String { "red".to_string() }

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            verbose: default_verbose(),
            debug: default_debug(),
            info: default_info(),
            warn: default_warn(),
            error: default_error(),
        }
    }
}

impl Default for ZergConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ZergConfig {
    /// Load the defaults, then `path` if given, then `ZERG_*` variables.
    ///
    /// A missing file is an error only when a path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let cfg: ZergConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("rules")
                    .with_list_parse_key("console.levels")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        tracing::debug!(?path, rules = cfg.rules.len(), "configuration loaded");
        Ok(cfg)
    }

    /// Parse a TOML document layered over the defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigurationError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Core types for zerg-core.
//!
//! This module defines the values that flow out of the dispatcher: the
//! [`LogEvent`] record handed to sinks, its [`Level`], and the [`LevelSet`]
//! a sink subscribes with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// One logging call, as seen by a sink.
///
/// Built fresh for every call on an enabled module and handed to each
/// matching sink by reference. Sinks must not expect it to outlive the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub level: Level,
    /// Name of the module that produced the event.
    pub module: String,
    pub message: String,
    /// Extra values passed after the message, in call order.
    pub arguments: Vec<serde_json::Value>,
}

impl LogEvent {
    /// Build an event stamped with the current wall-clock time.
    pub fn now(
        level: Level,
        module: impl Into<String>,
        message: impl Into<String>,
        arguments: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
            level,
            module: module.into(),
            message: message.into(),
            arguments,
        }
    }
}

/// Event severity, least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Every level, in severity order.
    pub const ALL: [Level; 5] = [
        Level::Verbose,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Verbose => "verbose",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigurationError::UnknownLevel(s.to_string()))
    }
}

/// The set of levels a sink is subscribed to. Defaults to every level.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSet(u8);

impl LevelSet {
    /// No levels at all. A sink registered with this never fires.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Level::ALL.into_iter().collect()
    }

    /// Parse a list of level names, failing on the first unknown one.
    pub fn parse<I, S>(names: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<Level>())
            .collect()
    }

    pub fn with(mut self, level: Level) -> Self {
        self.0 |= level.bit();
        self
    }

    pub fn contains(self, level: Level) -> bool {
        self.0 & level.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Level> {
        Level::ALL.into_iter().filter(move |level| self.contains(*level))
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Level> for LevelSet {
    fn from_iter<T: IntoIterator<Item = Level>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), LevelSet::with)
    }
}

impl From<Level> for LevelSet {
    fn from(level: Level) -> Self {
        Self::empty().with(level)
    }
}

impl<const N: usize> From<[Level; N]> for LevelSet {
    fn from(levels: [Level; N]) -> Self {
        levels.into_iter().collect()
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

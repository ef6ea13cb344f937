//! The console sink: one coloured line per event.
//!
//! ```text
//! [overseer] some message 0 true {"foo":"bar"}
//! ```
//!
//! The bracketed module name is painted with the level's style. Extra
//! arguments follow the message, separated by single spaces; strings are
//! printed as-is, everything else as compact JSON.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use zerg_core::config::ConsoleConfig;
use zerg_core::{ConfigurationError, LogEvent, Sink};

use crate::style::Palette;

/// Writes formatted events to `W`.
pub struct ConsoleSink<W: Write + Send> {
    out: Mutex<W>,
    palette: Palette,
    /// chrono format string; `None` prints no timestamp.
    timestamp_format: Option<String>,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink on standard output with the default palette.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            palette: Palette::default(),
            timestamp_format: None,
        }
    }

    /// Build a sink from the `[console]` section.
    pub fn from_config(out: W, config: &ConsoleConfig) -> Result<Self, ConfigurationError> {
        let palette = Palette::from_config(&config.colors)?;
        let timestamp_format = config
            .show_timestamps
            .then(|| config.timestamp_format.clone());
        Ok(Self {
            out: Mutex::new(out),
            palette,
            timestamp_format,
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_timestamps(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    /// Render `event` as a single line, without the trailing newline.
    pub fn format(&self, event: &LogEvent) -> String {
        let mut line = String::new();
        if let Some(format) = &self.timestamp_format {
            if let Some(ts) = chrono::DateTime::from_timestamp_millis(event.timestamp) {
                line.push_str(&ts.format(format).to_string());
                line.push(' ');
            }
        }
        let style = self.palette.style(event.level);
        line.push_str(&style.paint(&format!("[{}]", event.module)));
        line.push(' ');
        line.push_str(&event.message);
        for arg in &event.arguments {
            line.push(' ');
            match arg {
                serde_json::Value::String(s) => line.push_str(s),
                other => line.push_str(&other.to_string()),
            }
        }
        line
    }

    /// Unwrap the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn log(&self, event: &LogEvent) {
        let line = self.format(event);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // A sink has nowhere to report a failed write.
        if let Err(err) = writeln!(out, "{line}") {
            tracing::trace!(%err, "console write failed");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

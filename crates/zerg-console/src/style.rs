//! ANSI styles and the per-level console palette.
//!
//! A [`Style`] is a pair of SGR codes wrapped around a string. The
//! [`Palette`] assigns one style per [`Level`]; it is resolved once from the
//! `[console.colors]` configuration so painting never looks names up.

use zerg_core::config::ColorsConfig;
use zerg_core::{ConfigurationError, Level};

/// Open/close SGR code pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub open: u8,
    pub close: u8,
}

/// Every named style, with its codes.
pub const NAMED_STYLES: &[(&str, Style)] = &[
    ("reset", Style::new(0, 0)),
    ("cyan", Style::new(36, 39)),
    ("red", Style::new(31, 39)),
    ("green", Style::new(32, 39)),
    ("yellow", Style::new(33, 39)),
    ("gray", Style::new(90, 39)),
];

impl Style {
    pub const fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    /// Look up a style by name (`"grey"` is accepted for `"gray"`).
    pub fn named(name: &str) -> Option<Style> {
        let name = name.trim().to_ascii_lowercase();
        let name = if name == "grey" { "gray" } else { name.as_str() };
        NAMED_STYLES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, style)| *style)
    }

    /// Wrap `s` in this style's escape codes.
    pub fn paint(&self, s: &str) -> String {
        format!("\u{1b}[{}m{}\u{1b}[{}m", self.open, s, self.close)
    }
}

/// Style for each level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub verbose: Style,
    pub debug: Style,
    pub info: Style,
    pub warn: Style,
    pub error: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            verbose: Style::new(90, 39),
            debug: Style::new(36, 39),
            info: Style::new(32, 39),
            warn: Style::new(33, 39),
            error: Style::new(31, 39),
        }
    }
}

impl Palette {
    /// Resolve colour names from configuration. Fails on the first unknown name.
    pub fn from_config(colors: &ColorsConfig) -> Result<Self, ConfigurationError> {
        fn resolve(level: Level, name: &str) -> Result<Style, ConfigurationError> {
            Style::named(name).ok_or_else(|| ConfigurationError::UnknownColor {
                level: level.to_string(),
                color: name.to_string(),
            })
        }

        Ok(Self {
            verbose: resolve(Level::Verbose, &colors.verbose)?,
            debug: resolve(Level::Debug, &colors.debug)?,
            info: resolve(Level::Info, &colors.info)?,
            warn: resolve(Level::Warn, &colors.warn)?,
            error: resolve(Level::Error, &colors.error)?,
        })
    }

    pub fn style(&self, level: Level) -> Style {
        match level {
            Level::Verbose => self.verbose,
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Warn => self.warn,
            Level::Error => self.error,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

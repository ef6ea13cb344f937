//! zerg — rule-filtered logging channels with pluggable sinks.
//!
//! This crate wires the pieces together: a [`Zerg`] dispatcher from
//! `zerg-core`, the console sink from `zerg-console`, and a loaded
//! [`ZergConfig`].
//!
//! # Architecture
//!
//! ```text
//! ZergConfig ──► Logger::apply ──► rules ──► Registry ──► Module
//!                      │                                    │
//!                      └──► console sink ◄── Dispatcher ◄───┘
//! ```
//!
//! Everything runs on the caller's thread; sinks are invoked synchronously.

use std::io;
use std::sync::Arc;

pub use zerg_console::{ConsoleSink, Palette, Style};
pub use zerg_core::{
    config, rule, ConfigurationError, Filter, Level, LevelSet, LogEvent, Module, Rule, RuleSet,
    Sink, Zerg, ZergConfig,
};

/// A dispatcher plus the console sink it was created with.
///
/// [`Logger::new`] subscribes the console to every level straight away;
/// [`Logger::apply`] re-reads rules and console settings from configuration.
pub struct Logger {
    zerg: Zerg,
    console: Arc<dyn Sink>,
}

impl Logger {
    /// Dispatcher with the default console sink on stdout, all levels.
    pub fn new() -> Self {
        Self::with_console(Arc::new(ConsoleSink::stdout()))
    }

    /// Dispatcher with `console` standing in for the stock console sink.
    pub fn with_console(console: Arc<dyn Sink>) -> Self {
        let zerg = Zerg::new();
        zerg.add_sink(Arc::clone(&console), LevelSet::all());
        Self { zerg, console }
    }

    /// Build a logger on stdout and apply `config` to it.
    pub fn from_config(config: &ZergConfig) -> Result<Self, ConfigurationError> {
        let mut logger = Self::new();
        logger.apply(config)?;
        Ok(logger)
    }

    /// Apply rules and console settings.
    ///
    /// The console sink is removed and, if enabled, re-added with the
    /// configured levels. Everything is validated first, so on error the
    /// logger is left untouched.
    pub fn apply(&mut self, config: &ZergConfig) -> Result<(), ConfigurationError> {
        let levels = config.console.level_set()?;
        let console = ConsoleSink::from_config(io::stdout(), &config.console)?;
        self.replace_console(Arc::new(console), config.console.enabled, levels);
        self.zerg.configure(&config.rules);
        tracing::debug!(
            console = config.console.enabled,
            ?levels,
            rules = config.rules.len(),
            "logger configured"
        );
        Ok(())
    }

    /// Swap the console sink for `console`, subscribed to `levels` when
    /// `enabled`.
    pub fn replace_console(&mut self, console: Arc<dyn Sink>, enabled: bool, levels: LevelSet) {
        self.zerg.remove_sink(&self.console);
        self.console = console;
        if enabled {
            self.zerg.add_sink(Arc::clone(&self.console), levels);
        }
    }

    pub fn dispatcher(&self) -> &Zerg {
        &self.zerg
    }

    pub fn module(&self, name: &str) -> Module {
        self.zerg.module(name)
    }

    pub fn configure<I, S>(&self, rules: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.zerg.configure(rules);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

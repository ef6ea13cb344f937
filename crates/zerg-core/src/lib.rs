//! zerg-core — rule-filtered logging channels.
//!
//! A [`Zerg`] dispatcher hands out named [`Module`]s. Each module's events
//! are let through or dropped according to the active enable/disable rules
//! (see [`rule`]), then fanned out to every [`Sink`] subscribed to the
//! event's [`Level`].
//!
//! # Flow
//!
//! ```text
//! module(name) ──► Registry ──► rule::is_enabled ──► cached flag
//!                                                       │
//! module.info(..) ── flag set? ──► LogEvent ──► filters ──► sinks
//! ```
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use zerg_core::{LevelSet, LogEvent, Sink, Zerg};
//!
//! let zerg = Zerg::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink: Arc<dyn Sink> = {
//!     let seen = Arc::clone(&seen);
//!     Arc::new(move |e: &LogEvent| seen.lock().unwrap().push(e.message.clone()))
//! };
//! zerg.add_sink(sink, LevelSet::all());
//! zerg.configure(["-hive.larva", "hive*"]);
//!
//! zerg.module("hive.queen").info("spawning");
//! zerg.module("hive.larva").info("dropped: excluded by the first rule");
//! assert_eq!(*seen.lock().unwrap(), vec!["spawning"]);
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod rule;
pub mod types;

use std::sync::{Arc, PoisonError, RwLock};

pub use config::ZergConfig;
pub use dispatch::{Filter, Sink};
pub use error::ConfigurationError;
pub use registry::Module;
pub use rule::{Rule, RuleSet};
pub use types::{Level, LevelSet, LogEvent};

use dispatch::Dispatcher;
use registry::Registry;

/// Dispatcher handle: rules, modules, filters and sinks.
///
/// Cloning yields another handle to the same dispatcher. There is no global
/// instance; create one and pass it around.
#[derive(Clone, Default)]
pub struct Zerg {
    registry: Arc<RwLock<Registry>>,
    dispatcher: Arc<Dispatcher>,
}

impl Zerg {
    /// An empty dispatcher: no rules (everything enabled), no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the module called `name`, creating it on first use.
    pub fn module(&self, name: &str) -> Module {
        if let Some(module) = self.get_module(name) {
            return module;
        }
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_create(name, &self.dispatcher)
    }

    /// Return the module called `name` if it has been created.
    pub fn get_module(&self, name: &str) -> Option<Module> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
    }

    /// Every module created so far, sorted by name.
    pub fn modules(&self) -> Vec<Module> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .modules()
    }

    /// Replace the active rules and re-evaluate every existing module.
    ///
    /// The swap and the refresh happen under one write lock.
    pub fn configure<I, S>(&self, rules: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = RuleSet::parse(rules);
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .configure(rules);
    }

    /// Snapshot of the active rules.
    pub fn rules(&self) -> Vec<Rule> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rules()
            .rules()
            .to_vec()
    }

    /// Resolve `name` against the active rules without creating a module.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rules()
            .is_enabled(name)
    }

    /// Subscribe `sink` to `levels`. The same sink may be added more than once.
    pub fn add_sink(&self, sink: Arc<dyn Sink>, levels: impl Into<LevelSet>) {
        self.dispatcher.add_sink(sink, levels.into());
    }

    /// Subscribe `sink` to levels given by name.
    ///
    /// Fails on an unknown level name, in which case nothing is registered.
    pub fn add_sink_for<I, S>(&self, sink: Arc<dyn Sink>, levels: I) -> Result<(), ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let levels = LevelSet::parse(levels)?;
        self.dispatcher.add_sink(sink, levels);
        Ok(())
    }

    /// Unsubscribe every registration of `sink`. Unknown sinks are ignored.
    pub fn remove_sink(&self, sink: &Arc<dyn Sink>) {
        self.dispatcher.remove_sink(sink);
    }

    pub fn remove_all_sinks(&self) {
        self.dispatcher.remove_all_sinks();
    }

    pub fn sink_count(&self) -> usize {
        self.dispatcher.sink_count()
    }

    /// Add a global predicate. An event any filter rejects reaches no sink.
    pub fn add_filter<F>(&self, filter: F)
    where
        F: Fn(&LogEvent) -> bool + Send + Sync + 'static,
    {
        self.dispatcher.add_filter(Arc::new(filter));
    }

    /// Hand `event` to the filters and then to every matching sink.
    ///
    /// This bypasses the module gate; returns `false` if a filter dropped it.
    pub fn emit(&self, event: &LogEvent) -> bool {
        self.dispatcher.emit(event)
    }
}

impl std::fmt::Debug for Zerg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Zerg")
            .field("rules", &self.rules())
            .field("modules", &self.modules())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

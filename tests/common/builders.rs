//! Test builders — recording sinks and pre-configured dispatchers.
//!
//! These are designed for readability in test assertions, not for
//! production use. They panic on poisoned locks rather than recovering.

use std::sync::{Arc, Mutex};

use zerg_core::{LevelSet, LogEvent, Sink, Zerg};

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// Sink that keeps a copy of every event it receives.
///
/// ```rust
/// let rec = RecordingSink::new();
/// zerg.add_sink(rec.sink(), LevelSet::all());
/// zerg.module("drone").info("spawned");
/// assert_eq!(rec.messages(), vec!["spawned"]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<LogEvent>>>,
    tag: Option<&'static str>,
    journal: Option<Arc<Mutex<Vec<String>>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recording sink that also appends `"{tag}:{message}"` to a journal
    /// shared with other sinks, to check cross-sink ordering.
    pub fn tagged(tag: &'static str, journal: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            events: Arc::default(),
            tag: Some(tag),
            journal: Some(Arc::clone(journal)),
        }
    }

    /// A fresh `Arc<dyn Sink>` backed by this recorder. Each call returns a
    /// distinct sink identity.
    pub fn sink(&self) -> Arc<dyn Sink> {
        Arc::new(self.clone())
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.message).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for RecordingSink {
    fn log(&self, event: &LogEvent) {
        self.events.lock().unwrap().push(event.clone());
        if let (Some(tag), Some(journal)) = (self.tag, &self.journal) {
            journal.lock().unwrap().push(format!("{tag}:{}", event.message));
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher constructors
// ---------------------------------------------------------------------------

/// A dispatcher with `rules` applied and one recorder on every level.
pub fn zerg_with_rules(rules: &[&str]) -> (Zerg, RecordingSink) {
    let zerg = Zerg::new();
    zerg.configure(rules);
    let rec = RecordingSink::new();
    zerg.add_sink(rec.sink(), LevelSet::all());
    (zerg, rec)
}

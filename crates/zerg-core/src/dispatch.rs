//! Sink fan-out.
//!
//! The dispatcher owns the ordered sink list and the global filters. It knows
//! nothing about modules or rules: by the time an event reaches [`Dispatcher::emit`]
//! the module gate has already let it through.

use std::sync::{Arc, PoisonError, RwLock};

use crate::types::{LevelSet, LogEvent};

/// Receiver of log events.
///
/// Any `Fn(&LogEvent) + Send + Sync` closure is a sink:
///
/// ```rust
/// use std::sync::Arc;
/// use zerg_core::{LogEvent, Sink};
///
/// let sink: Arc<dyn Sink> = Arc::new(|event: &LogEvent| println!("{}", event.message));
/// ```
pub trait Sink: Send + Sync {
    fn log(&self, event: &LogEvent);
}

impl<F> Sink for F
where
    F: Fn(&LogEvent) + Send + Sync,
{
    fn log(&self, event: &LogEvent) {
        self(event)
    }
}

/// Global predicate consulted before any sink sees an event.
pub type Filter = Arc<dyn Fn(&LogEvent) -> bool + Send + Sync>;

struct Subscription {
    sink: Arc<dyn Sink>,
    levels: LevelSet,
}

/// Sinks compare by the address of their shared allocation.
fn same_sink(a: &Arc<dyn Sink>, b: &Arc<dyn Sink>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

#[derive(Default)]
pub(crate) struct Dispatcher {
    sinks: RwLock<Vec<Subscription>>,
    filters: RwLock<Vec<Filter>>,
}

impl Dispatcher {
    pub(crate) fn add_sink(&self, sink: Arc<dyn Sink>, levels: LevelSet) {
        tracing::trace!(?levels, "sink added");
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscription { sink, levels });
    }

    /// Drop every registration of `sink`. Unknown sinks are ignored.
    pub(crate) fn remove_sink(&self, sink: &Arc<dyn Sink>) {
        let mut sinks = self.sinks.write().unwrap_or_else(PoisonError::into_inner);
        let before = sinks.len();
        sinks.retain(|sub| !same_sink(&sub.sink, sink));
        tracing::trace!(removed = before - sinks.len(), "sink removed");
    }

    pub(crate) fn remove_all_sinks(&self) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub(crate) fn sink_count(&self) -> usize {
        self.sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn add_filter(&self, filter: Filter) {
        self.filters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(filter);
    }

    /// Run the filters, then hand `event` to every sink subscribed to its
    /// level, in registration order.
    ///
    /// Callbacks run after the locks are released, so a sink may add or
    /// remove sinks from inside `log`. Returns `false` if a filter dropped
    /// the event.
    pub(crate) fn emit(&self, event: &LogEvent) -> bool {
        let filters: Vec<Filter> = self
            .filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if !filters.iter().all(|keep| keep(event)) {
            return false;
        }

        let targets: Vec<Arc<dyn Sink>> = self
            .sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|sub| sub.levels.contains(event.level))
            .map(|sub| Arc::clone(&sub.sink))
            .collect();

        for sink in targets {
            sink.log(event);
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

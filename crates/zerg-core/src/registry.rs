//! Module registry — named logging channels and their cached enablement.
//!
//! Each name maps to exactly one [`Module`] for the life of the registry.
//! The module's `enabled` flag is computed when it is created and again on
//! every rule change; logging calls only read it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::rule::RuleSet;
use crate::types::{Level, LogEvent};

struct ModuleState {
    name: String,
    enabled: AtomicBool,
}

/// Handle to a named logging channel.
///
/// Cloning is cheap and every clone refers to the same channel; use
/// [`Module::ptr_eq`] to check identity.
#[derive(Clone)]
pub struct Module {
    state: Arc<ModuleState>,
    dispatcher: Arc<Dispatcher>,
}

macro_rules! level_methods {
    ($($level:ident => $plain:ident, $with:ident;)*) => {
        $(
            #[doc = concat!("Log `message` at `", stringify!($plain), "` level.")]
            pub fn $plain(&self, message: impl Into<String>) {
                self.log_with(Level::$level, message, Vec::<serde_json::Value>::new());
            }

            #[doc = concat!("Log `message` plus extra arguments at `", stringify!($plain), "` level.")]
            pub fn $with<I>(&self, message: impl Into<String>, args: I)
            where
                I: IntoIterator,
                I::Item: Into<serde_json::Value>,
            {
                self.log_with(Level::$level, message, args);
            }
        )*
    };
}

impl Module {
    fn new(name: &str, enabled: bool, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            state: Arc::new(ModuleState {
                name: name.to_string(),
                enabled: AtomicBool::new(enabled),
            }),
            dispatcher,
        }
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    /// Cached result of the last rule evaluation for this module.
    ///
    /// Read without the registry lock. While a `configure` is in progress,
    /// two modules may briefly disagree about which rule set they reflect;
    /// once it returns, every module reflects the new rules.
    pub fn is_enabled(&self) -> bool {
        self.state.enabled.load(Ordering::Acquire)
    }

    fn refresh(&self, rules: &RuleSet) {
        self.state
            .enabled
            .store(rules.is_enabled(&self.state.name), Ordering::Release);
    }

    /// Whether two handles refer to the same channel.
    pub fn ptr_eq(a: &Module, b: &Module) -> bool {
        Arc::ptr_eq(&a.state, &b.state)
    }

    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.log_with(level, message, Vec::<serde_json::Value>::new());
    }

    /// Build an event and hand it to the sinks, unless this module is disabled.
    pub fn log_with<I>(&self, level: Level, message: impl Into<String>, args: I)
    where
        I: IntoIterator,
        I::Item: Into<serde_json::Value>,
    {
        if !self.is_enabled() {
            return;
        }
        let event = LogEvent::now(
            level,
            self.state.name.as_str(),
            message,
            args.into_iter().map(Into::into).collect(),
        );
        self.dispatcher.emit(&event);
    }

    level_methods! {
        Verbose => verbose, verbose_with;
        Debug => debug, debug_with;
        Info => info, info_with;
        Warn => warn, warn_with;
        Error => error, error_with;
    }
}

impl std::fmt::Debug for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.state.name)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Active rules plus every module created so far.
///
/// Kept together so a rule change and the refresh it triggers happen under
/// one lock.
#[derive(Default)]
pub(crate) struct Registry {
    rules: RuleSet,
    modules: HashMap<String, Module>,
}

impl Registry {
    pub(crate) fn get(&self, name: &str) -> Option<Module> {
        self.modules.get(name).cloned()
    }

    pub(crate) fn get_or_create(&mut self, name: &str, dispatcher: &Arc<Dispatcher>) -> Module {
        if let Some(module) = self.modules.get(name) {
            return module.clone();
        }
        let enabled = self.rules.is_enabled(name);
        tracing::trace!(module = name, enabled, "module created");
        let module = Module::new(name, enabled, Arc::clone(dispatcher));
        self.modules.insert(name.to_string(), module.clone());
        module
    }

    /// Replace the rules and re-evaluate every known module against them.
    pub(crate) fn configure(&mut self, rules: RuleSet) {
        self.rules = rules;
        for module in self.modules.values() {
            module.refresh(&self.rules);
        }
        tracing::debug!(
            rules = self.rules.len(),
            modules = self.modules.len(),
            "rule set replaced"
        );
    }

    pub(crate) fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub(crate) fn modules(&self) -> Vec<Module> {
        let mut modules: Vec<Module> = self.modules.values().cloned().collect();
        modules.sort_by(|a, b| a.name().cmp(b.name()));
        modules
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

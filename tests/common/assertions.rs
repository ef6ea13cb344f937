//! Domain-specific assertion macros for zerg harnesses.
//!
//! These add context-rich failure messages that make it clear which module
//! resolved the wrong way and under which rules.

use zerg_core::LogEvent;

/// Assert that `name` resolves enabled under `rules`.
///
/// ```rust
/// assert_enabled!(["foo*"], "foobar");
/// ```
#[macro_export]
macro_rules! assert_enabled {
    ($rules:expr, $name:expr) => {{
        let rules = zerg_core::RuleSet::parse($rules);
        let name: &str = $name;
        if !rules.is_enabled(name) {
            panic!(
                "assert_enabled! failed: module {:?} resolved disabled.\n  rules: {:?}",
                name,
                rules.rules().iter().map(ToString::to_string).collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that `name` resolves disabled under `rules`.
#[macro_export]
macro_rules! assert_disabled {
    ($rules:expr, $name:expr) => {{
        let rules = zerg_core::RuleSet::parse($rules);
        let name: &str = $name;
        if rules.is_enabled(name) {
            panic!(
                "assert_disabled! failed: module {:?} resolved enabled.\n  rules: {:?}",
                name,
                rules.rules().iter().map(ToString::to_string).collect::<Vec<_>>()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Event assertions
// ---------------------------------------------------------------------------

/// Assert that every recorded event satisfies a predicate.
///
/// ```rust
/// assert_events_all(&rec.events(), |e| e.level == Level::Error);
/// ```
pub fn assert_events_all(events: &[LogEvent], pred: impl Fn(&LogEvent) -> bool) {
    let failing: Vec<&LogEvent> = events.iter().filter(|e| !pred(*e)).collect();
    if let Some(first) = failing.first() {
        panic!(
            "assert_events_all failed: {} of {} events did not satisfy predicate.\n  first: {:?}",
            failing.len(),
            events.len(),
            first
        );
    }
}

#![allow(unused)]
//! Rule parser and resolver integration harness.
//!
//! # What this covers
//!
//! - **Parser edge cases**: one-character rules (`*`, `-`) are literal, the
//!   dash is stripped before the star is considered, empty input means `*`.
//! - **Empty rule list**: every module name is enabled.
//! - **Catch-alls**: `*` enables and `-` disables every name, including
//!   names that look like rule syntax.
//! - **Defaults**: with only enabling rules unmatched names are disabled;
//!   once any disabling rule is present they are enabled.
//! - **First match wins**: later rules never override an earlier match.
//! - **Round trip**: `Rule::parse(rule.to_string()) == rule` for ordinary
//!   names (proptest).
//!
//! # What this does NOT cover
//!
//! - Module caching and refresh (see `registry_harness`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test rule_harness
//! ```

mod common;
use common::*;
use proptest::prelude::*;
use rstest::rstest;
use zerg_core::rule::{is_enabled, Rule, RuleSet};

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

#[rstest]
#[case::name("drone", "drone", false, true)]
#[case::exclude("-drone", "drone", false, false)]
#[case::prefix("hive.*", "hive.", true, true)]
#[case::exclude_prefix("-hive.*", "hive.", true, false)]
#[case::all("*", "*", false, true)]
#[case::none("-", "-", false, true)]
#[case::empty("", "*", false, true)]
#[case::dash_then_single_star("-*", "*", false, false)]
#[case::dash_then_single_dash("--", "-", false, false)]
#[case::star_prefix("**", "*", true, true)]
#[case::dash_star_star("-**", "*", true, false)]
#[case::single_letter_prefix("q*", "q", true, true)]
fn parse_table(
    #[case] raw: &str,
    #[case] target: &str,
    #[case] namespace: bool,
    #[case] enabled: bool,
) {
    let rule = Rule::parse(raw);
    assert_eq!(
        rule,
        Rule {
            target: target.to_string(),
            namespace,
            enabled
        },
        "parsing {raw:?}"
    );
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

#[test]
fn empty_rules_enable_every_module() {
    for name in UNITS.iter().chain(HIVE).chain(ODD_NAMES) {
        assert!(is_enabled(name, &[]), "{name:?}");
    }
}

#[test]
fn star_enables_every_module() {
    for name in UNITS.iter().chain(ODD_NAMES) {
        assert_enabled!(["*"], name);
    }
}

#[test]
fn dash_disables_every_module() {
    for name in UNITS.iter().chain(ODD_NAMES) {
        assert_disabled!(["-"], name);
    }
}

#[test]
fn negated_star_still_enables() {
    assert_enabled!(["-*"], "drone");
    assert_enabled!(["-*", "-drone"], "drone");
}

#[test]
fn only_enabling_rules_default_to_disabled() {
    assert_enabled!(["foo*"], "foo");
    assert_enabled!(["foo*"], "foobar");
    assert_disabled!(["foo*"], "bar");
}

#[test]
fn only_disabling_rules_default_to_enabled() {
    assert_disabled!(["-foo*"], "foobar");
    assert_enabled!(["-foo*"], "bar");
}

#[test]
fn first_match_wins() {
    assert_enabled!(["foo", "-foo*"], "foo");
    assert_disabled!(["foo", "-foo*"], "food");
    assert_disabled!(["-foo", "foo"], "foo");
}

#[test]
fn namespace_exclusion_only_bites_when_listed_first() {
    // "hive*" matches "hive.larva" before the exclusion is reached.
    assert_enabled!(["hive*", "-hive.larva"], "hive.queen");
    assert_enabled!(["hive*", "-hive.larva"], "hive.larva");
    // The exclusion makes the default permissive.
    assert_enabled!(["hive*", "-hive.larva"], "lair.queen");

    assert_disabled!(["-hive.larva", "hive*"], "hive.larva");
    assert_enabled!(["-hive.larva", "hive*"], "hive.larva.egg");
}

#[test]
fn disabling_rule_after_the_scan_point_still_sets_default() {
    let rules = RuleSet::parse(["queen", "roach", "-viper"]);
    assert!(rules.is_enabled("queen"));
    assert!(!rules.is_enabled("viper"));
    assert!(rules.is_enabled("drone"));
}

#[test]
fn catch_alls_only_apply_when_reached() {
    assert_disabled!(["-drone", "*"], "drone");
    assert_enabled!(["drone", "-"], "drone");
    assert_disabled!(["drone", "-"], "queen");
}

#[test]
fn names_are_matched_literally() {
    assert_enabled!(["a*"], "a*");
    assert_enabled!(["a*"], "abc");
    assert_disabled!(["--drone"], "-drone");
    assert_enabled!(["--drone"], "drone");
    assert_disabled!(["hive"], "hive*");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn ordinary_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9._]{0,15}"
}

proptest! {
    #[test]
    fn canonical_form_round_trips(
        target in ordinary_name(),
        namespace in any::<bool>(),
        enabled in any::<bool>(),
    ) {
        let rule = Rule { target, namespace, enabled };
        prop_assert_eq!(Rule::parse(&rule.to_string()), rule);
    }

    #[test]
    fn empty_rules_enable_any_name(name in ".*") {
        prop_assert!(is_enabled(&name, &[]));
    }

    #[test]
    fn exclusion_list_enables_everything_else(
        excluded in prop::collection::vec(ordinary_name(), 1..5),
        name in ordinary_name(),
    ) {
        let raw: Vec<String> = excluded.iter().map(|n| format!("-{n}")).collect();
        let rules = RuleSet::parse(&raw);
        prop_assert_eq!(rules.is_enabled(&name), !excluded.contains(&name));
    }

    #[test]
    fn inclusion_list_disables_everything_else(
        included in prop::collection::vec(ordinary_name(), 1..5),
        name in ordinary_name(),
    ) {
        let rules = RuleSet::parse(&included);
        prop_assert_eq!(rules.is_enabled(&name), included.contains(&name));
    }

    #[test]
    fn appending_rules_never_changes_a_decided_module(
        first in ordinary_name(),
        rest in prop::collection::vec("-?[a-z]{1,4}\\*?", 0..6),
    ) {
        let base = RuleSet::parse([first.as_str()]);
        let mut raw = vec![first.clone()];
        raw.extend(rest);
        let extended = RuleSet::parse(&raw);
        prop_assert_eq!(base.is_enabled(&first), extended.is_enabled(&first));
    }
}

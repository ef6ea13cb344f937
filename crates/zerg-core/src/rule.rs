//! Enable/disable rules and the resolver that applies them to module names.
//!
//! # Grammar
//!
//! | Rule        | Meaning                                        |
//! |-------------|------------------------------------------------|
//! | `NAME`      | enable the module called `NAME`                |
//! | `-NAME`     | disable the module called `NAME`               |
//! | `PREFIX*`   | enable every module whose name starts `PREFIX` |
//! | `-PREFIX*`  | disable every module whose name starts `PREFIX`|
//! | `*`         | enable everything                              |
//! | `-`         | disable everything                             |
//!
//! A rule string of exactly one character is never stripped, so `*` and `-`
//! stay literal targets. The resolver gives those two targets their
//! catch-all meaning.
//!
//! # Resolution
//!
//! Rules are scanned in order and the first one that matches decides. If
//! nothing matches, the module is enabled only when the set contains at
//! least one disabling rule: a list of exclusions means "everything else",
//! a list of inclusions means "only these".

use std::fmt;

/// Target that enables every module.
pub const ENABLE_ALL: &str = "*";
/// Target that disables every module.
pub const DISABLE_ALL: &str = "-";

/// A single parsed rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Exact module name, or prefix when `namespace` is set.
    pub target: String,
    pub namespace: bool,
    /// Polarity: `true` includes matching modules, `false` excludes them.
    pub enabled: bool,
}

impl Rule {
    /// Parse a raw rule string. Never fails; every string is some rule.
    pub fn parse(raw: &str) -> Rule {
        let mut target = if raw.is_empty() { ENABLE_ALL } else { raw };
        let mut enabled = true;
        let mut namespace = false;

        // Length checks look at the string as stripped so far: "-*" loses
        // its dash, leaving a one-character "*" that is kept literally.
        if target.chars().count() != 1 {
            if let Some(rest) = target.strip_prefix('-') {
                enabled = false;
                target = rest;
            }
        }
        if target.chars().count() != 1 {
            if let Some(rest) = target.strip_suffix('*') {
                namespace = true;
                target = rest;
            }
        }

        Rule {
            target: target.to_string(),
            namespace,
            enabled,
        }
    }

    /// Whether this rule decides for `module`, and if so, which way.
    fn decide(&self, module: &str) -> Option<bool> {
        match self.target.as_str() {
            ENABLE_ALL => Some(true),
            DISABLE_ALL => Some(false),
            target if self.namespace && module.starts_with(target) => Some(self.enabled),
            target if !self.namespace && module == target => Some(self.enabled),
            _ => None,
        }
    }
}

/// Canonical rule string; parses back to the same rule for ordinary names.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.enabled {
            f.write_str("-")?;
        }
        f.write_str(&self.target)?;
        if self.namespace {
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// Decide whether `module` is enabled under `rules`.
///
/// An empty rule list enables everything.
pub fn is_enabled(module: &str, rules: &[Rule]) -> bool {
    if rules.is_empty() {
        return true;
    }

    let mut by_default = false;
    for rule in rules {
        if !rule.enabled {
            by_default = true;
        }
        if let Some(decision) = rule.decide(module) {
            return decision;
        }
    }
    by_default
}

/// Ordered, immutable list of rules.
///
/// Replaced wholesale on reconfiguration, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: raw.into_iter().map(|r| Rule::parse(r.as_ref())).collect(),
        }
    }

    pub fn is_enabled(&self, module: &str) -> bool {
        is_enabled(module, &self.rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Static module names and rule sets used across harnesses.

/// A broad set of module names with no particular structure.
pub const UNITS: &[&str] = &[
    "drone", "overlord", "overseer", "changeling", "zergling", "baneling", "roach", "ravager",
    "hydralisk", "lurker", "swarm host", "locust", "queen", "mutalisk", "guardian", "devourer",
    "corruptor", "brood lord", "viper", "scourge", "defiler", "infestor", "ultralisk",
    "broodling", "infested terran", "aberration",
];

/// Dotted module names for namespace rules.
pub const HIVE: &[&str] = &[
    "hive",
    "hive.queen",
    "hive.larva",
    "hive.larva.egg",
    "hivemind",
    "lair.queen",
];

/// Names that look like rule syntax; they must be matched literally.
pub const ODD_NAMES: &[&str] = &["", "-", "*", "-*", "a*", "-drone", "hive*"];

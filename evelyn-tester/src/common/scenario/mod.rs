pub mod catalog;

use crate::logic::mission_tester::MissionPlan;

/// A named mission plan run across seeds and iterations.
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: MissionPlan,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, plan: MissionPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

/// Look up a scenario by CLI key or alias.
pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = match name.to_lowercase().as_str() {
        "smoke" => "smoke",
        "ar-gate" | "scanner" => "ar-gate",
        "shuffle" | "reshuffle" => "shuffle",
        "rarity-distribution" | "rarity" => "rarity-distribution",
        "log-recovery" | "recovery" => "log-recovery",
        "storage-faults" | "faults" => "storage-faults",
        "photo-edition" | "photos" => "photo-edition",
        "settings-lock" | "settings" => "settings-lock",
        "invalid-events" | "invalid" => "invalid-events",
        "language-switch" | "french" => "language-switch",
        "deterministic" | "determinism" => "deterministic",
        _ => return None,
    };
    catalog::find_catalog_scenario(key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog::CATALOG
        .iter()
        .map(|entry| (entry.key, entry.title))
        .collect()
}

/// Every catalog key, in listing order. Used to expand `all`.
pub fn all_scenario_keys() -> Vec<String> {
    catalog::CATALOG
        .iter()
        .map(|entry| entry.key.to_string())
        .collect()
}

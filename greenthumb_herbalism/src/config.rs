// Data-driven herbalism configuration.
//
// Every tunable number the harvest engine reads lives in `HerbalismConfig`,
// loaded from JSON at startup and never mutated at runtime. Traversal bounds,
// the regrowth cooldown and the double-drop curve are all here rather than
// scattered as constants through the engine.
//
// See also: `structure_yield.rs` (visit cap, column scan height),
// `regrowth.rs` (cooldown window), `bonus.rs` (`SkillBonusDecider`),
// `state.rs` which owns the config as part of `HerbalismState`.

use serde::{Deserialize, Serialize};

/// Top-level herbalism configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HerbalismConfig {
    /// Maximum number of cells a single branching (chorus) traversal may
    /// visit. Cells discovered after the cap is reached yield nothing.
    pub branching_visit_cap: usize,

    /// Maximum number of cells scanned above the base of a column or kelp
    /// plant. The world's own height also stops the scan.
    pub max_column_scan: u32,

    /// Seconds a Green Thumb regrowth marker stays active.
    pub regrowth_cooldown_secs: u64,

    /// Double-drop probability reached at `max_bonus_level` (0.0–1.0).
    pub max_double_drop_chance: f64,

    /// Skill level at which the double-drop chance stops growing.
    pub max_bonus_level: u32,
}

impl Default for HerbalismConfig {
    fn default() -> Self {
        Self {
            branching_visit_cap: 64,
            max_column_scan: 254,
            regrowth_cooldown_secs: 1,
            max_double_drop_chance: 1.0,
            max_bonus_level: 1000,
        }
    }
}

impl HerbalismConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

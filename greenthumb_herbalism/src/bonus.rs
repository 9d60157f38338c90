// Bonus-drop collaborators consumed by the harvest engine.
//
// The engine never decides on its own whether a cell earns a double drop, and
// never touches the reward code. It talks to two small seams instead:
//
// - `BonusDecider`: "does this cell earn a bonus?" Owned by the skill
//   progression system. Any `FnMut(VoxelCoord, Material) -> bool` closure is
//   a decider, which keeps tests free of scaffolding.
// - `BonusAnnotator`: "grant `amount` extra drops for this cell." Read later
//   by drop generation.
//
// `SkillBonusDecider` and `BonusAnnotations` are the stock implementations
// `HerbalismState` wires in: a skill-scaled roll on the deterministic PRNG,
// and a keyed store the drop system drains once per cell.
//
// See also: `structure_yield.rs` for when each seam is called,
// `state.rs` for the wiring.
//
// **Critical constraint: determinism.** Rolls come only from the `HarvestRng`
// passed in; annotations live in a `BTreeMap`.

use crate::config::HerbalismConfig;
use crate::prng::HarvestRng;
use crate::serde_utils::{deserialize_coord_map, serialize_coord_map};
use crate::types::{Material, VoxelCoord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bonus granted per qualifying cell without the triple modifier.
pub const BONUS_UNIT: u32 = 1;

/// Bonus granted per qualifying cell under the triple modifier.
pub const TRIPLE_BONUS_UNIT: u32 = 2;

/// Per-cell bonus amount for a harvest.
pub fn bonus_unit(triple: bool) -> u32 {
    if triple { TRIPLE_BONUS_UNIT } else { BONUS_UNIT }
}

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// Decides whether a harvested cell earns a bonus drop.
pub trait BonusDecider {
    fn should_grant_bonus(&mut self, coord: VoxelCoord, material: Material) -> bool;
}

impl<F> BonusDecider for F
where
    F: FnMut(VoxelCoord, Material) -> bool,
{
    fn should_grant_bonus(&mut self, coord: VoxelCoord, material: Material) -> bool {
        self(coord, material)
    }
}

/// Records extra drops for the drop system to hand out.
pub trait BonusAnnotator {
    /// Annotate `coord` with `amount` extra drops, replacing any earlier
    /// annotation on the same cell.
    fn mark_bonus(&mut self, coord: VoxelCoord, amount: u32);
}

// ---------------------------------------------------------------------------
// Stock implementations
// ---------------------------------------------------------------------------

/// Pending bonus annotations, keyed by cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAnnotations {
    #[serde(
        serialize_with = "serialize_coord_map",
        deserialize_with = "deserialize_coord_map"
    )]
    pending: BTreeMap<VoxelCoord, u32>,
}

impl BonusAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the annotation on `coord` without consuming it.
    pub fn get(&self, coord: VoxelCoord) -> Option<u32> {
        self.pending.get(&coord).copied()
    }

    /// Consume the annotation on `coord`. The drop system calls this exactly
    /// once when it generates the cell's drops; a second call returns 0.
    pub fn take(&mut self, coord: VoxelCoord) -> u32 {
        self.pending.remove(&coord).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Sum of all pending bonus drops.
    pub fn total(&self) -> u32 {
        self.pending.values().sum()
    }
}

impl BonusAnnotator for BonusAnnotations {
    fn mark_bonus(&mut self, coord: VoxelCoord, amount: u32) {
        self.pending.insert(coord, amount);
    }
}

/// Double-drop roll scaled by the harvesting player's skill level.
///
/// The chance grows linearly from 0 at level 0 to
/// `max_double_drop_chance` at `max_bonus_level`, then stays flat.
pub struct SkillBonusDecider<'a> {
    rng: &'a mut HarvestRng,
    chance: f64,
}

impl<'a> SkillBonusDecider<'a> {
    pub fn new(rng: &'a mut HarvestRng, skill_level: u32, config: &HerbalismConfig) -> Self {
        Self {
            rng,
            chance: double_drop_chance(skill_level, config),
        }
    }

    pub fn chance(&self) -> f64 {
        self.chance
    }
}

impl BonusDecider for SkillBonusDecider<'_> {
    fn should_grant_bonus(&mut self, _coord: VoxelCoord, _material: Material) -> bool {
        self.rng.random_bool(self.chance)
    }
}

/// Double-drop probability for `skill_level` under `config`.
pub fn double_drop_chance(skill_level: u32, config: &HerbalismConfig) -> f64 {
    if config.max_bonus_level == 0 {
        return config.max_double_drop_chance;
    }
    let level = skill_level.min(config.max_bonus_level);
    config.max_double_drop_chance * f64::from(level) / f64::from(config.max_bonus_level)
}

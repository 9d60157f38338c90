// Herbalism state owned by the host across harvest events.
//
// `HerbalismState` holds everything that must outlive a single harvest: the
// placement ledger, pending bonus annotations, Green Thumb regrowth markers,
// the PRNG that drives double-drop rolls, and the config. The world itself
// belongs to the host and is lent in per call.
//
// Flow for one harvest:
//   host resolves a break on a plant base → `harvest_structure()` →
//   `SkillBonusDecider` built from the player's skill level →
//   `structure_yield::compute_yield_of_kind()` walks the plant, consuming
//   placed flags and writing annotations → host generates `drops` items and
//   calls `take_bonus()` for each cell whose drops it spawns.
//
// Harvests are processed one at a time to completion. Each call borrows the
// ledger mutably, so two overlapping harvests cannot run at once.
//
// See also: `structure_yield.rs` for the walkers, `bonus.rs` for the
// decider and annotation store, `regrowth.rs`, `conversion.rs`.
//
// **Critical constraint: determinism.** The only randomness is `rng`; the
// caller supplies the clock. Saving and reloading mid-session continues the
// same roll sequence.

use crate::bonus::{BonusAnnotations, SkillBonusDecider};
use crate::config::HerbalismConfig;
use crate::conversion;
use crate::placement::PlacementLedger;
use crate::prng::HarvestRng;
use crate::regrowth::RegrowthMarkers;
use crate::structure_yield::{self, HarvestContext, StructureKind};
use crate::types::VoxelCoord;
use crate::world::VoxelWorld;
use serde::{Deserialize, Serialize};

/// What a harvest produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestOutcome {
    pub kind: StructureKind,
    /// Base drops for the whole structure. Bonus drops are pending in
    /// `HerbalismState::bonuses`.
    pub drops: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HerbalismState {
    pub config: HerbalismConfig,
    pub placements: PlacementLedger,
    pub bonuses: BonusAnnotations,
    pub regrowth: RegrowthMarkers,
    pub rng: HarvestRng,
}

impl HerbalismState {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, HerbalismConfig::default())
    }

    pub fn with_config(seed: u64, config: HerbalismConfig) -> Self {
        Self {
            config,
            placements: PlacementLedger::new(),
            bonuses: BonusAnnotations::new(),
            regrowth: RegrowthMarkers::new(),
            rng: HarvestRng::new(seed),
        }
    }

    /// A player placed a block at `coord`.
    pub fn record_placement(&mut self, coord: VoxelCoord) {
        self.placements.mark_placed(coord);
    }

    /// Harvest the multi-cell plant based at `base` for a player with
    /// `skill_level`. Panics if `base` is not a multi-cell plant inside
    /// `world`.
    pub fn harvest_structure(
        &mut self,
        world: &VoxelWorld,
        base: VoxelCoord,
        skill_level: u32,
        triple: bool,
    ) -> HarvestOutcome {
        let kind = structure_yield::classify_harvest_base(world, base);
        let mut decider = SkillBonusDecider::new(&mut self.rng, skill_level, &self.config);
        let mut ctx = HarvestContext {
            world,
            config: &self.config,
            ledger: &mut self.placements,
            decider: &mut decider,
            annotator: &mut self.bonuses,
        };
        let drops = structure_yield::compute_yield_of_kind(&mut ctx, kind, base, triple);
        HarvestOutcome { kind, drops }
    }

    /// Hand the pending bonus for `coord` to the drop system. 0 if none.
    pub fn take_bonus(&mut self, coord: VoxelCoord) -> u32 {
        self.bonuses.take(coord)
    }

    /// Green Thumb regrew the crop at `coord` at `now_secs`.
    pub fn mark_regrown(&mut self, coord: VoxelCoord, now_secs: u64) {
        self.regrowth.mark_regrown(coord, now_secs);
    }

    pub fn is_recently_regrown(&self, coord: VoxelCoord, now_secs: u64) -> bool {
        self.regrowth
            .is_recently_regrown(coord, now_secs, self.config.regrowth_cooldown_secs)
    }

    /// Forget regrowth markers whose cooldown has elapsed.
    pub fn prune_regrowth(&mut self, now_secs: u64) -> usize {
        self.regrowth
            .prune_expired(now_secs, self.config.regrowth_cooldown_secs)
    }

    pub fn green_terra(&self, world: &mut VoxelWorld, coord: VoxelCoord) -> bool {
        conversion::apply_green_terra(world, coord)
    }

    pub fn shroom_thumb(&self, world: &mut VoxelWorld, coord: VoxelCoord) -> bool {
        conversion::apply_shroom_thumb(world, coord)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

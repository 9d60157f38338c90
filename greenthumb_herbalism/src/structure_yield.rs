// Drop and bonus calculation for multi-cell plants.
//
// When a player breaks the base of a plant that spans several cells, the host
// asks `compute_yield()` how many drops the whole structure is worth. The
// answer depends on the structure's shape, so the base cell is first
// classified into a `StructureKind`, and each kind has its own walker:
//
// - `Branching` (chorus plant standing on end stone): depth-first walk over
//   Up/North/South/East/West neighbors, never Down, with a visited set and a
//   hard cap on visited cells (`branching_visit_cap`, 64 by default). Each
//   natural cell yields 1 and may be annotated with its own bonus.
// - `Unanchored` (chorus plant with no end stone below): worth exactly 1,
//   nothing is walked.
// - `Column` (cactus, sugar cane, bamboo): base cell, then straight up while
//   the material matches. Bonuses are summed and written once, onto the base.
// - `Kelp`: base always worth 1, then straight up while either kelp stage
//   matches. Bonuses are annotated per cell as they are found.
//
// Anti-exploit bookkeeping: a cell flagged in the `PlacementLedger` was put
// there by a player. Branching and column walks consume the flag and give the
// cell no drop. Kelp walks never consult the ledger, and the kelp base is
// counted unconditionally; tests pin both behaviors.
//
// The branching walk uses an explicit stack, pushing neighbors in reverse
// order so cells are visited in the same pre-order a recursive walk would
// use. That makes the cap deterministic: the same cells are always admitted.
//
// See also: `placement.rs` for the ledger, `bonus.rs` for the decider and
// annotator seams, `state.rs` which builds a `HarvestContext` per harvest.
//
// **Critical constraint: determinism.** Visit order is fixed by
// `BRANCH_DIRECTIONS`; the visited set is a `BTreeSet`; every random roll goes
// through the injected `BonusDecider`.

use crate::bonus::{BonusAnnotator, BonusDecider, bonus_unit};
use crate::config::HerbalismConfig;
use crate::placement::PlacementLedger;
use crate::types::{FaceDirection, Material, VoxelCoord};
use crate::world::VoxelWorld;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::collections::BTreeSet;
use std::iter;

/// The material a branching structure is made of.
pub const BRANCHING_MATERIAL: Material = Material::ChorusPlant;

/// The material a branching structure must stand on to be walked.
pub const BRANCHING_ANCHOR: Material = Material::EndStone;

/// Directions a branching walk expands into, in visit order. Down is
/// excluded: the structure grows away from its anchor.
pub const BRANCH_DIRECTIONS: [FaceDirection; 5] = [
    FaceDirection::Up,
    FaceDirection::North,
    FaceDirection::South,
    FaceDirection::East,
    FaceDirection::West,
];

/// Shape of a harvested multi-cell plant, decided once from its base cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureKind {
    Branching,
    Unanchored,
    Column,
    Kelp,
}

impl StructureKind {
    /// Classify the plant whose base is at `base`. `None` if the cell is not
    /// a multi-cell plant.
    pub fn classify(world: &VoxelWorld, base: VoxelCoord) -> Option<Self> {
        match world.get(base) {
            BRANCHING_MATERIAL => {
                if world.get(base.below()) == BRANCHING_ANCHOR {
                    Some(StructureKind::Branching)
                } else {
                    Some(StructureKind::Unanchored)
                }
            }
            m if m.is_column_plant() => Some(StructureKind::Column),
            m if m.is_kelp() => Some(StructureKind::Kelp),
            _ => None,
        }
    }
}

/// Everything one harvest computation reads and writes.
pub struct HarvestContext<'a> {
    pub world: &'a VoxelWorld,
    pub config: &'a HerbalismConfig,
    pub ledger: &'a mut PlacementLedger,
    pub decider: &'a mut dyn BonusDecider,
    pub annotator: &'a mut dyn BonusAnnotator,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Total drops for the plant based at `base`, annotating bonus drops as a
/// side effect. `triple` doubles the per-cell bonus.
///
/// Panics if `base` lies outside the world or is not a multi-cell plant; the
/// caller always hands over the cell of a harvest it has already resolved.
pub fn compute_yield(ctx: &mut HarvestContext<'_>, base: VoxelCoord, triple: bool) -> u32 {
    let kind = classify_harvest_base(ctx.world, base);
    compute_yield_of_kind(ctx, kind, base, triple)
}

/// `StructureKind::classify` for a cell the caller vouches is a harvested
/// plant base. Panics if it is outside the world or not a multi-cell plant.
pub fn classify_harvest_base(world: &VoxelWorld, base: VoxelCoord) -> StructureKind {
    assert!(
        world.in_bounds(base),
        "harvest base {base} lies outside the world"
    );
    let Some(kind) = StructureKind::classify(world, base) else {
        panic!(
            "harvest base {base} is {:?}, not a multi-cell plant",
            world.get(base)
        );
    };
    kind
}

/// Run the walker for an already classified structure.
pub fn compute_yield_of_kind(
    ctx: &mut HarvestContext<'_>,
    kind: StructureKind,
    base: VoxelCoord,
    triple: bool,
) -> u32 {
    let drops = match kind {
        StructureKind::Branching => compute_branching_yield(ctx, base, triple),
        StructureKind::Unanchored => 1,
        StructureKind::Column => compute_column_yield(ctx, base, triple),
        StructureKind::Kelp => compute_kelp_yield(ctx, base, triple),
    };
    log::debug!("harvested {kind:?} at {base}: {drops} drops (triple: {triple})");
    drops
}

// ---------------------------------------------------------------------------
// Walkers
// ---------------------------------------------------------------------------

/// Branching walk over a chorus-like structure rooted at `base`.
pub fn compute_branching_yield(
    ctx: &mut HarvestContext<'_>,
    base: VoxelCoord,
    triple: bool,
) -> u32 {
    let cap = ctx.config.branching_visit_cap;
    let unit = bonus_unit(triple);
    let mut visited: BTreeSet<VoxelCoord> = BTreeSet::new();
    let mut stack: SmallVec<[VoxelCoord; 32]> = smallvec![base];
    let mut drops = 0;

    while let Some(coord) = stack.pop() {
        if ctx.world.get(coord) != BRANCHING_MATERIAL {
            continue;
        }
        // Every later matching cell would hit the cap too.
        if visited.len() >= cap {
            log::debug!("branching walk from {base} truncated at {cap} cells");
            break;
        }
        if !visited.insert(coord) {
            continue;
        }

        if ctx.ledger.take_placed(coord) {
            log::trace!("consumed placed flag at {coord}");
        } else {
            drops += 1;
            if ctx.decider.should_grant_bonus(coord, BRANCHING_MATERIAL) {
                ctx.annotator.mark_bonus(coord, unit);
            }
        }

        for &dir in BRANCH_DIRECTIONS.iter().rev() {
            stack.push(coord.neighbor(dir));
        }
    }

    drops
}

/// Straight column of identical cells (cactus, sugar cane, bamboo). All
/// bonuses are summed and written once onto `base`, even when the sum is 0.
pub fn compute_column_yield(ctx: &mut HarvestContext<'_>, base: VoxelCoord, triple: bool) -> u32 {
    let world = ctx.world;
    let material = world.get(base);
    let unit = bonus_unit(triple);
    let mut drops = 0;
    let mut bonus = 0;

    let above = cells_above(world, base, ctx.config.max_column_scan, move |m| {
        m == material
    });
    for coord in iter::once(base).chain(above) {
        if ctx.ledger.take_placed(coord) {
            log::trace!("consumed placed flag at {coord}");
            continue;
        }
        drops += 1;
        if ctx.decider.should_grant_bonus(coord, material) {
            bonus += unit;
        }
    }

    ctx.annotator.mark_bonus(base, bonus);
    drops
}

/// Kelp column. The base is worth 1 without a ledger check or bonus roll;
/// each kelp cell above is counted and annotated on the spot.
pub fn compute_kelp_yield(ctx: &mut HarvestContext<'_>, base: VoxelCoord, triple: bool) -> u32 {
    let world = ctx.world;
    let unit = bonus_unit(triple);
    let mut drops = 1;

    for coord in cells_above(world, base, ctx.config.max_column_scan, Material::is_kelp) {
        drops += 1;
        if ctx.decider.should_grant_bonus(coord, world.get(coord)) {
            ctx.annotator.mark_bonus(coord, unit);
        }
    }

    drops
}

/// Cells directly above `base`, nearest first, while `matches` holds. At most
/// `max_scan` cells; the world top ends the run earlier since it reads `Air`.
fn cells_above<'w>(
    world: &'w VoxelWorld,
    base: VoxelCoord,
    max_scan: u32,
    matches: impl Fn(Material) -> bool + 'w,
) -> impl Iterator<Item = VoxelCoord> + 'w {
    let max_scan = i32::try_from(max_scan).unwrap_or(i32::MAX);
    (1..=max_scan)
        .map(move |dy| base.above(dy))
        .take_while(move |&coord| matches(world.get(coord)))
}

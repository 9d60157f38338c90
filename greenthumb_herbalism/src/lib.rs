// greenthumb_herbalism: multi-cell plant harvesting for a voxel world.
//
// When a player breaks the base of a plant that spans several cells (chorus,
// cactus, sugar cane, bamboo, kelp), this crate works out how many drops the
// whole structure yields, which cells earn bonus drops, and which cells were
// player-placed and must not pay out. It also carries the smaller herbalism
// mechanics the host consults around a harvest: Green Thumb regrowth markers
// and the Green Terra / Shroom Thumb block conversions.
//
// The host owns the world, the clock, and item spawning. Everything here is
// plain data plus pure-ish functions over a borrowed `VoxelWorld`.
//
// Module overview:
// - `types.rs`:           VoxelCoord, FaceDirection, Material.
// - `world.rs`:           Dense 3D material grid; out-of-bounds reads as Air.
// - `config.rs`:          HerbalismConfig: traversal limits, cooldown, bonus curve.
// - `placement.rs`:       PlacementLedger: cells a player placed, consumed on harvest.
// - `bonus.rs`:           BonusDecider / BonusAnnotator seams and their stock impls.
// - `structure_yield.rs`: Branching, column, and kelp walkers plus dispatch.
// - `regrowth.rs`:        Green Thumb regrowth markers and cooldown.
// - `conversion.rs`:      Green Terra and Shroom Thumb material tables.
// - `state.rs`:           HerbalismState: the session store that wires it all.
// - `serde_utils.rs`:     Coordinate-keyed map (de)serialization for JSON.
// - `prng`:               Re-exported from `greenthumb_prng`, xoshiro256++ seeded by SplitMix64.
//
// **Critical constraint: determinism.** Given the same world, ledger, seed,
// and call sequence, every harvest produces the same counts and annotations.
// No `HashMap`, no system time, no OS entropy. Use `BTreeMap` for ordered
// collections.

pub mod bonus;
pub mod config;
pub mod conversion;
pub mod placement;
pub use greenthumb_prng as prng;
pub mod regrowth;
pub mod serde_utils;
pub mod state;
pub mod structure_yield;
pub mod types;
pub mod world;

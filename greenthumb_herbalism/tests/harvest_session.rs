// End-to-end harvest sessions through the public `HerbalismState` API.
//
// Each test builds a small world the way a host would, records placements as
// players build, harvests, then drains bonuses the way drop generation does.
// The save/load test checks that a session resumes mid-stream with the same
// rolls.

use greenthumb_herbalism::config::HerbalismConfig;
use greenthumb_herbalism::state::{HarvestOutcome, HerbalismState};
use greenthumb_herbalism::structure_yield::StructureKind;
use greenthumb_herbalism::types::{Material, VoxelCoord};
use greenthumb_herbalism::world::VoxelWorld;

const BASE: VoxelCoord = VoxelCoord::new(10, 1, 10);

fn at(x: i32, y: i32, z: i32) -> VoxelCoord {
    VoxelCoord::new(x, y, z)
}

/// A chorus plant on end stone: a trunk of 5 with a west arm of 3 at y=3.
fn chorus_world() -> (VoxelWorld, Vec<VoxelCoord>) {
    let mut world = VoxelWorld::new(24, 24, 24);
    world.set(BASE.below(), Material::EndStone);
    let mut cells: Vec<VoxelCoord> = (1..=5).map(|y| at(10, y, 10)).collect();
    cells.extend((7..=9).map(|x| at(x, 3, 10)));
    for &c in &cells {
        world.set(c, Material::ChorusPlant);
    }
    (world, cells)
}

fn max_skill() -> u32 {
    HerbalismConfig::default().max_bonus_level
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn chorus_harvest_skips_player_placed_cells() {
    let (world, cells) = chorus_world();
    let mut state = HerbalismState::new(1);
    state.record_placement(at(8, 3, 10));
    state.record_placement(at(10, 5, 10));

    let outcome = state.harvest_structure(&world, BASE, max_skill(), false);
    assert_eq!(
        outcome,
        HarvestOutcome {
            kind: StructureKind::Branching,
            drops: 6,
        }
    );
    assert!(state.placements.is_empty());

    let mut bonus_total = 0;
    for &c in &cells {
        bonus_total += state.take_bonus(c);
    }
    assert_eq!(state.take_bonus(at(8, 3, 10)), 0);
    assert_eq!(bonus_total, 6);
    assert!(state.bonuses.is_empty());
}

#[test]
fn triple_drops_double_every_chorus_bonus() {
    let (world, cells) = chorus_world();
    let mut state = HerbalismState::new(1);
    let outcome = state.harvest_structure(&world, BASE, max_skill(), true);
    assert_eq!(outcome.drops, cells.len() as u32);
    for &c in &cells {
        assert_eq!(state.take_bonus(c), 2, "bonus at {c}");
    }
}

#[test]
fn chorus_without_end_stone_yields_one() {
    let (mut world, _) = chorus_world();
    world.set(BASE.below(), Material::Sand);
    let mut state = HerbalismState::new(1);
    state.record_placement(at(10, 2, 10));

    let outcome = state.harvest_structure(&world, BASE, max_skill(), false);
    assert_eq!(outcome.kind, StructureKind::Unanchored);
    assert_eq!(outcome.drops, 1);
    // Nothing was walked, so the flag above is still there.
    assert!(state.placements.is_placed(at(10, 2, 10)));
    assert!(state.bonuses.is_empty());
}

#[test]
fn cactus_column_ignores_neighbouring_column() {
    let mut world = VoxelWorld::new(16, 16, 16);
    world.set(BASE.below(), Material::Sand);
    world.fill_column(BASE, 3, Material::Cactus);
    world.fill_column(at(11, 1, 10), 6, Material::Cactus);

    let mut state = HerbalismState::new(3);
    let outcome = state.harvest_structure(&world, BASE, max_skill(), false);
    assert_eq!(outcome.kind, StructureKind::Column);
    assert_eq!(outcome.drops, 3);
    assert_eq!(state.take_bonus(BASE), 3);
}

#[test]
fn kelp_counts_base_even_when_placed() {
    let mut world = VoxelWorld::new(16, 16, 16);
    world.fill_column(BASE, 4, Material::KelpPlant);
    world.set(BASE.above(4), Material::Kelp);
    let mut state = HerbalismState::new(3);
    state.record_placement(BASE);
    state.record_placement(BASE.above(2));

    let outcome = state.harvest_structure(&world, BASE, max_skill(), false);
    assert_eq!(outcome.kind, StructureKind::Kelp);
    assert_eq!(outcome.drops, 5);
    // Kelp never consults the ledger.
    assert_eq!(state.placements.len(), 2);
    assert_eq!(state.take_bonus(BASE), 0);
    for dy in 1..=4 {
        assert_eq!(state.take_bonus(BASE.above(dy)), 1);
    }
}

#[test]
fn session_resumes_after_save_and_load() {
    let (world, cells) = chorus_world();
    let mut live = HerbalismState::new(2024);
    live.record_placement(at(9, 3, 10));
    live.mark_regrown(at(0, 1, 0), 30);
    live.harvest_structure(&world, BASE, max_skill() / 2, false);

    let json = live.to_json().unwrap();
    let mut loaded = HerbalismState::from_json(&json).unwrap();

    for round in 0..5 {
        let a = live.harvest_structure(&world, BASE, max_skill() / 2, round % 2 == 0);
        let b = loaded.harvest_structure(&world, BASE, max_skill() / 2, round % 2 == 0);
        assert_eq!(a, b);
        for &c in &cells {
            assert_eq!(live.take_bonus(c), loaded.take_bonus(c));
        }
    }
    assert_eq!(
        live.is_recently_regrown(at(0, 1, 0), 30),
        loaded.is_recently_regrown(at(0, 1, 0), 30)
    );
}

#[test]
fn custom_config_from_json_limits_column_scan() {
    let config = HerbalismConfig::from_json(
        r#"{
            "branching_visit_cap": 64,
            "max_column_scan": 2,
            "regrowth_cooldown_secs": 1,
            "max_double_drop_chance": 1.0,
            "max_bonus_level": 1000
        }"#,
    )
    .unwrap();
    let mut world = VoxelWorld::new(16, 16, 16);
    world.fill_column(BASE, 8, Material::SugarCane);
    let mut state = HerbalismState::with_config(0, config);
    let outcome = state.harvest_structure(&world, BASE, 0, false);
    assert_eq!(outcome.drops, 3);
}

#[test]
fn green_terra_then_shroom_thumb_on_a_patch() {
    let mut world = VoxelWorld::new(4, 1, 4);
    for x in 0..4 {
        for z in 0..4 {
            world.set(at(x, 0, z), Material::Dirt);
        }
    }
    let state = HerbalismState::new(0);
    assert!(state.green_terra(&mut world, at(0, 0, 0)));
    assert!(state.shroom_thumb(&mut world, at(0, 0, 0)));
    assert!(state.shroom_thumb(&mut world, at(1, 0, 0)));
    assert!(!state.green_terra(&mut world, at(1, 0, 0)));
    assert_eq!(world.count(Material::Mycelium), 2);
    assert_eq!(world.count(Material::Dirt), 14);
}

#[test]
#[should_panic(expected = "not a multi-cell plant")]
fn harvesting_wheat_is_a_contract_violation() {
    let mut world = VoxelWorld::new(4, 4, 4);
    world.set(at(1, 1, 1), Material::Wheat);
    HerbalismState::new(0).harvest_structure(&world, at(1, 1, 1), 0, false);
}

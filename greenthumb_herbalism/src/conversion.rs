// Single-cell material conversions for the terraforming abilities.
//
// - Green Terra: moss creeps over stone-like blocks and grass reclaims bare
//   dirt.
// - Shroom Thumb: soil turns to mycelium.
//
// Each table is a closed lookup; anything it does not list converts to
// nothing and the cell is left untouched.

use crate::types::{Material, VoxelCoord};
use crate::world::VoxelWorld;

/// Green Terra result for `material`, if it converts.
pub fn green_terra_conversion(material: Material) -> Option<Material> {
    match material {
        Material::CobblestoneWall => Some(Material::MossyCobblestoneWall),
        Material::StoneBricks => Some(Material::MossyStoneBricks),
        Material::Dirt | Material::GrassPath => Some(Material::GrassBlock),
        Material::Cobblestone => Some(Material::MossyCobblestone),
        _ => None,
    }
}

/// Shroom Thumb result for `material`, if it converts.
pub fn shroom_thumb_conversion(material: Material) -> Option<Material> {
    match material {
        Material::Dirt | Material::GrassBlock | Material::GrassPath => Some(Material::Mycelium),
        _ => None,
    }
}

/// Rewrite the cell at `coord` with Green Terra. Returns whether it changed.
pub fn apply_green_terra(world: &mut VoxelWorld, coord: VoxelCoord) -> bool {
    apply(world, coord, green_terra_conversion)
}

/// Rewrite the cell at `coord` with Shroom Thumb. Returns whether it changed.
pub fn apply_shroom_thumb(world: &mut VoxelWorld, coord: VoxelCoord) -> bool {
    apply(world, coord, shroom_thumb_conversion)
}

fn apply(
    world: &mut VoxelWorld,
    coord: VoxelCoord,
    table: fn(Material) -> Option<Material>,
) -> bool {
    match table(world.get(coord)) {
        Some(converted) => {
            world.set(coord, converted);
            true
        }
        None => false,
    }
}

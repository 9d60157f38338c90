// Dense 3D block grid for the harvest engine.
//
// The world is stored as a flat `Vec<Material>` indexed by
// `x + z * size_x + y * size_x * size_z`, giving O(1) read/write access.
// Out-of-bounds reads return `Air`; out-of-bounds writes are no-ops. Because
// `Air` never matches a plant material, every traversal in
// `structure_yield.rs` stops at the grid edge without a bounds check of its
// own.
//
// The host game owns the authoritative world; this grid is the shape the
// engine reads through (`get`, `in_bounds`) and the ability conversions write
// through (`set`). Tests build small worlds directly.
//
// See also: `types.rs` for `VoxelCoord` and `Material`,
// `structure_yield.rs` which walks plant structures over this grid,
// `conversion.rs` which rewrites single cells.

use crate::types::{Material, VoxelCoord};

/// Dense 3D block grid.
#[derive(Clone, Debug, Default)]
pub struct VoxelWorld {
    /// Flat storage: index = x + z * size_x + y * size_x * size_z.
    cells: Vec<Material>,
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
}

impl VoxelWorld {
    /// Create a new world filled with `Air`.
    pub fn new(size_x: u32, size_y: u32, size_z: u32) -> Self {
        let total = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            cells: vec![Material::Air; total],
            size_x,
            size_y,
            size_z,
        }
    }

    pub fn in_bounds(&self, coord: VoxelCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && (coord.x as u32) < self.size_x
            && (coord.y as u32) < self.size_y
            && (coord.z as u32) < self.size_z
    }

    fn index(&self, coord: VoxelCoord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        let sx = self.size_x as usize;
        let sz = self.size_z as usize;
        Some(coord.x as usize + coord.z as usize * sx + coord.y as usize * sx * sz)
    }

    /// Read a cell. Returns `Air` for out-of-bounds coordinates.
    pub fn get(&self, coord: VoxelCoord) -> Material {
        self.index(coord)
            .map(|i| self.cells[i])
            .unwrap_or(Material::Air)
    }

    /// Write a cell. No-op for out-of-bounds coordinates.
    pub fn set(&mut self, coord: VoxelCoord, material: Material) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = material;
        }
    }

    /// Stack `material` from `base` upward, `height` cells tall.
    pub fn fill_column(&mut self, base: VoxelCoord, height: i32, material: Material) {
        for dy in 0..height {
            self.set(base.above(dy), material);
        }
    }

    /// Count the cells of `material` in the whole grid.
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_all_air() {
        let world = VoxelWorld::new(3, 3, 3);
        assert_eq!(world.count(Material::Air), 27);
    }

    #[test]
    fn set_and_get() {
        let mut world = VoxelWorld::new(8, 8, 8);
        let coord = VoxelCoord::new(3, 5, 2);
        world.set(coord, Material::SugarCane);
        assert_eq!(world.get(coord), Material::SugarCane);
        assert_eq!(world.get(VoxelCoord::new(3, 5, 3)), Material::Air);
    }

    #[test]
    fn out_of_bounds_read_returns_air() {
        let world = VoxelWorld::new(4, 4, 4);
        assert_eq!(world.get(VoxelCoord::new(-1, 0, 0)), Material::Air);
        assert_eq!(world.get(VoxelCoord::new(0, 4, 0)), Material::Air);
        assert_eq!(world.get(VoxelCoord::new(0, 0, 99)), Material::Air);
    }

    #[test]
    fn out_of_bounds_write_is_noop() {
        let mut world = VoxelWorld::new(4, 4, 4);
        world.set(VoxelCoord::new(-1, 0, 0), Material::Cactus);
        world.set(VoxelCoord::new(0, 100, 0), Material::Cactus);
        assert_eq!(world.count(Material::Cactus), 0);
    }

    #[test]
    fn default_world_is_empty() {
        let world = VoxelWorld::default();
        assert_eq!((world.size_x, world.size_y, world.size_z), (0, 0, 0));
        assert!(!world.in_bounds(VoxelCoord::new(0, 0, 0)));
        assert_eq!(world.get(VoxelCoord::new(0, 0, 0)), Material::Air);
    }

    #[test]
    fn indexing_keeps_cells_distinct() {
        let mut world = VoxelWorld::new(10, 8, 6);
        let coord = VoxelCoord::new(5, 3, 4);
        world.set(coord, Material::Bamboo);
        assert_eq!(world.get(coord), Material::Bamboo);
        assert_eq!(world.get(VoxelCoord::new(4, 3, 4)), Material::Air);
        assert_eq!(world.get(VoxelCoord::new(5, 2, 4)), Material::Air);
        assert_eq!(world.get(VoxelCoord::new(5, 3, 3)), Material::Air);
        assert_eq!(world.count(Material::Bamboo), 1);
    }

    #[test]
    fn fill_column_clips_at_world_top() {
        let mut world = VoxelWorld::new(4, 5, 4);
        world.fill_column(VoxelCoord::new(1, 2, 1), 10, Material::Cactus);
        assert_eq!(world.count(Material::Cactus), 3);
        assert_eq!(world.get(VoxelCoord::new(1, 4, 1)), Material::Cactus);
    }
}

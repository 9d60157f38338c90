// Core types shared across the herbalism crate.
//
// Defines grid coordinates (`VoxelCoord`), the six face directions used to
// walk between adjacent cells (`FaceDirection`), and the closed set of cell
// materials (`Material`) the harvest engine and the ability conversions
// understand. All types derive `Serialize` and `Deserialize` so ledgers keyed
// by coordinate can be saved and restored.
//
// See also: `world.rs` for the grid that stores `Material` values,
// `structure_yield.rs` for how materials map to structure kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 3D block grid. Each component is in cell units.
///
/// The coordinate system uses right-handed conventions:
/// - X: east  (positive) / west  (negative)
/// - Y: up    (positive) / down  (negative)
/// - Z: south (positive) / north (negative)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The face-adjacent cell in `dir`.
    pub fn neighbor(self, dir: FaceDirection) -> Self {
        let (dx, dy, dz) = dir.to_offset();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The cell `n` steps straight up.
    pub fn above(self, n: i32) -> Self {
        Self::new(self.x, self.y + n, self.z)
    }

    pub fn below(self) -> Self {
        self.neighbor(FaceDirection::Down)
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six faces of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceDirection {
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl FaceDirection {
    pub const ALL: [FaceDirection; 6] = [
        FaceDirection::Up,
        FaceDirection::Down,
        FaceDirection::North,
        FaceDirection::South,
        FaceDirection::East,
        FaceDirection::West,
    ];

    /// Unit offset `(dx, dy, dz)` toward this face.
    pub const fn to_offset(self) -> (i32, i32, i32) {
        match self {
            FaceDirection::Up => (0, 1, 0),
            FaceDirection::Down => (0, -1, 0),
            FaceDirection::North => (0, 0, -1),
            FaceDirection::South => (0, 0, 1),
            FaceDirection::East => (1, 0, 0),
            FaceDirection::West => (-1, 0, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            FaceDirection::Up => FaceDirection::Down,
            FaceDirection::Down => FaceDirection::Up,
            FaceDirection::North => FaceDirection::South,
            FaceDirection::South => FaceDirection::North,
            FaceDirection::East => FaceDirection::West,
            FaceDirection::West => FaceDirection::East,
        }
    }
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

/// The material of a single cell in the world grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Air,
    Dirt,
    GrassBlock,
    GrassPath,
    Mycelium,
    Sand,
    Water,
    EndStone,
    Cobblestone,
    MossyCobblestone,
    CobblestoneWall,
    MossyCobblestoneWall,
    StoneBricks,
    MossyStoneBricks,
    ChorusPlant,
    ChorusFlower,
    Cactus,
    SugarCane,
    Bamboo,
    /// Kelp tip (still growing).
    Kelp,
    /// Kelp stem below the tip.
    KelpPlant,
    Wheat,
}

impl Material {
    /// Both kelp growth stages count as the same column.
    pub fn is_kelp(self) -> bool {
        matches!(self, Material::Kelp | Material::KelpPlant)
    }

    /// Plants that grow as a straight stack of identical cells.
    pub fn is_column_plant(self) -> bool {
        matches!(self, Material::Cactus | Material::SugarCane | Material::Bamboo)
    }
}

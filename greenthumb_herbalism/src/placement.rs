// Placement ledger: which cells were put there by a player.
//
// A harvest only pays out for cells that grew naturally. When a player places
// a plant cell the host records it here (`mark_placed`); the first harvest
// traversal that walks over the cell consumes the flag and denies the cell
// its base drop. Consumption is one-shot, so a cell that later regrows on the
// same spot is treated as natural again.
//
// Unknown cells read as not placed. The ledger is a plain store passed by
// `&mut` into each traversal (see `structure_yield.rs`), never ambient global
// state, and it serializes as part of `HerbalismState`.
//
// **Critical constraint: determinism.** Backed by a `BTreeSet` so the saved
// form is ordered and identical across runs.

use crate::types::VoxelCoord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of cells flagged as artificially placed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementLedger {
    placed: BTreeSet<VoxelCoord>,
}

impl PlacementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a player placement event at `coord`.
    pub fn mark_placed(&mut self, coord: VoxelCoord) {
        self.placed.insert(coord);
    }

    pub fn is_placed(&self, coord: VoxelCoord) -> bool {
        self.placed.contains(&coord)
    }

    pub fn clear_placed(&mut self, coord: VoxelCoord) {
        self.placed.remove(&coord);
    }

    /// Read and clear in one step. Returns whether the flag was set.
    pub fn take_placed(&mut self, coord: VoxelCoord) -> bool {
        self.placed.remove(&coord)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_cells_are_not_placed() {
        let ledger = PlacementLedger::new();
        assert!(!ledger.is_placed(VoxelCoord::new(0, 0, 0)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn mark_then_clear() {
        let mut ledger = PlacementLedger::new();
        let c = VoxelCoord::new(2, 3, 4);
        ledger.mark_placed(c);
        assert!(ledger.is_placed(c));
        ledger.clear_placed(c);
        assert!(!ledger.is_placed(c));
        // Clearing an absent flag is harmless.
        ledger.clear_placed(c);
        assert!(ledger.is_empty());
    }

    #[test]
    fn take_placed_consumes_once() {
        let mut ledger = PlacementLedger::new();
        let c = VoxelCoord::new(1, 1, 1);
        ledger.mark_placed(c);
        assert!(ledger.take_placed(c));
        assert!(!ledger.take_placed(c));
        assert!(!ledger.is_placed(c));
    }

    #[test]
    fn marking_twice_keeps_one_entry() {
        let mut ledger = PlacementLedger::new();
        let c = VoxelCoord::new(5, 0, 5);
        ledger.mark_placed(c);
        ledger.mark_placed(c);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn ledger_serialization_roundtrip() {
        let mut ledger = PlacementLedger::new();
        ledger.mark_placed(VoxelCoord::new(3, 1, 0));
        ledger.mark_placed(VoxelCoord::new(-4, 2, 8));
        let json = serde_json::to_string(&ledger).unwrap();
        let restored: PlacementLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, restored);
        assert!(restored.is_placed(VoxelCoord::new(-4, 2, 8)));
    }
}

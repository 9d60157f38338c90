// Green Thumb regrowth markers and their cooldown check.
//
// When Green Thumb replants a crop, the host stamps the cell with the current
// time. For `regrowth_cooldown_secs` afterwards the cell counts as "recently
// regrown", which the host uses to ignore the replanted crop for another
// Green Thumb pass or skill credit.
//
// Time is whole seconds on a clock the caller supplies, never read from the
// system here. A marker set at `t` is active while `now < t + cooldown`.
//
// See also: `config.rs` for the cooldown, `state.rs` for the owning store.

use crate::serde_utils::{deserialize_coord_map, serialize_coord_map};
use crate::types::VoxelCoord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Regrowth timestamps keyed by cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegrowthMarkers {
    #[serde(
        serialize_with = "serialize_coord_map",
        deserialize_with = "deserialize_coord_map"
    )]
    marked_at: BTreeMap<VoxelCoord, u64>,
}

impl RegrowthMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `coord` as regrown at `now_secs`, replacing any older stamp.
    pub fn mark_regrown(&mut self, coord: VoxelCoord, now_secs: u64) {
        self.marked_at.insert(coord, now_secs);
    }

    pub fn marked_at(&self, coord: VoxelCoord) -> Option<u64> {
        self.marked_at.get(&coord).copied()
    }

    pub fn clear(&mut self, coord: VoxelCoord) {
        self.marked_at.remove(&coord);
    }

    /// Whether `coord` carries a marker still inside its cooldown window.
    /// A cell with no marker is never recently regrown.
    pub fn is_recently_regrown(&self, coord: VoxelCoord, now_secs: u64, cooldown_secs: u64) -> bool {
        self.marked_at(coord)
            .is_some_and(|t| cooldown_active(t, cooldown_secs, now_secs))
    }

    /// Drop every marker whose window has closed. Returns how many went.
    pub fn prune_expired(&mut self, now_secs: u64, cooldown_secs: u64) -> usize {
        let before = self.marked_at.len();
        self.marked_at
            .retain(|_, &mut t| cooldown_active(t, cooldown_secs, now_secs));
        before - self.marked_at.len()
    }

    pub fn len(&self) -> usize {
        self.marked_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked_at.is_empty()
    }
}

/// `true` while `now_secs` is before `started_secs + cooldown_secs`.
pub fn cooldown_active(started_secs: u64, cooldown_secs: u64, now_secs: u64) -> bool {
    now_secs < started_secs.saturating_add(cooldown_secs)
}

// Serde helpers for maps keyed by `VoxelCoord`.
//
// JSON object keys must be strings, so a `BTreeMap<VoxelCoord, V>` cannot be
// written as a JSON object. These helpers store it as a sequence of
// `[coord, value]` pairs instead, in key order. Use with
// `#[serde(serialize_with = "...", deserialize_with = "...")]`.

use crate::types::VoxelCoord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

pub fn serialize_coord_map<S, V>(map: &BTreeMap<VoxelCoord, V>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    s.collect_seq(map.iter())
}

pub fn deserialize_coord_map<'de, D, V>(d: D) -> Result<BTreeMap<VoxelCoord, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let pairs = Vec::<(VoxelCoord, V)>::deserialize(d)?;
    Ok(pairs.into_iter().collect())
}

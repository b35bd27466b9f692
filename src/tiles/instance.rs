//! Tile instances - runtime tile state.
//!
//! `TileInstance` represents a specific placed tile on a board. Each tile
//! type appears exactly twice per deal, so an instance is fully identified
//! by its type plus a copy index of 0 or 1.

use serde::{Deserialize, Serialize};

use super::definition::TileTypeId;

/// Unique identifier for a placed tile.
///
/// Derived from the tile type and copy index, so it is stable across
/// shuffles of the same catalog: `raw = type_id * 2 + copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Derive the instance ID for one copy of a tile type.
    #[must_use]
    pub const fn of_copy(type_id: TileTypeId, copy: u8) -> Self {
        Self(type_id.raw() * 2 + copy as u32)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A placed tile on a board.
///
/// Tracks the one piece of mutable state a tile has: whether it has been
/// matched and removed from play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileInstance {
    /// Unique ID for this placed tile.
    pub instance_id: InstanceId,

    /// Reference to the tile definition.
    pub type_id: TileTypeId,

    /// Which of the two copies this is (0 or 1).
    pub copy: u8,

    /// Has this tile been matched?
    pub matched: bool,
}

impl TileInstance {
    /// Create an unmatched instance of a tile type.
    ///
    /// Panics if `copy` is not 0 or 1; each type has exactly two copies.
    #[must_use]
    pub fn new(type_id: TileTypeId, copy: u8) -> Self {
        assert!(copy < 2, "Each tile type has exactly two copies");
        Self {
            instance_id: InstanceId::of_copy(type_id, copy),
            type_id,
            copy,
            matched: false,
        }
    }

    /// Check whether this tile pairs with another.
    ///
    /// Two tiles pair when they share a type but are distinct instances.
    #[must_use]
    pub fn pairs_with(&self, other: &TileInstance) -> bool {
        self.type_id == other.type_id && self.instance_id != other.instance_id
    }
}

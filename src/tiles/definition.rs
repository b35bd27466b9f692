//! Tile definitions - static tile data.
//!
//! `TileDefinition` holds the immutable properties of a tile type.
//! For example, the East Wind tile renders the 東 symbol in black -
//! these are part of the definition.
//!
//! Instance-specific data (the matched flag, the board position) is
//! stored separately in `TileInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile type.
///
/// This identifies the "kind" of tile (e.g., "East Wind"), not a specific
/// placed tile on a board. Ids are dense: the catalog assigns them in
/// registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileTypeId(pub u32);

impl TileTypeId {
    /// Create a new tile type ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TileType({})", self.0)
    }
}

/// Color category of a tile symbol.
///
/// The engine never interprets colors; they are carried for the view
/// layer, which maps them to its own styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Red,
    Green,
    Black,
    Gray,
}

/// Static tile definition.
///
/// Contains the unchanging data about a tile type: a stable string key
/// (survives catalog reordering, unlike the dense id), a display name,
/// the symbol to render, and a color category.
///
/// ## Example
///
/// ```
/// use tile_match::tiles::{TileColor, TileDefinition, TileTypeId};
///
/// let east = TileDefinition::new(
///     TileTypeId::new(0),
///     "wind-east",
///     "East Wind",
///     "東",
///     TileColor::Black,
/// );
///
/// assert_eq!(east.symbol, "東");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Unique identifier for this tile type.
    pub id: TileTypeId,

    /// Stable string key (e.g. "wind-east").
    pub key: String,

    /// Display name (for debugging/UI).
    pub name: String,

    /// Symbol the view layer renders.
    pub symbol: String,

    /// Color category for the symbol.
    pub color: TileColor,
}

impl TileDefinition {
    /// Create a new tile definition.
    #[must_use]
    pub fn new(
        id: TileTypeId,
        key: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        color: TileColor,
    ) -> Self {
        Self {
            id,
            key: key.into(),
            name: name.into(),
            symbol: symbol.into(),
            color,
        }
    }
}

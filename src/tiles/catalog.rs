//! Tile catalog for definition lookup.
//!
//! The `TileCatalog` stores the fixed set of tile types a session deals
//! from. Ids are assigned densely in registration order, which keeps deal
//! order stable for a given catalog and makes seeded shuffles reproducible.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{TileColor, TileDefinition, TileTypeId};

/// Registry of tile definitions.
///
/// Registration order is meaningful: it fixes the pre-shuffle deal order.
///
/// ## Example
///
/// ```
/// use tile_match::tiles::{TileCatalog, TileColor};
///
/// let mut catalog = TileCatalog::new();
/// let east = catalog.register("wind-east", "East Wind", "東", TileColor::Black);
///
/// let found = catalog.get(east).unwrap();
/// assert_eq!(found.name, "East Wind");
/// assert_eq!(catalog.lookup("wind-east"), Some(east));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TileCatalog {
    tiles: Vec<TileDefinition>,
    by_key: FxHashMap<String, TileTypeId>,
}

impl TileCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic 18-type mahjong catalog.
    ///
    /// Zhong and Fa, bamboos 1-3, characters 1-3, circles 1-3, the four
    /// winds, and the three dragons.
    #[must_use]
    pub fn classic() -> Self {
        let mut catalog = Self::new();

        catalog.register("zhong", "Zhong", "中", TileColor::Red);
        catalog.register("fa", "Fa", "發", TileColor::Green);
        catalog.register("bamboo1", "Bamboo 1", "🎋", TileColor::Green);
        catalog.register("bamboo2", "Bamboo 2", "🎋🎋", TileColor::Green);
        catalog.register("bamboo3", "Bamboo 3", "🎋🎋🎋", TileColor::Green);
        catalog.register("character1", "Character 1", "一", TileColor::Black);
        catalog.register("character2", "Character 2", "二", TileColor::Black);
        catalog.register("character3", "Character 3", "三", TileColor::Black);
        catalog.register("circle1", "Circle 1", "●", TileColor::Red);
        catalog.register("circle2", "Circle 2", "●●", TileColor::Red);
        catalog.register("circle3", "Circle 3", "●●●", TileColor::Red);
        catalog.register("wind-east", "East Wind", "東", TileColor::Black);
        catalog.register("wind-south", "South Wind", "南", TileColor::Black);
        catalog.register("wind-west", "West Wind", "西", TileColor::Black);
        catalog.register("wind-north", "North Wind", "北", TileColor::Black);
        catalog.register("dragon-green", "Green Dragon", "龍", TileColor::Green);
        catalog.register("dragon-red", "Red Dragon", "龍", TileColor::Red);
        catalog.register("dragon-white", "White Dragon", "白", TileColor::Gray);

        catalog
    }

    /// Register a tile type and return its assigned ID.
    ///
    /// Panics if a type with the same key is already registered.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        color: TileColor,
    ) -> TileTypeId {
        let key = key.into();
        if self.by_key.contains_key(&key) {
            panic!("Tile type with key {:?} already registered", key);
        }

        let id = TileTypeId::new(self.tiles.len() as u32);
        self.by_key.insert(key.clone(), id);
        self.tiles
            .push(TileDefinition::new(id, key, name, symbol, color));
        id
    }

    /// Get a tile definition by ID.
    #[must_use]
    pub fn get(&self, id: TileTypeId) -> Option<&TileDefinition> {
        self.tiles.get(id.raw() as usize)
    }

    /// Look up a tile type ID by its stable string key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<TileTypeId> {
        self.by_key.get(key).copied()
    }

    /// Check if a tile type ID is registered.
    #[must_use]
    pub fn contains(&self, id: TileTypeId) -> bool {
        (id.raw() as usize) < self.tiles.len()
    }

    /// Get the number of registered tile types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tile definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TileDefinition> {
        self.tiles.iter()
    }

    /// Find tile types matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &TileDefinition>
    where
        F: Fn(&TileDefinition) -> bool,
    {
        self.tiles.iter().filter(move |t| predicate(t))
    }
}

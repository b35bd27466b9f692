//! The board: an ordered sequence of placed tiles.
//!
//! A board is dealt from a catalog by emitting exactly two instances of
//! every tile type and then applying one uniform shuffle. Positions are
//! plain indices into the sequence; the view layer decides how to lay
//! them out in a grid.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::tiles::{TileCatalog, TileInstance, TileTypeId};

/// An ordered sequence of tile instances.
///
/// The board owns matched bookkeeping but no game rules: selection,
/// scoring, and timing live in [`MatchSession`].
///
/// [`MatchSession`]: crate::session::MatchSession
///
/// ## Example
///
/// ```
/// use tile_match::board::Board;
/// use tile_match::core::GameRng;
/// use tile_match::tiles::TileCatalog;
///
/// let catalog = TileCatalog::classic();
/// let mut rng = GameRng::new(42);
/// let board = Board::deal(&catalog, &mut rng);
///
/// assert_eq!(board.len(), 2 * catalog.len());
/// assert_eq!(board.matched_count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<TileInstance>,
}

impl Board {
    /// Deal a fresh board: two copies of every catalog type, shuffled.
    #[must_use]
    pub fn deal(catalog: &TileCatalog, rng: &mut GameRng) -> Self {
        let mut tiles = Vec::with_capacity(catalog.len() * 2);
        for def in catalog.iter() {
            tiles.push(TileInstance::new(def.id, 0));
            tiles.push(TileInstance::new(def.id, 1));
        }

        rng.shuffle(&mut tiles);

        Self { tiles }
    }

    /// Number of tiles on the board (matched tiles included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the board has no tiles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get the tile at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&TileInstance> {
        self.tiles.get(position)
    }

    /// All tiles in board order.
    #[must_use]
    pub fn tiles(&self) -> &[TileInstance] {
        &self.tiles
    }

    /// The tile type at a position, if the position is on the board.
    #[must_use]
    pub fn type_at(&self, position: usize) -> Option<TileTypeId> {
        self.tiles.get(position).map(|t| t.type_id)
    }

    /// Number of tiles already matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count()
    }

    /// Check if every tile has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(|t| t.matched)
    }

    /// Positions still in play, in board order.
    pub fn unmatched_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.matched)
            .map(|(i, _)| i)
    }

    /// Mark the tile at `position` matched. No-op when out of range.
    pub(crate) fn mark_matched(&mut self, position: usize) {
        if let Some(tile) = self.tiles.get_mut(position) {
            tile.matched = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn small_catalog(n: u32) -> TileCatalog {
        let mut catalog = TileCatalog::new();
        for i in 0..n {
            catalog.register(
                format!("t{i}"),
                format!("Type {i}"),
                format!("{i}"),
                crate::tiles::TileColor::Black,
            );
        }
        catalog
    }

    #[test]
    fn test_deal_size() {
        let catalog = small_catalog(4);
        let mut rng = GameRng::new(1);
        let board = Board::deal(&catalog, &mut rng);

        assert_eq!(board.len(), 8);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_deal_two_of_each_type() {
        let catalog = small_catalog(6);
        let mut rng = GameRng::new(99);
        let board = Board::deal(&catalog, &mut rng);

        let mut counts: FxHashMap<TileTypeId, usize> = FxHashMap::default();
        for tile in board.tiles() {
            *counts.entry(tile.type_id).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_deal_nothing_matched() {
        let catalog = small_catalog(5);
        let mut rng = GameRng::new(3);
        let board = Board::deal(&catalog, &mut rng);

        assert_eq!(board.matched_count(), 0);
        assert!(!board.all_matched());
        assert_eq!(board.unmatched_positions().count(), board.len());
    }

    #[test]
    fn test_deal_deterministic_for_seed() {
        let catalog = small_catalog(8);
        let board1 = Board::deal(&catalog, &mut GameRng::new(42));
        let board2 = Board::deal(&catalog, &mut GameRng::new(42));

        assert_eq!(board1, board2);
    }

    #[test]
    fn test_deal_varies_with_seed() {
        let catalog = small_catalog(8);
        let board1 = Board::deal(&catalog, &mut GameRng::new(1));
        let board2 = Board::deal(&catalog, &mut GameRng::new(2));

        assert_ne!(board1, board2);
    }

    #[test]
    fn test_position_access() {
        let catalog = small_catalog(2);
        let mut rng = GameRng::new(0);
        let board = Board::deal(&catalog, &mut rng);

        assert!(board.get(0).is_some());
        assert!(board.get(3).is_some());
        assert!(board.get(4).is_none());
        assert_eq!(board.type_at(0), Some(board.tiles()[0].type_id));
        assert_eq!(board.type_at(99), None);
    }

    #[test]
    fn test_mark_matched() {
        let catalog = small_catalog(2);
        let mut rng = GameRng::new(0);
        let mut board = Board::deal(&catalog, &mut rng);

        board.mark_matched(1);

        assert!(board.get(1).unwrap().matched);
        assert_eq!(board.matched_count(), 1);
        assert!(board.unmatched_positions().all(|p| p != 1));

        // Out of range is a no-op
        board.mark_matched(99);
        assert_eq!(board.matched_count(), 1);
    }

    #[test]
    fn test_all_matched() {
        let catalog = small_catalog(2);
        let mut rng = GameRng::new(0);
        let mut board = Board::deal(&catalog, &mut rng);

        for position in 0..board.len() {
            board.mark_matched(position);
        }

        assert!(board.all_matched());
        assert_eq!(board.unmatched_positions().count(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let catalog = small_catalog(3);
        let mut rng = GameRng::new(11);
        let board = Board::deal(&catalog, &mut rng);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}

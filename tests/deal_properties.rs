//! Property tests for dealing and the no-op guarantees.

use std::time::Duration;

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use tile_match::{
    Board, GameRng, MatchSession, SessionPhase, TileCatalog, TileColor, TileTypeId,
};

fn catalog(n: u32) -> TileCatalog {
    let mut catalog = TileCatalog::new();
    for i in 0..n {
        catalog.register(
            format!("t{i}"),
            format!("Type {i}"),
            format!("{i}"),
            TileColor::Black,
        );
    }
    catalog
}

/// The observable state a no-op must leave untouched.
fn snapshot(session: &MatchSession) -> (Board, Vec<usize>, u32, u32, SessionPhase, usize) {
    (
        session.board().clone(),
        session.selection().positions().to_vec(),
        session.score(),
        session.multiplier(),
        session.phase(),
        session.history().len(),
    )
}

proptest! {
    /// Dealing emits exactly two instances of every catalog type.
    #[test]
    fn deal_is_a_permutation_of_pairs(seed in any::<u64>(), n in 1u32..24) {
        let catalog = catalog(n);
        let board = Board::deal(&catalog, &mut GameRng::new(seed));

        prop_assert_eq!(board.len(), 2 * n as usize);

        let mut counts: FxHashMap<TileTypeId, usize> = FxHashMap::default();
        for tile in board.tiles() {
            prop_assert!(!tile.matched);
            *counts.entry(tile.type_id).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), n as usize);
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    /// The same seed always deals the same board.
    #[test]
    fn deal_is_deterministic(seed in any::<u64>(), n in 1u32..24) {
        let catalog = catalog(n);
        let board1 = Board::deal(&catalog, &mut GameRng::new(seed));
        let board2 = Board::deal(&catalog, &mut GameRng::new(seed));

        prop_assert_eq!(board1, board2);
    }

    /// A fresh session starts in the dealt-and-unsolved state.
    #[test]
    fn fresh_session_invariants(seed in any::<u64>(), n in 1u32..24) {
        let session = MatchSession::new(catalog(n), seed);

        prop_assert_eq!(session.score(), 0);
        prop_assert_eq!(session.multiplier(), 1);
        prop_assert!(session.selection().is_empty());
        prop_assert!(!session.is_won());
        prop_assert!(!session.is_mismatch());
        prop_assert!(!session.is_locked());
        prop_assert_eq!(session.phase(), SessionPhase::Idle);
    }

    /// Out-of-range selects change nothing, wherever they land.
    #[test]
    fn out_of_range_select_is_noop(seed in any::<u64>(), n in 1u32..12, offset in 0usize..100) {
        let mut session = MatchSession::new(catalog(n), seed);
        let position = session.board().len() + offset;

        let before = snapshot(&session);
        session.select(position);

        prop_assert_eq!(snapshot(&session), before);
    }

    /// Select-then-deselect returns to the pre-select observable state
    /// (modulo the two history entries it legitimately appends).
    #[test]
    fn toggle_off_restores_state(seed in any::<u64>(), n in 1u32..12) {
        let mut session = MatchSession::new(catalog(n), seed);
        let position = (seed as usize) % session.board().len();

        let before = snapshot(&session);
        session.select(position);
        session.select(position);
        let after = snapshot(&session);

        prop_assert_eq!(after.0, before.0);
        prop_assert_eq!(after.1, before.1);
        prop_assert_eq!(after.2, before.2);
        prop_assert_eq!(after.3, before.3);
        prop_assert_eq!(after.4, before.4);
        prop_assert_eq!(after.5, before.5 + 2);
    }

    /// Time passing with nothing pending changes nothing.
    #[test]
    fn idle_advance_is_noop(seed in any::<u64>(), n in 1u32..12, millis in 0u64..10_000) {
        let mut session = MatchSession::new(catalog(n), seed);

        let before = snapshot(&session);
        session.advance(Duration::from_millis(millis));

        prop_assert_eq!(snapshot(&session), before);
    }
}

//! The match session: selection, resolution, scoring, win detection.
//!
//! `MatchSession` owns the full lifecycle of one game: deal, selects,
//! delayed pair resolution, score and multiplier bookkeeping, win
//! detection, and restart. It is single-threaded and event-driven: every
//! mutation happens inside [`MatchSession::select`] or
//! [`MatchSession::advance`], and at most one resolution is ever in
//! flight.
//!
//! The session emits state only. A rendering collaborator reads the board,
//! selection, flags, and history after each call and decides how to
//! present them.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Action, ActionRecord, GameRng, SessionConfig};
use crate::tiles::TileCatalog;

use super::resolver::{PendingResolution, ResolutionKind};
use super::state::{Selection, SessionPhase};

/// What a call to [`MatchSession::select`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The position joined the selection.
    Selected,
    /// The position was the sole selection entry and was toggled off.
    Deselected,
    /// The selection completed a pair; a resolution is now pending.
    Staged(ResolutionKind),
    /// The input was dropped without touching any state.
    Ignored(IgnoreReason),
}

/// Why a select was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The session is already won; restart to play again.
    AlreadyWon,
    /// A resolution is in flight; input is dropped, not queued.
    Locked,
    /// The position is not on the board.
    OutOfBounds,
    /// The tile at the position has already been matched.
    AlreadyMatched,
}

/// What a call to [`MatchSession::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Nothing was pending.
    Idle,
    /// The pending resolution has not reached its deadline yet.
    Waiting,
    /// A matched pair settled and was scored.
    Matched {
        /// The two settled positions, in pick order.
        positions: [usize; 2],
        /// Points awarded (base points x multiplier at settle time).
        points: u32,
    },
    /// A mismatch cleared: selection emptied, multiplier reset.
    MismatchCleared,
}

/// One tile-matching game session.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use tile_match::session::MatchSession;
/// use tile_match::tiles::TileCatalog;
///
/// let mut session = MatchSession::new(TileCatalog::classic(), 42);
///
/// // Find both copies of the tile type dealt to position 0.
/// let target = session.board().tiles()[0].type_id;
/// let pair: Vec<usize> = (0..session.board().len())
///     .filter(|&p| session.board().type_at(p) == Some(target))
///     .collect();
///
/// session.select(pair[0]);
/// session.select(pair[1]);
/// session.advance(Duration::from_millis(500));
///
/// assert_eq!(session.score(), 10);
/// assert_eq!(session.multiplier(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MatchSession {
    catalog: TileCatalog,
    config: SessionConfig,
    rng: GameRng,
    board: Board,
    selection: Selection,
    score: u32,
    multiplier: u32,
    won: bool,
    mismatch: bool,
    pending: Option<PendingResolution>,
    history: Vector<ActionRecord>,
    sequence: u32,
}

impl MatchSession {
    /// Start a session over a catalog with the default configuration.
    ///
    /// Panics if the catalog is empty; a game needs at least one pair.
    #[must_use]
    pub fn new(catalog: TileCatalog, seed: u64) -> Self {
        Self::with_config(catalog, SessionConfig::default(), seed)
    }

    /// Start a session with an explicit configuration.
    #[must_use]
    pub fn with_config(catalog: TileCatalog, config: SessionConfig, seed: u64) -> Self {
        assert!(!catalog.is_empty(), "Catalog must contain at least one tile type");

        let mut rng = GameRng::new(seed);
        let board = Board::deal(&catalog, &mut rng);

        Self {
            catalog,
            config,
            rng,
            board,
            selection: Selection::new(),
            score: 0,
            multiplier: 1,
            won: false,
            mismatch: false,
            pending: None,
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// Choose the tile at `position`.
    ///
    /// Selecting an already-selected sole entry toggles it off. Completing
    /// a pair stages a resolution and locks the session until the delay
    /// elapses under [`MatchSession::advance`]. Input at the wrong moment
    /// (won, locked, matched tile, off-board position) is dropped and
    /// reported, never an error.
    pub fn select(&mut self, position: usize) -> SelectOutcome {
        if self.won {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyWon);
        }
        if self.pending.is_some() {
            return SelectOutcome::Ignored(IgnoreReason::Locked);
        }
        let matched = match self.board.get(position) {
            Some(tile) => tile.matched,
            None => return SelectOutcome::Ignored(IgnoreReason::OutOfBounds),
        };
        if matched {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }

        // A leftover full pair would mean a resolution failed to clear the
        // selection. Unreachable while the lock holds, kept as a guard.
        if self.selection.pair().is_some() {
            self.selection.clear();
            self.mismatch = false;
        }

        if self.selection.remove(position) {
            self.record(Action::deselect(position));
            return SelectOutcome::Deselected;
        }

        self.selection.push(position);
        self.record(Action::select(position));

        match self.selection.pair() {
            Some((first, second)) => {
                let kind = self.stage(first, second);
                SelectOutcome::Staged(kind)
            }
            None => SelectOutcome::Selected,
        }
    }

    /// Advance session time by `elapsed`.
    ///
    /// This is the only timer primitive: the pending resolution counts
    /// down here and applies its mutation once due. Callers with no timing
    /// requirements (tests, solvers) can pass the configured delay, or use
    /// [`SessionConfig::instant`] and advance by zero.
    pub fn advance(&mut self, elapsed: Duration) -> TickOutcome {
        let due = match self.pending.as_mut() {
            Some(pending) => pending.tick(elapsed),
            None => return TickOutcome::Idle,
        };
        if !due {
            return TickOutcome::Waiting;
        }

        match self.pending.take() {
            Some(resolution) => self.settle(resolution),
            None => TickOutcome::Idle,
        }
    }

    /// Abandon the current game and deal a fresh one.
    ///
    /// All mutable state resets; any pending resolution is discarded. The
    /// RNG stream continues, so successive restarts deal different boards
    /// while the whole session stays reproducible from the original seed.
    pub fn restart(&mut self) {
        self.board = Board::deal(&self.catalog, &mut self.rng);
        self.selection.clear();
        self.score = 0;
        self.multiplier = 1;
        self.won = false;
        self.mismatch = false;
        self.pending = None;
        self.history = Vector::new();
        self.sequence = 0;
    }

    // === Observable state ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current streak multiplier (1 up to the configured cap).
    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Has every tile been matched?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Is mismatch feedback currently showing?
    ///
    /// Set the moment a mismatched pair is staged, cleared when the
    /// mismatch resolution settles.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        self.mismatch
    }

    /// Is a resolution in flight? Selects are dropped while locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// The in-flight resolution, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    /// Where the session is in its lifecycle.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.won {
            SessionPhase::Won
        } else if self.pending.is_some() {
            SessionPhase::Resolving
        } else if self.selection.len() == 1 {
            SessionPhase::OneSelected
        } else {
            SessionPhase::Idle
        }
    }

    /// Every accepted action this game, oldest first.
    ///
    /// The persistent vector makes snapshots cheap: a renderer or recorder
    /// can clone the history each frame without copying it.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The catalog this session deals from.
    #[must_use]
    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The deal seed, for replays.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Internals ===

    /// Stage the completed pair for delayed resolution.
    fn stage(&mut self, first: usize, second: usize) -> ResolutionKind {
        let is_match = self
            .board
            .get(first)
            .zip(self.board.get(second))
            .is_some_and(|(a, b)| a.pairs_with(b));

        let (kind, delay) = if is_match {
            (ResolutionKind::Match, self.config.settle_delay)
        } else {
            // Mismatch feedback shows immediately; the reset waits.
            self.mismatch = true;
            (ResolutionKind::Mismatch, self.config.mismatch_delay)
        };

        self.pending = Some(PendingResolution::new(kind, [first, second], delay));
        kind
    }

    /// Apply a due resolution and unlock.
    fn settle(&mut self, resolution: PendingResolution) -> TickOutcome {
        let [first, second] = resolution.positions();

        match resolution.kind() {
            ResolutionKind::Match => {
                self.board.mark_matched(first);
                self.board.mark_matched(second);

                let points = self.config.match_points * self.multiplier;
                self.score += points;
                self.selection.clear();
                self.multiplier = (self.multiplier + 1).min(self.config.multiplier_cap);

                self.record(Action::match_settled(first, second));
                self.check_win();

                TickOutcome::Matched {
                    positions: [first, second],
                    points,
                }
            }
            ResolutionKind::Mismatch => {
                self.selection.clear();
                self.mismatch = false;
                self.multiplier = 1;

                self.record(Action::mismatch_cleared(first, second));

                TickOutcome::MismatchCleared
            }
        }
    }

    /// Set the won flag once every tile is matched.
    fn check_win(&mut self) {
        if self.board.all_matched() {
            self.won = true;
        }
    }

    fn record(&mut self, action: Action) {
        self.sequence += 1;
        self.history.push_back(ActionRecord::new(
            self.sequence,
            action,
            self.score,
            self.multiplier,
        ));
    }
}

//! # tile-match
//!
//! A tile-matching memory game engine with deterministic replay.
//!
//! ## Design Principles
//!
//! 1. **State, not presentation**: The engine emits board/selection/score
//!    state and an action history. Rendering, assets, and animation belong
//!    to the caller.
//!
//! 2. **Caller-driven time**: Delayed resolutions count down under
//!    [`advance`](session::MatchSession::advance); the engine never reads
//!    a wall clock. Scenarios are fully deterministic under a seed.
//!
//! 3. **Drop, don't queue**: At most one pair resolution is in flight.
//!    Input during the locked window is dropped and reported, never
//!    buffered.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, actions and history records
//! - `tiles`: Tile definitions, instances, and the catalog
//! - `board`: The dealt, shuffled tile sequence
//! - `session`: The game state machine (selection, resolution, scoring)
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use tile_match::{MatchSession, SessionPhase, TileCatalog};
//!
//! let mut session = MatchSession::new(TileCatalog::classic(), 42);
//! session.select(0);
//! assert_eq!(session.phase(), SessionPhase::OneSelected);
//!
//! session.select(0); // toggle back off
//! assert_eq!(session.phase(), SessionPhase::Idle);
//! ```

pub mod board;
pub mod core;
pub mod session;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, GameRng, GameRngState, SessionConfig,
};

pub use crate::tiles::{
    InstanceId, TileCatalog, TileColor, TileDefinition, TileInstance, TileTypeId,
};

pub use crate::board::Board;

pub use crate::session::{
    IgnoreReason, MatchSession, PendingResolution, ResolutionKind, SelectOutcome, Selection,
    SessionPhase, TickOutcome,
};

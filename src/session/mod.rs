//! The session state machine: selection, delayed resolution, scoring.
//!
//! ## Key Types
//!
//! - `MatchSession`: One game from deal to win
//! - `Selection`: The 0-2 positions currently chosen
//! - `PendingResolution`: The single in-flight delayed mutation
//! - `SelectOutcome` / `TickOutcome`: What each call did
//!
//! ## Timing
//!
//! The engine holds no clock. `select` stages work, `advance` moves time
//! forward and settles whatever comes due. One resolution at most is in
//! flight; input during that window is dropped, not queued.

pub mod engine;
pub mod resolver;
pub mod state;

pub use engine::{IgnoreReason, MatchSession, SelectOutcome, TickOutcome};
pub use resolver::{PendingResolution, ResolutionKind};
pub use state::{Selection, SessionPhase};

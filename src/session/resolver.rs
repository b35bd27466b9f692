//! Delayed pair resolution.
//!
//! When a second tile is selected the outcome is already decided, but the
//! state mutation is deferred behind a delay so the view layer can render
//! transient feedback (selected pulse, mismatch shake) first. The session
//! holds at most one `PendingResolution`; while it is in flight the
//! engine is locked and further selects are dropped.
//!
//! The engine never reads a wall clock. Callers advance time explicitly,
//! which keeps resolution deterministic and unit-testable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome a staged pair will settle to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionKind {
    /// Both tiles share a type: they will be marked matched and scored.
    Match,
    /// Types differ: selection will be cleared and the multiplier reset.
    Mismatch,
}

/// The single in-flight delayed mutation.
///
/// Counts down under [`MatchSession::advance`]; when the delay elapses
/// the session applies the mutation and unlocks. No cancellation exists
/// since no new pair can be staged while one is pending.
///
/// [`MatchSession::advance`]: crate::session::MatchSession::advance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    kind: ResolutionKind,
    positions: [usize; 2],
    remaining: Duration,
}

impl PendingResolution {
    pub(crate) fn new(kind: ResolutionKind, positions: [usize; 2], delay: Duration) -> Self {
        Self {
            kind,
            positions,
            remaining: delay,
        }
    }

    /// How this pair will settle.
    #[must_use]
    pub fn kind(&self) -> ResolutionKind {
        self.kind
    }

    /// The two staged board positions, in pick order.
    #[must_use]
    pub fn positions(&self) -> [usize; 2] {
        self.positions
    }

    /// Delay still to elapse before the pair settles.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Count down by `elapsed`. Returns true once the resolution is due.
    ///
    /// Surplus time past the deadline is discarded; there is never a
    /// second timer to hand it to.
    pub(crate) fn tick(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.remaining.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_due() {
        let mut pending = PendingResolution::new(
            ResolutionKind::Match,
            [0, 3],
            Duration::from_millis(500),
        );

        assert_eq!(pending.remaining(), Duration::from_millis(500));
        assert!(!pending.tick(Duration::from_millis(200)));
        assert_eq!(pending.remaining(), Duration::from_millis(300));
        assert!(pending.tick(Duration::from_millis(300)));
        assert_eq!(pending.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_overshoot_saturates() {
        let mut pending = PendingResolution::new(
            ResolutionKind::Mismatch,
            [1, 2],
            Duration::from_millis(100),
        );

        assert!(pending.tick(Duration::from_secs(10)));
        assert_eq!(pending.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_zero_delay_due_immediately() {
        let mut pending =
            PendingResolution::new(ResolutionKind::Match, [0, 1], Duration::ZERO);

        assert!(pending.tick(Duration::ZERO));
    }

    #[test]
    fn test_accessors() {
        let pending = PendingResolution::new(
            ResolutionKind::Mismatch,
            [4, 7],
            Duration::from_millis(1000),
        );

        assert_eq!(pending.kind(), ResolutionKind::Mismatch);
        assert_eq!(pending.positions(), [4, 7]);
    }

    #[test]
    fn test_serde_round_trip() {
        let pending = PendingResolution::new(
            ResolutionKind::Match,
            [2, 5],
            Duration::from_millis(500),
        );

        let json = serde_json::to_string(&pending).unwrap();
        let deserialized: PendingResolution = serde_json::from_str(&json).unwrap();

        assert_eq!(pending, deserialized);
    }
}

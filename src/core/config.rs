//! Session configuration.
//!
//! `SessionConfig` fixes the timing and scoring knobs for one session:
//! how long a matched pair takes to settle, how long mismatch feedback
//! stays visible, how many points a match is worth, and where the streak
//! multiplier caps out.
//!
//! The defaults reproduce the classic game: 500 ms settle, 1000 ms
//! mismatch feedback, 10 points per match, multiplier capped at 5.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and scoring configuration for a session.
///
/// The delays are timing contracts for the view layer, not algorithmic
/// necessities: they give a renderer a window to show selected/shake
/// feedback before the engine resets the selection.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use tile_match::core::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_settle_delay(Duration::from_millis(250))
///     .with_match_points(25);
///
/// assert_eq!(config.match_points, 25);
/// assert_eq!(config.multiplier_cap, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Delay between staging a matched pair and marking it matched.
    pub settle_delay: Duration,

    /// Delay between staging a mismatched pair and clearing the selection.
    pub mismatch_delay: Duration,

    /// Base points awarded per matched pair (multiplied by the streak).
    pub match_points: u32,

    /// Upper bound for the streak multiplier (inclusive, at least 1).
    pub multiplier_cap: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(500),
            mismatch_delay: Duration::from_millis(1000),
            match_points: 10,
            multiplier_cap: 5,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with zero delays.
    ///
    /// Resolutions settle on the very next [`advance`] call, which is
    /// convenient for headless drivers and tests.
    ///
    /// [`advance`]: crate::session::MatchSession::advance
    #[must_use]
    pub fn instant() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            mismatch_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Set the match settle delay.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the mismatch feedback delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the base points per match.
    #[must_use]
    pub fn with_match_points(mut self, points: u32) -> Self {
        self.match_points = points;
        self
    }

    /// Set the multiplier cap.
    ///
    /// Panics if `cap` is zero; the multiplier is always at least 1.
    #[must_use]
    pub fn with_multiplier_cap(mut self, cap: u32) -> Self {
        assert!(cap >= 1, "Multiplier cap must be at least 1");
        self.multiplier_cap = cap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_game() {
        let config = SessionConfig::default();

        assert_eq!(config.settle_delay, Duration::from_millis(500));
        assert_eq!(config.mismatch_delay, Duration::from_millis(1000));
        assert_eq!(config.match_points, 10);
        assert_eq!(config.multiplier_cap, 5);
    }

    #[test]
    fn test_instant_zeroes_delays_only() {
        let config = SessionConfig::instant();

        assert_eq!(config.settle_delay, Duration::ZERO);
        assert_eq!(config.mismatch_delay, Duration::ZERO);
        assert_eq!(config.match_points, 10);
        assert_eq!(config.multiplier_cap, 5);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_settle_delay(Duration::from_millis(100))
            .with_mismatch_delay(Duration::from_millis(200))
            .with_match_points(50)
            .with_multiplier_cap(3);

        assert_eq!(config.settle_delay, Duration::from_millis(100));
        assert_eq!(config.mismatch_delay, Duration::from_millis(200));
        assert_eq!(config.match_points, 50);
        assert_eq!(config.multiplier_cap, 3);
    }

    #[test]
    #[should_panic(expected = "Multiplier cap must be at least 1")]
    fn test_zero_cap_panics() {
        let _ = SessionConfig::new().with_multiplier_cap(0);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SessionConfig::default().with_match_points(20);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}

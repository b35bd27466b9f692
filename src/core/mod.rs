//! Core engine types: RNG, configuration, actions.
//!
//! This module contains the fundamental building blocks that are not tied
//! to the tile system or the session state machine.

pub mod action;
pub mod config;
pub mod rng;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::SessionConfig;
pub use rng::{GameRng, GameRngState};

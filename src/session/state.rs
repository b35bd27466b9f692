//! Selection tracking and the session phase.
//!
//! The selection is the transient set of 0-2 board positions currently
//! chosen. It never grows past two entries; a full pair is handed to the
//! resolver and cleared when the resolution settles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The 0-2 board positions currently chosen.
///
/// Insertion order is preserved: `positions()[0]` is the first pick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    slots: SmallVec<[usize; 2]>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected positions (0, 1, or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if a position is currently selected.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.slots.contains(&position)
    }

    /// Selected positions in pick order.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.slots
    }

    /// The completed pair, if exactly two positions are selected.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.slots.as_slice() {
            &[first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Add a position. The selection never holds more than two entries.
    pub(crate) fn push(&mut self, position: usize) {
        assert!(self.slots.len() < 2, "Selection already holds a full pair");
        self.slots.push(position);
    }

    /// Remove a position if present. Returns whether it was selected.
    pub(crate) fn remove(&mut self, position: usize) -> bool {
        match self.slots.iter().position(|&p| p == position) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clear the selection.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Where a session currently is in its lifecycle.
///
/// `Idle ⇄ OneSelected → Resolving → Idle … → Won`; `Won` is terminal
/// until the next restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Nothing selected, input accepted.
    Idle,
    /// One tile selected, waiting for its partner.
    OneSelected,
    /// A pair is staged; input is dropped until the resolution settles.
    Resolving,
    /// Every tile matched. Terminal until restart.
    Won,
}

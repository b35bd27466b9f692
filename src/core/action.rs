//! Action representation: verb + board positions.
//!
//! Actions are compositional: a kind (the "verb") plus the board positions
//! it touched (the "nouns"). For example:
//! - "Select tile 3" = `Select` + 1 position
//! - "Pair at 3 and 7 settled" = `MatchSettled` + 2 positions
//!
//! Accepted actions are appended to the session history, which is enough
//! for a view layer to animate changes or for a recorder to replay a game
//! from the deal seed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The kinds of action a session records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// A tile was added to the selection.
    Select,
    /// A selected tile was toggled back off.
    Deselect,
    /// A matched pair settled: both tiles left the game.
    MatchSettled,
    /// A mismatched pair was cleared after its feedback window.
    MismatchCleared,
}

/// A completed session action.
///
/// ## Example
///
/// ```
/// use tile_match::core::{Action, ActionKind};
///
/// let select = Action::select(3);
/// assert_eq!(select.kind, ActionKind::Select);
/// assert_eq!(select.positions(), &[3]);
///
/// let settled = Action::match_settled(3, 7);
/// assert_eq!(settled.positions(), &[3, 7]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// What happened.
    pub kind: ActionKind,

    /// Board positions involved.
    /// SmallVec keeps the 1-2 position case off the heap.
    pub positions: SmallVec<[usize; 2]>,
}

impl Action {
    /// A tile selection at `position`.
    #[must_use]
    pub fn select(position: usize) -> Self {
        Self {
            kind: ActionKind::Select,
            positions: SmallVec::from_slice(&[position]),
        }
    }

    /// A toggle-off deselection at `position`.
    #[must_use]
    pub fn deselect(position: usize) -> Self {
        Self {
            kind: ActionKind::Deselect,
            positions: SmallVec::from_slice(&[position]),
        }
    }

    /// A settled match at the two positions.
    #[must_use]
    pub fn match_settled(first: usize, second: usize) -> Self {
        Self {
            kind: ActionKind::MatchSettled,
            positions: SmallVec::from_slice(&[first, second]),
        }
    }

    /// A cleared mismatch at the two positions.
    #[must_use]
    pub fn mismatch_cleared(first: usize, second: usize) -> Self {
        Self {
            kind: ActionKind::MismatchCleared,
            positions: SmallVec::from_slice(&[first, second]),
        }
    }

    /// Board positions involved in this action.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// A recorded action with scoring context for history tracking.
///
/// Used for:
/// - Change feeds for a rendering collaborator
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number within the session (starts at 1).
    pub sequence: u32,

    /// The action taken.
    pub action: Action,

    /// Cumulative score after the action.
    pub score_after: u32,

    /// Multiplier after the action.
    pub multiplier_after: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action, score_after: u32, multiplier_after: u32) -> Self {
        Self {
            sequence,
            action,
            score_after,
            multiplier_after,
        }
    }
}

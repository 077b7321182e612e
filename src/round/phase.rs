//! Round phases and outcomes.

use serde::{Deserialize, Serialize};

/// Where the game currently stands.
///
/// Phases move in a fixed cycle: Idle -> Revealing -> AwaitingInput ->
/// Evaluating -> Feedback, then back to Revealing (next round) or Idle
/// (game over). Every transition is driven by a command or a timer,
/// never by rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round in progress.
    Idle,
    /// Target sequence visible; reveal countdown running.
    Revealing,
    /// Target hidden; the player fills the answer buffer.
    AwaitingInput,
    /// Buffer comparison in progress.
    Evaluating,
    /// Outcome on display; resolution pending.
    Feedback,
}

impl RoundPhase {
    /// Check whether drag input is accepted in this phase.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::AwaitingInput)
    }

    /// Check whether a round is underway (any phase but Idle).
    #[must_use]
    pub fn in_round(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// How a finished round resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The buffer matched the target exactly.
    Success,
    /// Mismatch, unfilled slot, or input timeout.
    Failure,
}

impl RoundOutcome {
    /// Check if the round was cleared.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

//! Round events: the engine's observable output.
//!
//! Every mutating engine call returns the events it produced, in the
//! order they happened. Hosts render from events or diff views; the
//! engine never calls out.

use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::phase::{RoundOutcome, RoundPhase};

/// Something the engine did in response to a command or a time advance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A round began at `level`; a target was drawn and is now visible.
    RoundStarted { level: u32 },

    /// The phase moved from `from` to `to`.
    PhaseChanged { from: RoundPhase, to: RoundPhase },

    /// The countdown stepped; `remaining_ms` of the budget is left.
    CountdownTicked { remaining_ms: u64 },

    /// The reveal countdown hit zero; the target is now hidden.
    TargetHidden,

    /// A color was picked up for dragging.
    ColorPicked { color: Color },

    /// A slot took a color; `replaced` is what the slot held before.
    SlotFilled {
        slot: usize,
        color: Color,
        replaced: Option<Color>,
    },

    /// The input countdown ran out; the round evaluates as a failure.
    InputTimedOut,

    /// The answer was evaluated.
    RoundEvaluated { outcome: RoundOutcome },

    /// The level counter moved (up on success, back on reset).
    LevelChanged { from: u32, to: u32 },

    /// The game was torn down to Idle by an explicit reset.
    GameReset,
}

impl RoundEvent {
    /// Check whether this event is a phase transition.
    #[must_use]
    pub fn is_phase_change(&self) -> bool {
        matches!(self, Self::PhaseChanged { .. })
    }
}

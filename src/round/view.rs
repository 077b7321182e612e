//! Observable round state.

use serde::{Deserialize, Serialize};

use crate::core::TargetSequence;

use super::buffer::AnswerBuffer;
use super::phase::{RoundOutcome, RoundPhase};

/// Snapshot of everything a renderer may see.
///
/// The target appears only while the phase is Revealing. Once the
/// reveal ends the view carries no trace of it, so a renderer working
/// from views alone cannot leak the answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Current phase.
    pub phase: RoundPhase,

    /// Current level. Equals the sequence length for the active round.
    pub level: u32,

    /// The target colors, present only during Revealing.
    pub target: Option<TargetSequence>,

    /// Answer slots as the player has filled them so far.
    pub buffer: AnswerBuffer,

    /// Remaining budget of the running countdown, if one runs.
    pub time_left_ms: Option<u64>,

    /// Total budget of the running countdown.
    pub time_total_ms: Option<u64>,

    /// Outcome of the most recently evaluated round, if any.
    pub last_outcome: Option<RoundOutcome>,
}

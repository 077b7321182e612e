//! Player commands and the history ledger.
//!
//! Commands are requests, not guarantees: the engine ignores any
//! command that doesn't apply to the current phase. Accepted commands
//! are recorded as `CommandRecord`s for replay and debugging.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A player-facing command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Begin a round from Idle.
    StartGame,
    /// Pick up a color for dragging.
    PickUp { color: Color },
    /// Drop the picked-up color onto an answer slot.
    DropAt { slot: usize },
    /// Submit the current answer for evaluation.
    CheckAnswer,
    /// Abandon the game and return to Idle.
    Reset,
}

/// A recorded command with metadata for history tracking.
///
/// Only accepted commands are recorded; ignored ones leave no trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command taken.
    pub command: Command,

    /// Level in effect when the command was accepted.
    pub level: u32,

    /// Engine time when the command was accepted, in milliseconds.
    pub at_ms: u64,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, level: u32, at_ms: u64) -> Self {
        Self {
            command,
            level,
            at_ms,
        }
    }
}

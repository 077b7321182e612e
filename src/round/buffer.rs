//! Answer buffer: the player's in-progress reproduction of the target.
//!
//! ```
//! use brain_paint::{AnswerBuffer, Color};
//!
//! let empty = AnswerBuffer::empty(3);
//! let one = empty.assign(1, Color::new(4));
//!
//! // `assign` produced a new value; the original is untouched.
//! assert_eq!(empty.get(1), None);
//! assert_eq!(one.get(1), Some(Color::new(4)));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Color, TargetSequence};

/// The player's answer slots for one round.
///
/// A persistent value type: `assign` returns a new buffer and leaves
/// the receiver untouched, so every observed buffer state is a
/// distinct value. Cloning is O(1) via structural sharing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerBuffer {
    slots: Vector<Option<Color>>,
}

impl AnswerBuffer {
    /// Create a buffer with `len` empty slots.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            slots: std::iter::repeat(None).take(len).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether the buffer has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The color in a slot, if the slot exists and is filled.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.slots.get(slot).copied().flatten()
    }

    /// Assign a color to a slot, returning the updated buffer.
    ///
    /// Later assignments to the same slot overwrite earlier ones.
    /// An out-of-range slot returns the buffer unchanged.
    #[must_use]
    pub fn assign(&self, slot: usize, color: Color) -> Self {
        if slot >= self.slots.len() {
            return self.clone();
        }

        Self {
            slots: self.slots.update(slot, Some(color)),
        }
    }

    /// An empty buffer of the same length.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::empty(self.slots.len())
    }

    /// Count of filled slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check whether every slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Compare against a target: same length, every slot filled with
    /// the color at the same position. Any empty slot fails the match.
    #[must_use]
    pub fn matches(&self, target: &TargetSequence) -> bool {
        self.slots.len() == target.len()
            && self
                .slots
                .iter()
                .enumerate()
                .all(|(index, slot)| *slot == target.get(index))
    }

    /// Iterate the slots in order.
    pub fn slots(&self) -> impl Iterator<Item = Option<Color>> + '_ {
        self.slots.iter().copied()
    }
}

//! Target sequences: the ordered colors a round asks the player to recall.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{Color, Palette};
use super::rng::GameRng;

/// The hidden color sequence for one round.
///
/// Length equals the level that drew it. A sequence is immutable once
/// drawn; the next round draws a fresh value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSequence {
    /// Colors in presentation order.
    /// SmallVec keeps early levels (the common case) off the heap.
    colors: SmallVec<[Color; 8]>,
}

impl TargetSequence {
    /// Draw a sequence of `length` colors uniformly from the palette.
    ///
    /// Each slot is an independent draw, so colors repeat freely.
    #[must_use]
    pub fn draw(palette: &Palette, length: usize, rng: &mut GameRng) -> Self {
        let mut colors = SmallVec::with_capacity(length);
        for _ in 0..length {
            colors.push(palette.draw(rng));
        }

        Self { colors }
    }

    /// Build a sequence from explicit colors (for tests and replays).
    #[must_use]
    pub fn from_colors(colors: &[Color]) -> Self {
        Self {
            colors: SmallVec::from_slice(colors),
        }
    }

    /// Number of colors in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check whether the sequence has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// The colors as a slice, in presentation order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

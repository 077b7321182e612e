//! Color palette types.
//!
//! The engine never hardcodes a color set. Hosts define the colors in
//! play via `Palette`; `Color` is an opaque index into it, compared
//! only for equality.
//!
//! ## Usage
//!
//! ```
//! use brain_paint::{Color, Palette};
//!
//! let palette = Palette::classic();
//! assert_eq!(palette.len(), 6);
//! assert!(palette.contains(Color::new(5)));
//! assert!(!palette.contains(Color::new(6)));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Palette color identifier.
///
/// The engine doesn't interpret color values - they're opaque indices
/// into a `Palette`. Hosts assign meaning via `Swatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// Display information for one palette entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// Human-readable name (for debugging/display).
    pub name: String,

    /// CSS-style hex value the host renders with.
    pub hex: String,
}

impl Swatch {
    /// Create a new swatch.
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// An ordered set of swatches defining the colors in play.
///
/// `Color(i)` refers to the swatch at index `i`. Order is significant
/// and stable for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Create a palette from swatches.
    ///
    /// The order given here is the order `Color` indices refer to.
    #[must_use]
    pub fn new(swatches: Vec<Swatch>) -> Self {
        assert!(swatches.len() >= 2, "Palette needs at least 2 colors");
        assert!(swatches.len() <= 255, "At most 255 colors supported");

        Self { swatches }
    }

    /// The classic six-color palette.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(vec![
            Swatch::new("green", "#2ecc71"),
            Swatch::new("red", "#e74c3c"),
            Swatch::new("yellow", "#f1c40f"),
            Swatch::new("purple", "#9b59b6"),
            Swatch::new("orange", "#e67e22"),
            Swatch::new("blue", "#3498db"),
        ])
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Check whether the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Check if a color refers to an entry in this palette.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        (color.0 as usize) < self.swatches.len()
    }

    /// Get the swatch for a color.
    #[must_use]
    pub fn swatch(&self, color: Color) -> Option<&Swatch> {
        self.swatches.get(color.0 as usize)
    }

    /// Iterate all colors in palette order.
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        (0..self.swatches.len() as u8).map(Color)
    }

    /// Draw a uniformly random color from this palette.
    pub fn draw(&self, rng: &mut GameRng) -> Color {
        let index = rng.gen_range_usize(0..self.swatches.len());
        Color(index as u8)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

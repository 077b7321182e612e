//! Drag-and-drop payload handoff.
//!
//! Rendering toolkits own the actual drag gesture. The engine only
//! needs the payload half: a pick-up records which color travels, a
//! drop consumes it.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Payload slot between pick-up and drop.
///
/// At most one color is in flight at a time. Picking up again replaces
/// the payload, the same way a pointer can only drag one thing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragContext {
    payload: Option<Color>,
}

impl DragContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a picked-up color, replacing any previous payload.
    pub fn pick_up(&mut self, color: Color) {
        self.payload = Some(color);
    }

    /// Peek at the in-flight payload.
    #[must_use]
    pub fn payload(&self) -> Option<Color> {
        self.payload
    }

    /// Take the payload, leaving the context empty.
    ///
    /// `None` means nothing was picked up; callers treat such a drop
    /// as one to ignore.
    pub fn take(&mut self) -> Option<Color> {
        self.payload.take()
    }

    /// Discard the payload without delivering it anywhere.
    pub fn clear(&mut self) {
        self.payload = None;
    }
}

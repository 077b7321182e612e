//! Deterministic timer queue.
//!
//! The engine never reads a wall clock. Hosts own time: they report
//! elapsed milliseconds, and the queue turns those reports into due
//! timers. Tests drive time directly, so every timing path replays
//! exactly.
//!
//! ## Timers Are Data
//!
//! Each entry carries a payload value describing what should happen
//! when it fires; the owner interprets payloads as `advance_next`
//! hands them back. No callbacks, no borrows held across firings.
//!
//! ## Ordering
//!
//! `advance_next` releases timers in deadline order. Timers sharing a
//! deadline release in the order they were scheduled.
//!
//! ## Usage
//!
//! ```
//! use brain_paint::clock::TimerQueue;
//!
//! let mut queue = TimerQueue::new();
//! let id = queue.schedule_after(100, "hide target");
//!
//! assert_eq!(queue.advance_next(250), Some((id, "hide target")));
//! assert_eq!(queue.now_ms(), 100);
//!
//! // Nothing else due: time moves to the window end.
//! assert_eq!(queue.advance_next(250), None);
//! assert_eq!(queue.now_ms(), 250);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled timer.
///
/// Ids are never reused within a queue's lifetime, so a stored handle
/// can always be compared against later firings without ambiguity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Create a new timer ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A pending one-shot timer.
#[derive(Clone, Debug)]
struct PendingTimer<T> {
    /// Absolute due time in engine milliseconds.
    deadline_ms: u64,
    /// Scheduling order. Breaks ties among equal deadlines.
    sequence: u64,
    /// Payload handed back when the timer fires.
    payload: T,
}

/// Deterministic one-shot timer queue.
///
/// Owns engine time (`now_ms`) and every pending timer. Time moves
/// only through `advance_next`, and only forward.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    /// Engine time in milliseconds.
    now_ms: u64,
    /// Monotonic id source; doubles as the scheduling sequence.
    next_id: u64,
    /// Pending timers keyed by id. Cancellation removes eagerly.
    pending: FxHashMap<TimerId, PendingTimer<T>>,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: FxHashMap::default(),
        }
    }

    /// Current engine time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Check whether nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Check whether a handle is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Schedule a one-shot timer `delay_ms` from now.
    ///
    /// Returns the handle that identifies this timer in `cancel` calls
    /// and `advance_next` results. A zero delay is due on the very next
    /// advance.
    pub fn schedule_after(&mut self, delay_ms: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.pending.insert(
            id,
            PendingTimer {
                deadline_ms: self.now_ms.saturating_add(delay_ms),
                sequence: id.0,
                payload,
            },
        );

        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns `true` if the timer was still pending. A cancelled timer
    /// can never fire; cancelling an already-fired or unknown handle
    /// returns `false` and changes nothing.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Release the next timer due at or before `until_ms`.
    ///
    /// Moves engine time to the released timer's deadline and hands
    /// back its id and payload. When nothing is due in the window,
    /// moves time to `until_ms` and returns `None`.
    ///
    /// Callers drain a window by looping until `None`; timers scheduled
    /// between calls land in the same window if their deadline fits.
    /// A `until_ms` in the past is treated as now: time never rewinds.
    pub fn advance_next(&mut self, until_ms: u64) -> Option<(TimerId, T)> {
        let until_ms = until_ms.max(self.now_ms);

        let due = self
            .pending
            .iter()
            .filter(|(_, timer)| timer.deadline_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.deadline_ms, timer.sequence))
            .map(|(&id, _)| id);

        match due.and_then(|id| self.pending.remove(&id).map(|timer| (id, timer))) {
            Some((id, timer)) => {
                self.now_ms = timer.deadline_ms.max(self.now_ms);
                Some((id, timer.payload))
            }
            None => {
                self.now_ms = until_ms;
                None
            }
        }
    }

    /// Drop every pending timer without firing. Engine time keeps its
    /// value.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Round lifecycle: phases, answer buffer, events, and the engine.
//!
//! `GameEngine` is the entry point; the other types here are what it
//! accepts and emits. Hosts render from `RoundView` snapshots and
//! react to `RoundEvent` values.

pub mod buffer;
pub mod event;
pub mod machine;
pub mod phase;
pub mod view;

pub use buffer::AnswerBuffer;
pub use event::RoundEvent;
pub use machine::GameEngine;
pub use phase::{RoundOutcome, RoundPhase};
pub use view::RoundView;

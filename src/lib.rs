//! # brain-paint
//!
//! A deterministic round engine for a color-sequence memory game.
//!
//! Each round shows the player a random color sequence for a limited
//! time, hides it, and asks them to rebuild it by dragging colors into
//! slots. A correct answer lengthens the sequence by one; a wrong one
//! ends the game. This crate is the engine only: phases, countdowns,
//! drag input, evaluation, and level progression, with no rendering
//! and no I/O.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No UI toolkit, no event loop, no wall clock.
//!    Hosts feed commands and elapsed time in; events and views come
//!    out.
//!
//! 2. **Deterministic**: All randomness flows through a single seeded
//!    RNG and all time through a single timer queue, so a seed plus a
//!    command history replays a session exactly.
//!
//! 3. **Values Over Callbacks**: State transitions return `RoundEvent`
//!    values instead of invoking handlers. Hosts decide what reacting
//!    means.
//!
//! ## Modules
//!
//! - `core`: Colors, palettes, sequences, RNG, configuration, commands
//! - `clock`: Deterministic timer queue driven by explicit advances
//! - `input`: Drag-and-drop gesture state
//! - `round`: Phases, answer buffer, events, and the `GameEngine`
//!
//! ## Quick Start
//!
//! ```
//! use brain_paint::{Command, GameConfig, GameEngine, RoundPhase};
//!
//! let mut engine = GameEngine::new(GameConfig::default(), 42);
//!
//! // Begin a game: the target sequence becomes visible.
//! engine.apply(Command::StartGame);
//! assert_eq!(engine.phase(), RoundPhase::Revealing);
//!
//! // Run the reveal countdown out; input opens and the target hides.
//! engine.advance(5_000);
//! assert_eq!(engine.phase(), RoundPhase::AwaitingInput);
//! assert_eq!(engine.view().target, None);
//! ```

pub mod clock;
pub mod core;
pub mod input;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    Color, Palette, Swatch,
    GameRng,
    TargetSequence,
    FailureRecovery, GameConfig,
    Command, CommandRecord,
};

pub use crate::clock::{TimerId, TimerQueue};

pub use crate::input::DragContext;

pub use crate::round::{
    AnswerBuffer, GameEngine, RoundEvent, RoundOutcome, RoundPhase, RoundView,
};

//! Core types: colors, RNG, target sequences, configuration, commands.
//!
//! These are the building blocks the round engine is assembled from.
//! Hosts configure them via `GameConfig` rather than modifying the core.

pub mod color;
pub mod rng;
pub mod sequence;
pub mod config;
pub mod command;

pub use color::{Color, Palette, Swatch};
pub use rng::GameRng;
pub use sequence::TargetSequence;
pub use config::{FailureRecovery, GameConfig};
pub use command::{Command, CommandRecord};

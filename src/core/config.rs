//! Game configuration.
//!
//! Hosts configure the engine at startup: which colors are in play,
//! where the level counter starts, how long each timed phase lasts,
//! and what happens to the level after a failure. The engine never
//! hardcodes these - `GameConfig::default()` is just the classic rules.
//!
//! ```
//! use brain_paint::{FailureRecovery, GameConfig};
//!
//! let config = GameConfig::default()
//!     .with_start_level(3)
//!     .with_tick_interval_ms(1_000)
//!     .with_failure_recovery(FailureRecovery::RetrySameLevel);
//!
//! assert_eq!(config.start_level, 3);
//! assert_eq!(config.tick_interval_ms, 1_000);
//! ```

use serde::{Deserialize, Serialize};

use super::color::Palette;

/// What happens to the level after a failed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureRecovery {
    /// Return to Idle at the starting level (classic rules).
    ResetLevel,
    /// Keep the level; the next round starts right away with a freshly
    /// drawn sequence.
    RetrySameLevel,
}

/// Complete engine configuration.
///
/// All durations are in milliseconds of engine time, the same unit
/// hosts report through `GameEngine::advance`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Colors in play.
    pub palette: Palette,

    /// Level (and so sequence length) a new game starts at.
    pub start_level: u32,

    /// How long the target stays visible.
    pub reveal_budget_ms: u64,

    /// Countdown granularity. Remaining time drops by this much per tick.
    pub tick_interval_ms: u64,

    /// How long the feedback phase lasts before the round resolves.
    pub feedback_delay_ms: u64,

    /// Optional time limit for the input phase. `None` means untimed.
    pub input_budget_ms: Option<u64>,

    /// Level policy after a failed round.
    pub failure_recovery: FailureRecovery,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Palette::classic(),
            start_level: 2,
            reveal_budget_ms: 5_000,
            tick_interval_ms: 100,
            feedback_delay_ms: 1_500,
            input_budget_ms: None,
            failure_recovery: FailureRecovery::ResetLevel,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom palette and classic rules.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Set the starting level.
    #[must_use]
    pub fn with_start_level(mut self, level: u32) -> Self {
        assert!(level >= 1, "Start level must be at least 1");
        self.start_level = level;
        self
    }

    /// Set the reveal budget.
    #[must_use]
    pub fn with_reveal_budget_ms(mut self, ms: u64) -> Self {
        assert!(ms > 0, "Reveal budget must be positive");
        self.reveal_budget_ms = ms;
        self
    }

    /// Set the countdown tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        assert!(ms > 0, "Tick interval must be positive");
        self.tick_interval_ms = ms;
        self
    }

    /// Set the feedback delay.
    #[must_use]
    pub fn with_feedback_delay_ms(mut self, ms: u64) -> Self {
        self.feedback_delay_ms = ms;
        self
    }

    /// Put a time limit on the input phase.
    #[must_use]
    pub fn with_input_budget_ms(mut self, ms: u64) -> Self {
        assert!(ms > 0, "Input budget must be positive");
        self.input_budget_ms = Some(ms);
        self
    }

    /// Set the failure recovery policy.
    #[must_use]
    pub fn with_failure_recovery(mut self, policy: FailureRecovery) -> Self {
        self.failure_recovery = policy;
        self
    }
}

//! The round state machine.
//!
//! `GameEngine` drives the whole recall loop: draw and reveal a target,
//! hide it, take drag input into the answer buffer, evaluate, show
//! feedback, then either advance the level or end the game. Hosts call
//! the command methods when the player acts and `advance` as wall time
//! passes; every call returns the events it produced.
//!
//! ## Time
//!
//! `advance(elapsed_ms)` is the only way time moves. All countdowns
//! and delays live in one `TimerQueue`, so a transition can only ever
//! happen inside a command call or an `advance` call. Obsolete timers
//! are cancelled eagerly the moment a transition retires them.

use im::Vector;

use crate::clock::{TimerId, TimerQueue};
use crate::core::{
    Color, Command, CommandRecord, FailureRecovery, GameConfig, GameRng, TargetSequence,
};
use crate::input::DragContext;

use super::buffer::AnswerBuffer;
use super::event::RoundEvent;
use super::phase::{RoundOutcome, RoundPhase};
use super::view::RoundView;

/// Payload for engine timers.
#[derive(Clone, Copy, Debug)]
enum TimerAction {
    /// One countdown granularity step.
    Tick,
    /// The feedback phase is over; resolve the round.
    EndFeedback,
}

/// The round engine.
///
/// ```
/// use brain_paint::{GameConfig, GameEngine};
///
/// let mut engine = GameEngine::new(GameConfig::default(), 7);
/// engine.start_game();
///
/// let seen = engine.view().target.expect("target visible during reveal");
/// assert_eq!(seen.len() as u32, engine.level());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    phase: RoundPhase,
    level: u32,
    target: TargetSequence,
    buffer: AnswerBuffer,
    timers: TimerQueue<TimerAction>,
    /// Handle of the armed countdown tick, while a countdown runs.
    tick_timer: Option<TimerId>,
    /// Handle of the armed feedback timer, while feedback shows.
    feedback_timer: Option<TimerId>,
    /// Remaining countdown budget in milliseconds.
    remaining_ms: u64,
    /// Total budget of the running countdown.
    budget_ms: u64,
    drag: DragContext,
    last_outcome: Option<RoundOutcome>,
    history: Vector<CommandRecord>,
}

impl GameEngine {
    /// Create an engine with the given seed.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    fn with_rng(config: GameConfig, rng: GameRng) -> Self {
        assert!(config.start_level >= 1, "Start level must be at least 1");
        assert!(config.tick_interval_ms > 0, "Tick interval must be positive");
        assert!(config.reveal_budget_ms > 0, "Reveal budget must be positive");

        let level = config.start_level;
        Self {
            config,
            rng,
            phase: RoundPhase::Idle,
            level,
            target: TargetSequence::from_colors(&[]),
            buffer: AnswerBuffer::empty(0),
            timers: TimerQueue::new(),
            tick_timer: None,
            feedback_timer: None,
            remaining_ms: 0,
            budget_ms: 0,
            drag: DragContext::new(),
            last_outcome: None,
            history: Vector::new(),
        }
    }

    // === Observers ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Engine time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The RNG seed, for reproducing a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Accepted commands in order.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Snapshot the observable state.
    #[must_use]
    pub fn view(&self) -> RoundView {
        let target = if self.phase == RoundPhase::Revealing {
            Some(self.target.clone())
        } else {
            None
        };

        let counting = self.tick_timer.is_some();
        RoundView {
            phase: self.phase,
            level: self.level,
            target,
            buffer: self.buffer.clone(),
            time_left_ms: if counting { Some(self.remaining_ms) } else { None },
            time_total_ms: if counting { Some(self.budget_ms) } else { None },
            last_outcome: self.last_outcome,
        }
    }

    // === Commands ===

    /// Apply a command.
    ///
    /// Commands that don't apply to the current phase are ignored and
    /// return no events.
    pub fn apply(&mut self, command: Command) -> Vec<RoundEvent> {
        match command {
            Command::StartGame => self.start_game(),
            Command::PickUp { color } => self.pick_up(color),
            Command::DropAt { slot } => self.drop_at(slot),
            Command::CheckAnswer => self.check_answer(),
            Command::Reset => self.reset(),
        }
    }

    /// Start a round from Idle. Ignored in any other phase.
    pub fn start_game(&mut self) -> Vec<RoundEvent> {
        if self.phase != RoundPhase::Idle {
            return Vec::new();
        }

        self.record(Command::StartGame);
        self.last_outcome = None;

        let mut events = Vec::new();
        self.begin_round(&mut events);
        events
    }

    /// Pick up a color for dragging.
    ///
    /// Accepted only while input is open, and only for palette colors.
    pub fn pick_up(&mut self, color: Color) -> Vec<RoundEvent> {
        if !self.phase.accepts_input() || !self.config.palette.contains(color) {
            return Vec::new();
        }

        self.record(Command::PickUp { color });
        self.drag.pick_up(color);
        vec![RoundEvent::ColorPicked { color }]
    }

    /// Drop the picked-up color onto an answer slot.
    ///
    /// The drag ends either way; only a drop with a payload onto a real
    /// slot fills it. Dropping onto a filled slot overwrites.
    pub fn drop_at(&mut self, slot: usize) -> Vec<RoundEvent> {
        if !self.phase.accepts_input() {
            return Vec::new();
        }

        let color = match self.drag.take() {
            Some(color) => color,
            None => return Vec::new(),
        };
        if slot >= self.buffer.len() {
            return Vec::new();
        }

        self.record(Command::DropAt { slot });
        let replaced = self.buffer.get(slot);
        self.buffer = self.buffer.assign(slot, color);
        vec![RoundEvent::SlotFilled { slot, color, replaced }]
    }

    /// Evaluate the buffer against the target.
    ///
    /// Accepted only while input is open. A complete exact match
    /// succeeds; anything else, including an unfilled slot, fails.
    pub fn check_answer(&mut self) -> Vec<RoundEvent> {
        if !self.phase.accepts_input() {
            return Vec::new();
        }

        self.record(Command::CheckAnswer);
        let outcome = if self.buffer.matches(&self.target) {
            RoundOutcome::Success
        } else {
            RoundOutcome::Failure
        };

        let mut events = Vec::new();
        self.resolve(outcome, &mut events);
        events
    }

    /// Abandon everything and return to Idle.
    ///
    /// Cancels all timers and puts the level back at the start. The
    /// next `start_game` begins a fresh game.
    pub fn reset(&mut self) -> Vec<RoundEvent> {
        let at_rest = !self.phase.in_round()
            && self.level == self.config.start_level
            && self.last_outcome.is_none();
        if at_rest {
            return Vec::new();
        }

        self.record(Command::Reset);
        if let Some(id) = self.feedback_timer.take() {
            self.timers.cancel(id);
        }
        self.clear_round();
        self.last_outcome = None;

        let mut events = vec![RoundEvent::GameReset];
        if self.level != self.config.start_level {
            events.push(RoundEvent::LevelChanged {
                from: self.level,
                to: self.config.start_level,
            });
            self.level = self.config.start_level;
        }
        self.set_phase(RoundPhase::Idle, &mut events);
        events
    }

    // === Time ===

    /// Advance engine time by `elapsed_ms`, firing every timer that
    /// comes due.
    ///
    /// One large advance and many small ones adding up to it produce
    /// the same events: timers armed while draining (countdown
    /// re-arms, follow-on rounds) are honored within the same window.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<RoundEvent> {
        let until_ms = self.timers.now_ms().saturating_add(elapsed_ms);

        let mut events = Vec::new();
        while let Some((id, action)) = self.timers.advance_next(until_ms) {
            match action {
                TimerAction::Tick => self.handle_tick(id, &mut events),
                TimerAction::EndFeedback => self.handle_end_feedback(id, &mut events),
            }
        }
        events
    }

    // === Internals ===

    fn record(&mut self, command: Command) {
        self.history
            .push_back(CommandRecord::new(command, self.level, self.timers.now_ms()));
    }

    fn set_phase(&mut self, to: RoundPhase, events: &mut Vec<RoundEvent>) {
        if self.phase == to {
            return;
        }

        let from = self.phase;
        self.phase = to;
        events.push(RoundEvent::PhaseChanged { from, to });
    }

    /// Draw a fresh target and open the reveal for the current level.
    fn begin_round(&mut self, events: &mut Vec<RoundEvent>) {
        let length = self.level as usize;
        self.target = TargetSequence::draw(&self.config.palette, length, &mut self.rng);
        self.buffer = AnswerBuffer::empty(length);
        self.drag.clear();
        self.start_countdown(self.config.reveal_budget_ms);

        events.push(RoundEvent::RoundStarted { level: self.level });
        self.set_phase(RoundPhase::Revealing, events);
    }

    fn start_countdown(&mut self, budget_ms: u64) {
        self.stop_countdown();
        self.budget_ms = budget_ms;
        self.remaining_ms = budget_ms;
        self.tick_timer = Some(
            self.timers
                .schedule_after(self.config.tick_interval_ms, TimerAction::Tick),
        );
    }

    fn stop_countdown(&mut self) {
        if let Some(id) = self.tick_timer.take() {
            self.timers.cancel(id);
        }
        self.remaining_ms = 0;
        self.budget_ms = 0;
    }

    fn handle_tick(&mut self, id: TimerId, events: &mut Vec<RoundEvent>) {
        // A tick from a countdown that was since stopped must not act.
        if self.tick_timer != Some(id) {
            return;
        }
        self.tick_timer = None;

        self.remaining_ms = self.remaining_ms.saturating_sub(self.config.tick_interval_ms);
        events.push(RoundEvent::CountdownTicked {
            remaining_ms: self.remaining_ms,
        });

        if self.remaining_ms > 0 {
            self.tick_timer = Some(
                self.timers
                    .schedule_after(self.config.tick_interval_ms, TimerAction::Tick),
            );
            return;
        }

        self.handle_expiry(events);
    }

    /// A countdown ran out. What that means depends on the phase.
    fn handle_expiry(&mut self, events: &mut Vec<RoundEvent>) {
        match self.phase {
            RoundPhase::Revealing => {
                events.push(RoundEvent::TargetHidden);
                self.set_phase(RoundPhase::AwaitingInput, events);
                if let Some(budget) = self.config.input_budget_ms {
                    self.start_countdown(budget);
                }
            }
            RoundPhase::AwaitingInput => {
                events.push(RoundEvent::InputTimedOut);
                self.resolve(RoundOutcome::Failure, events);
            }
            _ => {}
        }
    }

    /// Record an outcome and enter feedback.
    fn resolve(&mut self, outcome: RoundOutcome, events: &mut Vec<RoundEvent>) {
        self.stop_countdown();
        self.drag.clear();

        self.set_phase(RoundPhase::Evaluating, events);
        self.last_outcome = Some(outcome);
        events.push(RoundEvent::RoundEvaluated { outcome });
        self.set_phase(RoundPhase::Feedback, events);

        self.feedback_timer = Some(
            self.timers
                .schedule_after(self.config.feedback_delay_ms, TimerAction::EndFeedback),
        );
    }

    fn handle_end_feedback(&mut self, id: TimerId, events: &mut Vec<RoundEvent>) {
        if self.feedback_timer != Some(id) {
            return;
        }
        self.feedback_timer = None;
        if self.phase != RoundPhase::Feedback {
            return;
        }

        match self.last_outcome {
            Some(RoundOutcome::Success) => {
                let from = self.level;
                self.level += 1;
                events.push(RoundEvent::LevelChanged { from, to: self.level });
                self.begin_round(events);
            }
            Some(RoundOutcome::Failure) => match self.config.failure_recovery {
                FailureRecovery::ResetLevel => {
                    if self.level != self.config.start_level {
                        events.push(RoundEvent::LevelChanged {
                            from: self.level,
                            to: self.config.start_level,
                        });
                        self.level = self.config.start_level;
                    }
                    self.clear_round();
                    self.set_phase(RoundPhase::Idle, events);
                }
                FailureRecovery::RetrySameLevel => {
                    self.begin_round(events);
                }
            },
            None => {}
        }
    }

    fn clear_round(&mut self) {
        self.stop_countdown();
        self.target = TargetSequence::from_colors(&[]);
        self.buffer = AnswerBuffer::empty(0);
        self.drag.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;

    /// Short budgets keep test advances small: 3 reveal ticks, then a
    /// 200ms feedback window.
    fn quick() -> GameConfig {
        GameConfig::default()
            .with_reveal_budget_ms(300)
            .with_feedback_delay_ms(200)
    }

    fn engine() -> GameEngine {
        GameEngine::new(quick(), 42)
    }

    /// Read the target while visible, then run the reveal out.
    fn open_input(engine: &mut GameEngine) -> Vec<Color> {
        let target = engine
            .view()
            .target
            .expect("target visible during reveal")
            .colors()
            .to_vec();
        engine.advance(300);
        assert_eq!(engine.phase(), RoundPhase::AwaitingInput);
        target
    }

    fn fill(engine: &mut GameEngine, colors: &[Color]) {
        for (slot, &color) in colors.iter().enumerate() {
            engine.pick_up(color);
            engine.drop_at(slot);
        }
    }

    #[test]
    fn test_new_engine_starts_idle() {
        let engine = engine();

        assert_eq!(engine.phase(), RoundPhase::Idle);
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.now_ms(), 0);

        let view = engine.view();
        assert_eq!(view.target, None);
        assert_eq!(view.buffer.len(), 0);
        assert_eq!(view.time_left_ms, None);
        assert_eq!(view.last_outcome, None);
    }

    #[test]
    fn test_start_game_reveals_target() {
        let mut engine = engine();
        let events = engine.start_game();

        assert_eq!(
            events,
            vec![
                RoundEvent::RoundStarted { level: 2 },
                RoundEvent::PhaseChanged {
                    from: RoundPhase::Idle,
                    to: RoundPhase::Revealing,
                },
            ]
        );

        let view = engine.view();
        assert_eq!(view.phase, RoundPhase::Revealing);
        assert_eq!(view.target.map(|t| t.len()), Some(2));
        assert_eq!(view.buffer.len(), 2);
        assert_eq!(view.time_left_ms, Some(300));
        assert_eq!(view.time_total_ms, Some(300));
    }

    #[test]
    fn test_start_game_ignored_outside_idle() {
        let mut engine = engine();
        engine.start_game();

        assert!(engine.start_game().is_empty());
        assert_eq!(engine.phase(), RoundPhase::Revealing);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_reveal_countdown_hides_target() {
        let mut engine = engine();
        engine.start_game();

        let events = engine.advance(300);
        assert_eq!(
            events,
            vec![
                RoundEvent::CountdownTicked { remaining_ms: 200 },
                RoundEvent::CountdownTicked { remaining_ms: 100 },
                RoundEvent::CountdownTicked { remaining_ms: 0 },
                RoundEvent::TargetHidden,
                RoundEvent::PhaseChanged {
                    from: RoundPhase::Revealing,
                    to: RoundPhase::AwaitingInput,
                },
            ]
        );

        let view = engine.view();
        assert_eq!(view.phase, RoundPhase::AwaitingInput);
        assert_eq!(view.target, None, "target must hide when input opens");
        assert_eq!(view.time_left_ms, None);
    }

    #[test]
    fn test_partial_advance_keeps_revealing() {
        let mut engine = engine();
        engine.start_game();

        let events = engine.advance(250);
        assert_eq!(
            events,
            vec![
                RoundEvent::CountdownTicked { remaining_ms: 200 },
                RoundEvent::CountdownTicked { remaining_ms: 100 },
            ]
        );
        assert_eq!(engine.phase(), RoundPhase::Revealing);
        assert_eq!(engine.view().time_left_ms, Some(100));
    }

    #[test]
    fn test_pick_up_rejected_outside_input() {
        let mut engine = engine();
        engine.start_game();

        assert!(engine.pick_up(Color::new(0)).is_empty());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_pick_up_rejects_foreign_color() {
        let mut engine = engine();
        engine.start_game();
        open_input(&mut engine);

        assert!(engine.pick_up(Color::new(99)).is_empty());
    }

    #[test]
    fn test_drop_without_pickup_ignored() {
        let mut engine = engine();
        engine.start_game();
        open_input(&mut engine);

        assert!(engine.drop_at(0).is_empty());
        assert_eq!(engine.view().buffer.filled(), 0);
    }

    #[test]
    fn test_pick_and_drop_fill_slot() {
        let mut engine = engine();
        engine.start_game();
        open_input(&mut engine);

        let picked = engine.pick_up(Color::new(3));
        assert_eq!(picked, vec![RoundEvent::ColorPicked { color: Color::new(3) }]);

        let dropped = engine.drop_at(1);
        assert_eq!(
            dropped,
            vec![RoundEvent::SlotFilled {
                slot: 1,
                color: Color::new(3),
                replaced: None,
            }]
        );
        assert_eq!(engine.view().buffer.get(1), Some(Color::new(3)));
    }

    #[test]
    fn test_drop_overwrites_slot() {
        let mut engine = engine();
        engine.start_game();
        open_input(&mut engine);

        engine.pick_up(Color::new(0));
        engine.drop_at(0);
        engine.pick_up(Color::new(4));
        let events = engine.drop_at(0);

        assert_eq!(
            events,
            vec![RoundEvent::SlotFilled {
                slot: 0,
                color: Color::new(4),
                replaced: Some(Color::new(0)),
            }]
        );
        assert_eq!(engine.view().buffer.get(0), Some(Color::new(4)));
    }

    #[test]
    fn test_drop_outside_slots_ends_drag() {
        let mut engine = engine();
        engine.start_game();
        open_input(&mut engine);

        engine.pick_up(Color::new(1));
        assert!(engine.drop_at(99).is_empty());

        // The payload was consumed by the failed drop.
        assert!(engine.drop_at(0).is_empty());
        assert_eq!(engine.view().buffer.filled(), 0);
    }

    #[test]
    fn test_correct_answer_succeeds_and_advances_level() {
        let mut engine = engine();
        engine.start_game();
        let target = open_input(&mut engine);
        fill(&mut engine, &target);

        let events = engine.check_answer();
        assert_eq!(
            events,
            vec![
                RoundEvent::PhaseChanged {
                    from: RoundPhase::AwaitingInput,
                    to: RoundPhase::Evaluating,
                },
                RoundEvent::RoundEvaluated {
                    outcome: RoundOutcome::Success,
                },
                RoundEvent::PhaseChanged {
                    from: RoundPhase::Evaluating,
                    to: RoundPhase::Feedback,
                },
            ]
        );

        let events = engine.advance(200);
        assert_eq!(
            events,
            vec![
                RoundEvent::LevelChanged { from: 2, to: 3 },
                RoundEvent::RoundStarted { level: 3 },
                RoundEvent::PhaseChanged {
                    from: RoundPhase::Feedback,
                    to: RoundPhase::Revealing,
                },
            ]
        );
        assert_eq!(engine.level(), 3);
        assert_eq!(engine.view().target.map(|t| t.len()), Some(3));
    }

    #[test]
    fn test_wrong_answer_fails_and_returns_to_idle() {
        let mut engine = engine();
        engine.start_game();
        let target = open_input(&mut engine);

        let wrong = Color::new((target[0].raw() + 1) % 6);
        engine.pick_up(wrong);
        engine.drop_at(0);
        engine.pick_up(target[1]);
        engine.drop_at(1);

        let events = engine.check_answer();
        assert!(events.contains(&RoundEvent::RoundEvaluated {
            outcome: RoundOutcome::Failure,
        }));

        // Starting level failed: no LevelChanged, straight back to Idle.
        let events = engine.advance(200);
        assert_eq!(
            events,
            vec![RoundEvent::PhaseChanged {
                from: RoundPhase::Feedback,
                to: RoundPhase::Idle,
            }]
        );
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.view().last_outcome, Some(RoundOutcome::Failure));
    }

    #[test]
    fn test_incomplete_answer_fails() {
        let mut engine = engine();
        engine.start_game();
        let target = open_input(&mut engine);

        engine.pick_up(target[0]);
        engine.drop_at(0);

        let events = engine.check_answer();
        assert!(events.contains(&RoundEvent::RoundEvaluated {
            outcome: RoundOutcome::Failure,
        }));
    }

    #[test]
    fn test_check_answer_ignored_outside_input() {
        let mut engine = engine();
        assert!(engine.check_answer().is_empty());

        engine.start_game();
        assert!(engine.check_answer().is_empty());
        assert_eq!(engine.phase(), RoundPhase::Revealing);
    }

    #[test]
    fn test_failure_after_climbing_resets_level() {
        let mut engine = engine();
        engine.start_game();
        let target = open_input(&mut engine);
        fill(&mut engine, &target);
        engine.check_answer();
        engine.advance(200);
        assert_eq!(engine.level(), 3);

        // Fail the level-3 round with an empty buffer.
        open_input(&mut engine);
        engine.check_answer();
        let events = engine.advance(200);

        assert!(events.contains(&RoundEvent::LevelChanged { from: 3, to: 2 }));
        assert_eq!(engine.phase(), RoundPhase::Idle);
        assert_eq!(engine.level(), 2);
    }

    #[test]
    fn test_retry_same_level_starts_fresh_round() {
        let config = quick().with_failure_recovery(FailureRecovery::RetrySameLevel);
        let mut engine = GameEngine::new(config, 42);
        engine.start_game();
        open_input(&mut engine);
        engine.check_answer();

        let events = engine.advance(200);
        assert_eq!(
            events,
            vec![
                RoundEvent::RoundStarted { level: 2 },
                RoundEvent::PhaseChanged {
                    from: RoundPhase::Feedback,
                    to: RoundPhase::Revealing,
                },
            ]
        );
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.view().target.map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_input_timeout_fails_round() {
        let config = quick().with_input_budget_ms(200);
        let mut engine = GameEngine::new(config, 42);
        engine.start_game();
        open_input(&mut engine);

        assert_eq!(engine.view().time_left_ms, Some(200));

        let events = engine.advance(200);
        assert_eq!(
            events,
            vec![
                RoundEvent::CountdownTicked { remaining_ms: 100 },
                RoundEvent::CountdownTicked { remaining_ms: 0 },
                RoundEvent::InputTimedOut,
                RoundEvent::PhaseChanged {
                    from: RoundPhase::AwaitingInput,
                    to: RoundPhase::Evaluating,
                },
                RoundEvent::RoundEvaluated {
                    outcome: RoundOutcome::Failure,
                },
                RoundEvent::PhaseChanged {
                    from: RoundPhase::Evaluating,
                    to: RoundPhase::Feedback,
                },
            ]
        );

        // Commands during feedback stay ignored.
        assert!(engine.pick_up(Color::new(0)).is_empty());
        assert!(engine.check_answer().is_empty());
    }

    #[test]
    fn test_untimed_input_shows_no_countdown() {
        let mut engine = engine();
        engine.start_game();
        open_input(&mut engine);

        let view = engine.view();
        assert_eq!(view.time_left_ms, None);
        assert_eq!(view.time_total_ms, None);

        // Arbitrary waiting changes nothing without an input budget.
        assert!(engine.advance(60_000).is_empty());
        assert_eq!(engine.phase(), RoundPhase::AwaitingInput);
    }

    #[test]
    fn test_reset_cancels_round() {
        let mut engine = engine();
        engine.start_game();
        engine.advance(100);

        let events = engine.reset();
        assert_eq!(
            events,
            vec![
                RoundEvent::GameReset,
                RoundEvent::PhaseChanged {
                    from: RoundPhase::Revealing,
                    to: RoundPhase::Idle,
                },
            ]
        );

        // No timer survives the teardown.
        assert!(engine.advance(600_000).is_empty());
        assert_eq!(engine.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_reset_restores_start_level() {
        let mut engine = engine();
        engine.start_game();
        let target = open_input(&mut engine);
        fill(&mut engine, &target);
        engine.check_answer();
        engine.advance(200);
        assert_eq!(engine.level(), 3);

        let events = engine.reset();
        assert!(events.contains(&RoundEvent::LevelChanged { from: 3, to: 2 }));
        assert_eq!(engine.level(), 2);
        assert_eq!(engine.view().last_outcome, None);
    }

    #[test]
    fn test_reset_at_rest_is_noop() {
        let mut engine = engine();
        assert!(engine.reset().is_empty());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut engine = engine();

        engine.apply(Command::StartGame);
        assert_eq!(engine.phase(), RoundPhase::Revealing);
        engine.advance(300);

        engine.apply(Command::PickUp { color: Color::new(2) });
        engine.apply(Command::DropAt { slot: 0 });
        assert_eq!(engine.view().buffer.get(0), Some(Color::new(2)));

        engine.apply(Command::CheckAnswer);
        assert_eq!(engine.phase(), RoundPhase::Feedback);

        engine.apply(Command::Reset);
        assert_eq!(engine.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_history_records_accepted_commands_only() {
        let mut engine = engine();
        engine.start_game();
        engine.pick_up(Color::new(0)); // ignored: still revealing
        open_input(&mut engine);
        engine.pick_up(Color::new(0));
        engine.drop_at(0);
        engine.drop_at(1); // ignored: no payload

        let commands: Vec<_> = engine.history().iter().map(|r| r.command).collect();
        assert_eq!(
            commands,
            vec![
                Command::StartGame,
                Command::PickUp { color: Color::new(0) },
                Command::DropAt { slot: 0 },
            ]
        );

        // Timestamps carry engine time.
        assert_eq!(engine.history()[0].at_ms, 0);
        assert_eq!(engine.history()[1].at_ms, 300);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameEngine::new(quick(), 1234);
        let mut b = GameEngine::new(quick(), 1234);

        assert_eq!(a.start_game(), b.start_game());
        assert_eq!(a.view(), b.view());
        assert_eq!(a.advance(300), b.advance(300));
        assert_eq!(a.view(), b.view());
    }

    #[test]
    fn test_custom_palette_draws_within_it() {
        let palette = Palette::new(vec![
            crate::core::Swatch::new("black", "#000000"),
            crate::core::Swatch::new("white", "#ffffff"),
        ]);
        let config = GameConfig::new(palette)
            .with_reveal_budget_ms(300)
            .with_feedback_delay_ms(200);
        let mut engine = GameEngine::new(config, 7);

        engine.start_game();
        let target = engine.view().target.expect("target visible");
        for &color in target.colors() {
            assert!(color.raw() < 2);
        }
    }
}

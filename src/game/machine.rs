use macroquad::logging::{debug, info};

use super::{
    action::Direction,
    config::Settings,
    engine::{START_DIRECTION, StepEngine, StepOutcome},
    grid::GridDimensions,
    state::{Board, Phase},
    ticker::{Tick, Ticker},
};
use crate::audio::{Cue, CuePlayer};
use crate::input::InputEvent;

/// One buffered direction change, applied at the next tick boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Latch {
    pending: Option<Direction>,
    /// Set once a change is accepted; cleared when a tick completes
    blocked: bool,
}

/// What a call to `Game::update` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// No tick was due
    Waiting,
    Stepped(StepOutcome),
}

/// The game state machine: idle -> running -> lost/won -> running ...
pub struct Game {
    // Drawn by the presentation layer
    phase: Phase,
    board: Option<Board>,

    // Simulation internals
    engine: StepEngine,
    direction: Direction,
    latch: Latch,
    ticker: Ticker,
    restart_cooldown: f64,
    start_blocked_until: Option<f64>,
}

impl Game {
    pub fn new(engine: StepEngine, settings: &Settings) -> Self {
        Self {
            phase: Phase::Idle,
            board: None,
            engine,
            direction: START_DIRECTION,
            latch: Latch::default(),
            ticker: Ticker::new(settings.tick_interval()),
            restart_cooldown: settings.restart_cooldown(),
            start_blocked_until: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Score of the current or last game
    pub fn score(&self) -> u32 {
        self.board.as_ref().map_or(0, |board| board.score)
    }

    /// `None` until the first game starts
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.latch.pending
    }

    pub fn grid(&self) -> GridDimensions {
        self.engine.grid()
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// True while a start input would be ignored
    pub fn is_start_blocked(&self, now: f64) -> bool {
        self.phase.is_running() || self.start_blocked_until.is_some_and(|until| now < until)
    }

    /// Route one input event. Returns whether it changed anything.
    pub fn handle(&mut self, event: InputEvent, now: f64) -> bool {
        match event {
            InputEvent::Start => self.start(now),
            InputEvent::Move(direction) => self.request_direction(direction),
        }
    }

    /// Start a fresh game; ignored while running or during the restart
    /// cooldown.
    pub fn start(&mut self, now: f64) -> bool {
        if self.is_start_blocked(now) {
            return false;
        }
        let board = self.engine.new_board();
        self.begin(board, START_DIRECTION, now);
        true
    }

    /// Start from a prepared board instead of the fixed opening.
    pub fn start_from(&mut self, board: Board, direction: Direction, now: f64) -> bool {
        if self.is_start_blocked(now) {
            return false;
        }
        self.begin(board, direction, now);
        true
    }

    fn begin(&mut self, board: Board, direction: Direction, now: f64) {
        self.board = Some(board);
        self.direction = direction;
        self.latch = Latch::default();
        self.start_blocked_until = None;
        self.phase = Phase::Running;
        let generation = self.ticker.start(now);

        let grid = self.engine.grid();
        info!(
            "Game started on a {}x{} grid (tick generation {})",
            grid.cells_x, grid.cells_y, generation
        );
    }

    /// Latch a direction change for the next tick.
    ///
    /// Ignored when not running, when a change was already accepted this
    /// tick, and for the current heading or its reverse.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.phase.is_running()
            || self.latch.blocked
            || direction == self.direction
            || direction.is_opposite(self.direction)
        {
            return false;
        }
        self.latch.pending = Some(direction);
        self.latch.blocked = true;
        true
    }

    /// Run the tick that is due at `now`, if any.
    pub fn update(&mut self, now: f64, cues: &mut dyn CuePlayer) -> Update {
        if !self.phase.is_running() {
            return Update::Waiting;
        }
        match self.ticker.poll(now) {
            Some(tick) => self
                .apply_tick(tick, now, cues)
                .map_or(Update::Waiting, Update::Stepped),
            None => Update::Waiting,
        }
    }

    /// Apply one tick. Ticks from an earlier game are dropped.
    pub fn apply_tick(
        &mut self,
        tick: Tick,
        now: f64,
        cues: &mut dyn CuePlayer,
    ) -> Option<StepOutcome> {
        if !self.phase.is_running() {
            return None;
        }
        if !self.ticker.is_current(tick) {
            debug!("Dropping stale tick of generation {}", tick.generation);
            return None;
        }
        let board = self.board.as_mut()?;

        if let Some(direction) = self.latch.pending.take() {
            self.direction = direction;
        }

        let outcome = self.engine.step(board, self.direction);
        if outcome.ate() {
            cues.play(Cue::Eat);
        }

        match outcome {
            StepOutcome::Moved | StepOutcome::Ate => {
                self.latch.blocked = false;
                self.ticker.schedule_after(tick, now);
            }
            StepOutcome::Filled => {
                info!("Board filled with a score of {}", self.score());
                self.finish(Phase::Won, now);
            }
            StepOutcome::Fatal(collision) => {
                cues.play(Cue::GameOver);
                info!(
                    "Game over ({:?}) with a score of {}",
                    collision,
                    self.score()
                );
                self.finish(Phase::Lost, now);
            }
        }

        Some(outcome)
    }

    fn finish(&mut self, phase: Phase, now: f64) {
        self.ticker.cancel();
        self.phase = phase;
        self.latch = Latch::default();
        self.start_blocked_until = Some(now + self.restart_cooldown);
    }
}

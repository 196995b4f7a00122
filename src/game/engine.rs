use std::collections::HashSet;

use super::{
    action::Direction,
    grid::GridDimensions,
    state::{Board, Cell, Snake},
};

/// Where every new game puts its one-segment snake
pub const START_CELL: Cell = Cell::new(1, 1);
/// Heading of every new game
pub const START_DIRECTION: Direction = Direction::Right;

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head ran into a body segment
    SelfCollision,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// Apple eaten, snake grown, apple respawned
    Ate,
    /// Apple eaten and no free cell left for the next one
    Filled,
    Fatal(Collision),
}

impl StepOutcome {
    pub fn ate(self) -> bool {
        matches!(self, StepOutcome::Ate | StepOutcome::Filled)
    }

    pub fn is_fatal(self) -> bool {
        matches!(self, StepOutcome::Fatal(_))
    }
}

/// Source of randomness for apple placement
pub trait AppleSampler {
    /// Uniform index in `0..upper`; `upper` is never zero
    fn pick(&mut self, upper: usize) -> usize;
}

/// Samples with macroquad's global generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSampler;

impl AppleSampler for RandomSampler {
    fn pick(&mut self, upper: usize) -> usize {
        macroquad::rand::gen_range(0, upper)
    }
}

/// Advances a board one cell per tick
pub struct StepEngine {
    grid: GridDimensions,
    sampler: Box<dyn AppleSampler>,
}

impl StepEngine {
    pub fn new(grid: GridDimensions) -> Self {
        Self::with_sampler(grid, RandomSampler)
    }

    pub fn with_sampler(grid: GridDimensions, sampler: impl AppleSampler + 'static) -> Self {
        Self {
            grid,
            sampler: Box::new(sampler),
        }
    }

    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    /// Fresh board for a new game: one segment at the start cell, apple
    /// anywhere but the cell straight ahead.
    pub fn new_board(&mut self) -> Board {
        let snake = Snake::new(START_CELL);
        let ahead = START_CELL.stepped(START_DIRECTION);
        let apple = self
            .spawn_apple(&snake, Some(ahead))
            .or_else(|| self.spawn_apple(&snake, None));
        Board::new(snake, apple)
    }

    /// Execute one step of the game in `direction`.
    ///
    /// A fatal step leaves the board untouched.
    pub fn step(&mut self, board: &mut Board, direction: Direction) -> StepOutcome {
        let new_head = board.snake.head().stepped(direction);

        if !self.grid.contains(new_head) {
            return StepOutcome::Fatal(Collision::Wall);
        }

        let vacated = board.snake.advance(new_head);

        if board.snake.collides_with_body(new_head) {
            board.snake.retreat(vacated);
            return StepOutcome::Fatal(Collision::SelfCollision);
        }

        if board.apple != Some(new_head) {
            return StepOutcome::Moved;
        }

        board.snake.grow_into(vacated);
        board.score += 1;
        board.apple = self.spawn_apple(&board.snake, None);

        match board.apple {
            Some(_) => StepOutcome::Ate,
            None => StepOutcome::Filled,
        }
    }

    /// Pick a free cell uniformly, or `None` if the snake covers the grid.
    pub fn spawn_apple(&mut self, snake: &Snake, exclude: Option<Cell>) -> Option<Cell> {
        let occupied: HashSet<Cell> = snake.segments().iter().copied().collect();
        let free: Vec<Cell> = self
            .grid
            .cells()
            .filter(|cell| !occupied.contains(cell) && Some(*cell) != exclude)
            .collect();

        if free.is_empty() {
            return None;
        }

        let index = self.sampler.pick(free.len()).min(free.len() - 1);
        Some(free[index])
    }
}

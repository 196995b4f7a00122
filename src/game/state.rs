use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake, head at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// A one-segment snake
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty segment list.
    pub fn from_segments(segments: Vec<Cell>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { body: segments })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    /// Segments excluding the head
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Check if a cell collides with the body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    /// Put `new_head` in front and let every segment follow its predecessor.
    ///
    /// Returns the cell the tail vacated.
    pub fn advance(&mut self, new_head: Cell) -> Cell {
        self.body.insert(0, new_head);
        // length was >= 1 before the insert, so there is always a tail to pop
        self.body.pop().unwrap_or(new_head)
    }

    /// Undo an `advance`, restoring the vacated tail.
    pub fn retreat(&mut self, vacated: Cell) {
        if self.body.len() > 1 {
            self.body.remove(0);
        } else {
            self.body.clear();
        }
        self.body.push(vacated);
    }

    /// Grow by re-occupying the cell the tail just left
    pub fn grow_into(&mut self, vacated: Cell) {
        self.body.push(vacated);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Game phase, as projected to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Lost,
    /// The snake covers every cell and no apple can be placed
    Won,
}

impl Phase {
    pub fn is_running(self) -> bool {
        self == Phase::Running
    }
}

/// Everything the renderer draws. Changing it means the canvas changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub snake: Snake,
    /// `None` only when no free cell is left
    pub apple: Option<Cell>,
    pub score: u32,
}

impl Board {
    pub fn new(snake: Snake, apple: Option<Cell>) -> Self {
        Self {
            snake,
            apple,
            score: 0,
        }
    }

    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.snake.contains(cell)
    }
}

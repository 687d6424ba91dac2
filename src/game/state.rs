use std::collections::VecDeque;

use super::direction::Direction;

/// A single grid cell, measured in cell units (not pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The player's snake: an ordered run of cells plus its heading.
///
/// The oldest segment sits at the front of the deque and the head at the
/// back. The body is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Build a straight snake of `length` cells ending at `head`, pointing
    /// in `direction`. Gameplay starts every round at length 1; tests use
    /// longer bodies.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1))
            .rev()
            .map(|i| Cell::new(head.x - dx * i as i32, head.y - dy * i as i32))
            .collect();

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.back().unwrap()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body cells from tail to head.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Record the direction to commit at the next advance. A request that
    /// exactly reverses the current heading is dropped, and the guard reads
    /// the live heading rather than the pending one, so key mashing within
    /// a single tick can never queue a 180-degree turn.
    pub fn steer(&mut self, direction: Direction) {
        if !direction.is_opposite(self.direction) {
            self.pending_direction = direction;
        }
    }

    /// Commit the pending direction and move one cell forward: the new head
    /// joins at the back and the oldest tail cell comes off the front. The
    /// removed cell is returned for the death-restore rule.
    pub fn advance(&mut self) -> Cell {
        self.direction = self.pending_direction;
        let new_head = self.head().step(self.direction);
        let removed = self.body.pop_front().unwrap();
        self.body.push_back(new_head);
        removed
    }

    /// Lengthen the body by one by doubling the head cell. The duplicate
    /// unstacks on the next advance, leaving the tail in place for a tick.
    pub fn grow(&mut self) {
        let head = self.head();
        self.body.push_back(head);
    }

    /// Roll back the advance that just killed the snake: drop the head that
    /// stepped into a wall or the body and put the removed tail cell back,
    /// so the final rendered frame shows the pre-death body.
    pub fn undo_advance(&mut self, removed: Cell) {
        self.body.pop_back();
        self.body.push_front(removed);
    }

    /// Whether `cell` lands on the body, head excluded.
    pub fn overlaps_body(&self, cell: Cell) -> bool {
        self.body.iter().take(self.body.len() - 1).any(|&c| c == cell)
    }

    /// Test helper: build a body from explicit cells, tail first.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty());
        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }
}

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    Dead,
}

/// What the head ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfHit,
}

/// The whole game, owned as a single aggregate and passed explicitly
/// between the engine, input handling and the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Cell,
    pub phase: Phase,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameState {
    pub fn new(snake: Snake, apple: Cell, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            apple,
            phase: Phase::NotStarted,
            grid_width,
            grid_height,
        }
    }

    /// Apples eaten so far. Derived from body length so it can never drift
    /// out of sync with the snake.
    pub fn score(&self) -> u32 {
        (self.snake.len() - 1) as u32
    }

    /// True while `cell` is on the board. The head leaving this range by
    /// exactly one cell is a wall hit.
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.grid_width as i32
            && cell.y >= 0
            && cell.y < self.grid_height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Direction::Right), Cell::new(6, 5));
        assert_eq!(cell.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(cell.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.step(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));

        let cells: Vec<Cell> = snake.cells().collect();
        assert_eq!(cells, vec![Cell::new(3, 5), Cell::new(4, 5), Cell::new(5, 5)]);
    }

    #[test]
    fn test_single_cell_snake() {
        let snake = Snake::new(Cell::new(20, 20), Direction::Right, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(20, 20));
    }

    #[test]
    fn test_advance_moves_one_cell() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);

        let removed = snake.advance();
        assert_eq!(removed, Cell::new(3, 5));
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_steer_commits_on_advance() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 2);
        snake.steer(Direction::Down);

        // Nothing changes until the next advance.
        assert_eq!(snake.direction(), Direction::Right);

        snake.advance();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head(), Cell::new(5, 6));
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 2);
        snake.steer(Direction::Left);
        snake.advance();

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_steer_guard_reads_live_heading() {
        // Two key presses inside one tick window: Up is legal, but the
        // follow-up Left must still be judged against the live Right
        // heading, not the pending Up.
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 2);
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        snake.advance();

        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn test_grow_adds_exactly_one() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 2);

        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));

        // The duplicate head unstacks on the next advance.
        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_undo_advance_restores_body() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        let before: Vec<Cell> = snake.cells().collect();

        let removed = snake.advance();
        snake.undo_advance(removed);

        let after: Vec<Cell> = snake.cells().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_overlaps_body_excludes_head() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(!snake.overlaps_body(Cell::new(5, 5))); // head itself
        assert!(snake.overlaps_body(Cell::new(4, 5)));
        assert!(snake.overlaps_body(Cell::new(3, 5)));
        assert!(!snake.overlaps_body(Cell::new(10, 10)));
    }

    #[test]
    fn test_score_derived_from_length() {
        let mut state = GameState::new(
            Snake::new(Cell::new(5, 5), Direction::Right, 1),
            Cell::new(1, 1),
            10,
            10,
        );
        assert_eq!(state.score(), 0);

        state.snake.grow();
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Cell::new(5, 5), Direction::Right, 1),
            Cell::new(1, 1),
            20,
            20,
        );

        assert!(state.is_in_bounds(Cell::new(0, 0)));
        assert!(state.is_in_bounds(Cell::new(19, 19)));
        assert!(!state.is_in_bounds(Cell::new(-1, 0)));
        assert!(!state.is_in_bounds(Cell::new(20, 0)));
        assert!(!state.is_in_bounds(Cell::new(0, -1)));
        assert!(!state.is_in_bounds(Cell::new(0, 20)));
    }
}

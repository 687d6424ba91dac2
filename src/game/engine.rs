use rand::seq::SliceRandom;
use rand::Rng;

use super::{
    config::GameConfig,
    direction::Direction,
    state::{Cell, CollisionKind, GameState, Phase, Snake},
};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake moved; false outside `Phase::Running`.
    pub moved: bool,
    /// Whether the snake ate the apple this tick.
    pub ate_apple: bool,
    /// The collision that ended the round, if any.
    pub collision: Option<CollisionKind>,
    /// Set when the body covers the whole board and no apple can spawn.
    pub board_full: bool,
}

impl TickResult {
    fn idle() -> Self {
        Self {
            moved: false,
            ate_apple: false,
            collision: None,
            board_full: false,
        }
    }
}

/// Drives the simulation: movement, collision detection, apple spawning
/// and the phase transitions around them.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Fresh round: a length-1 snake at the board center heading right and
    /// an apple somewhere off the body, waiting for the start signal.
    pub fn reset(&mut self) -> GameState {
        let center = Cell::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right, 1);
        let apple = self
            .spawn_apple(&snake)
            .expect("fresh board has a free cell");

        GameState::new(snake, apple, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the simulation by one tick.
    ///
    /// Movement happens only while running. Collision is evaluated before
    /// apple eating, so death pre-empts eating on the same tick.
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if state.phase != Phase::Running {
            return TickResult::idle();
        }

        let removed = state.snake.advance();
        let head = state.snake.head();

        let collision = if !state.is_in_bounds(head) {
            Some(CollisionKind::Wall)
        } else if state.snake.overlaps_body(head) {
            Some(CollisionKind::SelfHit)
        } else {
            None
        };

        if collision.is_some() {
            // Show the pre-death body in the final frame rather than a head
            // sitting inside a wall or its own body.
            state.snake.undo_advance(removed);
            state.phase = Phase::Dead;

            return TickResult {
                moved: true,
                ate_apple: false,
                collision,
                board_full: false,
            };
        }

        let mut ate_apple = false;
        let mut board_full = false;

        if head == state.apple {
            state.snake.grow();
            ate_apple = true;

            match self.spawn_apple(&state.snake) {
                Some(cell) => state.apple = cell,
                None => {
                    // Nowhere left to put an apple: the board is beaten.
                    state.phase = Phase::Dead;
                    board_full = true;
                }
            }
        }

        TickResult {
            moved: true,
            ate_apple,
            collision: None,
            board_full,
        }
    }

    /// Record a direction request. Reversal requests are dropped inside the
    /// snake; between ticks only the latest legal request matters.
    pub fn steer(&mut self, state: &mut GameState, direction: Direction) {
        state.snake.steer(direction);
    }

    /// Start signal: begins a waiting round, or restarts after death with a
    /// fully fresh model. No-op while running or paused.
    pub fn toggle_start(&mut self, state: &mut GameState) {
        match state.phase {
            Phase::NotStarted => state.phase = Phase::Running,
            Phase::Dead => {
                *state = self.reset();
                state.phase = Phase::Running;
            }
            Phase::Running | Phase::Paused => {}
        }
    }

    /// Pause signal: flips running/paused, no-op in the other phases.
    pub fn toggle_pause(&mut self, state: &mut GameState) {
        state.phase = match state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Pick an unoccupied cell uniformly at random, or `None` when the body
    /// covers the whole board.
    ///
    /// Rejection sampling is capped at one attempt per board cell, after
    /// which the free cells are enumerated and chosen from directly, so the
    /// loop stays bounded even on a nearly full board.
    fn spawn_apple(&mut self, snake: &Snake) -> Option<Cell> {
        let (width, height) = (self.config.grid_width, self.config.grid_height);

        for _ in 0..width * height {
            let cell = Cell::new(
                self.rng.gen_range(0..width) as i32,
                self.rng.gen_range(0..height) as i32,
            );
            if !snake.contains(cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Cell::new(x, y)))
            .filter(|cell| !snake.contains(*cell))
            .collect();

        free.choose(&mut self.rng).copied()
    }
}

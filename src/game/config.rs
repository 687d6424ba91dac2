use serde::{Deserialize, Serialize};

/// Tunable game parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in cells.
    pub grid_width: usize,
    /// Board height in cells.
    pub grid_height: usize,
    /// Simulation rate in ticks per second. Rendering runs on its own
    /// timer and is not affected by this.
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 40,
            tick_rate: 15,
        }
    }
}

impl GameConfig {
    /// Custom board size. Dimensions are clamped to at least 2 cells so a
    /// fresh snake always has room for an apple.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width.max(2),
            grid_height: height.max(2),
            ..Default::default()
        }
    }

    /// Small board for tests.
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

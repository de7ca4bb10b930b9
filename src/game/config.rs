use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::snake::{DEFAULT_SPEED, MAX_SPEED};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Speed of a fresh snake, in cells per tick
    pub initial_speed: f32,
    /// Speed gained each time food is eaten
    pub speed_increment: f32,

    // Hungry debuff
    /// How long a hungry item stays on the board
    pub hungry_lifetime_ms: u64,
    /// Upper bound (inclusive) of the per-tick trigger draw
    pub hungry_trigger_range: u32,
    /// Draws at or above this value spawn a hungry item
    pub hungry_trigger_threshold: u32,
    /// Smallest snake that can be made hungry
    pub hungry_min_size: usize,

    /// Frames per second the front-end aims for
    pub target_fps: u32,
    /// Fixed RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_speed: DEFAULT_SPEED,
            speed_increment: 0.02,
            hungry_lifetime_ms: 6000,
            hungry_trigger_range: 10000,
            hungry_trigger_threshold: 9990,
            hungry_min_size: 2,
            target_fps: 60,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject settings the simulation cannot run with.
    ///
    /// Placement samples until it finds a free cell, so the grid must at least
    /// fit a head, a food and a hungry item.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width * self.grid_height >= 3,
            "grid {}x{} is too small to hold a snake, food and a hungry item",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.initial_speed > 0.0 && self.initial_speed <= MAX_SPEED,
            "initial speed must be in (0, {}], got {}",
            MAX_SPEED,
            self.initial_speed
        );
        ensure!(
            self.hungry_trigger_threshold <= self.hungry_trigger_range,
            "hungry trigger threshold {} exceeds range {}",
            self.hungry_trigger_threshold,
            self.hungry_trigger_range
        );
        ensure!(self.hungry_lifetime_ms > 0, "hungry lifetime must be positive");
        ensure!(self.target_fps > 0, "target fps must be positive");
        Ok(())
    }
}

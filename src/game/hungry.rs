//! The hungry debuff: a short-lived item that shrinks the snake when eaten.

use std::time::{Duration, Instant};

use super::{config::GameConfig, sampler::Sampler, state::Position};

/// The hungry item on the board.
///
/// When inactive its position is stale and must not be used for collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HungryItem {
    position: Position,
    active: bool,
    started_at: Instant,
}

impl HungryItem {
    /// An inactive item with no meaningful position
    pub fn inactive() -> Self {
        Self {
            position: Position::default(),
            active: false,
            started_at: Instant::now(),
        }
    }

    /// Put the item on `position` and start its cycle at `now`
    pub fn activate(&mut self, position: Position, now: Instant) {
        self.position = position;
        self.active = true;
        self.started_at = now;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Instant the current (or last) hungry cycle began
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn set_started_at(&mut self, at: Instant) {
        self.started_at = at;
    }

    /// True if the item is active and sits on `pos`
    pub fn is_hit_by(&self, pos: Position) -> bool {
        self.active && self.position == pos
    }
}

/// Answers whether a hungry cycle is still running.
///
/// Only reports; clearing the item is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HungryCycle {
    lifetime: Duration,
}

impl HungryCycle {
    pub fn new(lifetime: Duration) -> Self {
        Self { lifetime }
    }

    pub fn still_active(&self, started_at: Instant, now: Instant) -> bool {
        now.saturating_duration_since(started_at) < self.lifetime
    }
}

impl From<&GameConfig> for HungryCycle {
    fn from(config: &GameConfig) -> Self {
        Self::new(Duration::from_millis(config.hungry_lifetime_ms))
    }
}

/// Per-tick coin flip that decides whether a hungry item appears.
///
/// Fires when a draw from `[0, range]` lands on `threshold` or above and the
/// snake is at least `min_size` long. With the defaults that is 11 chances in
/// 10001 per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPolicy {
    pub range: u32,
    pub threshold: u32,
    pub min_size: usize,
}

impl TriggerPolicy {
    pub fn fires(&self, sampler: &mut Sampler, snake_size: usize) -> bool {
        let roll = sampler.draw(self.range);
        roll >= self.threshold && snake_size >= self.min_size
    }

    /// Chance of firing on a tick where the size guard passes
    pub fn probability(&self) -> f64 {
        f64::from(self.range - self.threshold + 1) / (f64::from(self.range) + 1.0)
    }
}

impl From<&GameConfig> for TriggerPolicy {
    fn from(config: &GameConfig) -> Self {
        Self {
            range: config.hungry_trigger_range,
            threshold: config.hungry_trigger_threshold,
            min_size: config.hungry_min_size,
        }
    }
}

use std::time::Instant;

use anyhow::{ensure, Result};
use tracing::{debug, info};

use super::{
    config::GameConfig,
    hungry::{HungryCycle, HungryItem, TriggerPolicy},
    placement::{place_food, place_hungry},
    sampler::Sampler,
    snake::{Body, Snake},
    state::Position,
};

/// Read-only view of everything a frame needs to draw
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a, B> {
    pub body: &'a B,
    pub food: Position,
    pub hungry: Position,
    pub hungry_active: bool,
    pub score: u32,
}

/// The game: owns the snake, the food, the hungry item and the score, and
/// advances them one tick at a time.
pub struct Game<B: Body = Snake> {
    config: GameConfig,
    body: B,
    food: Position,
    hungry: HungryItem,
    score: u32,
    sampler: Sampler,
    trigger: TriggerPolicy,
    cycle: HungryCycle,
}

impl<B: Body> Game<B> {
    /// Start a game with a fresh body in the middle of the grid.
    ///
    /// Fails if `config` does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let body = B::spawn(config.grid_width, config.grid_height, config.initial_speed);
        Self::with_body(config, body)
    }

    /// Start a game around an existing body living on the configured grid
    pub fn with_body(config: GameConfig, body: B) -> Result<Self> {
        config.validate()?;
        ensure!(
            body.grid_size() == (config.grid_width, config.grid_height),
            "body grid {:?} does not match configured grid {}x{}",
            body.grid_size(),
            config.grid_width,
            config.grid_height
        );

        let mut sampler = Sampler::new(config.seed);
        let food = place_food(&mut sampler, &body, None);

        Ok(Self {
            trigger: TriggerPolicy::from(&config),
            cycle: HungryCycle::from(&config),
            config,
            body,
            food,
            hungry: HungryItem::inactive(),
            score: 0,
            sampler,
        })
    }

    /// Advance one tick using the current time
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advance one tick as if the clock read `now`.
    ///
    /// Does nothing once the snake is dead.
    pub fn update_at(&mut self, now: Instant) {
        if !self.body.is_alive() {
            return;
        }

        self.body.advance();
        if !self.body.is_alive() {
            debug!(score = self.score, size = self.body.size(), "snake died");
        }

        if !self.hungry.is_active() && self.trigger.fires(&mut self.sampler, self.body.size()) {
            let pos = place_hungry(&mut self.sampler, &self.body, self.food);
            self.hungry.activate(pos, now);
            debug!(x = pos.x, y = pos.y, "hungry item activated");
        }

        if self.hungry.is_active() && !self.cycle.still_active(self.hungry.started_at(), now) {
            self.hungry.deactivate();
            debug!("hungry item expired");
        }

        let head = self.body.head();

        if head == self.food {
            self.score += 1;
            let hungry = self.hungry.is_active().then(|| self.hungry.position());
            self.food = place_food(&mut self.sampler, &self.body, hungry);
            self.body.grow();
            self.body.accelerate(self.config.speed_increment);
            debug!(
                score = self.score,
                size = self.body.size(),
                speed = self.body.speed(),
                "food eaten"
            );
        }

        if self.hungry.is_hit_by(head) {
            self.hungry.deactivate();
            self.body.shrink();
            debug!(size = self.body.size(), "hungry item eaten");
        }
    }

    /// Throw the current run away and start over
    pub fn restart(&mut self) {
        let (width, height) = self.body.grid_size();
        self.score = 0;
        self.body = B::spawn(width, height, self.config.initial_speed);
        self.hungry.deactivate();
        self.food = place_food(&mut self.sampler, &self.body, None);
        info!("game restarted");
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn size(&self) -> usize {
        self.body.size()
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn hungry(&self) -> &HungryItem {
        &self.hungry
    }

    pub fn is_hungry(&self) -> bool {
        self.hungry.is_active()
    }

    pub fn set_hungry(&mut self, active: bool) {
        self.hungry.set_active(active);
    }

    pub fn hungry_cycle_start(&self) -> Instant {
        self.hungry.started_at()
    }

    pub fn set_hungry_cycle_start(&mut self, at: Instant) {
        self.hungry.set_started_at(at);
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access for steering between ticks
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> Scene<'_, B> {
        Scene {
            body: &self.body,
            food: self.food,
            hungry: self.hungry.position(),
            hungry_active: self.hungry.is_active(),
            score: self.score,
        }
    }
}

//! Core game logic module for Snake
//!
//! Everything here is free of I/O and rendering: the tick state machine, the
//! snake body, and the random placement and hungry-debuff policies it drives.

pub mod config;
pub mod direction;
pub mod engine;
pub mod hungry;
pub mod placement;
pub mod sampler;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{Game, Scene};
pub use hungry::{HungryCycle, HungryItem, TriggerPolicy};
pub use sampler::Sampler;
pub use snake::{Body, Snake};
pub use state::{CollisionType, Position};

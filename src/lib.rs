//! Hungry Snake - a terminal Snake game with a timed "hungry" debuff
//!
//! This library provides:
//! - Core game logic: tick state machine, snake body, food and hungry item placement (game module)
//! - TUI rendering (render module)
//! - Keyboard input decoding and loop controls (input module)
//! - Frame rate and session stats (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

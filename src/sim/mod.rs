//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick ordering only, no wall-clock dependence
//! - Seeded RNG only
//! - Stable column-major brick iteration
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod state;
pub mod tick;

pub use bricks::generate;
pub use state::{
    Ball, Brick, BrickGrid, BrickStatus, Difficulty, Durability, GamePhase, GameState, Paddle,
};
pub use tick::{GameEvent, TickInput, tick};

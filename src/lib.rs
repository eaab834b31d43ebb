//! Brick Breaker - a single-screen arcade brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Canvas 2D drawing surface
//! - `ui`: HUD readout, modal notifications, menu wiring
//! - `tuning`: Data-driven difficulty balance

pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{DifficultyTuning, TuningSet};

/// Game configuration constants
pub mod consts {
    /// Simulated time per tick, in milliseconds of wall clock when the
    /// browser timer drives the loop. The core only depends on tick order.
    pub const TICK_INTERVAL_MS: i32 = 10;

    /// Play surface dimensions (logical pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults - sits on the bottom edge of the canvas
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle movement per tick while a key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Vertical offset of the ball spawn point above the canvas bottom
    pub const BALL_SPAWN_OFFSET: f32 = 30.0;

    /// Brick geometry
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Gap between adjacent bricks, both axes
    pub const BRICK_GUTTER: f32 = 10.0;
    /// Distance from the canvas top to the first brick row
    pub const BRICK_TOP_MARGIN: f32 = 30.0;

    /// Progression
    pub const STARTING_LIVES: u32 = 100;
    pub const TOTAL_LEVELS: u32 = 5;

    /// Maximum number of trail positions kept for rendering
    pub const TRAIL_LENGTH: usize = 10;
}

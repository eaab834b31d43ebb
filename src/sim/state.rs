//! Game state and core simulation types
//!
//! Everything the tick function mutates lives here. The aggregate owns
//! its RNG so brick generation is reproducible from a seed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bricks;
use crate::consts::*;
use crate::tuning::{DifficultyTuning, TuningSet};

/// Difficulty tier, selected before a run starts and immutable after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay, tick advances the world
    Playing,
    /// Grid cleared, waiting for the level-complete acknowledgment
    LevelCleared,
    /// Run ended with no lives left
    GameOver,
    /// All levels cleared
    GameWon,
}

/// Whether a brick still takes part in rendering and collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// Multi-hit marker: remaining hits plus the number painted on the brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durability {
    pub remaining_hits: u32,
    /// Steps down by one on each non-destroying hit; the destruction
    /// hit awards exactly this (possibly decayed) value.
    pub display_value: u32,
}

impl Durability {
    pub fn new(hits: u32) -> Self {
        Self {
            remaining_hits: hits,
            display_value: hits,
        }
    }
}

/// One grid cell. Unspawned cells are created already destroyed so the
/// grid stays rectangular and indexing is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub status: BrickStatus,
    pub durability: Option<Durability>,
}

impl Brick {
    pub fn active(pos: Vec2, durability: Option<Durability>) -> Self {
        Self {
            pos,
            status: BrickStatus::Active,
            durability,
        }
    }

    pub fn unspawned(pos: Vec2) -> Self {
        Self {
            pos,
            status: BrickStatus::Destroyed,
            durability: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }

    /// The number to paint on the brick, 1 for plain bricks
    pub fn display_value(&self) -> u32 {
        self.durability.map_or(1, |d| d.display_value)
    }
}

/// Column-major brick grid, dimensions fixed for a level once generated
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrickGrid {
    columns: Vec<Vec<Brick>>,
}

impl BrickGrid {
    pub fn new(columns: Vec<Vec<Brick>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Vec<Brick>] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut Vec<Vec<Brick>> {
        &mut self.columns
    }

    /// All bricks in stable column-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.columns.iter().flatten()
    }

    /// Total cell count (active and destroyed slots alike)
    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|b| b.is_active()).count()
    }

    /// A level is cleared iff every brick is destroyed, whether by
    /// collision or by never having spawned
    pub fn all_destroyed(&self) -> bool {
        self.iter().all(|b| b.status == BrickStatus::Destroyed)
    }
}

/// The ball, owned solely by the game state
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Recent positions for rendering, oldest first
    pub trail: Vec<Vec2>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record current position to trail (call each tick)
    pub fn record_trail(&mut self) {
        self.trail.push(self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }

    /// Clear trail (on respawn/reset)
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

/// The player's paddle; y is fixed at the bottom margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }
}

impl Paddle {
    pub fn right(&self) -> f32 {
        self.x + PADDLE_WIDTH
    }

    pub fn top(&self) -> f32 {
        CANVAS_HEIGHT - PADDLE_HEIGHT
    }

    pub fn center_x(&self) -> f32 {
        self.x + PADDLE_WIDTH / 2.0
    }

    /// Center the paddle on an absolute x, clamped to the canvas
    pub fn center_on(&mut self, x: f32) {
        self.x = (x - PADDLE_WIDTH / 2.0).clamp(0.0, CANVAS_WIDTH - PADDLE_WIDTH);
    }
}

/// Complete game state (deterministic given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub difficulty: Difficulty,
    pub tuning: DifficultyTuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub score: u32,
    pub lives: u32,
    /// 1-based level counter
    pub level: u32,
    /// Brick rows for the current level; grows as levels are cleared
    pub row_count: u32,
    pub phase: GamePhase,
    /// Latched on game over / game won; tick is a no-op once set
    pub is_terminal: bool,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh run with default tuning
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_tuning(
            difficulty,
            TuningSet::default().for_difficulty(difficulty),
            seed,
        )
    }

    pub fn with_tuning(difficulty: Difficulty, tuning: DifficultyTuning, seed: u64) -> Self {
        let (dx, dy) = tuning.ball_speed;
        let mut state = Self {
            difficulty,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            row_count: tuning.row_count,
            phase: GamePhase::Playing,
            is_terminal: false,
            paddle: Paddle::default(),
            ball: Ball::new(
                Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - BALL_SPAWN_OFFSET),
                Vec2::new(dx, dy),
            ),
            bricks: BrickGrid::default(),
            time_ticks: 0,
        };
        state.regenerate_bricks();
        state
    }

    /// Full game reset: zero score, refill lives, back to level 1 row
    /// density, fresh grid, everything recentered
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.row_count = self.tuning.row_count;
        self.phase = GamePhase::Playing;
        self.is_terminal = false;
        self.paddle = Paddle::default();
        self.reset_ball();
        self.regenerate_bricks();
        log::info!("game reset ({})", self.difficulty.as_str());
    }

    /// Level reset: score and lives persist, the grid grows one row
    /// denser and is regenerated, ball and paddle recenter
    pub fn advance_level(&mut self) {
        self.row_count = (self.row_count as f32 + 0.5).ceil() as u32;
        self.paddle = Paddle::default();
        self.reset_ball();
        self.regenerate_bricks();
        self.phase = GamePhase::Playing;
        log::info!("level {} start, {} rows", self.level, self.row_count);
    }

    /// Reposition the ball above the paddle with difficulty-initial
    /// velocity (life loss keeps bricks, score and paddle unchanged)
    pub fn reset_ball(&mut self) {
        let (dx, dy) = self.tuning.ball_speed;
        self.ball.pos = Vec2::new(
            self.paddle.center_x(),
            CANVAS_HEIGHT - BALL_SPAWN_OFFSET,
        );
        self.ball.vel = Vec2::new(dx, dy);
        self.ball.clear_trail();
    }

    fn regenerate_bricks(&mut self) {
        self.bricks = bricks::generate(self.difficulty, &self.tuning, self.row_count, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_reset_invariants() {
        let mut state = GameState::new(Difficulty::Medium, 7);
        state.score = 42;
        state.lives = 3;
        state.level = 4;
        state.ball.record_trail();
        state.reset_game();

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 570.0));
        assert_eq!(state.paddle.center_x(), 400.0);
        assert!(state.ball.trail.is_empty());
        assert_eq!(state.row_count, 4);
        assert!(!state.is_terminal);
    }

    #[test]
    fn test_advance_level_keeps_score_and_grows_rows() {
        let mut state = GameState::new(Difficulty::Easy, 7);
        state.score = 17;
        state.lives = 90;
        state.advance_level();

        assert_eq!(state.score, 17);
        assert_eq!(state.lives, 90);
        assert_eq!(state.row_count, 4);
        assert_eq!(state.phase, GamePhase::Playing);

        state.advance_level();
        assert_eq!(state.row_count, 5);
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        for i in 0..15 {
            ball.pos = Vec2::new(i as f32, 0.0);
            ball.record_trail();
        }
        assert_eq!(ball.trail.len(), TRAIL_LENGTH);
        // Oldest entries evicted first
        assert_eq!(ball.trail[0], Vec2::new(5.0, 0.0));
        assert_eq!(ball.trail[9], Vec2::new(14.0, 0.0));
    }

    #[test]
    fn test_paddle_center_on_clamps() {
        let mut paddle = Paddle::default();
        paddle.center_on(-200.0);
        assert_eq!(paddle.x, 0.0);
        paddle.center_on(10_000.0);
        assert_eq!(paddle.right(), CANVAS_WIDTH);
        paddle.center_on(400.0);
        assert_eq!(paddle.center_x(), 400.0);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = GameState::new(Difficulty::Hard, 99);
        let b = GameState::new(Difficulty::Hard, 99);
        assert_eq!(a.bricks, b.bricks);
    }
}

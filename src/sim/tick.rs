//! Fixed-step simulation tick
//!
//! One call advances the world by one tick. The order of operations is
//! a compatibility contract: paddle move, brick scan, paddle bounce,
//! position integration, wall reflection against the prospective next
//! position, trail append, then the progression transitions. Brick and
//! paddle collisions see the pre-integration position, so a bounce
//! lands one tick after the position that triggered it.

use super::collision;
use super::state::{BrickStatus, GamePhase, GameState};
use crate::consts::*;

/// Latched input flags for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// "Move left" key currently held
    pub left_held: bool,
    /// "Move right" key currently held
    pub right_held: bool,
    /// Latest pointer x, overrides the hold keys when present
    pub pointer_x: Option<f32>,
}

/// What happened during a tick, for the HUD and the notification layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A brick was destroyed and its display value scored
    BrickDestroyed { points: u32 },
    PaddleBounce,
    WallBounce,
    /// Ball crossed the bottom edge
    BallDropped,
    /// Life lost but play continues with the remaining count
    LifeLost { lives: u32 },
    /// Grid cleared; waiting for acknowledgment before the next level
    LevelCleared { level: u32 },
    GameOver { score: u32 },
    GameWon { score: u32 },
}

/// Advance the game state by one tick.
///
/// No-op unless the phase is `Playing`; in particular nothing mutates
/// after the terminal latch is set, even if the caller keeps ticking.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_terminal || state.phase != GamePhase::Playing {
        return events;
    }
    state.time_ticks += 1;

    // 1. Paddle movement; pointer position wins over held keys
    if input.right_held && state.paddle.right() < CANVAS_WIDTH {
        state.paddle.x += PADDLE_STEP;
    } else if input.left_held && state.paddle.x > 0.0 {
        state.paddle.x -= PADDLE_STEP;
    }
    if let Some(pointer_x) = input.pointer_x {
        state.paddle.center_on(pointer_x);
    }

    // 2. Brick scan at the pre-integration ball position. Every brick
    //    is tested every tick; adjacent overlaps each bounce and score.
    let ball_center = state.ball.pos;
    for column in state.bricks.columns_mut() {
        for brick in column.iter_mut() {
            if !brick.is_active() || !collision::brick_contains(brick, ball_center) {
                continue;
            }
            state.ball.vel.y = -state.ball.vel.y;
            match &mut brick.durability {
                Some(d) => {
                    d.remaining_hits -= 1;
                    if d.remaining_hits == 0 {
                        let points = d.display_value;
                        brick.status = BrickStatus::Destroyed;
                        state.score += points;
                        events.push(GameEvent::BrickDestroyed { points });
                    } else {
                        // Cosmetic decay: 3 -> 2 -> 1. The destruction
                        // hit pays whatever is showing at that point.
                        d.display_value -= 1;
                    }
                }
                None => {
                    brick.status = BrickStatus::Destroyed;
                    state.score += 1;
                    events.push(GameEvent::BrickDestroyed { points: 1 });
                }
            }
        }
    }

    // 3. Paddle bounce, vertical only
    if collision::paddle_intercepts(&state.ball, &state.paddle) {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::PaddleBounce);
    }

    // 4. Integrate
    state.ball.pos += state.ball.vel;

    // 5. Wall reflection against the prospective next position
    if collision::exits_side_wall(&state.ball) {
        state.ball.vel.x = -state.ball.vel.x;
        events.push(GameEvent::WallBounce);
    }
    if collision::exits_ceiling(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // 6. Trail
    state.ball.record_trail();

    // Progression: level clear takes precedence over a ball drop
    if state.bricks.all_destroyed() {
        state.level += 1;
        if state.level <= TOTAL_LEVELS {
            state.phase = GamePhase::LevelCleared;
            log::info!("level cleared, next is {}", state.level);
            events.push(GameEvent::LevelCleared { level: state.level });
        } else {
            state.phase = GamePhase::GameWon;
            state.is_terminal = true;
            log::info!("game won with score {}", state.score);
            events.push(GameEvent::GameWon { score: state.score });
        }
    } else if collision::exits_floor(&state.ball) {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::BallDropped);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.is_terminal = true;
            log::info!("game over with score {}", state.score);
            events.push(GameEvent::GameOver { score: state.score });
        } else {
            state.reset_ball();
            events.push(GameEvent::LifeLost { lives: state.lives });
        }
    }

    events
}

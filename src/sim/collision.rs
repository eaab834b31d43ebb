//! Collision predicates for the axis-aligned play field
//!
//! All checks are pure. Brick and paddle tests run against the ball's
//! position before integration; wall tests run against the prospective
//! next position. The tick function relies on that split, so keep the
//! predicates side-effect free and call them in order.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};
use crate::consts::*;

/// Strict containment of a point in a brick's bounding box.
/// Grazing the edge does not count, matching the reference behavior.
pub fn brick_contains(brick: &Brick, point: Vec2) -> bool {
    point.x > brick.pos.x
        && point.x < brick.pos.x + BRICK_WIDTH
        && point.y > brick.pos.y
        && point.y < brick.pos.y + BRICK_HEIGHT
}

/// Ball center within the paddle's horizontal span and ball bottom at
/// or past the paddle top. Vertical bounce only; impact offset never
/// deflects horizontally.
pub fn paddle_intercepts(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x > paddle.x
        && ball.pos.x < paddle.right()
        && ball.pos.y + ball.radius > paddle.top()
}

/// Would the next step carry the ball past either side wall?
pub fn exits_side_wall(ball: &Ball) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > CANVAS_WIDTH - ball.radius || next_x < ball.radius
}

/// Would the next step carry the ball past the top wall?
pub fn exits_ceiling(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// Would the next step carry the ball past the bottom edge? The bottom
/// is never reflected; this is the life-loss trigger.
pub fn exits_floor(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y > CANVAS_HEIGHT - ball.radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(dx, dy))
    }

    #[test]
    fn test_brick_contains_is_strict() {
        let brick = Brick::active(Vec2::new(100.0, 50.0), None);
        assert!(brick_contains(&brick, Vec2::new(120.0, 60.0)));
        // Edges do not count
        assert!(!brick_contains(&brick, Vec2::new(100.0, 60.0)));
        assert!(!brick_contains(&brick, Vec2::new(120.0, 50.0)));
        assert!(!brick_contains(&brick, Vec2::new(175.0, 60.0)));
        assert!(!brick_contains(&brick, Vec2::new(120.0, 70.0)));
    }

    #[test]
    fn test_paddle_intercept_span_and_height() {
        let paddle = Paddle::default();
        let top = paddle.top();

        // Center over the paddle, bottom edge below paddle top
        let ball = ball_at(paddle.center_x(), top + 1.0 - BALL_RADIUS, 2.0, 2.0);
        assert!(paddle_intercepts(&ball, &paddle));

        // Too high
        let ball = ball_at(paddle.center_x(), top - BALL_RADIUS - 1.0, 2.0, 2.0);
        assert!(!paddle_intercepts(&ball, &paddle));

        // Outside the horizontal span
        let ball = ball_at(paddle.x - 1.0, top + 1.0 - BALL_RADIUS, 2.0, 2.0);
        assert!(!paddle_intercepts(&ball, &paddle));
    }

    #[test]
    fn test_side_wall_uses_prospective_position() {
        // Sitting inside the bound but about to cross it
        let ball = ball_at(CANVAS_WIDTH - BALL_RADIUS - 1.0, 300.0, 2.0, 0.0);
        assert!(exits_side_wall(&ball));
        // Same position, moving away
        let ball = ball_at(CANVAS_WIDTH - BALL_RADIUS - 1.0, 300.0, -2.0, 0.0);
        assert!(!exits_side_wall(&ball));
        // Left wall
        let ball = ball_at(BALL_RADIUS + 1.0, 300.0, -2.0, 0.0);
        assert!(exits_side_wall(&ball));
    }

    #[test]
    fn test_ceiling_and_floor() {
        let ball = ball_at(400.0, BALL_RADIUS + 1.0, 0.0, -2.0);
        assert!(exits_ceiling(&ball));
        assert!(!exits_floor(&ball));

        let ball = ball_at(400.0, CANVAS_HEIGHT - BALL_RADIUS - 1.0, 0.0, 2.0);
        assert!(exits_floor(&ball));
        assert!(!exits_ceiling(&ball));
    }
}

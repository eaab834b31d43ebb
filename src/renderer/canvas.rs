//! Canvas 2D drawing surface (wasm only)

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{brick_color, theme_background};
use crate::consts::*;
use crate::sim::GameState;

const PADDLE_COLOR: &str = "#0095DD";
const BALL_COLOR: &str = "#0095DD";
const BRICK_TEXT_COLOR: &str = "#FFFFFF";

/// Draws one frame of the world onto a 2D canvas context
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    theme: String,
}

impl CanvasRenderer {
    pub fn new(context: CanvasRenderingContext2d, theme: impl Into<String>) -> Self {
        Self {
            context,
            theme: theme.into(),
        }
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    /// Draw the complete frame: background, bricks, trail, ball, paddle
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        let ctx = &self.context;
        let w = CANVAS_WIDTH as f64;
        let h = CANVAS_HEIGHT as f64;

        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str(theme_background(&self.theme));
        ctx.fill_rect(0.0, 0.0, w, h);

        for brick in state.bricks.iter().filter(|b| b.is_active()) {
            ctx.set_fill_style_str(brick_color(brick.display_value()));
            ctx.fill_rect(
                brick.pos.x as f64,
                brick.pos.y as f64,
                BRICK_WIDTH as f64,
                BRICK_HEIGHT as f64,
            );
            if let Some(durability) = brick.durability {
                ctx.set_fill_style_str(BRICK_TEXT_COLOR);
                ctx.set_font("16px Arial");
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.fill_text(
                    &durability.remaining_hits.to_string(),
                    (brick.pos.x + BRICK_WIDTH / 2.0) as f64,
                    (brick.pos.y + BRICK_HEIGHT / 2.0) as f64,
                )?;
            }
        }

        // Trail fades in linearly toward the newest position
        let trail_len = state.ball.trail.len();
        for (i, pos) in state.ball.trail.iter().enumerate() {
            let alpha = 0.4 * (i + 1) as f64 / trail_len as f64;
            ctx.set_global_alpha(alpha);
            ctx.set_fill_style_str(BALL_COLOR);
            ctx.begin_path();
            ctx.arc(
                pos.x as f64,
                pos.y as f64,
                state.ball.radius as f64,
                0.0,
                std::f64::consts::TAU,
            )?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);

        ctx.set_fill_style_str(BALL_COLOR);
        ctx.begin_path();
        ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();

        ctx.set_fill_style_str(PADDLE_COLOR);
        ctx.fill_rect(
            state.paddle.x as f64,
            state.paddle.top() as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
        );

        Ok(())
    }
}

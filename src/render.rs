//! 2D canvas rendering
//!
//! A pure projection of [`SimState`](crate::sim::SimState) onto a
//! `CanvasRenderingContext2d`: clear, blocks, ball, paddles. Nothing here
//! mutates simulation state.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{COLOR, HIT_COLOR};
use crate::sim::SimState;

/// Holds the 2D context for the banner canvas.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Draw one frame. Errors from the context bubble up so the frame
    /// supervisor can halt the loop.
    pub fn draw(&self, state: &SimState) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, state.width as f64, state.height as f64);

        // Blocks keep their slot after a hit, just faded
        for block in &state.blocks {
            ctx.set_fill_style_str(if block.hit { HIT_COLOR } else { COLOR });
            ctx.fill_rect(block.x as f64, block.y as f64, block.size as f64, block.size as f64);
        }

        ctx.set_fill_style_str(COLOR);
        ctx.begin_path();
        ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            TAU,
        )?;
        ctx.fill();

        for paddle in &state.paddles {
            ctx.fill_rect(
                paddle.x as f64,
                paddle.y as f64,
                paddle.width as f64,
                paddle.height as f64,
            );
        }

        Ok(())
    }
}

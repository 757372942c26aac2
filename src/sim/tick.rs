//! Per-frame simulation step
//!
//! One call advances the banner by exactly one animation frame. The order is
//! fixed: advance, boundary bounce, paddle contact, paddle tracking, block
//! sweep. Rendering happens elsewhere and never feeds back into this.

use super::collision::{Axis, ball_block_overlap, ball_paddle_overlap, dominant_axis};
use super::state::SimState;

/// Advance the simulation by one frame.
pub fn tick(state: &mut SimState) {
    let (w, h) = (state.width, state.height);

    state.ball.pos += state.ball.vel;

    // Boundary bounce. Both axes are checked independently so a corner hit
    // reflects both components. Velocity flips but position is NOT clamped;
    // the ball may overlap a bound for one frame and re-enter on the next.
    if state.ball.pos.y - state.ball.radius < 0.0 || state.ball.pos.y + state.ball.radius > h {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if state.ball.pos.x - state.ball.radius < 0.0 || state.ball.pos.x + state.ball.radius > w {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Paddle contact flips the component perpendicular to the paddle's long
    // axis. No push-out: the reversed velocity separates them next frame.
    for paddle in &state.paddles {
        if ball_paddle_overlap(&state.ball, paddle) {
            if paddle.vertical {
                state.ball.vel.x = -state.ball.vel.x;
            } else {
                state.ball.vel.y = -state.ball.vel.y;
            }
        }
    }

    // Critically-damped tracking: clamp the target to keep the paddle fully
    // inside the field, then ease a tier-dependent fraction toward it.
    let blend = state.tier.paddle_blend();
    let ball_pos = state.ball.pos;
    for paddle in &mut state.paddles {
        if paddle.vertical {
            paddle.target = (ball_pos.y - paddle.height / 2.0).clamp(0.0, h - paddle.height);
            paddle.y += (paddle.target - paddle.y) * blend;
        } else {
            paddle.target = (ball_pos.x - paddle.width / 2.0).clamp(0.0, w - paddle.width);
            paddle.x += (paddle.target - paddle.x) * blend;
        }
    }

    // Block sweep: every still-standing block is tested each frame; the first
    // overlap knocks it out for good and reflects the dominant axis only.
    let ball = &mut state.ball;
    for block in &mut state.blocks {
        if !block.hit && ball_block_overlap(ball, block) {
            block.hit = true;
            match dominant_axis(ball.pos, block.center()) {
                Axis::Horizontal => ball.vel.x = -ball.vel.x,
                Axis::Vertical => ball.vel.y = -ball.vel.y,
            }
        }
    }
}

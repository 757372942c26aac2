//! Simulation state and core entity types
//!
//! One cohesive state struct owned by the running loop instance; it is fully
//! rebuilt on every resize, so nothing survives a re-layout.

use glam::Vec2;

use crate::consts::{BALL_START_X_FRAC, BALL_START_Y_FRAC};
use crate::viewport::{DeviceTier, LayoutError, Viewport};

use super::layout::layout_blocks;

/// A destructible pixel block.
///
/// Immutable once placed except for the hit flag, which flips permanently
/// from false to true the first time the ball overlaps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    /// Edge length (blocks are square)
    pub size: f32,
    pub hit: bool,
}

impl Block {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self { x, y, size, hit: false }
    }

    /// Block center, used to pick the reflection axis on a hit.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// The single bouncing ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// One of the four edge paddles.
///
/// A paddle never leaves its edge: only the coordinate along its free axis
/// (y for vertical paddles, x for horizontal ones) changes, eased toward
/// `target` each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Clamped tracking target along the free axis
    pub target: f32,
    /// Vertical paddles sit on the left/right edges and flip `dx` on contact
    pub vertical: bool,
}

impl Paddle {
    /// Current position along the free axis.
    #[inline]
    pub fn free_axis_pos(&self) -> f32 {
        if self.vertical { self.y } else { self.x }
    }

    /// Paddle extent along the free axis.
    #[inline]
    pub fn free_axis_len(&self) -> f32 {
        if self.vertical { self.height } else { self.width }
    }
}

/// Complete simulation state for one layout generation.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Field width in pixels
    pub width: f32,
    /// Field height in pixels
    pub height: f32,
    pub tier: DeviceTier,
    /// Uniform scale the current sizes were derived from
    pub scale: f32,
    pub ball: Ball,
    /// Left, right, top, bottom
    pub paddles: [Paddle; 4],
    pub blocks: Vec<Block>,
}

impl SimState {
    /// Build a fresh simulation for the measured viewport: lay the words out
    /// as blocks, spawn the ball near the top-right corner moving up-field,
    /// and place the four paddles flush against the edges, centered.
    pub fn new(viewport: &Viewport) -> Result<Self, LayoutError> {
        let layout = layout_blocks(viewport)?;
        let tier = viewport.tier;
        let (w, h) = (viewport.width, viewport.height);

        let speed = tier.ball_speed(viewport.scale);
        let ball = Ball {
            pos: Vec2::new(w * BALL_START_X_FRAC, h * BALL_START_Y_FRAC),
            vel: Vec2::new(-speed, speed),
            radius: tier.ball_radius(layout.large_pixel_size),
        };

        let pw = layout.large_pixel_size * tier.paddle_width_factor();
        let len = layout.large_pixel_size * tier.paddle_length_factor();

        let paddles = [
            // Left
            Paddle {
                x: 0.0,
                y: h / 2.0 - len / 2.0,
                width: pw,
                height: len,
                target: h / 2.0 - len / 2.0,
                vertical: true,
            },
            // Right
            Paddle {
                x: w - pw,
                y: h / 2.0 - len / 2.0,
                width: pw,
                height: len,
                target: h / 2.0 - len / 2.0,
                vertical: true,
            },
            // Top
            Paddle {
                x: w / 2.0 - len / 2.0,
                y: 0.0,
                width: len,
                height: pw,
                target: w / 2.0 - len / 2.0,
                vertical: false,
            },
            // Bottom
            Paddle {
                x: w / 2.0 - len / 2.0,
                y: h - pw,
                width: len,
                height: pw,
                target: w / 2.0 - len / 2.0,
                vertical: false,
            },
        ];

        Ok(Self {
            width: w,
            height: h,
            tier,
            scale: viewport.scale,
            ball,
            paddles,
            blocks: layout.blocks,
        })
    }

    /// Number of blocks already knocked out.
    pub fn hit_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.hit).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_viewport() -> Viewport {
        Viewport { width: 1000.0, height: 800.0, tier: DeviceTier::Desktop, scale: 1.0 }
    }

    #[test]
    fn ball_spawns_at_relative_start() {
        let state = SimState::new(&desktop_viewport()).unwrap();
        assert_eq!(state.ball.pos, Vec2::new(900.0, 80.0));
        // Up-field: left and down from the top-right corner
        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(state.ball.vel.x.abs(), state.ball.vel.y.abs());
    }

    #[test]
    fn four_paddles_flush_to_edges() {
        let state = SimState::new(&desktop_viewport()).unwrap();
        let [left, right, top, bottom] = state.paddles;

        assert_eq!(left.x, 0.0);
        assert!(left.vertical);
        assert_eq!(right.x + right.width, state.width);
        assert!(right.vertical);
        assert_eq!(top.y, 0.0);
        assert!(!top.vertical);
        assert_eq!(bottom.y + bottom.height, state.height);
        assert!(!bottom.vertical);

        // Centered along their free axis
        assert!((left.y - (state.height / 2.0 - left.height / 2.0)).abs() < 1e-3);
        assert!((top.x - (state.width / 2.0 - top.width / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn all_sizes_positive() {
        let state = SimState::new(&desktop_viewport()).unwrap();
        assert!(state.ball.radius > 0.0);
        assert!(state.paddles.iter().all(|p| p.width > 0.0 && p.height > 0.0));
        assert!(!state.blocks.is_empty());
        assert!(state.blocks.iter().all(|b| b.size > 0.0));
    }

    #[test]
    fn fresh_state_has_no_hits() {
        let state = SimState::new(&desktop_viewport()).unwrap();
        assert_eq!(state.hit_count(), 0);
    }
}

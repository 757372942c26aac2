//! Deterministic simulation module
//!
//! All banner gameplay lives here. This module must be pure and deterministic:
//! - One fixed step per animation frame
//! - No hidden randomness (the frame sequence is a function of frame count)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{Axis, ball_block_overlap, ball_paddle_overlap, dominant_axis};
pub use layout::{BlockLayout, layout_blocks};
pub use state::{Ball, Block, Paddle, SimState};
pub use tick::tick;

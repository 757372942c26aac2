//! Banner Pong - an auto-playing Pong/Breakout hero banner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, block layout)
//! - `font`: Bitmap glyph table the banner words are built from
//! - `viewport`: Device-tier classification and responsive scaling
//! - `render`: 2D canvas rendering (wasm only)

pub mod font;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;
pub mod viewport;

pub use viewport::{DeviceTier, LayoutError, Viewport};

/// Banner configuration constants
pub mod consts {
    /// Reference design width the scale factor is computed against
    pub const DESIGN_WIDTH: f32 = 1000.0;
    /// Reference design height the scale factor is computed against
    pub const DESIGN_HEIGHT: f32 = 800.0;

    /// The two word-lines the blocks spell (large line, small line)
    pub const WORDS: [&str; 2] = ["PORTFOLIO", "WEBSITE"];

    /// Horizontal gap between glyphs, in pixel-size units
    pub const LETTER_SPACING: f32 = 1.0;
    /// Horizontal gap between space-separated words, in pixel-size units
    pub const WORD_SPACING: f32 = 3.0;
    /// Row count of every glyph grid
    pub const GLYPH_ROWS: usize = 5;

    /// Ball starts 90% across the field
    pub const BALL_START_X_FRAC: f32 = 0.9;
    /// Ball starts 10% down the field
    pub const BALL_START_Y_FRAC: f32 = 0.1;

    /// Widths below this are degenerate; re-initialization is skipped
    pub const MIN_CANVAS_WIDTH: f32 = 50.0;
    /// Resize/orientation events are coalesced over this window (ms)
    pub const RESIZE_DEBOUNCE_MS: i32 = 250;

    /// Fill for un-hit blocks, the ball and the paddles
    pub const COLOR: &str = "rgb(124, 58, 237)";
    /// Fill for blocks already knocked out
    pub const HIT_COLOR: &str = "rgba(124, 58, 237, 0.3)";
}

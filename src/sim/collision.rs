//! Overlap tests and reflection-axis selection
//!
//! The ball's bounding circle is approximated as a square for the AABB tests,
//! matching the banner's original feel: cheap, and indistinguishable at block
//! sizes this small.

use glam::Vec2;

use super::state::{Ball, Block, Paddle};

/// Axis of the velocity component a collision flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Ball-vs-block overlap: bounding square against the block's AABB.
#[inline]
pub fn ball_block_overlap(ball: &Ball, block: &Block) -> bool {
    ball.pos.x + ball.radius > block.x
        && ball.pos.x - ball.radius < block.x + block.size
        && ball.pos.y + ball.radius > block.y
        && ball.pos.y - ball.radius < block.y + block.size
}

/// Ball-vs-paddle overlap.
///
/// The leading edge (center +/- radius) is tested on the paddle's pinned
/// axis; on the long axis only the ball center must be inside. Penetration is
/// tolerated - there is no push-out, velocity reversal separates them on the
/// next frame.
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    if paddle.vertical {
        ball.pos.x - ball.radius < paddle.x + paddle.width
            && ball.pos.x + ball.radius > paddle.x
            && ball.pos.y > paddle.y
            && ball.pos.y < paddle.y + paddle.height
    } else {
        ball.pos.y - ball.radius < paddle.y + paddle.height
            && ball.pos.y + ball.radius > paddle.y
            && ball.pos.x > paddle.x
            && ball.pos.x < paddle.x + paddle.width
    }
}

/// Dominant axis of penetration: compare the absolute horizontal vs vertical
/// distance from the ball center to the block center. Ties go vertical.
#[inline]
pub fn dominant_axis(ball_pos: Vec2, block_center: Vec2) -> Axis {
    if (ball_pos.x - block_center.x).abs() > (ball_pos.y - block_center.y).abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, radius: f32) -> Ball {
        Ball { pos: Vec2::new(x, y), vel: Vec2::new(4.0, 4.0), radius }
    }

    #[test]
    fn block_overlap_hit_and_miss() {
        let block = Block::new(100.0, 100.0, 32.0);

        // Ball radius 4 penetrating the left edge
        let ball = ball_at(97.0, 116.0, 4.0);
        assert!(ball_block_overlap(&ball, &block));

        // Exactly touching the left edge is a miss (strict inequality)
        let ball = ball_at(96.0, 116.0, 4.0);
        assert!(!ball_block_overlap(&ball, &block));

        // Overlapping in x only
        let ball = ball_at(116.0, 50.0, 4.0);
        assert!(!ball_block_overlap(&ball, &block));
    }

    #[test]
    fn dominant_axis_prefers_larger_offset() {
        let center = Block::new(100.0, 100.0, 32.0).center(); // (116, 116)

        // Entered from the side: |dx| = 20 > |dy| = 0
        assert_eq!(dominant_axis(Vec2::new(96.0, 116.0), center), Axis::Horizontal);
        // Entered from above: |dy| = 20 > |dx| = 0
        assert_eq!(dominant_axis(Vec2::new(116.0, 96.0), center), Axis::Vertical);
        // Tie resolves vertical
        assert_eq!(dominant_axis(Vec2::new(96.0, 96.0), center), Axis::Vertical);
    }

    #[test]
    fn vertical_paddle_overlap_needs_center_in_span() {
        let paddle = Paddle {
            x: 0.0,
            y: 100.0,
            width: 8.0,
            height: 80.0,
            target: 100.0,
            vertical: true,
        };

        // Leading edge reaches the paddle face, center inside the span
        let ball = ball_at(10.0, 140.0, 4.0);
        assert!(ball_paddle_overlap(&ball, &paddle));

        // Same x but center above the paddle span: no contact
        let ball = ball_at(10.0, 99.0, 4.0);
        assert!(!ball_paddle_overlap(&ball, &paddle));

        // Too far from the edge
        let ball = ball_at(20.0, 140.0, 4.0);
        assert!(!ball_paddle_overlap(&ball, &paddle));
    }

    #[test]
    fn horizontal_paddle_overlap() {
        let paddle = Paddle {
            x: 400.0,
            y: 0.0,
            width: 80.0,
            height: 8.0,
            target: 400.0,
            vertical: false,
        };

        let ball = ball_at(440.0, 10.0, 4.0);
        assert!(ball_paddle_overlap(&ball, &paddle));

        let ball = ball_at(399.0, 10.0, 4.0);
        assert!(!ball_paddle_overlap(&ball, &paddle));
    }
}

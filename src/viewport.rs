//! Device-tier classification and responsive scaling
//!
//! Every size constant in the simulation (pixel size, ball speed, paddle
//! dimensions) is proportional to the uniform scale derived here, so a
//! re-measure fully determines the next layout.

use std::fmt;

use crate::consts::{DESIGN_HEIGHT, DESIGN_WIDTH, MIN_CANVAS_WIDTH};

/// Discrete device-size classification, selected by viewport width.
/// Tiers pick scale multipliers and layout ratios; they never change the
/// frame semantics themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    /// Phones up to 400px (iPhone-size)
    SmallMobile,
    /// Everything up to 768px
    Mobile,
    /// Wider than 768px
    Desktop,
}

impl DeviceTier {
    /// All tiers in ascending width order.
    pub const ALL: &'static [DeviceTier] =
        &[DeviceTier::SmallMobile, DeviceTier::Mobile, DeviceTier::Desktop];

    /// Classify a viewport width in CSS pixels.
    pub fn classify(viewport_width: f32) -> Self {
        if viewport_width <= 400.0 {
            DeviceTier::SmallMobile
        } else if viewport_width <= 768.0 {
            DeviceTier::Mobile
        } else {
            DeviceTier::Desktop
        }
    }

    /// Short human-readable label for logging.
    pub fn label(self) -> &'static str {
        match self {
            Self::SmallMobile => "small-mobile",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }

    /// Base scale multiplier applied on top of the design-size ratio.
    pub fn base_scale(self) -> f32 {
        match self {
            Self::SmallMobile => 0.55,
            Self::Mobile => 0.65,
            Self::Desktop => 1.0,
        }
    }

    /// Canvas height as a ratio of its width.
    pub fn height_ratio(self) -> f32 {
        match self {
            Self::SmallMobile => 0.6,
            Self::Mobile => 0.7,
            Self::Desktop => 0.6,
        }
    }

    /// Cap on the derived canvas height, in pixels.
    pub fn max_height(self) -> f32 {
        match self {
            Self::SmallMobile => 250.0,
            Self::Mobile => 300.0,
            Self::Desktop => 500.0,
        }
    }

    /// Un-adjusted large glyph pixel size (scaled later by the fit factor).
    pub fn large_pixel_size(self, scale: f32) -> f32 {
        match self {
            Self::SmallMobile => 5.0 * scale,
            Self::Mobile => 6.0 * scale,
            Self::Desktop => 8.0 * scale,
        }
    }

    /// Un-adjusted small glyph pixel size.
    pub fn small_pixel_size(self, scale: f32) -> f32 {
        match self {
            Self::SmallMobile => 2.5 * scale,
            Self::Mobile => 3.0 * scale,
            Self::Desktop => 4.0 * scale,
        }
    }

    /// Per-frame ball displacement magnitude along each axis.
    pub fn ball_speed(self, scale: f32) -> f32 {
        match self {
            Self::SmallMobile => 3.5 * scale,
            Self::Mobile => 4.0 * scale,
            Self::Desktop => 6.0 * scale,
        }
    }

    /// Fraction of the canvas width the wider word-line should occupy.
    pub fn width_fraction(self) -> f32 {
        match self {
            Self::SmallMobile => 0.65,
            Self::Mobile => 0.7,
            Self::Desktop => 0.8,
        }
    }

    /// Vertical gap between the two word-lines, in large-pixel units.
    pub fn line_gap_factor(self) -> f32 {
        match self {
            Self::SmallMobile => 2.0,
            Self::Mobile => 3.0,
            Self::Desktop => 4.0,
        }
    }

    /// Per-frame blend fraction easing a paddle toward its target.
    /// Smaller devices track faster; the lag is intentional on desktop.
    pub fn paddle_blend(self) -> f32 {
        match self {
            Self::SmallMobile => 0.2,
            Self::Mobile => 0.15,
            Self::Desktop => 0.1,
        }
    }

    /// Paddle thickness across its pinned axis, in large-pixel units.
    pub fn paddle_width_factor(self) -> f32 {
        match self {
            Self::SmallMobile => 0.7,
            Self::Mobile => 0.8,
            Self::Desktop => 1.0,
        }
    }

    /// Paddle length along its free axis, in large-pixel units.
    pub fn paddle_length_factor(self) -> f32 {
        match self {
            Self::SmallMobile => 6.0,
            Self::Mobile => 8.0,
            Self::Desktop => 10.0,
        }
    }

    /// Ball radius as a fraction of the adjusted large pixel size.
    pub fn ball_radius(self, large_pixel_size: f32) -> f32 {
        match self {
            Self::SmallMobile => large_pixel_size / 3.0,
            Self::Mobile => large_pixel_size / 2.5,
            Self::Desktop => large_pixel_size / 2.0,
        }
    }
}

impl fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a (re-)initialization was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// Container too small to lay the words out
    DegenerateSize { width: f32, height: f32 },
    /// The word-lines have zero rendered width (empty words or unknown glyphs)
    EmptyLayout,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::DegenerateSize { width, height } => {
                write!(f, "container {width}x{height} is too small to lay out")
            }
            LayoutError::EmptyLayout => write!(f, "word layout produced no blocks"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Measured canvas geometry plus the derived tier and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas width in pixels (the measured container width)
    pub width: f32,
    /// Canvas height in pixels, derived from the tier's height policy
    pub height: f32,
    pub tier: DeviceTier,
    /// Uniform scale factor relative to the reference design size
    pub scale: f32,
}

impl Viewport {
    /// Derive the full viewport state from a measured container width and the
    /// window width used for tier classification.
    ///
    /// Height is `min(width * ratio, cap)` with tier-specific ratio and cap.
    pub fn measure(container_width: f32, window_width: f32) -> Result<Self, LayoutError> {
        let tier = DeviceTier::classify(window_width);
        let height = (container_width * tier.height_ratio()).min(tier.max_height());

        if container_width < MIN_CANVAS_WIDTH || height < 1.0 {
            return Err(LayoutError::DegenerateSize { width: container_width, height });
        }

        let scale =
            (container_width / DESIGN_WIDTH).min(height / DESIGN_HEIGHT) * tier.base_scale();

        Ok(Self { width: container_width, height, tier, scale })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(DeviceTier::classify(320.0), DeviceTier::SmallMobile);
        assert_eq!(DeviceTier::classify(400.0), DeviceTier::SmallMobile);
        assert_eq!(DeviceTier::classify(401.0), DeviceTier::Mobile);
        assert_eq!(DeviceTier::classify(768.0), DeviceTier::Mobile);
        assert_eq!(DeviceTier::classify(1440.0), DeviceTier::Desktop);
    }

    #[test]
    fn height_is_ratio_capped() {
        // 1000px desktop: 0.6 * 1000 = 600, capped at 500
        let vp = Viewport::measure(1000.0, 1000.0).unwrap();
        assert_eq!(vp.tier, DeviceTier::Desktop);
        assert_eq!(vp.height, 500.0);

        // 360px small mobile: 0.6 * 360 = 216, below the 250 cap
        let vp = Viewport::measure(360.0, 360.0).unwrap();
        assert_eq!(vp.tier, DeviceTier::SmallMobile);
        assert!((vp.height - 216.0).abs() < 1e-3);
    }

    #[test]
    fn scale_uses_smaller_design_ratio() {
        let vp = Viewport::measure(1000.0, 1000.0).unwrap();
        // min(1000/1000, 500/800) * 1.0 = 0.625
        assert!((vp.scale - 0.625).abs() < 1e-6);
    }

    #[test]
    fn small_mobile_applies_base_scale() {
        let vp = Viewport::measure(360.0, 360.0).unwrap();
        let expected = (360.0_f32 / 1000.0).min(216.0 / 800.0) * 0.55;
        assert!((vp.scale - expected).abs() < 1e-6);
    }

    #[test]
    fn degenerate_width_is_rejected() {
        let err = Viewport::measure(10.0, 10.0).unwrap_err();
        assert!(matches!(err, LayoutError::DegenerateSize { .. }));
    }

    #[test]
    fn label_covers_all_tiers() {
        for &tier in DeviceTier::ALL {
            assert!(!tier.label().is_empty());
            assert_eq!(format!("{tier}"), tier.label());
        }
    }
}

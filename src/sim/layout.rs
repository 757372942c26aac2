//! Block layout: spelling the banner words with pixel blocks
//!
//! Two word-lines at two glyph sizes. Raw per-tier pixel sizes are re-scaled
//! by a fit factor so the wider line occupies the tier's target fraction of
//! the canvas width, then both lines are vertically centered as a block.

use crate::consts::{GLYPH_ROWS, LETTER_SPACING, WORD_SPACING, WORDS};
use crate::font::{glyph, glyph_cols, word_width};
use crate::viewport::{DeviceTier, LayoutError, Viewport};

use super::state::Block;

/// Result of a layout pass: the blocks plus the fit-adjusted pixel sizes that
/// every other size constant (ball radius, paddle dimensions) derives from.
#[derive(Debug, Clone)]
pub struct BlockLayout {
    pub blocks: Vec<Block>,
    /// Adjusted pixel size of the large (first) word-line
    pub large_pixel_size: f32,
    /// Adjusted pixel size of the small (second) word-line
    pub small_pixel_size: f32,
}

/// Rendered width of the second line: space-separated sub-words at the small
/// pixel size, separated by the word-spacing multiple.
fn small_line_width(pixel_size: f32) -> f32 {
    WORDS[1]
        .split(' ')
        .enumerate()
        .map(|(i, w)| {
            word_width(w, pixel_size) + if i > 0 { WORD_SPACING * pixel_size } else { 0.0 }
        })
        .sum()
}

/// Emit one glyph's filled cells as blocks and return the horizontal advance.
fn place_word(blocks: &mut Vec<Block>, word: &str, start_x: f32, start_y: f32, ps: f32) -> f32 {
    let mut x = start_x;
    for letter in word.chars() {
        let Some(g) = glyph(letter) else { continue };
        for (i, row) in g.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    blocks.push(Block::new(x + j as f32 * ps, start_y + i as f32 * ps, ps));
                }
            }
        }
        x += (glyph_cols(g) as f32 + LETTER_SPACING) * ps;
    }
    x
}

/// Generate the full block field for a measured viewport.
pub fn layout_blocks(viewport: &Viewport) -> Result<BlockLayout, LayoutError> {
    let tier = viewport.tier;
    let large = tier.large_pixel_size(viewport.scale);
    let small = tier.small_pixel_size(viewport.scale);

    // Fit factor: the wider of the two raw lines should occupy the tier's
    // target fraction of the canvas width.
    let total_width = word_width(WORDS[0], large).max(small_line_width(small));
    if total_width <= 0.0 {
        return Err(LayoutError::EmptyLayout);
    }
    let fit = (viewport.width * tier.width_fraction()) / total_width;
    let adj_large = large * fit;
    let adj_small = small * fit;

    let large_text_height = GLYPH_ROWS as f32 * adj_large;
    let small_text_height = GLYPH_ROWS as f32 * adj_small;
    let line_gap = tier.line_gap_factor() * adj_large;
    let total_text_height = large_text_height + line_gap + small_text_height;

    // Center the two lines as a block; on the smallest tier bias the block
    // upward to leave room for the bottom paddle.
    let mut start_y = (viewport.height - total_text_height) / 2.0;
    if tier == DeviceTier::SmallMobile {
        start_y = ((viewport.height - total_text_height) / 2.0 - adj_large).max(adj_large);
    }

    let mut blocks = Vec::new();

    // Large line
    let line_width = word_width(WORDS[0], adj_large);
    place_word(&mut blocks, WORDS[0], (viewport.width - line_width) / 2.0, start_y, adj_large);

    // Small line, sub-word by sub-word
    let small_y = start_y + large_text_height + line_gap;
    let line_width = small_line_width(adj_small);
    let mut x = (viewport.width - line_width) / 2.0;
    for sub_word in WORDS[1].split(' ') {
        x = place_word(&mut blocks, sub_word, x, small_y, adj_small);
        x += WORD_SPACING * adj_small;
    }

    if blocks.is_empty() {
        return Err(LayoutError::EmptyLayout);
    }

    Ok(BlockLayout { blocks, large_pixel_size: adj_large, small_pixel_size: adj_small })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f32, window_width: f32) -> Viewport {
        Viewport::measure(width, window_width).unwrap()
    }

    fn filled_cells(word: &str) -> usize {
        word.chars()
            .filter_map(glyph)
            .map(|g| g.iter().flat_map(|r| r.iter()).filter(|&&c| c != 0).count())
            .sum()
    }

    #[test]
    fn block_count_matches_filled_cells() {
        let layout = layout_blocks(&viewport(1000.0, 1000.0)).unwrap();
        let expected = filled_cells(WORDS[0]) + filled_cells(WORDS[1]);
        assert_eq!(layout.blocks.len(), expected);
    }

    #[test]
    fn wider_line_fits_target_fraction() {
        let vp = viewport(1000.0, 1000.0);
        let layout = layout_blocks(&vp).unwrap();

        let min_x = layout.blocks.iter().map(|b| b.x).fold(f32::INFINITY, f32::min);
        let max_x =
            layout.blocks.iter().map(|b| b.x + b.size).fold(f32::NEG_INFINITY, f32::max);
        let spanned = max_x - min_x;

        let target = vp.width * vp.tier.width_fraction();
        assert!((spanned - target).abs() < 1.0, "spanned {spanned}, target {target}");
        // And centered
        assert!((min_x - (vp.width - spanned) / 2.0).abs() < 1.0);
    }

    #[test]
    fn lines_are_vertically_centered() {
        let vp = viewport(1000.0, 1000.0);
        let layout = layout_blocks(&vp).unwrap();

        let min_y = layout.blocks.iter().map(|b| b.y).fold(f32::INFINITY, f32::min);
        let max_y =
            layout.blocks.iter().map(|b| b.y + b.size).fold(f32::NEG_INFINITY, f32::max);

        let top_margin = min_y;
        let bottom_margin = vp.height - max_y;
        assert!((top_margin - bottom_margin).abs() < 1.0);
    }

    #[test]
    fn small_tier_biases_text_upward() {
        let vp = viewport(360.0, 360.0);
        assert_eq!(vp.tier, DeviceTier::SmallMobile);
        let layout = layout_blocks(&vp).unwrap();

        let min_y = layout.blocks.iter().map(|b| b.y).fold(f32::INFINITY, f32::min);
        let max_y =
            layout.blocks.iter().map(|b| b.y + b.size).fold(f32::NEG_INFINITY, f32::max);

        // Top margin smaller than bottom margin, but never above the floor
        assert!(min_y < vp.height - max_y);
        assert!(min_y >= layout.large_pixel_size - 1e-3);
    }

    #[test]
    fn second_line_uses_smaller_pixels() {
        let layout = layout_blocks(&viewport(1000.0, 1000.0)).unwrap();
        assert!(layout.small_pixel_size < layout.large_pixel_size);
        // Desktop raw sizes are 8 and 4, so the adjusted ratio stays 2:1
        assert!((layout.large_pixel_size / layout.small_pixel_size - 2.0).abs() < 1e-3);
    }

    #[test]
    fn relayout_at_new_width_regenerates_everything() {
        let wide = layout_blocks(&viewport(800.0, 800.0)).unwrap();
        let narrow = layout_blocks(&viewport(300.0, 300.0)).unwrap();

        // Same glyph cells, fresh blocks at the new tier's geometry
        assert_eq!(wide.blocks.len(), narrow.blocks.len());
        assert!(narrow.large_pixel_size < wide.large_pixel_size);
        let narrow_max_x =
            narrow.blocks.iter().map(|b| b.x + b.size).fold(f32::NEG_INFINITY, f32::max);
        assert!(narrow_max_x <= 300.0);
        assert!(narrow.blocks.iter().all(|b| !b.hit));
    }
}

//! Bitmap glyph table for the banner words
//!
//! Each glyph is a 5-row binary grid; a filled cell becomes one destructible
//! block. Glyph widths vary (3-5 columns), heights are always
//! [`GLYPH_ROWS`](crate::consts::GLYPH_ROWS).

use crate::consts::LETTER_SPACING;

/// A glyph bitmap: rows of filled (1) / empty (0) cells.
pub type Glyph = &'static [&'static [u8]];

/// Look up the bitmap for an uppercase letter.
///
/// Letters without a bitmap are skipped by layout entirely (no advance,
/// no blocks).
pub fn glyph(letter: char) -> Option<Glyph> {
    let g: Glyph = match letter {
        'P' => &[
            &[1, 1, 1, 1],
            &[1, 0, 0, 1],
            &[1, 1, 1, 1],
            &[1, 0, 0, 0],
            &[1, 0, 0, 0],
        ],
        'R' => &[
            &[1, 1, 1, 1],
            &[1, 0, 0, 1],
            &[1, 1, 1, 1],
            &[1, 0, 1, 0],
            &[1, 0, 0, 1],
        ],
        'O' => &[
            &[1, 1, 1, 1],
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
            &[1, 1, 1, 1],
        ],
        'M' => &[
            &[1, 0, 0, 0, 1],
            &[1, 1, 0, 1, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
        ],
        'T' => &[
            &[1, 1, 1, 1, 1],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
        ],
        'I' => &[
            &[1, 1, 1],
            &[0, 1, 0],
            &[0, 1, 0],
            &[0, 1, 0],
            &[1, 1, 1],
        ],
        'N' => &[
            &[1, 0, 0, 0, 1],
            &[1, 1, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 1, 1],
            &[1, 0, 0, 0, 1],
        ],
        'G' => &[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 0],
            &[1, 0, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ],
        'S' => &[
            &[1, 1, 1, 1],
            &[1, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 1],
            &[1, 1, 1, 1],
        ],
        'A' => &[
            &[0, 1, 1, 0],
            &[1, 0, 0, 1],
            &[1, 1, 1, 1],
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
        ],
        'F' => &[
            &[1, 1, 1, 1],
            &[1, 0, 0, 0],
            &[1, 1, 1, 0],
            &[1, 0, 0, 0],
            &[1, 0, 0, 0],
        ],
        'L' => &[
            &[1, 0, 0, 0],
            &[1, 0, 0, 0],
            &[1, 0, 0, 0],
            &[1, 0, 0, 0],
            &[1, 1, 1, 1],
        ],
        'Y' => &[
            &[1, 0, 0, 0, 1],
            &[0, 1, 0, 1, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
        ],
        'U' => &[
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
            &[1, 1, 1, 1],
        ],
        'D' => &[
            &[1, 1, 1, 0],
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
            &[1, 0, 0, 1],
            &[1, 1, 1, 0],
        ],
        'E' => &[
            &[1, 1, 1, 1],
            &[1, 0, 0, 0],
            &[1, 1, 1, 1],
            &[1, 0, 0, 0],
            &[1, 1, 1, 1],
        ],
        'W' => &[
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 1, 0, 1, 1],
            &[1, 0, 0, 0, 1],
        ],
        'B' => &[
            &[1, 1, 1, 0],
            &[1, 0, 0, 1],
            &[1, 1, 1, 0],
            &[1, 0, 0, 1],
            &[1, 1, 1, 0],
        ],
        _ => return None,
    };
    Some(g)
}

/// Column count of a glyph (all rows share it).
#[inline]
pub fn glyph_cols(g: Glyph) -> usize {
    g[0].len()
}

/// Rendered width of a word at a given pixel size.
///
/// Horizontal advance per glyph is `(cols + LETTER_SPACING) * pixel_size`;
/// the trailing spacing after the last glyph is removed.
pub fn word_width(word: &str, pixel_size: f32) -> f32 {
    let mut width = 0.0;
    let mut any = false;
    for letter in word.chars() {
        if let Some(g) = glyph(letter) {
            width += (glyph_cols(g) as f32 + LETTER_SPACING) * pixel_size;
            any = true;
        }
    }
    if any { width - LETTER_SPACING * pixel_size } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_five_uniform_rows() {
        for letter in "PROMTINGSAFLYUDEWB".chars() {
            let g = glyph(letter).unwrap();
            assert_eq!(g.len(), crate::consts::GLYPH_ROWS, "rows of {letter}");
            let cols = glyph_cols(g);
            assert!(g.iter().all(|row| row.len() == cols), "ragged rows in {letter}");
        }
    }

    #[test]
    fn unknown_letters_have_no_glyph() {
        assert!(glyph('Z').is_none());
        assert!(glyph('q').is_none());
    }

    #[test]
    fn word_width_matches_manual_sum() {
        // "IT" at pixel size 2: I is 3 cols, T is 5 cols
        // (3 + 1)*2 + (5 + 1)*2 - 1*2 = 8 + 12 - 2 = 18
        assert!((word_width("IT", 2.0) - 18.0).abs() < f32::EPSILON);
    }

    #[test]
    fn banner_words_are_fully_covered() {
        for word in crate::consts::WORDS {
            for letter in word.chars() {
                assert!(glyph(letter).is_some(), "missing glyph for {letter}");
            }
            assert!(word_width(word, 1.0) > 0.0);
        }
    }

    #[test]
    fn empty_word_has_zero_width() {
        assert_eq!(word_width("", 4.0), 0.0);
        assert_eq!(word_width("??", 4.0), 0.0);
    }
}

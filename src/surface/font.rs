//! Single-stroke vector font for uppercase Latin letters.
//!
//! Each glyph is a handful of line segments on a unit cell (x and y in
//! 0..1, y up). [`glyph_strokes`] recentres them on the origin and squeezes
//! the cell to [`GLYPH_ASPECT`] so callers only scale and rotate.

use glam::Vec2;

/// Glyph cell width relative to its height.
pub const GLYPH_ASPECT: f32 = 0.6;

type Strokes = &'static [[f32; 4]];

const A: Strokes = &[[0.0, 0.0, 0.5, 1.0], [0.5, 1.0, 1.0, 0.0], [0.2, 0.4, 0.8, 0.4]];
const B: Strokes = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.7, 1.0],
    [0.7, 1.0, 0.9, 0.85],
    [0.9, 0.85, 0.9, 0.65],
    [0.9, 0.65, 0.7, 0.5],
    [0.0, 0.5, 0.7, 0.5],
    [0.7, 0.5, 1.0, 0.3],
    [1.0, 0.3, 1.0, 0.15],
    [1.0, 0.15, 0.8, 0.0],
    [0.8, 0.0, 0.0, 0.0],
];
const C: Strokes = &[
    [1.0, 0.9, 0.8, 1.0],
    [0.8, 1.0, 0.2, 1.0],
    [0.2, 1.0, 0.0, 0.8],
    [0.0, 0.8, 0.0, 0.2],
    [0.0, 0.2, 0.2, 0.0],
    [0.2, 0.0, 0.8, 0.0],
    [0.8, 0.0, 1.0, 0.1],
];
const D: Strokes = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.6, 1.0],
    [0.6, 1.0, 1.0, 0.7],
    [1.0, 0.7, 1.0, 0.3],
    [1.0, 0.3, 0.6, 0.0],
    [0.6, 0.0, 0.0, 0.0],
];
const E: Strokes = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 0.5, 0.7, 0.5],
    [0.0, 0.0, 1.0, 0.0],
];
const F: Strokes = &[[0.0, 0.0, 0.0, 1.0], [0.0, 1.0, 1.0, 1.0], [0.0, 0.5, 0.7, 0.5]];
const G: Strokes = &[
    [1.0, 0.9, 0.8, 1.0],
    [0.8, 1.0, 0.2, 1.0],
    [0.2, 1.0, 0.0, 0.8],
    [0.0, 0.8, 0.0, 0.2],
    [0.0, 0.2, 0.2, 0.0],
    [0.2, 0.0, 0.8, 0.0],
    [0.8, 0.0, 1.0, 0.2],
    [1.0, 0.2, 1.0, 0.45],
    [1.0, 0.45, 0.55, 0.45],
];
const H: Strokes = &[[0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 1.0, 1.0], [0.0, 0.5, 1.0, 0.5]];
const I: Strokes = &[[0.5, 0.0, 0.5, 1.0], [0.2, 1.0, 0.8, 1.0], [0.2, 0.0, 0.8, 0.0]];
const J: Strokes = &[
    [0.3, 1.0, 1.0, 1.0],
    [0.8, 1.0, 0.8, 0.2],
    [0.8, 0.2, 0.6, 0.0],
    [0.6, 0.0, 0.2, 0.0],
    [0.2, 0.0, 0.0, 0.2],
];
const K: Strokes = &[[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 0.0, 0.45], [0.3, 0.6, 1.0, 0.0]];
const L: Strokes = &[[0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]];
const M: Strokes = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.5, 0.4],
    [0.5, 0.4, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.0],
];
const N: Strokes = &[[0.0, 0.0, 0.0, 1.0], [0.0, 1.0, 1.0, 0.0], [1.0, 0.0, 1.0, 1.0]];
const O: Strokes = &[
    [0.2, 0.0, 0.8, 0.0],
    [0.8, 0.0, 1.0, 0.2],
    [1.0, 0.2, 1.0, 0.8],
    [1.0, 0.8, 0.8, 1.0],
    [0.8, 1.0, 0.2, 1.0],
    [0.2, 1.0, 0.0, 0.8],
    [0.0, 0.8, 0.0, 0.2],
    [0.0, 0.2, 0.2, 0.0],
];
const P: Strokes = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.8, 1.0],
    [0.8, 1.0, 1.0, 0.85],
    [1.0, 0.85, 1.0, 0.6],
    [1.0, 0.6, 0.8, 0.45],
    [0.8, 0.45, 0.0, 0.45],
];
const Q: Strokes = &[
    [0.2, 0.0, 0.8, 0.0],
    [0.8, 0.0, 1.0, 0.2],
    [1.0, 0.2, 1.0, 0.8],
    [1.0, 0.8, 0.8, 1.0],
    [0.8, 1.0, 0.2, 1.0],
    [0.2, 1.0, 0.0, 0.8],
    [0.0, 0.8, 0.0, 0.2],
    [0.0, 0.2, 0.2, 0.0],
    [0.6, 0.3, 1.0, 0.0],
];
const R: Strokes = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.8, 1.0],
    [0.8, 1.0, 1.0, 0.85],
    [1.0, 0.85, 1.0, 0.6],
    [1.0, 0.6, 0.8, 0.45],
    [0.8, 0.45, 0.0, 0.45],
    [0.5, 0.45, 1.0, 0.0],
];
const S: Strokes = &[
    [1.0, 0.9, 0.8, 1.0],
    [0.8, 1.0, 0.2, 1.0],
    [0.2, 1.0, 0.0, 0.8],
    [0.0, 0.8, 0.0, 0.65],
    [0.0, 0.65, 0.2, 0.5],
    [0.2, 0.5, 0.8, 0.5],
    [0.8, 0.5, 1.0, 0.35],
    [1.0, 0.35, 1.0, 0.2],
    [1.0, 0.2, 0.8, 0.0],
    [0.8, 0.0, 0.2, 0.0],
    [0.2, 0.0, 0.0, 0.1],
];
const T: Strokes = &[[0.0, 1.0, 1.0, 1.0], [0.5, 1.0, 0.5, 0.0]];
const U: Strokes = &[
    [0.0, 1.0, 0.0, 0.2],
    [0.0, 0.2, 0.2, 0.0],
    [0.2, 0.0, 0.8, 0.0],
    [0.8, 0.0, 1.0, 0.2],
    [1.0, 0.2, 1.0, 1.0],
];
const V: Strokes = &[[0.0, 1.0, 0.5, 0.0], [0.5, 0.0, 1.0, 1.0]];
const W: Strokes = &[
    [0.0, 1.0, 0.2, 0.0],
    [0.2, 0.0, 0.5, 0.6],
    [0.5, 0.6, 0.8, 0.0],
    [0.8, 0.0, 1.0, 1.0],
];
const X: Strokes = &[[0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 1.0, 0.0]];
const Y: Strokes = &[[0.0, 1.0, 0.5, 0.5], [1.0, 1.0, 0.5, 0.5], [0.5, 0.5, 0.5, 0.0]];
const Z: Strokes = &[[0.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]];

/// Drawn for characters the font does not cover.
const MISSING: Strokes = &[
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 0.0],
];

fn lookup(ch: char) -> Strokes {
    match ch.to_ascii_uppercase() {
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'O' => O,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        ' ' => &[],
        _ => MISSING,
    }
}

/// Strokes of `ch` centred on the origin, one unit tall and
/// [`GLYPH_ASPECT`] wide.
pub fn glyph_strokes(ch: char) -> Vec<(Vec2, Vec2)> {
    let place = |x: f32, y: f32| Vec2::new((x - 0.5) * GLYPH_ASPECT, y - 0.5);
    lookup(ch)
        .iter()
        .map(|&[x0, y0, x1, y1]| (place(x0, y0), place(x1, y1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_fit_cell() {
        for ch in 'A'..='Z' {
            let strokes = glyph_strokes(ch);
            assert!(!strokes.is_empty(), "no strokes for {}", ch);
            for (a, b) in strokes {
                for p in [a, b] {
                    assert!(p.x.abs() <= GLYPH_ASPECT / 2.0 + 1e-6);
                    assert!(p.y.abs() <= 0.5 + 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_lowercase_and_fallback() {
        assert_eq!(glyph_strokes('y'), glyph_strokes('Y'));
        assert_eq!(glyph_strokes('?').len(), 4);
        assert!(glyph_strokes(' ').is_empty());
    }
}

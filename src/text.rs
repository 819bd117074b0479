//! Glyph text rendering with one emphasized letter.
//!
//! Every tick re-renders the whole word from scratch: one primary text
//! element per glyph, plus halo copies under the emphasized one. Regular
//! glyphs pulse gently and bob; the emphasized glyph pulses harder, tilts,
//! uses a faster and brighter color cycle and is set in bold.
//!
//! # Example
//!
//! ```ignore
//! let renderer = TextRenderer::new(GlyphSequence::new("NYTH", 1)?);
//! let elements = renderer.elements(t);
//! assert_eq!(elements.len(), 4 + HALO_LAYERS);
//! ```

use crate::color::{oscillate, Rgba};
use crate::element::{Element, FontWeight, Stroke, Text, Z_FILL, Z_TEXT};
use crate::error::ConfigError;
use glam::{Vec2, Vec3};

/// Horizontal distance between glyph centres.
pub const GLYPH_SPACING: f32 = 2.0;

/// Base font size of regular glyphs, in points.
pub const REGULAR_SIZE: f32 = 60.0;

/// Base font size of the emphasized glyph, in points.
pub const EMPHASIS_SIZE: f32 = 80.0;

/// Number of halo copies under the emphasized glyph.
pub const HALO_LAYERS: usize = 3;

/// Font size added per halo layer; the innermost halo matches the glyph.
const HALO_GROWTH: f32 = 10.0;

/// Alpha of the innermost halo; each further layer loses 0.1.
const HALO_ALPHA: f32 = 0.3;

/// A letter at its base position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub position: Vec2,
}

/// The word to render, laid out on the horizontal axis, with its emphasized index.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSequence {
    glyphs: Vec<Glyph>,
    emphasis: usize,
}

impl GlyphSequence {
    /// Lay out `word` centred on the origin, [`GLYPH_SPACING`] apart.
    pub fn new(word: &str, emphasis: usize) -> Result<Self, ConfigError> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Err(ConfigError::EmptyWord);
        }
        if emphasis >= chars.len() {
            return Err(ConfigError::EmphasisOutOfRange {
                index: emphasis,
                len: chars.len(),
            });
        }

        let center = (chars.len() - 1) as f32 / 2.0;
        let glyphs = chars
            .into_iter()
            .enumerate()
            .map(|(i, ch)| Glyph {
                ch,
                position: Vec2::new((i as f32 - center) * GLYPH_SPACING, 0.0),
            })
            .collect();

        Ok(Self { glyphs, emphasis })
    }

    #[inline]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline]
    pub fn emphasis(&self) -> usize {
        self.emphasis
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Per-glyph animated style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    /// Font size in points.
    pub size: f32,
    pub color: Vec3,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Vertical offset from the base position.
    pub bob: f32,
    pub weight: FontWeight,
}

impl GlyphStyle {
    /// Style of the regular glyph at word position `index`.
    pub fn regular(t: f32, index: usize) -> Self {
        let i = index as f32;
        Self {
            size: REGULAR_SIZE + 5.0 * (t * 3.0 + i).sin(),
            color: oscillate(t, i * 0.25),
            rotation: 0.0,
            bob: (t * 2.0 + i).sin() * 0.1,
            weight: FontWeight::Normal,
        }
    }

    /// Style of the emphasized glyph.
    pub fn emphasized(t: f32) -> Self {
        Self {
            size: EMPHASIS_SIZE + 20.0 * (t * 4.0).sin(),
            color: oscillate(t * 2.0, 0.5),
            rotation: (t * 2.0).sin() * 5.0,
            bob: (t * 3.0).sin() * 0.3,
            weight: FontWeight::Bold,
        }
    }
}

/// Legibility contour around every primary glyph.
pub fn glyph_outline() -> Stroke {
    Stroke::solid(Rgba::WHITE.with_alpha(0.3), 3.0)
}

/// Renders a [`GlyphSequence`] for any `t`.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    sequence: GlyphSequence,
}

impl TextRenderer {
    pub fn new(sequence: GlyphSequence) -> Self {
        Self { sequence }
    }

    #[inline]
    pub fn sequence(&self) -> &GlyphSequence {
        &self.sequence
    }

    /// Style of glyph `index` at time `t`.
    pub fn style(&self, t: f32, index: usize) -> GlyphStyle {
        if index == self.sequence.emphasis {
            GlyphStyle::emphasized(t)
        } else {
            GlyphStyle::regular(t, index)
        }
    }

    /// All text elements for time `t`, glyph by glyph; the emphasized
    /// glyph's halo copies precede its primary element.
    pub fn elements(&self, t: f32) -> Vec<Element> {
        let mut elements = Vec::with_capacity(self.sequence.len() + HALO_LAYERS);

        for (index, glyph) in self.sequence.glyphs.iter().enumerate() {
            let style = self.style(t, index);
            let position = glyph.position + Vec2::new(0.0, style.bob);

            if index == self.sequence.emphasis {
                for layer in 0..HALO_LAYERS {
                    let text = Text {
                        content: glyph.ch.to_string(),
                        position,
                        size: style.size + HALO_GROWTH * layer as f32,
                        color: Rgba::new(style.color, HALO_ALPHA - 0.1 * layer as f32),
                        rotation: style.rotation,
                        weight: style.weight,
                        outline: None,
                    };
                    elements.push(Element::text(text, Z_FILL));
                }
            }

            let text = Text {
                content: glyph.ch.to_string(),
                position,
                size: style.size,
                color: Rgba::opaque(style.color),
                rotation: style.rotation,
                weight: style.weight,
                outline: Some(glyph_outline()),
            };
            elements.push(Element::text(text, Z_TEXT));
        }

        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Shape;

    fn nyth() -> TextRenderer {
        TextRenderer::new(GlyphSequence::new("NYTH", 1).unwrap())
    }

    fn texts(elements: &[Element]) -> Vec<(&Text, i32)> {
        elements
            .iter()
            .filter_map(|e| match &e.shape {
                Shape::Text(text) => Some((text, e.z)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layout() {
        let seq = GlyphSequence::new("NYTH", 1).unwrap();
        let xs: Vec<f32> = seq.glyphs().iter().map(|g| g.position.x).collect();
        assert_eq!(xs, vec![-3.0, -1.0, 1.0, 3.0]);
        assert_eq!(seq.glyphs()[seq.emphasis()].ch, 'Y');
    }

    #[test]
    fn test_sequence_validation() {
        assert!(matches!(GlyphSequence::new("", 0), Err(ConfigError::EmptyWord)));
        assert!(matches!(
            GlyphSequence::new("NYTH", 4),
            Err(ConfigError::EmphasisOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_primary_and_halo_counts() {
        let renderer = nyth();
        for step in 0..20 {
            let elements = renderer.elements(step as f32 * 0.4);
            let all = texts(&elements);
            let primary = all.iter().filter(|(_, z)| *z == Z_TEXT).count();
            let halos = all.iter().filter(|(_, z)| *z == Z_FILL).count();
            assert_eq!(primary, 4);
            assert_eq!(halos, HALO_LAYERS);
        }
    }

    #[test]
    fn test_halo_grows_and_fades() {
        let elements = nyth().elements(0.6);
        let halos: Vec<&Text> = texts(&elements)
            .into_iter()
            .filter(|(_, z)| *z == Z_FILL)
            .map(|(text, _)| text)
            .collect();
        let primary_y = texts(&elements)
            .into_iter()
            .find(|(text, z)| *z == Z_TEXT && text.content == "Y")
            .map(|(text, _)| text.size)
            .unwrap();

        assert!(halos.iter().all(|h| h.content == "Y" && h.size >= primary_y));
        assert_eq!(halos.len(), HALO_LAYERS);
        assert_eq!(halos[0].size, primary_y);
        assert!((halos[2].size - primary_y - 20.0).abs() < 1e-4);
        for pair in halos.windows(2) {
            assert!(pair[1].size > pair[0].size);
            assert!(pair[1].color.alpha < pair[0].color.alpha);
        }
    }

    #[test]
    fn test_glyph_colors_follow_palette() {
        let renderer = nyth();
        let t = 2.7;
        for (index, (text, _)) in texts(&renderer.elements(t))
            .into_iter()
            .filter(|(_, z)| *z == Z_TEXT)
            .enumerate()
        {
            let expected = if index == 1 {
                oscillate(t * 2.0, 0.5)
            } else {
                oscillate(t, index as f32 * 0.25)
            };
            assert_eq!(text.color.rgb, expected);
        }
    }

    #[test]
    fn test_emphasis_has_larger_base_size() {
        // at equal phase (sin = 0) the emphasized glyph is strictly larger
        assert!(GlyphStyle::emphasized(0.0).size > GlyphStyle::regular(0.0, 0).size);
        assert!(EMPHASIS_SIZE > REGULAR_SIZE);
    }

    #[test]
    fn test_regular_glyphs_do_not_rotate() {
        let renderer = nyth();
        for (text, z) in texts(&renderer.elements(1.3)) {
            if text.content != "Y" && z == Z_TEXT {
                assert_eq!(text.rotation, 0.0);
                assert_eq!(text.weight, FontWeight::Normal);
            }
        }
    }

    #[test]
    fn test_every_primary_has_outline() {
        for (text, z) in texts(&nyth().elements(2.0)) {
            assert_eq!(text.outline.is_some(), z == Z_TEXT);
        }
    }

    #[test]
    fn test_emphasis_rotation_band() {
        for step in 0..100 {
            let style = GlyphStyle::emphasized(step as f32 * 0.1);
            assert!(style.rotation.abs() <= 5.0);
            assert!(style.bob.abs() <= 0.3);
            assert_eq!(style.weight, FontWeight::Bold);
        }
    }
}

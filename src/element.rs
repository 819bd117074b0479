//! Drawable elements and frames.
//!
//! A [`Frame`] is the complete, self-contained description of one tick:
//! the viewport plus an ordered list of [`Element`]s. Nothing in a frame
//! refers to the previous one, so surfaces can redraw from scratch.
//!
//! Positions are in viewport units (x in -10..10, y in -6..6 by default).
//! Stroke widths and font sizes are in typographic points at the reference
//! scale of [`POINTS_PER_UNIT`].
//!
//! # Layers
//!
//! | Constant | z | Contents |
//! |----------|---|----------|
//! | [`Z_BACKDROP`] | 0 | particles, wave rings, spokes |
//! | [`Z_FILL`] | 1 | filled outline, ghost outline, text halos |
//! | [`Z_STROKE`] | 2 | outline gradient segments, glyph glow |
//! | [`Z_EMPHASIS`] | 3 | emphasized glyph strokes |
//! | [`Z_TEXT`] | 5 | primary glyphs |

use crate::color::Rgba;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use std::fmt;

/// Points per viewport unit: a 12-inch-wide canvas (864 pt) spanning 20 units.
pub const POINTS_PER_UNIT: f32 = 43.2;

pub const Z_BACKDROP: i32 = 0;
pub const Z_FILL: i32 = 1;
pub const Z_STROKE: i32 = 2;
pub const Z_EMPHASIS: i32 = 3;
pub const Z_TEXT: i32 = 5;

/// Handle to an element drawn on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Logical canvas: an origin-centred rectangle on a solid background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Half width and half height.
    pub half_extent: Vec2,
    /// Background fill (RGB, 0.0-1.0).
    pub background: Vec3,
}

impl Viewport {
    pub fn new(half_extent: Vec2, background: Vec3) -> Self {
        Self {
            half_extent,
            background,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extent.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extent.y * 2.0
    }

    /// Whether `p` lies inside the viewport bounds (inclusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.abs().cmple(self.half_extent).all()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            half_extent: Vec2::new(10.0, 6.0),
            background: Vec3::splat(10.0 / 255.0),
        }
    }
}

/// Line style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    /// Width in points.
    pub width: f32,
    /// Dash pattern `[on, off]` in points, `None` for a solid line.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Rgba, width: f32, on: f32, off: f32) -> Self {
        Self {
            color,
            width,
            dash: Some([on, off]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

/// A closed polygon; the edge from the last point back to the first is implied.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    /// Radius in viewport units.
    pub radius: f32,
    pub fill: Option<Rgba>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Centre-anchored text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    /// Centre of the text box.
    pub position: Vec2,
    /// Font size in points.
    pub size: f32,
    pub color: Rgba,
    /// Counter-clockwise rotation in degrees about `position`.
    pub rotation: f32,
    pub weight: FontWeight,
    /// Contour drawn around the glyph outlines.
    pub outline: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Polygon(Polygon),
    Circle(Circle),
    Text(Text),
}

/// A shape on a z layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub z: i32,
    pub shape: Shape,
}

impl Element {
    pub fn line(from: Vec2, to: Vec2, stroke: Stroke, z: i32) -> Self {
        Self {
            z,
            shape: Shape::Line(Line { from, to, stroke }),
        }
    }

    pub fn polygon(points: Vec<Vec2>, fill: Option<Rgba>, stroke: Option<Stroke>, z: i32) -> Self {
        Self {
            z,
            shape: Shape::Polygon(Polygon {
                points,
                fill,
                stroke,
            }),
        }
    }

    /// Filled disc.
    pub fn disc(center: Vec2, radius: f32, fill: Rgba, z: i32) -> Self {
        Self {
            z,
            shape: Shape::Circle(Circle {
                center,
                radius,
                fill: Some(fill),
                stroke: None,
            }),
        }
    }

    /// Unfilled circle.
    pub fn ring(center: Vec2, radius: f32, stroke: Stroke, z: i32) -> Self {
        Self {
            z,
            shape: Shape::Circle(Circle {
                center,
                radius,
                fill: None,
                stroke: Some(stroke),
            }),
        }
    }

    pub fn text(text: Text, z: i32) -> Self {
        Self {
            z,
            shape: Shape::Text(text),
        }
    }

    /// Short name of the shape kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self.shape {
            Shape::Line(_) => "line",
            Shape::Polygon(_) => "polygon",
            Shape::Circle(_) => "circle",
            Shape::Text(_) => "text",
        }
    }
}

/// Vertex of a line segment list, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    /// Stroke width in points.
    pub width: f32,
}

/// Everything drawn in one tick.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Continuous frame index.
    pub index: u64,
    /// Animation time of this frame.
    pub t: f32,
    pub viewport: Viewport,
    /// Elements in composition order.
    pub elements: Vec<Element>,
}

impl Frame {
    pub fn new(index: u64, t: f32, viewport: Viewport) -> Self {
        Self {
            index,
            t,
            viewport,
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in paint order: ascending z, composition order within a layer.
    pub fn layered(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        // stable: equal z keeps composition order
        ordered.sort_by_key(|e| e.z);
        ordered
    }

    /// Number of elements of the given kind (see [`Element::kind`]).
    pub fn count_of(&self, kind: &str) -> usize {
        self.elements.iter().filter(|e| e.kind() == kind).count()
    }

    /// Text elements, in composition order.
    pub fn texts(&self) -> impl Iterator<Item = (&Text, i32)> {
        self.elements.iter().filter_map(|e| match &e.shape {
            Shape::Text(text) => Some((text, e.z)),
            _ => None,
        })
    }

    /// Line elements flattened to vertex pairs, in paint order.
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        self.layered()
            .into_iter()
            .filter_map(|e| match &e.shape {
                Shape::Line(line) => Some(line),
                _ => None,
            })
            .flat_map(|line| {
                let c = line.stroke.color;
                let color = [c.rgb.x, c.rgb.y, c.rgb.z, c.alpha];
                [line.from, line.to].map(|p| LineVertex {
                    position: p.to_array(),
                    color,
                    width: line.stroke.width,
                })
            })
            .collect()
    }

    /// [`Frame::line_vertices`] as raw bytes.
    pub fn line_vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.line_vertices()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Stroke {
        Stroke::solid(Rgba::WHITE, 1.0)
    }

    #[test]
    fn test_layered_is_stable() {
        let mut frame = Frame::new(0, 0.0, Viewport::default());
        frame.push(Element::line(Vec2::ZERO, Vec2::X, white(), Z_STROKE));
        frame.push(Element::disc(Vec2::ZERO, 1.0, Rgba::WHITE, Z_BACKDROP));
        frame.push(Element::line(Vec2::ZERO, Vec2::Y, white(), Z_STROKE));
        frame.push(Element::ring(Vec2::ZERO, 2.0, white(), Z_BACKDROP));

        let kinds: Vec<_> = frame.layered().iter().map(|e| (e.z, e.kind())).collect();
        assert_eq!(
            kinds,
            vec![(0, "circle"), (0, "circle"), (2, "line"), (2, "line")]
        );

        let lines: Vec<_> = frame
            .layered()
            .into_iter()
            .filter_map(|e| match &e.shape {
                Shape::Line(l) => Some(l.to),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![Vec2::X, Vec2::Y]);
    }

    #[test]
    fn test_line_vertices() {
        let mut frame = Frame::new(0, 0.0, Viewport::default());
        frame.push(Element::line(Vec2::ZERO, Vec2::new(1.0, 2.0), white(), Z_STROKE));
        frame.push(Element::disc(Vec2::ZERO, 1.0, Rgba::WHITE, Z_BACKDROP));

        let vertices = frame.line_vertices();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].position, [1.0, 2.0]);
        assert_eq!(vertices[0].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(
            frame.line_vertex_bytes().len(),
            2 * std::mem::size_of::<LineVertex>()
        );
    }

    #[test]
    fn test_viewport_defaults() {
        let vp = Viewport::default();
        assert_eq!(vp.width(), 20.0);
        assert_eq!(vp.height(), 12.0);
        assert!(vp.contains(Vec2::new(10.0, -6.0)));
        assert!(!vp.contains(Vec2::new(10.01, 0.0)));
    }
}

//! Decorative strokes of the emphasized glyph.
//!
//! The emphasized letter (the `Y` of the default word) gets a stroke-drawn
//! overlay at the origin, animated independently of its text rendering: two
//! branches that swing a little around ±30° and a stem whose length bobs.
//! Each stroke is drawn over three wide, faint glow passes.

use crate::color::{oscillate, Rgba};
use crate::element::{Element, Stroke, Z_EMPHASIS, Z_STROKE};
use glam::Vec2;
use std::f32::consts::FRAC_PI_6;

/// Length of each branch.
pub const BRANCH_LENGTH: f32 = 1.5;

/// Resting stem length (the stem points down from the centre).
pub const STEM_LENGTH: f32 = 1.5;

/// Main stroke alpha.
const STROKE_ALPHA: f32 = 0.7;

/// Glow passes beneath each stroke: (width in points, alpha).
pub const GLOW_PASSES: [(f32, f32); 3] = [(8.0, 0.15), (12.0, 0.10), (16.0, 0.05)];

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Angle of the right branch below the horizontal, swinging by ±0.1 rad.
#[inline]
fn branch_angle(t: f32) -> f32 {
    -FRAC_PI_6 + (t * 3.0).sin() * 0.1
}

/// The glyph's five control points:
/// left tip, centre, right tip, centre, stem end.
pub fn emphasis_points(t: f32) -> [Vec2; 5] {
    let a = branch_angle(t);
    let center = Vec2::ZERO;
    // right tip sits above the centre; the left tip is its mirror image
    let right = Vec2::new(BRANCH_LENGTH * a.cos(), -BRANCH_LENGTH * a.sin());
    let left = Vec2::new(-right.x, right.y);
    let stem = Vec2::new(0.0, -STEM_LENGTH - (t * 2.0).sin() * 0.2);

    [left, center, right, center, stem]
}

/// The three strokes: left branch, right branch, stem.
pub fn emphasis_strokes(t: f32) -> [Segment; 3] {
    let [left, center, right, _, stem] = emphasis_points(t);
    [
        Segment::new(left, center),
        Segment::new(right, center),
        Segment::new(center, stem),
    ]
}

/// Stroke color: the oscillator at double rate with a fixed phase.
#[inline]
pub fn emphasis_color(t: f32) -> glam::Vec3 {
    oscillate(t * 2.0, 0.5)
}

/// Main stroke width in points.
#[inline]
pub fn emphasis_width(t: f32) -> f32 {
    4.0 + 2.0 * (t * 5.0).sin()
}

/// Drawable strokes with their glow passes, each stroke's glow first.
pub fn emphasis_elements(t: f32) -> Vec<Element> {
    let color = emphasis_color(t);
    let width = emphasis_width(t);

    let mut elements = Vec::with_capacity(3 * (GLOW_PASSES.len() + 1));
    for segment in emphasis_strokes(t) {
        for (glow_width, glow_alpha) in GLOW_PASSES {
            elements.push(Element::line(
                segment.from,
                segment.to,
                Stroke::solid(Rgba::new(color, glow_alpha), glow_width),
                Z_STROKE,
            ));
        }
        elements.push(Element::line(
            segment.from,
            segment.to,
            Stroke::solid(Rgba::new(color, STROKE_ALPHA), width),
            Z_EMPHASIS,
        ));
    }
    elements
}

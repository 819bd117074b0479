//! Radiating backdrop effects: concentric wave rings and rotating spokes.

use crate::color::{oscillate, Rgba};
use crate::element::{Element, Stroke, Z_BACKDROP};
use glam::Vec2;

/// Number of concentric rings.
pub const WAVE_RINGS: usize = 3;

/// Rings wrap back to the centre when they reach this radius.
pub const WAVE_MAX_RADIUS: f32 = 8.0;

/// Peak ring alpha, at the centre.
const WAVE_ALPHA: f32 = 0.2;

/// Number of spokes, evenly spread over the full turn.
pub const SPOKES: usize = 6;

/// Radius of ring `index` at time `t`.
#[inline]
pub fn wave_radius(t: f32, index: usize) -> f32 {
    (t * 2.0 + index as f32 * 2.0).rem_euclid(WAVE_MAX_RADIUS)
}

/// Alpha of a ring of the given radius: fades to nothing at the wrap radius.
#[inline]
pub fn wave_alpha(radius: f32) -> f32 {
    (1.0 - radius / WAVE_MAX_RADIUS).max(0.0) * WAVE_ALPHA
}

/// The ring elements for time `t`.
pub fn wave_elements(t: f32) -> Vec<Element> {
    (0..WAVE_RINGS)
        .map(|i| {
            let radius = wave_radius(t, i);
            let color = Rgba::new(oscillate(t + i as f32 * 0.3, 0.0), wave_alpha(radius));
            Element::ring(Vec2::ZERO, radius, Stroke::solid(color, 2.0), Z_BACKDROP)
        })
        .collect()
}

/// The spoke elements for time `t`: six lines from the origin, rotating
/// with `t`, each with its own breathing length.
pub fn spoke_elements(t: f32) -> Vec<Element> {
    (0..SPOKES)
        .map(|i| {
            let degrees = i as f32 * 360.0 / SPOKES as f32;
            let length = 1.5 + (t * 3.0 + degrees * 0.02).sin() * 0.6;
            let tip = Vec2::from_angle(degrees.to_radians() + t) * length;
            let color = Rgba::new(oscillate(t, degrees / 60.0), 0.3);
            Element::line(Vec2::ZERO, tip, Stroke::solid(color, 1.0), Z_BACKDROP)
        })
        .collect()
}

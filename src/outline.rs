//! The morphing outline.
//!
//! A closed curve in polar form whose radius sums four harmonics around a
//! base circle of radius 3. The three low harmonics carry time-varying
//! amplitude envelopes ("morph factors") so the silhouette breathes; the
//! fourth is a fixed-amplitude ripple that gives the edge a liquid texture.
//!
//! ```text
//! r(θ,t) = 3
//!        + (0.3·sin 2t)·sin(4θ + t)
//!        + (0.2·cos 3t)·cos(6θ − 2t)
//!        + (0.4·sin 1.5t)·sin(8θ + 3t)
//!        + 0.1·sin(10θ + 5t)
//! ```
//!
//! The outline is a pure function of `t`: no state survives between frames.

use glam::Vec2;
use std::f32::consts::TAU;

/// Number of points in every outline.
pub const OUTLINE_POINTS: usize = 100;

/// Radius of the unmodulated base circle.
pub const BASE_RADIUS: f32 = 3.0;

/// Amplitude of the high-frequency surface ripple.
pub const RIPPLE_AMPLITUDE: f32 = 0.1;

/// Time-varying amplitudes of the three morphing harmonics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphFactors {
    /// Envelope of the 4-lobe harmonic.
    pub quad: f32,
    /// Envelope of the 6-lobe harmonic.
    pub hex: f32,
    /// Envelope of the 8-lobe harmonic.
    pub oct: f32,
}

impl MorphFactors {
    pub fn at(t: f32) -> Self {
        Self {
            quad: (t * 2.0).sin() * 0.3,
            hex: (t * 3.0).cos() * 0.2,
            oct: (t * 1.5).sin() * 0.4,
        }
    }

    /// Largest possible radial deviation from the base circle.
    pub fn max_deviation() -> f32 {
        0.3 + 0.2 + 0.4 + RIPPLE_AMPLITUDE
    }
}

/// Outline radius at angle `theta` and time `t`, using precomputed factors.
#[inline]
pub fn radius_with(factors: MorphFactors, theta: f32, t: f32) -> f32 {
    BASE_RADIUS
        + factors.quad * (4.0 * theta + t).sin()
        + factors.hex * (6.0 * theta - t * 2.0).cos()
        + factors.oct * (8.0 * theta + t * 3.0).sin()
        + RIPPLE_AMPLITUDE * (10.0 * theta + t * 5.0).sin()
}

/// Outline radius at angle `theta` and time `t`.
#[inline]
pub fn radius(theta: f32, t: f32) -> f32 {
    radius_with(MorphFactors::at(t), theta, t)
}

/// Sample angle of point `index`: evenly spaced over the closed range 0..=2π.
///
/// The first and last samples sit on the same angle, so the polygon closes
/// onto itself.
#[inline]
pub fn sample_angle(index: usize) -> f32 {
    TAU * index as f32 / (OUTLINE_POINTS - 1) as f32
}

/// The outline at time `t`: [`OUTLINE_POINTS`] points, counter-clockwise
/// from angle 0.
pub fn outline(t: f32) -> Vec<Vec2> {
    let factors = MorphFactors::at(t);
    (0..OUTLINE_POINTS)
        .map(|i| {
            let theta = sample_angle(i);
            Vec2::from_angle(theta) * radius_with(factors, theta, t)
        })
        .collect()
}

/// Arithmetic mean of a point set.
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

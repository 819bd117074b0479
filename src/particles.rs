//! Floating particle backdrop.
//!
//! The only stateful part of the animation: a fixed population of point
//! sprites that integrate their velocity once per tick and bounce off the
//! viewport edges. Everything else in a frame is a pure function of `t`.
//!
//! Bouncing is axis-independent: when a coordinate's magnitude exceeds the
//! half-extent on that axis, the matching velocity component is inverted.
//! The position is not pulled back, so a particle may sit slightly outside
//! the viewport for a tick before it drifts back in.

use crate::color::{oscillate, Rgba};
use crate::element::{Element, Z_BACKDROP};
use crate::spawn::SpawnContext;
use glam::Vec2;
use std::f32::consts::TAU;

/// Default population.
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Alpha of every particle sprite.
pub const PARTICLE_ALPHA: f32 = 0.2;

/// Base sizes are drawn from this range.
pub const SIZE_RANGE: (f32, f32) = (10.0, 50.0);

/// Maximum magnitude of each velocity component at spawn.
pub const MAX_SPEED: f32 = 0.05;

/// Base size units per viewport unit of sprite radius.
pub const SIZE_PER_UNIT: f32 = 100.0;

/// Amplitude of the size pulsation.
const PULSE_AMPLITUDE: f32 = 0.3;

/// A single floating sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Base size, before pulsation.
    pub size: f32,
    /// Color and pulsation phase, in 0.0..1.0.
    pub phase: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, phase: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            phase,
        }
    }

    /// Integrate one tick, then bounce off the bounds given by `half_extent`.
    pub fn step(&mut self, half_extent: Vec2) {
        self.position += self.velocity;

        if self.position.x.abs() > half_extent.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y.abs() > half_extent.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Pulsating size at time `t`.
    #[inline]
    pub fn render_size(&self, t: f32) -> f32 {
        self.size * (1.0 + PULSE_AMPLITUDE * (t * 2.0 + self.phase * TAU).sin())
    }

    /// Sprite color at time `t`.
    #[inline]
    pub fn color(&self, t: f32) -> Rgba {
        Rgba::new(oscillate(t, self.phase), PARTICLE_ALPHA)
    }

    /// The sprite for time `t`: a translucent disc on the backdrop layer.
    pub fn sprite(&self, t: f32) -> Element {
        Element::disc(
            self.position,
            self.render_size(t) / SIZE_PER_UNIT,
            self.color(t),
            Z_BACKDROP,
        )
    }
}

/// Fixed-size particle population confined to an origin-centred rectangle.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    half_extent: Vec2,
}

impl ParticleSystem {
    /// Spawn `count` particles with uniformly random position, size,
    /// velocity and phase.
    pub fn spawn(count: usize, half_extent: Vec2, ctx: &mut SpawnContext) -> Self {
        let particles = (0..count)
            .map(|_| {
                let position = ctx.random_in_rect(half_extent);
                let size = ctx.random_range(SIZE_RANGE.0, SIZE_RANGE.1);
                let velocity = ctx.random_velocity(MAX_SPEED);
                let phase = ctx.random();
                Particle::new(position, velocity, size, phase)
            })
            .collect();

        Self {
            particles,
            half_extent,
        }
    }

    /// Build a system from explicit particles.
    pub fn from_particles(particles: Vec<Particle>, half_extent: Vec2) -> Self {
        Self {
            particles,
            half_extent,
        }
    }

    /// Advance every particle by one tick.
    pub fn step(&mut self) {
        let half_extent = self.half_extent;
        for particle in &mut self.particles {
            particle.step(half_extent);
        }
    }

    /// Sprites for time `t`, one per particle, in population order.
    pub fn sprites(&self, t: f32) -> impl Iterator<Item = Element> + '_ {
        self.particles.iter().map(move |p| p.sprite(t))
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }
}

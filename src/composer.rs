//! Frame composition.
//!
//! [`Logo`] ties the generators together. Each tick it advances the particle
//! simulation once, then asks every stateless generator for its geometry at
//! the current `t` and lays the results out in a fixed order:
//!
//! 1. particles (z 0)
//! 2. outline gradient segments (z 2)
//! 3. filled outline (z 1), then the optional ghost outline (z 1)
//! 4. emphasized glyph strokes with glow (z 2-3)
//! 5. text (z 5, halos z 1)
//! 6. wave rings and optional spokes (z 0)
//!
//! Painting sorts by z and keeps this order within a layer (see
//! [`Frame::layered`]).
//!
//! # Example
//!
//! ```ignore
//! let mut logo = Logo::new(LogoConfig::new().with_seed(7))?;
//! let mut presenter = Presenter::new(RecordingSurface::new());
//! for frame in 0..360 {
//!     logo.present(frame, &mut presenter)?;
//! }
//! ```

use crate::color::{oscillate, Rgba};
use crate::config::LogoConfig;
use crate::element::{Element, Frame, Stroke, Viewport, Z_FILL, Z_STROKE};
use crate::error::{ConfigError, Error};
use crate::glyph::emphasis_elements;
use crate::outline::outline;
use crate::particles::ParticleSystem;
use crate::spawn::SpawnContext;
use crate::surface::{PresentStats, Presenter, Surface};
use crate::text::{GlyphSequence, TextRenderer};
use crate::time::FrameClock;
use crate::waves::{spoke_elements, wave_elements};

/// Offset in time of the ghost outline.
const GHOST_LEAD: f32 = 0.5;

/// The animated logo: configuration, clock and particle state.
#[derive(Debug, Clone)]
pub struct Logo {
    config: LogoConfig,
    viewport: Viewport,
    clock: FrameClock,
    particles: ParticleSystem,
    text: TextRenderer,
}

impl Logo {
    /// Build a logo, seeding the particles from `config.seed` or OS entropy.
    pub fn new(config: LogoConfig) -> Result<Self, ConfigError> {
        let mut ctx = match config.seed {
            Some(seed) => SpawnContext::seeded(seed),
            None => SpawnContext::from_entropy(),
        };
        Self::with_spawn_context(config, &mut ctx)
    }

    /// Build a logo drawing particle attributes from an explicit random source.
    pub fn with_spawn_context(config: LogoConfig, ctx: &mut SpawnContext) -> Result<Self, ConfigError> {
        config.validate()?;

        let sequence = GlyphSequence::new(&config.word, config.emphasis_index)?;
        let particles = ParticleSystem::spawn(config.particle_count, config.half_extent, ctx);
        tracing::info!(
            particles = particles.len(),
            seed = ?ctx.seed(),
            word = %config.word,
            "logo initialized"
        );

        Ok(Self {
            viewport: Viewport::new(config.half_extent, config.background),
            clock: FrameClock::new(config.morph_speed),
            text: TextRenderer::new(sequence),
            particles,
            config,
        })
    }

    /// Compose the frame for driver frame `frame_index`, advancing the
    /// particles by one tick.
    pub fn render_frame(&mut self, frame_index: u64) -> Frame {
        let t = self.clock.resolve(frame_index);
        let mut frame = Frame::new(self.clock.frame(), t, self.viewport);

        self.particles.step();
        if self.config.show_particles {
            frame.elements.extend(self.particles.sprites(t));
        }

        let shape = outline(t);
        let segments = shape.len() - 1;
        for (i, pair) in shape.windows(2).enumerate() {
            let fi = i as f32;
            let color = oscillate(t, fi / segments as f32);
            let alpha = 0.3 + 0.2 * (t * 3.0 + fi * 0.1).sin();
            let width = 2.0 + (t * 4.0 + fi * 0.2).sin();
            frame.push(Element::line(
                pair[0],
                pair[1],
                Stroke::solid(Rgba::new(color, alpha), width),
                Z_STROKE,
            ));
        }

        let main = oscillate(t, 0.0);
        frame.push(Element::polygon(
            shape,
            Some(Rgba::new(main, 0.1)),
            Some(Stroke::solid(Rgba::new(main, 0.5), 2.0)),
            Z_FILL,
        ));

        if self.config.show_ghost_outline {
            let ghost = Stroke::dashed(Rgba::new(self.config.secondary_color, 0.5), 1.0, 5.0, 5.0);
            frame.push(Element::polygon(outline(t + GHOST_LEAD), None, Some(ghost), Z_FILL));
        }

        frame.elements.extend(emphasis_elements(t));
        frame.elements.extend(self.text.elements(t));

        if self.config.show_waves {
            frame.elements.extend(wave_elements(t));
        }
        if self.config.show_spokes {
            frame.elements.extend(spoke_elements(t));
        }

        tracing::debug!(frame = frame.index, t, elements = frame.len(), "composed frame");
        frame
    }

    /// Compose the frame following the last one rendered.
    pub fn tick(&mut self) -> Frame {
        let next = self.clock.next_index();
        self.render_frame(next)
    }

    /// Compose frame `frame_index` and draw it through `presenter`.
    ///
    /// A surface failure aborts this frame only and is returned to the caller.
    pub fn present<S: Surface>(
        &mut self,
        frame_index: u64,
        presenter: &mut Presenter<S>,
    ) -> Result<PresentStats, Error> {
        let frame = self.render_frame(frame_index);
        Ok(presenter.present(&frame)?)
    }

    /// `t` of the last composed frame.
    #[inline]
    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    #[inline]
    pub fn text(&self) -> &TextRenderer {
        &self.text
    }

    #[inline]
    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Shape, Z_BACKDROP, Z_EMPHASIS, Z_TEXT};
    use crate::outline::OUTLINE_POINTS;
    use crate::text::HALO_LAYERS;
    use crate::waves::WAVE_RINGS;

    fn seeded() -> Logo {
        Logo::new(LogoConfig::new().with_seed(1234)).unwrap()
    }

    #[test]
    fn test_default_frame_inventory() {
        let mut logo = seeded();
        let frame = logo.render_frame(0);

        let expected = 50                  // particles
            + (OUTLINE_POINTS - 1)         // gradient segments
            + 1                            // filled outline
            + 3 * 4                        // glyph strokes + glow
            + 4 + HALO_LAYERS              // text
            + WAVE_RINGS;
        assert_eq!(frame.len(), expected);
        assert_eq!(frame.count_of("polygon"), 1);
        assert_eq!(frame.count_of("text"), 4 + HALO_LAYERS);
        assert_eq!(frame.count_of("circle"), 50 + WAVE_RINGS);
    }

    #[test]
    fn test_composition_order() {
        let mut logo = seeded();
        let frame = logo.render_frame(10);

        let first_segment = frame
            .elements
            .iter()
            .position(|e| e.kind() == "line")
            .unwrap();
        let polygon = frame.elements.iter().position(|e| e.kind() == "polygon").unwrap();
        let first_text = frame.elements.iter().position(|e| e.kind() == "text").unwrap();
        let last = frame.elements.last().unwrap();

        assert_eq!(first_segment, 50);
        assert_eq!(polygon, 50 + OUTLINE_POINTS - 1);
        assert!(first_text > polygon);
        assert_eq!(last.z, Z_BACKDROP);
        assert!(matches!(last.shape, Shape::Circle(_)));
    }

    #[test]
    fn test_layered_paint_order() {
        let mut logo = seeded();
        let frame = logo.render_frame(3);
        let zs: Vec<i32> = frame.layered().iter().map(|e| e.z).collect();
        assert!(zs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*zs.last().unwrap(), Z_TEXT);
        assert!(zs.contains(&Z_EMPHASIS));
    }

    #[test]
    fn test_toggles() {
        let mut logo = Logo::new(
            LogoConfig::new()
                .with_seed(1)
                .with_particles(false)
                .with_waves(false)
                .with_ghost_outline(true)
                .with_spokes(true),
        )
        .unwrap();
        let frame = logo.render_frame(0);
        assert_eq!(frame.count_of("circle"), 0);
        assert_eq!(frame.count_of("polygon"), 2);
        // particles still advance while hidden
        assert_eq!(logo.particles().len(), 50);
    }

    #[test]
    fn test_tick_advances_time() {
        let mut logo = seeded();
        let first = logo.tick();
        let second = logo.tick();
        assert_eq!(first.t, 0.0);
        assert!((second.t - 0.02).abs() < 1e-7);
        assert_eq!(second.index, 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(Logo::new(LogoConfig::new().with_word("NYTH", 9)).is_err());
    }
}

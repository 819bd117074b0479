//! # nyth-morph - Procedural Morphing Logo
//!
//! A real-time logo animation: a continuously morphing outline drawn as a
//! colour-cycling gradient, a drifting particle backdrop, a word whose
//! emphasized letter pulses and wobbles, and expanding wave rings. Every
//! visual is a pure function of the animation time `t`, except the particles,
//! which carry position state from one frame to the next.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nyth_morph::prelude::*;
//!
//! fn main() -> Result<(), Error> {
//!     let mut logo = Logo::new(LogoConfig::new().with_seed(42))?;
//!     let mut presenter = Presenter::new(RasterSurface::new(960, 576));
//!
//!     for frame in 0..360 {
//!         logo.present(frame, &mut presenter)?;
//!     }
//!     presenter.surface().save_png("last-frame.png")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Time
//!
//! A driver supplies frame indices; the [`FrameClock`] turns them into
//! `t = frame × morph_speed` (0.02 by default). Driver loops that restart
//! the index are folded in so `t` never runs backwards.
//!
//! ### Composition
//!
//! [`Logo::render_frame`] builds a [`Frame`]: an ordered list of z-tagged
//! [`Element`]s (lines, polygons, circles, text). Generators never draw:
//!
//! | Module | Produces |
//! |--------|----------|
//! | [`color`] | oscillating HSV palette |
//! | [`outline`] | the morphing 100-point outline |
//! | [`particles`] | bouncing, pulsating backdrop discs |
//! | [`glyph`] | the emphasized letter's strokes with glow |
//! | [`text`] | the word with per-letter animation and halos |
//! | [`waves`] | expanding rings (and optional spokes) |
//!
//! ### Presentation
//!
//! A [`Presenter`] replays frames onto a [`Surface`], releasing what it drew
//! for the previous frame first, so the scene never accumulates.
//! [`RecordingSurface`] keeps a retained scene for inspection;
//! [`RasterSurface`] paints into an RGBA image.
//!
//! ## Configuration
//!
//! [`LogoConfig`] is a builder that also loads from JSON:
//!
//! ```ignore
//! let config = LogoConfig::from_json_str(r#"{ "seed": 7, "word": "MORPH", "emphasis_index": 2 }"#)?;
//! ```

pub mod color;
mod composer;
pub mod config;
pub mod element;
pub mod error;
pub mod glyph;
pub mod outline;
pub mod particles;
mod spawn;
pub mod surface;
pub mod text;
pub mod time;
pub mod waves;

pub use bytemuck;
pub use color::{Hsv, Rgba};
pub use composer::Logo;
pub use config::LogoConfig;
pub use element::{
    Circle, Element, ElementId, FontWeight, Frame, Line, LineVertex, Polygon, Shape, Stroke, Text,
    Viewport,
};
pub use error::{ConfigError, Error, SurfaceError};
pub use glam::{Vec2, Vec3};
pub use particles::{Particle, ParticleSystem};
pub use spawn::SpawnContext;
pub use surface::{PresentStats, Presenter, RasterSurface, RecordingSurface, Surface};
pub use text::{GlyphSequence, TextRenderer};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use nyth_morph::prelude::*;
/// ```
///
/// This imports:
/// - [`Logo`] and [`LogoConfig`] - the animation and its settings
/// - [`Presenter`], [`Surface`] and the two shipped surfaces
/// - [`Frame`], [`Element`] - composed geometry
/// - [`Error`] - the crate error type
/// - [`Vec2`], [`Vec3`] - glam vector types
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::composer::Logo;
    pub use crate::config::LogoConfig;
    pub use crate::element::{Element, Frame, Shape, Viewport};
    pub use crate::error::{ConfigError, Error, SurfaceError};
    pub use crate::spawn::SpawnContext;
    pub use crate::surface::{Presenter, RasterSurface, RecordingSurface, Surface};
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec3};
}

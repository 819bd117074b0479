//! Logo configuration.
//!
//! Built in code with chained `with_*` calls, or loaded from JSON. Every
//! field has a default, so a config file only needs the values it changes.
//!
//! ```ignore
//! let config = LogoConfig::new()
//!     .with_seed(7)
//!     .with_particle_count(80)
//!     .with_ghost_outline(true);
//!
//! let config = LogoConfig::from_json_str(r#"{ "word": "NYTH", "morph_speed": 0.03 }"#)?;
//! ```

use crate::color::hex;
use crate::error::ConfigError;
use crate::particles::DEFAULT_PARTICLE_COUNT;
use crate::time::DEFAULT_MORPH_SPEED;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Everything that parameterizes a [`Logo`](crate::composer::Logo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Time units advanced per frame.
    pub morph_speed: f32,
    /// Cadence the driver should tick at. Advisory; the engine never sleeps.
    pub target_fps: u32,
    /// Particle population.
    pub particle_count: usize,
    /// Seed for particle initialization; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Half width and half height of the viewport.
    pub half_extent: Vec2,
    /// Canvas background.
    #[serde(with = "hex")]
    pub background: Vec3,
    /// Stroke color of the ghost outline.
    #[serde(with = "hex")]
    pub secondary_color: Vec3,
    /// The word rendered as text.
    pub word: String,
    /// Index of the emphasized glyph within `word`.
    pub emphasis_index: usize,
    pub show_particles: bool,
    pub show_waves: bool,
    /// Dashed copy of the outline, half a time unit ahead.
    pub show_ghost_outline: bool,
    /// Rotating spokes from the centre.
    pub show_spokes: bool,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            morph_speed: DEFAULT_MORPH_SPEED,
            target_fps: 20,
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
            half_extent: Vec2::new(10.0, 6.0),
            background: Vec3::splat(10.0 / 255.0), // #0a0a0a
            secondary_color: Vec3::new(1.0, 0.0, 1.0),
            word: "NYTH".to_string(),
            emphasis_index: 1,
            show_particles: true,
            show_waves: true,
            show_ghost_outline: false,
            show_spokes: false,
        }
    }
}

impl LogoConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time advanced per frame.
    pub fn with_morph_speed(mut self, speed: f32) -> Self {
        self.morph_speed = speed;
        self
    }

    /// Set the advisory frame rate.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Fix the random seed for a reproducible backdrop.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the viewport half-extent.
    pub fn with_half_extent(mut self, half_extent: Vec2) -> Self {
        self.half_extent = half_extent;
        self
    }

    pub fn with_background(mut self, color: Vec3) -> Self {
        self.background = color;
        self
    }

    pub fn with_secondary_color(mut self, color: Vec3) -> Self {
        self.secondary_color = color;
        self
    }

    /// Set the word and which of its glyphs is emphasized.
    pub fn with_word(mut self, word: impl Into<String>, emphasis_index: usize) -> Self {
        self.word = word.into();
        self.emphasis_index = emphasis_index;
        self
    }

    pub fn with_particles(mut self, enabled: bool) -> Self {
        self.show_particles = enabled;
        self
    }

    pub fn with_waves(mut self, enabled: bool) -> Self {
        self.show_waves = enabled;
        self
    }

    pub fn with_ghost_outline(mut self, enabled: bool) -> Self {
        self.show_ghost_outline = enabled;
        self
    }

    pub fn with_spokes(mut self, enabled: bool) -> Self {
        self.show_spokes = enabled;
        self
    }

    /// Interval between ticks at the target frame rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    /// Check that the configuration describes a drawable logo.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.morph_speed.is_finite() || self.morph_speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.morph_speed));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        let half = self.half_extent;
        if !(half.x > 0.0 && half.y > 0.0 && half.is_finite()) {
            return Err(ConfigError::InvalidViewport(half.x, half.y));
        }
        let len = self.word.chars().count();
        if len == 0 {
            return Err(ConfigError::EmptyWord);
        }
        if self.emphasis_index >= len {
            return Err(ConfigError::EmphasisOutOfRange {
                index: self.emphasis_index,
                len,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LogoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LogoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.word, "NYTH");
    }

    #[test]
    fn test_builder_chain() {
        let config = LogoConfig::new()
            .with_seed(9)
            .with_particle_count(10)
            .with_word("LOGO", 0)
            .with_spokes(true)
            .with_waves(false);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.particle_count, 10);
        assert_eq!(config.emphasis_index, 0);
        assert!(config.show_spokes);
        assert!(!config.show_waves);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            LogoConfig::new().with_morph_speed(0.0).validate(),
            Err(ConfigError::InvalidSpeed(_))
        ));
        assert!(matches!(
            LogoConfig::new().with_morph_speed(f32::NAN).validate(),
            Err(ConfigError::InvalidSpeed(_))
        ));
        assert!(matches!(
            LogoConfig::new().with_target_fps(0).validate(),
            Err(ConfigError::InvalidFrameRate)
        ));
        assert!(matches!(
            LogoConfig::new().with_half_extent(Vec2::new(10.0, 0.0)).validate(),
            Err(ConfigError::InvalidViewport(..))
        ));
        assert!(matches!(
            LogoConfig::new().with_word("", 0).validate(),
            Err(ConfigError::EmptyWord)
        ));
        assert!(matches!(
            LogoConfig::new().with_word("AB", 2).validate(),
            Err(ConfigError::EmphasisOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LogoConfig::from_json_str(
            r##"{ "morph_speed": 0.05, "background": "#102030", "show_spokes": true }"##,
        )
        .unwrap();
        assert_eq!(config.morph_speed, 0.05);
        assert!(config.show_spokes);
        assert_eq!(config.particle_count, 50);
        assert_eq!(hex::format(config.background), "#102030");
    }

    #[test]
    fn test_json_roundtrip() {
        let config = LogoConfig::new().with_seed(42).with_ghost_outline(true);
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"#0a0a0a\""));
        assert_eq!(LogoConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_reported() {
        assert!(matches!(
            LogoConfig::from_json_str(r##"{ "background": "#zz" }"##),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            LogoConfig::from_json_str(r#"{ "word": "" }"#),
            Err(ConfigError::EmptyWord)
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            LogoConfig::from_json_file("/nonexistent/nyth.json"),
            Err(ConfigError::Io(_))
        ));
    }
}

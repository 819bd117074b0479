//! Cyclic color generation.
//!
//! Every color in a frame is derived from the global time `t` and a
//! per-element offset through a single hue/saturation/value oscillator.
//! Offsets decorrelate simultaneous elements (particles, glyphs, outline
//! segments) while keeping the whole logo on one shifting palette.
//!
//! # Example
//!
//! ```ignore
//! use nyth_morph::color::{oscillate, Rgba};
//!
//! let rgb = oscillate(1.5, 0.25);
//! let translucent = Rgba::new(rgb, 0.2);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Hue drift per unit of time (one full hue cycle every 10 time units).
pub const HUE_RATE: f32 = 0.1;

/// Hue, saturation and value, each in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    /// Convert to RGB.
    #[inline]
    pub fn to_rgb(self) -> Vec3 {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

/// The oscillator state at time `t` for an element with the given offset.
///
/// * hue wraps into 0.0-1.0
/// * saturation swings in 0.6-1.0
/// * value swings in 0.4-1.0
pub fn oscillate_hsv(t: f32, offset: f32) -> Hsv {
    Hsv {
        hue: (t * HUE_RATE + offset).rem_euclid(1.0),
        saturation: 0.8 + 0.2 * (t * 2.0).sin(),
        value: 0.7 + 0.3 * (t * 3.0).sin(),
    }
}

/// RGB color for time `t` and phase `offset`.
#[inline]
pub fn oscillate(t: f32, offset: f32) -> Vec3 {
    oscillate_hsv(t, offset).to_rgb()
}

/// Convert HSV to RGB.
///
/// * `h` - 0.0 to 1.0 (wraps: red → yellow → green → cyan → blue → magenta → red)
/// * `s` - 0.0 (gray) to 1.0 (vivid)
/// * `v` - 0.0 (black) to 1.0 (bright)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m).clamp(Vec3::ZERO, Vec3::ONE)
}

/// An RGB color paired with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub rgb: Vec3,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        rgb: Vec3::ONE,
        alpha: 1.0,
    };

    pub fn new(rgb: Vec3, alpha: f32) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn opaque(rgb: Vec3) -> Self {
        Self::new(rgb, 1.0)
    }

    /// Same color, different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.rgb, alpha)
    }

    /// 8-bit channels, alpha last.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.rgb.x), q(self.rgb.y), q(self.rgb.z), q(self.alpha)]
    }
}

impl From<Vec3> for Rgba {
    fn from(rgb: Vec3) -> Self {
        Rgba::opaque(rgb)
    }
}

/// `#rrggbb` color strings, as used in configuration files.
pub mod hex {
    use crate::error::ConfigError;
    use glam::Vec3;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse(s: &str) -> Result<Vec3, ConfigError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ConfigError::InvalidColor(s.to_string()))
        };
        Ok(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn format(rgb: Vec3) -> String {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(rgb.x), q(rgb.y), q(rgb.z))
    }

    pub fn serialize<S: Serializer>(rgb: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*rgb))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_unit_range(c: Vec3) -> bool {
        c.cmpge(Vec3::ZERO).all() && c.cmple(Vec3::ONE).all()
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        let red = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((red.x - 1.0).abs() < 0.001);
        assert!(red.y < 0.001);
        assert!(red.z < 0.001);

        let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(green.x < 0.001);
        assert!((green.y - 1.0).abs() < 0.001);

        let blue = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!((blue.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_hsv_to_rgb_gray_when_unsaturated() {
        let gray = hsv_to_rgb(0.37, 0.0, 0.5);
        assert!((gray - Vec3::splat(0.5)).abs().max_element() < 0.001);
    }

    #[test]
    fn test_oscillator_bounds() {
        for step in 0..2000 {
            let t = step as f32 * 0.037 - 20.0;
            let hsv = oscillate_hsv(t, 0.73);
            assert!((0.0..1.0).contains(&hsv.hue), "hue {} at t={}", hsv.hue, t);
            assert!(hsv.saturation >= 0.6 - 1e-6 && hsv.saturation <= 1.0 + 1e-6);
            assert!(hsv.value >= 0.4 - 1e-6 && hsv.value <= 1.0 + 1e-6);
            assert!(in_unit_range(oscillate(t, 0.73)));
        }
    }

    #[test]
    fn test_oscillator_at_origin() {
        // t = 0: hue = offset, saturation 0.8, value 0.7
        let hsv = oscillate_hsv(0.0, 0.5);
        assert!((hsv.hue - 0.5).abs() < 1e-6);
        assert!((hsv.saturation - 0.8).abs() < 1e-6);
        assert!((hsv.value - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_offset_wraps() {
        let a = oscillate(2.0, 0.25);
        let b = oscillate(2.0, 1.25);
        assert!((a - b).abs().max_element() < 1e-5);
    }

    #[test]
    fn test_oscillator_is_deterministic() {
        assert_eq!(oscillate(3.3, 0.1), oscillate(3.3, 0.1));
    }

    #[test]
    fn test_rgba_clamps_alpha() {
        assert_eq!(Rgba::new(Vec3::ONE, 1.7).alpha, 1.0);
        assert_eq!(Rgba::new(Vec3::ONE, -0.2).alpha, 0.0);
        assert_eq!(Rgba::WHITE.with_alpha(0.3).to_rgba8(), [255, 255, 255, 77]);
    }

    #[test]
    fn test_hex_roundtrip() {
        let bg = hex::parse("#0a0a0a").unwrap();
        assert!((bg.x - 10.0 / 255.0).abs() < 1e-6);
        assert_eq!(hex::format(bg), "#0a0a0a");
        assert_eq!(hex::format(hex::parse("FF00ff").unwrap()), "#ff00ff");
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(hex::parse("#12345").is_err());
        assert!(hex::parse("#gg0000").is_err());
        assert!(hex::parse("").is_err());
    }
}

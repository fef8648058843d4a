//! Colour helpers: packed ARGB32 conversion, HSV mapping and blends.
//!
//! All packed colours are `0xAARRGGBB`.

use std::ops::{Add, Mul};

use crate::math::utils;

/// Float RGBA used while interpolating vertex colours. Never stored in a
/// buffer; convert with [`Color::to_argb`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_argb(argb: u32) -> Self {
        Self {
            a: utils::byte_to_float((argb >> 24) as u8),
            r: utils::byte_to_float((argb >> 16) as u8),
            g: utils::byte_to_float((argb >> 8) as u8),
            b: utils::byte_to_float(argb as u8),
        }
    }

    /// Pack to ARGB, rounding each channel to the nearest byte. Out of
    /// range channels saturate.
    pub fn to_argb(&self) -> u32 {
        let a = utils::float_to_byte_rounded(self.a) as u32;
        let r = utils::float_to_byte_rounded(self.r) as u32;
        let g = utils::float_to_byte_rounded(self.g) as u32;
        let b = utils::float_to_byte_rounded(self.b) as u32;
        (a << 24) | (r << 16) | (g << 8) | b
    }

    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color {
            r: utils::lerp(self.r, other.r, t),
            g: utils::lerp(self.g, other.g, t),
            b: utils::lerp(self.b, other.b, t),
            a: utils::lerp(self.a, other.a, t),
        }
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, o: Color) -> Color {
        Color::new(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, s: f32) -> Color {
        Color::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

/// HSV to opaque ARGB. `h` in degrees (wrapped into [0, 360)), `s` and `v`
/// clamped to [0, 1]. Channels truncate.
pub fn hsv_to_argb(h: f32, s: f32, v: f32) -> u32 {
    let h = utils::wrap_degrees(h);
    let s = utils::clamp(s, 0.0, 1.0);
    let v = utils::clamp(v, 0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let ri = utils::float_to_byte(r + m) as u32;
    let gi = utils::float_to_byte(g + m) as u32;
    let bi = utils::float_to_byte(b + m) as u32;
    0xFF00_0000 | (ri << 16) | (gi << 8) | bi
}

/// Three phase-shifted sines; `t` in cycles.
pub fn rainbow_color(t: f32) -> u32 {
    let r = (t * 6.28).sin() * 0.5 + 0.5;
    let g = (t * 6.28 + 2.09).sin() * 0.5 + 0.5;
    let b = (t * 6.28 + 4.19).sin() * 0.5 + 0.5;
    0xFF00_0000
        | ((utils::float_to_byte(r) as u32) << 16)
        | ((utils::float_to_byte(g) as u32) << 8)
        | utils::float_to_byte(b) as u32
}

pub fn neon_color(intensity: f32, hue_shift: f32) -> u32 {
    let hue = utils::fmod(intensity * 360.0 + hue_shift, 360.0);
    hsv_to_argb(hue, 1.0, (intensity * 1.5).min(1.0))
}

/// Per-channel blend of two colours, `t` clamped to [0, 1]. The result is
/// always opaque.
pub fn blend_colors(color1: u32, color2: u32, t: f32) -> u32 {
    let t = utils::clamp(t, 0.0, 1.0);
    let channel = |shift: u32| -> u32 {
        let c1 = ((color1 >> shift) & 0xFF) as f32;
        let c2 = ((color2 >> shift) & 0xFF) as f32;
        ((c1 + t * (c2 - c1)) as u8 as u32) << shift
    };
    0xFF00_0000 | channel(16) | channel(8) | channel(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_roundtrip() {
        for argb in [0xFF00_0000u32, 0xFFFF_FFFF, 0x80C0_4020, 0x0012_3456] {
            assert_eq!(Color::from_argb(argb).to_argb(), argb);
        }
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_argb(0.0, 1.0, 1.0), 0xFFFF_0000);
        assert_eq!(hsv_to_argb(120.0, 1.0, 1.0), 0xFF00_FF00);
        assert_eq!(hsv_to_argb(240.0, 1.0, 1.0), 0xFF00_00FF);
        assert_eq!(hsv_to_argb(360.0, 1.0, 1.0), 0xFFFF_0000);
        assert_eq!(hsv_to_argb(-120.0, 1.0, 1.0), 0xFF00_00FF);
    }

    #[test]
    fn test_hsv_clamps_value() {
        assert_eq!(hsv_to_argb(77.0, 0.5, -2.0), 0xFF00_0000);
        assert_eq!(hsv_to_argb(77.0, 0.0, 5.0), 0xFFFF_FFFF);
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend_colors(0xFF10_2030, 0xFF40_5060, 0.0), 0xFF10_2030);
        assert_eq!(blend_colors(0xFF10_2030, 0xFF40_5060, 1.0), 0xFF40_5060);
        assert_eq!(blend_colors(0x0000_0000, 0x00FF_FFFF, 7.0), 0xFFFF_FFFF);
    }

    #[test]
    fn test_neon_is_opaque() {
        assert_eq!(neon_color(0.4, 30.0) >> 24, 0xFF);
        assert_eq!(rainbow_color(0.25) >> 24, 0xFF);
    }
}

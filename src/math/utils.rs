//! Math utility functions shared by the rasterizer and the field engine.

/// Clamp a value to [min, max] range.
#[inline(always)]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    if v < min { min } else if v > max { max } else { v }
}

/// Linear interpolation between a and b.
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// C-style `fmod`: the remainder keeps the sign of `v`.
#[inline(always)]
pub fn fmod(v: f32, m: f32) -> f32 {
    v % m
}

/// Wrap an angle in degrees into [0, 360).
#[inline(always)]
pub fn wrap_degrees(h: f32) -> f32 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 { 0.0 } else { w }
}

/// Pack a float in [0, 1] to a byte, truncating.
#[inline(always)]
pub fn float_to_byte(v: f32) -> u8 {
    (v * 255.0) as u8
}

/// Pack a float in [0, 1] to a byte, rounding to nearest.
#[inline(always)]
pub fn float_to_byte_rounded(v: f32) -> u8 {
    (v * 255.0 + 0.5) as u8
}

/// Unpack a byte [0, 255] to a float [0, 1].
#[inline(always)]
pub fn byte_to_float(v: u8) -> f32 {
    v as f32 / 255.0
}

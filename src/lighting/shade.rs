//! Flat Lambertian shading with one fixed directional light.

use crate::math::math3d::Vec3;

/// Unnormalized direction of the single scene light.
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.3, -0.5, -0.7);

/// Floor applied to the diffuse term so back-lit faces never go black.
pub const AMBIENT_FLOOR: f32 = 0.2;

/// Diffuse intensity for a face normal: `max(0.2, -n·l)`.
pub fn light_intensity(normal: &Vec3) -> f32 {
    let light = LIGHT_DIRECTION.normalize();
    AMBIENT_FLOOR.max(-normal.dot(&light))
}

/// Scale the RGB channels of a packed ARGB colour; alpha passes through.
pub fn apply_lighting(color: u32, intensity: f32) -> u32 {
    let a = color & 0xFF00_0000;
    let scale = |shift: u32| -> u32 {
        let c = ((color >> shift) & 0xFF) as f32;
        ((c * intensity) as u8 as u32) << shift
    };
    a | scale(16) | scale(8) | scale(0)
}

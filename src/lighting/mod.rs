//! Colour and lighting module.
//!
//! - Packed ARGB32 ↔ float RGBA conversion for vertex interpolation
//! - HSV mapping used by the field engine's colour pass
//! - A single fixed directional light for flat-shaded 3D triangles

pub mod color;
pub mod shade;

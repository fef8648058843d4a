//! Field engine: a 2D scalar field advanced by mixed automaton rules,
//! fractal sampling, attractors, a velocity field and energy bursts.

pub mod field;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use field::{FieldEngine, FieldParams};
pub use patterns::Pattern;

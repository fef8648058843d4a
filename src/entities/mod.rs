//! Procedural entity subsystem.
//!
//! Entities are short-lived 3D shapes with one of seven mesh archetypes.
//! They live while `life > 0` and are dropped by the manager on the next
//! update after they die. Meshes are regenerated on every request.

pub mod entity;
pub mod manager;
mod meshes;

pub use entity::{EntityKind, WeirdEntity};
pub use manager::WeirdVisualManager;

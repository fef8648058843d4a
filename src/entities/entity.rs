use std::f32::consts::PI;

use crate::math::math3d::{Triangle3D, Vec3};
use crate::math::random::RandomSource;

use super::meshes;

/// Mesh archetype, fixed at spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    SpikyStar,
    MorphingBlob,
    FractalSpikes,
    TwistedRibbon,
    PulsingOrb,
    FragmentCloud,
    WeirdPolyhedron,
}

impl EntityKind {
    /// Indices 0..=5 name the first six archetypes; anything else is a
    /// polyhedron.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => EntityKind::SpikyStar,
            1 => EntityKind::MorphingBlob,
            2 => EntityKind::FractalSpikes,
            3 => EntityKind::TwistedRibbon,
            4 => EntityKind::PulsingOrb,
            5 => EntityKind::FragmentCloud,
            _ => EntityKind::WeirdPolyhedron,
        }
    }
}

/// A short-lived procedural 3D shape.
#[derive(Clone, Debug)]
pub struct WeirdEntity {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Per-axis extent. Rescaled every update by an oscillating factor.
    pub size: Vec3,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Seconds left; the entity is dead at or below zero.
    pub life: f32,
    pub max_life: f32,
    /// Palette of 3..=6 opaque colours, indexed cyclically by the meshes.
    pub colors: Vec<u32>,
    pub kind: EntityKind,
    /// Seconds since spawn, drives all shape animation.
    pub morph_time: f32,
}

impl WeirdEntity {
    pub fn spawn<R: RandomSource>(position: Vec3, rng: &mut R) -> Self {
        let velocity = Vec3::new(
            rng.uniform_float(-2.0, 2.0),
            rng.uniform_float(-2.0, 2.0),
            rng.uniform_float(-1.0, 1.0),
        );
        let size = Vec3::new(
            rng.uniform_float(0.1, 0.8),
            rng.uniform_float(0.1, 0.8),
            rng.uniform_float(0.1, 0.8),
        );
        let rotation = rng.uniform_float(0.0, 2.0 * PI);
        let rotation_speed = rng.uniform_float(-3.0, 3.0);
        let max_life = rng.uniform_float(5.0, 15.0);
        let kind = EntityKind::from_index(rng.uniform_int(0, 6));

        let palette_len = rng.uniform_int(3, 6);
        let colors = (0..palette_len).map(|_| rng.random_color()).collect();

        Self {
            position,
            velocity,
            size,
            rotation,
            rotation_speed,
            life: max_life,
            max_life,
            colors,
            kind,
            morph_time: 0.0,
        }
    }

    /// Advance one tick: age, drift, maybe a random physics event, wrap to
    /// the play box, spin and morph.
    pub fn update<R: RandomSource>(&mut self, delta_time: f32, rng: &mut R) {
        self.life -= delta_time;
        self.morph_time += delta_time;
        self.position = self.position + self.velocity * delta_time;

        if rng.chance(0.01) {
            match rng.uniform_int(0, 3) {
                // bounce
                0 => {
                    self.velocity.x *= -1.2;
                    self.velocity.y *= -1.2;
                }
                // teleport
                1 => {
                    self.position.x = rng.uniform_float(-3.0, 3.0);
                    self.position.y = rng.uniform_float(-2.0, 2.0);
                }
                // speed up
                2 => self.velocity = self.velocity * rng.uniform_float(1.5, 2.0),
                // new heading
                _ => {
                    self.velocity = Vec3::new(
                        rng.uniform_float(-3.0, 3.0),
                        rng.uniform_float(-3.0, 3.0),
                        rng.uniform_float(-1.0, 1.0),
                    );
                }
            }
        }

        if self.position.x > 4.0 {
            self.position.x = -4.0;
        }
        if self.position.x < -4.0 {
            self.position.x = 4.0;
        }
        if self.position.y > 3.0 {
            self.position.y = -3.0;
        }
        if self.position.y < -3.0 {
            self.position.y = 3.0;
        }

        self.rotation += self.rotation_speed * delta_time;

        let morph = (self.morph_time * rng.uniform_float(1.0, 3.0)).sin() * 0.3 + 1.0;
        self.size = self.size * morph;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Remaining fraction of the lifespan.
    pub fn life_factor(&self) -> f32 {
        if self.max_life > 0.0 {
            self.life / self.max_life
        } else {
            0.0
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Palette colour at `index`, wrapping.
    #[inline]
    pub(super) fn color(&self, index: usize) -> u32 {
        if self.colors.is_empty() {
            0xFFFF_FFFF
        } else {
            self.colors[index % self.colors.len()]
        }
    }

    /// Fresh mesh for the current morph state.
    pub fn generate_triangles(&self) -> Vec<Triangle3D> {
        let mut out = Vec::new();
        self.append_triangles(&mut out);
        out
    }

    /// Append this entity's mesh to `out`.
    pub fn append_triangles(&self, out: &mut Vec<Triangle3D>) {
        match self.kind {
            EntityKind::SpikyStar => meshes::spiky_star(self, out),
            EntityKind::MorphingBlob => meshes::morphing_blob(self, out),
            EntityKind::FractalSpikes => meshes::fractal_spikes(self, out),
            EntityKind::TwistedRibbon => meshes::twisted_ribbon(self, out),
            EntityKind::PulsingOrb => meshes::pulsing_orb(self, out),
            EntityKind::FragmentCloud => meshes::fragment_cloud(self, out),
            EntityKind::WeirdPolyhedron => meshes::weird_polyhedron(self, out),
        }
    }
}

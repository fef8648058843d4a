use crate::math::math3d::{Triangle3D, Vec3};
use crate::math::random::RandomSource;

use super::entity::WeirdEntity;

/// Owns the live entity population: ticks, retires, and spawns on a
/// randomized timer below a drifting cap.
#[derive(Clone, Debug)]
pub struct WeirdVisualManager {
    entities: Vec<WeirdEntity>,
    spawn_timer: f32,
    spawn_interval: f32,
    max_entities: usize,
}

impl WeirdVisualManager {
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            entities: Vec::new(),
            spawn_timer: 0.0,
            spawn_interval: rng.uniform_float(0.5, 2.0),
            max_entities: rng.uniform_int(8, 20).max(0) as usize,
        }
    }

    pub fn update<R: RandomSource>(&mut self, delta_time: f32, rng: &mut R) {
        for entity in self.entities.iter_mut() {
            entity.update(delta_time, rng);
        }

        let before = self.entities.len();
        self.entities.retain(|e| !e.is_dead());
        let retired = before - self.entities.len();
        if retired > 0 {
            log::debug!("retired {} entities, {} alive", retired, self.entities.len());
        }

        self.spawn_timer += delta_time;
        if self.spawn_timer >= self.spawn_interval && self.entities.len() < self.max_entities {
            self.spawn_timer = 0.0;
            self.spawn_interval = rng.uniform_float(0.3, 2.5);
            let position = Vec3::new(
                rng.uniform_float(-3.0, 3.0),
                rng.uniform_float(-2.0, 2.0),
                rng.uniform_float(-6.0, -2.0),
            );
            let entity = WeirdEntity::spawn(position, rng);
            log::debug!("spawned {:?} at ({:.2}, {:.2}, {:.2})", entity.kind, position.x, position.y, position.z);
            self.entities.push(entity);
        }

        if rng.chance(0.01) {
            self.max_entities = rng.uniform_int(5, 25).max(0) as usize;
        }
    }

    /// Every live entity's mesh, in insertion order. Rebuilt on each call.
    pub fn all_triangles(&self) -> Vec<Triangle3D> {
        let mut out = Vec::new();
        for entity in &self.entities {
            entity.append_triangles(&mut out);
        }
        out
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> &[WeirdEntity] {
        &self.entities
    }

    /// Add an entity directly, bypassing the spawn timer and cap.
    pub fn push(&mut self, entity: WeirdEntity) {
        self.entities.push(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::entity::EntityKind;
    use crate::math::random::FixedRandom;

    #[test]
    fn test_dead_entity_removed_on_next_update() {
        let mut rng = FixedRandom(0.99);
        let mut mgr = WeirdVisualManager::new(&mut rng);
        let mut e = WeirdEntity::spawn(Vec3::ZERO, &mut rng);
        e.life = 1.0;
        e.max_life = 1.0;
        mgr.push(e);

        mgr.update(0.5, &mut rng);
        assert_eq!(mgr.entity_count(), 1);
        mgr.update(0.5, &mut rng);
        assert_eq!(mgr.entity_count(), 0);
    }

    #[test]
    fn test_spawns_when_timer_expires() {
        // interval 0.5, cap 8
        let mut rng = FixedRandom(0.0);
        let mut mgr = WeirdVisualManager::new(&mut rng);
        mgr.update(0.25, &mut rng);
        assert_eq!(mgr.entity_count(), 0);
        mgr.update(0.25, &mut rng);
        assert_eq!(mgr.entity_count(), 1);
        assert_eq!(mgr.entities()[0].position.z, -6.0);
    }

    #[test]
    fn test_spawn_respects_cap() {
        let mut rng = FixedRandom(0.0);
        let mut mgr = WeirdVisualManager::new(&mut rng);
        mgr.max_entities = 1;
        mgr.update(0.5, &mut rng);
        assert_eq!(mgr.entity_count(), 1);
        // the 1% roll re-draws the cap to 5
        assert_eq!(mgr.max_entities, 5);
        mgr.max_entities = 1;
        mgr.update(0.5, &mut rng);
        mgr.max_entities = 1;
        mgr.update(0.5, &mut rng);
        assert_eq!(mgr.entity_count(), 1);
    }

    #[test]
    fn test_all_triangles_concatenates_in_order() {
        let mut rng = FixedRandom(0.3);
        let mut mgr = WeirdVisualManager::new(&mut rng);
        let mut a = WeirdEntity::spawn(Vec3::ZERO, &mut rng);
        a.kind = EntityKind::SpikyStar;
        let mut b = WeirdEntity::spawn(Vec3::ZERO, &mut rng);
        b.kind = EntityKind::WeirdPolyhedron;
        let a_tris = a.generate_triangles();
        let b_tris = b.generate_triangles();
        mgr.push(a);
        mgr.push(b);

        let all = mgr.all_triangles();
        assert_eq!(all.len(), a_tris.len() + b_tris.len());
        assert_eq!(all[0], a_tris[0]);
        assert_eq!(all[a_tris.len()], b_tris[0]);
    }
}

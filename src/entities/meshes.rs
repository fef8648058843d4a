//! The seven mesh archetypes. Each appends world-space triangles for the
//! entity's current morph state and never caches.

use std::f32::consts::PI;

use crate::math::math3d::{Triangle3D, Vec3};

use super::entity::WeirdEntity;

const TAU: f32 = 2.0 * PI;

/// Recursion cap and branching of the fractal spikes.
const FRACTAL_MAX_LEVEL: u32 = 3;
const FRACTAL_BRANCHES: usize = 3;

const BLOB_SEGMENTS: usize = 12;
const RIBBON_SEGMENTS: usize = 20;
const ORB_RINGS: usize = 6;
const ORB_SEGMENTS: usize = 8;
const FRAGMENTS: usize = 15;

/// Polyhedron faces over its eight vertices.
const POLYHEDRON_FACES: [[usize; 3]; 12] = [
    [0, 1, 2], [2, 3, 4], [4, 5, 6], [6, 7, 0],
    [0, 2, 4], [4, 6, 0], [1, 3, 5], [5, 7, 1],
    [0, 1, 7], [1, 2, 3], [3, 4, 5], [5, 6, 7],
];

#[inline]
fn polar(angle: f32, radius: f32, z: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, angle.sin() * radius, z)
}

/// Consecutive palette colours starting at `i`.
#[inline]
fn palette3(e: &WeirdEntity, i: usize) -> (u32, u32, u32) {
    (e.color(i), e.color(i + 1), e.color(i + 2))
}

pub(super) fn spiky_star(e: &WeirdEntity, out: &mut Vec<Triangle3D>) {
    let spikes = (8 + (e.morph_time.sin() * 4.0) as i32).max(0) as usize;
    let inner_radius = e.size.x * 0.3;

    for i in 0..spikes {
        let fi = i as f32;
        let angle = fi / spikes as f32 * TAU + e.rotation;
        let outer_radius = e.size.x * (1.0 + (e.morph_time * 2.0 + fi).sin() * 0.5);

        let inner1 = e.position + polar(angle, inner_radius, 0.0);
        let outer = e.position + polar(angle + 0.1, outer_radius, (e.morph_time + fi).sin() * 0.2);
        let inner2 = e.position + polar(angle + 0.2, inner_radius, 0.0);

        let (c0, c1, c2) = palette3(e, i);
        out.push(Triangle3D::new(inner1, outer, inner2, c0, c1, c2));
    }
}

pub(super) fn morphing_blob(e: &WeirdEntity, out: &mut Vec<Triangle3D>) {
    let center = e.position;
    let rim = |angle: f32| -> Vec3 {
        let noise = (e.morph_time * 2.0 + angle * 3.0).sin() * 0.3 + 1.0;
        center + Vec3::new(angle.cos() * e.size.x * noise, angle.sin() * e.size.y * noise, 0.0)
    };

    for i in 0..BLOB_SEGMENTS {
        let angle1 = i as f32 / BLOB_SEGMENTS as f32 * TAU;
        let angle2 = (i + 1) as f32 / BLOB_SEGMENTS as f32 * TAU;
        let p1 = rim(angle1);
        let p2 = rim(angle2);
        let lid = center + Vec3::new(0.0, 0.0, e.size.z * (e.morph_time + i as f32).sin());

        let (c0, c1, c2) = palette3(e, i);
        out.push(Triangle3D::new(center, p1, p2, c0, c1, c2));
        out.push(Triangle3D::new(p1, p2, lid, c0, c1, c2));
    }
}

pub(super) fn fractal_spikes(e: &WeirdEntity, out: &mut Vec<Triangle3D>) {
    fractal_level(e, out, e.position, e.size.x, 0);
}

fn fractal_level(e: &WeirdEntity, out: &mut Vec<Triangle3D>, center: Vec3, scale: f32, level: u32) {
    if level >= FRACTAL_MAX_LEVEL {
        return;
    }

    let angle_offset = e.rotation + level as f32 * 0.7 + e.morph_time;
    for i in 0..FRACTAL_BRANCHES {
        let angle = i as f32 / FRACTAL_BRANCHES as f32 * TAU + angle_offset;
        let lift = (e.morph_time + level as f32).sin() * scale * 0.3;
        let branch = center + polar(angle, scale, lift);

        let p1 = branch + polar(angle, scale * 0.3, 0.0);
        let p2 = branch + polar(angle + 2.1, scale * 0.3, 0.0);
        let p3 = branch + Vec3::new(0.0, 0.0, scale * 0.5);

        let c = e.color(level as usize + i);
        out.push(Triangle3D::new(p1, p2, p3, c, c, c));

        fractal_level(e, out, branch, scale * 0.6, level + 1);
    }
}

pub(super) fn twisted_ribbon(e: &WeirdEntity, out: &mut Vec<Triangle3D>) {
    let path = |t: f32| -> Vec3 {
        e.position
            + Vec3::new(
                (t * 2.0 * TAU + e.morph_time).cos() * e.size.x,
                (t * TAU + e.morph_time).sin() * e.size.y,
                (t - 0.5) * e.size.z * 2.0,
            )
    };
    let width = |t: f32| -> Vec3 {
        Vec3::new((t * 6.0 + e.morph_time).sin() * 0.1, (t * 6.0 + e.morph_time).cos() * 0.1, 0.0)
    };

    for i in 0..RIBBON_SEGMENTS - 1 {
        let t1 = i as f32 / RIBBON_SEGMENTS as f32;
        let t2 = (i + 1) as f32 / RIBBON_SEGMENTS as f32;
        let (p1, p2) = (path(t1), path(t2));
        let (w1, w2) = (width(t1), width(t2));

        let (c0, c1, c2) = palette3(e, i);
        out.push(Triangle3D::new(p1 + w1, p1 - w1, p2 + w2, c0, c1, c2));
        out.push(Triangle3D::new(p1 - w1, p2 - w2, p2 + w2, c0, c1, c2));
    }
}

/// Ring radius uses the height ratio `(ring/rings - 0.5) * 2` directly, so a
/// flat orb (`size.z == 0`) still gets finite radii.
pub(super) fn pulsing_orb(e: &WeirdEntity, out: &mut Vec<Triangle3D>) {
    for ring in 0..ORB_RINGS {
        let ratio = (ring as f32 / ORB_RINGS as f32 - 0.5) * 2.0;
        let height = ratio * e.size.z;
        let pulse = 1.0 + (e.morph_time * 2.0 + ring as f32).sin() * 0.3;
        let radius = (1.0 - ratio * ratio).max(0.0).sqrt() * e.size.x * pulse;
        let center = e.position + Vec3::new(0.0, 0.0, height);

        for seg in 0..ORB_SEGMENTS {
            let angle1 = seg as f32 / ORB_SEGMENTS as f32 * TAU + e.rotation;
            let angle2 = (seg + 1) as f32 / ORB_SEGMENTS as f32 * TAU + e.rotation;
            let p1 = e.position + polar(angle1, radius, height);
            let p2 = e.position + polar(angle2, radius, height);

            out.push(Triangle3D::new(
                center,
                p1,
                p2,
                e.color(ring),
                e.color(ring + seg),
                e.color(ring + seg + 1),
            ));
        }
    }
}

pub(super) fn fragment_cloud(e: &WeirdEntity, out: &mut Vec<Triangle3D>) {
    for i in 0..FRAGMENTS {
        let fi = i as f32;
        let spread = 1.0 + fi * 0.1;
        let offset = Vec3::new(
            (e.morph_time + fi).sin() * e.size.x * spread,
            (e.morph_time * 1.3 + fi).cos() * e.size.y * spread,
            (e.morph_time * 0.7 + fi).sin() * e.size.z,
        );
        let center = e.position + offset;
        let frag = e.size.x * 0.2 * (1.0 - fi * 0.05);
        let angle = e.rotation + fi * 0.8 + e.morph_time;

        let p1 = center + polar(angle, frag, 0.0);
        let p2 = center + polar(angle + 2.1, frag, 0.0);
        let p3 = center + polar(angle + 4.2, frag, frag);

        let (c0, c1, c2) = palette3(e, i);
        out.push(Triangle3D::new(p1, p2, p3, c0, c1, c2));
    }
}

pub(super) fn weird_polyhedron(e: &WeirdEntity, out: &mut Vec<Triangle3D>) {
    let mut vertices = [Vec3::ZERO; 8];
    for (i, v) in vertices.iter_mut().enumerate() {
        let fi = i as f32;
        let angle = fi / 8.0 * TAU;
        let radius = e.size.x * (1.0 + (e.morph_time * 3.0 + fi).sin() * 0.4);
        let pole = if i % 2 == 0 { e.size.z } else { -e.size.z };
        let height = pole * (1.0 + (e.morph_time * 2.0 + fi).cos() * 0.3);
        *v = e.position + polar(angle + e.rotation, radius, height);
    }

    for [a, b, c] in POLYHEDRON_FACES {
        out.push(Triangle3D::new(
            vertices[a],
            vertices[b],
            vertices[c],
            e.color(a),
            e.color(b),
            e.color(c),
        ));
    }
}

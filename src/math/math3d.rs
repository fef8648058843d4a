//! 3D math library for the software rasterizer.
//!
//! Vector, 4×4 matrix and triangle types with f32 precision. Everything here
//! is value-semantics and infallible: degenerate input yields a defined
//! fallback instead of NaN.

use std::ops::{Add, Mul, Neg, Sub};

// ─── Vector ──────────────────────────────────────────────────

/// 3D vector (also used as a plain point).
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    #[inline(always)]
    pub fn dot(&self, other: &Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline(always)]
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline(always)]
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; vectors shorter than 0.001
    /// normalize to zero.
    #[inline]
    pub fn normalize(&self) -> Vec3 {
        let len = self.length();
        if len > 0.001 {
            Vec3 {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
            }
        } else {
            Vec3::ZERO
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline(always)]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

// ─── Matrix ──────────────────────────────────────────────────

/// Row-major 4×4 matrix. `a * b` applies `b` first, then `a`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix4 {
    pub fn identity() -> Self {
        Matrix4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut mat = Self::identity();
        mat.m[1][1] = c;
        mat.m[1][2] = -s;
        mat.m[2][1] = s;
        mat.m[2][2] = c;
        mat
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut mat = Self::identity();
        mat.m[0][0] = c;
        mat.m[0][2] = s;
        mat.m[2][0] = -s;
        mat.m[2][2] = c;
        mat
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut mat = Self::identity();
        mat.m[0][0] = c;
        mat.m[0][1] = -s;
        mat.m[1][0] = s;
        mat.m[1][1] = c;
        mat
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut mat = Self::identity();
        mat.m[0][3] = x;
        mat.m[1][3] = y;
        mat.m[2][3] = z;
        mat
    }

    /// Right-handed OpenGL-style projection. `fov` is the vertical field
    /// of view in radians.
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fov = (fov / 2.0).tan();
        let mut mat = Matrix4 { m: [[0.0; 4]; 4] };
        mat.m[0][0] = 1.0 / (aspect * tan_half_fov);
        mat.m[1][1] = 1.0 / tan_half_fov;
        mat.m[2][2] = -(far + near) / (far - near);
        mat.m[2][3] = -(2.0 * far * near) / (far - near);
        mat.m[3][2] = -1.0;
        mat
    }

    /// Homogeneous transform with perspective divide. A `|w| < 0.001`
    /// is replaced by 1.0.
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        let m = &self.m;
        let mut w = m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3];
        if w.abs() < 0.001 {
            w = 1.0;
        }
        Vec3 {
            x: (m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3]) / w,
            y: (m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3]) / w,
            z: (m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3]) / w,
        }
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, other: Matrix4) -> Matrix4 {
        let mut result = Matrix4 { m: [[0.0; 4]; 4] };
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }
}

// ─── Triangle ────────────────────────────────────────────────

/// A 3D triangle with one packed ARGB colour per vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3D {
    pub vertices: [Vec3; 3],
    pub colors: [u32; 3],
}

impl Triangle3D {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, c0: u32, c1: u32, c2: u32) -> Self {
        Triangle3D {
            vertices: [v0, v1, v2],
            colors: [c0, c1, c2],
        }
    }

    /// Normalized face normal; winding decides its sign.
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(&edge2).normalize()
    }

    pub fn transform(&self, matrix: &Matrix4) -> Triangle3D {
        Triangle3D {
            vertices: [
                matrix.transform(&self.vertices[0]),
                matrix.transform(&self.vertices[1]),
                matrix.transform(&self.vertices[2]),
            ],
            colors: self.colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: &Vec3, b: &Vec3) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5 && (a.z - b.z).abs() < 1e-5
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_normalize_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_eq!(Vec3::new(0.0005, 0.0, 0.0).normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_cross() {
        let c = Vec3::new(1.0, 0.0, 0.0).cross(&Vec3::new(0.0, 1.0, 0.0));
        assert!(approx(&c, &Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_identity_transform() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(approx(&Matrix4::default().transform(&v), &v));
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let r = Matrix4::rotation_z(FRAC_PI_2).transform(&Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(&r, &Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_composition_applies_right_first() {
        // Rotate (1,0,0) to (0,1,0), then translate by +x.
        let m = Matrix4::translation(1.0, 0.0, 0.0) * Matrix4::rotation_z(FRAC_PI_2);
        let r = m.transform(&Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(&r, &Vec3::new(1.0, 1.0, 0.0)));

        let m = Matrix4::rotation_z(FRAC_PI_2) * Matrix4::translation(1.0, 0.0, 0.0);
        let r = m.transform(&Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(&r, &Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_perspective_near_plane_maps_to_minus_one() {
        let p = Matrix4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
        let r = p.transform(&Vec3::new(0.0, 0.0, -0.1));
        assert!((r.z + 1.0).abs() < 1e-3);
        let r = p.transform(&Vec3::new(0.0, 0.0, -100.0));
        assert!((r.z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_transform_guards_zero_w() {
        let mut m = Matrix4::identity();
        m.m[3][3] = 0.0;
        let r = m.transform(&Vec3::new(2.0, 3.0, 4.0));
        // w = 0 is replaced by 1
        assert!(approx(&r, &Vec3::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_triangle_normal_and_transform() {
        let t = Triangle3D::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            1, 2, 3,
        );
        assert!(approx(&t.normal(), &Vec3::new(0.0, 0.0, 1.0)));

        let moved = t.transform(&Matrix4::translation(0.0, 0.0, 5.0));
        assert_eq!(moved.colors, [1, 2, 3]);
        assert!(approx(&moved.vertices[1], &Vec3::new(1.0, 0.0, 5.0)));
    }
}

//! NDC to pixel mapping and shaded 3D triangle submission.

use super::buffer::PixelBuffer;
use crate::lighting::shade;
use crate::math::math3d::{Triangle3D, Vec3};

/// Affine map from normalized device coordinates to pixels. y is flipped so
/// +1 is the top row. The caller's matrix owns any perspective divide.
#[inline]
pub fn project_to_screen(point: &Vec3, screen_width: usize, screen_height: usize) -> (i32, i32) {
    let x = ((point.x + 1.0) * 0.5 * screen_width as f32) as i32;
    let y = ((1.0 - point.y) * 0.5 * screen_height as f32) as i32;
    (x, y)
}

impl PixelBuffer {
    /// Project, light and gradient-fill an already transformed triangle.
    pub fn render_3d_triangle(&mut self, triangle: &Triangle3D, screen_width: usize, screen_height: usize) {
        let [v0, v1, v2] = &triangle.vertices;
        let (x0, y0) = project_to_screen(v0, screen_width, screen_height);
        let (x1, y1) = project_to_screen(v1, screen_width, screen_height);
        let (x2, y2) = project_to_screen(v2, screen_width, screen_height);

        let intensity = shade::light_intensity(&triangle.normal());
        let [c0, c1, c2] = triangle.colors.map(|c| shade::apply_lighting(c, intensity));

        self.fill_triangle_gradient(x0, y0, c0, x1, y1, c1, x2, y2, c2);
    }
}

//! Triangle fills.
//!
//! Two independent strategies, each in a flat and a per-vertex gradient
//! variant:
//! - Scanline: sort by y, walk the long edge against the two short edges.
//! - Barycentric: scan the clipped bounding box and test edge weights.
//!
//! Within one strategy the flat and gradient variants cover the same pixel
//! set. The two strategies are not pixel-identical on shared edges.

use super::buffer::PixelBuffer;
use crate::lighting::color::Color;

/// Below this absolute doubled area a triangle is treated as degenerate.
pub const DEGENERATE_AREA: f32 = 0.001;

/// Signed doubled area of (p0, p1, p2). Computed in f64 so extreme
/// coordinates cannot overflow.
#[inline(always)]
fn edge_function(x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
    (x0 as f64 - x2 as f64) * (y1 as f64 - y2 as f64) - (x1 as f64 - x2 as f64) * (y0 as f64 - y2 as f64)
}

/// x on the edge (xa, ya) → (xb, yb) at row `y`. Requires `ya != yb`.
#[inline(always)]
fn edge_x(xa: i32, ya: i32, xb: i32, yb: i32, y: i32) -> f32 {
    xa as f32 + (xb as f32 - xa as f32) * (y as f32 - ya as f32) / (yb as f32 - ya as f32)
}

/// Position of `v` along `[a, b]` as a fraction. Requires `a != b`.
#[inline(always)]
fn span_t(v: i32, a: i32, b: i32) -> f32 {
    (v as f32 - a as f32) / (b as f32 - a as f32)
}

/// Clipped inclusive bounding box, or None when it misses the buffer.
fn clipped_bounds(pb: &PixelBuffer, xs: [i32; 3], ys: [i32; 3]) -> Option<(i32, i32, i32, i32)> {
    let min_x = xs.iter().copied().min()?.max(0);
    let max_x = xs.iter().copied().max()?.min(pb.width() as i32 - 1);
    let min_y = ys.iter().copied().min()?.max(0);
    let max_y = ys.iter().copied().max()?.min(pb.height() as i32 - 1);
    if min_x > max_x || min_y > max_y {
        None
    } else {
        Some((min_x, max_x, min_y, max_y))
    }
}

impl PixelBuffer {
    /// Visit every pixel inside the triangle with its barycentric weights.
    fn rasterize_barycentric<F>(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, mut shade: F)
    where
        F: FnMut(f32, f32, f32) -> u32,
    {
        let area = edge_function(x0, y0, x1, y1, x2, y2);
        if area.abs() < DEGENERATE_AREA as f64 {
            return;
        }
        let Some((min_x, max_x, min_y, max_y)) = clipped_bounds(self, [x0, x1, x2], [y0, y1, y2]) else {
            return;
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let w0 = (edge_function(x, y, x1, y1, x2, y2) / area) as f32;
                let w1 = (edge_function(x0, y0, x, y, x2, y2) / area) as f32;
                let w2 = (edge_function(x0, y0, x1, y1, x, y) / area) as f32;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    let color = shade(w0, w1, w2);
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Flat scanline fill. Triangles with all three vertices on one row
    /// draw nothing. A flat top edge spans from the first to the second
    /// sorted vertex.
    pub fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        let (mut x0, mut y0, mut x1, mut y1, mut x2, mut y2) = (x0, y0, x1, y1, x2, y2);
        if y0 > y1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }
        if y0 > y2 {
            std::mem::swap(&mut x0, &mut x2);
            std::mem::swap(&mut y0, &mut y2);
        }
        if y1 > y2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }
        if y0 == y2 {
            return;
        }

        let y_start = y0.max(0);
        let y_end = y2.min(self.height() as i32 - 1);
        for y in y_start..=y_end {
            let x_left = edge_x(x0, y0, x2, y2, y);
            let x_right = if y <= y1 {
                if y1 != y0 { edge_x(x0, y0, x1, y1, y) } else { x1 as f32 }
            } else if y2 != y1 {
                edge_x(x1, y1, x2, y2, y)
            } else {
                x1 as f32
            };

            let (mut xs, mut xe) = (x_left as i32, x_right as i32);
            if xs > xe {
                std::mem::swap(&mut xs, &mut xe);
            }
            for x in xs.max(0)..=xe.min(self.width() as i32 - 1) {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Flat bounding-box fill.
    pub fn fill_triangle_barycentric(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        self.rasterize_barycentric(x0, y0, x1, y1, x2, y2, |_, _, _| color);
    }

    /// Optional barycentric fill, then an outline on top.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle_wireframe(
        &mut self,
        x0: i32, y0: i32,
        x1: i32, y1: i32,
        x2: i32, y2: i32,
        wireframe_color: u32,
        fill_color: u32,
        filled: bool,
    ) {
        if filled {
            self.fill_triangle_barycentric(x0, y0, x1, y1, x2, y2, fill_color);
        }
        self.draw_triangle(x0, y0, x1, y1, x2, y2, wireframe_color);
    }

    /// Bounding-box fill with per-vertex colour interpolation.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle_gradient(
        &mut self,
        x0: i32, y0: i32, color0: u32,
        x1: i32, y1: i32, color1: u32,
        x2: i32, y2: i32, color2: u32,
    ) {
        let (c0, c1, c2) = (Color::from_argb(color0), Color::from_argb(color1), Color::from_argb(color2));
        self.rasterize_barycentric(x0, y0, x1, y1, x2, y2, |w0, w1, w2| {
            (c0 * w0 + c1 * w1 + c2 * w2).to_argb()
        });
    }

    /// Scanline fill with per-vertex colour interpolation: colours are
    /// lerped down the edges, then across each span.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle_gradient_scanline(
        &mut self,
        x0: i32, y0: i32, color0: u32,
        x1: i32, y1: i32, color1: u32,
        x2: i32, y2: i32, color2: u32,
    ) {
        let mut v = [(x0, y0, color0), (x1, y1, color1), (x2, y2, color2)];
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        if v[0].1 > v[2].1 {
            v.swap(0, 2);
        }
        if v[1].1 > v[2].1 {
            v.swap(1, 2);
        }
        let [(x0, y0, color0), (x1, y1, color1), (x2, y2, color2)] = v;
        if y0 == y2 {
            return;
        }

        let (c0, c1, c2) = (Color::from_argb(color0), Color::from_argb(color1), Color::from_argb(color2));

        let y_start = y0.max(0);
        let y_end = y2.min(self.height() as i32 - 1);
        for y in y_start..=y_end {
            let t_main = span_t(y, y0, y2);
            let mut x_left = edge_x(x0, y0, x2, y2, y);
            let mut color_left = c0.lerp(&c2, t_main);

            let (mut x_right, mut color_right) = if y <= y1 {
                if y1 != y0 {
                    (edge_x(x0, y0, x1, y1, y), c0.lerp(&c1, span_t(y, y0, y1)))
                } else {
                    (x1 as f32, c1)
                }
            } else if y2 != y1 {
                (edge_x(x1, y1, x2, y2, y), c1.lerp(&c2, span_t(y, y1, y2)))
            } else {
                (x1 as f32, c1)
            };

            if x_left > x_right {
                std::mem::swap(&mut x_left, &mut x_right);
                std::mem::swap(&mut color_left, &mut color_right);
            }

            let (xs, xe) = (x_left as i32, x_right as i32);
            for x in xs.max(0)..=xe.min(self.width() as i32 - 1) {
                let color = if xe != xs {
                    color_left.lerp(&color_right, span_t(x, xs, xe))
                } else {
                    color_left
                };
                self.set_pixel(x, y, color.to_argb());
            }
        }
    }

    /// Gradient fill with pure red, green and blue corners.
    pub fn fill_triangle_rainbow(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.fill_triangle_gradient(
            x0, y0, 0xFFFF_0000,
            x1, y1, 0xFF00_FF00,
            x2, y2, 0xFF00_00FF,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: u32 = 0xFF00_0000;

    fn blank(w: usize, h: usize) -> PixelBuffer {
        let mut pb = PixelBuffer::new(w, h);
        pb.clear(BG);
        pb
    }

    fn painted(pb: &PixelBuffer) -> usize {
        pb.data().iter().filter(|&&p| p != BG).count()
    }

    #[test]
    fn test_colinear_barycentric_draws_nothing() {
        let mut pb = blank(16, 16);
        pb.fill_triangle_barycentric(0, 0, 5, 5, 10, 10, 0xFFFF_FFFF);
        assert_eq!(painted(&pb), 0);
        pb.fill_triangle_gradient(0, 0, 0xFFFF_0000, 5, 5, 0xFF00_FF00, 10, 10, 0xFF00_00FF);
        assert_eq!(painted(&pb), 0);
    }

    #[test]
    fn test_flat_row_scanline_draws_nothing() {
        let mut pb = blank(16, 16);
        pb.fill_triangle(0, 4, 5, 4, 12, 4, 0xFFFF_FFFF);
        assert_eq!(painted(&pb), 0);
        pb.fill_triangle_gradient_scanline(0, 4, 0xFFFF_FFFF, 5, 4, 0xFFFF_FFFF, 12, 4, 0xFFFF_FFFF);
        assert_eq!(painted(&pb), 0);
    }

    #[test]
    fn test_right_triangle_barycentric_both_windings() {
        // Legs of 4: inclusive edges give 5+4+3+2+1 pixels
        let mut ccw = blank(10, 10);
        ccw.fill_triangle_barycentric(0, 0, 4, 0, 0, 4, 0xFFFF_FFFF);
        assert_eq!(painted(&ccw), 15);

        let mut cw = blank(10, 10);
        cw.fill_triangle_barycentric(0, 0, 0, 4, 4, 0, 0xFFFF_FFFF);
        assert_eq!(cw.data(), ccw.data());
    }

    #[test]
    fn test_right_triangle_scanline() {
        let mut pb = blank(10, 10);
        pb.fill_triangle(0, 0, 4, 0, 0, 4, 0xFFFF_FFFF);
        assert_eq!(painted(&pb), 15);
        assert_eq!(pb.get_pixel(4, 0), 0xFFFF_FFFF);
        assert_eq!(pb.get_pixel(0, 4), 0xFFFF_FFFF);
        assert_eq!(pb.get_pixel(3, 3), BG);
    }

    #[test]
    fn test_uniform_gradient_matches_flat_barycentric() {
        let c = 0xFF3C_82D7;
        let mut flat = blank(40, 30);
        flat.fill_triangle_barycentric(3, 2, 35, 9, 12, 27, c);
        let mut grad = blank(40, 30);
        grad.fill_triangle_gradient(3, 2, c, 35, 9, c, 12, 27, c);
        assert_eq!(flat.data(), grad.data());
        assert!(painted(&grad) > 100);
    }

    #[test]
    fn test_uniform_gradient_scanline_matches_flat_scanline() {
        let c = 0xFF91_1F6A;
        let mut flat = blank(40, 30);
        flat.fill_triangle(33, 1, 2, 14, 21, 28, c);
        let mut grad = blank(40, 30);
        grad.fill_triangle_gradient_scanline(33, 1, c, 2, 14, c, 21, 28, c);
        assert_eq!(flat.data(), grad.data());
        assert!(painted(&grad) > 100);
    }

    #[test]
    fn test_gradient_vertices_keep_their_colors() {
        let mut pb = blank(20, 20);
        pb.fill_triangle_gradient(0, 0, 0xFFFF_0000, 10, 0, 0xFF00_FF00, 0, 10, 0xFF00_00FF);
        assert_eq!(pb.get_pixel(0, 0), 0xFFFF_0000);
        assert_eq!(pb.get_pixel(10, 0), 0xFF00_FF00);
        assert_eq!(pb.get_pixel(0, 10), 0xFF00_00FF);
    }

    #[test]
    fn test_scanline_gradient_swaps_colors_with_vertices() {
        let mut pb = blank(20, 20);
        // Bottom vertex listed first
        pb.fill_triangle_gradient_scanline(0, 10, 0xFF00_00FF, 0, 0, 0xFFFF_0000, 10, 0, 0xFF00_FF00);
        assert_eq!(pb.get_pixel(0, 10), 0xFF00_00FF);
        assert_eq!(pb.get_pixel(0, 0), 0xFFFF_0000);
    }

    #[test]
    fn test_offscreen_triangle_is_clipped() {
        let mut pb = blank(8, 8);
        pb.fill_triangle(-100, -100, -50, -100, -100, -50, 0xFFFF_FFFF);
        pb.fill_triangle_barycentric(100, 100, 150, 100, 100, 150, 0xFFFF_FFFF);
        assert_eq!(painted(&pb), 0);

        pb.fill_triangle(-20, -20, 40, -20, -20, 40, 0xFFFF_FFFF);
        assert_eq!(painted(&pb), 64);
    }

    #[test]
    fn test_scanline_gradient_far_vertices() {
        let c = 0xFF40_8020;
        let mut flat = blank(16, 16);
        flat.fill_triangle(0, -2_000_000_000, 10, 5, 0, 2_000_000_000, c);
        let mut grad = blank(16, 16);
        grad.fill_triangle_gradient_scanline(0, -2_000_000_000, c, 10, 5, c, 0, 2_000_000_000, c);
        assert_eq!(flat.data(), grad.data());
        assert!(painted(&grad) > 100);

        let mut wide = blank(16, 16);
        wide.fill_triangle_gradient_scanline(
            -2_000_000_000, 0, 0xFFFF_0000,
            2_000_000_000, 0, 0xFF00_FF00,
            0, 10, 0xFF00_00FF,
        );
        assert!(painted(&wide) > 0);
    }

    #[test]
    fn test_wireframe_outline_only() {
        let mut pb = blank(10, 10);
        pb.draw_triangle_wireframe(0, 0, 6, 0, 0, 6, 0xFFFF_FFFF, 0xFF00_FF00, false);
        assert_eq!(pb.count_color(0xFF00_FF00), 0);
        assert!(pb.count_color(0xFFFF_FFFF) >= 18);
    }

    #[test]
    fn test_rainbow_corners() {
        let mut pb = blank(12, 12);
        pb.fill_triangle_rainbow(0, 0, 10, 0, 0, 10);
        assert_eq!(pb.get_pixel(0, 0), 0xFFFF_0000);
    }
}

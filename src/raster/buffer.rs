//! Packed ARGB32 pixel buffer with bounds-checked access and line/rect
//! primitives. Triangle fills live in `raster::triangle`.

/// Row-major `width * height` array of `0xAARRGGBB` pixels.
///
/// Out-of-range writes are ignored and out-of-range reads return 0.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel data for blitting to a display surface.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if self.in_bounds(x, y) {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> u32 {
        if self.in_bounds(x, y) {
            self.pixels[y as usize * self.width + x as usize]
        } else {
            0
        }
    }

    /// Liang-Barsky clip of a segment to the pixel grid, endpoints rounded
    /// back to pixels. None when the segment misses the buffer.
    fn clip_line(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i32, i32, i32, i32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let (x_max, y_max) = ((self.width - 1) as f64, (self.height - 1) as f64);
        let (ox, oy) = (x0 as f64, y0 as f64);
        let (dx, dy) = (x1 as f64 - ox, y1 as f64 - oy);

        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for (p, q) in [(-dx, ox), (dx, x_max - ox), (-dy, oy), (dy, y_max - oy)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else if r < t0 {
                return None;
            } else {
                t1 = t1.min(r);
            }
        }

        let px = |t: f64| (ox + t * dx).round().clamp(0.0, x_max) as i32;
        let py = |t: f64| (oy + t * dy).round().clamp(0.0, y_max) as i32;
        Some((px(t0), py(t0), px(t1), py(t1)))
    }

    /// Bresenham line, both endpoints inclusive. Segments leaving the
    /// buffer are clipped first, so only on-screen steps are walked.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let (x0, y0, x1, y1) = if self.in_bounds(x0, y0) && self.in_bounds(x1, y1) {
            (x0, y0, x1, y1)
        } else {
            match self.clip_line(x0, y0, x1, y1) {
                Some(clipped) => clipped,
                None => return,
            }
        };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        let (mut x, mut y) = (x0, y0);
        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Triangle outline.
    pub fn draw_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }

    /// Axis-aligned rectangle `[x, x+w) × [y, y+h)`, clipped to the buffer.
    pub fn fill_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = x.saturating_add(w).min(self.width as i32);
        let y_end = y.saturating_add(h).min(self.height as i32);
        for py in y_start..y_end {
            for px in x_start..x_end {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Copy into canvas-order RGBA bytes. Stops early if `rgba_out` is
    /// shorter than `width * height * 4`.
    pub fn write_rgba(&self, rgba_out: &mut [u8]) {
        for (i, &argb) in self.pixels.iter().enumerate() {
            let ri = i * 4;
            if ri + 3 >= rgba_out.len() {
                break;
            }
            rgba_out[ri] = (argb >> 16) as u8;
            rgba_out[ri + 1] = (argb >> 8) as u8;
            rgba_out[ri + 2] = argb as u8;
            rgba_out[ri + 3] = (argb >> 24) as u8;
        }
    }

    /// Number of pixels equal to `color`.
    pub fn count_color(&self, color: u32) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut pb = PixelBuffer::new(7, 5);
        for y in 0..5 {
            for x in 0..7 {
                let c = 0xFF00_0000 | ((x as u32) << 8) | y as u32;
                pb.set_pixel(x, y, c);
                assert_eq!(pb.get_pixel(x, y), c);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_is_silent() {
        let mut pb = PixelBuffer::new(4, 4);
        pb.clear(0xFF11_2233);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MAX, i32::MIN)] {
            pb.set_pixel(x, y, 0xFFFF_FFFF);
            assert_eq!(pb.get_pixel(x, y), 0);
        }
        assert_eq!(pb.count_color(0xFF11_2233), 16);
    }

    #[test]
    fn test_line_includes_both_endpoints() {
        let mut pb = PixelBuffer::new(10, 10);
        pb.draw_line(1, 1, 4, 4, 0xFFFF_FFFF);
        assert_eq!(pb.count_color(0xFFFF_FFFF), 4);
        assert_eq!(pb.get_pixel(1, 1), 0xFFFF_FFFF);
        assert_eq!(pb.get_pixel(4, 4), 0xFFFF_FFFF);

        let mut pb = PixelBuffer::new(10, 10);
        pb.draw_line(8, 2, 0, 2, 0xFF00_FF00);
        assert_eq!(pb.count_color(0xFF00_FF00), 9);
    }

    #[test]
    fn test_far_line_is_clipped() {
        let mut pb = PixelBuffer::new(10, 10);
        pb.draw_line(-1_000_000_000, 5, 1_000_000_000, 5, 0xFFFF_FFFF);
        assert_eq!(pb.count_color(0xFFFF_FFFF), 10);
        assert_eq!(pb.get_pixel(0, 5), 0xFFFF_FFFF);
        assert_eq!(pb.get_pixel(9, 5), 0xFFFF_FFFF);

        let mut diag = PixelBuffer::new(10, 10);
        diag.draw_line(-1_000_000_000, -1_000_000_000, 1_000_000_000, 1_000_000_000, 0xFF00_FF00);
        assert_eq!(diag.count_color(0xFF00_FF00), 10);
        for i in 0..10 {
            assert_eq!(diag.get_pixel(i, i), 0xFF00_FF00);
        }

        let mut miss = PixelBuffer::new(10, 10);
        miss.draw_line(i32::MIN, -5, i32::MAX, -5, 0xFF00_00FF);
        miss.draw_line(-50, -40, 20, -1, 0xFF00_00FF);
        assert_eq!(miss.count_color(0xFF00_00FF), 0);
    }

    #[test]
    fn test_single_point_line() {
        let mut pb = PixelBuffer::new(3, 3);
        pb.draw_line(1, 1, 1, 1, 0xFFAB_CDEF);
        assert_eq!(pb.count_color(0xFFAB_CDEF), 1);
    }

    #[test]
    fn test_fill_rectangle_clips() {
        let mut pb = PixelBuffer::new(8, 8);
        pb.fill_rectangle(6, 6, 5, 5, 0xFF12_3456);
        assert_eq!(pb.count_color(0xFF12_3456), 4);
        pb.fill_rectangle(-2, -2, 3, 3, 0xFF65_4321);
        assert_eq!(pb.count_color(0xFF65_4321), 1);
    }

    #[test]
    fn test_write_rgba_order() {
        let mut pb = PixelBuffer::new(2, 1);
        pb.set_pixel(0, 0, 0x80FF_8040);
        let mut out = [0u8; 8];
        pb.write_rgba(&mut out);
        assert_eq!(&out[0..4], &[0xFF, 0x80, 0x40, 0x80]);

        let mut short = [0u8; 5];
        pb.write_rgba(&mut short);
        assert_eq!(&short[0..4], &[0xFF, 0x80, 0x40, 0x80]);
    }
}

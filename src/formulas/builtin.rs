//! Built-in fractal intensity functions.
//!
//! Each maps a point already transformed into fractal space to an
//! intensity, in [0, 1] for all but `psychedelic_waves`, which spans
//! [-1, 2]. All are pure.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Escape-time family
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const MANDELBROT_MAX_ITER: u32 = 25;
pub const BURNING_SHIP_MAX_ITER: u32 = 20;
pub const TRICORN_MAX_ITER: u32 = 50;
pub const PHOENIX_MAX_ITER: u32 = 50;
pub const NOVA_MAX_ITER: u32 = 50;

/// z ← z² + c starting from `z`, returning the escape ratio.
#[inline]
fn escape_quadratic(mut zx: f32, mut zy: f32, cx: f32, cy: f32, max_iter: u32) -> f32 {
    for i in 0..max_iter {
        let zx2 = zx * zx;
        let zy2 = zy * zy;
        if zx2 + zy2 > 16.0 {
            return i as f32 / max_iter as f32;
        }
        let temp = zx2 - zy2 + cx;
        zy = 2.0 * zx * zy + cy;
        zx = temp;
    }
    1.0
}

pub fn mandelbrot(x: f32, y: f32) -> f32 {
    escape_quadratic(0.0, 0.0, x, y, MANDELBROT_MAX_ITER)
}

pub fn julia(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    escape_quadratic(x, y, cx, cy, MANDELBROT_MAX_ITER)
}

pub fn burning_ship(x: f32, y: f32) -> f32 {
    let (mut zx, mut zy) = (0.0f32, 0.0f32);
    for i in 0..BURNING_SHIP_MAX_ITER {
        let zx2 = zx * zx;
        let zy2 = zy * zy;
        if zx2 + zy2 > 16.0 {
            return i as f32 / BURNING_SHIP_MAX_ITER as f32;
        }
        let temp = zx2 - zy2 + x;
        zy = (2.0 * zx * zy).abs() + y;
        zx = temp.abs();
    }
    1.0
}

pub fn tricorn(x: f32, y: f32) -> f32 {
    let (mut zx, mut zy) = (0.0f32, 0.0f32);
    for i in 0..TRICORN_MAX_ITER {
        let zx2 = zx * zx;
        let zy2 = zy * zy;
        if zx2 + zy2 > 4.0 {
            return i as f32 / TRICORN_MAX_ITER as f32;
        }
        let temp = zx2 - zy2 + x;
        zy = -2.0 * zx * zy + y;
        zx = temp;
    }
    1.0
}

/// z ← z² + c + 0.5·z_prev
pub fn phoenix(x: f32, y: f32) -> f32 {
    let (mut zx, mut zy) = (0.0f32, 0.0f32);
    let (mut px, mut py) = (0.0f32, 0.0f32);
    for i in 0..PHOENIX_MAX_ITER {
        let zx2 = zx * zx;
        let zy2 = zy * zy;
        if zx2 + zy2 > 4.0 {
            return i as f32 / PHOENIX_MAX_ITER as f32;
        }
        let next_x = zx2 - zy2 + x + 0.5 * px;
        let next_y = 2.0 * zx * zy + y + 0.5 * py;
        px = zx;
        py = zy;
        zx = next_x;
        zy = next_y;
    }
    1.0
}

/// Relaxed Newton iteration on z³ − 1. Stops early on convergence or a
/// vanishing denominator.
pub fn nova(x: f32, y: f32) -> f32 {
    let (mut zx, mut zy) = (x, y);
    for i in 0..NOVA_MAX_ITER {
        let zx3 = zx * zx * zx - 3.0 * zx * zy * zy;
        let zy3 = 3.0 * zx * zx * zy - zy * zy * zy;

        let denominator = 9.0 * (zx * zx + zy * zy);
        if denominator < 0.001 {
            return i as f32 / NOVA_MAX_ITER as f32;
        }

        let new_zx = zx - (zx3 - zx) / denominator;
        let new_zy = zy - zy3 / denominator;

        if (new_zx - zx).abs() + (new_zy - zy).abs() < 0.001 {
            return i as f32 / NOVA_MAX_ITER as f32;
        }
        zx = new_zx;
        zy = new_zy;
    }
    1.0
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Closed-form and map-based
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn psychedelic_waves(x: f32, y: f32) -> f32 {
    ((x * 5.0).sin() * (y * 3.0).cos() + (x * y * 2.0).sin() + (x + y).cos()) * 0.5 + 0.5
}

/// Ten steps of the Hénon map (a = 1.4, b = 0.3); fractional part of the
/// final radius. Orbits that overflow to infinity return 0.
pub fn strange_attractor(mut x: f32, mut y: f32) -> f32 {
    let (a, b) = (1.4f32, 0.3f32);
    for _ in 0..10 {
        let new_x = 1.0 - a * x * x + y;
        let new_y = b * x;
        x = new_x;
        y = new_y;
    }
    let r = (x * x + y * y).sqrt();
    if r.is_finite() { r % 1.0 } else { 0.0 }
}

pub fn chaos_fractal(x: f32, y: f32) -> f32 {
    let mut result = 0.0f32;
    for i in 0..5 {
        let k = (i + 1) as f32;
        result += (x * k * 2.0).sin() * (y * k * 1.5).cos() / k;
    }
    result.abs() % 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandelbrot_origin_never_escapes() {
        assert_eq!(mandelbrot(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_mandelbrot_escape_ratio() {
        // (2,2) -> (2,10) escapes on the third bailout check
        assert!((mandelbrot(2.0, 2.0) - 2.0 / 25.0).abs() < 1e-6);
        // c = 5 escapes after one step
        assert!((mandelbrot(5.0, 0.0) - 1.0 / 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_mandelbrot_is_pure() {
        let a = mandelbrot(-0.743, 0.131);
        let b = mandelbrot(-0.743, 0.131);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_julia() {
        assert_eq!(julia(0.0, 0.0, 0.0, 0.0), 1.0);
        // |z|^2 = 25 > 16 immediately
        assert_eq!(julia(5.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_burning_ship() {
        assert_eq!(burning_ship(0.0, 0.0), 1.0);
        assert!((burning_ship(5.0, 0.0) - 1.0 / 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_tricorn_uses_bailout_four() {
        assert_eq!(tricorn(0.0, 0.0), 1.0);
        // |c|^2 = 9 > 4 after one step
        assert!((tricorn(3.0, 0.0) - 1.0 / 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_phoenix() {
        assert_eq!(phoenix(0.0, 0.0), 1.0);
        assert!((phoenix(3.0, 0.0) - 1.0 / 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_nova_early_exits() {
        // Degenerate denominator at the origin
        assert_eq!(nova(0.0, 0.0), 0.0);
        // Fixed point of the update: converges on the first step
        assert_eq!(nova(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_psychedelic_waves_origin() {
        assert!((psychedelic_waves(0.0, 0.0) - 1.0).abs() < 1e-6);
        // sin(5x)cos(3y) + sin(2xy) + cos(x + y) can exceed 1
        let x = std::f32::consts::PI / 10.0;
        assert!(psychedelic_waves(x, -x) > 1.0);
    }

    #[test]
    fn test_strange_attractor_is_fractional() {
        let v = strange_attractor(0.0, 0.0);
        assert!((0.0..1.0).contains(&v));
        assert_eq!(v.to_bits(), strange_attractor(0.0, 0.0).to_bits());
        assert_eq!(strange_attractor(10.0, -10.0), 0.0);
    }

    #[test]
    fn test_chaos_fractal_origin() {
        assert_eq!(chaos_fractal(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_outputs_in_unit_range() {
        let mut y = -2.0f32;
        while y <= 2.0 {
            let mut x = -2.0f32;
            while x <= 2.0 {
                for v in [
                    mandelbrot(x, y),
                    julia(x, y, -0.4, 0.6),
                    burning_ship(x, y),
                    tricorn(x, y),
                    phoenix(x, y),
                    nova(x, y),
                    chaos_fractal(x, y),
                ] {
                    assert!((0.0..=1.0).contains(&v), "{v} at ({x}, {y})");
                }
                x += 0.37;
            }
            y += 0.41;
        }
    }
}

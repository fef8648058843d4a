//! Cellular-automaton / fractal hybrid field.
//!
//! One `update` runs a global pre-pass (clock, mood, parameter drift), a
//! per-cell pass over the interior that reads `grid` and writes `next`,
//! then swaps the two and rolls the post-pass events. Border cells of
//! `next` are never written, so the border shows whatever that buffer
//! last held.
//!
//! The energy, velocity, trail and colour grids are single-buffered and
//! updated in place during the pass.

use crate::formulas::{julia_constant, FractalKind};
use crate::lighting::color::hsv_to_argb;
use crate::math::math3d::Vec3;
use crate::math::random::RandomSource;
use crate::math::utils;
use crate::raster::PixelBuffer;

use super::grid::Grid;
use super::patterns::Pattern;
use super::rules::RuleSet;

/// Display labels indexed by the fractal selector.
pub const MODE_NAMES: [&str; 13] = [
    "Hallucinogenic Game of Life",
    "Psychedelic Mandelbrot",
    "Trippy Julia Set",
    "Warping Cellular Automata",
    "Fractal Fluid Dynamics",
    "Lorenz Attractor",
    "Psychedelic Wave",
    "Chaos Field",
    "Quantum Fractal",
    "Phoenix Feedback",
    "Newton Nova Bloom",
    "Strange Attractor Drift",
    "Hyperspace Tricorn",
];

/// Oldest attractors are evicted past this count.
pub const MAX_ATTRACTORS: usize = 8;

/// Values are clamped into [0, FIELD_MAX] before the noise roll.
pub const FIELD_MAX: f32 = 2.0;

/// Continuously drifting global parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Selector into [`MODE_NAMES`]; the fractal evaluated is `mod 9`.
    pub fractal_type: i32,
    pub zoom: f32,
    pub center: Vec3,
    pub warp_intensity: f32,
    /// Accumulated hue offset in degrees.
    pub color_shift: f32,
    /// Multiplier from wall-clock delta to field time.
    pub pulse_speed: f32,
    /// Global gain on every stochastic and additive term, nominally [0, 1].
    pub chaos_level: f32,
    pub is_tripping: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            fractal_type: 0,
            zoom: 1.0,
            center: Vec3::ZERO,
            warp_intensity: 1.0,
            color_shift: 0.0,
            pulse_speed: 1.0,
            chaos_level: 0.5,
            is_tripping: false,
        }
    }
}

pub struct FieldEngine {
    width: usize,
    height: usize,
    grid: Grid<f32>,
    next: Grid<f32>,
    energy: Grid<f32>,
    velocity_x: Grid<f32>,
    velocity_y: Grid<f32>,
    trail: Grid<f32>,
    colors: Grid<u32>,
    time: f32,
    params: FieldParams,
    attractors: Vec<Vec3>,
}

/// Radius-1, weighted radius-2 and weighted diagonal neighbour sums.
/// `(x, y)` must be an interior cell.
#[inline]
fn neighbor_sums(grid: &Grid<f32>, x: usize, y: usize) -> (f32, f32, f32) {
    let (xi, yi) = (x as i32, y as i32);

    let mut n1 = 0.0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            n1 += grid.get((xi + dx) as usize, (yi + dy) as usize);
        }
    }

    let mut n2 = 0.0;
    for dy in -2..=2 {
        for dx in -2..=2 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(v) = grid.try_get(xi + dx, yi + dy) {
                n2 += v * 0.3;
            }
        }
    }

    let mut n3 = 0.0;
    for i in -2i32..=2 {
        for j in -2i32..=2 {
            if i.abs() == j.abs() && i != 0 {
                if let Some(v) = grid.try_get(xi + j, yi + i) {
                    n3 += v * 0.5;
                }
            }
        }
    }

    (n1, n2, n3)
}

impl FieldEngine {
    pub fn new<R: RandomSource>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut field = Self {
            width,
            height,
            grid: Grid::new(width, height, 0.0),
            next: Grid::new(width, height, 0.0),
            energy: Grid::new(width, height, 0.0),
            velocity_x: Grid::new(width, height, 0.0),
            velocity_y: Grid::new(width, height, 0.0),
            trail: Grid::new(width, height, 0.0),
            colors: Grid::new(width, height, 0xFF00_0000),
            time: 0.0,
            params: FieldParams::default(),
            attractors: Vec::new(),
        };
        field.initialize(rng);
        field
    }

    /// Full state reset: reseed the grid with a banded noise pattern and
    /// re-roll every global parameter and the attractor set.
    pub fn initialize<R: RandomSource>(&mut self, rng: &mut R) {
        for y in 0..self.height {
            for x in 0..self.width {
                let (fx, fy) = (x as f32, y as f32);
                let noise1 = (fx * 0.1).sin() * (fy * 0.08).cos();
                let noise2 = (fx * 0.03 + fy * 0.05).sin() * 0.5;
                let seeded = if noise1 + noise2 + rng.uniform_float(-0.5, 0.5) > 0.0 {
                    rng.uniform_float(0.3, 1.0)
                } else {
                    0.0
                };
                self.grid.set(x, y, seeded);
                self.energy.set(x, y, rng.uniform_float(0.0, 0.5));
            }
        }
        self.next.fill(0.0);
        self.trail.fill(0.0);
        self.velocity_x.fill(0.0);
        self.velocity_y.fill(0.0);
        self.colors.fill(0xFF00_0000);

        self.time = 0.0;
        self.params = FieldParams {
            fractal_type: rng.uniform_int(0, 8),
            zoom: rng.uniform_float(0.05, 5.0),
            center: Vec3::new(rng.uniform_float(-3.0, 3.0), rng.uniform_float(-3.0, 3.0), 0.0),
            warp_intensity: rng.uniform_float(0.5, 3.0),
            color_shift: 0.0,
            pulse_speed: rng.uniform_float(0.5, 3.0),
            chaos_level: rng.uniform_float(0.2, 1.0),
            is_tripping: false,
        };

        let count = rng.uniform_int(2, 6);
        self.attractors = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.uniform_float(-2.0, 2.0),
                    rng.uniform_float(-2.0, 2.0),
                    rng.uniform_float(-1.0, 1.0),
                )
            })
            .collect();

        log::info!(
            "field initialized {}x{}: {} ({} attractors, chaos {:.2})",
            self.width,
            self.height,
            self.mode_name(),
            self.attractors.len(),
            self.params.chaos_level
        );
    }

    /// Reallocate every grid at the new size and reinitialize. Old content
    /// is discarded.
    pub fn resize<R: RandomSource>(&mut self, width: usize, height: usize, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.grid = Grid::new(width, height, 0.0);
        self.next = Grid::new(width, height, 0.0);
        self.energy = Grid::new(width, height, 0.0);
        self.velocity_x = Grid::new(width, height, 0.0);
        self.velocity_y = Grid::new(width, height, 0.0);
        self.trail = Grid::new(width, height, 0.0);
        self.colors = Grid::new(width, height, 0xFF00_0000);
        self.initialize(rng);
    }

    pub fn update<R: RandomSource>(&mut self, delta_time: f32, rng: &mut R) {
        self.drift(delta_time, rng);
        self.step_cells(rng);
        std::mem::swap(&mut self.grid, &mut self.next);
        self.post_events(rng);
    }

    // ─── Pre-pass ────────────────────────────────────────────────

    fn drift<R: RandomSource>(&mut self, delta_time: f32, rng: &mut R) {
        let p = &mut self.params;
        self.time += delta_time * p.pulse_speed;
        let t = self.time;

        if rng.chance(0.05) {
            p.is_tripping = !p.is_tripping;
            if p.is_tripping {
                p.warp_intensity = rng.uniform_float(5.0, 15.0);
                p.pulse_speed = rng.uniform_float(3.0, 8.0);
                p.chaos_level = rng.uniform_float(0.9, 1.0);
                p.fractal_type = rng.uniform_int(0, 12);
                p.zoom *= rng.uniform_float(0.3, 3.0);
                log::info!(
                    "field tripping: {} ({})",
                    MODE_NAMES[p.fractal_type as usize % MODE_NAMES.len()],
                    FractalKind::from_selector(p.fractal_type).name()
                );
            } else {
                p.warp_intensity = rng.uniform_float(2.0, 6.0);
                p.pulse_speed = rng.uniform_float(1.5, 4.0);
                p.chaos_level = rng.uniform_float(0.6, 0.9);
                log::info!("field calming down");
            }
        }

        let chaos = p.chaos_level;
        p.color_shift += delta_time * rng.uniform_float(2.0, 8.0);
        p.zoom *= 1.0 + (t * 2.0).sin() * 0.1 * chaos;

        p.center.x += (t * 1.7 + p.color_shift).sin() * chaos * 0.05;
        p.center.y += (t * 1.3 + p.color_shift * 0.7).cos() * chaos * 0.05;
        p.center.z += (t * 0.9).sin() * chaos * 0.02;

        for a in self.attractors.iter_mut() {
            a.x += (t * rng.uniform_float(1.0, 3.0)).sin() * chaos * 0.1;
            a.y += (t * rng.uniform_float(1.0, 3.0)).cos() * chaos * 0.1;
            a.z += (t * rng.uniform_float(0.5, 2.0)).sin() * chaos * 0.05;
        }
    }

    // ─── Cell pass ───────────────────────────────────────────────

    fn step_cells<R: RandomSource>(&mut self, rng: &mut R) {
        if self.width < 3 || self.height < 3 {
            return;
        }

        let t = self.time;
        let p = self.params;
        let chaos = p.chaos_level;
        let kind = FractalKind::from_selector(p.fractal_type);
        let julia_c = julia_constant(t);
        let half_w = self.width as f32 * 0.5;
        let half_h = self.height as f32 * 0.5;

        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                let current = self.grid.get(x, y);

                let (n1, n2, n3) = neighbor_sums(&self.grid, x, y);
                let total = n1 + n2 * chaos + n3 * (t + x as f32 * 0.1).sin();
                let mut value = RuleSet::select(t, x, y).apply(current, total, t, chaos, rng);

                // fractal space, then warp
                let fx = (x as f32 - half_w) / half_w * p.zoom + p.center.x;
                let fy = (y as f32 - half_h) / half_h * p.zoom + p.center.y;
                let warp_x = fx + (t * 2.0 + fy * 3.0).sin() * p.warp_intensity * 0.5;
                let warp_y = fy + (t * 1.5 + fx * 2.0).cos() * p.warp_intensity * 0.5;
                let fractal = kind.evaluate(warp_x, warp_y, julia_c);
                value = value * 0.6 + fractal * 0.4 * chaos;

                for a in &self.attractors {
                    let (dx, dy) = (fx - a.x, fy - a.y);
                    let distance = (dx * dx + dy * dy).sqrt() + 0.001;
                    let influence = (1.0 / distance) * 0.1 * chaos;
                    value += influence * (t * 3.0 + distance * 10.0).sin();
                }

                let swirl = (t * 2.0 + fx * 5.0).sin() * (t * 1.7 + fy * 4.0).cos();
                let vx = self.velocity_x.get(x, y) * 0.95 + swirl * chaos * 0.1;
                let vy = self.velocity_y.get(x, y) * 0.95 + (t * 1.3 + fx * 3.0).cos() * chaos * 0.1;
                self.velocity_x.set(x, y, vx);
                self.velocity_y.set(x, y, vy);
                value += (vx + vy) * 0.2;

                *self.energy.get_mut(x, y) += (value - current).abs() * 0.5;
                if self.energy.get(x, y) > rng.uniform_float(0.8, 1.5) {
                    value += rng.uniform_float(0.5, 1.0);
                    self.explode(x, y);
                }

                let trail = (self.trail.get(x, y) * 0.92).max(value * 0.3);
                self.trail.set(x, y, trail);

                value = utils::clamp(value, 0.0, FIELD_MAX);
                if rng.chance(0.02 * chaos) {
                    value += rng.uniform_float(-0.5, 0.5);
                }
                self.next.set(x, y, value);

                let intensity = value + trail;
                let mut hue = utils::fmod(
                    intensity * 180.0 + p.color_shift + fx * 50.0 + fy * 30.0 + t * 100.0,
                    360.0,
                );
                let mut saturation = 0.8 + (t * 3.0 + intensity * 5.0).sin() * 0.2;
                let mut brightness = (intensity * (0.5 + (t * 4.0).sin() * 0.3)).min(1.0);
                if p.is_tripping {
                    hue += (t * 10.0 + x as f32 * 0.2).sin() * 60.0;
                    saturation = 1.0;
                    brightness *= 0.7 + (t * 15.0 + y as f32 * 0.3).sin() * 0.3;
                }
                self.colors.set(x, y, hsv_to_argb(hue, saturation, brightness));
            }
        }
    }

    /// Zero the cell's energy and push `0.3 / distance` into every other
    /// cell within the 7×7 window.
    fn explode(&mut self, x: usize, y: usize) {
        self.energy.set(x, y, 0.0);
        let (xi, yi) = (x as i32, y as i32);
        for dy in -3i32..=3 {
            for dx in -3i32..=3 {
                let (nx, ny) = (xi + dx, yi + dy);
                if !self.energy.in_bounds(nx, ny) {
                    continue;
                }
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                if dist > 0.1 {
                    *self.energy.get_mut(nx as usize, ny as usize) += 0.3 / dist;
                }
            }
        }
    }

    // ─── Post-pass ───────────────────────────────────────────────

    fn post_events<R: RandomSource>(&mut self, rng: &mut R) {
        if rng.chance(0.1 * self.params.chaos_level) {
            let cx = rng.uniform_int(10, self.width as i32 - 10);
            let cy = rng.uniform_int(10, self.height as i32 - 10);
            if let Some(pattern) = Pattern::from_index(rng.uniform_int(0, 5)) {
                if self.inject(pattern, cx, cy, rng) {
                    log::debug!("field stamped {} at ({}, {})", pattern.name(), cx, cy);
                }
            }
        }

        if rng.chance(0.03) {
            let p = &mut self.params;
            p.fractal_type = rng.uniform_int(0, 12);
            p.zoom = rng.uniform_float(0.01, 10.0);
            p.center = Vec3::new(
                rng.uniform_float(-5.0, 5.0),
                rng.uniform_float(-5.0, 5.0),
                rng.uniform_float(-2.0, 2.0),
            );
            p.warp_intensity = rng.uniform_float(0.5, 20.0);

            if rng.chance(0.5) {
                self.attractors.push(Vec3::new(
                    rng.uniform_float(-3.0, 3.0),
                    rng.uniform_float(-3.0, 3.0),
                    rng.uniform_float(-1.0, 1.0),
                ));
                if self.attractors.len() > MAX_ATTRACTORS {
                    self.attractors.remove(0);
                }
            }
            log::debug!("field re-randomized: {}, {} attractors", self.mode_name(), self.attractors.len());
        }
    }

    // ─── Output ──────────────────────────────────────────────────

    /// Copy the colour grid into `buffer`, clipped to the smaller extent.
    pub fn render(&self, buffer: &mut PixelBuffer) {
        let w = self.width.min(buffer.width());
        let h = self.height.min(buffer.height());
        for y in 0..h {
            for x in 0..w {
                buffer.set_pixel(x as i32, y as i32, self.colors.get(x, y));
            }
        }
    }

    /// Label for the current selector, "Unknown" outside 0..=12.
    pub fn mode_name(&self) -> &'static str {
        usize::try_from(self.params.fractal_type)
            .ok()
            .and_then(|i| MODE_NAMES.get(i).copied())
            .unwrap_or("Unknown")
    }

    // ─── Stimulus ────────────────────────────────────────────────

    /// Stamp a pattern into the current grid. Returns false if it was
    /// rejected for sitting too close to an edge.
    pub fn inject<R: RandomSource>(&mut self, pattern: Pattern, cx: i32, cy: i32, rng: &mut R) -> bool {
        pattern.stamp(&mut self.grid, cx, cy, rng)
    }

    pub fn inject_spinner<R: RandomSource>(&mut self, cx: i32, cy: i32, rng: &mut R) -> bool {
        self.inject(Pattern::Spinner, cx, cy, rng)
    }

    pub fn inject_glider<R: RandomSource>(&mut self, cx: i32, cy: i32, rng: &mut R) -> bool {
        self.inject(Pattern::Glider, cx, cy, rng)
    }

    pub fn inject_exploder<R: RandomSource>(&mut self, cx: i32, cy: i32, rng: &mut R) -> bool {
        self.inject(Pattern::Exploder, cx, cy, rng)
    }

    pub fn inject_chaos_blob<R: RandomSource>(&mut self, cx: i32, cy: i32, rng: &mut R) -> bool {
        self.inject(Pattern::ChaosBlob, cx, cy, rng)
    }

    pub fn inject_energy_vortex<R: RandomSource>(&mut self, cx: i32, cy: i32, rng: &mut R) -> bool {
        self.inject(Pattern::EnergyVortex, cx, cy, rng)
    }

    /// Bounds-checked write to the current grid. Non-finite values are
    /// ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, value: f32) {
        if value.is_finite() {
            self.grid.try_set(x, y, value);
        }
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn value(&self, x: i32, y: i32) -> f32 {
        self.grid.try_get(x, y).unwrap_or(0.0)
    }

    pub fn energy(&self, x: i32, y: i32) -> f32 {
        self.energy.try_get(x, y).unwrap_or(0.0)
    }

    pub fn trail(&self, x: i32, y: i32) -> f32 {
        self.trail.try_get(x, y).unwrap_or(0.0)
    }

    pub fn color(&self, x: i32, y: i32) -> u32 {
        self.colors.try_get(x, y).unwrap_or(0)
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn fractal_type(&self) -> i32 {
        self.params.fractal_type
    }

    pub fn is_tripping(&self) -> bool {
        self.params.is_tripping
    }

    pub fn attractor_count(&self) -> usize {
        self.attractors.len()
    }
}

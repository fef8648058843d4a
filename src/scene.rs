//! Frame compositor.
//!
//! Owns the pixel buffer, the entity manager, the field engine and the
//! random source, and draws one complete frame per `frame` call in the
//! active mode.

use crate::engine::{FieldEngine, Pattern};
use crate::entities::WeirdVisualManager;
use crate::math::math3d::Matrix4;
use crate::math::random::RandomSource;
use crate::raster::PixelBuffer;

/// Label shown for the entity mode.
pub const WEIRD_CHAOS_LABEL: &str = "Weird Chaos";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneMode {
    /// Procedural 3D entities over a flickering dark background.
    WeirdChaos,
    /// The field engine drawn full-screen.
    FractalLife,
}

impl SceneMode {
    /// 1 selects the field; anything else the entity mode.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => SceneMode::FractalLife,
            _ => SceneMode::WeirdChaos,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SceneMode::WeirdChaos => SceneMode::FractalLife,
            SceneMode::FractalLife => SceneMode::WeirdChaos,
        }
    }
}

/// Scene configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    /// Random seed; 0 asks the host for entropy.
    pub seed: u64,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Per-frame probability of random streak lines in the entity mode.
    pub streak_chance: f32,
    /// Per-frame probability of a dots/rectangles burst in the entity mode.
    pub effect_chance: f32,
    pub start_mode: SceneMode,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            streak_chance: 0.10,
            effect_chance: 0.05,
            start_mode: SceneMode::WeirdChaos,
        }
    }
}

impl SceneConfig {
    /// Build from a flat buffer.
    ///
    /// Layout: [seed, fov_degrees, near, far, streak_chance, effect_chance, start_mode]
    ///
    /// Missing, non-finite or out-of-range entries keep their defaults.
    pub fn from_buffer(data: &[f64]) -> Self {
        let mut config = Self::default();
        let at = |i: usize| data.get(i).copied().filter(|v| v.is_finite());

        if let Some(v) = at(0).filter(|v| *v >= 0.0) {
            config.seed = v as u64;
        }
        if let Some(v) = at(1).filter(|v| *v > 0.0 && *v < 180.0) {
            config.fov_degrees = v as f32;
        }
        if let Some(v) = at(2).filter(|v| *v > 0.0) {
            config.near = v as f32;
        }
        if let Some(v) = at(3).filter(|v| *v > config.near as f64) {
            config.far = v as f32;
        }
        if let Some(v) = at(4) {
            config.streak_chance = (v as f32).clamp(0.0, 1.0);
        }
        if let Some(v) = at(5) {
            config.effect_chance = (v as f32).clamp(0.0, 1.0);
        }
        if let Some(v) = at(6) {
            config.start_mode = SceneMode::from_index(v as i32);
        }
        config
    }
}

pub struct ChaosScene<R: RandomSource> {
    config: SceneConfig,
    rng: R,
    buffer: PixelBuffer,
    manager: WeirdVisualManager,
    field: FieldEngine,
    mode: SceneMode,
    triangle_count: usize,
}

impl<R: RandomSource> ChaosScene<R> {
    pub fn new(width: usize, height: usize, config: SceneConfig, mut rng: R) -> Self {
        let manager = WeirdVisualManager::new(&mut rng);
        let field = FieldEngine::new(width, height, &mut rng);
        log::info!("scene {}x{} starting in {:?}", width, height, config.start_mode);
        Self {
            config,
            rng,
            buffer: PixelBuffer::new(width, height),
            manager,
            field,
            mode: config.start_mode,
            triangle_count: 0,
        }
    }

    /// Advance by `delta_time` seconds and redraw the whole buffer.
    pub fn frame(&mut self, delta_time: f32) {
        match self.mode {
            SceneMode::WeirdChaos => self.draw_weird_chaos(delta_time),
            SceneMode::FractalLife => {
                self.buffer.clear(0xFF00_0000);
                self.field.update(delta_time, &mut self.rng);
                self.field.render(&mut self.buffer);
            }
        }
    }

    fn draw_weird_chaos(&mut self, delta_time: f32) {
        let rng = &mut self.rng;
        let background = 0xFF00_0000
            | ((rng.uniform_int(5, 25) as u32) << 16)
            | ((rng.uniform_int(5, 25) as u32) << 8)
            | rng.uniform_int(5, 25) as u32;
        self.buffer.clear(background);

        self.manager.update(delta_time, rng);

        let (w, h) = (self.buffer.width(), self.buffer.height());
        let aspect = w as f32 / h.max(1) as f32;
        let projection = Matrix4::perspective(
            self.config.fov_degrees.to_radians(),
            aspect,
            self.config.near,
            self.config.far,
        );

        let triangles = self.manager.all_triangles();
        self.triangle_count = triangles.len();
        for triangle in &triangles {
            let projected = triangle.transform(&projection);
            if projected.normal().z > 0.0 {
                self.buffer.render_3d_triangle(&projected, w, h);
            }
        }

        let (wi, hi) = (w as i32, h as i32);
        if rng.chance(self.config.streak_chance) {
            for _ in 0..rng.uniform_int(1, 5) {
                let (x0, y0) = (rng.uniform_int(0, wi), rng.uniform_int(0, hi));
                let (x1, y1) = (rng.uniform_int(0, wi), rng.uniform_int(0, hi));
                let color = rng.random_color();
                self.buffer.draw_line(x0, y0, x1, y1, color);
            }
        }

        if rng.chance(self.config.effect_chance) {
            match rng.uniform_int(0, 2) {
                // dots
                0 => {
                    for _ in 0..rng.uniform_int(50, 200) {
                        let (x, y) = (rng.uniform_int(0, wi), rng.uniform_int(0, hi));
                        let color = rng.random_color();
                        self.buffer.set_pixel(x, y, color);
                    }
                }
                // rectangles
                1 => {
                    let max_size = wi.min(hi) / 20;
                    for _ in 0..rng.uniform_int(3, 8) {
                        let x = rng.uniform_int(0, wi - max_size);
                        let y = rng.uniform_int(0, hi - max_size);
                        let rw = rng.uniform_int(10, max_size);
                        let rh = rng.uniform_int(10, max_size);
                        let color = rng.random_color();
                        self.buffer.fill_rectangle(x, y, rw, rh, color);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::info!("mode: {}", self.mode_name());
    }

    /// Reseed the field. No effect in the entity mode.
    pub fn force_chaos(&mut self) {
        if self.mode == SceneMode::FractalLife {
            self.field.initialize(&mut self.rng);
            log::info!("chaos injected: {}", self.field.mode_name());
        }
    }

    /// Restart the active mode: a fresh entity manager, or a reseeded field.
    pub fn reset(&mut self) {
        match self.mode {
            SceneMode::WeirdChaos => {
                self.manager = WeirdVisualManager::new(&mut self.rng);
                self.triangle_count = 0;
                log::info!("entities reset");
            }
            SceneMode::FractalLife => {
                self.field.initialize(&mut self.rng);
                log::info!("field reset");
            }
        }
    }

    /// New pixel buffer and a resized, reinitialized field.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.buffer = PixelBuffer::new(width, height);
        self.field.resize(width, height, &mut self.rng);
        log::info!("resized to {}x{}", width, height);
    }

    pub fn inject(&mut self, pattern: Pattern, x: i32, y: i32) -> bool {
        self.field.inject(pattern, x, y, &mut self.rng)
    }

    pub fn set_cell(&mut self, x: i32, y: i32, value: f32) {
        self.field.set_cell(x, y, value);
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn mode_name(&self) -> &'static str {
        match self.mode {
            SceneMode::WeirdChaos => WEIRD_CHAOS_LABEL,
            SceneMode::FractalLife => self.field.mode_name(),
        }
    }

    pub fn entity_count(&self) -> usize {
        self.manager.entity_count()
    }

    /// Triangles generated in the last entity frame, before culling.
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn field(&self) -> &FieldEngine {
        &self.field
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

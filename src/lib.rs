use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

pub mod engine;
pub mod entities;
pub mod formulas;
pub mod lighting;
pub mod logging;
pub mod math;
pub mod raster;
pub mod scene;

use engine::Pattern;
use math::random::SeededRandom;
use scene::{ChaosScene, SceneConfig};

/// Initialize the WASM module (runs once on load).
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(log::Level::Info);
}

/// Sample one of the nine fractal functions at (x, y).
///
/// `kind` wraps mod 9; `time` drives the Julia constant the same way the
/// field does.
#[wasm_bindgen]
pub fn fractal_sample(kind: i32, x: f32, y: f32, time: f32) -> f32 {
    formulas::FractalKind::from_selector(kind).evaluate(x, y, formulas::julia_constant(time))
}

/// Browser-facing scene: call `frame` once per animation tick, then blit
/// with `present` or copy out through `write_rgba` / `pixels`.
#[wasm_bindgen]
pub struct Visualizer {
    scene: ChaosScene<SeededRandom>,
    rgba: Vec<u8>,
}

#[wasm_bindgen]
impl Visualizer {
    /// `config`: Float64Array, see `SceneConfig::from_buffer` for the layout.
    /// An empty array gives the defaults with an entropy seed.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, config: &[f64]) -> Visualizer {
        let config = SceneConfig::from_buffer(config);
        let rng = match config.seed {
            0 => SeededRandom::from_entropy(),
            seed => SeededRandom::new(seed),
        };
        Visualizer {
            scene: ChaosScene::new(width as usize, height as usize, config, rng),
            rgba: Vec::new(),
        }
    }

    /// Advance by `dt` seconds and redraw.
    pub fn frame(&mut self, dt: f32) {
        self.scene.frame(dt);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width as usize, height as usize);
    }

    pub fn toggle_mode(&mut self) {
        self.scene.toggle_mode();
    }

    pub fn force_chaos(&mut self) {
        self.scene.force_chaos();
    }

    pub fn reset(&mut self) {
        self.scene.reset();
    }

    pub fn mode_name(&self) -> String {
        self.scene.mode_name().to_string()
    }

    /// Stamp pattern 0..=4 (spinner, glider, exploder, chaos blob, energy
    /// vortex) at a field cell. False for unknown ids or cells too close
    /// to the edge.
    pub fn inject(&mut self, pattern_id: i32, x: i32, y: i32) -> bool {
        match Pattern::from_index(pattern_id) {
            Some(pattern) => self.scene.inject(pattern, x, y),
            None => false,
        }
    }

    pub fn set_cell(&mut self, x: i32, y: i32, value: f32) {
        self.scene.set_cell(x, y, value);
    }

    pub fn width(&self) -> u32 {
        self.scene.buffer().width() as u32
    }

    pub fn height(&self) -> u32 {
        self.scene.buffer().height() as u32
    }

    pub fn entity_count(&self) -> u32 {
        self.scene.entity_count() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.scene.triangle_count() as u32
    }

    /// Packed 0xAARRGGBB pixels, row-major.
    pub fn pixels(&self) -> Vec<u32> {
        self.scene.buffer().data().to_vec()
    }

    /// `rgba_out`: Uint8Array (width * height * 4 bytes)
    pub fn write_rgba(&self, rgba_out: &mut [u8]) {
        self.scene.buffer().write_rgba(rgba_out);
    }

    /// Put the current frame on `ctx` at the canvas origin.
    pub fn present(&mut self, ctx: &web_sys::CanvasRenderingContext2d) -> Result<(), JsValue> {
        let buffer = self.scene.buffer();
        let (w, h) = (buffer.width(), buffer.height());
        self.rgba.resize(w * h * 4, 0);
        buffer.write_rgba(&mut self.rgba);

        let image = web_sys::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&self.rgba[..]),
            w as u32,
            h as u32,
        )?;
        ctx.put_image_data(&image, 0.0, 0.0)
    }
}

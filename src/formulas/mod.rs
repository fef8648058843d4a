//! Fractal function library.
//!
//! Nine pure intensity functions selected through [`FractalKind`]. The
//! field engine stores its selector as a plain integer (it also indexes the
//! display labels) and maps it here with `from_selector`.

pub mod builtin;

/// Julia constant orbiting with field time: (sin 0.5t, cos 0.7t).
#[inline]
pub fn julia_constant(time: f32) -> (f32, f32) {
    ((time * 0.5).sin(), (time * 0.7).cos())
}

/// Fractal function identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractalKind {
    Mandelbrot,
    Julia,
    BurningShip,
    Tricorn,
    Phoenix,
    Nova,
    PsychedelicWaves,
    StrangeAttractor,
    ChaosFractal,
}

impl FractalKind {
    pub const COUNT: i32 = 9;

    pub const ALL: [FractalKind; 9] = [
        FractalKind::Mandelbrot,
        FractalKind::Julia,
        FractalKind::BurningShip,
        FractalKind::Tricorn,
        FractalKind::Phoenix,
        FractalKind::Nova,
        FractalKind::PsychedelicWaves,
        FractalKind::StrangeAttractor,
        FractalKind::ChaosFractal,
    ];

    /// Map any selector onto the nine functions (`selector mod 9`,
    /// negative selectors wrap).
    pub fn from_selector(selector: i32) -> Self {
        Self::ALL[selector.rem_euclid(Self::COUNT) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => "Mandelbrot",
            FractalKind::Julia => "Julia",
            FractalKind::BurningShip => "Burning Ship",
            FractalKind::Tricorn => "Tricorn",
            FractalKind::Phoenix => "Phoenix",
            FractalKind::Nova => "Nova",
            FractalKind::PsychedelicWaves => "Psychedelic Waves",
            FractalKind::StrangeAttractor => "Strange Attractor",
            FractalKind::ChaosFractal => "Chaos Fractal",
        }
    }

    /// Evaluate at (x, y). `julia_c` is only read by [`FractalKind::Julia`].
    #[inline]
    pub fn evaluate(&self, x: f32, y: f32, julia_c: (f32, f32)) -> f32 {
        match self {
            FractalKind::Mandelbrot => builtin::mandelbrot(x, y),
            FractalKind::Julia => builtin::julia(x, y, julia_c.0, julia_c.1),
            FractalKind::BurningShip => builtin::burning_ship(x, y),
            FractalKind::Tricorn => builtin::tricorn(x, y),
            FractalKind::Phoenix => builtin::phoenix(x, y),
            FractalKind::Nova => builtin::nova(x, y),
            FractalKind::PsychedelicWaves => builtin::psychedelic_waves(x, y),
            FractalKind::StrangeAttractor => builtin::strange_attractor(x, y),
            FractalKind::ChaosFractal => builtin::chaos_fractal(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_wraps_mod_nine() {
        assert_eq!(FractalKind::from_selector(0), FractalKind::Mandelbrot);
        assert_eq!(FractalKind::from_selector(8), FractalKind::ChaosFractal);
        assert_eq!(FractalKind::from_selector(9), FractalKind::Mandelbrot);
        assert_eq!(FractalKind::from_selector(12), FractalKind::Tricorn);
        assert_eq!(FractalKind::from_selector(-1), FractalKind::ChaosFractal);
        assert_eq!(FractalKind::from_selector(11).name(), "Burning Ship");
    }

    #[test]
    fn test_evaluate_dispatch() {
        assert_eq!(FractalKind::Mandelbrot.evaluate(0.0, 0.0, (9.0, 9.0)), 1.0);
        assert_eq!(FractalKind::Julia.evaluate(0.0, 0.0, (0.0, 0.0)), 1.0);
        assert_eq!(FractalKind::Julia.evaluate(0.0, 0.0, (5.0, 0.0)), 1.0 / 25.0);
        assert_eq!(FractalKind::ChaosFractal.evaluate(0.0, 0.0, (0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_julia_constant_at_zero() {
        assert_eq!(julia_constant(0.0), (0.0, 1.0));
    }
}

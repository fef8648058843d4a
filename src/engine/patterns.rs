//! Stamp patterns written into the current field grid.
//!
//! Each pattern has a margin: the centre must sit at least that many cells
//! inside every edge, otherwise the stamp is skipped entirely.

use std::f32::consts::PI;

use crate::math::random::RandomSource;

use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Spinner,
    Glider,
    Exploder,
    ChaosBlob,
    EnergyVortex,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Spinner,
        Pattern::Glider,
        Pattern::Exploder,
        Pattern::ChaosBlob,
        Pattern::EnergyVortex,
    ];

    /// 0..=4 pick a pattern; anything else means "no pattern".
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn margin(&self) -> i32 {
        match self {
            Pattern::Spinner => 1,
            Pattern::Glider | Pattern::Exploder => 2,
            Pattern::ChaosBlob => 3,
            Pattern::EnergyVortex => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Spinner => "spinner",
            Pattern::Glider => "glider",
            Pattern::Exploder => "exploder",
            Pattern::ChaosBlob => "chaos blob",
            Pattern::EnergyVortex => "energy vortex",
        }
    }

    /// Stamp at (cx, cy). Returns false when the centre is too close to an
    /// edge and nothing was written.
    pub fn stamp<R: RandomSource>(&self, grid: &mut Grid<f32>, cx: i32, cy: i32, rng: &mut R) -> bool {
        let m = self.margin();
        let (w, h) = (grid.width() as i32, grid.height() as i32);
        if cx < m || cx >= w - m || cy < m || cy >= h - m {
            return false;
        }

        match self {
            Pattern::Spinner => {
                for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
                    grid.try_set(cx + dx, cy + dy, 1.0);
                }
            }
            Pattern::Glider => {
                for (dx, dy) in [(0, 0), (1, 1), (-1, 2), (0, 2), (1, 2)] {
                    grid.try_set(cx + dx, cy + dy, 1.0);
                }
            }
            Pattern::Exploder => {
                for (dx, dy) in [(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)] {
                    grid.try_set(cx + dx, cy + dy, 1.0);
                }
            }
            Pattern::ChaosBlob => {
                for dy in -3..=3 {
                    for dx in -3..=3 {
                        let d2 = dx * dx + dy * dy;
                        if d2 <= 9 && rng.chance(0.6 - d2 as f32 * 0.05) {
                            grid.try_set(cx + dx, cy + dy, 1.0);
                        }
                    }
                }
            }
            Pattern::EnergyVortex => {
                for r in 1..=4 {
                    let rf = r as f32;
                    let value = 1.0 - (rf - 1.0) * 0.2;
                    for step in 0..8 {
                        let rad = (step * 45) as f32 * PI / 180.0 + rf * 0.5;
                        let x = cx + (rf * rad.cos()) as i32;
                        let y = cy + (rf * rad.sin()) as i32;
                        grid.try_set(x, y, value);
                    }
                }
                grid.try_set(cx, cy, 1.0);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::random::FixedRandom;

    fn lit(grid: &Grid<f32>) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.get(x, y) != 0.0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Pattern::from_index(0), Some(Pattern::Spinner));
        assert_eq!(Pattern::from_index(4), Some(Pattern::EnergyVortex));
        assert_eq!(Pattern::from_index(5), None);
        assert_eq!(Pattern::from_index(-1), None);
        assert_eq!(Pattern::from_index(3).map(|p| p.name()), Some("chaos blob"));
    }

    #[test]
    fn test_glider_cells() {
        let mut g = Grid::new(10, 10, 0.0);
        assert!(Pattern::Glider.stamp(&mut g, 4, 4, &mut FixedRandom(0.0)));
        assert_eq!(lit(&g), vec![(4, 4), (5, 5), (3, 6), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_margin_rejects_edges() {
        let mut g = Grid::new(10, 10, 0.0);
        let mut rng = FixedRandom(0.0);
        assert!(!Pattern::Spinner.stamp(&mut g, 0, 5, &mut rng));
        assert!(!Pattern::Spinner.stamp(&mut g, 9, 5, &mut rng));
        assert!(Pattern::Spinner.stamp(&mut g, 1, 1, &mut rng));
        assert!(!Pattern::EnergyVortex.stamp(&mut g, 6, 5, &mut rng));
        assert!(!Pattern::ChaosBlob.stamp(&mut g, 7, 5, &mut rng));
        assert_eq!(lit(&g).len(), 5);
    }

    #[test]
    fn test_chaos_blob_probability_rings() {
        // 0.33 passes where 0.6 - d2*0.05 > 0.33, i.e. d2 <= 5
        let mut g = Grid::new(12, 12, 0.0);
        assert!(Pattern::ChaosBlob.stamp(&mut g, 6, 6, &mut FixedRandom(0.33)));
        assert_eq!(lit(&g).len(), 21);
        assert_eq!(g.get(8, 7), 1.0);
        assert_eq!(g.get(8, 8), 0.0);

        let mut none = Grid::new(12, 12, 0.0);
        Pattern::ChaosBlob.stamp(&mut none, 6, 6, &mut FixedRandom(0.99));
        assert!(lit(&none).is_empty());
    }

    #[test]
    fn test_vortex_centre_and_rings() {
        let mut g = Grid::new(12, 12, 0.0);
        assert!(Pattern::EnergyVortex.stamp(&mut g, 6, 6, &mut FixedRandom(0.0)));
        assert_eq!(g.get(6, 6), 1.0);
        let values: Vec<f32> = lit(&g).iter().map(|&(x, y)| g.get(x, y)).collect();
        assert!(values.iter().all(|&v| v > 0.3 && v <= 1.0));
        assert!(values.iter().any(|&v| (v - 0.4).abs() < 1e-5));
    }
}

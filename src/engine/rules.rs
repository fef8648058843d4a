//! The six automaton rule sets. Threshold bands and multipliers are literal
//! and must not be tuned.

use crate::math::random::RandomSource;

/// Cells above this value count as alive for the threshold rules.
pub const ALIVE_THRESHOLD: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSet {
    Conway,
    HighLife,
    Seeds,
    DayAndNight,
    Continuous,
    Chaos,
}

impl RuleSet {
    pub const COUNT: i32 = 6;

    /// Rule for cell (x, y) at `time`: `floor(time*2 + x*0.1 + y*0.08) mod 6`,
    /// so rule boundaries sweep across the field.
    pub fn select(time: f32, x: usize, y: usize) -> Self {
        let phase = (time * 2.0 + x as f32 * 0.1 + y as f32 * 0.08).floor() as i32;
        Self::from_index(phase.rem_euclid(Self::COUNT))
    }

    pub fn from_index(index: i32) -> Self {
        match index {
            0 => RuleSet::Conway,
            1 => RuleSet::HighLife,
            2 => RuleSet::Seeds,
            3 => RuleSet::DayAndNight,
            4 => RuleSet::Continuous,
            _ => RuleSet::Chaos,
        }
    }

    /// Next automaton value for a cell.
    pub fn apply<R: RandomSource>(
        self,
        current: f32,
        total: f32,
        time: f32,
        chaos: f32,
        rng: &mut R,
    ) -> f32 {
        let alive = current > ALIVE_THRESHOLD;
        let within = |lo: f32, hi: f32| total >= lo && total <= hi;

        match self {
            RuleSet::Conway => {
                if alive {
                    if within(2.0, 3.5) { current * 1.1 } else { current * 0.8 }
                } else if within(2.8, 3.2) {
                    rng.uniform_float(0.5, 1.0)
                } else {
                    0.0
                }
            }
            RuleSet::HighLife => {
                if alive {
                    if within(2.0, 3.0) { current * 1.05 } else { current * 0.9 }
                } else if within(3.5, 4.0) {
                    rng.uniform_float(0.3, 0.8)
                } else {
                    0.0
                }
            }
            RuleSet::Seeds => {
                if total >= 2.0 {
                    rng.uniform_float(0.4, 1.2)
                } else {
                    current * 0.95
                }
            }
            RuleSet::DayAndNight => {
                if alive {
                    if within(3.0, 4.0) { current * 1.2 } else { current * 0.7 }
                } else if within(3.0, 4.0) {
                    rng.uniform_float(0.6, 1.0)
                } else {
                    0.0
                }
            }
            RuleSet::Continuous => {
                let smooth = (total * 0.5 + time).sin() * 0.5 + 0.5;
                current * 0.9 + smooth * chaos * 0.3
            }
            RuleSet::Chaos => current * 0.8 + rng.uniform_float(0.0, total * 0.2 * chaos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::random::FixedRandom;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_select_sweeps_space_and_time() {
        assert_eq!(RuleSet::select(0.0, 0, 0), RuleSet::Conway);
        assert_eq!(RuleSet::select(0.0, 10, 0), RuleSet::HighLife);
        assert_eq!(RuleSet::select(1.0, 0, 0), RuleSet::Seeds);
        assert_eq!(RuleSet::select(2.5, 0, 0), RuleSet::Chaos);
        assert_eq!(RuleSet::select(3.0, 0, 0), RuleSet::Conway);
    }

    #[test]
    fn test_conway_bands() {
        let mut rng = FixedRandom(0.5);
        assert!(close(RuleSet::Conway.apply(1.0, 3.0, 0.0, 1.0, &mut rng), 1.1));
        assert!(close(RuleSet::Conway.apply(1.0, 4.0, 0.0, 1.0, &mut rng), 0.8));
        assert!(close(RuleSet::Conway.apply(0.0, 3.0, 0.0, 1.0, &mut rng), 0.75));
        assert_eq!(RuleSet::Conway.apply(0.05, 2.0, 0.0, 1.0, &mut rng), 0.0);
    }

    #[test]
    fn test_highlife_and_day_night() {
        let mut rng = FixedRandom(0.0);
        assert!(close(RuleSet::HighLife.apply(1.0, 2.5, 0.0, 1.0, &mut rng), 1.05));
        assert!(close(RuleSet::HighLife.apply(0.0, 3.75, 0.0, 1.0, &mut rng), 0.3));
        assert!(close(RuleSet::DayAndNight.apply(0.5, 3.5, 0.0, 1.0, &mut rng), 0.6));
        assert!(close(RuleSet::DayAndNight.apply(0.5, 5.0, 0.0, 1.0, &mut rng), 0.35));
        assert!(close(RuleSet::DayAndNight.apply(0.0, 3.0, 0.0, 1.0, &mut rng), 0.6));
    }

    #[test]
    fn test_seeds_and_continuous() {
        let mut rng = FixedRandom(1.0);
        assert!(close(RuleSet::Seeds.apply(0.0, 2.0, 0.0, 1.0, &mut rng), 1.2));
        assert!(close(RuleSet::Seeds.apply(1.0, 1.0, 0.0, 1.0, &mut rng), 0.95));
        // sin(0) -> smooth 0.5
        assert!(close(RuleSet::Continuous.apply(1.0, 0.0, 0.0, 1.0, &mut rng), 1.05));
        assert!(close(RuleSet::Continuous.apply(1.0, 0.0, 0.0, 0.0, &mut rng), 0.9));
    }

    #[test]
    fn test_chaos_with_zero_neighbors_decays() {
        let mut rng = FixedRandom(0.7);
        assert!(close(RuleSet::Chaos.apply(1.0, 0.0, 0.0, 1.0, &mut rng), 0.8));
        assert!(close(RuleSet::Chaos.apply(1.0, 5.0, 0.0, 1.0, &mut rng), 0.8 + 0.7));
    }
}

//! Placeholder source for trend, recent-change and chart noise values.
//!
//! None of these come from a real time series. The default implementation
//! samples uniformly at random; swap in another [`TrendSource`] once real
//! history is available.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::Trend;

pub const SIMULATED_CHANGES: &[&str] = &[
    "+2°C in 2h",
    "-5% in 1h",
    "+3 km/h",
    "No change",
    "+5% in 1h",
    "-2°C in 3h",
    "+1 hPa",
    "+3 km/h",
];

pub trait TrendSource: Send + Sync {
    fn trend(&self) -> Trend;

    fn recent_change(&self) -> String;

    /// Noise in `[-spread / 2, spread / 2)`.
    fn jitter(&self, spread: f64) -> f64;
}

/// Random trends. Display values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTrends;

impl TrendSource for SimulatedTrends {
    fn trend(&self) -> Trend {
        let mut rng = rand::thread_rng();
        Trend::all()
            .choose(&mut rng)
            .copied()
            .unwrap_or(Trend::Steady)
    }

    fn recent_change(&self) -> String {
        let mut rng = rand::thread_rng();
        SIMULATED_CHANGES
            .choose(&mut rng)
            .copied()
            .unwrap_or("No change")
            .to_string()
    }

    fn jitter(&self, spread: f64) -> f64 {
        if spread <= 0.0 {
            return 0.0;
        }
        let half = spread / 2.0;
        rand::thread_rng().gen_range(-half..half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_values_come_from_fixed_sets() {
        let source = SimulatedTrends;
        for _ in 0..200 {
            assert!(Trend::all().contains(&source.trend()));
            assert!(SIMULATED_CHANGES.contains(&source.recent_change().as_str()));
        }
    }

    #[test]
    fn jitter_stays_in_range() {
        let source = SimulatedTrends;
        for _ in 0..500 {
            let j = source.jitter(5.0);
            assert!((-2.5..2.5).contains(&j), "{j}");
        }
        assert_eq!(source.jitter(0.0), 0.0);
    }
}

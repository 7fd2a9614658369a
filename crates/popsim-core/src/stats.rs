//! Closed-form derived statistics.
//!
//! Per-scenario metrics and the cross-scenario comparison are computed as
//! typed records here; turning them into panel text happens in
//! [`crate::render`]. Degenerate inputs (`r = 0`, `P0 = 0`) are not rejected
//! and surface as NaN or infinite values.

use std::f64::consts::LN_2;

use serde::{Deserialize, Serialize};

use crate::model::{ExponentialParams, GrowthModel, LogisticParams};
use crate::scenario::{Scenario, ScenarioId};

/// Time at which a logistic curve crosses a fraction of `K`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "time", rename_all = "snake_case")]
pub enum ThresholdTime {
    /// Crossed after this many time units.
    Reached(f64),
    /// The computed time is not positive: the start is already at or past it.
    AlreadyPast,
}

impl ThresholdTime {
    /// Positive times are reported; everything else (including NaN) is "already past".
    pub fn from_time(time: f64) -> Self {
        if time > 0.0 {
            ThresholdTime::Reached(time)
        } else {
            ThresholdTime::AlreadyPast
        }
    }

    pub fn time(&self) -> Option<f64> {
        match self {
            ThresholdTime::Reached(t) => Some(*t),
            ThresholdTime::AlreadyPast => None,
        }
    }
}

/// Qualitative direction of a logistic scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogisticBehavior {
    GrowingTowardK,
    ExceedsK,
}

impl LogisticBehavior {
    pub fn describe(&self) -> &'static str {
        match self {
            LogisticBehavior::GrowingTowardK => "Growing toward K",
            LogisticBehavior::ExceedsK => "Initial population exceeds K",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticStats {
    pub time_to_half_k: ThresholdTime,
    pub time_to_95_k: ThresholdTime,
    pub behavior: LogisticBehavior,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialStats {
    pub final_population: f64,
    pub doubling_time: f64,
    pub growth_factor: f64,
    /// Time to 50 individuals, present only when reached within the window.
    pub time_to_50: Option<f64>,
    /// Time to 1000 individuals, present only when reached within the window.
    pub time_to_1000: Option<f64>,
}

/// Fixed notes shown once a logistic store holds two or more scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticComparison {
    pub notes: Vec<(String, String)>,
}

/// Fastest and slowest exponential scenarios by growth rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialComparison {
    pub fastest: RankedScenario,
    pub slowest: RankedScenario,
    /// `fastest.r / slowest.r`
    pub rate_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedScenario {
    pub id: ScenarioId,
    pub display_index: usize,
    pub r: f64,
}

/// Statistics a model derives per scenario and across its whole store.
pub trait DerivedStatistics: GrowthModel {
    type Stats: Clone + std::fmt::Debug + Serialize;
    type Comparison: Clone + std::fmt::Debug + Serialize;

    fn derive_stats(&self) -> Self::Stats;

    /// Cross-scenario block; `None` unless at least two scenarios exist.
    fn compare(scenarios: &[Scenario<Self>]) -> Option<Self::Comparison>;
}

impl DerivedStatistics for LogisticParams {
    type Stats = LogisticStats;
    type Comparison = LogisticComparison;

    fn derive_stats(&self) -> LogisticStats {
        let LogisticParams { p0, r, k, .. } = *self;
        let half = ((k - p0) / p0).ln() / r;
        let ninety_five = (19.0 * (k - p0) / p0).ln() / r;
        LogisticStats {
            time_to_half_k: ThresholdTime::from_time(half),
            time_to_95_k: ThresholdTime::from_time(ninety_five),
            behavior: if p0 < k {
                LogisticBehavior::GrowingTowardK
            } else {
                LogisticBehavior::ExceedsK
            },
        }
    }

    fn compare(scenarios: &[Scenario<Self>]) -> Option<LogisticComparison> {
        if scenarios.len() < 2 {
            return None;
        }
        let notes = [
            (
                "Faster scenarios",
                "Those with a higher 'r' approach K more quickly",
            ),
            (
                "Carrying capacity",
                "A higher K supports a larger long-term population",
            ),
            (
                "Starting point",
                "A low P₀ produces a steeper curve in the early phase",
            ),
        ];
        Some(LogisticComparison {
            notes: notes
                .iter()
                .map(|(title, text)| (title.to_string(), text.to_string()))
                .collect(),
        })
    }
}

impl DerivedStatistics for ExponentialParams {
    type Stats = ExponentialStats;
    type Comparison = ExponentialComparison;

    fn derive_stats(&self) -> ExponentialStats {
        let ExponentialParams { p0, r, time_max } = *self;
        let window = time_max as f64;
        let final_population = self.population(window);
        let within_window = |time: f64| (time <= window).then_some(time);
        ExponentialStats {
            final_population,
            doubling_time: LN_2 / r,
            growth_factor: final_population / p0,
            time_to_50: within_window((50.0 / p0).ln() / r),
            time_to_1000: within_window((1000.0 / p0).ln() / r),
        }
    }

    fn compare(scenarios: &[Scenario<Self>]) -> Option<ExponentialComparison> {
        if scenarios.len() < 2 {
            return None;
        }
        let mut fastest = 0;
        let mut slowest = 0;
        // strict comparisons keep the first occurrence on ties
        for (idx, scenario) in scenarios.iter().enumerate().skip(1) {
            if scenario.params.r > scenarios[fastest].params.r {
                fastest = idx;
            }
            if scenario.params.r < scenarios[slowest].params.r {
                slowest = idx;
            }
        }
        let ranked = |idx: usize| RankedScenario {
            id: scenarios[idx].id,
            display_index: idx + 1,
            r: scenarios[idx].params.r,
        };
        let fastest = ranked(fastest);
        let slowest = ranked(slowest);
        Some(ExponentialComparison {
            rate_ratio: fastest.r / slowest.r,
            fastest,
            slowest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioStore;

    #[test]
    fn logistic_half_capacity_time() {
        let stats = LogisticParams::new(10.0, 0.5, 1000.0, 20).derive_stats();
        let expected = (99.0f64).ln() / 0.5;
        let half = stats.time_to_half_k.time().unwrap();
        assert!((half - expected).abs() < 1e-12);
        assert!((half - 9.19).abs() < 0.01);
        let ninety_five = stats.time_to_95_k.time().unwrap();
        assert!((ninety_five - (19.0f64 * 99.0).ln() / 0.5).abs() < 1e-12);
        assert_eq!(stats.behavior, LogisticBehavior::GrowingTowardK);
    }

    #[test]
    fn logistic_past_threshold_is_reported_as_such() {
        // P0 above K/2: ln((K - P0)/P0) < 0
        let stats = LogisticParams::new(600.0, 0.5, 1000.0, 20).derive_stats();
        assert_eq!(stats.time_to_half_k, ThresholdTime::AlreadyPast);
        assert!(matches!(stats.time_to_95_k, ThresholdTime::Reached(_)));
        assert_eq!(stats.behavior, LogisticBehavior::GrowingTowardK);
    }

    #[test]
    fn logistic_above_capacity() {
        let stats = LogisticParams::new(1500.0, 0.5, 1000.0, 20).derive_stats();
        assert_eq!(stats.behavior, LogisticBehavior::ExceedsK);
        // ln of a negative number is NaN, which is not a positive time
        assert_eq!(stats.time_to_half_k, ThresholdTime::AlreadyPast);
        assert_eq!(stats.time_to_95_k, ThresholdTime::AlreadyPast);
    }

    #[test]
    fn exponential_example_omits_unreached_threshold() {
        let stats = ExponentialParams::new(100.0, 0.2, 10).derive_stats();
        assert!((stats.final_population - 738.905_609_893_065).abs() < 1e-9);
        assert!((stats.growth_factor - 7.389_056_098_930_65).abs() < 1e-12);
        assert!(stats.time_to_1000.is_none());
        // ln(0.5) / 0.2 is negative, which still counts as within the window
        assert!(stats.time_to_50.unwrap() < 0.0);
    }

    #[test]
    fn exponential_reports_reached_thresholds() {
        let stats = ExponentialParams::new(10.0, 0.5, 24).derive_stats();
        let t50 = stats.time_to_50.unwrap();
        let t1000 = stats.time_to_1000.unwrap();
        assert!((t50 - 5.0f64.ln() / 0.5).abs() < 1e-12);
        assert!((t1000 - 100.0f64.ln() / 0.5).abs() < 1e-12);
    }

    #[test]
    fn doubling_time_for_point_three() {
        let stats = ExponentialParams::new(100.0, 0.3, 10).derive_stats();
        assert!((stats.doubling_time - LN_2 / 0.3).abs() < 1e-12);
        assert!((stats.doubling_time - 2.31).abs() < 0.01);
    }

    #[test]
    fn zero_rate_propagates_infinity() {
        let stats = ExponentialParams::new(100.0, 0.0, 10).derive_stats();
        assert!(stats.doubling_time.is_infinite());
        assert_eq!(stats.growth_factor, 1.0);
    }

    #[test]
    fn comparisons_need_two_scenarios() {
        let mut logistic = ScenarioStore::new();
        logistic.add(LogisticParams::new(10.0, 0.5, 1000.0, 20));
        assert!(LogisticParams::compare(logistic.list()).is_none());
        logistic.add(LogisticParams::new(10.0, 0.9, 500.0, 20));
        let notes = LogisticParams::compare(logistic.list()).unwrap().notes;
        assert_eq!(notes.len(), 3);

        let mut exponential = ScenarioStore::new();
        exponential.add(ExponentialParams::new(100.0, 0.2, 10));
        assert!(ExponentialParams::compare(exponential.list()).is_none());
    }

    #[test]
    fn fastest_and_slowest_use_first_occurrence() {
        let mut store = ScenarioStore::new();
        store.add(ExponentialParams::new(100.0, 0.2, 10));
        let fast = store.add(ExponentialParams::new(100.0, 0.8, 10));
        store.add(ExponentialParams::new(100.0, 0.8, 10));
        store.add(ExponentialParams::new(100.0, 0.1, 10));
        store.add(ExponentialParams::new(100.0, 0.1, 10));

        let cmp = ExponentialParams::compare(store.list()).unwrap();
        assert_eq!(cmp.fastest.id, fast.id);
        assert_eq!(cmp.fastest.display_index, 2);
        assert_eq!(cmp.slowest.display_index, 4);
        assert!((cmp.rate_ratio - 8.0).abs() < 1e-12);
    }
}

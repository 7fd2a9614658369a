//! Closed-form population growth models.
//!
//! Both models are pure functions of time and their parameters. Nothing here
//! validates inputs: a zero `P0` or a zero `r` produces NaN or infinite values
//! that flow through to the caller unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PopError;

/// Logistic growth: `P(t) = K / (1 + ((K - P0) / P0) * exp(-r t))`.
#[inline]
pub fn logistic_model(t: f64, p0: f64, r: f64, k: f64) -> f64 {
    k / (1.0 + ((k - p0) / p0) * (-r * t).exp())
}

/// Exponential growth: `P(t) = P0 * exp(r t)`.
#[inline]
pub fn exponential_model(t: f64, p0: f64, r: f64) -> f64 {
    p0 * (r * t).exp()
}

/// Which of the two pipelines a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Logistic,
    Exponential,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Logistic => "logistic",
            ModelKind::Exponential => "exponential",
        }
    }

    pub fn time_unit(&self) -> TimeUnit {
        match self {
            ModelKind::Logistic => TimeUnit::Years,
            ModelKind::Exponential => TimeUnit::Hours,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = PopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logistic" | "log" => Ok(ModelKind::Logistic),
            "exponential" | "exp" => Ok(ModelKind::Exponential),
            _ => Err(PopError::Parse(format!(
                "unknown model '{s}' (expected logistic or exponential)"
            ))),
        }
    }
}

/// Unit of the time axis for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Years,
    Hours,
}

impl TimeUnit {
    pub fn plural(&self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Hours => "hours",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            TimeUnit::Years => "year",
            TimeUnit::Hours => "hour",
        }
    }
}

/// Common interface of the logistic and exponential parameter sets.
///
/// A single generic store, sampler and deriver serve both models; the
/// associated constants carry what differs between the two pipelines.
pub trait GrowthModel: Clone + fmt::Debug {
    /// Pipeline this model feeds.
    const KIND: ModelKind;
    /// Unit of `t` and of `time_max`.
    const TIME_UNIT: TimeUnit;
    /// Axis ticks per time unit (1 for yearly sampling, 10 for 0.1 h).
    const SAMPLES_PER_UNIT: u32;

    /// Population at time `t`.
    fn population(&self, t: f64) -> f64;

    /// Initial population.
    fn initial_population(&self) -> f64;

    /// Length of the simulated window, in [`Self::TIME_UNIT`].
    fn time_max(&self) -> u32;

    /// Parameter name/value pairs shown in scenario listings.
    fn summary_fields(&self) -> Vec<(String, String)>;

    /// Chart legend label, e.g. `Scenario 2 (P₀=10, r=0.5, K=1000)`.
    fn label(&self, display_index: usize) -> String {
        let params = self
            .summary_fields()
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Scenario {display_index} ({params})")
    }
}

/// Parameters of one logistic scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub p0: f64,
    pub r: f64,
    pub k: f64,
    pub time_max: u32,
}

impl LogisticParams {
    pub fn new(p0: f64, r: f64, k: f64, time_max: u32) -> Self {
        Self { p0, r, k, time_max }
    }
}

impl GrowthModel for LogisticParams {
    const KIND: ModelKind = ModelKind::Logistic;
    const TIME_UNIT: TimeUnit = TimeUnit::Years;
    const SAMPLES_PER_UNIT: u32 = 1;

    fn population(&self, t: f64) -> f64 {
        logistic_model(t, self.p0, self.r, self.k)
    }

    fn initial_population(&self) -> f64 {
        self.p0
    }

    fn time_max(&self) -> u32 {
        self.time_max
    }

    fn summary_fields(&self) -> Vec<(String, String)> {
        vec![
            ("P₀".to_string(), self.p0.to_string()),
            ("r".to_string(), self.r.to_string()),
            ("K".to_string(), self.k.to_string()),
        ]
    }
}

/// Parameters of one exponential scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialParams {
    pub p0: f64,
    pub r: f64,
    pub time_max: u32,
}

impl ExponentialParams {
    pub fn new(p0: f64, r: f64, time_max: u32) -> Self {
        Self { p0, r, time_max }
    }
}

impl GrowthModel for ExponentialParams {
    const KIND: ModelKind = ModelKind::Exponential;
    const TIME_UNIT: TimeUnit = TimeUnit::Hours;
    const SAMPLES_PER_UNIT: u32 = 10;

    fn population(&self, t: f64) -> f64 {
        exponential_model(t, self.p0, self.r)
    }

    fn initial_population(&self) -> f64 {
        self.p0
    }

    fn time_max(&self) -> u32 {
        self.time_max
    }

    fn summary_fields(&self) -> Vec<(String, String)> {
        vec![
            ("P₀".to_string(), self.p0.to_string()),
            ("r".to_string(), self.r.to_string()),
        ]
    }
}

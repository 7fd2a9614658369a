//! Curve sampling over a shared time axis.
//!
//! The axis runs from 0 to the longest `time_max` in the store, inclusive,
//! with `GrowthModel::SAMPLES_PER_UNIT` ticks per unit. A scenario shorter than
//! the axis yields `None` past its own window instead of extrapolating.
//!
//! Serialized points keep `null` for that gap only. Non-finite populations
//! are written as the strings `"NaN"`, `"inf"` and `"-inf"`.

use serde::{Deserialize, Serialize};

use crate::error::{PopError, PopResult};
use crate::model::{GrowthModel, ModelKind, TimeUnit};
use crate::palette::Palette;
use crate::scenario::ScenarioStore;

/// One sampled curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub style_token: String,
    /// `(t, P(t))`, or `(t, None)` past the scenario's window.
    #[serde(with = "points")]
    pub points: Vec<(f64, Option<f64>)>,
}

/// JSON-safe form of one sampled value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum SampleValue {
    Finite(f64),
    Special(String),
}

impl SampleValue {
    fn encode(value: f64) -> Self {
        if value.is_finite() {
            SampleValue::Finite(value)
        } else if value.is_nan() {
            SampleValue::Special("NaN".to_string())
        } else if value > 0.0 {
            SampleValue::Special("inf".to_string())
        } else {
            SampleValue::Special("-inf".to_string())
        }
    }

    fn decode(self) -> PopResult<f64> {
        match self {
            SampleValue::Finite(value) => Ok(value),
            SampleValue::Special(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(PopError::Parse(format!("invalid sample value '{other}'"))),
            },
        }
    }
}

mod points {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::SampleValue;

    pub fn serialize<S: Serializer>(
        points: &[(f64, Option<f64>)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        points
            .iter()
            .map(|&(t, value)| (t, value.map(SampleValue::encode)))
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(f64, Option<f64>)>, D::Error> {
        let raw: Vec<(f64, Option<SampleValue>)> = Vec::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(t, value)| {
                let value = value.map(SampleValue::decode).transpose();
                value.map(|v| (t, v)).map_err(serde::de::Error::custom)
            })
            .collect()
    }
}

/// Everything a chart widget needs for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub model: ModelKind,
    pub time_unit: TimeUnit,
    pub axis: Vec<f64>,
    pub series: Vec<Series>,
}

/// Shared time axis for a window of `max_time` units.
///
/// Ticks are computed as `i / samples_per_unit` so that no rounding error
/// accumulates along the axis.
pub fn time_axis(max_time: u32, samples_per_unit: u32) -> Vec<f64> {
    let per_unit = samples_per_unit.max(1);
    let ticks = max_time as u64 * per_unit as u64;
    (0..=ticks).map(|i| i as f64 / per_unit as f64).collect()
}

/// Sample every scenario in the store onto one shared axis.
pub fn sample_curves<M: GrowthModel>(store: &ScenarioStore<M>, palette: &Palette) -> Chart {
    let axis = match store.max_time() {
        Some(max_time) => time_axis(max_time, M::SAMPLES_PER_UNIT),
        None => Vec::new(),
    };

    let series = store
        .list()
        .iter()
        .enumerate()
        .map(|(position, scenario)| {
            let limit = scenario.params.time_max() as f64;
            let points = axis
                .iter()
                .map(|&t| {
                    let value = (t <= limit).then(|| scenario.params.population(t));
                    (t, value)
                })
                .collect();
            Series {
                label: scenario.params.label(position + 1),
                style_token: palette.style_token(scenario.color_index).to_string(),
                points,
            }
        })
        .collect();

    Chart {
        model: M::KIND,
        time_unit: M::TIME_UNIT,
        axis,
        series,
    }
}

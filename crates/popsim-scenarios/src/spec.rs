use anyhow::{anyhow, Context, Result};
use popsim_core::{ExponentialParams, LogisticParams, ModelKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub version: Option<u32>,
    #[serde(default)]
    pub defaults: ScenarioDefaults,
    #[serde(default)]
    pub logistic: Vec<LogisticSpec>,
    #[serde(default)]
    pub exponential: Vec<ExponentialSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioDefaults {
    #[serde(default)]
    pub logistic: LogisticSpec,
    #[serde(default)]
    pub exponential: ExponentialSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogisticSpec {
    pub description: Option<String>,
    pub p0: Option<f64>,
    pub r: Option<f64>,
    pub k: Option<f64>,
    pub time_max: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExponentialSpec {
    pub description: Option<String>,
    pub p0: Option<f64>,
    pub r: Option<f64>,
    pub time_max: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScenario<M> {
    pub description: Option<String>,
    #[serde(flatten)]
    pub params: M,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScenarios {
    pub logistic: Vec<ResolvedScenario<LogisticParams>>,
    pub exponential: Vec<ResolvedScenario<ExponentialParams>>,
}

impl ResolvedScenarios {
    pub fn len(&self) -> usize {
        self.logistic.len() + self.exponential.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn load_spec_from_path(path: &Path) -> Result<ScenarioSet> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading scenario spec '{}'", path.display()))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            serde_yaml::from_str(&data).context("parsing scenario spec yaml")
        }
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            serde_json::from_str(&data).context("parsing scenario spec json")
        }
        _ => serde_yaml::from_str(&data)
            .or_else(|_| serde_json::from_str(&data))
            .context("parsing scenario spec"),
    }
}

pub fn resolve_scenarios(set: &ScenarioSet) -> Result<ResolvedScenarios> {
    if set.logistic.is_empty() && set.exponential.is_empty() {
        return Err(anyhow!("scenario set contains no scenarios"));
    }
    let defaults = &set.defaults;
    let mut resolved = ResolvedScenarios {
        logistic: Vec::with_capacity(set.logistic.len()),
        exponential: Vec::with_capacity(set.exponential.len()),
    };
    for (position, spec) in set.logistic.iter().enumerate() {
        let d = &defaults.logistic;
        let field = |name: &str, value: Option<f64>, fallback: Option<f64>| {
            require(ModelKind::Logistic, position, name, value.or(fallback))
        };
        let params = LogisticParams::new(
            field("p0", spec.p0, d.p0)?,
            field("r", spec.r, d.r)?,
            field("k", spec.k, d.k)?,
            require(
                ModelKind::Logistic,
                position,
                "time_max",
                spec.time_max.or(d.time_max),
            )?,
        );
        resolved.logistic.push(ResolvedScenario {
            description: spec.description.clone(),
            params,
        });
    }
    for (position, spec) in set.exponential.iter().enumerate() {
        let d = &defaults.exponential;
        let field = |name: &str, value: Option<f64>, fallback: Option<f64>| {
            require(ModelKind::Exponential, position, name, value.or(fallback))
        };
        let params = ExponentialParams::new(
            field("p0", spec.p0, d.p0)?,
            field("r", spec.r, d.r)?,
            require(
                ModelKind::Exponential,
                position,
                "time_max",
                spec.time_max.or(d.time_max),
            )?,
        );
        resolved.exponential.push(ResolvedScenario {
            description: spec.description.clone(),
            params,
        });
    }
    Ok(resolved)
}

pub fn validate(set: &ScenarioSet) -> Result<()> {
    resolve_scenarios(set).map(|_| ())
}

/// A field must come from the scenario itself or from `defaults`.
fn require<T>(model: ModelKind, position: usize, name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        anyhow!(
            "{} scenario #{} has no '{}' and no default for it",
            model,
            position + 1,
            name
        )
    })
}

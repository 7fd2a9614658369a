//! Typed render model handed to presentation adapters.
//!
//! Nothing in this module knows about markup. A [`Frame`] bundles the chart,
//! the removable scenario list and the interpretation panel for one model;
//! a [`Presenter`] decides how to draw them.

use serde::{Deserialize, Serialize};

use crate::error::PopResult;
use crate::model::{ExponentialParams, GrowthModel, LogisticParams, ModelKind, TimeUnit};
use crate::palette::{Palette, COMPARISON_STYLE};
use crate::sampler::{sample_curves, Chart, Series};
use crate::scenario::{Scenario, ScenarioId, ScenarioStore};
use crate::stats::{DerivedStatistics, ThresholdTime};

/// One row of the removable scenario list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    /// 1-based position, recomputed on every render.
    pub display_index: usize,
    pub summary_fields: Vec<(String, String)>,
    pub style_token: String,
    pub id: ScenarioId,
}

/// One card of the interpretation panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    pub style_token: String,
    pub title: String,
    pub lines: Vec<String>,
}

/// Full render model for one model's pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub chart: Chart,
    pub list: Vec<ListEntry>,
    pub stats: Vec<StatBlock>,
}

impl Frame {
    pub fn model(&self) -> ModelKind {
        self.chart.model
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Presentation adapter: draws the chart, the list and the panel.
pub trait Presenter {
    fn render(&mut self, model: ModelKind, axis: &[f64], series: &[Series]) -> PopResult<()>;

    fn render_list(&mut self, model: ModelKind, entries: &[ListEntry]) -> PopResult<()>;

    fn render_stats(&mut self, model: ModelKind, blocks: &[StatBlock]) -> PopResult<()>;

    fn present(&mut self, frame: &Frame) -> PopResult<()> {
        let model = frame.model();
        self.render(model, &frame.chart.axis, &frame.chart.series)?;
        self.render_list(model, &frame.list)?;
        self.render_stats(model, &frame.stats)
    }
}

/// Panel wording for a model's derived statistics.
pub trait Interpretation: DerivedStatistics {
    fn stat_lines(&self, stats: &Self::Stats) -> Vec<String>;

    fn comparison_lines(comparison: &Self::Comparison) -> Vec<String>;
}

fn rate_line(r: f64, unit: TimeUnit) -> String {
    format!("Growth rate: {:.1}% per {}", r * 100.0, unit.singular())
}

fn threshold_line(label: &str, time: ThresholdTime, unit: TimeUnit) -> String {
    match time {
        ThresholdTime::Reached(t) => format!("{label}: {t:.1} {}", unit.plural()),
        ThresholdTime::AlreadyPast => format!("{label}: Already past this point"),
    }
}

impl Interpretation for LogisticParams {
    fn stat_lines(&self, stats: &Self::Stats) -> Vec<String> {
        let unit = Self::TIME_UNIT;
        vec![
            format!("Initial population: {:.0} individuals", self.p0),
            format!("Carrying capacity: {:.0} individuals", self.k),
            rate_line(self.r, unit),
            threshold_line("Time to reach 50% of K", stats.time_to_half_k, unit),
            threshold_line("Time to reach 95% of K", stats.time_to_95_k, unit),
            format!("Behavior: {}", stats.behavior.describe()),
        ]
    }

    fn comparison_lines(comparison: &Self::Comparison) -> Vec<String> {
        comparison
            .notes
            .iter()
            .map(|(title, text)| format!("{title}: {text}"))
            .collect()
    }
}

impl Interpretation for ExponentialParams {
    fn stat_lines(&self, stats: &Self::Stats) -> Vec<String> {
        let unit = Self::TIME_UNIT;
        let mut lines = vec![
            format!("Initial population: {:.0} individuals", self.p0),
            rate_line(self.r, unit),
            format!("Doubling time: {:.1} {}", stats.doubling_time, unit.plural()),
            format!(
                "Final population ({} {}): {:.0} individuals",
                self.time_max,
                unit.plural(),
                stats.final_population
            ),
            format!("Growth factor: {:.2}x", stats.growth_factor),
        ];
        if let Some(t) = stats.time_to_50 {
            lines.push(format!("Time to reach 50 individuals: {t:.1} {}", unit.plural()));
        }
        if let Some(t) = stats.time_to_1000 {
            lines.push(format!("Time to reach 1000 individuals: {t:.1} {}", unit.plural()));
        }
        lines
    }

    fn comparison_lines(comparison: &Self::Comparison) -> Vec<String> {
        vec![
            format!(
                "Fastest: Scenario {} (r = {})",
                comparison.fastest.display_index, comparison.fastest.r
            ),
            format!(
                "Slowest: Scenario {} (r = {})",
                comparison.slowest.display_index, comparison.slowest.r
            ),
            format!(
                "The fastest scenario grows {:.2}x faster than the slowest",
                comparison.rate_ratio
            ),
        ]
    }
}

/// Removable list rows, numbered from 1 in insertion order.
pub fn list_entries<M: GrowthModel>(
    scenarios: &[Scenario<M>],
    palette: &Palette,
) -> Vec<ListEntry> {
    scenarios
        .iter()
        .enumerate()
        .map(|(position, scenario)| ListEntry {
            display_index: position + 1,
            summary_fields: scenario.params.summary_fields(),
            style_token: palette.style_token(scenario.color_index).to_string(),
            id: scenario.id,
        })
        .collect()
}

/// Interpretation panel: one block per scenario, then the comparison block.
pub fn stat_blocks<M: Interpretation>(
    scenarios: &[Scenario<M>],
    palette: &Palette,
) -> Vec<StatBlock> {
    let mut blocks: Vec<StatBlock> = scenarios
        .iter()
        .enumerate()
        .map(|(position, scenario)| {
            let stats = scenario.params.derive_stats();
            StatBlock {
                style_token: palette.style_token(scenario.color_index).to_string(),
                title: format!("Scenario {}", position + 1),
                lines: scenario.params.stat_lines(&stats),
            }
        })
        .collect();
    if let Some(comparison) = M::compare(scenarios) {
        blocks.push(StatBlock {
            style_token: COMPARISON_STYLE.to_string(),
            title: "Scenario comparison".to_string(),
            lines: M::comparison_lines(&comparison),
        });
    }
    blocks
}

/// Recompute the whole render model for a store from scratch.
pub fn build_frame<M: Interpretation>(store: &ScenarioStore<M>, palette: &Palette) -> Frame {
    Frame {
        chart: sample_curves(store, palette),
        list: list_entries(store.list(), palette),
        stats: stat_blocks(store.list(), palette),
    }
}

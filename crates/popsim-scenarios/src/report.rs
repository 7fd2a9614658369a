use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use popsim_core::{Chart, Frame, ListEntry, ModelKind, PopResult, Presenter, Series, StatBlock};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Latest frame of each model, as seen by a presenter.
///
/// `Report` is itself a [`Presenter`]: hand it to a session and it keeps the
/// most recent chart, list and panel for each model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub logistic: Option<Frame>,
    pub exponential: Option<Frame>,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            generated_at: Utc::now(),
            logistic: None,
            exponential: None,
        }
    }
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self, model: ModelKind) -> Option<&Frame> {
        match model {
            ModelKind::Logistic => self.logistic.as_ref(),
            ModelKind::Exponential => self.exponential.as_ref(),
        }
    }

    /// Frames in fixed order: logistic first, then exponential.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.logistic.iter().chain(self.exponential.iter())
    }

    fn slot(&mut self, model: ModelKind) -> &mut Frame {
        let slot = match model {
            ModelKind::Logistic => &mut self.logistic,
            ModelKind::Exponential => &mut self.exponential,
        };
        slot.get_or_insert_with(|| Frame {
            chart: Chart {
                model,
                time_unit: model.time_unit(),
                axis: Vec::new(),
                series: Vec::new(),
            },
            list: Vec::new(),
            stats: Vec::new(),
        })
    }
}

impl Presenter for Report {
    fn render(&mut self, model: ModelKind, axis: &[f64], series: &[Series]) -> PopResult<()> {
        let frame = self.slot(model);
        frame.chart.axis = axis.to_vec();
        frame.chart.series = series.to_vec();
        self.generated_at = Utc::now();
        Ok(())
    }

    fn render_list(&mut self, model: ModelKind, entries: &[ListEntry]) -> PopResult<()> {
        self.slot(model).list = entries.to_vec();
        Ok(())
    }

    fn render_stats(&mut self, model: ModelKind, blocks: &[StatBlock]) -> PopResult<()> {
        self.slot(model).stats = blocks.to_vec();
        Ok(())
    }
}

pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory '{}'", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("creating report '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("writing report '{}'", path.display()))?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<Report> {
    let file = File::open(path).with_context(|| format!("opening report '{}'", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing report '{}'", path.display()))
}

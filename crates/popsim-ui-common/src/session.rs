//! Session state: the two scenario stores and the palette they share.
//!
//! Every mutating call recomputes the affected model's [`Frame`] and hands it
//! to the presenter before returning.

use popsim_core::{
    build_frame, ExponentialParams, Frame, LogisticParams, ModelKind, Palette,
    Presenter, Scenario, ScenarioId, ScenarioStore,
};
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::error::Result;

/// Owns the logistic and exponential stores. The stores never reference
/// each other.
#[derive(Debug, Clone)]
pub struct Session {
    palette: Palette,
    logistic: ScenarioStore<LogisticParams>,
    exponential: ScenarioStore<ExponentialParams>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_palette(Palette::default())
    }
}

impl Session {
    pub fn new(config: &SimConfig) -> Self {
        Self::with_palette(config.core.palette.clone())
    }

    pub fn with_palette(palette: Palette) -> Self {
        let palette_len = palette.len();
        Self {
            palette,
            logistic: ScenarioStore::with_palette_len(palette_len),
            exponential: ScenarioStore::with_palette_len(palette_len),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn logistic(&self) -> &ScenarioStore<LogisticParams> {
        &self.logistic
    }

    pub fn exponential(&self) -> &ScenarioStore<ExponentialParams> {
        &self.exponential
    }

    pub fn add_logistic(
        &mut self,
        params: LogisticParams,
        presenter: &mut dyn Presenter,
    ) -> Result<Scenario<LogisticParams>> {
        let scenario = self.logistic.add(params);
        info!(
            id = %scenario.id,
            p0 = params.p0,
            r = params.r,
            k = params.k,
            "logistic scenario added"
        );
        self.refresh(ModelKind::Logistic, presenter)?;
        Ok(scenario)
    }

    pub fn add_exponential(
        &mut self,
        params: ExponentialParams,
        presenter: &mut dyn Presenter,
    ) -> Result<Scenario<ExponentialParams>> {
        let scenario = self.exponential.add(params);
        info!(id = %scenario.id, p0 = params.p0, r = params.r, "exponential scenario added");
        self.refresh(ModelKind::Exponential, presenter)?;
        Ok(scenario)
    }

    /// Remove a scenario by id. Returns whether anything was removed; the
    /// model is re-presented either way.
    pub fn remove(
        &mut self,
        model: ModelKind,
        id: ScenarioId,
        presenter: &mut dyn Presenter,
    ) -> Result<bool> {
        let removed = match model {
            ModelKind::Logistic => self.logistic.remove(id).is_some(),
            ModelKind::Exponential => self.exponential.remove(id).is_some(),
        };
        self.refresh(model, presenter)?;
        Ok(removed)
    }

    pub fn clear(&mut self, model: ModelKind, presenter: &mut dyn Presenter) -> Result<()> {
        match model {
            ModelKind::Logistic => self.logistic.clear(),
            ModelKind::Exponential => self.exponential.clear(),
        }
        self.refresh(model, presenter)
    }

    pub fn clear_all(&mut self, presenter: &mut dyn Presenter) -> Result<()> {
        self.clear(ModelKind::Logistic, presenter)?;
        self.clear(ModelKind::Exponential, presenter)
    }

    /// Render model for one pipeline, rebuilt from scratch.
    pub fn frame(&self, model: ModelKind) -> Frame {
        match model {
            ModelKind::Logistic => build_frame(&self.logistic, &self.palette),
            ModelKind::Exponential => build_frame(&self.exponential, &self.palette),
        }
    }

    /// Re-present one model without mutating anything.
    pub fn refresh(&self, model: ModelKind, presenter: &mut dyn Presenter) -> Result<()> {
        let frame = self.frame(model);
        debug!(
            model = %model,
            scenarios = frame.list.len(),
            ticks = frame.chart.axis.len(),
            "presenting frame"
        );
        presenter.present(&frame)?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.logistic.is_empty() && self.exponential.is_empty()
    }
}

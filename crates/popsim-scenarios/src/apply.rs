use anyhow::Result;
use popsim_core::Presenter;
use popsim_ui_common::Session;
use tracing::info;

use crate::spec::ResolvedScenarios;

/// Options for loading a resolved scenario set into a session.
#[derive(Debug, Clone, Default)]
pub struct ScenarioApplyOptions {
    /// Clear both stores before adding the set's scenarios.
    pub replace_existing: bool,
}

/// Add every resolved scenario to the session, in file order.
///
/// Logistic scenarios go first, then exponential ones. Each addition is a
/// regular session mutation, so the presenter sees one frame per scenario;
/// pass a [`crate::Report`] to keep only the final state.
pub fn apply_scenarios_to_session(
    session: &mut Session,
    scenarios: &ResolvedScenarios,
    opts: &ScenarioApplyOptions,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    if opts.replace_existing {
        session.clear_all(presenter)?;
    }
    for scenario in &scenarios.logistic {
        session.add_logistic(scenario.params, presenter)?;
    }
    for scenario in &scenarios.exponential {
        session.add_exponential(scenario.params, presenter)?;
    }
    info!(
        logistic = scenarios.logistic.len(),
        exponential = scenarios.exponential.len(),
        "applied scenario set"
    );
    Ok(())
}

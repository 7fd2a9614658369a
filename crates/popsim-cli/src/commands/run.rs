use std::path::Path;

use anyhow::Result;
use popsim_cli::common::OutputFormat;
use popsim_scenarios::{
    apply_scenarios_to_session, load_spec_from_path, resolve_scenarios, write_report, Report,
    ScenarioApplyOptions,
};
use popsim_ui_common::{Session, SimConfig};
use tracing::info;

use super::emit_report;

pub fn handle(
    config: &SimConfig,
    spec: &str,
    format: OutputFormat,
    out: Option<&Path>,
    series: bool,
) -> Result<()> {
    let set = load_spec_from_path(Path::new(spec))?;
    let resolved = resolve_scenarios(&set)?;
    info!("Running {} scenarios from {}", resolved.len(), spec);

    let mut session = Session::new(config);
    let mut report = Report::new();
    apply_scenarios_to_session(
        &mut session,
        &resolved,
        &ScenarioApplyOptions::default(),
        &mut report,
    )?;

    if let Some(path) = out {
        write_report(path, &report)?;
        info!("Wrote report to {}", path.display());
    }
    emit_report(&report, format, series, config.display.decimal_places)
}

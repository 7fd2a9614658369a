use std::io;

use anyhow::Result;
use popsim_cli::common::{write_json, OutputFormat};
use popsim_cli::present::{write_frames_csv, TablePresenter};
use popsim_core::Presenter;
use popsim_scenarios::Report;

pub mod completions;
pub mod run;
pub mod scenarios;
pub mod shell;
pub mod single;

/// Print the final state of a report in the requested format.
pub fn emit_report(
    report: &Report,
    format: OutputFormat,
    series: bool,
    decimals: usize,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut presenter = TablePresenter::new(io::stdout().lock(), series, decimals);
            for frame in report.frames() {
                presenter.present(frame)?;
            }
        }
        OutputFormat::Json => write_json(report, &mut io::stdout().lock(), true)?,
        OutputFormat::Csv => write_frames_csv(report.frames(), io::stdout().lock(), decimals)?,
    }
    Ok(())
}

use anyhow::Result;
use popsim_cli::common::OutputFormat;
use popsim_scenarios::Report;
use popsim_ui_common::{Session, SimConfig};

use super::emit_report;

pub struct LogisticArgs {
    pub p0: Option<f64>,
    pub r: Option<f64>,
    pub k: Option<f64>,
    pub time_max: Option<u32>,
}

pub struct ExponentialArgs {
    pub p0: Option<f64>,
    pub r: Option<f64>,
    pub time_max: Option<u32>,
}

pub fn handle_logistic(
    config: &SimConfig,
    args: LogisticArgs,
    format: OutputFormat,
    series: bool,
) -> Result<()> {
    let params = config
        .logistic
        .params(args.p0, args.r, args.k, args.time_max);
    let mut session = Session::new(config);
    let mut report = Report::new();
    session.add_logistic(params, &mut report)?;
    emit_report(&report, format, series, config.display.decimal_places)
}

pub fn handle_exponential(
    config: &SimConfig,
    args: ExponentialArgs,
    format: OutputFormat,
    series: bool,
) -> Result<()> {
    let params = config.exponential.params(args.p0, args.r, args.time_max);
    let mut session = Session::new(config);
    let mut report = Report::new();
    session.add_exponential(params, &mut report)?;
    emit_report(&report, format, series, config.display.decimal_places)
}

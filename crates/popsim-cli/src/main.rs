use clap::Parser;
use popsim_cli::cli::{Cli, Commands};
use popsim_ui_common::SimConfig;
use std::io;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod commands;

use commands::single::{ExponentialArgs, LogisticArgs};

fn load_config(cli: &Cli) -> anyhow::Result<SimConfig> {
    let config = match &cli.config {
        Some(path) => SimConfig::load_from(path)?,
        None => SimConfig::load()?,
    };
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        popsim_cli::build_cli_command().print_help()?;
        return Ok(());
    };
    let config = load_config(cli)?;

    match command {
        Commands::Run {
            spec,
            format,
            out,
            series,
        } => commands::run::handle(&config, spec, *format, out.as_deref(), *series),
        Commands::Logistic {
            p0,
            r,
            k,
            time_max,
            format,
            series,
        } => commands::single::handle_logistic(
            &config,
            LogisticArgs {
                p0: *p0,
                r: *r,
                k: *k,
                time_max: *time_max,
            },
            *format,
            *series,
        ),
        Commands::Exponential {
            p0,
            r,
            time_max,
            format,
            series,
        } => commands::single::handle_exponential(
            &config,
            ExponentialArgs {
                p0: *p0,
                r: *r,
                time_max: *time_max,
            },
            *format,
            *series,
        ),
        Commands::Scenarios { command } => commands::scenarios::handle(command),
        Commands::Shell { series } => commands::shell::handle(&config, *series),
        Commands::Completions { shell, out } => {
            commands::completions::handle(*shell, out.as_deref())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("popsim {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&cli) {
        error!("command failed: {err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::common::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "popsim", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: tracing::Level,

    /// Configuration file (defaults to ~/.popsim/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a scenario set and present every scenario
    Run {
        /// Path to the scenario set (YAML or JSON)
        spec: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Also write the full report as JSON to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Print sampled curve values in table output
        #[arg(long)]
        series: bool,
    },
    /// Simulate a single logistic scenario
    Logistic {
        /// Initial population
        #[arg(long)]
        p0: Option<f64>,
        /// Growth rate per year
        #[arg(long, allow_negative_numbers = true)]
        r: Option<f64>,
        /// Carrying capacity
        #[arg(long)]
        k: Option<f64>,
        /// Simulated years
        #[arg(long)]
        time_max: Option<u32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Print sampled curve values in table output
        #[arg(long)]
        series: bool,
    },
    /// Simulate a single exponential scenario
    Exponential {
        /// Initial population
        #[arg(long)]
        p0: Option<f64>,
        /// Growth rate per hour
        #[arg(long, allow_negative_numbers = true)]
        r: Option<f64>,
        /// Simulated hours
        #[arg(long)]
        time_max: Option<u32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Print sampled curve values in table output
        #[arg(long)]
        series: bool,
    },
    /// Scenario-set utilities
    Scenarios {
        #[command(subcommand)]
        command: ScenariosCommands,
    },
    /// Interactive session reading commands from stdin
    Shell {
        /// Print sampled curve values after each change
        #[arg(long)]
        series: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScenariosCommands {
    /// Validate a scenario set
    Validate {
        /// Path to the scenario set (YAML or JSON)
        spec: String,
    },
    /// List the resolved scenarios of a set
    List {
        /// Path to the scenario set (YAML or JSON)
        spec: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

use std::io::{self, stdout, Write};
use std::path::Path;

use anyhow::Result;
use popsim_scenarios::{load_spec_from_path, resolve_scenarios};
use serde::Serialize;
use tabwriter::TabWriter;

use popsim_cli::common::{write_json, OutputFormat};

/// One resolved scenario, flattened across both models.
#[derive(Debug, Serialize)]
struct ListRow {
    model: &'static str,
    position: usize,
    description: Option<String>,
    p0: f64,
    r: f64,
    k: Option<f64>,
    time_max: u32,
}

pub fn handle(spec: &str, format: OutputFormat) -> Result<()> {
    let set = load_spec_from_path(Path::new(spec))?;
    let resolved = resolve_scenarios(&set)?;

    let logistic = resolved
        .logistic
        .iter()
        .enumerate()
        .map(|(idx, s)| ListRow {
            model: "logistic",
            position: idx + 1,
            description: s.description.clone(),
            p0: s.params.p0,
            r: s.params.r,
            k: Some(s.params.k),
            time_max: s.params.time_max,
        });
    let exponential = resolved
        .exponential
        .iter()
        .enumerate()
        .map(|(idx, s)| ListRow {
            model: "exponential",
            position: idx + 1,
            description: s.description.clone(),
            p0: s.params.p0,
            r: s.params.r,
            k: None,
            time_max: s.params.time_max,
        });
    let rows: Vec<ListRow> = logistic.chain(exponential).collect();

    match format {
        OutputFormat::Table => {
            let mut tw = TabWriter::new(io::stdout());
            writeln!(tw, "MODEL\t#\tP0\tR\tK\tTIME_MAX\tDESCRIPTION")?;
            for row in &rows {
                writeln!(
                    tw,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    row.model,
                    row.position,
                    row.p0,
                    row.r,
                    row.k.map(|k| k.to_string()).unwrap_or_else(|| "-".into()),
                    row.time_max,
                    row.description.as_deref().unwrap_or("")
                )?;
            }
            tw.flush()?;
        }
        OutputFormat::Json => {
            write_json(&rows, &mut stdout(), true)?;
        }
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(stdout());
            for row in &rows {
                csv.serialize(row)?;
            }
            csv.flush()?;
        }
    }
    Ok(())
}

//! Terminal and CSV presentation adapters.

use std::io::Write;

use anyhow::Result;
use popsim_core::{Frame, ListEntry, ModelKind, PopResult, Presenter, Series, StatBlock};
use tabwriter::TabWriter;

use crate::common::format_value;

/// Draws frames as aligned text tables.
pub struct TablePresenter<W: Write> {
    out: W,
    show_series: bool,
    decimals: usize,
}

impl<W: Write> TablePresenter<W> {
    pub fn new(out: W, show_series: bool, decimals: usize) -> Self {
        Self {
            out,
            show_series,
            decimals,
        }
    }

    /// Underlying writer, for output that is not part of a frame.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn title(model: ModelKind) -> &'static str {
    match model {
        ModelKind::Logistic => "Logistic model",
        ModelKind::Exponential => "Exponential model",
    }
}

impl<W: Write> Presenter for TablePresenter<W> {
    fn render(&mut self, model: ModelKind, axis: &[f64], series: &[Series]) -> PopResult<()> {
        let unit = model.time_unit().plural();
        writeln!(self.out, "== {} (time in {unit}) ==", title(model))?;
        let Some(&last) = axis.last() else {
            writeln!(self.out, "Chart: empty")?;
            return Ok(());
        };
        writeln!(
            self.out,
            "Chart: {} curve(s) over t = 0..{last} {unit} ({} points)",
            series.len(),
            axis.len()
        )?;
        if !self.show_series {
            return Ok(());
        }
        let mut tw = TabWriter::new(&mut self.out);
        let header: Vec<String> = series
            .iter()
            .map(|s| format!("{} [{}]", s.label, s.style_token))
            .collect();
        writeln!(tw, "t\t{}", header.join("\t"))?;
        for (idx, t) in axis.iter().enumerate() {
            let row: Vec<String> = series
                .iter()
                .map(|s| format_value(s.points.get(idx).and_then(|p| p.1), self.decimals))
                .collect();
            writeln!(tw, "{t}\t{}", row.join("\t"))?;
        }
        tw.flush()?;
        Ok(())
    }

    fn render_list(&mut self, _model: ModelKind, entries: &[ListEntry]) -> PopResult<()> {
        let Some(first) = entries.first() else {
            writeln!(self.out, "No scenarios added")?;
            return Ok(());
        };
        writeln!(self.out, "Scenarios:")?;
        let mut tw = TabWriter::new(&mut self.out);
        let names: Vec<&str> = first.summary_fields.iter().map(|(n, _)| n.as_str()).collect();
        writeln!(tw, "#\tID\tCOLOR\t{}", names.join("\t"))?;
        for entry in entries {
            let values: Vec<&str> = entry.summary_fields.iter().map(|(_, v)| v.as_str()).collect();
            writeln!(
                tw,
                "{}\t{}\t{}\t{}",
                entry.display_index,
                entry.id,
                entry.style_token,
                values.join("\t")
            )?;
        }
        tw.flush()?;
        Ok(())
    }

    fn render_stats(&mut self, _model: ModelKind, blocks: &[StatBlock]) -> PopResult<()> {
        if blocks.is_empty() {
            writeln!(self.out, "No data to analyze")?;
        }
        for block in blocks {
            writeln!(self.out, "[{}] {}", block.style_token, block.title)?;
            for line in &block.lines {
                writeln!(self.out, "  {line}")?;
            }
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Write sampled curves in long form: one row per scenario and tick.
pub fn write_frames_csv<'a, W: Write>(
    frames: impl IntoIterator<Item = &'a Frame>,
    writer: W,
    decimals: usize,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["model", "scenario", "label", "t", "population"])?;
    for frame in frames {
        let model = frame.model().to_string();
        for (series, entry) in frame.chart.series.iter().zip(&frame.list) {
            let scenario = entry.display_index.to_string();
            for (t, value) in &series.points {
                csv.write_record([
                    model.as_str(),
                    scenario.as_str(),
                    series.label.as_str(),
                    t.to_string().as_str(),
                    format_value(*value, decimals).as_str(),
                ])?;
            }
        }
    }
    csv.flush()?;
    Ok(())
}

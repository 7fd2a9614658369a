//! Common CLI types and utilities shared across commands.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

/// Output format for structured data.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables and interpretation cards (default)
    #[default]
    Table,
    /// JSON document (pipe-friendly, structured)
    Json,
    /// Sampled curves as comma-separated values
    Csv,
}

/// Write data as JSON to the given writer, followed by a newline.
pub fn write_json<W: Write, T: Serialize>(
    data: &T,
    writer: &mut W,
    pretty: bool,
) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, data).map_err(io::Error::other)?;
    } else {
        serde_json::to_writer(&mut *writer, data).map_err(io::Error::other)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Format a population value, leaving gaps empty.
pub fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_compact() {
        let mut output = Vec::new();
        write_json(&vec![1, 2], &mut output, false).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[1,2]\n");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(738.905), 1), "738.9");
        assert_eq!(format_value(None, 2), "");
        assert_eq!(format_value(Some(f64::NAN), 2), "NaN");
    }
}

use crate::scorer::ScoringResult;
use anyhow::{Context, Result};
use std::io::Write;

/// CSV export of the ranked crop table
pub struct CsvFormatter;

impl CsvFormatter {
    /// Write the table to any writer (header row first)
    pub fn write<W: Write>(result: &ScoringResult, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in result.report_rows() {
            wtr.serialize(row).context("Failed to write CSV row")?;
        }
        wtr.flush().context("Failed to flush CSV output")?;
        Ok(())
    }

    /// Format the table as a CSV string
    pub fn format(result: &ScoringResult) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(result, &mut buf)?;
        String::from_utf8(buf).context("CSV output was not valid UTF-8")
    }
}

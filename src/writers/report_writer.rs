use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::processors::BatchSummary;
use crate::readers::ForecastTable;
use crate::utils::constants::{
    RANKING_ROW_LABEL, ROW_CLOUDS, ROW_DAYS, ROW_LIGHTNING, SUMMARY_COLUMNS,
};

/// The payload handed to the output side: the four metric summaries plus
/// the ranked eligible day ids.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchReport {
    pub summary: BatchSummary,
    pub ranking: Vec<u32>,
}

impl LaunchReport {
    pub fn new(summary: BatchSummary, ranking: Vec<u32>) -> Self {
        Self { summary, ranking }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes the launch report: the input table echoed back with summary
/// columns appended to each metric row, and a trailing row carrying the
/// ranked day ids (empty when no day qualifies).
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, table: &ForecastTable, report: &LaunchReport, path: &Path) -> Result<()> {
        let lines = self.render_lines(table, report);

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in &lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Render the report lines without touching the filesystem.
    pub fn render_lines(&self, table: &ForecastTable, report: &LaunchReport) -> Vec<String> {
        let summaries = [
            report.summary.temperature,
            report.summary.wind,
            report.summary.humidity,
            report.summary.precipitation,
        ];

        let mut lines = Vec::with_capacity(table.rows().len() + 1);
        for (index, row) in table.rows().iter().enumerate() {
            let mut line = row.join(",");

            match index {
                ROW_DAYS => {
                    line.push(',');
                    line.push_str(SUMMARY_COLUMNS);
                }
                ROW_LIGHTNING | ROW_CLOUDS => {
                    // Pad the non-numeric rows so every line has the same
                    // number of cells.
                    line.push_str(", , , , ");
                }
                _ => {
                    let s = summaries[index - 1];
                    line.push_str(&format!(",{},{},{},{}", s.mean, s.min, s.max, s.median));
                }
            }

            lines.push(line);
        }

        let mut ranking_line = RANKING_ROW_LABEL.to_string();
        for id in &report.ranking {
            ranking_line.push_str(&format!(",{}", id));
        }
        lines.push(ranking_line);

        lines
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

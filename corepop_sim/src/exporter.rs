//! CSV and JSON exporters for final results.
//!
//! The CSV holds one row per level (from level 1); the JSON holds the whole
//! summary including the rank rollup.

use crate::error::ExportError;
use corepop_core::{LevelSummary, PopulationSummary};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default CSV file name.
pub const DEFAULT_CSV_PATH: &str = "output.csv";

/// One CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub level: usize,
    pub rank: u32,
    pub passed: u64,
    pub died: u64,
    #[serde(rename = "final")]
    pub final_count: usize,
    /// Blank unless positive
    pub average_age: Option<u64>,
    pub ancients: usize,
}

impl From<&LevelSummary> for CsvRow {
    fn from(row: &LevelSummary) -> Self {
        Self {
            level: row.level,
            rank: row.rank,
            passed: row.passed,
            died: row.died,
            final_count: row.surviving,
            average_age: row.average_age_days.filter(|age| *age > 0),
            ancients: row.ancients,
        }
    }
}

/// Writes the per-level table as CSV to `writer`.
pub fn write_csv<W: Write>(summary: &PopulationSummary, writer: W) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    for row in &summary.levels {
        out.serialize(CsvRow::from(row))?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the per-level table to a CSV file.
pub fn write_csv_file(summary: &PopulationSummary, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(summary, file)
}

/// Complete run export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimExport {
    /// Seed used
    pub seed: u64,

    /// Days simulated
    pub days: u64,

    /// Wall-clock seconds spent stepping
    pub wall_time_secs: f64,

    /// Final summary
    pub summary: PopulationSummary,
}

impl SimExport {
    /// Creates a new export container.
    pub fn new(seed: u64, days: u64, wall_time_secs: f64, summary: PopulationSummary) -> Self {
        Self {
            seed,
            days,
            wall_time_secs,
            summary,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

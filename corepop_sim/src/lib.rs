//! corepop Run Harness
//!
//! Drives a [`corepop_core::Simulation`] over a long horizon and turns the
//! final state into something people can read:
//! - **Run loop**: fixed number of days, wall-clock checkpoint every 100 years
//! - **Text report**: per-level and per-rank breakdown
//! - **Exports**: per-level CSV table and a JSON dump of the full summary
//!
//! # Usage
//!
//! ```ignore
//! use corepop_core::{SimConfig, Simulation};
//! use corepop_sim::{RunLoop, TextReport};
//!
//! let mut sim = Simulation::new(SimConfig::default())?;
//! RunLoop::years(1800)?.run(&mut sim);
//! println!("{}", TextReport(&sim.summary()));
//! ```

mod error;
pub mod exporter;
mod report;
mod runner;

pub use error::{ExportError, RunError};
pub use exporter::{write_csv, write_csv_file, CsvRow, SimExport, DEFAULT_CSV_PATH};
pub use report::TextReport;
pub use runner::{Checkpoint, RunLoop, RunResult, CHECKPOINT_INTERVAL_DAYS, REFERENCE_YEARS};

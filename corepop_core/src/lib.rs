//! corepop Core - Level-Bucketed Population Engine
//!
//! Simulates a cohort of dungeon cores climbing discrete levels, one day at a
//! time:
//! 1. **Level model**: experience, rank, death chance and mean advancement
//!    time derived from the level number
//! 2. **Population store**: cores bucketed by level, grown lazily as cores
//!    reach new heights
//! 3. **Daily step**: spawn, death rolls, countdowns and migration, drawing
//!    from one seeded random stream in a fixed order
//!
//! # Usage
//!
//! ```ignore
//! use corepop_core::{SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::default().with_seed(7))?;
//! sim.run(365 * 100);
//! let summary = sim.summary();
//! ```

pub mod config;
pub mod error;
pub mod level;
pub mod organism;
pub mod population;
pub mod rng;
pub mod simulation;
pub mod stepper;
pub mod summary;

// Re-export key types for convenience
pub use config::{SimConfig, DAYS_PER_YEAR};
pub use error::SimError;
pub use level::LevelStats;
pub use organism::{Birth, Organism};
pub use population::{LevelSlot, Population};
pub use rng::SimRng;
pub use simulation::Simulation;
pub use stepper::{DayReport, LevelTransition, Stepper};
pub use summary::{LevelSummary, PopulationSummary, RankSummary};

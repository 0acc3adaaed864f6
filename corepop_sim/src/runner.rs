//! Run loop - drives a simulation over a fixed horizon.

use crate::error::RunError;
use corepop_core::{Simulation, DAYS_PER_YEAR};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Days between progress checkpoints (100 years).
pub const CHECKPOINT_INTERVAL_DAYS: u64 = DAYS_PER_YEAR * 100;

/// Horizon of the reference run (1800 years).
pub const REFERENCE_YEARS: u64 = 1800;

/// Wall-clock progress marker emitted during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Day index just simulated
    pub day: u64,

    /// Simulated year of that day
    pub year: u64,

    /// Wall-clock time since the previous checkpoint (or run start)
    pub elapsed: Duration,
}

/// Results from running a simulation.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Seed the simulation was built with
    pub seed: u64,

    /// Days stepped by this run
    pub days: u64,

    /// Simulation day after the run
    pub final_day: u64,

    /// Progress checkpoints, in order
    pub checkpoints: Vec<Checkpoint>,

    /// Total wall-clock time
    pub wall_time: Duration,

    /// Cores alive at the end
    pub final_core_count: usize,

    /// Levels created by the end
    pub final_level_count: usize,
}

/// Steps a [`Simulation`] for a fixed number of days.
#[derive(Debug, Clone)]
pub struct RunLoop {
    /// Days to simulate
    days: u64,

    /// Days between checkpoints (0 = never)
    checkpoint_interval: u64,
}

impl RunLoop {
    /// Creates a run loop over `days` days.
    pub fn new(days: u64) -> Self {
        Self {
            days,
            checkpoint_interval: CHECKPOINT_INTERVAL_DAYS,
        }
    }

    /// Creates a run loop over `years` simulated years.
    pub fn years(years: u64) -> Result<Self, RunError> {
        years
            .checked_mul(DAYS_PER_YEAR)
            .map(Self::new)
            .ok_or(RunError::HorizonOverflow { years })
    }

    /// Sets the checkpoint interval.
    pub fn with_checkpoint_interval(mut self, days: u64) -> Self {
        self.checkpoint_interval = days;
        self
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    /// Runs the simulation and returns the result.
    ///
    /// A checkpoint fires after every day whose index is a multiple of the
    /// interval, including day 0.
    pub fn run(&self, sim: &mut Simulation) -> RunResult {
        info!(
            "Running {} days ({} years) from day {}",
            self.days,
            self.days / DAYS_PER_YEAR,
            sim.day()
        );

        let run_start = Instant::now();
        let mut last = run_start;
        let mut checkpoints = Vec::new();

        for _ in 0..self.days {
            let report = sim.step();

            if self.checkpoint_interval > 0 && report.day % self.checkpoint_interval == 0 {
                let now = Instant::now();
                let checkpoint = Checkpoint {
                    day: report.day,
                    year: report.day / DAYS_PER_YEAR,
                    elapsed: now - last,
                };
                last = now;

                info!(
                    "Year '{}': time for simulation {:.2}s",
                    checkpoint.year,
                    checkpoint.elapsed.as_secs_f64()
                );
                debug!(
                    "  cores={} | levels={}",
                    sim.population().total_organisms(),
                    sim.population().level_count()
                );
                checkpoints.push(checkpoint);
            }
        }

        let result = RunResult {
            seed: sim.config().seed,
            days: self.days,
            final_day: sim.day(),
            checkpoints,
            wall_time: run_start.elapsed(),
            final_core_count: sim.population().total_organisms(),
            final_level_count: sim.population().level_count(),
        };

        info!(
            "✓ Run complete: {} cores across {} levels in {:.2}s",
            result.final_core_count,
            result.final_level_count,
            result.wall_time.as_secs_f64()
        );

        result
    }
}

//! Simulation - the population, its stepper and the day counter.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::population::Population;
use crate::stepper::{DayReport, Stepper};
use crate::summary::PopulationSummary;
use tracing::info;

/// A seeded population plus everything needed to advance it.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Configuration
    config: SimConfig,

    /// All cores and level stats
    population: Population,

    /// Daily transition (owns the random stream)
    stepper: Stepper,

    /// Days simulated so far; also the index of the next day
    day: u64,
}

impl Simulation {
    /// Creates a simulation seeded with Ancients over `config.initial_levels`.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let mut population = Population::new();
        population.seed_initial(config.initial_levels, config.arrival_countdown);
        Self::with_population(config, population)
    }

    /// Creates a simulation over an existing population.
    pub fn with_population(config: SimConfig, population: Population) -> Result<Self, SimError> {
        let stepper = Stepper::new(&config)?;
        info!(
            "Simulation ready (seed={}, levels={}, cores={})",
            config.seed,
            population.level_count(),
            population.total_organisms()
        );
        Ok(Self {
            config,
            population,
            stepper,
            day: 0,
        })
    }

    /// Advances one day.
    pub fn step(&mut self) -> DayReport {
        let report = self.stepper.step(&mut self.population, self.day);
        self.day += 1;
        report
    }

    /// Advances `days` days.
    pub fn run(&mut self, days: u64) {
        for _ in 0..days {
            self.step();
        }
    }

    /// Days simulated so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Summary of the current state, with ages measured against [`day`](Self::day).
    pub fn summary(&self) -> PopulationSummary {
        PopulationSummary::from_population(&self.population, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeding() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        assert_eq!(sim.day(), 0);
        assert_eq!(sim.population().level_count(), 100);
        assert!(sim.population().total_organisms() > 100);
    }

    #[test]
    fn test_zero_days_changes_nothing() {
        let sim = Simulation::new(SimConfig::default()).unwrap();
        let mut run = sim.clone();
        run.run(0);

        assert_eq!(run.day(), 0);
        for (level, slot) in run.population().levels() {
            assert_eq!(slot.stats().died(), 0);
            assert_eq!(slot.stats().passed(), 0);
            assert_eq!(slot.organisms().len(), sim.population().bucket(level).len());
        }
    }

    #[test]
    fn test_step_advances_day() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        let report = sim.step();
        assert_eq!(report.day, 0);
        assert_eq!(sim.day(), 1);
        assert_eq!(sim.step().day, 1);
    }

    #[test]
    fn test_spawn_only_growth() {
        // Certain spawns, level 0 is immortal, nobody's countdown runs out
        let config = SimConfig::default()
            .with_initial_levels(1)
            .with_spawn_chance(1.0)
            .with_roll_span(1.0)
            .with_arrival_countdown(1e12);
        let mut sim = Simulation::new(config).unwrap();
        let start = sim.population().bucket(0).len();

        sim.run(250);

        assert_eq!(sim.population().bucket(0).len(), start + 250);
        assert_eq!(sim.population().level_count(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig::default().with_spawn_chance(-0.1);
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_summary_uses_current_day() {
        let mut sim = Simulation::new(SimConfig::default().with_seed(8)).unwrap();
        sim.run(30);
        assert_eq!(sim.summary().day, 30);
    }
}

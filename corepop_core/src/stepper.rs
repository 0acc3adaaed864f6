//! Daily transition of the population.
//!
//! One call to [`Stepper::step`] advances the store by exactly one day:
//!
//! ```text
//! 1. Spawn      one roll; maybe a new core at level 0
//! 2. Survival   one roll per core (level order); die, or count down
//! 3. Migration  levels in increasing order; clone advancers one level up,
//!               drop the dead and the advanced from their old bucket
//! ```
//!
//! Only the levels that existed once spawning finished are processed, so a
//! core moves at most one level per day and a freshly created level waits
//! until the next day before its cores are rolled.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::organism::Organism;
use crate::population::Population;
use crate::rng::SimRng;
use tracing::trace;

/// Deaths and advancements out of one level during one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelTransition {
    /// Level the cores left
    pub level: usize,
    /// Cores removed because they died
    pub died: usize,
    /// Cores cloned into `level + 1`
    pub advanced: usize,
}

/// What happened during one simulated day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayReport {
    /// Day index the step ran for
    pub day: u64,
    /// Whether a new core arrived at level 0
    pub spawned: bool,
    /// One entry per processed level
    pub transitions: Vec<LevelTransition>,
    /// Levels created by advancement
    pub levels_created: usize,
}

impl DayReport {
    pub fn total_died(&self) -> usize {
        self.transitions.iter().map(|t| t.died).sum()
    }

    pub fn total_advanced(&self) -> usize {
        self.transitions.iter().map(|t| t.advanced).sum()
    }
}

/// Advances a [`Population`] one day at a time.
///
/// Owns the simulation's random stream.
#[derive(Debug, Clone)]
pub struct Stepper {
    rng: SimRng,
    spawn_chance: f64,
    arrival_countdown: f64,
}

impl Stepper {
    /// Creates a stepper from a validated configuration.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            rng: SimRng::new(config)?,
            spawn_chance: config.spawn_chance,
            arrival_countdown: config.arrival_countdown,
        })
    }

    /// Runs spawn, survival and migration for `day`.
    pub fn step(&mut self, population: &mut Population, day: u64) -> DayReport {
        let spawned = self.spawn(population, day);

        let levels = population.level_count();
        self.survival_pass(population, levels);
        let transitions = self.migration_pass(population, levels);

        let report = DayReport {
            day,
            spawned,
            transitions,
            levels_created: population.level_count() - levels,
        };
        trace!(
            "Day {}: spawned={} died={} advanced={}",
            day,
            report.spawned,
            report.total_died(),
            report.total_advanced()
        );
        report
    }

    /// Rolls for a new arrival at level 0.
    pub fn spawn(&mut self, population: &mut Population, day: u64) -> bool {
        if self.rng.roll() < self.spawn_chance {
            population.insert(0, Organism::born(day, self.arrival_countdown));
            true
        } else {
            false
        }
    }

    /// Death roll and countdown for every core in levels `0..levels`.
    ///
    /// A core that dies is flagged and counted immediately; a survivor whose
    /// countdown drops below 1.0 is flagged to advance. No core gets both.
    pub fn survival_pass(&mut self, population: &mut Population, levels: usize) {
        for level in 0..levels {
            let slot = population.slot_mut(level);
            let death_chance = slot.stats.death_chance();

            for core in slot.organisms.iter_mut() {
                debug_assert!(
                    !core.pending_death && !core.pending_advance,
                    "step flags leaked from a previous day"
                );
                if self.rng.roll() < death_chance {
                    core.pending_death = true;
                    slot.stats.record_death();
                } else {
                    core.countdown -= 1.0;
                    if core.countdown < 1.0 {
                        core.pending_advance = true;
                    }
                }
            }
        }
    }

    /// Moves flagged cores out of levels `0..levels`, lowest level first.
    pub fn migration_pass(
        &mut self,
        population: &mut Population,
        levels: usize,
    ) -> Vec<LevelTransition> {
        let mut transitions = Vec::with_capacity(levels);

        for level in 0..levels {
            if population.bucket(level).is_empty() {
                transitions.push(LevelTransition {
                    level,
                    ..Default::default()
                });
                continue;
            }

            let any_advancing = population
                .bucket(level)
                .iter()
                .any(|core| core.pending_advance);

            let mut advanced = 0;
            if any_advancing {
                population.ensure_level(level + 1);
                let (current, next) = population.slot_and_next_mut(level);
                let average_days = next.stats.average_days();

                for core in current.organisms.iter().filter(|core| core.pending_advance) {
                    debug_assert!(!core.pending_death, "core flagged to both die and advance");
                    next.stats.record_pass();
                    let days = average_days * self.rng.advancement_multiplier();
                    next.organisms.push(core.advanced(days));
                    advanced += 1;
                }
            }

            let slot = population.slot_mut(level);
            let before = slot.organisms.len();
            slot.organisms
                .retain(|core| !core.pending_death && !core.pending_advance);
            let removed = before - slot.organisms.len();

            transitions.push(LevelTransition {
                level,
                died: removed - advanced,
                advanced,
            });
        }

        transitions
    }
}

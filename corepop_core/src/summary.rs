//! Read-only summaries of a population for reporting.
//!
//! Reporters never touch the store directly; they consume a
//! [`PopulationSummary`] built from the final state.

use crate::population::Population;
use serde::{Deserialize, Serialize};

/// Ranks always present in the rank rollup (1..=RANK_BANDS).
pub const RANK_BANDS: u32 = 6;

/// Final statistics for a single level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub level: usize,
    pub rank: u32,
    /// Cores that advanced into this level
    pub passed: u64,
    /// Cores that died at this level
    pub died: u64,
    /// Cores currently at this level
    pub surviving: usize,
    /// Mean age in whole days of the non-Ancient survivors
    pub average_age_days: Option<u64>,
    /// Ancients currently at this level
    pub ancients: usize,
}

impl LevelSummary {
    /// Percentage of the cores that passed into this level and died here.
    pub fn died_percent(&self) -> Option<f64> {
        percent(self.died, self.passed)
    }
}

/// Totals for one rank band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSummary {
    pub rank: u32,
    /// Cores that reached this rank (passed count of its first level)
    pub passed: u64,
    /// Deaths across every level of this rank
    pub died: u64,
    /// Survivors across every level of this rank
    pub surviving: usize,
}

impl RankSummary {
    pub fn died_percent(&self) -> Option<f64> {
        percent(self.died, self.passed)
    }
}

/// Everything a reporter needs about the final population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    /// Days simulated; ages are measured against this
    pub day: u64,
    /// One row per level, starting at level 1
    pub levels: Vec<LevelSummary>,
    /// Ranks 1..=6, plus any higher rank that was reached
    pub ranks: Vec<RankSummary>,
    /// Ancients alive anywhere
    pub total_ancients: usize,
    /// Cores alive anywhere
    pub total_surviving: usize,
}

impl PopulationSummary {
    /// Builds the summary for `population` as of day `today`.
    pub fn from_population(population: &Population, today: u64) -> Self {
        let levels: Vec<LevelSummary> = population
            .levels()
            .skip(1)
            .map(|(level, slot)| {
                let mut age_total = 0u64;
                let mut aged = 0u64;
                let mut ancients = 0;
                for core in slot.organisms() {
                    match core.age(today) {
                        Some(age) => {
                            age_total += age;
                            aged += 1;
                        }
                        None => ancients += 1,
                    }
                }

                let stats = slot.stats();
                LevelSummary {
                    level,
                    rank: stats.rank(),
                    passed: stats.passed(),
                    died: stats.died(),
                    surviving: slot.organisms().len(),
                    average_age_days: (aged > 0).then(|| age_total / aged),
                    ancients,
                }
            })
            .collect();

        let highest = levels.iter().map(|l| l.rank).max().unwrap_or(0);
        let mut ranks: Vec<RankSummary> = (1..=highest.max(RANK_BANDS))
            .map(|rank| RankSummary {
                rank,
                ..Default::default()
            })
            .collect();

        for row in &levels {
            if row.rank == 0 {
                continue;
            }
            let band = &mut ranks[row.rank as usize - 1];
            // Passed is attributed once, to the first level of the rank
            if population.stats(row.level - 1).rank() != row.rank {
                band.passed += row.passed;
            }
            band.died += row.died;
            band.surviving += row.surviving;
        }

        let total_ancients = population
            .levels()
            .flat_map(|(_, slot)| slot.organisms())
            .filter(|core| core.is_ancient())
            .count();

        Self {
            day: today,
            levels,
            ranks,
            total_ancients,
            total_surviving: population.total_organisms(),
        }
    }

    /// Row for `level`, if it exists and is at least 1.
    pub fn level(&self, level: usize) -> Option<&LevelSummary> {
        level.checked_sub(1).and_then(|index| self.levels.get(index))
    }

    /// Rollup for `rank`, if it is at least 1 and was tracked.
    pub fn rank(&self, rank: u32) -> Option<&RankSummary> {
        (rank as usize)
            .checked_sub(1)
            .and_then(|index| self.ranks.get(index))
    }
}

fn percent(part: u64, whole: u64) -> Option<f64> {
    (whole > 0).then(|| part as f64 * 100.0 / whole as f64)
}

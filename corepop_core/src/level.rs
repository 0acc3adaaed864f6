//! Level Statistics
//! =================
//!
//! Every level a core can occupy has a fixed set of derived constants:
//! - **Experience threshold**: parabolic in the level number
//! - **Rank**: the experience treated as the volume of a sphere, turned into a
//!   radius and bucketed on a log2 scale (rank 2 ≈ radius 2, rank 3 ≈ radius 4, ...)
//! - **Death chance**: daily probability of a core dying at this level
//! - **Average days**: mean time a core spends before advancing
//!
//! These are computed once, when the level is first referenced, and stored in
//! a [`LevelStats`] alongside the cumulative `died` / `passed` counters.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Radius (in rank-1 units) that the cube root of the normalized volume is divided by.
pub const RANK_RADIUS_UNIT: f64 = 1.73824;

/// Highest rank that still dies of natural causes.
pub const MORTAL_RANK_CEILING: u32 = 5;

/// First rank of the "breakthrough" band with the declining hazard.
pub const BREAKTHROUGH_RANK: u32 = 3;

// =============================================================================
// FORMULAS
// =============================================================================

/// Experience required to reach `level`: `level² + 11·level + 10`.
pub fn experience_for(level: usize) -> u64 {
    let level = level as u64;
    level * level + 11 * level + 10
}

/// Rank derived from an experience threshold.
///
/// ```text
/// rank = ceil(log2( (exp / (4π/3))^(1/3) / 1.73824 ))
/// ```
///
/// Level 0 comes out negative and clamps to 0.
pub fn rank_for(exp: u64) -> u32 {
    let radius = (exp as f64 / (PI * 4.0 / 3.0)).powf(1.0 / 3.0);
    let rank = (radius / RANK_RADIUS_UNIT).log2().ceil();
    if rank <= 0.0 {
        0
    } else {
        rank as u32
    }
}

/// Daily death probability for a core at `level` with the given `rank`.
///
/// - ranks below 3: grows linearly with level (`level / 20000`)
/// - ranks 3..=5: `0.00009 / sqrt(level) - 0.000001`
/// - ranks above 5: immortal
///
/// # Panics
///
/// Panics if `level == 0` in the 3..=5 band, where the formula divides by zero.
pub fn death_chance(level: usize, rank: u32) -> f64 {
    if rank < BREAKTHROUGH_RANK {
        return level as f64 / 20000.0;
    }
    if rank > MORTAL_RANK_CEILING {
        return 0.0;
    }
    assert!(
        level > 0,
        "death chance undefined for level 0 at rank {}",
        rank
    );
    0.00009 / (level as f64).sqrt() - 0.000001
}

/// Mean number of days spent at a level: `exp^0.8 × 0.1`.
///
/// Grows sub-linearly since experience comes faster at higher levels.
pub fn average_days_for(exp: u64) -> f64 {
    (exp as f64).powf(4.0 / 5.0) * 0.1
}

// =============================================================================
// LEVEL STATS
// =============================================================================

/// Derived constants and cumulative counters for one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Experience required to reach this level
    exp_threshold: u64,
    /// Coarse tier governing the death regime
    rank: u32,
    /// Daily death probability
    death_chance: f64,
    /// Mean days before advancing out of this level
    average_days: f64,
    /// Cores that died while at this level
    died: u64,
    /// Cores that advanced into this level
    passed: u64,
}

impl LevelStats {
    /// Computes the stats for `level`.
    pub fn new(level: usize) -> Self {
        let exp_threshold = experience_for(level);
        let rank = rank_for(exp_threshold);
        Self {
            exp_threshold,
            rank,
            death_chance: death_chance(level, rank),
            average_days: average_days_for(exp_threshold),
            died: 0,
            passed: 0,
        }
    }

    pub fn exp_threshold(&self) -> u64 {
        self.exp_threshold
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn death_chance(&self) -> f64 {
        self.death_chance
    }

    pub fn average_days(&self) -> f64 {
        self.average_days
    }

    pub fn died(&self) -> u64 {
        self.died
    }

    pub fn passed(&self) -> u64 {
        self.passed
    }

    pub(crate) fn record_death(&mut self) {
        self.died += 1;
    }

    pub(crate) fn record_pass(&mut self) {
        self.passed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_experience_formula() {
        assert_eq!(experience_for(0), 10);
        assert_eq!(experience_for(1), 22);
        assert_eq!(experience_for(10), 220);
        assert_eq!(experience_for(99), 10900);
    }

    #[test]
    fn test_rank_boundaries() {
        // Level 1 sits just over the rank-1 radius
        assert_eq!(rank_for(experience_for(0)), 0);
        assert_eq!(rank_for(experience_for(1)), 1);
        assert_eq!(rank_for(experience_for(8)), 1);
        assert_eq!(rank_for(experience_for(9)), 2);

        assert_eq!(rank_for(experience_for(32)), 2);
        assert_eq!(rank_for(experience_for(33)), 3);
        assert_eq!(rank_for(experience_for(99)), 3);
        assert_eq!(rank_for(experience_for(843)), 5);
        assert_eq!(rank_for(experience_for(844)), 6);
    }

    #[test]
    fn test_death_chance_regimes() {
        // Linear below the breakthrough band
        assert_eq!(death_chance(0, 0), 0.0);
        assert_relative_eq!(death_chance(20, 2), 0.001);

        // Declining hazard inside the band
        assert_relative_eq!(death_chance(100, 3), 0.000008, epsilon = 1e-15);
        assert!(death_chance(400, 4) < death_chance(100, 4));

        // Immortal above rank 5
        assert_eq!(death_chance(5000, 6), 0.0);
    }

    #[test]
    #[should_panic(expected = "level 0")]
    fn test_death_chance_rejects_level_zero_in_band() {
        death_chance(0, 3);
    }

    #[test]
    fn test_average_days() {
        assert_relative_eq!(average_days_for(10), 10f64.powf(0.8) * 0.1);
        assert!(average_days_for(1000) > average_days_for(100));
    }

    #[test]
    fn test_level_stats_new() {
        let stats = LevelStats::new(0);
        assert_eq!(stats.exp_threshold(), 10);
        assert_eq!(stats.rank(), 0);
        assert_eq!(stats.death_chance(), 0.0);
        assert_eq!(stats.died(), 0);
        assert_eq!(stats.passed(), 0);
    }

    #[test]
    fn test_level_stats_counters() {
        let mut stats = LevelStats::new(5);
        stats.record_death();
        stats.record_pass();
        stats.record_pass();
        assert_eq!(stats.died(), 1);
        assert_eq!(stats.passed(), 2);
    }
}

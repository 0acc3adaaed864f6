//! Simulation configuration.

use crate::error::SimError;

/// Days per simulated year.
pub const DAYS_PER_YEAR: u64 = 365;

/// Configuration for a simulation run.
///
/// Defaults reproduce the reference run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Master seed for determinism
    pub seed: u64,

    /// Levels seeded with Ancients at start
    pub initial_levels: usize,

    /// Probability that one new core arrives at level 0 each day
    pub spawn_chance: f64,

    /// Upper bound of the uniform spawn/survival roll.
    ///
    /// Values above 1.0 scale every probability comparison down by
    /// `1 / roll_span`. The reference run uses 1.1775.
    pub roll_span: f64,

    /// Countdown given to Ancients and to each new arrival
    pub arrival_countdown: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_levels: 100,
            spawn_chance: 0.4,
            roll_span: 1.1775,
            arrival_countdown: 1.0,
        }
    }
}

impl SimConfig {
    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of levels seeded with Ancients.
    pub fn with_initial_levels(mut self, levels: usize) -> Self {
        self.initial_levels = levels;
        self
    }

    /// Sets the daily spawn chance.
    pub fn with_spawn_chance(mut self, chance: f64) -> Self {
        self.spawn_chance = chance;
        self
    }

    /// Sets the upper bound of the uniform roll.
    pub fn with_roll_span(mut self, span: f64) -> Self {
        self.roll_span = span;
        self
    }

    /// Sets the countdown given to new arrivals.
    pub fn with_arrival_countdown(mut self, days: f64) -> Self {
        self.arrival_countdown = days;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(SimError::probability("spawn_chance", self.spawn_chance));
        }
        if !self.roll_span.is_finite() || self.roll_span <= 0.0 {
            return Err(SimError::InvalidRollSpan(self.roll_span));
        }
        if !self.arrival_countdown.is_finite() || self.arrival_countdown <= 0.0 {
            return Err(SimError::InvalidCountdown(self.arrival_countdown));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_run() {
        let config = SimConfig::default();
        assert_eq!(config.initial_levels, 100);
        assert_eq!(config.spawn_chance, 0.4);
        assert_eq!(config.roll_span, 1.1775);
        assert_eq!(config.arrival_countdown, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_chance = SimConfig::default().with_spawn_chance(1.5);
        assert!(matches!(
            bad_chance.validate(),
            Err(SimError::InvalidProbability { name: "spawn_chance", .. })
        ));

        let bad_span = SimConfig::default().with_roll_span(0.0);
        assert!(matches!(bad_span.validate(), Err(SimError::InvalidRollSpan(_))));

        let bad_countdown = SimConfig::default().with_arrival_countdown(f64::NAN);
        assert!(matches!(
            bad_countdown.validate(),
            Err(SimError::InvalidCountdown(_))
        ));
    }

    #[test]
    fn test_builder_chain() {
        let config = SimConfig::default()
            .with_seed(7)
            .with_initial_levels(3)
            .with_roll_span(1.0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.initial_levels, 3);
        assert_eq!(config.roll_span, 1.0);
    }
}

//! Error types for simulation construction.

use thiserror::Error;

/// Errors raised while building a simulation from its configuration.
///
/// Stepping itself never fails; these only surface from
/// [`SimConfig::validate`](crate::SimConfig::validate) and
/// [`Simulation::new`](crate::Simulation::new).
#[derive(Debug, Error)]
pub enum SimError {
    /// A probability outside `[0, 1]`
    #[error("Invalid probability for {name}: {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// The uniform roll distribution has an empty or non-finite range
    #[error("Invalid roll span: {0} (must be finite and > 0)")]
    InvalidRollSpan(f64),

    /// Countdown given to new arrivals is not a finite positive number
    #[error("Invalid arrival countdown: {0} (must be finite and > 0)")]
    InvalidCountdown(f64),

    /// The advancement jitter distribution could not be built
    #[error("Jitter distribution error: {0}")]
    Jitter(#[from] rand_distr::NormalError),
}

impl SimError {
    /// Creates a probability error.
    pub fn probability(name: &'static str, value: f64) -> Self {
        Self::InvalidProbability { name, value }
    }
}

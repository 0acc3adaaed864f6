//! The individual core tracked by the simulation.

use serde::{Deserialize, Serialize};

/// When a core came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Birth {
    /// Existed before the simulated timeline began; true age unknown.
    Ancient,
    /// Spawned on the given simulated day.
    Day(u64),
}

/// A single core.
///
/// The level is not stored here: a core's level is the index of the bucket
/// holding it, and moving it between buckets is the only way it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    /// Days remaining before the core may advance
    pub countdown: f64,

    /// Creation marker
    pub birth: Birth,

    /// Rolled death this step (step-local)
    #[serde(skip)]
    pub(crate) pending_death: bool,

    /// Countdown ran out this step (step-local)
    #[serde(skip)]
    pub(crate) pending_advance: bool,
}

impl Organism {
    /// Creates a core that arrived on `day`.
    pub fn born(day: u64, countdown: f64) -> Self {
        Self::with_birth(Birth::Day(day), countdown)
    }

    /// Creates a core that predates the simulation.
    pub fn ancient(countdown: f64) -> Self {
        Self::with_birth(Birth::Ancient, countdown)
    }

    fn with_birth(birth: Birth, countdown: f64) -> Self {
        Self {
            countdown,
            birth,
            pending_death: false,
            pending_advance: false,
        }
    }

    /// Returns true if this core predates the simulation.
    pub fn is_ancient(&self) -> bool {
        matches!(self.birth, Birth::Ancient)
    }

    /// Age in days as of `today`, or `None` for Ancients.
    pub fn age(&self, today: u64) -> Option<u64> {
        match self.birth {
            Birth::Ancient => None,
            Birth::Day(day) => Some(today.saturating_sub(day)),
        }
    }

    pub fn pending_death(&self) -> bool {
        self.pending_death
    }

    pub fn pending_advance(&self) -> bool {
        self.pending_advance
    }

    /// Copy of this core one level up, with `extra_days` added to whatever
    /// is left of its countdown.
    ///
    /// Leftover countdown carries over rather than being reset.
    pub(crate) fn advanced(&self, extra_days: f64) -> Self {
        Self {
            countdown: self.countdown + extra_days,
            birth: self.birth,
            pending_death: false,
            pending_advance: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_born_and_ancient() {
        let core = Organism::born(12, 1.0);
        assert_eq!(core.birth, Birth::Day(12));
        assert!(!core.is_ancient());
        assert!(!core.pending_death() && !core.pending_advance());

        let ancient = Organism::ancient(1.0);
        assert!(ancient.is_ancient());
        assert_eq!(ancient.countdown, 1.0);
    }

    #[test]
    fn test_age() {
        let core = Organism::born(100, 1.0);
        assert_eq!(core.age(365), Some(265));
        assert_eq!(Organism::ancient(1.0).age(365), None);
    }

    #[test]
    fn test_advanced_carries_leftover_and_clears_flags() {
        let mut core = Organism::born(3, 0.25);
        core.pending_advance = true;

        let next = core.advanced(10.0);
        assert_eq!(next.countdown, 10.25);
        assert_eq!(next.birth, Birth::Day(3));
        assert!(!next.pending_advance());
        assert!(!next.pending_death());
    }
}

//! Population store: cores bucketed by level.
//!
//! Each level owns one [`LevelSlot`] pairing its [`LevelStats`] with the
//! cores currently at that level, so stats and buckets can never drift out of
//! alignment. [`Population::ensure_level`] is the only way the store grows and
//! levels are never removed, even when their bucket empties.

use crate::level::LevelStats;
use crate::organism::Organism;
use tracing::debug;

/// Ancients seeded per level are `ANCIENT_ALLOWANCE - rank`, floored at zero.
pub const ANCIENT_ALLOWANCE: u32 = 4;

/// Stats and occupants of a single level.
#[derive(Debug, Clone)]
pub struct LevelSlot {
    pub(crate) stats: LevelStats,
    pub(crate) organisms: Vec<Organism>,
}

impl LevelSlot {
    fn new(level: usize) -> Self {
        Self {
            stats: LevelStats::new(level),
            organisms: Vec::new(),
        }
    }

    pub fn stats(&self) -> &LevelStats {
        &self.stats
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }
}

/// All cores, bucketed by level.
#[derive(Debug, Clone, Default)]
pub struct Population {
    slots: Vec<LevelSlot>,
}

impl Population {
    /// Creates an empty store with no levels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds levels `0..count` with Ancients.
    ///
    /// Each level gets `max(0, 4 - rank)` Ancients with the given countdown,
    /// so the pre-simulation cohort thins out as rank rises.
    pub fn seed_initial(&mut self, count: usize, countdown: f64) {
        self.slots.reserve(count.saturating_sub(self.slots.len()));
        for level in 0..count {
            self.ensure_level(level);
            let slot = &mut self.slots[level];
            let to_spawn = ANCIENT_ALLOWANCE.saturating_sub(slot.stats.rank());
            for _ in 0..to_spawn {
                slot.organisms.push(Organism::ancient(countdown));
            }
        }
        debug!(
            "Seeded {} levels with {} ancients",
            count,
            self.total_organisms()
        );
    }

    /// Grows the store so that `level` exists. Idempotent.
    pub fn ensure_level(&mut self, level: usize) {
        while self.slots.len() <= level {
            let next = self.slots.len();
            self.slots.push(LevelSlot::new(next));
            debug!("Level {} created (rank {})", next, self.slots[next].stats.rank());
        }
    }

    /// Number of levels created so far.
    pub fn level_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot for `level`.
    ///
    /// # Panics
    ///
    /// Panics if the level has not been created.
    pub fn slot(&self, level: usize) -> &LevelSlot {
        match self.slots.get(level) {
            Some(slot) => slot,
            None => panic!(
                "level {} accessed before creation ({} levels exist)",
                level,
                self.slots.len()
            ),
        }
    }

    pub(crate) fn slot_mut(&mut self, level: usize) -> &mut LevelSlot {
        let count = self.slots.len();
        match self.slots.get_mut(level) {
            Some(slot) => slot,
            None => panic!(
                "level {} accessed before creation ({} levels exist)",
                level, count
            ),
        }
    }

    /// Stats for `level`. Panics if the level does not exist.
    pub fn stats(&self, level: usize) -> &LevelStats {
        &self.slot(level).stats
    }

    /// Cores at `level`. Panics if the level does not exist.
    pub fn bucket(&self, level: usize) -> &[Organism] {
        &self.slot(level).organisms
    }

    /// Mutable access to a level and the one above it.
    ///
    /// Both levels must already exist.
    pub(crate) fn slot_and_next_mut(&mut self, level: usize) -> (&mut LevelSlot, &mut LevelSlot) {
        let count = self.slots.len();
        assert!(
            level + 1 < count,
            "level {} accessed before creation ({} levels exist)",
            level + 1,
            count
        );
        let (lower, upper) = self.slots.split_at_mut(level + 1);
        (&mut lower[level], &mut upper[0])
    }

    /// Total cores across all levels.
    pub fn total_organisms(&self) -> usize {
        self.slots.iter().map(|slot| slot.organisms.len()).sum()
    }

    /// Iterates levels in increasing order.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &LevelSlot)> {
        self.slots.iter().enumerate()
    }

    /// Inserts a core directly into `level`, creating the level if needed.
    pub fn insert(&mut self, level: usize, organism: Organism) {
        self.ensure_level(level);
        self.slots[level].organisms.push(organism);
    }
}

//! Property tests for the level model and the daily step.

use corepop_core::level::{death_chance, experience_for, rank_for, LevelStats};
use corepop_core::{Population, SimConfig, Simulation, Stepper};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rank_never_decreases(level in 0usize..20_000) {
        let here = rank_for(experience_for(level));
        let next = rank_for(experience_for(level + 1));
        prop_assert!(next >= here, "rank({}) = {} > rank({}) = {}", level, here, level + 1, next);
    }

    #[test]
    fn immortal_above_rank_five(level in 844usize..50_000) {
        let stats = LevelStats::new(level);
        prop_assert!(stats.rank() > 5);
        prop_assert_eq!(stats.death_chance(), 0.0);
    }

    #[test]
    fn death_chance_is_a_probability(level in 0usize..50_000) {
        let rank = rank_for(experience_for(level));
        let chance = death_chance(level, rank);
        prop_assert!((0.0..1.0).contains(&chance), "level {} chance {}", level, chance);
    }

    #[test]
    fn average_days_positive(level in 0usize..50_000) {
        prop_assert!(LevelStats::new(level).average_days() > 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn same_seed_same_outcome(seed in any::<u64>(), days in 0u64..2_000) {
        let config = SimConfig::default().with_seed(seed);
        let mut a = Simulation::new(config.clone()).unwrap();
        let mut b = Simulation::new(config).unwrap();
        a.run(days);
        b.run(days);

        prop_assert_eq!(a.population().level_count(), b.population().level_count());
        for ((_, left), (_, right)) in a.population().levels().zip(b.population().levels()) {
            prop_assert_eq!(left.stats(), right.stats());
            prop_assert_eq!(left.organisms(), right.organisms());
        }
    }

    #[test]
    fn step_conserves_cores(seed in any::<u64>(), days in 1u64..500) {
        let config = SimConfig::default().with_seed(seed);
        let mut population = Population::new();
        population.seed_initial(config.initial_levels, config.arrival_countdown);
        let mut stepper = Stepper::new(&config).unwrap();

        for day in 0..days {
            let before = population.total_organisms();
            let report = stepper.step(&mut population, day);
            let spawned = usize::from(report.spawned);
            prop_assert_eq!(population.total_organisms(), before + spawned - report.total_died());
        }
    }
}

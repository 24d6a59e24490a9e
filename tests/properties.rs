use std::sync::Arc;

use proptest::prelude::*;
use wellness_coach::catalog::ExerciseCatalog;
use wellness_coach::models::{ExperienceLevel, TrainingGoal, TrainingRequest};
use wellness_coach::services::seeded_shuffle::SeededShuffler;
use wellness_coach::services::{ProgramGenerationService, ProgressionService};

fn goal_strategy() -> impl Strategy<Value = TrainingGoal> {
    prop_oneof![
        Just(TrainingGoal::Strength),
        Just(TrainingGoal::WeightLoss),
        Just(TrainingGoal::MuscleGain),
        Just(TrainingGoal::Endurance),
        Just(TrainingGoal::Flexibility),
    ]
}

fn level_strategy() -> impl Strategy<Value = ExperienceLevel> {
    prop_oneof![
        Just(ExperienceLevel::Beginner),
        Just(ExperienceLevel::Intermediate),
        Just(ExperienceLevel::Advanced),
    ]
}

proptest! {
    /// Every (goal, level, days) combination yields a structurally valid
    /// plan: one entry per scheduled day, strictly increasing weekdays, at
    /// least one exercise per day, and every exercise within its scheme
    /// bounds.
    #[test]
    fn generated_plans_are_always_valid(
        goal in goal_strategy(),
        level in level_strategy(),
        days in 3u8..=7,
        variation in 0u64..16,
    ) {
        let gen = ProgramGenerationService::new(Arc::new(ExerciseCatalog::builtin().clone()));
        let request = TrainingRequest::new(goal, level, days);
        let plan = gen.generate(&request, &[], variation);

        prop_assert_eq!(plan.days_per_week, days);
        prop_assert_eq!(plan.days.len(), days as usize);
        for window in plan.days.windows(2) {
            prop_assert!(window[0].weekday < window[1].weekday);
        }
        for day in &plan.days {
            prop_assert!(day.weekday < 7);
            prop_assert!(!day.exercises.is_empty());
            for ex in &day.exercises {
                prop_assert!((1..=6).contains(&ex.sets));
                prop_assert!(ex.reps >= 1);
                prop_assert!(ex.reps <= ex.rep_cap());
                prop_assert!(ex.weight >= 0.0);
            }
        }
    }

    /// The same inputs always serialize to the same bytes.
    #[test]
    fn generation_is_deterministic(
        goal in goal_strategy(),
        level in level_strategy(),
        days in 3u8..=7,
        variation in 0u64..16,
    ) {
        let gen = ProgramGenerationService::new(Arc::new(ExerciseCatalog::builtin().clone()));
        let request = TrainingRequest::new(goal, level, days);
        let a = serde_json::to_string(&gen.generate(&request, &[], variation)).unwrap();
        let b = serde_json::to_string(&gen.generate(&request, &[], variation)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Shuffling never loses, duplicates or invents elements.
    #[test]
    fn shuffle_is_a_permutation(seed in 0u64..1000, len in 0usize..64) {
        let original: Vec<usize> = (0..len).collect();
        let mut shuffled = original.clone();
        SeededShuffler::new(seed).shuffle(&mut shuffled);

        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, original);
    }

    /// Rounded weights always land on the 2.5-unit grid and stay within
    /// half an increment of the input.
    #[test]
    fn weight_rounding_stays_on_grid(weight in 0.0f64..500.0) {
        let rounded = ProgressionService::round_to_increment(weight);
        let steps = rounded / 2.5;
        prop_assert!((steps - steps.round()).abs() < 1e-9);
        prop_assert!((rounded - weight).abs() <= 1.25 + 1e-9);
    }
}

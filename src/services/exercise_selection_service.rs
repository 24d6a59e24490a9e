use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::catalog::ExerciseCatalog;
use crate::models::{Difficulty, ExerciseCategory, ExerciseDefinition, ExperienceLevel, MuscleGroup};
use crate::services::seeded_shuffle::SeededShuffler;
use crate::services::split_planner_service as split;

/// Which slice of the filtered pool a day focus draws from: ordered
/// muscle-group buckets for strength-style days, whole categories for
/// cardio/flexibility days.
#[derive(Debug, Clone, Copy)]
pub enum FocusStrategy {
    Buckets(&'static [MuscleGroup]),
    Categories(&'static [ExerciseCategory]),
}

impl FocusStrategy {
    pub fn for_label(focus: &str) -> FocusStrategy {
        use ExerciseCategory::{Balance, Cardio, Flexibility};
        use MuscleGroup::*;
        match focus {
            split::FOCUS_FULL_BODY => {
                FocusStrategy::Buckets(&[Chest, Back, Quadriceps, Shoulders, Core])
            }
            split::FOCUS_UPPER => {
                FocusStrategy::Buckets(&[Chest, Back, Shoulders, Biceps, Triceps])
            }
            split::FOCUS_LOWER | split::FOCUS_LEGS => {
                FocusStrategy::Buckets(&[Quadriceps, Hamstrings, Glutes, Calves])
            }
            split::FOCUS_PUSH => FocusStrategy::Buckets(&[Chest, Shoulders, Triceps]),
            split::FOCUS_PULL => FocusStrategy::Buckets(&[Back, Biceps, Core]),
            split::FOCUS_CARDIO => FocusStrategy::Categories(&[Cardio]),
            split::FOCUS_FLEXIBILITY => FocusStrategy::Categories(&[Flexibility, Balance]),
            split::FOCUS_ACTIVE_RECOVERY => FocusStrategy::Categories(&[Flexibility, Balance]),
            // Unknown label: treat as a full-body day rather than failing
            _ => FocusStrategy::Buckets(&[Chest, Back, Quadriceps, Shoulders, Core]),
        }
    }
}

/// Muscle-region bookkeeping threaded across the whole week so two training
/// days hitting the same muscle group favor different sub-regions.
#[derive(Debug, Clone, Default)]
pub struct WeekDiversity {
    used: HashMap<MuscleGroup, HashSet<String>>,
}

impl WeekDiversity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, group: MuscleGroup, region: &str) -> bool {
        self.used
            .get(&group)
            .is_some_and(|regions| regions.contains(region))
    }

    pub fn mark(&mut self, group: MuscleGroup, region: &str) {
        self.used
            .entry(group)
            .or_default()
            .insert(region.to_string());
    }
}

/// Picks a bounded, diverse set of exercises for one training day out of an
/// already-filtered pool.
#[derive(Debug, Clone, Default)]
pub struct ExerciseSelectionService;

impl ExerciseSelectionService {
    pub fn new() -> Self {
        Self
    }

    /// Per-day exercise budget by level, reduced by one when a deload is
    /// active.
    pub fn day_budget(level: ExperienceLevel, deload: bool) -> usize {
        let base = match level {
            ExperienceLevel::Beginner => 4,
            ExperienceLevel::Intermediate => 5,
            ExperienceLevel::Advanced => 6,
        };
        if deload {
            base - 1
        } else {
            base
        }
    }

    /// Selects up to `budget` exercises for the day. Never returns an empty
    /// list: an exhausted pool falls back to the catalog's safe default.
    pub fn select_for_day(
        &self,
        catalog: &ExerciseCatalog,
        pool: &[&ExerciseDefinition],
        focus: &str,
        diversity: &mut WeekDiversity,
        budget: usize,
        level: ExperienceLevel,
        shuffler: &mut SeededShuffler,
    ) -> Vec<ExerciseDefinition> {
        let mut selected: Vec<ExerciseDefinition> = match FocusStrategy::for_label(focus) {
            FocusStrategy::Buckets(groups) => {
                self.select_bucketed(pool, groups, diversity, budget, level, shuffler)
            }
            FocusStrategy::Categories(categories) => {
                self.select_by_category(pool, categories, diversity, budget, level, shuffler)
            }
        };

        if selected.is_empty() {
            warn!(focus, "exercise pool exhausted, substituting safe default");
            selected.push(catalog.safe_default());
        }
        selected
    }

    fn select_bucketed(
        &self,
        pool: &[&ExerciseDefinition],
        groups: &[MuscleGroup],
        diversity: &mut WeekDiversity,
        budget: usize,
        level: ExperienceLevel,
        shuffler: &mut SeededShuffler,
    ) -> Vec<ExerciseDefinition> {
        let mut selected: Vec<ExerciseDefinition> = Vec::with_capacity(budget);
        let quota = budget.div_ceil(groups.len()).max(1);

        for &group in groups {
            if selected.len() >= budget {
                break;
            }
            let mut candidates: Vec<&ExerciseDefinition> = pool
                .iter()
                .copied()
                .filter(|e| {
                    e.primary_muscle_group == group
                        && !selected.iter().any(|s| s.id == e.id)
                })
                .collect();
            if candidates.is_empty() {
                continue;
            }

            shuffler.shuffle(&mut candidates);
            Self::rank_candidates(&mut candidates, group, diversity, level);

            for candidate in candidates.into_iter().take(quota) {
                if selected.len() >= budget {
                    break;
                }
                diversity.mark(group, &candidate.muscle_region);
                selected.push(candidate.clone());
            }
        }

        // Fill any remaining slots from the rest of the focus-relevant pool.
        if selected.len() < budget {
            let mut leftover: Vec<&ExerciseDefinition> = pool
                .iter()
                .copied()
                .filter(|e| {
                    groups.contains(&e.primary_muscle_group)
                        && !selected.iter().any(|s| s.id == e.id)
                })
                .collect();
            shuffler.shuffle(&mut leftover);
            for candidate in leftover {
                if selected.len() >= budget {
                    break;
                }
                diversity.mark(candidate.primary_muscle_group, &candidate.muscle_region);
                selected.push(candidate.clone());
            }
        }

        selected
    }

    fn select_by_category(
        &self,
        pool: &[&ExerciseDefinition],
        categories: &[ExerciseCategory],
        diversity: &mut WeekDiversity,
        budget: usize,
        level: ExperienceLevel,
        shuffler: &mut SeededShuffler,
    ) -> Vec<ExerciseDefinition> {
        let mut candidates: Vec<&ExerciseDefinition> = pool
            .iter()
            .copied()
            .filter(|e| categories.contains(&e.category))
            .collect();
        shuffler.shuffle(&mut candidates);
        candidates.sort_by_key(|e| {
            (
                diversity.is_used(e.primary_muscle_group, &e.muscle_region) as u8,
                Self::difficulty_rank(e.difficulty, level),
            )
        });

        let mut selected = Vec::with_capacity(budget);
        for candidate in candidates.into_iter().take(budget) {
            diversity.mark(candidate.primary_muscle_group, &candidate.muscle_region);
            selected.push(candidate.clone());
        }
        selected
    }

    /// Stable ranking applied after the shuffle: fresh regions first, then
    /// harder movements first for advanced users. The shuffle order survives
    /// inside equal keys, which is where variation between seeds comes from.
    fn rank_candidates(
        candidates: &mut [&ExerciseDefinition],
        group: MuscleGroup,
        diversity: &WeekDiversity,
        level: ExperienceLevel,
    ) {
        candidates.sort_by_key(|e| {
            (
                diversity.is_used(group, &e.muscle_region) as u8,
                Self::difficulty_rank(e.difficulty, level),
            )
        });
    }

    fn difficulty_rank(difficulty: Difficulty, level: ExperienceLevel) -> u8 {
        if level == ExperienceLevel::Advanced {
            // Advanced-difficulty work outranks intermediate within a bucket
            Difficulty::Advanced as u8 - difficulty as u8
        } else {
            0
        }
    }
}

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{CatalogFilter, ExerciseCatalog};
use crate::models::{
    DayWorkout, Difficulty, ExerciseCategory, ExperienceLevel, PlannedExercise, SessionLog,
    TrainingGoal, TrainingRequest, WeeklyPlan,
};
use crate::services::exercise_selection_service::{ExerciseSelectionService, WeekDiversity};
use crate::services::progression_service::ProgressionService;
use crate::services::seeded_shuffle::SeededShuffler;
use crate::services::set_scheme_service::SetSchemeService;
use crate::services::split_planner_service::{DaySlot, SplitPlannerService, DAY_NAMES};

/// Orchestrates split planning, exercise selection, set-scheme assignment and
/// the history-driven progression pass into a complete `WeeklyPlan`.
#[derive(Debug, Clone)]
pub struct ProgramGenerationService {
    catalog: Arc<ExerciseCatalog>,
    split_planner: SplitPlannerService,
    selection: ExerciseSelectionService,
    set_scheme: SetSchemeService,
    progression: ProgressionService,
    default_session_minutes: u32,
}

impl ProgramGenerationService {
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self::with_default_minutes(catalog, 45)
    }

    pub fn with_default_minutes(catalog: Arc<ExerciseCatalog>, default_session_minutes: u32) -> Self {
        Self {
            catalog,
            split_planner: SplitPlannerService::new(),
            selection: ExerciseSelectionService::new(),
            set_scheme: SetSchemeService::new(),
            progression: ProgressionService::new(),
            default_session_minutes,
        }
    }

    /// Generates `count` independent plan variations. Each variation index
    /// seeds its own deterministic shuffle sequence, so the call is
    /// reproducible as a whole while the variations differ from each other.
    pub fn generate_variations(
        &self,
        request: &TrainingRequest,
        history: &[SessionLog],
        count: usize,
    ) -> Vec<WeeklyPlan> {
        info!(
            goal = ?request.goal,
            level = ?request.level,
            days = request.days_per_week,
            count,
            "generating plan variations"
        );
        (0..count as u64)
            .map(|index| self.generate(request, history, index))
            .collect()
    }

    pub fn generate(
        &self,
        request: &TrainingRequest,
        history: &[SessionLog],
        variation_index: u64,
    ) -> WeeklyPlan {
        let mut shuffler = SeededShuffler::new(variation_index);
        let plan_id = Uuid::from_u64_pair(shuffler.next_u64(), shuffler.next_u64());

        let slots = self
            .split_planner
            .plan(request.goal, request.days_per_week);
        let pool = self.catalog.list_exercises(&Self::pool_filter(request));

        if pool.is_empty() {
            warn!("exercise pool empty after filtering, returning safe-default plan");
            return self.fallback_plan(plan_id, request, &slots, variation_index);
        }

        let deload = self.progression.deload_recommended(history);
        if deload {
            info!("plateau across recent history, trimming day budget for a deload week");
        }
        let budget = ExerciseSelectionService::day_budget(request.level, deload);

        let mut diversity = WeekDiversity::new();
        let mut days = Vec::with_capacity(slots.len());
        for slot in &slots {
            let selected = self.selection.select_for_day(
                &self.catalog,
                &pool,
                slot.focus,
                &mut diversity,
                budget,
                request.level,
                &mut shuffler,
            );
            let exercises: Vec<PlannedExercise> = selected
                .iter()
                .map(|e| self.set_scheme.plan_exercise(e, request.goal, request.level))
                .collect();
            let target_minutes = request
                .preferred_session_minutes
                .unwrap_or_else(|| self.estimate_day_minutes(&exercises));
            days.push(DayWorkout {
                weekday: slot.weekday,
                day_name: DAY_NAMES[slot.weekday as usize].to_string(),
                focus: slot.focus.to_string(),
                exercises,
                target_minutes,
            });
        }

        let mut plan = WeeklyPlan {
            id: plan_id,
            name: Self::plan_name(request, variation_index),
            level: request.level,
            goal: request.goal,
            days_per_week: request.days_per_week,
            days,
        };
        self.progression.apply(&mut plan, history);
        plan
    }

    fn pool_filter(request: &TrainingRequest) -> CatalogFilter {
        let categories = match request.goal {
            // Strength-family splits still need flexibility/balance work for
            // the active-recovery day at seven days
            TrainingGoal::Strength | TrainingGoal::MuscleGain | TrainingGoal::WeightLoss => vec![
                ExerciseCategory::Strength,
                ExerciseCategory::Flexibility,
                ExerciseCategory::Balance,
            ],
            TrainingGoal::Endurance => {
                vec![ExerciseCategory::Cardio, ExerciseCategory::Flexibility]
            }
            TrainingGoal::Flexibility => {
                vec![ExerciseCategory::Flexibility, ExerciseCategory::Balance]
            }
        };
        let max_difficulty = match request.level {
            ExperienceLevel::Beginner => Difficulty::Beginner,
            ExperienceLevel::Intermediate => Difficulty::Intermediate,
            ExperienceLevel::Advanced => Difficulty::Advanced,
        };
        CatalogFilter {
            categories,
            muscle_groups: Vec::new(),
            max_difficulty: Some(max_difficulty),
            equipment: Some(request.equipment_available.clone()),
            excluded_names: request.excluded_exercise_names.clone(),
        }
    }

    /// Minimal valid plan used when filtering removed every exercise: one
    /// safe-default movement per scheduled day.
    fn fallback_plan(
        &self,
        plan_id: Uuid,
        request: &TrainingRequest,
        slots: &[DaySlot],
        variation_index: u64,
    ) -> WeeklyPlan {
        let safe = self.catalog.safe_default();
        let days = slots
            .iter()
            .map(|slot| {
                let exercise = self
                    .set_scheme
                    .plan_exercise(&safe, request.goal, request.level);
                DayWorkout {
                    weekday: slot.weekday,
                    day_name: DAY_NAMES[slot.weekday as usize].to_string(),
                    focus: slot.focus.to_string(),
                    target_minutes: request
                        .preferred_session_minutes
                        .unwrap_or(self.default_session_minutes),
                    exercises: vec![exercise],
                }
            })
            .collect();
        WeeklyPlan {
            id: plan_id,
            name: Self::plan_name(request, variation_index),
            level: request.level,
            goal: request.goal,
            days_per_week: request.days_per_week,
            days,
        }
    }

    fn estimate_day_minutes(&self, exercises: &[PlannedExercise]) -> u32 {
        let mut seconds = 0u32;
        for ex in exercises {
            match ex.category {
                ExerciseCategory::Cardio => {
                    // reps carries minutes for cardio
                    seconds += ex.reps * 60;
                }
                ExerciseCategory::Flexibility | ExerciseCategory::Balance => {
                    // reps carries hold seconds
                    seconds += ex.sets * (ex.reps + 15);
                }
                ExerciseCategory::Strength => {
                    let per_set = 40 + ex.rest_seconds.unwrap_or(60);
                    seconds += ex.sets * per_set;
                }
            }
        }
        // Warm-up allowance on top of the work itself
        (seconds / 60 + 10).max(20)
    }

    fn plan_name(request: &TrainingRequest, variation_index: u64) -> String {
        let goal = match request.goal {
            TrainingGoal::Strength => "Strength",
            TrainingGoal::WeightLoss => "Weight Loss",
            TrainingGoal::MuscleGain => "Muscle Gain",
            TrainingGoal::Endurance => "Endurance",
            TrainingGoal::Flexibility => "Flexibility",
        };
        let level = match request.level {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        };
        if variation_index == 0 {
            format!("{level} {goal} Program")
        } else {
            format!("{level} {goal} Program (Variation {})", variation_index + 1)
        }
    }
}

use crate::models::{
    ExerciseCategory, ExerciseDefinition, ExperienceLevel, PlannedExercise, TrainingGoal,
};

/// Sets, reps and rest prescription for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScheme {
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: Option<u32>,
}

/// Assigns a set/rep/rest scheme per `(goal, level, category)`.
///
/// For cardio the reps value carries duration in minutes, for
/// flexibility/balance it carries hold seconds; the compound/isolation rep
/// ceiling is applied last in every path and is never skipped.
#[derive(Debug, Clone, Default)]
pub struct SetSchemeService;

impl SetSchemeService {
    pub fn new() -> Self {
        Self
    }

    pub fn assign(
        &self,
        exercise: &ExerciseDefinition,
        goal: TrainingGoal,
        level: ExperienceLevel,
    ) -> SetScheme {
        let scheme = match exercise.category {
            ExerciseCategory::Strength => Self::strength_scheme(goal, level),
            ExerciseCategory::Cardio => Self::cardio_scheme(level),
            ExerciseCategory::Flexibility | ExerciseCategory::Balance => {
                Self::flexibility_scheme(level)
            }
        };
        Self::clamp_reps(scheme, exercise)
    }

    /// Builds the planned entry for a selected exercise with a starting
    /// weight of zero; the progression pass fills weights in from history.
    pub fn plan_exercise(
        &self,
        exercise: &ExerciseDefinition,
        goal: TrainingGoal,
        level: ExperienceLevel,
    ) -> PlannedExercise {
        let scheme = self.assign(exercise, goal, level);
        let mut muscle_groups = vec![exercise.primary_muscle_group];
        muscle_groups.extend(exercise.secondary_muscle_groups.iter().copied());

        PlannedExercise {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            sets: scheme.sets,
            reps: scheme.reps,
            weight: 0.0,
            rest_seconds: scheme.rest_seconds,
            category: exercise.category,
            movement_pattern: exercise.movement_pattern,
            muscle_groups,
            equipment: exercise.equipment.clone(),
            difficulty: exercise.difficulty,
        }
    }

    fn strength_scheme(goal: TrainingGoal, level: ExperienceLevel) -> SetScheme {
        let sets = if level == ExperienceLevel::Beginner { 3 } else { 4 };
        let (reps, rest) = match goal {
            // Heavier and longer-rested as experience grows
            TrainingGoal::Strength => match level {
                ExperienceLevel::Beginner => (8, 90),
                ExperienceLevel::Intermediate => (6, 120),
                ExperienceLevel::Advanced => (5, 150),
            },
            TrainingGoal::MuscleGain => match level {
                ExperienceLevel::Beginner => (10, 60),
                ExperienceLevel::Intermediate => (9, 60),
                ExperienceLevel::Advanced => (8, 60),
            },
            TrainingGoal::WeightLoss => match level {
                ExperienceLevel::Beginner => (15, 45),
                ExperienceLevel::Intermediate => (14, 45),
                ExperienceLevel::Advanced => (12, 45),
            },
            // Strength-category work under an endurance or flexibility
            // primary goal keeps a moderate general scheme
            TrainingGoal::Endurance | TrainingGoal::Flexibility => match level {
                ExperienceLevel::Beginner => (10, 90),
                ExperienceLevel::Intermediate => (8, 90),
                ExperienceLevel::Advanced => (6, 90),
            },
        };
        SetScheme {
            sets,
            reps,
            rest_seconds: Some(rest),
        }
    }

    /// One continuous effort; reps carries the duration in minutes.
    fn cardio_scheme(level: ExperienceLevel) -> SetScheme {
        let minutes = match level {
            ExperienceLevel::Beginner => 20,
            ExperienceLevel::Intermediate => 30,
            ExperienceLevel::Advanced => 45,
        };
        SetScheme {
            sets: 1,
            reps: minutes,
            rest_seconds: None,
        }
    }

    /// Reps carries the hold duration in seconds.
    fn flexibility_scheme(level: ExperienceLevel) -> SetScheme {
        let (sets, hold_seconds) = match level {
            ExperienceLevel::Beginner => (1, 30),
            ExperienceLevel::Intermediate => (2, 45),
            ExperienceLevel::Advanced => (3, 60),
        };
        SetScheme {
            sets,
            reps: hold_seconds,
            rest_seconds: None,
        }
    }

    /// Final rep ceiling: 10 for compound movements, 20 otherwise. Applied
    /// after all other logic, for every category, without exception.
    fn clamp_reps(mut scheme: SetScheme, exercise: &ExerciseDefinition) -> SetScheme {
        scheme.reps = scheme.reps.min(exercise.rep_cap());
        scheme
    }
}

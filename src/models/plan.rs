use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::exercise::{Difficulty, ExerciseCategory, MovementPattern, MuscleGroup};
use super::training_request::{ExperienceLevel, TrainingGoal};

/// One prescribed exercise within a training day.
///
/// For cardio the reps field carries duration in minutes; for flexibility and
/// balance work it carries hold seconds. The compound/isolation rep ceiling
/// (10/20) applies to the stored value regardless of category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub name: String,
    pub sets: u32, // 1-6
    pub reps: u32, // 1-20; <=10 when compound
    pub weight: f64, // unit-agnostic, 0 when unknown or bodyweight
    pub rest_seconds: Option<u32>,
    pub category: ExerciseCategory,
    pub movement_pattern: MovementPattern,
    pub muscle_groups: Vec<MuscleGroup>, // primary first, then secondaries
    pub equipment: Vec<String>,
    pub difficulty: Difficulty,
}

impl PlannedExercise {
    /// Compound = more than one engaged muscle group.
    pub fn is_compound(&self) -> bool {
        self.muscle_groups.len() > 1
    }

    pub fn rep_cap(&self) -> u32 {
        if self.is_compound() {
            10
        } else {
            20
        }
    }
}

/// A single training day within the weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWorkout {
    pub weekday: u8, // 0 = Monday .. 6 = Sunday
    pub day_name: String,
    pub focus: String, // e.g. "Push", "Full Body"
    pub exercises: Vec<PlannedExercise>, // never empty
    pub target_minutes: u32,
}

/// The assembled weekly program. Owned by the caller once generated; mutated
/// only by the progression pass before persistence or by applying an
/// adaptation afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub id: Uuid,
    pub name: String,
    pub level: ExperienceLevel,
    pub goal: TrainingGoal,
    pub days_per_week: u8,
    pub days: Vec<DayWorkout>,
}

impl WeeklyPlan {
    /// Mutable lookup by exercise id across all days; first match wins.
    pub fn find_exercise_mut(&mut self, exercise_id: &str) -> Option<&mut PlannedExercise> {
        self.days
            .iter_mut()
            .flat_map(|d| d.exercises.iter_mut())
            .find(|e| e.exercise_id == exercise_id)
    }

    pub fn iter_exercises(&self) -> impl Iterator<Item = &PlannedExercise> {
        self.days.iter().flat_map(|d| d.exercises.iter())
    }
}

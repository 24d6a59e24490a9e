use serde::{Deserialize, Serialize};

/// High-level classification of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Balance,
}

/// Fundamental movement pattern the exercise trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    Push,
    Pull,
    Squat,
    Hinge,
    Lunge,
    Carry,
    Rotation,
    Gait, // locomotion: running, rowing, cycling
    Static, // holds and stretches
}

/// Muscle groups used for bucketed day-focus selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    Core,
    FullBody,
}

/// Exercise difficulty; ordered so beginner < intermediate < advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single entry in the exercise catalog. Immutable, loaded once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    pub movement_pattern: MovementPattern,
    pub primary_muscle_group: MuscleGroup,
    pub secondary_muscle_groups: Vec<MuscleGroup>,
    pub muscle_region: String, // sub-area within the primary group, "full" when undifferentiated
    pub difficulty: Difficulty,
    pub equipment: Vec<String>, // tags; empty means bodyweight only
    pub alternatives: Vec<String>, // ids of substitute exercises
}

impl ExerciseDefinition {
    /// Compound = engages at least one secondary muscle group.
    pub fn is_compound(&self) -> bool {
        !self.secondary_muscle_groups.is_empty()
    }

    /// Rep ceiling used by the set-scheme clamp and the progression engine.
    pub fn rep_cap(&self) -> u32 {
        if self.is_compound() {
            10
        } else {
            20
        }
    }

    /// True when the exercise needs no equipment beyond a mat.
    pub fn is_bodyweight(&self) -> bool {
        self.equipment
            .iter()
            .all(|e| matches!(e.as_str(), "bodyweight" | "mat" | "none"))
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broad classification of a program, used to gate adaptation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramCategory {
    Strength,
    Cardio,
    Flexibility,
    Bodyweight,
    Mixed,
}

/// Aggregated history for one exercise over the analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePerformance {
    pub exercise_id: String,
    pub name: String,
    pub average_weight: f64,
    pub average_reps: f64,
    pub average_sets: f64,
    pub total_volume: f64, // sum over sessions of weight x reps x sets
    pub completion_rate: f64, // 0-100
    pub progression: f64, // % weight change, earliest to latest session
    pub times_performed: u32,
}

/// Derived metrics over the recent session window. Recomputed on every
/// analysis call; never persisted as a source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub program_id: Uuid,
    pub category: ProgramCategory,
    pub average_duration: f64, // minutes
    pub completion_rate: f64, // 0-100, averaged over sessions
    pub frequency: f64, // sessions per week
    pub consistency: f64, // 0-100, actual vs expected sessions
    pub total_sessions: u32,
    pub exercises: Vec<ExercisePerformance>,
}

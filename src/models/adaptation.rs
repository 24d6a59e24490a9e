use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of plan adjustment the analyzer can propose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationType {
    ProgressiveOverload,
    VolumeAdjustment,
    ExerciseSubstitution,
    IntensityChange,
    FrequencyChange,
    DurationAdjustment,
    RestAdjustment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatedImpact {
    Positive,
    Neutral,
    Negative,
}

/// One concrete field edit carried by an adaptation. Plan-level edits leave
/// `exercise_id` empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptationChange {
    pub field: String, // "weight" | "sets" | "reps" | "rest_seconds" | "exercise" | "days_per_week" | "duration"
    pub exercise_id: Option<String>,
    pub old_value: serde_json::Value,
    pub new_value: serde_json::Value,
}

/// A single suggested modification to an existing plan. Created by the
/// analyzer, consumed (applied or dismissed) by the caller; not persisted
/// beyond the current analysis cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adaptation {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub adaptation_type: AdaptationType,
    pub priority: AdaptationPriority,
    pub confidence: f64, // 0-100
    pub title: String,
    pub description: String,
    pub reason: String,
    pub changes: Vec<AdaptationChange>,
    pub estimated_impact: EstimatedImpact,
    pub created_at: DateTime<Utc>,
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Primary training goal resolved from the user's profile answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    Strength,
    WeightLoss,
    MuscleGain,
    Endurance,
    Flexibility,
}

/// Self-reported experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Raw free-text onboarding answers, as captured by the profile screens.
/// Parsing is best-effort; unusable fields fall back to safe defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileAnswers {
    pub goal: String,
    pub experience: String,
    pub frequency: String, // e.g. "4 days a week"
    pub equipment: String,
    pub injuries: String,
    pub session_length: String, // e.g. "45 minutes", may be empty
}

/// Structured request driving plan generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub goal: TrainingGoal,
    pub level: ExperienceLevel,
    pub days_per_week: u8, // always within 3..=7
    pub excluded_exercise_names: HashSet<String>,
    pub secondary_goals: Vec<TrainingGoal>,
    pub preferred_session_minutes: Option<u32>,
    pub equipment_available: Vec<String>, // tags; "gym" unlocks everything
}

impl TrainingRequest {
    pub fn new(goal: TrainingGoal, level: ExperienceLevel, days_per_week: u8) -> Self {
        Self {
            goal,
            level,
            days_per_week: days_per_week.clamp(3, 7),
            excluded_exercise_names: HashSet::new(),
            secondary_goals: Vec::new(),
            preferred_session_minutes: None,
            equipment_available: vec!["gym".to_string()],
        }
    }
}

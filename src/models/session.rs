use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one performed set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetResult {
    pub set_number: u32,
    pub reps: u32,
    pub weight: f64,
    pub completed: bool,
}

/// All sets logged for one exercise within a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise_id: String,
    pub name: String,
    pub sets: Vec<SetResult>,
}

/// Historical record of one training session. Append-only; never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: Uuid,
    pub date: NaiveDate,
    pub plan_id: Uuid,
    pub exercises: Vec<ExerciseLog>,
    pub completed: bool,
    pub duration_minutes: u32,
}

impl SessionLog {
    /// Fraction of logged sets marked completed, in [0, 1].
    /// Sessions without sets count as fully completed.
    pub fn set_completion(&self) -> f64 {
        let total: usize = self.exercises.iter().map(|e| e.sets.len()).sum();
        if total == 0 {
            return 1.0;
        }
        let done: usize = self
            .exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.completed)
            .count();
        done as f64 / total as f64
    }
}

use thiserror::Error;
use uuid::Uuid;

/// Engine and storage error taxonomy.
///
/// Most failure modes of the pipeline itself are recovered locally (empty
/// pools fall back to a safe default, malformed request fields are clamped,
/// adaptation conflicts become no-ops), so only genuinely unrecoverable
/// conditions surface here.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("plan not found: {0}")]
    PlanNotFound(Uuid),
    #[error("no active plan for user {0}")]
    NoActivePlan(String),
}

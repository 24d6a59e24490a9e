use std::env;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use wellness_coach::config::AppConfig;
use wellness_coach::models::ProfileAnswers;
use wellness_coach::services::CoachService;
use wellness_coach::storage::MemoryStore;

/// Demo entry point: resolves a profile from environment variables,
/// generates plan variations against an in-memory store, and prints them
/// as JSON.
#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    config.init_tracing();

    let answers = ProfileAnswers {
        goal: env::var("GOAL").unwrap_or_else(|_| "build muscle".to_string()),
        experience: env::var("EXPERIENCE").unwrap_or_else(|_| "beginner".to_string()),
        frequency: env::var("FREQUENCY").unwrap_or_else(|_| "3 days a week".to_string()),
        equipment: env::var("EQUIPMENT").unwrap_or_else(|_| "gym".to_string()),
        injuries: env::var("INJURIES").unwrap_or_default(),
        session_length: env::var("SESSION_LENGTH").unwrap_or_default(),
    };

    let store = Arc::new(MemoryStore::new());
    let coach = CoachService::with_config(store, &config);
    let user = "demo";

    coach.save_profile(user, &answers).await?;
    let plans = coach
        .generate_plan_variations(user, config.default_variation_count)
        .await?;

    info!(variations = plans.len(), "plan generation complete");
    println!("{}", serde_json::to_string_pretty(&plans)?);

    Ok(())
}

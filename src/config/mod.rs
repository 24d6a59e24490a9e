use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub default_session_minutes: u32,
    pub default_variation_count: usize,
    pub recent_window: usize, // sessions considered by the analyzer
}

impl AppConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            default_session_minutes: env::var("DEFAULT_SESSION_MINUTES")
                .unwrap_or_else(|_| "45".to_string())
                .parse()?,
            default_variation_count: env::var("DEFAULT_VARIATION_COUNT")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
            recent_window: env::var("RECENT_WINDOW")
                .unwrap_or_else(|_| "14".to_string())
                .parse()?,
        })
    }

    /// Initialize tracing with the configured log level
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.log_level.clone()))
            .init();
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_session_minutes: 45,
            default_variation_count: 3,
            recent_window: 14,
        }
    }
}

use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_SKILL_ANALYSIS_TIMEOUT_SECS: u64 = 4;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Remote skill-analysis endpoint. When unset, the skills scorer always
    /// uses the local heuristic and the service still starts.
    pub skill_analysis_url: Option<String>,
    /// Bound on the single skill-analysis attempt so a slow remote service
    /// cannot stall the whole report.
    pub skill_analysis_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = match std::env::var("SKILL_ANALYSIS_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("SKILL_ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_SKILL_ANALYSIS_TIMEOUT_SECS,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_analysis_url: std::env::var("SKILL_ANALYSIS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            skill_analysis_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

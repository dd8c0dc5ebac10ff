use std::sync::Arc;

use crate::ats::skill_analysis::SkillAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill analysis seam: the remote adapter in production, a
    /// deterministic mock in tests. Failures never surface to callers.
    pub skill_analyzer: Arc<dyn SkillAnalyzer>,
}

//! Axum route handlers for the ATS scoring API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::ats::compute_ats_report;
use crate::ats::report::{AtsReport, ScoreBand};
use crate::models::resume::{ResumeData, ResumeSnapshot};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub report: AtsReport,
    pub band: ScoreBand,
}

/// POST /api/v1/ats/score
///
/// Scores a full multi-page resume document. Any valid JSON body produces a
/// report; an empty resume yields the onboarding report, never an error.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Json<ScoreResponse> {
    let snapshot = ResumeSnapshot::from_data(&data);
    let report = compute_ats_report(&snapshot, state.skill_analyzer.as_ref()).await;
    let band = report.band();
    Json(ScoreResponse { report, band })
}

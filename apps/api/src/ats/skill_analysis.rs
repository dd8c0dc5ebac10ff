//! Skill analysis adapter — tries a remote, context-aware analysis service
//! and falls back to a deterministic local heuristic on any failure.
//!
//! The fallback is a total function: whatever the remote side does, the
//! Skills scorer always receives a `SkillAnalysis`, never an error.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ats::industry::detect_industry;
use crate::models::resume::ResumeSnapshot;

static VAGUE_SKILL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)basics|beginner|novice|familiar|some|aware").unwrap());

static TECHNICAL_SKILL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)python|java|javascript|react|sql|aws|docker|git|html|css|machine learning|ai")
        .unwrap()
});

static SOFT_SKILL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)communication|leadership|teamwork|problem solving|adaptability|creativity|time management",
    )
    .unwrap()
});

static TOOL_SKILL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)excel|jira|trello|slack|figma|photoshop|salesforce|tableau").unwrap()
});

#[derive(Debug, Error)]
pub enum SkillAnalysisError {
    #[error("no skill analysis endpoint configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("skill analysis service returned status {status}")]
    Api { status: u16 },
}

/// Skill buckets as reported by the analysis (remote or fallback).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
    pub industry: Vec<String>,
}

impl SkillCategories {
    /// Number of non-empty buckets, which drives the balance sub-score.
    pub fn populated_count(&self) -> usize {
        [&self.technical, &self.soft, &self.tools, &self.industry]
            .iter()
            .filter(|bucket| !bucket.is_empty())
            .count()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillAnalysis {
    /// Fraction of skills that are concrete rather than vague, in 0–1.
    pub specificity: f64,
    pub categories: SkillCategories,
    /// How grounded the skills are in the rest of the resume, in 0–1.
    pub relevance: f64,
    pub missing_skills: Vec<String>,
    pub industry: String,
    pub specificity_feedback: Option<String>,
}

/// Experience context sent to the remote service.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceContext {
    pub position: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillAnalysisContext {
    pub experience: Vec<ExperienceContext>,
    pub summary: String,
}

/// Request payload for the remote analysis endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysisRequest {
    pub skills: Vec<String>,
    pub job_title: String,
    pub industry: String,
    pub context: SkillAnalysisContext,
}

impl SkillAnalysisRequest {
    pub fn from_snapshot(skills: &[String], snapshot: &ResumeSnapshot) -> Self {
        let job_title = if snapshot.job_title.trim().is_empty() {
            "Professional".to_string()
        } else {
            snapshot.job_title.clone()
        };

        SkillAnalysisRequest {
            skills: skills.to_vec(),
            job_title,
            industry: detect_industry(&snapshot.experience).to_string(),
            context: SkillAnalysisContext {
                experience: snapshot
                    .experience
                    .iter()
                    .map(|e| ExperienceContext {
                        position: e.position.clone(),
                        company: e.company.clone(),
                        description: e.description.clone(),
                    })
                    .collect(),
                summary: snapshot.summary.clone(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SkillAnalysisEnvelope {
    analysis: SkillAnalysis,
}

/// The skill analysis seam. The production implementation calls the remote
/// service; tests swap in deterministic mocks.
#[async_trait]
pub trait SkillAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        request: &SkillAnalysisRequest,
    ) -> Result<SkillAnalysis, SkillAnalysisError>;
}

/// Remote analyzer backed by the configured HTTP endpoint. A single attempt
/// with a bounded timeout; every failure mode surfaces as an `Err` so the
/// caller can take the local fallback.
pub struct RemoteSkillAnalyzer {
    client: Client,
    endpoint: Option<String>,
}

impl RemoteSkillAnalyzer {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        RemoteSkillAnalyzer {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl SkillAnalyzer for RemoteSkillAnalyzer {
    async fn analyze(
        &self,
        request: &SkillAnalysisRequest,
    ) -> Result<SkillAnalysis, SkillAnalysisError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(SkillAnalysisError::Unconfigured)?;

        let response = self.client.post(endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkillAnalysisError::Api {
                status: status.as_u16(),
            });
        }

        let envelope: SkillAnalysisEnvelope = response.json().await?;
        debug!(
            industry = %envelope.analysis.industry,
            "remote skill analysis succeeded"
        );
        Ok(envelope.analysis)
    }
}

/// Local, network-free approximation of the remote analysis. Deterministic
/// and total: it cannot fail.
pub fn fallback_analysis(skills: &[String], snapshot: &ResumeSnapshot) -> SkillAnalysis {
    if skills.is_empty() {
        return SkillAnalysis {
            industry: detect_industry(&snapshot.experience).to_string(),
            specificity_feedback: Some("Use more specific skill names".to_string()),
            ..Default::default()
        };
    }

    let specific_count = skills
        .iter()
        .filter(|skill| skill.split(' ').count() <= 3 && !VAGUE_SKILL.is_match(skill))
        .count();
    let specificity = specific_count as f64 / skills.len() as f64;

    let bucket = |pattern: &Regex| -> Vec<String> {
        skills
            .iter()
            .filter(|s| pattern.is_match(s))
            .cloned()
            .collect()
    };
    let categories = SkillCategories {
        technical: bucket(&TECHNICAL_SKILL),
        soft: bucket(&SOFT_SKILL),
        tools: bucket(&TOOL_SKILL),
        // Residual bucket: whatever the other three patterns do not claim.
        industry: skills
            .iter()
            .filter(|s| {
                !TECHNICAL_SKILL.is_match(s) && !SOFT_SKILL.is_match(s) && !TOOL_SKILL.is_match(s)
            })
            .cloned()
            .collect(),
    };

    let resume_text = snapshot.searchable_text();
    let skills_in_text = skills
        .iter()
        .filter(|skill| resume_text.contains(&skill.to_lowercase()))
        .count();
    let relevance = (0.5 + (skills_in_text as f64 / skills.len() as f64) * 0.3).min(1.0);

    let specificity_feedback = if specificity > 0.7 {
        "Skills are specific".to_string()
    } else {
        "Use more specific skill names".to_string()
    };

    SkillAnalysis {
        specificity,
        categories,
        relevance,
        missing_skills: Vec::new(),
        industry: detect_industry(&snapshot.experience).to_string(),
        specificity_feedback: Some(specificity_feedback),
    }
}

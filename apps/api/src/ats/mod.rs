//! ATS scoring engine: five independent section scorers fanned out over a
//! resume snapshot, aggregated into a single 0–100 report.
//!
//! The engine is stateless and never errors past this module: empty input
//! and remote-analysis failures both resolve to valid reports.

pub mod education;
pub mod experience;
pub mod handlers;
pub mod industry;
pub mod keywords;
pub mod report;
pub mod skill_analysis;
pub mod skills;
pub mod summary;
pub mod text;

use crate::models::resume::ResumeSnapshot;
use self::report::{AtsReport, ScoreFactor, SectionScore};
use self::skill_analysis::SkillAnalyzer;
use self::text::dedup_capped;

/// Global cap on the recommendation list, separate from per-section caps.
const MAX_RECOMMENDATIONS: usize = 5;

const ONBOARDING_RECOMMENDATION: &str =
    "Start adding content to your resume to generate an ATS score.";

/// Computes the full ATS report for a resume snapshot.
///
/// Section scorers run independently; only the Skills section awaits the
/// skill-analysis adapter, and its failures degrade to the local heuristic.
/// This function never errors.
pub async fn compute_ats_report(
    snapshot: &ResumeSnapshot,
    analyzer: &dyn SkillAnalyzer,
) -> AtsReport {
    let valid_experience: Vec<_> = snapshot
        .experience
        .iter()
        .filter(|e| !e.position.trim().is_empty() || !e.company.trim().is_empty())
        .cloned()
        .collect();
    let valid_education: Vec<_> = snapshot
        .education
        .iter()
        .filter(|e| !e.school.trim().is_empty() || !e.degree.trim().is_empty())
        .cloned()
        .collect();
    let valid_skills: Vec<_> = snapshot
        .skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect();

    let has_content = !snapshot.summary.trim().is_empty()
        || !valid_experience.is_empty()
        || !valid_education.is_empty()
        || !valid_skills.is_empty();

    if !has_content {
        return AtsReport {
            total_score: 0,
            factors: Vec::new(),
            recommendations: vec![ONBOARDING_RECOMMENDATION.to_string()],
        };
    }

    // The synchronous sections complete before the Skills round-trip is
    // awaited, so none of them is ordered behind the network.
    let summary_section = summary::score_summary(&snapshot.summary);
    let experience_section = experience::score_experience(&valid_experience);
    let education_section = education::score_education(&valid_education);
    let keywords_section = keywords::score_keywords(snapshot);
    let skills_section = skills::score_skills(&valid_skills, snapshot, analyzer).await;

    let mut factors = Vec::with_capacity(5);
    let mut recommendations = Vec::new();
    let mut total_score = 0u32;

    let mut add_factor =
        |name: &str, section: SectionScore, max_score: u32, pass_score: u32| {
            let score = section.score.min(max_score);
            total_score += score;
            recommendations.extend(section.recommendations);
            factors.push(ScoreFactor {
                name: name.to_string(),
                score,
                max_score,
                passed: score >= pass_score,
                description: section.description,
            });
        };

    add_factor(
        "Professional Summary",
        summary_section,
        summary::MAX_SCORE,
        summary::PASS_SCORE,
    );
    add_factor(
        "Work Experience",
        experience_section,
        experience::MAX_SCORE,
        experience::PASS_SCORE,
    );
    add_factor(
        "Education",
        education_section,
        education::MAX_SCORE,
        education::PASS_SCORE,
    );
    add_factor(
        "Skills",
        skills_section,
        skills::MAX_SCORE,
        skills::PASS_SCORE,
    );
    add_factor(
        "Keywords & Formatting",
        keywords_section,
        keywords::MAX_SCORE,
        keywords::PASS_SCORE,
    );

    AtsReport {
        total_score: total_score.min(100),
        factors,
        recommendations: dedup_capped(recommendations, MAX_RECOMMENDATIONS),
    }
}

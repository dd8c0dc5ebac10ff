//! Skills scoring: quantity, specificity, category balance, and relevance.
//!
//! The richer analysis comes from the remote skill-analysis service when it
//! is reachable; any failure falls back to the local heuristic so scoring
//! never blocks on the network being healthy.

use tracing::debug;

use crate::ats::report::SectionScore;
use crate::ats::skill_analysis::{
    fallback_analysis, SkillAnalysisRequest, SkillAnalyzer,
};
use crate::ats::text::dedup_capped;
use crate::models::resume::ResumeSnapshot;

pub const MAX_SCORE: u32 = 25;
pub const PASS_SCORE: u32 = 15;

/// Scores the skills section. `skills` is pre-filtered to non-blank entries;
/// duplicates are removed here after trimming.
pub async fn score_skills(
    skills: &[String],
    snapshot: &ResumeSnapshot,
    analyzer: &dyn SkillAnalyzer,
) -> SectionScore {
    if skills.is_empty() {
        return SectionScore {
            score: 0,
            description: "No skills listed".to_string(),
            recommendations: vec!["Add relevant skills to your resume".to_string()],
        };
    }

    let mut unique_skills: Vec<String> = Vec::new();
    for skill in skills {
        let trimmed = skill.trim().to_string();
        if !unique_skills.contains(&trimmed) {
            unique_skills.push(trimmed);
        }
    }
    let skill_count = unique_skills.len();

    let request = SkillAnalysisRequest::from_snapshot(&unique_skills, snapshot);
    let analysis = match analyzer.analyze(&request).await {
        Ok(analysis) => analysis,
        Err(error) => {
            debug!(%error, "remote skill analysis unavailable, using local heuristic");
            fallback_analysis(&unique_skills, snapshot)
        }
    };

    let mut recommendations: Vec<String> = Vec::new();

    let quantity_score = if (10..=15).contains(&skill_count) {
        recommendations.push("Excellent number of skills listed".to_string());
        8
    } else if skill_count > 15 {
        recommendations.push("Consider reducing skills to 10-15 most relevant".to_string());
        6
    } else if skill_count >= 5 {
        recommendations.push("Add more skills (aim for 10-15 total)".to_string());
        4
    } else {
        recommendations.push("Significantly increase number of skills".to_string());
        2
    };

    let specificity_score = ((analysis.specificity * 6.0).round() as i64).clamp(0, 6) as u32;
    if let Some(feedback) = &analysis.specificity_feedback {
        recommendations.push(feedback.clone());
    }

    let category_count = analysis.categories.populated_count();
    let balance_score = if category_count >= 4 {
        recommendations.push("Excellent balance across skill categories".to_string());
        6
    } else if category_count >= 3 {
        recommendations.push("Good category coverage".to_string());
        4
    } else if category_count >= 2 {
        recommendations.push("Add more variety to skill categories".to_string());
        2
    } else {
        recommendations.push("Skills are too narrowly focused".to_string());
        1
    };

    let relevance_score = ((analysis.relevance * 5.0).round() as i64).clamp(0, 5) as u32;
    if !analysis.missing_skills.is_empty() {
        let top: Vec<&str> = analysis
            .missing_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        recommendations.push(format!("Add: {}", top.join(", ")));
    }

    let score =
        (quantity_score + specificity_score + balance_score + relevance_score + 2).min(MAX_SCORE);

    SectionScore {
        score,
        description: format!(
            "{skill_count} skills, {category_count} categories, {}",
            analysis.industry
        ),
        recommendations: dedup_capped(recommendations, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::skill_analysis::{SkillAnalysis, SkillAnalysisError, SkillCategories};
    use async_trait::async_trait;

    /// Deterministic analyzer used instead of the network.
    struct FixedAnalyzer(SkillAnalysis);

    #[async_trait]
    impl SkillAnalyzer for FixedAnalyzer {
        async fn analyze(
            &self,
            _request: &SkillAnalysisRequest,
        ) -> Result<SkillAnalysis, SkillAnalysisError> {
            Ok(self.0.clone())
        }
    }

    /// Analyzer that always fails, forcing the fallback path.
    struct FailingAnalyzer;

    #[async_trait]
    impl SkillAnalyzer for FailingAnalyzer {
        async fn analyze(
            &self,
            _request: &SkillAnalysisRequest,
        ) -> Result<SkillAnalysis, SkillAnalysisError> {
            Err(SkillAnalysisError::Api { status: 503 })
        }
    }

    fn owned(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn rich_analysis() -> SkillAnalysis {
        SkillAnalysis {
            specificity: 1.0,
            categories: SkillCategories {
                technical: vec!["Rust".to_string()],
                soft: vec!["Leadership".to_string()],
                tools: vec!["Jira".to_string()],
                industry: vec!["Fintech".to_string()],
            },
            relevance: 1.0,
            missing_skills: vec![],
            industry: "software".to_string(),
            specificity_feedback: None,
        }
    }

    #[tokio::test]
    async fn test_no_skills_is_terminal() {
        let snapshot = ResumeSnapshot::default();
        let result = score_skills(&[], &snapshot, &FailingAnalyzer).await;
        assert_eq!(result.score, 0);
        assert_eq!(result.description, "No skills listed");
        assert_eq!(
            result.recommendations,
            vec!["Add relevant skills to your resume"]
        );
    }

    #[tokio::test]
    async fn test_ideal_skills_hit_the_cap() {
        let snapshot = ResumeSnapshot::default();
        let skills = owned(&[
            "Rust", "Python", "SQL", "Docker", "Kubernetes", "Terraform", "Leadership",
            "Communication", "Jira", "Figma",
        ]);
        let result = score_skills(&skills, &snapshot, &FixedAnalyzer(rich_analysis())).await;
        // quantity 8 + specificity 6 + balance 6 + relevance 5 + 2 = 27 → 25.
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.description, "10 skills, 4 categories, software");
    }

    #[tokio::test]
    async fn test_skills_deduplicated_after_trim() {
        let snapshot = ResumeSnapshot::default();
        let skills = owned(&["Rust", " Rust ", "SQL"]);
        let result = score_skills(&skills, &snapshot, &FixedAnalyzer(rich_analysis())).await;
        assert!(result.description.starts_with("2 skills"));
    }

    #[tokio::test]
    async fn test_failing_remote_uses_fallback_without_error() {
        let snapshot = ResumeSnapshot::default();
        let skills = owned(&["Python", "Leadership", "Jira", "Excel"]);
        let result = score_skills(&skills, &snapshot, &FailingAnalyzer).await;
        // Fallback analysis still produces a full score; nothing escapes.
        assert!(result.score > 0);
        assert!(result.score <= MAX_SCORE);
        assert!(result.description.ends_with("general"));
    }

    #[tokio::test]
    async fn test_missing_skills_recommendation_lists_top_three() {
        let snapshot = ResumeSnapshot::default();
        let mut analysis = rich_analysis();
        analysis.specificity = 0.0;
        analysis.missing_skills = owned(&["Go", "Kafka", "Redis", "GraphQL"]);
        let skills = owned(&["Rust", "SQL"]);
        let result = score_skills(&skills, &snapshot, &FixedAnalyzer(analysis)).await;
        assert!(result
            .recommendations
            .contains(&"Add: Go, Kafka, Redis".to_string()));
    }

    #[tokio::test]
    async fn test_recommendations_capped_at_three() {
        let snapshot = ResumeSnapshot::default();
        let mut analysis = rich_analysis();
        analysis.specificity_feedback = Some("Use more specific skill names".to_string());
        analysis.missing_skills = owned(&["Go"]);
        let skills = owned(&["Rust", "SQL"]);
        let result = score_skills(&skills, &snapshot, &FixedAnalyzer(analysis)).await;
        assert_eq!(result.recommendations.len(), 3);
    }

    #[tokio::test]
    async fn test_sub_scores_clamped_against_out_of_range_analysis() {
        let snapshot = ResumeSnapshot::default();
        let mut analysis = rich_analysis();
        // A misbehaving remote service could report values outside 0–1.
        analysis.specificity = 3.0;
        analysis.relevance = -1.0;
        let skills = owned(&["Rust", "SQL"]);
        let result = score_skills(&skills, &snapshot, &FixedAnalyzer(analysis)).await;
        assert!(result.score <= MAX_SCORE);
    }
}

//! Work experience scoring: job count, bullet density, and the share of
//! bullets that open with a strong action verb, with per-job feedback.

use crate::ats::report::SectionScore;
use crate::ats::text::{
    contains_digit, dedup_capped, first_word_lower, has_money_evidence, has_percentage_evidence,
    split_bullets, word_count,
};
use crate::models::resume::Experience;

pub const MAX_SCORE: u32 = 30;
pub const PASS_SCORE: u32 = 18;

/// High-impact verbs a bullet should open with.
const STRONG_ACTION_VERBS: [&str; 15] = [
    "managed",
    "led",
    "developed",
    "created",
    "implemented",
    "achieved",
    "increased",
    "reduced",
    "improved",
    "optimized",
    "designed",
    "built",
    "established",
    "executed",
    "delivered",
];

/// Per-job bullet point analysis.
#[derive(Debug, Clone)]
struct JobAnalysis {
    bullet_count: usize,
    strong_bullets: usize,
    numbers_used: usize,
    recommendations: Vec<String>,
}

fn analyze_job_bullets(job: &Experience, job_number: usize) -> JobAnalysis {
    let mut recommendations: Vec<String> = Vec::new();
    let bullets = split_bullets(&job.description);

    let mut strong_bullets = 0;
    let mut numbers_used = 0;

    for (index, bullet) in bullets.iter().enumerate() {
        let starts_with_action_verb = first_word_lower(bullet)
            .map(|first| STRONG_ACTION_VERBS.iter().any(|verb| first.starts_with(verb)))
            .unwrap_or(false);

        if starts_with_action_verb {
            strong_bullets += 1;
        } else if index == 0 {
            recommendations.push(format!(
                "Job {job_number}: Start first bullet with action verb (managed, led, etc.)"
            ));
        }

        let has_evidence = contains_digit(bullet)
            || has_percentage_evidence(bullet)
            || has_money_evidence(bullet);
        if has_evidence {
            numbers_used += 1;
        } else if bullet.len() > 20 {
            recommendations.push(format!(
                "Job {job_number}: Add quantifiable results to bullet points"
            ));
        }

        let words = word_count(bullet);
        if words > 30 {
            recommendations.push(format!(
                "Job {job_number}: Bullet point too long ({words} words), keep under 25"
            ));
        } else if words < 5 {
            recommendations.push(format!(
                "Job {job_number}: Bullet point too short ({words} words), add more detail"
            ));
        }
    }

    if bullets.is_empty() {
        recommendations.push(format!(
            "Job {job_number}: Add bullet points with specific achievements"
        ));
    } else if bullets.len() < 3 {
        recommendations.push(format!(
            "Job {job_number}: Add more bullet points (aim for 3-5)"
        ));
    }

    JobAnalysis {
        bullet_count: bullets.len(),
        strong_bullets,
        numbers_used,
        recommendations: dedup_capped(recommendations, usize::MAX),
    }
}

/// Scores experience entries already filtered to those naming a position or
/// a company.
pub fn score_experience(experience: &[Experience]) -> SectionScore {
    if experience.is_empty() {
        return SectionScore {
            score: 0,
            description: "No experience".to_string(),
            recommendations: vec!["Add work experience entries".to_string()],
        };
    }

    let mut recommendations: Vec<String> = Vec::new();
    let mut push = |rec: &str| recommendations.push(rec.to_string());

    let job_count = experience.len();
    let job_analyses: Vec<JobAnalysis> = experience
        .iter()
        .enumerate()
        .map(|(index, job)| analyze_job_bullets(job, index + 1))
        .collect();

    let total_bullets: usize = job_analyses.iter().map(|j| j.bullet_count).sum();
    let total_strong: usize = job_analyses.iter().map(|j| j.strong_bullets).sum();
    let total_metrics: usize = job_analyses.iter().map(|j| j.numbers_used).sum();

    let base_score = match job_count {
        count if count >= 3 => 12,
        2 => 9,
        _ => 8,
    };

    let avg_bullets_per_job = total_bullets as f64 / job_count as f64;
    let bullet_score = if avg_bullets_per_job >= 4.0 {
        push("Good number of bullet points per job");
        10
    } else if avg_bullets_per_job >= 3.0 {
        push("Consider adding 1-2 more bullet points per job");
        7
    } else if avg_bullets_per_job >= 2.0 {
        push("Aim for 3-5 bullet points per job position");
        5
    } else {
        push("Add more detailed bullet points for each job");
        2
    };

    let strong_percentage = if total_bullets > 0 {
        total_strong as f64 / total_bullets as f64 * 100.0
    } else {
        0.0
    };
    let action_verb_score = if strong_percentage >= 70.0 {
        push("Excellent use of action verbs and impact statements");
        8
    } else if strong_percentage >= 50.0 {
        push("Good start, strengthen more bullet points with action verbs");
        6
    } else if strong_percentage >= 30.0 {
        push("Use more action verbs at start of bullet points");
        4
    } else {
        push("Most bullet points should start with action verbs");
        2
    };

    for job in &job_analyses {
        recommendations.extend(job.recommendations.iter().cloned());
    }

    let score = (base_score + bullet_score + action_verb_score + 2).min(MAX_SCORE);

    SectionScore {
        score,
        description: format!("{job_count} jobs, {total_bullets} bullets, {total_metrics} metrics"),
        recommendations: dedup_capped(recommendations, 4),
    }
}

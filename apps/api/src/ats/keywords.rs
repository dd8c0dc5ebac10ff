//! Keyword & formatting scoring over the whole serialized resume.

use crate::ats::report::SectionScore;
use crate::models::resume::ResumeSnapshot;

pub const MAX_SCORE: u32 = 10;
pub const PASS_SCORE: u32 = 7;

/// Action verbs searched as plain substrings across the full document text.
const ACTION_KEYWORDS: [&str; 9] = [
    "managed",
    "led",
    "developed",
    "implemented",
    "achieved",
    "improved",
    "increased",
    "reduced",
    "optimized",
];

pub fn score_keywords(snapshot: &ResumeSnapshot) -> SectionScore {
    let full_text = snapshot.searchable_text();

    let found = ACTION_KEYWORDS
        .iter()
        .filter(|keyword| full_text.contains(*keyword))
        .count();

    let mut recommendations = Vec::new();
    let score = if found >= 6 {
        10
    } else if found >= 3 {
        9
    } else {
        recommendations.push("Use action verbs (managed, led, developed, etc.)".to_string());
        7
    };

    SectionScore {
        score,
        description: format!("{found}/9 action verbs found"),
        recommendations,
    }
}

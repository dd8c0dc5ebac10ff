//! Professional summary scoring: length band, industry keyword usage, and
//! structural signals, plus a flat base point for having a summary at all.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ats::report::SectionScore;
use crate::ats::text::{contains_digit, dedup_capped, split_sentences, word_count};

pub const MAX_SCORE: u32 = 15;
pub const PASS_SCORE: u32 = 10;

/// Industry/action terms ATS parsers reward in a summary.
const INDUSTRY_KEYWORDS: [&str; 20] = [
    "experienced",
    "skilled",
    "proficient",
    "expert",
    "specialized",
    "qualified",
    "certified",
    "accomplished",
    "proven",
    "results",
    "managed",
    "led",
    "developed",
    "implemented",
    "achieved",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "created",
];

static KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    INDUSTRY_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!(r"(?i)\b{kw}\b")).unwrap())
        .collect()
});

static STRONG_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(Experienced|Results-driven|Skilled|Proficient|Qualified)").unwrap()
});

pub fn score_summary(summary: &str) -> SectionScore {
    let trimmed = summary.trim();
    if trimmed.is_empty() {
        return SectionScore {
            score: 0,
            description: "Missing".to_string(),
            recommendations: vec!["Add a professional summary section".to_string()],
        };
    }

    let mut recommendations: Vec<String> = Vec::new();
    let mut push = |rec: &str| recommendations.push(rec.to_string());

    let words = word_count(trimmed);
    let length_score = if (40..=80).contains(&words) {
        push("Optimal length for ATS");
        5
    } else if (20..40).contains(&words) {
        push("Expand summary to 40-80 words for better ATS parsing");
        3
    } else if (81..=120).contains(&words) {
        4
    } else if words > 120 {
        push("Condense summary to 40-80 words for better ATS results");
        2
    } else {
        push("Expand summary significantly (40-80 words ideal)");
        1
    };

    let found_keywords = KEYWORD_PATTERNS
        .iter()
        .filter(|pattern| pattern.is_match(trimmed))
        .count();
    let keyword_score = if found_keywords >= 5 {
        push("Excellent keyword usage for ATS");
        5
    } else if found_keywords >= 3 {
        push("Add 2-3 more industry keywords");
        3
    } else {
        push("Add more action verbs and quantifiable terms");
        1
    };

    let sentences = split_sentences(trimmed);
    let has_strong_start = STRONG_OPENER.is_match(trimmed);
    let has_numbers = contains_digit(trimmed);

    let structure_score = if has_strong_start && has_numbers && sentences.len() >= 2 {
        push("Perfect ATS-friendly structure");
        5
    } else if has_strong_start && sentences.len() >= 2 {
        if !has_numbers {
            push("Add quantifiable achievements (numbers)");
        }
        3
    } else {
        push("Start with strong action word and add measurable results");
        1
    };

    // The flat base point can push the raw sum to 16; clamp to the section max.
    let score = (length_score + keyword_score + structure_score + 1).min(MAX_SCORE);

    SectionScore {
        score,
        description: format!(
            "{words} words, {found_keywords} keywords, {} sentences",
            sentences.len()
        ),
        recommendations: dedup_capped(recommendations, 3),
    }
}

//! Education scoring. ATS parsers mostly care that the section exists; the
//! near-flat 19/20 step between one and two entries is intentional.

use crate::ats::report::SectionScore;
use crate::models::resume::Education;

pub const MAX_SCORE: u32 = 20;
pub const PASS_SCORE: u32 = 13;

/// Scores education entries already filtered to those naming a school or a
/// degree. An entry with only one of the two counts the same as a fully
/// populated one.
pub fn score_education(education: &[Education]) -> SectionScore {
    let (score, recommendations) = match education.len() {
        0 => (0, vec!["Add at least one education entry".to_string()]),
        1 => (19, Vec::new()),
        _ => (20, Vec::new()),
    };

    SectionScore {
        score,
        description: format!("{} degree(s)", education.len()),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(school: &str, degree: &str) -> Education {
        Education {
            school: school.to_string(),
            degree: degree.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_education_scores_zero_with_recommendation() {
        let result = score_education(&[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.recommendations, vec!["Add at least one education entry"]);
    }

    #[test]
    fn test_one_entry_scores_exactly_nineteen() {
        let result = score_education(&[entry("State University", "BSc")]);
        assert_eq!(result.score, 19);
        assert!(result.score >= PASS_SCORE);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_two_entries_score_exactly_twenty() {
        let result = score_education(&[entry("State University", "BSc"), entry("Tech", "MSc")]);
        assert_eq!(result.score, MAX_SCORE);
    }

    #[test]
    fn test_school_only_entry_counts_fully() {
        // The step function does not reward completeness within an entry.
        let result = score_education(&[entry("State University", "")]);
        assert_eq!(result.score, 19);
    }

    #[test]
    fn test_description_reports_entry_count() {
        let result = score_education(&[entry("A", "B"), entry("C", "D"), entry("E", "F")]);
        assert_eq!(result.description, "3 degree(s)");
        assert_eq!(result.score, MAX_SCORE);
    }
}

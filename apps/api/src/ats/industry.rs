//! Industry detection over experience entries.
//!
//! A declarative `(label, pattern)` table is evaluated per entry in table
//! order. The running maximum only moves on a strictly greater match count,
//! so at equal counts the earlier match keeps the label. `general` is the
//! default when no pattern ever matches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::Experience;

pub const GENERAL_INDUSTRY: &str = "general";

static INDUSTRY_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        (
            "software",
            r"software|developer|engineer|programming|coding|tech|full.?stack|front.?end|back.?end",
        ),
        (
            "data",
            r"data|analyst|analytics|science|machine learning|ai|business intelligence",
        ),
        (
            "marketing",
            r"marketing|digital|seo|social media|brand|advertising|content",
        ),
        (
            "finance",
            r"finance|banking|investment|accounting|financial|wealth|risk",
        ),
        (
            "design",
            r"design|ux|ui|creative|graphic|visual|artist|illustrator",
        ),
        (
            "sales",
            r"sales|business development|account executive|revenue|growth",
        ),
        (
            "product",
            r"product|manager|owner|strategy|roadmap|feature|agile",
        ),
        (
            "healthcare",
            r"healthcare|medical|nursing|clinical|patient|hospital",
        ),
        (
            "education",
            r"education|teacher|professor|instructor|training",
        ),
    ]
    .into_iter()
    .map(|(label, pattern)| (label, Regex::new(pattern).unwrap()))
    .collect()
});

/// Best-guess industry label for a set of experience entries.
pub fn detect_industry(experience: &[Experience]) -> &'static str {
    let mut max_matches = 0;
    let mut detected = GENERAL_INDUSTRY;

    for job in experience {
        let text = format!("{} {} {}", job.position, job.company, job.description).to_lowercase();

        for (label, pattern) in INDUSTRY_PATTERNS.iter() {
            let matches = pattern.find_iter(&text).count();
            if matches > max_matches {
                max_matches = matches;
                detected = label;
            }
        }
    }

    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(position: &str, company: &str, description: &str) -> Experience {
        Experience {
            position: position.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_software_entry_detected() {
        let jobs = vec![job("Software Engineer", "Acme", "Built backend services")];
        assert_eq!(detect_industry(&jobs), "software");
    }

    #[test]
    fn test_empty_experience_defaults_to_general() {
        assert_eq!(detect_industry(&[]), GENERAL_INDUSTRY);
    }

    #[test]
    fn test_unmatched_text_defaults_to_general() {
        let jobs = vec![job("Barista", "Corner Cafe", "Poured espresso")];
        assert_eq!(detect_industry(&jobs), GENERAL_INDUSTRY);
    }

    #[test]
    fn test_strictly_greater_count_overrides_earlier_label() {
        let jobs = vec![
            job("Software Engineer", "Acme", ""),
            job("Data Analyst", "Beta", "analytics and data science pipelines"),
        ];
        // Second entry produces more data-pattern matches than the first
        // entry's software-pattern matches.
        assert_eq!(detect_industry(&jobs), "data");
    }

    #[test]
    fn test_equal_count_keeps_earlier_label() {
        let jobs = vec![
            job("Software Engineer", "Acme", ""),
            job("Data Analyst", "Beta", ""),
        ];
        // Both entries score two matches; the first label to reach the
        // maximum is kept.
        assert_eq!(detect_industry(&jobs), "software");
    }

    #[test]
    fn test_table_order_breaks_ties_within_one_entry() {
        // "content marketing tech" matches software once ("tech") and
        // marketing twice ("marketing", "content") — marketing wins on count.
        let jobs = vec![job("Content Marketing Lead", "", "tech content marketing")];
        assert_eq!(detect_industry(&jobs), "marketing");
    }

    #[test]
    fn test_healthcare_detected() {
        let jobs = vec![job(
            "Registered Nurse",
            "City Hospital",
            "clinical patient care",
        )];
        assert_eq!(detect_industry(&jobs), "healthcare");
    }
}

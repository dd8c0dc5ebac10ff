//! Output data models for the ATS scoring engine.

use serde::{Deserialize, Serialize};

/// One scored section of the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreFactor {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    /// True when the section cleared its pass threshold.
    pub passed: bool,
    pub description: String,
}

/// The full ATS report: composite score in 0–100, per-section factors in
/// fixed order, and a deduplicated, capped recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub total_score: u32,
    pub factors: Vec<ScoreFactor>,
    pub recommendations: Vec<String>,
}

/// Coarse quality band over the composite score, mirroring the thresholds
/// the resume editor uses to color the score widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AtsReport {
    pub fn band(&self) -> ScoreBand {
        match self.total_score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }
}

/// Intermediate result of a single section scorer, before it is wrapped
/// into a `ScoreFactor` by the aggregator.
#[derive(Debug, Clone)]
pub struct SectionScore {
    pub score: u32,
    pub description: String,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(total_score: u32) -> AtsReport {
        AtsReport {
            total_score,
            factors: vec![],
            recommendations: vec![],
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(report(100).band(), ScoreBand::Excellent);
        assert_eq!(report(80).band(), ScoreBand::Excellent);
        assert_eq!(report(79).band(), ScoreBand::Good);
        assert_eq!(report(60).band(), ScoreBand::Good);
        assert_eq!(report(59).band(), ScoreBand::Fair);
        assert_eq!(report(40).band(), ScoreBand::Fair);
        assert_eq!(report(39).band(), ScoreBand::Poor);
        assert_eq!(report(0).band(), ScoreBand::Poor);
    }

    #[test]
    fn test_report_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(report(42)).unwrap();
        assert_eq!(json["totalScore"], 42);
        assert!(json["factors"].as_array().unwrap().is_empty());
    }
}

//! Resume document model — the editor's multi-page document shape, plus the
//! flattened snapshot the scoring engine consumes.
//!
//! Every field is `#[serde(default)]`: the editor saves partially populated
//! documents constantly, and a missing array or string must deserialize to
//! its empty value rather than fail the request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomSectionType {
    #[default]
    List,
    Paragraph,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSectionItem {
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub section_type: CustomSectionType,
    pub items: Vec<CustomSectionItem>,
}

/// One page of the resume editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumePage {
    pub id: String,
    pub page_number: u32,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub custom_sections: Vec<CustomSection>,
}

/// The full document as posted by the editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub pages: Vec<ResumePage>,
}

/// Read-only, page-flattened view of a resume. This is what the scoring
/// engine consumes; it never mutates the underlying document.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSnapshot {
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub custom_sections: Vec<CustomSection>,
    /// The candidate's headline title, used by the skill-analysis adapter.
    pub job_title: String,
}

impl ResumeSnapshot {
    /// Flattens a multi-page document: summaries join with a single space,
    /// entry lists concatenate in page order.
    pub fn from_data(data: &ResumeData) -> Self {
        let summary = data
            .pages
            .iter()
            .map(|p| p.summary.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        ResumeSnapshot {
            summary,
            experience: data
                .pages
                .iter()
                .flat_map(|p| p.experience.iter().cloned())
                .collect(),
            education: data
                .pages
                .iter()
                .flat_map(|p| p.education.iter().cloned())
                .collect(),
            skills: data
                .pages
                .iter()
                .flat_map(|p| p.skills.iter().cloned())
                .collect(),
            custom_sections: data
                .pages
                .iter()
                .flat_map(|p| p.custom_sections.iter().cloned())
                .collect(),
            job_title: data.personal_info.title.clone(),
        }
    }

    /// The whole snapshot serialized to lowercased JSON, for substring
    /// searches (keyword scoring, fallback skill relevance).
    pub fn searchable_text(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_default()
            .to_lowercase()
    }
}

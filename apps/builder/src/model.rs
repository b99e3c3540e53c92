//! Resume document model.
//!
//! Field names serialize in camelCase so snapshots and pushed documents keep
//! the same shape the web form produced (`fieldOfStudy`, `startDate`, ...).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a fresh entry identifier.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Entries addressable by identifier within a list section.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
}

/// Partial About update. `None` fields leave the current value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AboutPatch {
    pub fn is_empty(&self) -> bool {
        self == &AboutPatch::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    /// One element per line of the submitted description.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Empty when the project has no public link.
    pub link: String,
}

impl Identified for EducationEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ExperienceEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ProjectEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Splits a multi-line description into the stored line sequence.
/// Lines are kept verbatim, blank ones included.
pub fn split_description(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Splits a comma-separated technology list, trimming each item.
pub fn split_technologies(text: &str) -> Vec<String> {
    text.split(',').map(|t| t.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_description_keeps_lines_in_order() {
        assert_eq!(
            split_description("Led team\nShipped v2\n\nOn-call"),
            vec!["Led team", "Shipped v2", "", "On-call"]
        );
    }

    #[test]
    fn test_split_technologies_trims() {
        assert_eq!(
            split_technologies("Rust,  Axum , PostgreSQL"),
            vec!["Rust", "Axum", "PostgreSQL"]
        );
    }

    #[test]
    fn test_education_serializes_camel_case() {
        let entry = EducationEntry {
            id: "1".into(),
            institution: "MIT".into(),
            degree: "BSc".into(),
            field_of_study: "CS".into(),
            start_date: "09/2018".into(),
            end_date: "06/2022".into(),
            location: "Cambridge".into(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "id": "1",
                "institution": "MIT",
                "degree": "BSc",
                "fieldOfStudy": "CS",
                "startDate": "09/2018",
                "endDate": "06/2022",
                "location": "Cambridge"
            })
        );
    }

    #[test]
    fn test_entry_ids_are_unique() {
        assert_ne!(new_entry_id(), new_entry_id());
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = AboutPatch {
            email: Some("ada@example.com".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"email": "ada@example.com"})
        );
        assert!(!patch.is_empty());
        assert!(AboutPatch::default().is_empty());
    }
}

//! The resume document model.
//!
//! This is the wire format the editor front-end sends: camelCase keys,
//! every field optional. Deserialization must never reject a document for
//! missing fields — the renderer is total over whatever arrives, so every
//! field defaults and unknown top-level keys are kept in `extra` for the
//! generic-dump fallback.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The complete structured resume: personal info, sections, and the
/// section configuration controlling order/visibility/titles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal: Personal,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    pub awards: Vec<Award>,
    pub publications: Vec<Publication>,
    pub languages: Vec<LanguageSkill>,
    pub custom_sections: Vec<CustomSection>,
    pub section_config: Option<SectionConfig>,
    /// Sections this model does not know about. The renderer dumps them as
    /// escaped text under a generic heading instead of dropping them.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

impl Personal {
    /// True if any field carries non-blank text.
    pub fn has_content(&self) -> bool {
        [
            &self.name,
            &self.title,
            &self.email,
            &self.phone,
            &self.location,
            &self.website,
            &self.linkedin,
            &self.github,
        ]
        .iter()
        .any(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub link: String,
    pub description: String,
    pub tech: Vec<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub year: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub title: String,
    pub items: Vec<CustomItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    pub heading: String,
    pub subheading: String,
    pub bullets: Vec<String>,
}

/// Metadata controlling section render order, visibility, and display titles.
/// The editor owns this; the renderer only reads it and tolerates its absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub order: Vec<String>,
    pub visibility: HashMap<String, bool>,
    pub titles: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resume_deserializes_from_empty_object() {
        let resume: Resume = serde_json::from_str("{}").unwrap();
        assert!(resume.personal.name.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.section_config.is_none());
        assert!(resume.extra.is_empty());
    }

    #[test]
    fn test_resume_accepts_camel_case_wire_names() {
        let resume: Resume = serde_json::from_value(json!({
            "customSections": [{"title": "Volunteering", "items": []}],
            "experience": [{"startDate": "2020", "endDate": "2021"}],
            "sectionConfig": {
                "order": ["personal", "experience"],
                "visibility": {"experience": true},
                "titles": {"experience": "Work"}
            }
        }))
        .unwrap();

        assert_eq!(resume.custom_sections[0].title, "Volunteering");
        assert_eq!(resume.experience[0].start_date, "2020");
        let config = resume.section_config.unwrap();
        assert_eq!(config.order, vec!["personal", "experience"]);
        assert_eq!(config.titles["experience"], "Work");
    }

    #[test]
    fn test_unknown_sections_land_in_extra() {
        let resume: Resume = serde_json::from_value(json!({
            "summary": "hi",
            "hobbies": ["chess", "running"]
        }))
        .unwrap();

        assert_eq!(resume.summary, "hi");
        assert_eq!(resume.extra["hobbies"], json!(["chess", "running"]));
    }

    #[test]
    fn test_personal_has_content() {
        assert!(!Personal::default().has_content());
        let blank = Personal {
            phone: "  ".to_string(),
            ..Default::default()
        };
        assert!(!blank.has_content());
        let with_github = Personal {
            github: "https://github.com/x".to_string(),
            ..Default::default()
        };
        assert!(with_github.has_content());
    }
}

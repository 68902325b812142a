//! Résumé data model. Wire names are camelCase to match the client schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Caller-supplied identifier, unique within the list.
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Free-text date strings; never parsed as calendar dates.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    /// Only the leading `-`-delimited year token is ever inspected, for the
    /// education recency bonus.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// A complete résumé as submitted by the client. The engine treats every
/// absent optional field as empty; it never mutates or persists this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub personal: Option<Personal>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub extras: Extras,
}

/// Persisted résumé row. The document itself is stored as JSONB; the engine
/// never reads rows, only `Resume` values.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_deserializes_camel_case() {
        let json = r#"{
            "personal": {
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane.doe@gmail.com",
                "linkedin": "https://linkedin.com/in/janedoe"
            },
            "experience": [{
                "id": "exp-1",
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2022-01",
                "current": true
            }]
        }"#;

        let resume: Resume = serde_json::from_str(json).unwrap();
        let personal = resume.personal.unwrap();
        assert_eq!(personal.first_name, "Jane");
        assert_eq!(
            personal.linkedin.as_deref(),
            Some("https://linkedin.com/in/janedoe")
        );
        assert_eq!(resume.experience[0].start_date.as_deref(), Some("2022-01"));
        assert!(resume.experience[0].current);
        assert!(resume.education.is_empty());
    }

    #[test]
    fn test_minimal_resume_deserializes() {
        let resume: Resume = serde_json::from_str("{}").unwrap();
        assert!(resume.personal.is_none());
        assert!(resume.summary.is_none());
        assert!(resume.extras.languages.is_empty());
    }

    #[test]
    fn test_resume_serializes_camel_case() {
        let resume: Resume = serde_json::from_str("{}").unwrap();
        let value = serde_json::to_value(&resume).unwrap();
        assert!(value.get("experience").is_some());
        assert!(value.get("extras").is_some());
    }
}

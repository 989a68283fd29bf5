//! Resume artifacts — the structured record extracted from free text, and
//! the AI-rewritten variant produced by the suggested-resume generator.
//!
//! Wire names are camelCase to match the response schemas. Fields the model
//! may legitimately leave out come back as their empty default rather than
//! being absent: `name` and `email` are the only schema-required values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub dates: String,
    /// Newline-delimited bullet lines, each conceptually prefixed `- `.
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub dates: String,
}

/// The structured resume record. Created by `generators::parse_resume`;
/// replaced wholesale by the rewrite flow, never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
}

/// A fully rewritten resume plus the explanation of what changed.
/// Produced atomically; never merged with the original ResumeData.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedResume {
    pub content: ResumeData,
    pub improvements: Vec<String>,
}

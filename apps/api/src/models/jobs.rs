//! Job-search artifacts — model-generated posting approximations and the
//! user-controlled search filters. Postings are replaced wholesale on every
//! search; they are explicitly not a live job-board feed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
    Hybrid,
    Temporary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    /// 2-3 sentences ending with a "(Source: X)" marker.
    pub description: String,
    pub url: String,
    pub job_type: JobType,
    pub date_posted: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePosted {
    Any,
    Day,
    Week,
    Month,
}

impl DatePosted {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePosted::Any => "any",
            DatePosted::Day => "day",
            DatePosted::Week => "week",
            DatePosted::Month => "month",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Any,
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Any => "any",
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

/// User-controlled search input. Seeded from the parsed resume's location on
/// the first pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchFilters {
    pub location: String,
    /// Non-exclusive multi-select of job type labels.
    pub job_types: Vec<String>,
    pub date_posted: DatePosted,
    pub experience_level: ExperienceLevel,
}

impl JobSearchFilters {
    /// Default filters for the first search after parsing: the candidate's
    /// own location, full-time/remote roles, no date or level restriction.
    pub fn seeded_from_location(location: &str) -> Self {
        Self {
            location: location.to_string(),
            job_types: vec!["Full-time".to_string(), "Remote".to_string()],
            date_posted: DatePosted::Any,
            experience_level: ExperienceLevel::Any,
        }
    }
}

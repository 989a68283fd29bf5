//! Analysis artifacts — job-match scoring, improvement suggestions, and the
//! cover letter. All immutable snapshots except the cover letter, which is
//! replaced wholesale by the tone-change refinement.

use serde::{Deserialize, Serialize};

/// How well the resume matches the target job. Regenerated only by a full
/// pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    /// 0–100. The schema description steers the model into range; the value
    /// is trusted beyond syntactic parse success.
    pub match_percentage: f64,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Three independent suggestion lists, each possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub keyword_suggestions: Vec<String>,
    pub skill_gap_analysis: Vec<String>,
    pub certification_suggestions: Vec<String>,
}

/// Requested voice of the cover letter. Serialized with the display name the
/// prompt embeds verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Enthusiastic,
    Conservative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Conservative => "Conservative",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetter {
    pub content: String,
    pub tone: Tone,
}

//! Session state — the single in-memory store every artifact lives in.
//!
//! All artifacts are owned by the run that produced them; there is no
//! cross-restart persistence. Held in `AppState` as `Arc<RwLock<Session>>`,
//! mutated only by the orchestrator and the two refinement flows.

use serde::Serialize;

use crate::models::analysis::{CoverLetter, JobMatch, ResumeAnalysis};
use crate::models::jobs::{JobPosting, JobSearchFilters};
use crate::models::resume::{ResumeData, SuggestedResume};

/// Shown as the cover letter content while a tone change is in flight.
pub const COVER_LETTER_REGENERATING: &str = "Generating new cover letter...";
/// Shown when a tone change fails. The prior content is not restored.
pub const COVER_LETTER_REGEN_FAILED: &str = "Error generating. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub status: RunStatus,
    /// Inputs of the latest run, kept so refinement flows can re-invoke
    /// generators against the same context. Not part of the snapshot body.
    // resume_text is stored for a future partial-retry path that skips re-parsing
    #[allow(dead_code)]
    #[serde(skip)]
    pub resume_text: String,
    #[serde(skip)]
    pub job_description: String,

    pub resume_data: Option<ResumeData>,
    pub job_match: Option<JobMatch>,
    pub cover_letter: Option<CoverLetter>,
    pub resume_analysis: Option<ResumeAnalysis>,
    pub suggested_resume: Option<SuggestedResume>,
    pub job_postings: Vec<JobPosting>,
    /// Last filters used for a search; seeded from the parsed resume's
    /// location on the first pipeline run.
    pub filters: Option<JobSearchFilters>,
    pub last_error: Option<String>,
}

impl Session {
    /// Drops every displayed artifact so stale results are never shown
    /// alongside a new run's progress.
    pub fn clear_artifacts(&mut self) {
        self.resume_data = None;
        self.job_match = None;
        self.cover_letter = None;
        self.resume_analysis = None;
        self.suggested_resume = None;
        self.job_postings.clear();
        self.filters = None;
    }
}

//! Refinement Flows — narrow re-invocations of a single generator against
//! already-established context. Neither flow is gated behind the pipeline
//! state machine, and each touches only its own artifact.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::generators::{generate_cover_letter, search_jobs};
use crate::llm_client::GenerationBackend;
use crate::models::analysis::{CoverLetter, Tone};
use crate::models::jobs::{JobPosting, JobSearchFilters};

use super::session::{Session, COVER_LETTER_REGENERATING, COVER_LETTER_REGEN_FAILED};

/// Regenerates the cover letter with a new tone.
///
/// While in flight the displayed letter keeps its old tone but shows a
/// transient placeholder as content. On failure the placeholder is replaced
/// with an error placeholder rather than restoring the prior content — the
/// old prose is lost by design.
pub async fn change_tone(
    backend: &dyn GenerationBackend,
    session: &Arc<RwLock<Session>>,
    tone: Tone,
) -> Result<CoverLetter, AppError> {
    let (resume, job_description) = {
        let mut s = session.write().await;
        let resume = s.resume_data.clone().ok_or_else(|| {
            AppError::Validation(
                "Run the analysis before changing the cover letter tone.".to_string(),
            )
        })?;
        if let Some(letter) = s.cover_letter.as_mut() {
            letter.content = COVER_LETTER_REGENERATING.to_string();
        }
        (resume, s.job_description.clone())
    };

    info!("Regenerating cover letter with tone {}", tone.as_str());

    match generate_cover_letter(backend, &resume, &job_description, tone).await {
        Ok(letter) => {
            session.write().await.cover_letter = Some(letter.clone());
            Ok(letter)
        }
        Err(e) => {
            let mut s = session.write().await;
            if let Some(letter) = s.cover_letter.as_mut() {
                letter.content = COVER_LETTER_REGEN_FAILED.to_string();
            }
            Err(AppError::Refinement(format!(
                "Cover letter regeneration failed: {e}"
            )))
        }
    }
}

/// Re-runs the job search with new filters.
///
/// On success the postings sequence is replaced wholesale and the filters
/// are stored. On failure the previous postings remain displayed, unlike the
/// tone change.
pub async fn refine_job_search(
    backend: &dyn GenerationBackend,
    session: &Arc<RwLock<Session>>,
    filters: JobSearchFilters,
) -> Result<Vec<JobPosting>, AppError> {
    let resume = session.read().await.resume_data.clone().ok_or_else(|| {
        AppError::Validation("Run the analysis before searching for jobs.".to_string())
    })?;

    info!(
        "Refined job search: location='{}', {} job types",
        filters.location,
        filters.job_types.len()
    );

    match search_jobs(backend, &resume, &filters).await {
        Ok(postings) => {
            let mut s = session.write().await;
            s.job_postings = postings.clone();
            s.filters = Some(filters);
            Ok(postings)
        }
        Err(e) => Err(AppError::Refinement(format!("Job search failed: {e}"))),
    }
}

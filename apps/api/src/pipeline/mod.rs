//! Pipeline Orchestrator — the full analysis workflow.
//!
//! Flow: validate inputs → clear artifacts → parse resume (sequential) →
//!       fan out the five remaining generators → all-or-nothing join →
//!       publish every artifact atomically.
//!
//! The resume parse cannot join the fan-out: its output is required context
//! for every other generator and seeds the initial job-search location.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::generators::{
    analyze_job_match, generate_cover_letter, generate_suggested_resume, get_resume_suggestions,
    parse_resume, search_jobs,
};
use crate::llm_client::{GenerationBackend, LlmError};
use crate::models::analysis::{CoverLetter, JobMatch, ResumeAnalysis, Tone};
use crate::models::jobs::{JobPosting, JobSearchFilters};
use crate::models::resume::SuggestedResume;

pub mod handlers;
pub mod refine;
pub mod session;

use session::{RunStatus, Session};

/// User-facing message for any pipeline-level generation failure. The
/// underlying causes are logged, not shown.
const ANALYSIS_FAILED: &str =
    "An error occurred during AI analysis. Please check your API key or network and try again.";

/// The five artifacts produced by the concurrent step.
struct StepTwoArtifacts {
    job_match: JobMatch,
    resume_analysis: ResumeAnalysis,
    cover_letter: CoverLetter,
    suggested_resume: SuggestedResume,
    job_postings: Vec<JobPosting>,
}

/// All-or-nothing aggregation policy: the first failure discards the whole
/// result set, including calls that completed successfully. Swap this
/// function to surface partial results instead.
fn join_all_or_nothing(
    job_match: Result<JobMatch, LlmError>,
    resume_analysis: Result<ResumeAnalysis, LlmError>,
    cover_letter: Result<CoverLetter, LlmError>,
    suggested_resume: Result<SuggestedResume, LlmError>,
    job_postings: Result<Vec<JobPosting>, LlmError>,
) -> Result<StepTwoArtifacts, LlmError> {
    Ok(StepTwoArtifacts {
        job_match: job_match?,
        resume_analysis: resume_analysis?,
        cover_letter: cover_letter?,
        suggested_resume: suggested_resume?,
        job_postings: job_postings?,
    })
}

/// Runs the full analysis pipeline against the session store.
///
/// On success all five step-two artifacts become visible simultaneously.
/// On failure nothing beyond the step-one resume parse is published; the
/// parse output intentionally stays set so a later partial retry could skip
/// re-parsing.
pub async fn run_analysis(
    backend: &dyn GenerationBackend,
    session: &Arc<RwLock<Session>>,
    resume_text: String,
    job_description: String,
) -> Result<(), AppError> {
    // Entry guard: no network calls unless both inputs are present.
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        let message = "Please provide both a resume and a job description.";
        let mut s = session.write().await;
        s.status = RunStatus::Failed;
        s.last_error = Some(message.to_string());
        return Err(AppError::Validation(message.to_string()));
    }

    {
        let mut s = session.write().await;
        s.status = RunStatus::Running;
        s.last_error = None;
        s.clear_artifacts();
        s.resume_text = resume_text.clone();
        s.job_description = job_description.clone();
    }

    info!("Analysis run started");

    // Step 1: parse the resume. Required context for everything downstream.
    let resume = match parse_resume(backend, &resume_text).await {
        Ok(resume) => resume,
        Err(e) => {
            let mut s = session.write().await;
            s.status = RunStatus::Failed;
            s.last_error = Some(ANALYSIS_FAILED.to_string());
            return Err(AppError::Generation(format!("Resume parsing failed: {e}")));
        }
    };

    session.write().await.resume_data = Some(resume.clone());

    let filters = JobSearchFilters::seeded_from_location(&resume.contact_info.location);

    info!(
        "Resume parsed for '{}'; fanning out 5 generators",
        resume.contact_info.name
    );

    // Step 2: fan out. All five requests are issued before any is awaited.
    let (job_match, resume_analysis, cover_letter, suggested_resume, job_postings) = tokio::join!(
        analyze_job_match(backend, &resume, &job_description),
        get_resume_suggestions(backend, &resume, &job_description),
        generate_cover_letter(backend, &resume, &job_description, Tone::Professional),
        generate_suggested_resume(backend, &resume, &job_description),
        search_jobs(backend, &resume, &filters),
    );

    match join_all_or_nothing(
        job_match,
        resume_analysis,
        cover_letter,
        suggested_resume,
        job_postings,
    ) {
        Ok(artifacts) => {
            let mut s = session.write().await;
            s.job_match = Some(artifacts.job_match);
            s.resume_analysis = Some(artifacts.resume_analysis);
            s.cover_letter = Some(artifacts.cover_letter);
            s.suggested_resume = Some(artifacts.suggested_resume);
            s.job_postings = artifacts.job_postings;
            s.filters = Some(filters);
            s.status = RunStatus::Succeeded;
            info!("Analysis run succeeded: {} postings", s.job_postings.len());
            Ok(())
        }
        Err(e) => {
            let mut s = session.write().await;
            s.status = RunStatus::Failed;
            s.last_error = Some(ANALYSIS_FAILED.to_string());
            Err(AppError::Generation(format!(
                "Analysis fan-out failed: {e}"
            )))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    fn new_session() -> Arc<RwLock<Session>> {
        Arc::new(RwLock::new(Session::default()))
    }

    #[tokio::test]
    async fn test_empty_resume_fails_validation_with_zero_calls() {
        let backend = happy_backend();
        let session = new_session();
        let result = run_analysis(&backend, &session, "".to_string(), "a jd".to_string()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(backend.call_count(), 0);
        assert_eq!(session.read().await.status, RunStatus::Failed);
    }

    #[tokio::test]
    async fn test_empty_job_description_fails_validation_with_zero_calls() {
        let backend = happy_backend();
        let session = new_session();
        let result = run_analysis(&backend, &session, "a resume".to_string(), "  ".to_string()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_run_publishes_every_artifact() {
        let backend = happy_backend();
        let session = new_session();
        run_analysis(
            &backend,
            &session,
            "resume text".to_string(),
            "jd text".to_string(),
        )
        .await
        .unwrap();

        let s = session.read().await;
        assert_eq!(s.status, RunStatus::Succeeded);
        assert!(s.resume_data.is_some());
        let job_match = s.job_match.as_ref().unwrap();
        assert!((0.0..=100.0).contains(&job_match.match_percentage));
        let letter = s.cover_letter.as_ref().unwrap();
        assert_eq!(letter.tone, Tone::Professional);
        assert!(s.resume_analysis.is_some());
        assert!(s.suggested_resume.is_some());
        assert_eq!(s.job_postings.len(), 5);
        // Filters are seeded from the parsed resume's location
        assert_eq!(s.filters.as_ref().unwrap().location, "Berlin");
        assert!(s.last_error.is_none());
        // 1 parse + 5 fan-out
        assert_eq!(backend.call_count(), 6);
    }

    #[tokio::test]
    async fn test_single_fanout_failure_discards_all_five_artifacts() {
        let backend = ScriptedBackend::new(vec![
            (PARSE_MARKER, Script::Reply(RESUME_REPLY)),
            (MATCH_MARKER, Script::Reply(MATCH_REPLY)),
            (SUGGESTIONS_MARKER, Script::Reply(SUGGESTIONS_REPLY)),
            (REWRITE_MARKER, Script::Reply(REWRITE_REPLY)),
            (JOBS_MARKER, Script::Fail),
            (LETTER_MARKER, Script::Reply(LETTER_REPLY)),
        ]);
        let session = new_session();
        let result = run_analysis(
            &backend,
            &session,
            "resume text".to_string(),
            "jd text".to_string(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Generation(_))));

        let s = session.read().await;
        assert_eq!(s.status, RunStatus::Failed);
        // All-or-nothing: completed successes are discarded too
        assert!(s.job_match.is_none());
        assert!(s.resume_analysis.is_none());
        assert!(s.cover_letter.is_none());
        assert!(s.suggested_resume.is_none());
        assert!(s.job_postings.is_empty());
        // Step 1's output intentionally stays set
        assert!(s.resume_data.is_some());
        assert!(s.last_error.is_some());
        // All five outstanding requests still completed
        assert_eq!(backend.call_count(), 6);
    }

    #[tokio::test]
    async fn test_parse_failure_fails_run_before_fanout() {
        let backend = ScriptedBackend::new(vec![(PARSE_MARKER, Script::Fail)]);
        let session = new_session();
        let result = run_analysis(
            &backend,
            &session,
            "resume text".to_string(),
            "jd text".to_string(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Generation(_))));
        let s = session.read().await;
        assert_eq!(s.status, RunStatus::Failed);
        assert!(s.resume_data.is_none());
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_new_run_clears_previously_displayed_artifacts() {
        let backend = happy_backend();
        let session = new_session();
        run_analysis(&backend, &session, "r".to_string(), "j".to_string())
            .await
            .unwrap();
        assert_eq!(session.read().await.job_postings.len(), 5);

        // Second run where the fan-out fails: old artifacts must not survive
        let failing = ScriptedBackend::new(vec![
            (PARSE_MARKER, Script::Reply(RESUME_REPLY)),
            (MATCH_MARKER, Script::Fail),
            (SUGGESTIONS_MARKER, Script::Reply(SUGGESTIONS_REPLY)),
            (REWRITE_MARKER, Script::Reply(REWRITE_REPLY)),
            (JOBS_MARKER, Script::Reply(JOBS_REPLY)),
            (LETTER_MARKER, Script::Reply(LETTER_REPLY)),
        ]);
        let result = run_analysis(&failing, &session, "r".to_string(), "j".to_string()).await;
        assert!(result.is_err());

        let s = session.read().await;
        assert!(s.job_postings.is_empty());
        assert!(s.job_match.is_none());
        assert!(s.cover_letter.is_none());
    }
}

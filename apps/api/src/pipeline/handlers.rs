//! Axum route handlers for the analysis pipeline and refinement flows.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::render_resume_txt;
use crate::models::analysis::{CoverLetter, Tone};
use crate::models::jobs::{JobPosting, JobSearchFilters};
use crate::pipeline::{refine, run_analysis, session::Session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ToneChangeRequest {
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Runs the full pipeline and returns the resulting session snapshot with
/// every artifact populated. All-or-nothing: a single generator failure
/// fails the whole run.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Session>, AppError> {
    run_analysis(
        state.backend.as_ref(),
        &state.session,
        request.resume_text,
        request.job_description,
    )
    .await?;

    let snapshot = state.session.read().await.clone();
    Ok(Json(snapshot))
}

/// GET /api/v1/session
///
/// Returns the current session snapshot: run status, artifacts, last error.
pub async fn handle_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.session.read().await.clone())
}

/// POST /api/v1/cover-letter/tone
///
/// Regenerates the cover letter with a new tone against the stored context.
pub async fn handle_tone_change(
    State(state): State<AppState>,
    Json(request): Json<ToneChangeRequest>,
) -> Result<Json<CoverLetter>, AppError> {
    let letter = refine::change_tone(state.backend.as_ref(), &state.session, request.tone).await?;
    Ok(Json(letter))
}

/// POST /api/v1/jobs/search
///
/// Re-runs the job search with new filters. Prior postings survive a failure.
pub async fn handle_job_search(
    State(state): State<AppState>,
    Json(filters): Json<JobSearchFilters>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let jobs = refine::refine_job_search(state.backend.as_ref(), &state.session, filters).await?;
    Ok(Json(JobSearchResponse { jobs }))
}

/// GET /api/v1/resume/export
///
/// Plain-text download of the AI-rewritten resume.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let suggested = state
        .session
        .read()
        .await
        .suggested_resume
        .clone()
        .ok_or_else(|| AppError::NotFound("No suggested resume to export".to_string()))?;

    let txt = render_resume_txt(&suggested.content);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"new-resume.txt\"",
            ),
        ],
        txt,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_request_deserializes_camel_case() {
        let json = r#"{"resumeText": "my resume", "jobDescription": "the jd"}"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.resume_text, "my resume");
        assert_eq!(request.job_description, "the jd");
    }

    #[test]
    fn test_tone_change_request_accepts_enum_names() {
        let request: ToneChangeRequest =
            serde_json::from_str(r#"{"tone": "Conservative"}"#).unwrap();
        assert_eq!(request.tone, Tone::Conservative);

        let bad: Result<ToneChangeRequest, _> = serde_json::from_str(r#"{"tone": "Casual"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_job_search_filters_deserialize_from_request_body() {
        let json = r#"{
            "location": "Remote",
            "jobTypes": ["Remote"],
            "datePosted": "week",
            "experienceLevel": "senior"
        }"#;
        let filters: JobSearchFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters.location, "Remote");
        assert_eq!(filters.job_types, vec!["Remote"]);
    }
}

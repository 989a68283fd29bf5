//! Artifact Generators — one function per derived artifact.
//!
//! Each generator builds its instruction text from typed inputs (embedding
//! prior artifacts as JSON context), delegates to the backend with the
//! matching registry schema, and returns the parsed artifact. Generators are
//! pure functions of their inputs plus the backend: they never read or write
//! orchestrator state.
//!
//! Five of the six calls are schema-constrained. The cover letter is NOT:
//! prose comes back as free text and is wrapped with the requested tone —
//! forcing a JSON envelope around a letter body risks truncation artifacts.

use serde::Deserialize;
use tracing::debug;

use crate::llm_client::{call_json, GenerationBackend, LlmError};
use crate::models::analysis::{CoverLetter, JobMatch, ResumeAnalysis, Tone};
use crate::models::jobs::{JobPosting, JobSearchFilters};
use crate::models::resume::{ResumeData, SuggestedResume};
use crate::schemas;

pub mod prompts;

/// Extracts a structured resume record from free resume text.
pub async fn parse_resume(
    backend: &dyn GenerationBackend,
    resume_text: &str,
) -> Result<ResumeData, LlmError> {
    let prompt = prompts::PARSE_RESUME_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    call_json(backend, &prompt, &schemas::resume_schema()).await
}

/// Scores the resume against the job description.
pub async fn analyze_job_match(
    backend: &dyn GenerationBackend,
    resume: &ResumeData,
    job_description: &str,
) -> Result<JobMatch, LlmError> {
    let prompt = build_context_prompt(
        prompts::JOB_MATCH_PROMPT_TEMPLATE,
        resume,
        job_description,
    )?;
    call_json(backend, &prompt, &schemas::job_match_schema()).await
}

/// Produces keyword, skill-gap, and certification suggestions.
pub async fn get_resume_suggestions(
    backend: &dyn GenerationBackend,
    resume: &ResumeData,
    job_description: &str,
) -> Result<ResumeAnalysis, LlmError> {
    let prompt = build_context_prompt(
        prompts::RESUME_SUGGESTIONS_PROMPT_TEMPLATE,
        resume,
        job_description,
    )?;
    call_json(backend, &prompt, &schemas::resume_analysis_schema()).await
}

/// Rewrites the whole resume for the target job, with 3-5 regenerated
/// achievement bullets per role and an explanation of the changes.
pub async fn generate_suggested_resume(
    backend: &dyn GenerationBackend,
    resume: &ResumeData,
    job_description: &str,
) -> Result<SuggestedResume, LlmError> {
    let prompt = build_context_prompt(
        prompts::SUGGESTED_RESUME_PROMPT_TEMPLATE,
        resume,
        job_description,
    )?;
    call_json(backend, &prompt, &schemas::suggested_resume_schema()).await
}

/// Top-level arrays are wrapped in an object envelope in the schema; this
/// mirrors that for deserialization.
#[derive(Debug, Deserialize)]
struct JobsEnvelope {
    jobs: Vec<JobPosting>,
}

/// Generates 5 plausible, filter-consistent job postings. These are a
/// model-generated approximation, not live job-board data.
pub async fn search_jobs(
    backend: &dyn GenerationBackend,
    resume: &ResumeData,
    filters: &JobSearchFilters,
) -> Result<Vec<JobPosting>, LlmError> {
    let prompt = build_job_search_prompt(resume, filters)?;
    let envelope: JobsEnvelope = call_json(backend, &prompt, &schemas::job_postings_schema()).await?;
    debug!("Job search returned {} postings", envelope.jobs.len());
    Ok(envelope.jobs)
}

/// Writes the cover letter as free text and attaches the requested tone.
pub async fn generate_cover_letter(
    backend: &dyn GenerationBackend,
    resume: &ResumeData,
    job_description: &str,
    tone: Tone,
) -> Result<CoverLetter, LlmError> {
    let prompt = build_context_prompt(
        prompts::COVER_LETTER_PROMPT_TEMPLATE,
        resume,
        job_description,
    )?
    .replace("{tone}", tone.as_str());

    let content = backend.generate(&prompt, None).await?;

    Ok(CoverLetter { content, tone })
}

/// Fills a template that takes the serialized resume plus the raw JD text.
fn build_context_prompt(
    template: &str,
    resume: &ResumeData,
    job_description: &str,
) -> Result<String, LlmError> {
    let resume_json = serde_json::to_string(resume)?;
    Ok(template
        .replace("{resume_json}", &resume_json)
        .replace("{job_description}", job_description))
}

/// Fills the job-search template. Embeds only skills and experience titles
/// plus the filter values, never the full resume record.
fn build_job_search_prompt(
    resume: &ResumeData,
    filters: &JobSearchFilters,
) -> Result<String, LlmError> {
    let skills_json = serde_json::to_string(&resume.skills)?;
    let experience_titles = resume
        .experience
        .iter()
        .map(|e| e.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(prompts::JOB_SEARCH_PROMPT_TEMPLATE
        .replace("{skills_json}", &skills_json)
        .replace("{experience_titles}", &experience_titles)
        .replace("{location}", &filters.location)
        .replace("{job_types}", &filters.job_types.join(", "))
        .replace("{date_posted}", filters.date_posted.as_str())
        .replace("{experience_level}", filters.experience_level.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    use crate::models::resume::{ContactInfo, Experience};

    fn sample_resume() -> ResumeData {
        ResumeData {
            contact_info: ContactInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Berlin".to_string(),
            },
            summary: "Systems engineer.".to_string(),
            skills: vec!["Rust".to_string(), "Kubernetes".to_string()],
            experience: vec![Experience {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                dates: "2020-2023".to_string(),
                description: "- Did X\n- Did Y".to_string(),
            }],
            education: vec![],
            certifications: None,
        }
    }

    /// Records every call; returns one canned response, schema-constrained or not.
    struct RecordingBackend {
        response: String,
        calls: Mutex<Vec<(String, bool)>>,
    }

    impl RecordingBackend {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationBackend for RecordingBackend {
        async fn generate(&self, prompt: &str, schema: Option<&Value>) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), schema.is_some()));
            Ok(self.response.clone())
        }
    }

    #[test]
    fn test_context_prompt_embeds_resume_json_and_jd() {
        let prompt = build_context_prompt(
            prompts::JOB_MATCH_PROMPT_TEMPLATE,
            &sample_resume(),
            "Senior Rust Engineer at Initech",
        )
        .unwrap();
        assert!(prompt.contains("\"name\":\"Jane Doe\""));
        assert!(prompt.contains("Senior Rust Engineer at Initech"));
        assert!(!prompt.contains("{resume_json}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_job_search_prompt_embeds_only_skills_and_titles() {
        let filters = JobSearchFilters::seeded_from_location("Berlin");
        let prompt = build_job_search_prompt(&sample_resume(), &filters).unwrap();
        assert!(prompt.contains("[\"Rust\",\"Kubernetes\"]"));
        assert!(prompt.contains("experience titles like Engineer"));
        assert!(prompt.contains("- Location: Berlin"));
        assert!(prompt.contains("- Job Types: Full-time, Remote"));
        assert!(prompt.contains("- Date Posted: any"));
        // Full resume context must stay out of the search prompt
        assert!(!prompt.contains("jane@example.com"));
        assert!(!prompt.contains("Did X"));
    }

    #[test]
    fn test_suggested_resume_prompt_forbids_verbatim_copying() {
        let prompt = build_context_prompt(
            prompts::SUGGESTED_RESUME_PROMPT_TEMPLATE,
            &sample_resume(),
            "JD",
        )
        .unwrap();
        assert!(prompt.contains("3-5"));
        assert!(prompt.contains("do not simply copy from the original resume"));
        assert!(prompt.contains("must start with '- '"));
    }

    #[tokio::test]
    async fn test_parse_resume_is_schema_constrained() {
        let backend = RecordingBackend::new(
            r#"{"contactInfo": {"name": "Jane", "email": "j@example.com"}}"#,
        );
        let parsed = parse_resume(&backend, "Jane Doe, engineer").await.unwrap();
        assert_eq!(parsed.contact_info.name, "Jane");

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].1, "resume parsing must attach a response schema");
        assert!(calls[0].0.contains("Jane Doe, engineer"));
    }

    #[tokio::test]
    async fn test_cover_letter_is_free_text_and_wraps_tone() {
        let backend = RecordingBackend::new("Dear Hiring Manager,\n\nI am excited to apply.");
        let letter = generate_cover_letter(&backend, &sample_resume(), "JD", Tone::Enthusiastic)
            .await
            .unwrap();

        assert_eq!(letter.tone, Tone::Enthusiastic);
        assert!(letter.content.starts_with("Dear Hiring Manager"));

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(
            !calls[0].1,
            "the cover letter call must not carry a response schema"
        );
        assert!(calls[0].0.contains("The tone should be Enthusiastic"));
    }

    #[tokio::test]
    async fn test_search_jobs_unwraps_envelope() {
        let backend = RecordingBackend::new(
            r#"{"jobs": [{
                "title": "Rust Engineer", "company": "Acme", "location": "Remote",
                "description": "Build things. (Source: Indeed)",
                "url": "https://www.indeed.com/viewjob?jk=1",
                "jobType": "Remote", "datePosted": "1 day ago"
            }]}"#,
        );
        let filters = JobSearchFilters::seeded_from_location("Remote");
        let jobs = search_jobs(&backend, &sample_resume(), &filters)
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Rust Engineer");
    }

    #[tokio::test]
    async fn test_generator_surfaces_parse_failure() {
        let backend = RecordingBackend::new("not json at all");
        let result = analyze_job_match(&backend, &sample_resume(), "JD").await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }
}

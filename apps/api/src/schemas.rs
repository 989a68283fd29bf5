//! Schema Registry — the response schemas for every schema-constrained call.
//!
//! Pure, static data passed to the LLM client as `generationConfig.responseSchema`.
//! Field descriptions steer the model; `required` lists and enums are the
//! contract each artifact must satisfy. Never mutated at runtime.
//!
//! The cover letter has NO schema here on purpose: it is the one free-text
//! call in the system (see `generators::generate_cover_letter`).

use serde_json::{json, Value};

/// Schema for a parsed resume. `contactInfo.name` and `.email` are the only
/// hard-required contact fields; everything else may be empty but must exist.
pub fn resume_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "contactInfo": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "email": { "type": "STRING" },
                    "phone": { "type": "STRING" },
                    "location": { "type": "STRING" }
                },
                "required": ["name", "email"]
            },
            "summary": { "type": "STRING" },
            "skills": { "type": "ARRAY", "items": { "type": "STRING" } },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "dates": { "type": "STRING" },
                        "description": {
                            "type": "STRING",
                            "description": "A multi-line string with each line representing a bullet point of responsibilities/achievements. Start each line with '- '."
                        }
                    },
                    "required": ["title", "company", "description", "dates"]
                }
            },
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "degree": { "type": "STRING" },
                        "institution": { "type": "STRING" },
                        "dates": { "type": "STRING" }
                    },
                    "required": ["degree", "institution"]
                }
            },
            "certifications": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of professional certifications."
            }
        },
        "required": ["contactInfo", "summary", "skills", "experience", "education"]
    })
}

pub fn job_match_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "matchPercentage": {
                "type": "NUMBER",
                "description": "A number between 0 and 100."
            },
            "summary": { "type": "STRING" },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["matchPercentage", "summary", "strengths", "weaknesses"]
    })
}

pub fn resume_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "keywordSuggestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "skillGapAnalysis": { "type": "ARRAY", "items": { "type": "STRING" } },
            "certificationSuggestions": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["keywordSuggestions", "skillGapAnalysis", "certificationSuggestions"]
    })
}

pub fn suggested_resume_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "content": resume_schema(),
            "improvements": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of specific improvements made to the resume."
            }
        },
        "required": ["content", "improvements"]
    })
}

/// Job postings are wrapped in a `{jobs: [...]}` envelope: the schema
/// validator expects an object at the top level, and the generator unwraps it.
pub fn job_postings_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "jobs": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "location": { "type": "STRING" },
                        "description": {
                            "type": "STRING",
                            "description": "A brief 2-3 sentence description. End with the source, e.g., '(Source: LinkedIn)'."
                        },
                        "url": {
                            "type": "STRING",
                            "description": "A plausible application URL from a major job board like LinkedIn or Indeed."
                        },
                        "jobType": {
                            "type": "STRING",
                            "enum": ["Full-time", "Part-time", "Contract", "Remote", "Hybrid", "Temporary"]
                        },
                        "datePosted": {
                            "type": "STRING",
                            "description": "A human-readable date like '2 days ago' or '2023-10-27'"
                        }
                    },
                    "required": ["title", "company", "location", "description", "url", "jobType", "datePosted"]
                }
            }
        },
        "required": ["jobs"]
    })
}

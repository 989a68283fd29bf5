// All LLM prompt templates for the artifact generators.
// Each template is filled by `.replace` on its {placeholders} before sending;
// prior artifacts are embedded as serialized JSON context.

/// Resume parsing. Replace `{resume_text}`.
/// Missing fields get a best-effort guess or empty string/array, never omission.
pub const PARSE_RESUME_PROMPT_TEMPLATE: &str = "You are an expert HR recruitment assistant. \
    Parse the following resume text and extract the information into a structured JSON object. \
    For experience descriptions, combine them into a single string with newline separators for bullet points. \
    Extract any professional certifications into the certifications array. \
    If a section or field is not found, use a best-effort guess or return an empty string/array. \
    Resume text: \n\n{resume_text}";

/// Job-match analysis. Replace `{resume_json}` and `{job_description}`.
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = "You are an expert career coach. \
    Analyze the provided resume JSON and the job description text. \
    Provide a job match analysis as a JSON object. \
    The match percentage should reflect how well the candidate's skills and experience align with the job requirements. \
    The summary should be a brief overview of the match. \
    Strengths are specific points where the candidate excels for this role. \
    Weaknesses are areas where the candidate is lacking or could improve.\
    \n\nResume Data: {resume_json}\n\nJob Description: {job_description}";

/// Resume improvement suggestions. Replace `{resume_json}` and `{job_description}`.
pub const RESUME_SUGGESTIONS_PROMPT_TEMPLATE: &str = "You are an ATS optimization expert. \
    Compare the provided resume JSON and the job description. \
    Provide actionable suggestions to improve the resume for this specific job application. \
    Format the output as a JSON object. Be specific and concise.\
    \n\nResume Data: {resume_json}\n\nJob Description: {job_description}";

/// Full resume rewrite. Replace `{resume_json}` and `{job_description}`.
pub const SUGGESTED_RESUME_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer specializing in ATS optimization. Take the following parsed resume data and rewrite it into a professional, modern, and improved resume tailored for the provided job description.

The goal is to create a powerful, achievement-oriented resume. Use strong action verbs and quantify results where possible. Rephrase summaries and align skills with the keywords and requirements in the job description.

**CRITICAL INSTRUCTION FOR EXPERIENCE SECTION:** For each role in the 'experience' section, analyze the candidate's original responsibilities and the target job description. Based on this analysis, **regenerate** a new set of 3-5 professional, achievement-oriented bullet points. These new bullet points should directly showcase how the candidate's past experience aligns with the requirements of the target job. Avoid redundant points and do not simply copy from the original resume. Each bullet point MUST be a distinct line in a multi-line string, and each must start with '- '.

Ensure the job duration (dates) is present for each role. If there are certifications, list them. Structure the entire resume in a clean, professional, and easy-to-read format.

Format the output as a JSON object with a 'content' object matching the resume schema and an 'improvements' array of strings explaining the key changes you made.

Original Resume Data: {resume_json}

Target Job Description: {job_description}"#;

/// Job search. Replace `{skills_json}`, `{experience_titles}`, `{location}`,
/// `{job_types}`, `{date_posted}`, `{experience_level}`.
/// Embeds only skills and experience titles, never the full resume.
pub const JOB_SEARCH_PROMPT_TEMPLATE: &str = r#"You are a helpful job search assistant. Based on the provided resume data and search filters, generate a realistic list of 5 job postings.

Resume Data: {skills_json} and experience titles like {experience_titles}.

Search Filters:
- Location: {location}
- Job Types: {job_types}
- Date Posted: {date_posted}
- Experience Level: {experience_level}

For each job, provide a title, company, location, a brief 2-3 sentence description, and a plausible application URL from a major job board like LinkedIn or Indeed (e.g., https://www.linkedin.com/jobs/view/12345678). At the end of the description, add the source, like "(Source: LinkedIn)". Ensure the jobs are highly relevant to the resume and filters. Format as a JSON array."#;

/// Cover letter. Replace `{tone}`, `{resume_json}`, `{job_description}`.
/// The one free-text prompt in the system: no response schema is attached.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "You are a professional resume writer. \
    Using the provided resume JSON and job description, write a compelling and personalized cover letter. \
    The tone should be {tone}. \
    The letter should highlight the candidate's most relevant skills and experiences for this specific role and company. \
    Address it to 'Hiring Manager' and sign off with the candidate's name. \
    Do not include contact information in the letter body itself. \
    Ensure the output is a single block of text.\
    \n\nResume Data: {resume_json}\n\nJob Description: {job_description}";

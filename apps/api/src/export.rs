//! Plain-text resume export.
//!
//! The layout is a stable contract: uppercased job titles, pipe-delimited
//! contact line, fixed section rules, `- ` bullet prefixes. Changes here
//! break downstream consumers of the downloaded file.

use crate::models::resume::ResumeData;

const HEAVY_RULE: &str = "=================================================================";
const LIGHT_RULE: &str = "-----------------------------------------------------------------";

/// Renders a resume as the fixed-layout plain-text document.
pub fn render_resume_txt(resume: &ResumeData) -> String {
    let mut txt = String::new();

    // Header
    txt.push_str(&format!("{}\n", resume.contact_info.name));
    txt.push_str(&format!(
        "{} | {} | {}\n",
        resume.contact_info.location, resume.contact_info.phone, resume.contact_info.email
    ));
    txt.push_str(HEAVY_RULE);
    txt.push_str("\n\n");

    // Summary
    txt.push_str("SUMMARY\n");
    txt.push_str(LIGHT_RULE);
    txt.push('\n');
    txt.push_str(&format!("{}\n\n", resume.summary));

    // Skills
    txt.push_str("SKILLS\n");
    txt.push_str(LIGHT_RULE);
    txt.push('\n');
    txt.push_str(&resume.skills.join(", "));
    txt.push_str("\n\n");

    // Experience
    txt.push_str("EXPERIENCE\n");
    txt.push_str(LIGHT_RULE);
    txt.push('\n');
    for job in &resume.experience {
        txt.push_str(&format!("{} | {}\n", job.title.to_uppercase(), job.company));
        txt.push_str(&format!("  {}\n", job.dates));
        for line in job.description.split('\n') {
            if !line.trim().is_empty() {
                let bullet = line.strip_prefix("- ").unwrap_or(line);
                txt.push_str(&format!("  - {bullet}\n"));
            }
        }
        txt.push('\n');
    }

    // Certifications
    if let Some(certifications) = &resume.certifications {
        if !certifications.is_empty() {
            txt.push_str("CERTIFICATIONS\n");
            txt.push_str(LIGHT_RULE);
            txt.push('\n');
            for cert in certifications {
                txt.push_str(&format!("- {cert}\n"));
            }
            txt.push('\n');
        }
    }

    // Education
    txt.push_str("EDUCATION\n");
    txt.push_str(LIGHT_RULE);
    txt.push('\n');
    for edu in &resume.education {
        txt.push_str(&format!("{} - {}\n", edu.institution, edu.degree));
        txt.push_str(&format!("  {}\n\n", edu.dates));
    }

    txt
}

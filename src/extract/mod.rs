//! Field extraction from plain resume text
//!
//! Each extractor works on the normalized lines of the document and, where it
//! makes sense, only on the section it belongs to.

pub mod education;
pub mod entities;
pub mod experience;
pub mod sections;
pub mod skills;
pub mod tokens;

pub use education::{extract_education, Education};
pub use entities::{extract_email, extract_name, extract_phone};
pub use experience::{extract_work_history, total_experience_years, WorkHistory};
pub use sections::{SectionKind, Sections};
pub use skills::extract_skills;

use chrono::NaiveDate;
use serde::Serialize;

use crate::formats::ExtractedText;
use crate::resources::Resources;

/// Fields produced by the heuristic engine. Missing values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub skills: Vec<String>,
    pub college_name: Option<Vec<String>>,
    pub degree: Option<Vec<String>>,
    pub designation: Option<Vec<String>>,
    pub experience: Option<Vec<String>>,
    pub company_names: Option<Vec<String>>,
    pub no_of_pages: Option<usize>,
    pub total_experience: f64,
}

pub fn extract_fields(document: &ExtractedText, resources: &Resources, today: NaiveDate) -> ResumeFields {
    let text = &document.text;
    let lines = tokens::normalize_lines(text);
    let sections = Sections::segment(&lines);

    let education_lines = sections.non_empty(SectionKind::Education).unwrap_or(lines.as_slice());
    let education = extract_education(education_lines, resources);

    let experience = sections.non_empty(SectionKind::Experience);
    let (work_history, total_experience) = match experience {
        Some(exp) => (
            Some(extract_work_history(exp, resources)),
            total_experience_years(exp, today),
        ),
        None => (None, 0.0),
    };

    tracing::debug!(
        "Segmented {} lines, experience section: {}, education section: {}",
        lines.len(),
        experience.is_some(),
        sections.contains(SectionKind::Education)
    );

    ResumeFields {
        name: extract_name(text, &lines, resources),
        email: extract_email(text),
        mobile_number: extract_phone(text),
        skills: extract_skills(&lines, resources),
        college_name: non_empty(education.colleges),
        degree: non_empty(education.degrees),
        designation: work_history
            .as_ref()
            .and_then(|h| non_empty(h.designations.clone())),
        company_names: work_history.and_then(|h| non_empty(h.companies)),
        experience: experience.map(|exp| exp.to_vec()),
        no_of_pages: document.page_count,
        total_experience,
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SkillVocabulary;

    fn resources() -> Resources {
        Resources {
            stopwords: ["the", "of", "and", "in", "at", "with", "on", "a"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skills: SkillVocabulary::from_entries(["Rust", "PostgreSQL", "Machine Learning", "Docker"]),
        }
    }

    const RESUME: &str = "\
Jane Doe
jane.doe@example.com | (555) 123-4567

Summary
Backend engineer focused on Rust and machine learning infrastructure.

Experience
Senior Software Engineer at Acme Corp
Jan 2019 - Jan 2023
• Built PostgreSQL pipelines
Data Engineer | Initech LLC | 2017 - 2019

Education
B.S. in Computer Science, Stanford University, 2016

Skills
Rust, Docker, PostgreSQL
";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_full_resume() {
        let fields = extract_fields(&ExtractedText::new(RESUME.to_string()), &resources(), today());

        assert_eq!(fields.name.as_deref(), Some("Jane Doe"));
        assert_eq!(fields.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(fields.mobile_number.as_deref(), Some("(555) 123-4567"));
        assert_eq!(fields.skills, vec!["Rust", "Machine Learning", "PostgreSQL", "Docker"]);
        assert_eq!(fields.college_name, Some(vec!["Stanford University".to_string()]));
        assert_eq!(fields.degree, Some(vec!["B.S. in Computer Science".to_string()]));
        assert_eq!(
            fields.designation,
            Some(vec!["Senior Software Engineer".to_string(), "Data Engineer".to_string()])
        );
        assert_eq!(
            fields.company_names,
            Some(vec!["Acme Corp".to_string(), "Initech LLC".to_string()])
        );
        assert_eq!(fields.experience.as_ref().map(|e| e.len()), Some(4));
        assert_eq!(fields.total_experience, 6.0);
        assert_eq!(fields.no_of_pages, None);
    }

    #[test]
    fn test_missing_sections_serialize_as_null() {
        let fields = extract_fields(
            &ExtractedText::with_pages("Jane Doe\nLikes hiking".to_string(), 1),
            &resources(),
            today(),
        );
        let value = serde_json::to_value(&fields).unwrap();

        assert_eq!(value["name"], "Jane Doe");
        assert!(value["email"].is_null());
        assert!(value["experience"].is_null());
        assert!(value["company_names"].is_null());
        assert_eq!(value["skills"], serde_json::json!([]));
        assert_eq!(value["no_of_pages"], 1);
        assert_eq!(value["total_experience"], 0.0);
    }
}

//! Resume section segmentation
//!
//! Groups lines under the heading they follow. Headings are matched against a
//! fixed alias table, tolerating small spelling differences ("Experiences",
//! "Educaton").

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const MAX_HEADING_WORDS: usize = 4;
const FUZZY_THRESHOLD: f64 = 0.93;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Objective,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Accomplishments,
    Publications,
    Interests,
    Leadership,
}

const HEADING_ALIASES: &[(&str, SectionKind)] = &[
    ("summary", SectionKind::Summary),
    ("professional summary", SectionKind::Summary),
    ("profile", SectionKind::Summary),
    ("about me", SectionKind::Summary),
    ("objective", SectionKind::Objective),
    ("career objective", SectionKind::Objective),
    ("experience", SectionKind::Experience),
    ("work experience", SectionKind::Experience),
    ("professional experience", SectionKind::Experience),
    ("employment history", SectionKind::Experience),
    ("work history", SectionKind::Experience),
    ("employment", SectionKind::Experience),
    ("education", SectionKind::Education),
    ("academic background", SectionKind::Education),
    ("educational qualifications", SectionKind::Education),
    ("academics", SectionKind::Education),
    ("skills", SectionKind::Skills),
    ("technical skills", SectionKind::Skills),
    ("core competencies", SectionKind::Skills),
    ("key skills", SectionKind::Skills),
    ("projects", SectionKind::Projects),
    ("personal projects", SectionKind::Projects),
    ("certifications", SectionKind::Certifications),
    ("certificates", SectionKind::Certifications),
    ("licenses and certifications", SectionKind::Certifications),
    ("accomplishments", SectionKind::Accomplishments),
    ("achievements", SectionKind::Accomplishments),
    ("awards", SectionKind::Accomplishments),
    ("publications", SectionKind::Publications),
    ("interests", SectionKind::Interests),
    ("hobbies", SectionKind::Interests),
    ("leadership", SectionKind::Leadership),
];

impl SectionKind {
    /// Recognizes a line that is a section heading.
    pub fn from_heading(line: &str) -> Option<Self> {
        let cleaned = line
            .trim()
            .trim_end_matches(|c: char| c.is_ascii_punctuation())
            .split_whitespace()
            .collect::<Vec<_>>();
        if cleaned.is_empty() || cleaned.len() > MAX_HEADING_WORDS {
            return None;
        }
        let heading = cleaned.join(" ").to_lowercase();

        if let Some((_, kind)) = HEADING_ALIASES.iter().find(|(alias, _)| *alias == heading) {
            return Some(*kind);
        }

        HEADING_ALIASES
            .iter()
            .map(|(alias, kind)| (strsim::jaro_winkler(alias, &heading), *kind))
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, kind)| kind)
    }
}

/// Lines grouped by the section heading they appear under. Lines before the
/// first heading belong to no section.
#[derive(Debug, Default)]
pub struct Sections {
    sections: HashMap<SectionKind, Vec<String>>,
}

impl Sections {
    pub fn segment(lines: &[String]) -> Self {
        let mut result = Self::default();
        let mut current: Option<SectionKind> = None;

        for line in lines {
            if let Some(kind) = SectionKind::from_heading(line) {
                result.sections.entry(kind).or_default();
                current = Some(kind);
                continue;
            }
            if let Some(kind) = current {
                result.sections.entry(kind).or_default().push(line.clone());
            }
        }

        result
    }

    /// Lines of a section; `None` when the heading never appeared.
    pub fn lines(&self, kind: SectionKind) -> Option<&[String]> {
        self.sections.get(&kind).map(|v| v.as_slice())
    }

    /// Lines of a section, or `None` when it is missing or has no content.
    pub fn non_empty(&self, kind: SectionKind) -> Option<&[String]> {
        self.lines(kind).filter(|lines| !lines.is_empty())
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.sections.contains_key(&kind)
    }
}

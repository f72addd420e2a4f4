use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::segments;
use crate::resources::Resources;

static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy|polytechnic|conservatory)\b")
        .unwrap()
});

/// Degree abbreviations and words, compared after removing `.` and apostrophes.
const DEGREES: &[&str] = &[
    "BS", "BSC", "BA", "BE", "BENG", "BTECH", "BBA", "BCOM", "BFA", "MS", "MSC", "MA", "ME", "MENG",
    "MTECH", "MBA", "MCA", "MFA", "PHD", "DPHIL", "MD", "JD", "LLB", "LLM", "BACHELOR", "BACHELORS",
    "MASTER", "MASTERS", "DOCTORATE", "DIPLOMA", "SSC", "HSC",
];

/// Abbreviations that double as words or US state codes unless written with dots.
const AMBIGUOUS: &[&str] = &["BE", "MA", "ME", "MD"];

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Education {
    pub colleges: Vec<String>,
    pub degrees: Vec<String>,
}

pub fn extract_education(lines: &[String], resources: &Resources) -> Education {
    let mut education = Education::default();

    for line in lines {
        for segment in segments(line) {
            if INSTITUTION_RE.is_match(segment) {
                push_unique(&mut education.colleges, segment);
            }
            if has_degree_token(segment, resources) {
                push_unique(&mut education.degrees, segment);
            }
        }
    }

    education
}

fn has_degree_token(segment: &str, resources: &Resources) -> bool {
    segment.split_whitespace().any(|word| {
        let cleaned: String = word
            .chars()
            .filter(|c| !matches!(c, '.' | '\'' | '’' | '?' | '!' | '$' | '(' | ')'))
            .collect();
        let upper = cleaned.to_uppercase();
        if !DEGREES.contains(&upper.as_str()) {
            return false;
        }
        if word.contains('.') {
            return true;
        }
        !AMBIGUOUS.contains(&upper.as_str()) && !resources.is_stopword(&cleaned)
    })
}

pub(crate) fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SkillVocabulary;

    fn resources() -> Resources {
        Resources {
            stopwords: ["me", "of", "in", "and", "ma"].iter().map(|s| s.to_string()).collect(),
            skills: SkillVocabulary::from_entries(["Rust"]),
        }
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_degree_and_college_on_one_line() {
        let edu = extract_education(
            &lines("B.S. in Computer Science, Stanford University, 2016"),
            &resources(),
        );
        assert_eq!(edu.degrees, vec!["B.S. in Computer Science"]);
        assert_eq!(edu.colleges, vec!["Stanford University"]);
    }

    #[test]
    fn test_spelled_out_degrees() {
        let edu = extract_education(
            &lines("Master's of Business Administration\nBachelor of Arts | Reed College"),
            &resources(),
        );
        assert_eq!(
            edu.degrees,
            vec!["Master's of Business Administration", "Bachelor of Arts"]
        );
        assert_eq!(edu.colleges, vec!["Reed College"]);
    }

    #[test]
    fn test_state_code_is_not_a_degree() {
        let edu = extract_education(&lines("Boston University, Boston, MA"), &resources());
        assert!(edu.degrees.is_empty());
        assert_eq!(edu.colleges, vec!["Boston University"]);
    }

    #[test]
    fn test_dotted_abbreviation_is_a_degree() {
        let edu = extract_education(&lines("M.A. Linguistics"), &resources());
        assert_eq!(edu.degrees, vec!["M.A. Linguistics"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let edu = extract_education(&lines("MIT Institute\nMIT Institute"), &resources());
        assert_eq!(edu.colleges.len(), 1);
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use super::sections::SectionKind;
use crate::resources::Resources;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}").unwrap()
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|[^\d+])((?:\+\d{1,3}[\s.\-]?)?(?:\(\d{3}\)|\d{3})[\s.\-]?\d{3}[\s.\-]?\d{4})(?:$|\D)",
    )
    .unwrap()
});

static NAME_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*(?:full[ \t]+)?name[ \t]*[:\-][ \t]*(\S.*?)[ \t]*$").unwrap());

/// Only the top of the document is searched for an unlabeled name.
const NAME_SEARCH_LINES: usize = 5;

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

pub fn extract_name(text: &str, lines: &[String], resources: &Resources) -> Option<String> {
    if let Some(labeled) = NAME_LABEL_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
    {
        return Some(labeled);
    }

    lines
        .iter()
        .take(NAME_SEARCH_LINES)
        .find(|line| looks_like_name(line, resources))
        .cloned()
}

fn looks_like_name(line: &str, resources: &Resources) -> bool {
    if line.contains('@') || line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if SectionKind::from_heading(line).is_some() {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }

    words.iter().all(|word| {
        let starts_upper = word.chars().next().is_some_and(|c| c.is_uppercase());
        let name_chars = word
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '.' | '\'' | '-'));
        let bare = word.trim_matches(|c: char| !c.is_alphabetic());
        starts_upper && name_chars && !resources.is_stopword(bare)
    })
}

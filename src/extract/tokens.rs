use once_cell::sync::Lazy;
use regex::Regex;

// Keeps C++, C#, Node.js and Scikit-learn as single tokens
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9+#]*(?:[.\-][A-Za-z0-9+#]+)*").unwrap());

static SEGMENT_SEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:[,|;\t•]|\s[-–—]\s|\s{3,})\s*").unwrap());

const BULLETS: &[char] = &['•', '·', '*', '-', '–', '—', '▪', '●', '○', '■', '►', '➢', '✓'];

pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

/// Lowercased tokens joined by single spaces; the lookup key for skills.
pub fn normalize_phrase(text: &str) -> String {
    tokenize(text)
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trimmed, non-empty lines with leading bullet markers removed.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches(BULLETS).trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Splits a line into its comma, pipe, dash or column separated parts.
pub fn segments(line: &str) -> impl Iterator<Item = &str> {
    SEGMENT_SEP_RE
        .split(line)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

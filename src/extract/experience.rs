//! Work history: job titles, employers and total time worked.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use super::education::push_unique;
use super::tokens::segments;
use crate::resources::Resources;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:engineer|developer|manager|analyst|scientist|designer|consultant|architect|intern|director|lead|administrator|specialist|coordinator|officer|programmer|researcher|technician|head|president|founder|co-founder|cto|ceo|cfo|vp|associate|assistant|accountant|teacher|professor)\b",
    )
    .unwrap()
});

static ORG_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:inc|llc|llp|ltd|limited|corp|corporation|company|co|technologies|technology|systems|solutions|labs|gmbh|group|plc|bank|software)\.?$",
    )
    .unwrap()
});

static AT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+(?:at|@)\s+").unwrap());

const MONTHS: &str = "jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec";

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:\b(?P<sm>{MONTHS})[a-z]*\.?\s+|\b(?P<smn>0?[1-9]|1[0-2])/)?\b(?P<sy>(?:19|20)\d{{2}})\s*(?:-|–|—|to|until)\s*(?:(?:\b(?P<em>{MONTHS})[a-z]*\.?\s+|\b(?P<emn>0?[1-9]|1[0-2])/)?(?P<ey>(?:19|20)\d{{2}})\b|(?P<present>present|current|now|today|date)\b)"
    ))
    .unwrap()
});

/// Designations longer than this are prose, not titles.
const MAX_TITLE_WORDS: usize = 6;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkHistory {
    pub designations: Vec<String>,
    pub companies: Vec<String>,
}

pub fn extract_work_history(lines: &[String], resources: &Resources) -> WorkHistory {
    let mut history = WorkHistory::default();

    for line in lines {
        for segment in segments(line) {
            if let Some(at) = AT_RE.find(segment) {
                let (title, company) = (segment[..at.start()].trim(), segment[at.end()..].trim());
                let titled = is_title(title, resources);
                if titled {
                    push_unique(&mut history.designations, title);
                }
                if !company.is_empty() && (titled || ORG_SUFFIX_RE.is_match(company)) {
                    push_unique(&mut history.companies, company);
                }
            } else if is_title(segment, resources) {
                push_unique(&mut history.designations, segment);
            } else if ORG_SUFFIX_RE.is_match(segment) {
                push_unique(&mut history.companies, segment);
            }
        }
    }

    history
}

/// Short, title-cased and containing a job keyword. Stopwords may stay
/// lowercase ("Head of Engineering").
fn is_title(segment: &str, resources: &Resources) -> bool {
    let words: Vec<&str> = segment.split_whitespace().collect();
    if words.is_empty() || words.len() > MAX_TITLE_WORDS || !TITLE_RE.is_match(segment) {
        return false;
    }
    words.iter().all(|word| {
        let first = word.chars().next();
        first.is_some_and(|c| !c.is_lowercase()) || resources.is_stopword(word)
    })
}

/// Years covered by the date ranges in `lines`, rounded to two decimals.
/// Open-ended ranges ("- Present") run until `today`.
pub fn total_experience_years(lines: &[String], today: NaiveDate) -> f64 {
    let months: i64 = lines
        .iter()
        .flat_map(|line| RANGE_RE.captures_iter(line))
        .filter_map(|caps| {
            let start = month_index(&caps, "sm", "smn", "sy")?;
            let end = if caps.name("present").is_some() {
                i64::from(today.year()) * 12 + i64::from(today.month0())
            } else {
                month_index(&caps, "em", "emn", "ey")?
            };
            (end >= start).then_some(end - start)
        })
        .sum();

    (months as f64 / 12.0 * 100.0).round() / 100.0
}

/// Months since year 0 for one side of a range; a missing month is January.
fn month_index(caps: &regex::Captures<'_>, month: &str, month_num: &str, year: &str) -> Option<i64> {
    let year: i32 = caps.name(year)?.as_str().parse().ok()?;
    let month0 = if let Some(name) = caps.name(month) {
        month_from_name(name.as_str())?
    } else if let Some(num) = caps.name(month_num) {
        num.as_str().parse::<u32>().ok()?.checked_sub(1)?
    } else {
        0
    };
    let date = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    Some(i64::from(date.year()) * 12 + i64::from(date.month0()))
}

fn month_from_name(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_lowercase();
    MONTHS
        .split('|')
        .position(|m| m == prefix)
        .map(|i| i as u32)
}

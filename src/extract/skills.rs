use std::collections::HashSet;

use super::tokens::tokenize;
use crate::resources::Resources;

/// Greedy longest-match of token n-grams against the skills vocabulary.
///
/// N-grams never cross line boundaries. Results use the vocabulary's
/// spelling, in order of first appearance.
pub fn extract_skills(lines: &[String], resources: &Resources) -> Vec<String> {
    let max_n = resources.skills.max_tokens().max(1);
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for line in lines {
        let tokens: Vec<String> = tokenize(line).map(|t| t.to_lowercase()).collect();
        let mut i = 0;

        while i < tokens.len() {
            let longest = max_n.min(tokens.len() - i);
            let matched = (1..=longest).rev().find_map(|n| {
                if n == 1 && resources.stopwords.contains(&tokens[i]) {
                    return None;
                }
                let key = tokens[i..i + n].join(" ");
                resources.skills.lookup(&key).map(|skill| (n, skill))
            });

            match matched {
                Some((n, skill)) => {
                    if seen.insert(skill) {
                        skills.push(skill.to_string());
                    }
                    i += n;
                }
                None => i += 1,
            }
        }
    }

    skills
}

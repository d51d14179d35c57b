//! Term extraction — runs an ordered pattern set over a job description.

use std::collections::HashSet;

use regex::Regex;

use crate::enhancement::vocabulary::PatternGroup;
use crate::enhancement::EnhanceError;

/// Compiled form of a pattern set, one regex per group, in group order.
pub struct TermExtractor {
    patterns: Vec<Regex>,
}

impl TermExtractor {
    pub fn new(groups: &[PatternGroup]) -> Result<Self, EnhanceError> {
        let patterns = groups
            .iter()
            .map(|group| Regex::new(&group.regex_source()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Collects the first capture of every match.
    ///
    /// Groups are applied in order, matches within a group in document order.
    /// Terms are de-duplicated case-insensitively; the first spelling seen wins.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();

        for pattern in &self.patterns {
            for captures in pattern.captures_iter(text) {
                let Some(term) = captures.get(1).map(|m| m.as_str()) else {
                    continue;
                };
                if term.is_empty() {
                    continue;
                }
                if seen.insert(term.to_lowercase()) {
                    terms.push(term.to_string());
                }
            }
        }

        terms
    }
}

/// Whole-word, case-insensitive search for a literal term.
pub fn contains_whole_word(haystack: &str, term: &str) -> Result<bool, EnhanceError> {
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))?;
    Ok(pattern.is_match(haystack))
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Joins up to `limit` leading terms with ", ", or returns `fallback` when empty.
pub fn join_leading(terms: &[String], limit: usize, fallback: &str) -> String {
    if terms.is_empty() {
        fallback.to_string()
    } else {
        terms
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

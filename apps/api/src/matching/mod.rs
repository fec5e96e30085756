//! Matching — per-target scoring between a student profile and catalog entities.
//!
//! Scores are deliberate keyword heuristics, not normalized probabilities:
//! case-insensitive set overlap plus substring containment, with additive
//! bonuses that can double-count a skill (once via the overlap ratio, once
//! via the goals-text check). That behavior is contract; do not "fix" it here.

pub mod career;
pub mod club;
pub mod course;
pub mod portfolio;

use std::collections::BTreeSet;

use serde::Serialize;

/// Outcome of matching one profile against one target entity.
///
/// Produced fresh per evaluation and never persisted. `score` is in [0, 100]
/// for careers and portfolio items; club scores are additive and uncapped.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<T> {
    pub target: T,
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub rationale: String,
}

/// Lowercases and trims a single tag or keyword.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes a list of tags into a deterministic, deduplicated set.
/// Blank entries are dropped.
pub fn normalize_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| normalize(v))
        .filter(|v| !v.is_empty())
        .collect()
}

/// Joins up to `limit` items with ", " for rationale prose.
pub(crate) fn name_some(items: &BTreeSet<String>, limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Machine Learning "), "machine learning");
    }

    #[test]
    fn test_normalize_set_drops_blanks_and_dedups() {
        let set = normalize_set(&[
            "SQL".to_string(),
            " sql".to_string(),
            "".to_string(),
            "  ".to_string(),
            "Rust".to_string(),
        ]);
        let items: Vec<String> = set.into_iter().collect();
        assert_eq!(items, vec!["rust".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_name_some_caps_at_limit() {
        let set: BTreeSet<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(name_some(&set, 3), "a, b, c");
        assert_eq!(name_some(&set, 10), "a, b, c, d");
    }
}

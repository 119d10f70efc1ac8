//! Skill-name normalization: lower-case, strip punctuation, resolve
//! synonyms to canonical names.

use std::collections::BTreeSet;

use crate::taxonomy;

/// Normalize one free-text skill mention. Returns `None` when the cleaned
/// form is a single character or shorter.
pub fn normalize_one(skill: &str) -> Option<String> {
    let cleaned: String = skill
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let canonical = taxonomy::canonical_for(&cleaned)
        .map(str::to_owned)
        .unwrap_or(cleaned);

    if canonical.chars().count() > 1 {
        Some(canonical)
    } else {
        None
    }
}

/// Normalize a set of skill mentions, deduplicating the results.
pub fn normalize_skills<'a, I>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    skills
        .into_iter()
        .filter_map(|s| normalize_one(s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize_one("Scikit-Learn"), Some("scikitlearn".to_string()));
        assert_eq!(normalize_one("  SQL  "), Some("sql".to_string()));
    }

    #[test]
    fn synonyms_resolve_to_canonical() {
        assert_eq!(normalize_one("ML"), Some("machine learning".to_string()));
        assert_eq!(normalize_one("AI"), Some("machine learning".to_string()));
        assert_eq!(normalize_one("GCP"), Some("google cloud platform".to_string()));
    }

    #[test]
    fn single_characters_are_discarded() {
        // "C++" cleans down to "c".
        assert_eq!(normalize_one("C++"), None);
        assert_eq!(normalize_one("R"), None);
        assert_eq!(normalize_one(""), None);
    }

    #[test]
    fn normalization_is_idempotent() {
        for skill in ["Machine Learning", "ml", "Python!", "Tensor Flow"] {
            let once = normalize_one(skill).unwrap();
            let twice = normalize_one(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn set_normalization_deduplicates() {
        let skills: Vec<String> = ["Python", "python programming", "ML", "AI"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let normalized = normalize_skills(skills.iter());
        assert_eq!(normalized.len(), 2);
        assert!(normalized.contains("python"));
        assert!(normalized.contains("machine learning"));
    }
}

//! Formatting-quality sub-score: penalize patterns that confuse automated
//! resume parsers, reward conventional ones.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ats::ScoringFault;

/// Point deduction cap per bad pattern.
const BAD_PATTERN_CAP: f64 = 20.0;
/// Points deducted per occurrence of a bad pattern.
const BAD_PATTERN_PENALTY: f64 = 2.0;
/// Bonus when enough good patterns are present.
const GOOD_PATTERN_BONUS: f64 = 10.0;
/// Distinct good patterns required for the bonus.
const GOOD_PATTERN_MIN: usize = 2;

/// Special characters (hyphens excluded), tabs, and runs of three or more
/// whitespace characters. Each pattern is capped independently.
static BAD_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"[^\w\s-]").unwrap(),
        Regex::new(r"\t").unwrap(),
        Regex::new(r"\s{3,}").unwrap(),
    ]
});

/// Proper-name pairs, four-digit year ranges, month/year dates, acronyms.
static GOOD_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"\b[A-Z][a-z]+\s[A-Z][a-z]+\b").unwrap(),
        Regex::new(r"\d{4}-\d{4}").unwrap(),
        Regex::new(r"\b\d{1,2}/\d{4}\b").unwrap(),
        Regex::new(r"\b[A-Z]+\b").unwrap(),
    ]
});

/// Score the raw resume text for parser-friendly formatting. Starts at 100,
/// deducts `min(20, 2 x occurrences)` per bad pattern, adds a flat bonus
/// when at least two good patterns appear, clamps to [0, 100].
pub fn format_score(resume_text: &str) -> Result<f64, ScoringFault> {
    if resume_text.trim().is_empty() {
        return Err(ScoringFault::EmptyDocument("resume text"));
    }

    let mut score = 100.0;
    for pattern in BAD_PATTERNS.iter() {
        let occurrences = pattern.find_iter(resume_text).count() as f64;
        score -= (occurrences * BAD_PATTERN_PENALTY).min(BAD_PATTERN_CAP);
    }

    let good_found = GOOD_PATTERNS
        .iter()
        .filter(|p| p.is_match(resume_text))
        .count();
    if good_found >= GOOD_PATTERN_MIN {
        score += GOOD_PATTERN_BONUS;
    }

    Ok(score.clamp(0.0, 100.0))
}

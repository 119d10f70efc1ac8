//! Skill extraction from job description text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::taxonomy;

/// Fixed technical-term patterns applied on top of the taxonomy scan:
/// language names, ML-library names, cloud-platform names, and
/// BI-tool/database names.
static TECH_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"\b(?:python|java|sql|r\b|javascript|html|css|c\+\+)\b").unwrap(),
        Regex::new(r"\b(?:tensorflow|pytorch|scikit-learn|pandas|numpy)\b").unwrap(),
        Regex::new(r"\b(?:aws|azure|gcp|docker|kubernetes)\b").unwrap(),
        Regex::new(r"\b(?:tableau|power\s*bi|excel|mysql|postgresql)\b").unwrap(),
    ]
});

/// Extract the lower-cased, deduplicated set of skills a job description
/// implies. Every skill in the tiered database is substring-tested against
/// the job text (directly and through its synonyms), then the fixed
/// technical-term patterns contribute their matches.
///
/// The taxonomy scan has no word-boundary guard; single-letter entries like
/// "r" will match almost any text. Documented limitation, shared with the
/// resume-side skill scan.
pub fn extract_job_skills(job_description: &str) -> BTreeSet<String> {
    let job_text = job_description.to_lowercase();
    let mut found = BTreeSet::new();

    for category in taxonomy::SKILL_DATABASE {
        for (_tier, skills) in category.tiers() {
            for skill in skills {
                let skill_lower = skill.to_lowercase();
                let mentioned = job_text.contains(&skill_lower)
                    || taxonomy::alternates_of(&skill_lower)
                        .iter()
                        .any(|alt| job_text.contains(alt));
                if mentioned {
                    found.insert(skill_lower);
                }
            }
        }
    }

    for pattern in TECH_PATTERNS.iter() {
        for m in pattern.find_iter(&job_text) {
            found.insert(m.as_str().to_string());
        }
    }

    found
}

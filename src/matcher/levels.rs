//! Proficiency-tier assignment for resume skills.

use std::collections::{BTreeMap, BTreeSet};

use crate::taxonomy;

/// Bucket name for skills absent from the tiered database.
pub const UNKNOWN_TIER: &str = "unknown";

/// Assign each resume skill to the tier of the first database
/// category/tier (in declared order) whose skill list matches it as a
/// substring in either direction. Skills nothing matches land in the
/// `unknown` bucket.
pub fn analyze_skill_levels(
    resume_skills: &BTreeSet<String>,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut levels: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for skill in resume_skills {
        levels
            .entry(tier_of(skill).to_string())
            .or_default()
            .insert(skill.clone());
    }
    levels
}

fn tier_of(skill: &str) -> &'static str {
    for category in taxonomy::SKILL_DATABASE {
        for (tier, skills) in category.tiers() {
            let hit = skills.iter().any(|s| {
                let s_lower = s.to_lowercase();
                s_lower.contains(skill) || skill.contains(&s_lower)
            });
            if hit {
                return tier.as_str();
            }
        }
    }
    UNKNOWN_TIER
}

//! Skill-gap recommendations: learning priorities, tier-balance advice,
//! best-fitting roles, and per-role learning paths.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::taxonomy;

/// Missing skills considered for priority advice.
const PRIORITY_POOL: usize = 5;
/// Skills named per priority line.
const PRIORITY_NAMED: usize = 3;
/// Best-fitting roles surfaced.
const TOP_ROLES: usize = 3;
/// Role fit below or at this percentage is not worth surfacing.
const ROLE_FIT_FLOOR: f64 = 40.0;
/// Role fit above this percentage reads as a strong match.
const ROLE_FIT_STRONG: f64 = 60.0;

/// Build the ordered recommendation list for a skill-match result.
pub fn generate(
    matched_skills: &BTreeSet<String>,
    missing_skills: &[String],
    skill_levels: &BTreeMap<String, BTreeSet<String>>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_skills.is_empty() {
        let mut high_priority = Vec::new();
        let mut medium_priority = Vec::new();

        for skill in missing_skills.iter().take(PRIORITY_POOL) {
            if taxonomy::is_beginner_skill(skill) {
                high_priority.push(skill.as_str());
            } else {
                medium_priority.push(skill.as_str());
            }
        }

        if !high_priority.is_empty() {
            high_priority.truncate(PRIORITY_NAMED);
            recommendations.push(format!("High priority: learn {}", high_priority.join(", ")));
        }
        if !medium_priority.is_empty() {
            medium_priority.truncate(PRIORITY_NAMED);
            recommendations.push(format!(
                "Medium priority: develop {}",
                medium_priority.join(", ")
            ));
        }
    }

    let count = |tier: &str| skill_levels.get(tier).map_or(0, |s| s.len());
    let beginner_count = count("beginner");
    let intermediate_count = count("intermediate");
    let advanced_count = count("advanced");

    if beginner_count > intermediate_count * 2 {
        recommendations
            .push("Focus on advancing from beginner to intermediate level skills".to_string());
    }
    if intermediate_count > 5 && advanced_count < 2 {
        recommendations.push("Ready to tackle advanced skills and specialized tools".to_string());
    }

    recommendations.extend(career_path_recommendations(matched_skills));
    recommendations
}

/// Rank known roles by core-skill coverage and phrase the top fits.
fn career_path_recommendations(matched_skills: &BTreeSet<String>) -> Vec<String> {
    let matched_lower: BTreeSet<String> =
        matched_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut fits: Vec<(&str, f64)> = taxonomy::ROLE_REQUIREMENTS
        .iter()
        .map(|role| {
            let core_matches = role
                .core_skills
                .iter()
                .filter(|s| matched_lower.contains(&s.to_lowercase()))
                .count();
            let fit = core_matches as f64 / role.core_skills.len() as f64 * 100.0;
            (role.role, fit)
        })
        .collect();

    // Stable sort: ties keep the declared role order.
    fits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    fits.into_iter()
        .take(TOP_ROLES)
        .filter_map(|(role, fit)| {
            if fit > ROLE_FIT_STRONG {
                Some(format!("Strong fit for {role} ({fit:.0}% skill match)"))
            } else if fit > ROLE_FIT_FLOOR {
                Some(format!("Potential fit for {role} - develop missing core skills"))
            } else {
                None
            }
        })
        .collect()
}

/// One step in a role learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub skill: String,
    pub weeks: String,
}

/// A role-targeted learning plan: held skills, gaps, and a week-banded
/// study timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    pub role: String,
    pub current_match: Vec<String>,
    pub missing_core: Vec<String>,
    pub missing_preferred: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
}

/// Missing preferred skills included in the timeline.
const PREFERRED_IN_TIMELINE: usize = 3;
const WEEKS_PER_CORE_SKILL: usize = 4;
const WEEKS_PER_PREFERRED_SKILL: usize = 2;

/// Lay out a learning path toward a target role, or `None` when the role is
/// unknown. Core gaps are scheduled first at four weeks each, then up to
/// three preferred gaps at two weeks each.
pub fn learning_path(target_role: &str, current_skills: &BTreeSet<String>) -> Option<LearningPath> {
    let requirements = taxonomy::role_requirement(target_role)?;
    let current_lower: BTreeSet<String> =
        current_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut current_match = Vec::new();
    let mut missing_core = Vec::new();
    for skill in requirements.core_skills {
        if current_lower.contains(&skill.to_lowercase()) {
            current_match.push(skill.to_string());
        } else {
            missing_core.push(skill.to_string());
        }
    }

    let missing_preferred: Vec<String> = requirements
        .preferred_skills
        .iter()
        .filter(|s| !current_lower.contains(&s.to_lowercase()))
        .map(|s| s.to_string())
        .collect();

    let mut timeline = Vec::new();
    let mut week = 0;
    for skill in &missing_core {
        timeline.push(TimelineEntry {
            skill: skill.clone(),
            weeks: format!("Weeks {}-{}", week + 1, week + WEEKS_PER_CORE_SKILL),
        });
        week += WEEKS_PER_CORE_SKILL;
    }
    for skill in missing_preferred.iter().take(PREFERRED_IN_TIMELINE) {
        timeline.push(TimelineEntry {
            skill: skill.clone(),
            weeks: format!("Weeks {}-{}", week + 1, week + WEEKS_PER_PREFERRED_SKILL),
        });
        week += WEEKS_PER_PREFERRED_SKILL;
    }

    Some(LearningPath {
        role: requirements.role.to_string(),
        current_match,
        missing_core,
        missing_preferred,
        timeline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_beginner_skills_are_high_priority() {
        let missing = vec!["python".to_string(), "kubernetes".to_string()];
        let recs = generate(&BTreeSet::new(), &missing, &BTreeMap::new());

        assert!(recs.iter().any(|r| r.starts_with("High priority") && r.contains("python")));
        assert!(
            recs.iter()
                .any(|r| r.starts_with("Medium priority") && r.contains("kubernetes"))
        );
    }

    #[test]
    fn no_missing_skills_no_priority_lines() {
        let recs = generate(&BTreeSet::new(), &[], &BTreeMap::new());
        assert!(!recs.iter().any(|r| r.contains("priority")));
    }

    #[test]
    fn beginner_heavy_profile_gets_progression_advice() {
        let mut levels = BTreeMap::new();
        levels.insert("beginner".to_string(), set(&["python", "sql", "excel"]));
        levels.insert("intermediate".to_string(), set(&["docker"]));

        let recs = generate(&BTreeSet::new(), &[], &levels);
        assert!(recs.iter().any(|r| r.contains("beginner to intermediate")));
    }

    #[test]
    fn strong_role_fit_is_phrased_with_percentage() {
        // 4/5 Data Analyst core skills present.
        let matched = set(&["sql", "excel", "python", "data visualization"]);
        let recs = generate(&matched, &[], &BTreeMap::new());

        assert!(
            recs.iter()
                .any(|r| r.contains("Strong fit for Data Analyst") && r.contains("80%"))
        );
    }

    #[test]
    fn weak_fits_are_not_surfaced() {
        let recs = generate(&set(&["knitting"]), &[], &BTreeMap::new());
        assert!(!recs.iter().any(|r| r.contains("fit for")));
    }

    #[test]
    fn learning_path_schedules_core_before_preferred() {
        let path = learning_path("Data Scientist", &set(&["python", "sql"])).unwrap();

        assert_eq!(path.current_match, vec!["Python", "SQL"]);
        assert_eq!(
            path.missing_core,
            vec!["Machine Learning", "Statistics", "Data Visualization"]
        );
        assert_eq!(path.timeline[0].skill, "Machine Learning");
        assert_eq!(path.timeline[0].weeks, "Weeks 1-4");
        assert_eq!(path.timeline[1].weeks, "Weeks 5-8");
        // Preferred skills follow at two weeks each.
        let first_preferred = &path.timeline[path.missing_core.len()];
        assert_eq!(first_preferred.weeks, "Weeks 13-14");
    }

    #[test]
    fn unknown_role_has_no_learning_path() {
        assert!(learning_path("Astronaut", &BTreeSet::new()).is_none());
    }
}

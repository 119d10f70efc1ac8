pub mod job_skills;
pub mod levels;
pub mod normalize;
pub mod recommendations;
pub mod similarity;

pub use recommendations::{LearningPath, TimelineEntry, learning_path};

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::taxonomy::{self, MarketTrend};

/// Outcome of matching one resume skill set against one job description.
/// Produced fresh per pair and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchResult {
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64,
    pub total_job_skills: usize,
    pub total_resume_skills: usize,
    pub skill_levels: BTreeMap<String, BTreeSet<String>>,
    pub recommendations: Vec<String>,
}

/// Match a resume's skills against a job description.
///
/// Resume skills are normalized (synonyms resolved, punctuation stripped)
/// before matching; job skills come from the taxonomy/synonym scan plus the
/// fixed technical-term patterns.
pub fn analyze_skill_match(
    resume_skills: &BTreeSet<String>,
    job_description: &str,
) -> SkillMatchResult {
    let resume_skills = normalize::normalize_skills(resume_skills.iter());
    let job_skills = job_skills::extract_job_skills(job_description);
    debug!(
        resume_skills = resume_skills.len(),
        job_skills = job_skills.len(),
        "matching skill sets"
    );

    let (matched_skills, missing_skills) = similarity::match_skills(&resume_skills, &job_skills);
    let match_percentage = similarity::match_percentage(matched_skills.len(), job_skills.len());
    let skill_levels = levels::analyze_skill_levels(&resume_skills);
    let recommendations =
        recommendations::generate(&matched_skills, &missing_skills, &skill_levels);

    SkillMatchResult {
        matched_skills,
        missing_skills,
        match_percentage,
        total_job_skills: job_skills.len(),
        total_resume_skills: resume_skills.len(),
        skill_levels,
        recommendations,
    }
}

/// Illustrative market figures for each given skill. Constants, not live
/// job-market data.
pub fn market_outlook(skills: &BTreeSet<String>) -> BTreeMap<String, MarketTrend> {
    skills
        .iter()
        .map(|skill| (skill.clone(), taxonomy::market_trend(skill)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn percentage_reflects_matched_over_total() {
        let result = analyze_skill_match(
            &set(&["Python", "Excel"]),
            "Requirements: Python, SQL, Machine Learning",
        );

        assert!(result.matched_skills.contains("python"));
        assert!(result.missing_skills.contains(&"sql".to_string()));
        assert!(
            result
                .missing_skills
                .contains(&"machine learning".to_string())
        );
        assert!((0.0..=100.0).contains(&result.match_percentage));

        let expected = similarity::match_percentage(
            result.matched_skills.len(),
            result.total_job_skills,
        );
        assert_eq!(result.match_percentage, expected);
    }

    #[test]
    fn empty_job_description_gives_zero_percentage() {
        let result = analyze_skill_match(&set(&["Python"]), "");
        assert_eq!(result.total_job_skills, 0);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn resume_synonyms_resolve_before_matching() {
        // "AI" normalizes to "machine learning" and covers the job's
        // machine learning requirement.
        let result = analyze_skill_match(&set(&["AI"]), "machine learning expertise wanted");
        assert!(result.matched_skills.contains("machine learning"));
    }

    #[test]
    fn market_outlook_covers_every_requested_skill() {
        let outlook = market_outlook(&set(&["python", "fortran"]));
        assert_eq!(outlook["python"].demand, 95);
        assert_eq!(outlook["fortran"].demand, 60);
    }
}

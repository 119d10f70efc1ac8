//! Recommendation assembly for the ATS score report.
//!
//! Order is fixed: score-band advice, top missing skills, generic
//! formatting tips (below 80), always-on data-science tips, then the
//! congratulatory replacement at 85 and above. The final list keeps the
//! first eight entries.

use crate::matcher::SkillMatchResult;

const MAX_RECOMMENDATIONS: usize = 8;
const MISSING_SKILLS_NAMED: usize = 3;

const OVERALL_IMPROVEMENT_BAND: u8 = 70;
const KEYWORD_BAND: u8 = 60;
const SKILL_MATCH_BAND: f64 = 70.0;
const FORMATTING_TIPS_BAND: u8 = 80;
const EXCELLENT_BAND: u8 = 85;

const FORMATTING_TIPS: [&str; 4] = [
    "Use standard section headings (Experience, Education, Skills, etc.)",
    "Use standard fonts and avoid special characters or graphics",
    "Ensure consistent formatting and proper spacing",
    "Use bullet points for achievements and responsibilities",
];

const DATA_SCIENCE_TIPS: [&str; 4] = [
    "Include quantifiable achievements (e.g. 'Improved model accuracy by 15%')",
    "Mention specific tools, libraries, and technologies you've used",
    "Highlight projects with measurable business impact",
    "Tailor your resume for each specific job application",
];

const EXCELLENT_SET: [&str; 3] = [
    "Excellent ATS compatibility! Your resume is well-optimized.",
    "Continue to tailor keywords for each specific job application",
    "Keep your skills section updated with latest technologies",
];

pub fn generate(
    overall_score: u8,
    keyword_score: u8,
    skill_match: &SkillMatchResult,
) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    if overall_score < OVERALL_IMPROVEMENT_BAND {
        recommendations.push(
            "Overall ATS score needs improvement. Focus on keyword optimization and formatting."
                .to_string(),
        );
    }

    if keyword_score < KEYWORD_BAND {
        recommendations.push(
            "Include more relevant keywords from the job description in your resume.".to_string(),
        );
        recommendations
            .push("Mirror the language used in the job posting while staying truthful.".to_string());
    }

    if skill_match.match_percentage < SKILL_MATCH_BAND {
        recommendations
            .push("Highlight transferable skills that relate to job requirements.".to_string());
        recommendations.push(
            "Consider learning missing critical skills mentioned in the job description."
                .to_string(),
        );
    }

    if !skill_match.missing_skills.is_empty() {
        let top_missing: Vec<&str> = skill_match
            .missing_skills
            .iter()
            .take(MISSING_SKILLS_NAMED)
            .map(String::as_str)
            .collect();
        recommendations.push(format!("Priority skills to learn: {}", top_missing.join(", ")));
    }

    if overall_score < FORMATTING_TIPS_BAND {
        recommendations.extend(FORMATTING_TIPS.iter().map(|t| t.to_string()));
    }

    recommendations.extend(DATA_SCIENCE_TIPS.iter().map(|t| t.to_string()));

    if overall_score >= EXCELLENT_BAND {
        recommendations = EXCELLENT_SET.iter().map(|t| t.to_string()).collect();
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn match_result(percentage: f64, missing: &[&str]) -> SkillMatchResult {
        SkillMatchResult {
            matched_skills: BTreeSet::new(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            match_percentage: percentage,
            total_job_skills: missing.len(),
            total_resume_skills: 0,
            skill_levels: BTreeMap::new(),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn low_scores_trigger_band_advice_in_order() {
        let recs = generate(50, 40, &match_result(30.0, &["python", "sql"]));

        assert!(recs[0].contains("Overall ATS score needs improvement"));
        assert!(recs[1].contains("relevant keywords"));
        assert!(recs[3].contains("transferable skills"));
        assert!(recs.iter().any(|r| r.contains("Priority skills to learn: python, sql")));
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn missing_skills_name_at_most_three() {
        let recs = generate(
            82,
            90,
            &match_result(90.0, &["python", "sql", "tableau", "spark"]),
        );
        let priority = recs
            .iter()
            .find(|r| r.starts_with("Priority skills"))
            .unwrap();
        assert!(priority.contains("python, sql, tableau"));
        assert!(!priority.contains("spark"));
    }

    #[test]
    fn high_score_replaces_everything_with_congratulations() {
        let recs = generate(90, 95, &match_result(95.0, &[]));
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("Excellent ATS compatibility"));
    }

    #[test]
    fn mid_score_skips_formatting_tips_keeps_domain_tips() {
        let recs = generate(82, 85, &match_result(90.0, &[]));
        assert!(!recs.iter().any(|r| r.contains("standard fonts")));
        assert!(recs.iter().any(|r| r.contains("quantifiable achievements")));
    }

    #[test]
    fn list_never_exceeds_eight_entries() {
        let recs = generate(10, 10, &match_result(0.0, &["a", "b", "c"]));
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
    }
}

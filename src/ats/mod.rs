pub mod domain;
pub mod formatting;
pub mod keyword;
pub mod recommendations;
pub mod structure;

pub use keyword::{KeywordDensity, keyword_density};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::matcher::{self, SkillMatchResult};
use crate::structurer::StructuredResume;
use crate::taxonomy;

/// Internal fault in one sub-score computation. Never surfaced to callers:
/// each fault is folded to its documented neutral default at the sub-score
/// boundary, so scoring always completes.
#[derive(Debug, Error)]
pub enum ScoringFault {
    /// A document had no content for the computation to work with.
    #[error("empty document: {0}")]
    EmptyDocument(&'static str),

    /// No usable terms survived tokenization and stop-word removal.
    #[error("empty vocabulary")]
    EmptyVocabulary,
}

/// Neutral default for most degraded sub-scores.
const NEUTRAL_DEFAULT: f64 = 50.0;
/// Neutral default for the format sub-score and domain fallback cases.
const FORMAT_DEFAULT: f64 = 75.0;
/// Skill sub-score used when the job text names no recognizable skills.
const NO_JOB_SKILLS_DEFAULT: f64 = 75.0;

const WEIGHT_KEYWORD: f64 = 0.35;
const WEIGHT_SKILL: f64 = 0.25;
const WEIGHT_FORMAT: f64 = 0.15;
const WEIGHT_STRUCTURE: f64 = 0.15;
const WEIGHT_DOMAIN: f64 = 0.10;

/// Additional well-known technical skills folded into the ad-hoc candidate
/// list for the skill sub-score.
const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "sql",
    "r",
    "scala",
    "c++",
    "c#",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "keras",
    "matplotlib",
    "seaborn",
    "plotly",
    "tableau",
    "power bi",
    "excel",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "aws",
    "azure",
    "docker",
];

/// The combined compatibility score for one (resume, job description)
/// pair. Derived, immutable, one per analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u8,
    pub component_scores: BTreeMap<String, u8>,
    pub recommendations: Vec<String>,
}

/// Compute the weighted ATS compatibility score.
///
/// Five sub-scores are computed independently, each clamped to [0, 100];
/// a sub-score that faults is replaced by its neutral default, so this
/// always produces a complete report.
pub fn score(
    resume: &StructuredResume,
    job_description: &str,
    skill_match: &SkillMatchResult,
) -> ScoreReport {
    let keyword_score = fold(
        "keyword_match",
        keyword::keyword_score(&resume.raw_text, job_description),
        NEUTRAL_DEFAULT,
    );
    let skill_score = fold(
        "skill_match",
        skill_match_score(resume, job_description),
        NEUTRAL_DEFAULT,
    );
    let format_score = fold(
        "format_quality",
        formatting::format_score(&resume.raw_text),
        FORMAT_DEFAULT,
    );
    let structure_score = fold(
        "content_structure",
        structure::structure_score(resume),
        NEUTRAL_DEFAULT,
    );
    let domain_score = fold(
        "domain_relevance",
        domain::domain_score(&resume.raw_text, job_description),
        NEUTRAL_DEFAULT,
    );

    let overall = keyword_score * WEIGHT_KEYWORD
        + skill_score * WEIGHT_SKILL
        + format_score * WEIGHT_FORMAT
        + structure_score * WEIGHT_STRUCTURE
        + domain_score * WEIGHT_DOMAIN;
    let overall_score = overall.round().clamp(0.0, 100.0) as u8;

    let mut component_scores = BTreeMap::new();
    component_scores.insert("keyword_match".to_string(), to_component(keyword_score));
    component_scores.insert("skill_match".to_string(), to_component(skill_score));
    component_scores.insert("format_quality".to_string(), to_component(format_score));
    component_scores.insert(
        "content_structure".to_string(),
        to_component(structure_score),
    );
    component_scores.insert("domain_relevance".to_string(), to_component(domain_score));

    let recommendations = recommendations::generate(
        overall_score,
        to_component(keyword_score),
        skill_match,
    );

    ScoreReport {
        overall_score,
        component_scores,
        recommendations,
    }
}

/// Fold a sub-score result to its value or documented neutral default.
fn fold(component: &'static str, result: Result<f64, ScoringFault>, default: f64) -> f64 {
    match result {
        Ok(value) => value.clamp(0.0, 100.0),
        Err(fault) => {
            warn!(component, %fault, "sub-score degraded to neutral default");
            default
        }
    }
}

fn to_component(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Skill sub-score over a broader ad-hoc candidate list: extraction
/// vocabulary, domain keywords, and the hardcoded technical list, each
/// substring-tested against the job text. Falls back to a moderate default
/// when the job text names no recognizable skill at all.
fn skill_match_score(
    resume: &StructuredResume,
    job_description: &str,
) -> Result<f64, ScoringFault> {
    let job_lower = job_description.to_lowercase();

    let mut job_skills = std::collections::BTreeSet::new();
    let candidates = taxonomy::EXTRACTION_VOCABULARY
        .iter()
        .flat_map(|c| c.skills.iter().copied())
        .chain(
            domain::DOMAIN_BUCKETS
                .iter()
                .flat_map(|b| b.keywords.iter().copied()),
        )
        .chain(TECHNICAL_SKILLS.iter().copied());
    for candidate in candidates {
        if job_lower.contains(candidate) {
            job_skills.insert(candidate.to_string());
        }
    }

    if job_skills.is_empty() {
        return Ok(NO_JOB_SKILLS_DEFAULT);
    }

    let resume_skills: std::collections::BTreeSet<String> =
        resume.skills.iter().map(|s| s.to_lowercase()).collect();
    let (matched, _missing) = matcher::similarity::match_skills(&resume_skills, &job_skills);
    let percentage = matcher::similarity::match_percentage(matched.len(), job_skills.len());

    Ok(percentage.clamp(0.0, 100.0))
}

//! resumatch: resume-to-job matching and ATS scoring engine.
//!
//! The pipeline runs end-to-end on the calling thread with no suspension
//! points: extract text from the upload, structure it with line-oriented
//! heuristics, match the skill sets, then combine five weighted signals
//! into one compatibility score with paired recommendations. Reference
//! tables (taxonomy, synonyms, role requirements) are immutable statics,
//! so independent analyses may run concurrently without locking.

pub mod ats;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod matcher;
pub mod repositories;
pub mod structurer;
pub mod taxonomy;

pub use ats::{KeywordDensity, ScoreReport};
pub use extractor::{DocumentFormat, ExtractError, RawDocument};
pub use matcher::SkillMatchResult;
pub use structurer::StructuredResume;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Everything one analysis produces: the structured resume, the skill
/// match, the weighted score report, and the keyword-density comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub resume: StructuredResume,
    pub skill_match: SkillMatchResult,
    pub score: ScoreReport,
    pub keyword_density: BTreeMap<String, KeywordDensity>,
}

/// Run the full analysis pipeline for one (document, job description)
/// pair.
///
/// Extraction failures stop the pipeline and surface to the caller; the
/// structuring and scoring stages are fault-tolerant by construction and
/// always complete.
pub fn analyze(document: &RawDocument, job_description: &str) -> Result<AnalysisReport, ExtractError> {
    // 1. Turn the upload into UTF-8 text
    let text = extractor::extract(document)?;

    // 2. Structure the text into the canonical resume record
    let resume = structurer::structure_resume(&text);

    // 3. Match resume skills against the job description
    let skill_match = matcher::analyze_skill_match(&resume.skills, job_description);

    // 4. Combine the weighted compatibility sub-scores
    let score = ats::score(&resume, job_description, &skill_match);

    // 5. Compare the job's top terms against the resume
    let keyword_density = ats::keyword_density(&resume.raw_text, job_description);

    Ok(AnalysisReport {
        resume,
        skill_match,
        score,
        keyword_density,
    })
}

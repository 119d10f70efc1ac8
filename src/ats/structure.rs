//! Structural-completeness sub-score: an additive checklist over the
//! structured resume record.

use crate::ats::ScoringFault;
use crate::structurer::StructuredResume;

const NAME_POINTS: f64 = 15.0;
const EMAIL_POINTS: f64 = 15.0;
const PHONE_POINTS: f64 = 10.0;
const SKILLS_POINTS: f64 = 25.0;
const EXPERIENCE_POINTS: f64 = 20.0;
const EDUCATION_POINTS: f64 = 15.0;

/// Score resume completeness. The checklist sums to exactly 100 when every
/// section is present and non-sentinel. Section lists always carry at least
/// one line (a placeholder when nothing was found), so their checks pass by
/// construction; the discriminating signals are the contact fields and the
/// skill set.
pub fn structure_score(resume: &StructuredResume) -> Result<f64, ScoringFault> {
    let mut score = 0.0;

    if resume.has_name() {
        score += NAME_POINTS;
    }
    if resume.has_email() {
        score += EMAIL_POINTS;
    }
    if resume.has_phone() {
        score += PHONE_POINTS;
    }
    if !resume.skills.is_empty() {
        score += SKILLS_POINTS;
    }
    if !resume.experience.is_empty() {
        score += EXPERIENCE_POINTS;
    }
    if !resume.education.is_empty() {
        score += EDUCATION_POINTS;
    }

    Ok(score.clamp(0.0, 100.0))
}

//! Lexical skill matching between resume and job skill sets.

use std::collections::BTreeSet;

/// Character-set overlap above this ratio counts two skills as similar.
const JACCARD_THRESHOLD: f64 = 0.7;

/// Coarse lexical similarity: the shorter string (when longer than 3
/// characters) contained in the longer one, or character-set Jaccard
/// overlap above the threshold. Not an edit distance; two unrelated words
/// with similar letter composition can false-match. Documented limitation.
pub fn are_similar(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.len() > b.len() { (b, a) } else { (a, b) };
    if shorter.chars().count() > 3 && longer.contains(shorter) {
        return true;
    }

    let set_a: BTreeSet<char> = a.chars().collect();
    let set_b: BTreeSet<char> = b.chars().collect();
    let overlap = set_a.intersection(&set_b).count();
    let total = set_a.union(&set_b).count();
    overlap as f64 / total.max(1) as f64 > JACCARD_THRESHOLD
}

/// One job skill counts as covered when it equals, contains, is contained
/// in, or is similar to some resume skill.
fn covered_by(job_skill: &str, resume_skill: &str) -> bool {
    job_skill == resume_skill
        || resume_skill.contains(job_skill)
        || job_skill.contains(resume_skill)
        || are_similar(job_skill, resume_skill)
}

/// Partition job skills into matched and missing against the resume skill
/// set. The first qualifying resume skill wins; there is no scoring among
/// multiple candidates.
pub fn match_skills(
    resume_skills: &BTreeSet<String>,
    job_skills: &BTreeSet<String>,
) -> (BTreeSet<String>, Vec<String>) {
    let mut matched = BTreeSet::new();
    let mut missing = Vec::new();

    for job_skill in job_skills {
        if resume_skills.iter().any(|rs| covered_by(job_skill, rs)) {
            matched.insert(job_skill.clone());
        } else {
            missing.push(job_skill.clone());
        }
    }

    (matched, missing)
}

/// Matched count over total job skills, as a percentage rounded to one
/// decimal. The `max(1, ..)` floor defines the empty-job-skills case as 0
/// rather than leaving it undefined.
pub fn match_percentage(matched_count: usize, total_job_skills: usize) -> f64 {
    let pct = matched_count as f64 / total_job_skills.max(1) as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

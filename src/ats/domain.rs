//! Domain-relevance sub-score: how much of the job's dominant domain
//! vocabulary the resume covers.

use crate::ats::ScoringFault;

/// Score used when a domain bucket carries no keywords.
const EMPTY_BUCKET_DEFAULT: f64 = 75.0;

pub struct DomainBucket {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Domain keyword buckets in declared order. The order is contractual:
/// ties in the dominant-domain count resolve to the earlier bucket.
pub const DOMAIN_BUCKETS: &[DomainBucket] = &[
    DomainBucket {
        name: "data_science",
        keywords: &[
            "data science",
            "machine learning",
            "artificial intelligence",
            "deep learning",
            "data analysis",
            "statistical analysis",
            "predictive modeling",
            "data mining",
            "big data",
            "analytics",
            "visualization",
            "python",
            "r",
            "sql",
            "tableau",
            "power bi",
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
        ],
    },
    DomainBucket {
        name: "software_engineering",
        keywords: &[
            "software development",
            "programming",
            "coding",
            "algorithms",
            "data structures",
            "object-oriented programming",
            "agile",
            "scrum",
            "version control",
            "git",
            "testing",
            "debugging",
            "api",
            "database",
            "framework",
            "libraries",
        ],
    },
    DomainBucket {
        name: "general_it",
        keywords: &[
            "information technology",
            "technical skills",
            "problem solving",
            "troubleshooting",
            "system administration",
            "network",
            "security",
            "cloud computing",
            "aws",
            "azure",
            "devops",
            "automation",
        ],
    },
];

/// Pick the job's dominant domain by keyword hit count over the lower-cased
/// job text. First bucket in declared order wins ties; an all-zero scan
/// falls back to general_it.
fn identify_job_domain(job_text_lower: &str) -> &'static DomainBucket {
    let mut best: Option<(&'static DomainBucket, usize)> = None;
    for bucket in DOMAIN_BUCKETS {
        let hits = bucket
            .keywords
            .iter()
            .filter(|k| job_text_lower.contains(*k))
            .count();
        if best.is_none_or(|(_, best_hits)| hits > best_hits) {
            best = Some((bucket, hits));
        }
    }

    match best {
        Some((bucket, hits)) if hits > 0 => bucket,
        _ => DOMAIN_BUCKETS
            .iter()
            .find(|b| b.name == "general_it")
            .expect("general_it bucket is declared"),
    }
}

/// Fraction of the dominant domain's keywords present in the resume text,
/// as a percentage.
pub fn domain_score(resume_text: &str, job_text: &str) -> Result<f64, ScoringFault> {
    if resume_text.trim().is_empty() {
        return Err(ScoringFault::EmptyDocument("resume text"));
    }

    let resume_lower = resume_text.to_lowercase();
    let job_lower = job_text.to_lowercase();

    let bucket = identify_job_domain(&job_lower);
    if bucket.keywords.is_empty() {
        return Ok(EMPTY_BUCKET_DEFAULT);
    }

    let found = bucket
        .keywords
        .iter()
        .filter(|k| resume_lower.contains(*k))
        .count();

    Ok((found as f64 / bucket.keywords.len() as f64 * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_science_job_is_identified() {
        let bucket =
            identify_job_domain("seeking machine learning and data science expertise in python");
        assert_eq!(bucket.name, "data_science");
    }

    #[test]
    fn software_engineering_outranks_when_dominant() {
        let bucket = identify_job_domain(
            "agile scrum team practicing version control, testing and debugging of apis",
        );
        assert_eq!(bucket.name, "software_engineering");
    }

    #[test]
    fn no_domain_keywords_fall_back_to_general_it() {
        // No bucket keyword appears, including the single-letter "r".
        let bucket = identify_job_domain("baking cakes all day");
        assert_eq!(bucket.name, "general_it");
    }

    #[test]
    fn tie_resolves_to_earlier_bucket() {
        // One hit each for data_science ("python") and software_engineering
        // ("git"); the earlier bucket wins.
        let bucket = identify_job_domain("python and git");
        assert_eq!(bucket.name, "data_science");
    }

    #[test]
    fn score_is_resume_coverage_of_the_job_domain() {
        let job = "machine learning role";
        let resume = "worked on machine learning and data analysis in python with sql";
        let score = domain_score(resume, job).unwrap();

        // Five of the 21 data_science keywords appear in the resume:
        // "machine learning", "data analysis", "python", "sql", and "r"
        // (inside "worked", the boundary-free substring scan).
        let expected = 5.0 / 21.0 * 100.0;
        assert!((score - expected).abs() < 1e-6);
    }

    #[test]
    fn empty_resume_text_faults() {
        assert!(matches!(
            domain_score("", "any job"),
            Err(ScoringFault::EmptyDocument(_))
        ));
    }
}

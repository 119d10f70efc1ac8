//! Keyword similarity between resume and job description, via TF-IDF
//! cosine over exactly the two documents.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::ScoringFault;

/// Vocabulary cap for the joint fit, highest total frequency first.
const MAX_VOCABULARY: usize = 1000;

/// Tokens are runs of two or more word characters.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// English stop words removed before weighting.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

fn tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

fn term_counts(tokens: &[String]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity of the TF-IDF vectors of the two documents, fit
/// jointly on exactly these two. Smoothed IDF, L2-normalized weights.
/// Faults when either document has no usable tokens.
fn tfidf_cosine(a: &str, b: &str) -> Result<f64, ScoringFault> {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return Err(ScoringFault::EmptyVocabulary);
    }

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    // Vocabulary across both documents, capped by total frequency with ties
    // broken lexicographically.
    let mut vocabulary: Vec<&str> = counts_a
        .keys()
        .chain(counts_b.keys())
        .copied()
        .collect::<std::collections::BTreeSet<&str>>()
        .into_iter()
        .collect();
    if vocabulary.len() > MAX_VOCABULARY {
        let total = |t: &str| -> usize {
            counts_a.get(t).copied().unwrap_or(0) + counts_b.get(t).copied().unwrap_or(0)
        };
        vocabulary.sort_by(|x, y| total(y).cmp(&total(x)).then_with(|| x.cmp(y)));
        vocabulary.truncate(MAX_VOCABULARY);
    }

    let weigh = |counts: &BTreeMap<&str, usize>| -> Vec<f64> {
        vocabulary
            .iter()
            .map(|term| {
                let tf = counts.get(term).copied().unwrap_or(0) as f64;
                let df = [&counts_a, &counts_b]
                    .iter()
                    .filter(|c| c.contains_key(term))
                    .count() as f64;
                // Smoothed IDF over n = 2 documents.
                let idf = ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0;
                tf * idf
            })
            .collect()
    };

    let vec_a = l2_normalize(weigh(&counts_a));
    let vec_b = l2_normalize(weigh(&counts_b));

    Ok(vec_a.iter().zip(&vec_b).map(|(x, y)| x * y).sum())
}

fn l2_normalize(vector: Vec<f64>) -> Vec<f64> {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 {
        vector
    } else {
        vector.into_iter().map(|x| x / norm).collect()
    }
}

/// Keyword sub-score: TF-IDF cosine scaled to 0-100.
pub fn keyword_score(resume_text: &str, job_text: &str) -> Result<f64, ScoringFault> {
    let similarity = tfidf_cosine(resume_text, job_text)?;
    Ok((similarity * 100.0).clamp(0.0, 100.0))
}

/// Per-term frequency comparison for one of the job description's top
/// terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    pub job_frequency: usize,
    pub resume_frequency: usize,
    pub density_score: f64,
}

/// Terms examined from the top of the job-description frequency table.
const DENSITY_TOP_TERMS: usize = 20;
/// Terms this short carry little signal and are skipped.
const DENSITY_MIN_TERM_LEN: usize = 3;

/// Compare how often the job description's most frequent terms appear in
/// the resume. Only terms longer than three characters are reported.
pub fn keyword_density(resume_text: &str, job_text: &str) -> BTreeMap<String, KeywordDensity> {
    let job_tokens = tokens(job_text);
    let resume_tokens = tokens(resume_text);
    let job_counts = term_counts(&job_tokens);
    let resume_counts = term_counts(&resume_tokens);

    let mut ranked: Vec<(&str, usize)> = job_counts.iter().map(|(t, c)| (*t, *c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(DENSITY_TOP_TERMS)
        .filter(|(term, _)| term.chars().count() > DENSITY_MIN_TERM_LEN)
        .map(|(term, job_frequency)| {
            let resume_frequency = resume_counts.get(term).copied().unwrap_or(0);
            let density_score =
                (resume_frequency as f64 / job_frequency.max(1) as f64 * 100.0).min(100.0);
            (
                term.to_string(),
                KeywordDensity {
                    job_frequency,
                    resume_frequency,
                    density_score,
                },
            )
        })
        .collect()
}

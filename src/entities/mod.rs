use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// --- Stored rows ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: i64,
    pub filename: String,
    pub file_type: String,
    pub upload_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionRecord {
    pub id: i64,
    pub title: String,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One row of the analysis history join: scores plus the resume filename
/// and job posting it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisHistoryEntry {
    pub analysis_id: i64,
    pub ats_score: i64,
    pub skill_match_score: i64,
    pub keyword_match_score: i64,
    pub analysis_date: DateTime<Utc>,
    pub resume_filename: String,
    pub job_title: String,
    pub company: Option<String>,
}

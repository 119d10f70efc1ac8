use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::ats::ScoreReport;
use crate::entities::AnalysisHistoryEntry;
use crate::matcher::SkillMatchResult;

/// Repository for analysis results, keyed by (resume, job description)
/// pair. Skill arrays and recommendations are stored as JSON text. A fresh
/// analysis never reads this history; it exists for the host's reporting.
pub struct AnalysisRepository<'a> {
    conn: &'a Connection,
}

impl<'a> AnalysisRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert one analysis outcome and return its row id.
    pub fn save(
        &self,
        resume_id: i64,
        job_description_id: i64,
        report: &ScoreReport,
        skill_match: &SkillMatchResult,
    ) -> Result<i64> {
        let matched = serde_json::to_string(&skill_match.matched_skills)?;
        let missing = serde_json::to_string(&skill_match.missing_skills)?;
        let recommendations = serde_json::to_string(&report.recommendations)?;
        let keyword_score = report
            .component_scores
            .get("keyword_match")
            .copied()
            .unwrap_or(0);

        self.conn.execute(
            "INSERT INTO analysis_results
                 (resume_id, job_description_id, ats_score, skill_match_score,
                  keyword_match_score, matched_skills, missing_skills,
                  recommendations, analysis_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                resume_id,
                job_description_id,
                report.overall_score as i64,
                skill_match.match_percentage.round() as i64,
                keyword_score as i64,
                matched,
                missing,
                recommendations,
                Utc::now(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Most recent analyses joined with their resume filename and job
    /// posting, newest first.
    pub fn history(&self, limit: usize) -> Result<Vec<AnalysisHistoryEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT ar.id, ar.ats_score, ar.skill_match_score, ar.keyword_match_score,
                    ar.analysis_date, r.filename, jd.title, jd.company
             FROM analysis_results ar
             JOIN resumes r ON ar.resume_id = r.id
             JOIN job_descriptions jd ON ar.job_description_id = jd.id
             ORDER BY ar.analysis_date DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(AnalysisHistoryEntry {
                analysis_id: row.get(0)?,
                ats_score: row.get(1)?,
                skill_match_score: row.get(2)?,
                keyword_match_score: row.get(3)?,
                analysis_date: row.get(4)?,
                resume_filename: row.get(5)?,
                job_title: row.get(6)?,
                company: row.get(7)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

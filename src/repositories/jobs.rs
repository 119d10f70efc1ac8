use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::entities::JobDescriptionRecord;

/// Repository for job descriptions.
pub struct JobDescriptionRepository<'a> {
    conn: &'a Connection,
}

impl<'a> JobDescriptionRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert one job description and return its row id.
    pub fn save(&self, title: &str, company: Option<&str>, description: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO job_descriptions (title, company, description, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![title, company, description, Utc::now()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Stored job descriptions, newest first.
    pub fn list(&self) -> Result<Vec<JobDescriptionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, company, created_at
             FROM job_descriptions ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(JobDescriptionRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                company: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Reload the description text for a stored posting.
    pub fn get_description(&self, id: i64) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT description FROM job_descriptions WHERE id = ?1")?;
        let mut rows = stmt.query([id])?;
        Ok(rows.next()?.map(|row| row.get(0)).transpose()?)
    }
}

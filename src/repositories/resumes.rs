use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::entities::ResumeRecord;
use crate::structurer::StructuredResume;

/// Repository for uploaded resumes. Each stored row keeps the raw text and
/// a JSON blob of the structured record, keyed by filename plus upload
/// time.
pub struct ResumeRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ResumeRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert one resume and return its row id.
    pub fn save(
        &self,
        filename: &str,
        file_type: &str,
        resume: &StructuredResume,
    ) -> Result<i64> {
        let extracted_data = serde_json::to_string(resume)?;
        self.conn.execute(
            "INSERT INTO resumes (filename, file_type, raw_text, extracted_data, upload_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                filename,
                file_type,
                resume.raw_text,
                extracted_data,
                Utc::now(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Stored resumes, newest first.
    pub fn list(&self) -> Result<Vec<ResumeRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, filename, file_type, upload_date
             FROM resumes ORDER BY upload_date DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ResumeRecord {
                id: row.get(0)?,
                filename: row.get(1)?,
                file_type: row.get(2)?,
                upload_date: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Reload the structured record stored for a resume.
    pub fn get_structured(&self, id: i64) -> Result<Option<StructuredResume>> {
        let mut stmt = self
            .conn
            .prepare("SELECT extracted_data FROM resumes WHERE id = ?1")?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => {
                let blob: String = row.get(0)?;
                Ok(Some(serde_json::from_str(&blob)?))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_connection;
    use crate::structurer::structure_resume;

    #[test]
    fn save_and_reload_round_trips() {
        let conn = test_connection();
        let repo = ResumeRepository::new(&conn);
        let resume = structure_resume("Jane Doe\njane@example.com\nPython and SQL");

        let id = repo.save("jane.txt", "text", &resume).unwrap();
        let reloaded = repo.get_structured(id).unwrap().unwrap();
        assert_eq!(reloaded, resume);
    }

    #[test]
    fn list_returns_saved_resumes() {
        let conn = test_connection();
        let repo = ResumeRepository::new(&conn);
        let resume = structure_resume("Jane Doe\njane@example.com");

        repo.save("first.pdf", "pdf", &resume).unwrap();
        repo.save("second.docx", "docx", &resume).unwrap();

        let records = repo.list().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().any(|r| r.filename == "first.pdf"));
    }

    #[test]
    fn missing_resume_is_none() {
        let conn = test_connection();
        let repo = ResumeRepository::new(&conn);
        assert!(repo.get_structured(42).unwrap().is_none());
    }
}

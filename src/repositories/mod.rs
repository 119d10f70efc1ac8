pub mod analyses;
pub mod jobs;
pub mod resumes;

pub use analyses::AnalysisRepository;
pub use jobs::JobDescriptionRepository;
pub use resumes::ResumeRepository;

use rusqlite::Connection;

/// Create the schema if it does not exist yet. Each write performed by the
/// repositories is a single atomic insert; no multi-step transactions are
/// needed.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            filename TEXT NOT NULL,
            file_type TEXT NOT NULL,
            raw_text TEXT,
            extracted_data TEXT,
            upload_date TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS job_descriptions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            company TEXT,
            description TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS analysis_results (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            resume_id INTEGER NOT NULL,
            job_description_id INTEGER NOT NULL,
            ats_score INTEGER NOT NULL,
            skill_match_score INTEGER NOT NULL,
            keyword_match_score INTEGER NOT NULL,
            matched_skills TEXT NOT NULL,
            missing_skills TEXT NOT NULL,
            recommendations TEXT NOT NULL,
            analysis_date TEXT NOT NULL,
            FOREIGN KEY (resume_id) REFERENCES resumes (id),
            FOREIGN KEY (job_description_id) REFERENCES job_descriptions (id)
        );
        "#,
    )
}

#[cfg(test)]
pub(crate) fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to open in-memory database");
    init_schema(&conn).expect("Failed to create schema");
    conn
}

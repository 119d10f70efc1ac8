use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use resumatch::config::Config;
use resumatch::repositories::{
    AnalysisRepository, JobDescriptionRepository, ResumeRepository, init_schema,
};
use resumatch::{DocumentFormat, RawDocument};

/// Score a resume against a job description.
#[derive(Parser)]
#[command(name = "resumatch", version, about)]
struct Cli {
    /// Path to the resume file (.pdf, .docx or .txt)
    resume: PathBuf,

    /// Path to a text file containing the job description
    #[arg(short, long)]
    job: PathBuf,

    /// Job title used when persisting the analysis
    #[arg(long, default_value = "Untitled role")]
    title: String,

    /// Also print a learning path toward this job role (e.g. "Data Scientist")
    #[arg(long)]
    target_role: Option<String>,

    /// Emit the full analysis report as JSON
    #[arg(long)]
    json: bool,

    /// Persist the resume, job description and result to the database
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let format = DocumentFormat::from_path(&cli.resume)?;
    let bytes = fs::read(&cli.resume)
        .with_context(|| format!("failed to read resume file {}", cli.resume.display()))?;
    let job_description = fs::read_to_string(&cli.job)
        .with_context(|| format!("failed to read job description {}", cli.job.display()))?;

    let document = RawDocument::new(bytes, format);
    let report = resumatch::analyze(&document, &job_description)?;

    if cli.save {
        let conn = Connection::open(config.database_path())?;
        init_schema(&conn)?;

        let filename = cli
            .resume
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        let resume_id =
            ResumeRepository::new(&conn).save(&filename, format.as_str(), &report.resume)?;
        let job_id =
            JobDescriptionRepository::new(&conn).save(&cli.title, None, &job_description)?;
        AnalysisRepository::new(&conn).save(
            resume_id,
            job_id,
            &report.score,
            &report.skill_match,
        )?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Overall ATS score: {}/100", report.score.overall_score);
    println!();
    println!("Component scores:");
    for (component, value) in &report.score.component_scores {
        println!("  {component:<20} {value:>3}");
    }
    println!();
    println!(
        "Skill match: {:.1}% ({} of {} job skills covered)",
        report.skill_match.match_percentage,
        report.skill_match.matched_skills.len(),
        report.skill_match.total_job_skills,
    );
    if !report.skill_match.missing_skills.is_empty() {
        println!(
            "Missing skills: {}",
            report.skill_match.missing_skills.join(", ")
        );
    }
    println!();
    println!("Recommendations:");
    for recommendation in &report.score.recommendations {
        println!("  - {recommendation}");
    }

    if let Some(role) = &cli.target_role {
        println!();
        match resumatch::matcher::learning_path(role, &report.resume.skills) {
            Some(path) => {
                println!("Learning path toward {}:", path.role);
                for entry in &path.timeline {
                    println!("  {:<12} {}", entry.weeks, entry.skill);
                }
            }
            None => println!("Unknown role: {role}"),
        }
    }

    Ok(())
}

pub mod contact;
pub mod model;
pub mod sections;

#[cfg(test)]
mod tests;

pub use model::StructuredResume;

use std::collections::BTreeSet;

use crate::taxonomy;

/// Structure extracted resume text into its canonical record.
///
/// This never fails: every heuristic degrades to a placeholder or sentinel
/// value when it finds nothing, so the caller always receives a complete
/// record.
pub fn structure_resume(text: &str) -> StructuredResume {
    let text_lower = text.to_lowercase();
    let lines: Vec<&str> = text.split('\n').collect();

    StructuredResume {
        raw_text: text.to_string(),
        name: contact::extract_name(&lines),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        skills: extract_skills(&text_lower),
        education: sections::scan(&lines, &sections::EDUCATION),
        experience: sections::scan(&lines, &sections::EXPERIENCE),
        certifications: sections::scan(&lines, &sections::CERTIFICATIONS),
        projects: sections::scan(&lines, &sections::PROJECTS),
    }
}

/// Case-insensitive substring scan of the extraction vocabulary against the
/// full text. Matches are recorded in title case and deduplicated. There is
/// no word-boundary guard, so short vocabulary entries can match inside
/// unrelated words.
fn extract_skills(text_lower: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for category in taxonomy::EXTRACTION_VOCABULARY {
        for skill in category.skills {
            if text_lower.contains(skill) {
                found.insert(contact::title_case(skill));
            }
        }
    }
    found
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn skills_are_title_cased_and_deduplicated() {
        let skills = extract_skills("python, sql and more python with power bi");
        assert!(skills.contains("Python"));
        assert!(skills.contains("Sql"));
        assert!(skills.contains("Power Bi"));
        assert_eq!(skills.iter().filter(|s| *s == "Python").count(), 1);
    }

    #[test]
    fn short_vocabulary_entries_match_inside_words() {
        // "r" and "go" have no word-boundary guard; "regression" contains
        // both an "r" and triggers the machine_learning entry.
        let skills = extract_skills("experienced with regression analysis");
        assert!(skills.contains("R"));
        assert!(skills.contains("Regression"));
    }

    #[test]
    fn every_list_field_is_non_empty() {
        let resume = structure_resume("completely unstructured text");
        assert!(!resume.education.is_empty());
        assert!(!resume.experience.is_empty());
        assert!(!resume.certifications.is_empty());
        assert!(!resume.projects.is_empty());
    }

    #[test]
    fn contact_scenario() {
        let resume =
            structure_resume("John Smith\njohn.smith@email.com\n555-123-4567\nPython SQL Tableau");
        assert_eq!(resume.name, "John Smith");
        assert_eq!(resume.email, "john.smith@email.com");
        assert_eq!(resume.phone, "555-123-4567");
        assert!(resume.skills.contains("Python"));
        assert!(resume.skills.contains("Sql"));
        assert!(resume.skills.contains("Tableau"));
    }
}

use std::fs;

use crate::structurer::structure_resume;

#[test]
fn structures_full_sample_resume() {
    let text = fs::read_to_string("src/structurer/tests/fixtures/sample_resume.txt")
        .expect("Failed to read test fixture");

    let resume = structure_resume(&text);

    assert_eq!(resume.name, "John Smith");
    assert_eq!(resume.email, "john.smith@email.com");
    assert_eq!(resume.phone, "(555) 123-4567");

    for skill in [
        "Python",
        "Sql",
        "Tableau",
        "Excel",
        "Power Bi",
        "Machine Learning",
        "Scikit-Learn",
    ] {
        assert!(resume.skills.contains(skill), "missing skill {skill}");
    }

    assert_eq!(
        resume.education,
        vec![
            "Master of Science in Statistics, State University",
            "Bachelor of Science in Mathematics",
        ]
    );

    assert_eq!(resume.experience.len(), 3);
    assert!(resume.experience[0].contains("Acme Insurance"));
    assert!(resume.experience[1].contains("churn models"));

    // Lines containing "certificate" read as section headers and are
    // skipped; only the AWS line survives.
    assert_eq!(resume.certifications, vec!["AWS Certified Cloud Practitioner"]);

    assert_eq!(resume.projects.len(), 2);
    assert!(resume.projects[0].contains("churn prediction"));
}

#[test]
fn sparse_text_degrades_to_placeholders() {
    let resume = structure_resume("just one line of text without anything useful");

    assert_eq!(resume.name, "Name not found");
    assert_eq!(resume.email, "Email not found");
    assert_eq!(resume.phone, "Phone not found");
    assert_eq!(
        resume.education,
        vec!["Education information not clearly identified"]
    );
    assert_eq!(
        resume.experience,
        vec!["Experience information not clearly identified"]
    );
    assert_eq!(resume.certifications, vec!["No certifications found"]);
    assert_eq!(resume.projects, vec!["No projects clearly identified"]);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn structure_resume_never_panics(text in ".*") {
            let resume = structure_resume(&text);
            // List fields always carry at least one entry.
            prop_assert!(!resume.education.is_empty());
            prop_assert!(!resume.experience.is_empty());
            prop_assert!(!resume.certifications.is_empty());
            prop_assert!(!resume.projects.is_empty());
        }
    }
}

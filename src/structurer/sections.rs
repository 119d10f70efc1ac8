//! Section scanners for education, experience, certifications and projects.
//!
//! Each field type gets a single-pass line scanner with two states. A line
//! containing one of the field's own header keywords switches the scanner
//! to `Inside` (the header line itself is never collected); a line
//! containing a header keyword of a different field terminates the scan
//! early. A section therefore ends at the next recognized header or at end
//! of document, never at a fixed length.

/// How a non-blank line is judged while inside the section.
enum Accept {
    /// Line must contain one of these keywords.
    Keywords(&'static [&'static str]),
    /// Keyword match, or the trimmed line is longer than the given count.
    KeywordsOrLongerThan(&'static [&'static str], usize),
    /// Trimmed line is longer than the given character count.
    LongerThan(usize),
    /// Every non-blank line is collected.
    Any,
}

pub struct SectionProfile {
    /// Keywords whose presence marks a line as this section's header.
    headers: &'static [&'static str],
    /// Header keywords of other fields that terminate this scan.
    terminators: &'static [&'static str],
    accept: Accept,
    /// Single explanatory line used when nothing was collected.
    placeholder: &'static str,
}

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
    "b.tech",
    "m.tech",
    "b.sc",
    "m.sc",
    "mba",
    "diploma",
    "certification",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "worked",
    "internship",
    "project",
    "developed",
    "analyzed",
    "implemented",
    "designed",
    "built",
    "created",
];

pub const EDUCATION: SectionProfile = SectionProfile {
    headers: &["education", "qualification", "academic"],
    terminators: &["experience", "skill", "project", "certification"],
    accept: Accept::Keywords(EDUCATION_KEYWORDS),
    placeholder: "Education information not clearly identified",
};

pub const EXPERIENCE: SectionProfile = SectionProfile {
    headers: &["experience", "employment", "work history", "career"],
    terminators: &["education", "skill", "project", "certification"],
    accept: Accept::KeywordsOrLongerThan(EXPERIENCE_KEYWORDS, 20),
    placeholder: "Experience information not clearly identified",
};

pub const CERTIFICATIONS: SectionProfile = SectionProfile {
    headers: &["certification", "certificate", "license"],
    terminators: &["education", "experience", "skill", "project"],
    accept: Accept::Any,
    placeholder: "No certifications found",
};

pub const PROJECTS: SectionProfile = SectionProfile {
    headers: &["project", "portfolio"],
    terminators: &["education", "experience", "skill", "certification"],
    accept: Accept::LongerThan(10),
    placeholder: "No projects clearly identified",
};

#[derive(PartialEq)]
enum State {
    Outside,
    Inside,
}

/// Run one section scanner over the resume lines. Always returns at least
/// one entry: the placeholder stands in when nothing was collected.
pub fn scan(lines: &[&str], profile: &SectionProfile) -> Vec<String> {
    let mut state = State::Outside;
    let mut collected = Vec::new();

    for line in lines {
        let lower = line.to_lowercase();
        let lower = lower.trim();

        if profile.headers.iter().any(|k| lower.contains(k)) {
            state = State::Inside;
            continue;
        }

        if state == State::Inside && profile.terminators.iter().any(|k| lower.contains(k)) {
            break;
        }

        let trimmed = line.trim();
        if state == State::Inside && !trimmed.is_empty() && accepts(&profile.accept, lower, trimmed)
        {
            collected.push(trimmed.to_string());
        }
    }

    if collected.is_empty() {
        vec![profile.placeholder.to_string()]
    } else {
        collected
    }
}

fn accepts(rule: &Accept, lower: &str, trimmed: &str) -> bool {
    match rule {
        Accept::Keywords(keywords) => keywords.iter().any(|k| lower.contains(k)),
        Accept::KeywordsOrLongerThan(keywords, min_len) => {
            keywords.iter().any(|k| lower.contains(k)) || trimmed.chars().count() > *min_len
        }
        Accept::LongerThan(min_len) => trimmed.chars().count() > *min_len,
        Accept::Any => true,
    }
}

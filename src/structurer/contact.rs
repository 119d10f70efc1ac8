//! Contact-field heuristics: candidate name, email address, phone number.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::structurer::model::{EMAIL_NOT_FOUND, NAME_NOT_FOUND, PHONE_NOT_FOUND};

/// Only the first few lines are considered for the candidate's name.
const NAME_SCAN_LINES: usize = 5;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s\.]+$").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Phone patterns in fixed priority order: parenthesized area code with
/// separators, bare 10-digit with optional country code, then
/// separator-delimited 10-digit with optional country code.
static PHONE_RES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(\+\d{1,3}\s?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
        Regex::new(r"(\+\d{1,3}\s?)?\d{10}").unwrap(),
        Regex::new(r"(\+\d{1,3}\s?)?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap(),
    ]
});

/// Scan the top of the resume for a line that looks like a person's name:
/// 2-4 tokens, letters/spaces/periods only, no '@', no digits. The first
/// qualifying line wins and is rendered in title case.
pub fn extract_name(lines: &[&str]) -> String {
    for line in lines.iter().take(NAME_SCAN_LINES) {
        let line = line.trim();
        let tokens = line.split_whitespace().count();
        if !line.is_empty()
            && (2..=4).contains(&tokens)
            && NAME_RE.is_match(line)
            && !line.contains('@')
            && !line.chars().any(|c| c.is_ascii_digit())
        {
            return title_case(line);
        }
    }
    NAME_NOT_FOUND.to_string()
}

/// First email-shaped token anywhere in the text.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
}

/// First match of the first phone pattern that matches anywhere.
pub fn extract_phone(text: &str) -> String {
    for pattern in PHONE_RES.iter() {
        if let Some(m) = pattern.find(text) {
            return m.as_str().to_string();
        }
    }
    PHONE_NOT_FOUND.to_string()
}

/// Title-case a string: a letter is upper-cased when the preceding
/// character is not a letter, lower-cased otherwise ("power bi" becomes
/// "Power Bi", "o'brien" becomes "O'Brien").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_from_first_lines() {
        let lines = vec!["john smith", "Data Scientist Resume"];
        assert_eq!(extract_name(&lines), "John Smith");
    }

    #[test]
    fn name_skips_lines_with_digits_or_email() {
        let lines = vec![
            "john@example.com",
            "123 Main Street",
            "Jane A. Doe",
        ];
        assert_eq!(extract_name(&lines), "Jane A. Doe");
    }

    #[test]
    fn name_requires_two_to_four_tokens() {
        assert_eq!(extract_name(&["Madonna"]), NAME_NOT_FOUND);
        assert_eq!(
            extract_name(&["one two three four five"]),
            NAME_NOT_FOUND
        );
    }

    #[test]
    fn name_only_scans_first_five_lines() {
        let lines = vec!["1", "2", "3", "4", "5", "John Smith"];
        assert_eq!(extract_name(&lines), NAME_NOT_FOUND);
    }

    #[test]
    fn email_first_match_wins() {
        let text = "Contact: jane.doe@example.com or backup@example.org";
        assert_eq!(extract_email(text), "jane.doe@example.com");
        assert_eq!(extract_email("no contact info"), EMAIL_NOT_FOUND);
    }

    #[test]
    fn phone_patterns_in_priority_order() {
        assert_eq!(extract_phone("call (555) 123-4567 today"), "(555) 123-4567");
        assert_eq!(extract_phone("call 555-123-4567 today"), "555-123-4567");
        assert_eq!(extract_phone("call 5551234567 today"), "5551234567");
        assert_eq!(extract_phone("no number here"), PHONE_NOT_FOUND);
    }

    #[test]
    fn phone_with_country_code() {
        let phone = extract_phone("reach me at +1 555-123-4567");
        assert!(phone.contains("555-123-4567"));
    }

    #[test]
    fn title_case_follows_non_letter_boundaries() {
        assert_eq!(title_case("john smith"), "John Smith");
        assert_eq!(title_case("power bi"), "Power Bi");
        assert_eq!(title_case("o'brien"), "O'Brien");
        assert_eq!(title_case("SQL"), "Sql");
    }
}

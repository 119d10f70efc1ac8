use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sentinel values for contact fields that could not be located. Consumers
/// compare against these instead of branching on empty strings.
pub const NAME_NOT_FOUND: &str = "Name not found";
pub const EMAIL_NOT_FOUND: &str = "Email not found";
pub const PHONE_NOT_FOUND: &str = "Phone not found";

/// The canonical structured record extracted from one resume.
///
/// Every list-valued field is guaranteed non-empty: when a section cannot
/// be identified it holds a single explanatory placeholder line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub raw_text: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: BTreeSet<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<String>,
}

impl StructuredResume {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty() && self.name != NAME_NOT_FOUND
    }

    pub fn has_email(&self) -> bool {
        self.email.contains('@')
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty() && self.phone != PHONE_NOT_FOUND
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use resumatch::structurer::structure_resume;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data).to_string();

    // The structurer should never panic regardless of input, and its list
    // fields always carry at least one entry
    let resume = structure_resume(&text);
    assert!(!resume.education.is_empty());
    assert!(!resume.experience.is_empty());
    assert!(!resume.certifications.is_empty());
    assert!(!resume.projects.is_empty());
});

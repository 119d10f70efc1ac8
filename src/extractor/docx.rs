use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::extractor::errors::ExtractError;

/// Extract text from a DOCX byte stream. A DOCX file is a zip archive whose
/// main document part lives at `word/document.xml`; paragraph text is
/// concatenated in document order, one paragraph per line.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::ExtractionFailed(format!("unreadable docx archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| ExtractError::ExtractionFailed("missing word/document.xml".to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::ExtractionFailed(format!("unreadable document part: {e}")))?;

    Ok(paragraph_text(&xml))
}

/// Collect the contents of every `<w:t>` run, emitting a newline at each
/// paragraph close (`</w:p>`).
fn paragraph_text(xml: &str) -> String {
    let mut out = String::new();
    let mut rest = xml;

    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else { break };
        let tag = &after[..close];
        let body = &after[close + 1..];

        if tag == "/w:p" {
            out.push('\n');
            rest = body;
        } else if tag == "w:t" || tag.starts_with("w:t ") {
            match body.find("</w:t>") {
                Some(end) => {
                    out.push_str(&unescape(&body[..end]));
                    rest = &body[end..];
                }
                None => rest = body,
            }
        } else {
            rest = body;
        }
    }

    out
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_with_document_xml(document_xml: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn paragraphs_become_lines() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>John Smith</w:t></w:r></w:p>
            <w:p><w:r><w:t>Data </w:t></w:r><w:r><w:t>Scientist</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let bytes = docx_with_document_xml(xml);

        let text = extract(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "John Smith");
        assert_eq!(lines[1], "Data Scientist");
    }

    #[test]
    fn preserve_space_attribute_is_handled() {
        let xml = r#"<w:p><w:r><w:t xml:space="preserve">Skills: </w:t></w:r><w:r><w:t>Python</w:t></w:r></w:p>"#;
        let bytes = docx_with_document_xml(xml);

        let text = extract(&bytes).unwrap();
        assert_eq!(text, "Skills: Python\n");
    }

    #[test]
    fn entities_are_unescaped() {
        let xml = "<w:p><w:r><w:t>R &amp; D &lt;team&gt;</w:t></w:r></w:p>";
        let bytes = docx_with_document_xml(xml);

        let text = extract(&bytes).unwrap();
        assert_eq!(text, "R & D <team>\n");
    }

    #[test]
    fn not_a_zip_fails() {
        let result = extract(b"plain text, not an archive");
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }

    #[test]
    fn zip_without_document_part_fails() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            writer.start_file("unrelated.txt", options).unwrap();
            writer.write_all(b"hello").unwrap();
            writer.finish().unwrap();
        }

        let result = extract(&cursor.into_inner());
        assert!(matches!(result, Err(ExtractError::ExtractionFailed(_))));
    }
}

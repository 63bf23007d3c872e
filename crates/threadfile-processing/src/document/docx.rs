//! Raw-text extraction for Word (OOXML) documents.
//!
//! Reads `word/document.xml` out of the ZIP container and walks it with
//! `quick-xml`. Text runs are concatenated, tabs and line breaks inside a run
//! become `\t` and `\n`, and paragraphs are separated by a blank line.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use threadfile_core::constants::MAX_DOCX_XML_BYTES;
use zip::result::ZipError;
use zip::ZipArchive;

use super::{ExtractError, TextExtractor};

const DOCUMENT_PART: &str = "word/document.xml";
const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        let xml = read_document_part(data, MAX_DOCX_XML_BYTES)?;
        document_text(&xml)
    }
}

/// Inflate the document part, refusing anything larger than `limit` bytes.
/// The declared size is checked first; the read itself is capped as well
/// since the declared size comes from the archive.
fn read_document_part(data: &[u8], limit: usize) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingPart(DOCUMENT_PART)),
        Err(e) => return Err(e.into()),
    };

    let too_large = ExtractError::PartTooLarge {
        part: DOCUMENT_PART,
        limit,
    };
    if part.size() > limit as u64 {
        return Err(too_large);
    }

    let mut xml = Vec::new();
    (&mut part).take(limit as u64 + 1).read_to_end(&mut xml)?;
    if xml.len() > limit {
        return Err(too_large);
    }

    String::from_utf8(xml).map_err(|_| ExtractError::InvalidEncoding(DOCUMENT_PART))
}

fn document_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    // Tabs and breaks only count inside a run; `w:tab` also declares tab
    // stops under `w:pPr`.
    let mut run_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => run_depth += 1,
                b"t" => in_text_run = true,
                b"tab" if run_depth > 0 => current.push('\t'),
                b"br" | b"cr" if run_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if run_depth > 0 => current.push('\t'),
                b"br" | b"cr" if run_depth > 0 => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(e) if in_text_run => {
                current.push_str(&e.unescape()?);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join(PARAGRAPH_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_and_runs() {
        let data = docx_with_body(
            r#"<w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p><w:p><w:r><w:t>Second</w:t></w:r></w:p>"#,
        );
        let text = DocxExtractor.extract(&data).unwrap();
        assert_eq!(text, "Hello world\n\nSecond");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let data = docx_with_body(
            r#"<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t xml:space="preserve">C &amp; D</w:t></w:r></w:p>"#,
        );
        let text = DocxExtractor.extract(&data).unwrap();
        assert_eq!(text, "A\tB\nC & D");
    }

    #[test]
    fn test_tab_stop_definitions_are_not_text() {
        let data = docx_with_body(
            r#"<w:p><w:r><w:t>Intro</w:t></w:r></w:p><w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/><w:tab w:val="right" w:pos="9360"/></w:tabs></w:pPr><w:r><w:t>Name</w:t><w:tab/><w:t>Value</w:t></w:r></w:p>"#,
        );
        let text = DocxExtractor.extract(&data).unwrap();
        assert_eq!(text, "Intro\n\nName\tValue");
    }

    #[test]
    fn test_oversized_document_part_is_refused() {
        let body = format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", "a".repeat(8 * 1024));
        let data = docx_with_body(&body);

        let result = read_document_part(&data, 1024);
        assert!(matches!(
            result,
            Err(ExtractError::PartTooLarge { limit: 1024, .. })
        ));

        assert!(read_document_part(&data, 64 * 1024).is_ok());
    }

    #[test]
    fn test_empty_paragraph_keeps_spacing() {
        let data = docx_with_body(
            r#"<w:p><w:r><w:t>One</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Two</w:t></w:r></w:p>"#,
        );
        let text = DocxExtractor.extract(&data).unwrap();
        assert_eq!(text, "One\n\n\n\nTwo");
    }

    #[test]
    fn test_missing_document_part() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", FileOptions::default())
            .unwrap();
        writer.write_all(b"<styles/>").unwrap();
        let data = writer.finish().unwrap().into_inner();

        let result = DocxExtractor.extract(&data);
        assert!(matches!(result, Err(ExtractError::MissingPart(_))));
    }

    #[test]
    fn test_not_a_zip() {
        let result = DocxExtractor.extract(b"plain text, not a zip archive");
        assert!(matches!(result, Err(ExtractError::Archive(_))));
    }
}

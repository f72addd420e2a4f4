use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{DocumentFormat, ExtractedText};
use crate::error::{ExtractError, Result};

const DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxFormat;

impl DocumentFormat for DocxFormat {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["docx"]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<ExtractedText> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractError::ExtractionFailed(format!("invalid DOCX container: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| ExtractError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}")))?
            .read_to_string(&mut xml)?;

        Ok(ExtractedText::new(document_xml_to_text(&xml)?))
    }
}

/// Flattens WordprocessingML body text: one line per paragraph.
pub fn document_xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;
    // <w:tab/> inside <w:tabs> is a tab stop definition, not content
    let mut in_tab_stops = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = true,
                b"w:tabs" => in_tab_stops = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:tabs" => in_tab_stops = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" if !in_tab_stops => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_run_text => {
                let unescaped = e
                    .unescape()
                    .map_err(|e| ExtractError::ExtractionFailed(format!("bad DOCX text: {e}")))?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::ExtractionFailed(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}

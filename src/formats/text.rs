use super::{DocumentFormat, ExtractedText};
use crate::error::Result;

pub struct TextFormat;

impl DocumentFormat for TextFormat {
    fn name(&self) -> &'static str {
        "text"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["txt", "text", "md"]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<ExtractedText> {
        let text = String::from_utf8_lossy(bytes);
        // Strip a UTF-8 BOM left by some editors
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        Ok(ExtractedText::new(text.replace("\r\n", "\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_normalizes_line_endings() {
        let extracted = TextFormat.extract_text(b"Jane Doe\r\njane@example.com\r\n").unwrap();
        assert_eq!(extracted.text, "Jane Doe\njane@example.com\n");
        assert_eq!(extracted.page_count, None);
    }

    #[test]
    fn test_extract_strips_bom() {
        let extracted = TextFormat.extract_text("\u{feff}Skills".as_bytes()).unwrap();
        assert_eq!(extracted.text, "Skills");
    }

    #[test]
    fn test_extract_tolerates_invalid_utf8() {
        let extracted = TextFormat.extract_text(&[b'R', b'u', 0xff, b's', b't']).unwrap();
        assert!(extracted.text.starts_with("Ru"));
        assert!(extracted.text.ends_with("st"));
    }
}

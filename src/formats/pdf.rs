use super::{DocumentFormat, ExtractedText};
use crate::error::{ExtractError, Result};

pub struct PdfFormat;

impl DocumentFormat for PdfFormat {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn file_extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<ExtractedText> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::ExtractionFailed(format!("PDF text extraction: {e}")))?;

        let page_count = pages.len();
        Ok(ExtractedText::with_pages(pages.join("\n"), page_count))
    }
}

pub mod docx;
pub mod pdf;
pub mod text;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ExtractError, Result};

/// Plain text pulled out of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    /// Only formats with a fixed page layout report this.
    pub page_count: Option<usize>,
}

impl ExtractedText {
    pub fn new(text: String) -> Self {
        Self {
            text,
            page_count: None,
        }
    }

    pub fn with_pages(text: String, page_count: usize) -> Self {
        Self {
            text,
            page_count: Some(page_count),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub trait DocumentFormat: Send + Sync {
    fn name(&self) -> &'static str;
    fn file_extensions(&self) -> &[&'static str];
    fn extract_text(&self, bytes: &[u8]) -> Result<ExtractedText>;
}

pub struct FormatRegistry {
    formats: HashMap<String, Arc<dyn DocumentFormat>>,
    extension_map: HashMap<String, String>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            formats: HashMap::new(),
            extension_map: HashMap::new(),
        };

        registry.register(Arc::new(pdf::PdfFormat));
        registry.register(Arc::new(docx::DocxFormat));
        registry.register(Arc::new(text::TextFormat));

        registry
    }

    pub fn register(&mut self, format: Arc<dyn DocumentFormat>) {
        let name = format.name().to_string();
        for ext in format.file_extensions() {
            self.extension_map.insert(ext.to_string(), name.clone());
        }
        self.formats.insert(name, format);
    }

    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentFormat>> {
        self.formats.get(name).cloned()
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentFormat>> {
        self.extension_map
            .get(&ext.to_lowercase())
            .and_then(|name| self.formats.get(name))
            .cloned()
    }

    pub fn get_for_file(&self, path: &Path) -> Option<Arc<dyn DocumentFormat>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    /// Reads the file and runs it through the format matching its extension.
    pub fn extract_file(&self, path: &Path) -> Result<ExtractedText> {
        let format = self.get_for_file(path).ok_or_else(|| {
            ExtractError::UnsupportedFormat(format!(
                "{} (expected one of: {})",
                path.display(),
                self.supported_extensions().join(", ")
            ))
        })?;

        let bytes = std::fs::read(path)?;
        tracing::debug!("Extracting {} ({} bytes) as {}", path.display(), bytes.len(), format.name());

        let extracted = format.extract_text(&bytes)?;
        if extracted.is_blank() {
            return Err(ExtractError::ExtractionFailed(format!(
                "no text found in {}",
                path.display()
            )));
        }
        Ok(extracted)
    }

    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extension_map.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! The extraction entry point and the parser seam behind it.

use std::path::Path;

use chrono::NaiveDate;

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::extract::extract_fields;
use crate::formats::FormatRegistry;
use crate::record::ExtractedResumeRecord;
use crate::resources::{ensure_resources_ready, Resources};

/// Turns a resume document into a record.
pub trait DocumentParser: Send + Sync {
    fn parse(&self, path: &Path) -> Result<ExtractedResumeRecord>;
}

/// Resolves `path` to a readable file and delegates to `parser`.
///
/// The parser's record and errors are passed through untouched.
pub fn extract(parser: &dyn DocumentParser, path: &Path) -> Result<ExtractedResumeRecord> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| ExtractError::DocumentNotFound(path.display().to_string()))?;
    if !metadata.is_file() {
        return Err(ExtractError::DocumentNotFound(path.display().to_string()));
    }

    parser.parse(path)
}

/// Built-in engine: format registry, bundled resources and regex heuristics.
pub struct HeuristicParser {
    registry: FormatRegistry,
    resources: Resources,
    reference_date: Option<NaiveDate>,
}

impl HeuristicParser {
    pub fn new(resources: Resources) -> Self {
        Self {
            registry: FormatRegistry::new(),
            resources,
            reference_date: None,
        }
    }

    /// Provisions resources as configured, then builds the engine.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        let resources = ensure_resources_ready(&config.data_dir, config.skills_file.as_deref())?;
        Ok(Self::new(resources))
    }

    /// Fixes the date that "Present" resolves to.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}

impl DocumentParser for HeuristicParser {
    fn parse(&self, path: &Path) -> Result<ExtractedResumeRecord> {
        let document = self.registry.extract_file(path)?;
        let today = self
            .reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let fields = extract_fields(&document, &self.resources, today);
        tracing::debug!(
            "Extracted {} skills from {}",
            fields.skills.len(),
            path.display()
        );

        match serde_json::to_value(fields)? {
            serde_json::Value::Object(map) => Ok(ExtractedResumeRecord::from(map)),
            other => Err(ExtractError::ExtractionFailed(format!(
                "engine produced a non-object record: {other}"
            ))),
        }
    }
}

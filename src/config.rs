use std::path::PathBuf;

use crate::resources::ResourceStore;

/// Settings for building the heuristic engine.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Where the bundled resources are provisioned.
    pub data_dir: PathBuf,
    /// Replaces the bundled skills vocabulary when set.
    pub skills_file: Option<PathBuf>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            data_dir: ResourceStore::default_root(),
            skills_file: None,
        }
    }
}

pub mod config;
pub mod error;
pub mod extract;
pub mod formats;
pub mod parser;
pub mod record;
pub mod resources;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result, SetupError};
pub use extract::{extract_fields, ResumeFields, SectionKind, Sections};
pub use formats::{DocumentFormat, ExtractedText, FormatRegistry};
pub use parser::{extract, DocumentParser, HeuristicParser};
pub use record::ExtractedResumeRecord;
pub use resources::{ensure_resources_ready, ResourceStore, Resources, SkillVocabulary};

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use resume_extract::{extract, ExtractorConfig, HeuristicParser, ResourceStore};

#[derive(Parser)]
#[command(name = "resume-extract")]
#[command(about = "Extract structured fields from a resume and print them as JSON")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Parse a PDF resume
    resume-extract resume.pdf

    # Use a custom skills vocabulary
    resume-extract resume.docx --skills-file skills.csv

    # Pretty-print with jq
    resume-extract resume.pdf | jq .
"#)]
pub struct Cli {
    /// Path to the resume document (pdf, docx or txt)
    pub file: PathBuf,

    /// Directory where the stopword corpus and skills vocabulary are provisioned
    #[arg(long, env = "RESUME_EXTRACT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// CSV file of skills that replaces the bundled vocabulary
    #[arg(long, env = "RESUME_EXTRACT_SKILLS_FILE")]
    pub skills_file: Option<PathBuf>,
}

impl Cli {
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            data_dir: self
                .data_dir
                .clone()
                .unwrap_or_else(ResourceStore::default_root),
            skills_file: self.skills_file.clone(),
        }
    }
}

/// Provisions resources, extracts the record and writes it as one JSON line.
pub fn run_extract(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.extractor_config();
    let parser = HeuristicParser::from_config(&config).with_context(|| {
        format!("Failed to prepare resources in {}", config.data_dir.display())
    })?;

    let record = extract(&parser, &cli.file)
        .with_context(|| format!("Failed to extract {}", cli.file.display()))?;
    let json = record.to_json()?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;

    Ok(())
}

//! Linguistic resources used by the heuristic engine
//!
//! The stopword corpus and the skills vocabulary ship inside the binary and
//! are provisioned into a data directory before the first extraction, the
//! same way an NLP toolkit downloads its corpora once per machine.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use xxhash_rust::xxh3::xxh3_64;

use crate::error::SetupError;
use crate::extract::tokens::normalize_phrase;

pub const STOPWORDS_PATH: &str = "corpora/stopwords/english";
pub const SKILLS_PATH: &str = "skills.csv";

struct BundledResource {
    relative_path: &'static str,
    contents: &'static str,
}

const BUNDLED: &[BundledResource] = &[
    BundledResource {
        relative_path: STOPWORDS_PATH,
        contents: include_str!("data/stopwords_english.txt"),
    },
    BundledResource {
        relative_path: SKILLS_PATH,
        contents: include_str!("data/skills.csv"),
    },
];

/// Outcome of a provisioning pass.
#[derive(Debug, Default)]
pub struct ProvisionReport {
    pub written: Vec<PathBuf>,
    pub unchanged: usize,
}

/// Data directory holding the provisioned resources.
pub struct ResourceStore {
    root: PathBuf,
}

impl ResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn default_root() -> PathBuf {
        std::env::temp_dir().join("resume-extract")
    }

    /// Writes every bundled resource that is missing or whose checksum no
    /// longer matches the bundled copy. Safe to call repeatedly.
    pub fn provision(&self) -> Result<ProvisionReport, SetupError> {
        self.provision_resources(BUNDLED.iter())
    }

    /// Same as [`provision`](Self::provision), but leaves the bundled skills
    /// vocabulary alone when a custom one replaces it. The custom file may
    /// live at the managed path and must never be overwritten.
    pub fn provision_for(&self, skills_file: Option<&Path>) -> Result<ProvisionReport, SetupError> {
        match skills_file {
            Some(_) => self.provision_resources(
                BUNDLED.iter().filter(|r| r.relative_path != SKILLS_PATH),
            ),
            None => self.provision(),
        }
    }

    fn provision_resources<'a>(
        &self,
        resources: impl Iterator<Item = &'a BundledResource>,
    ) -> Result<ProvisionReport, SetupError> {
        let mut report = ProvisionReport::default();

        for resource in resources {
            let path = self.root.join(resource.relative_path);
            let expected = xxh3_64(resource.contents.as_bytes());

            match fs::read(&path) {
                Ok(existing) if xxh3_64(&existing) == expected => {
                    report.unchanged += 1;
                    continue;
                }
                Ok(_) => {
                    tracing::warn!("Resource {} is corrupted, re-provisioning", path.display());
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => return Err(SetupError::Read { path, source }),
            }

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| SetupError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, resource.contents).map_err(|source| SetupError::Write {
                path: path.clone(),
                source,
            })?;

            tracing::info!("Provisioned {}", path.display());
            report.written.push(path);
        }

        Ok(report)
    }

    /// Loads the provisioned resources. A custom skills file replaces the
    /// bundled vocabulary.
    pub fn load(&self, skills_file: Option<&Path>) -> Result<Resources, SetupError> {
        let stopwords_path = self.root.join(STOPWORDS_PATH);
        let stopwords = parse_stopwords(&read_resource(&stopwords_path)?);
        if stopwords.is_empty() {
            return Err(SetupError::EmptyResource(stopwords_path));
        }

        let skills_path = skills_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.join(SKILLS_PATH));
        let skills = SkillVocabulary::from_csv(&read_resource(&skills_path)?);
        if skills.is_empty() {
            return Err(SetupError::EmptyResource(skills_path));
        }

        tracing::debug!(
            "Loaded {} stopwords and {} skills from {}",
            stopwords.len(),
            skills.len(),
            self.root.display()
        );

        Ok(Resources { stopwords, skills })
    }
}

/// Provisions the bundled resources under `data_dir` and loads them.
pub fn ensure_resources_ready(
    data_dir: &Path,
    skills_file: Option<&Path>,
) -> Result<Resources, SetupError> {
    let store = ResourceStore::new(data_dir);
    store.provision_for(skills_file)?;
    store.load(skills_file)
}

fn read_resource(path: &Path) -> Result<String, SetupError> {
    fs::read_to_string(path).map_err(|source| SetupError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_stopwords(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

#[derive(Debug, Clone)]
pub struct Resources {
    pub stopwords: HashSet<String>,
    pub skills: SkillVocabulary,
}

impl Resources {
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}

/// Skills keyed by their normalized token sequence.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    entries: HashMap<String, String>,
    max_tokens: usize,
}

impl SkillVocabulary {
    /// Comma and/or newline separated entries; `#` starts a comment line.
    pub fn from_csv(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(|line| line.split(','));
        Self::from_entries(entries)
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut vocabulary = Self::default();
        for entry in entries {
            let canonical = entry.trim();
            let key = normalize_phrase(canonical);
            if key.is_empty() {
                continue;
            }
            let token_count = key.split(' ').count();
            vocabulary.max_tokens = vocabulary.max_tokens.max(token_count);
            vocabulary
                .entries
                .entry(key)
                .or_insert_with(|| canonical.to_string());
        }
        vocabulary
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_provision_writes_missing_resources() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());

        let report = store.provision().unwrap();

        assert_eq!(report.written.len(), BUNDLED.len());
        assert!(temp_dir.path().join(STOPWORDS_PATH).is_file());
        assert!(temp_dir.path().join(SKILLS_PATH).is_file());
    }

    #[test]
    fn test_provision_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());

        store.provision().unwrap();
        let second = store.provision().unwrap();

        assert!(second.written.is_empty());
        assert_eq!(second.unchanged, BUNDLED.len());
    }

    #[test]
    fn test_provision_repairs_corrupted_resource() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());
        store.provision().unwrap();

        let stopwords = temp_dir.path().join(STOPWORDS_PATH);
        fs::write(&stopwords, "garbage").unwrap();

        let report = store.provision().unwrap();
        assert_eq!(report.written, vec![stopwords.clone()]);
        assert!(fs::read_to_string(&stopwords).unwrap().contains("themselves"));
    }

    #[test]
    fn test_load_without_provision_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());

        let err = store.load(None).unwrap_err();
        assert!(matches!(err, SetupError::Read { .. }));
    }

    #[test]
    fn test_ensure_resources_ready_loads_bundled_data() {
        let temp_dir = TempDir::new().unwrap();
        let resources = ensure_resources_ready(temp_dir.path(), None).unwrap();

        assert!(resources.is_stopword("The"));
        assert!(!resources.is_stopword("python"));
        assert_eq!(resources.skills.lookup("machine learning"), Some("Machine Learning"));
        assert_eq!(resources.skills.lookup("c++"), Some("C++"));
    }

    #[test]
    fn test_custom_skills_file_replaces_bundled() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("my_skills.csv");
        fs::write(&custom, "# team vocabulary\nZig, Nix\nBazel\n").unwrap();

        let resources = ensure_resources_ready(&temp_dir.path().join("data"), Some(&custom)).unwrap();

        assert_eq!(resources.skills.len(), 3);
        assert_eq!(resources.skills.lookup("bazel"), Some("Bazel"));
        assert!(resources.skills.lookup("python").is_none());
    }

    #[test]
    fn test_custom_skills_file_at_managed_path_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join(SKILLS_PATH);
        fs::write(&custom, "Kafka\n").unwrap();

        let resources = ensure_resources_ready(temp_dir.path(), Some(&custom)).unwrap();

        assert_eq!(fs::read_to_string(&custom).unwrap(), "Kafka\n");
        assert_eq!(resources.skills.len(), 1);
        assert_eq!(resources.skills.lookup("kafka"), Some("Kafka"));
        assert!(temp_dir.path().join(STOPWORDS_PATH).is_file());
    }

    #[test]
    fn test_provision_for_custom_skills_skips_bundled_vocabulary() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());
        let custom = temp_dir.path().join("team.csv");

        let report = store.provision_for(Some(&custom)).unwrap();

        assert_eq!(report.written, vec![temp_dir.path().join(STOPWORDS_PATH)]);
        assert!(!temp_dir.path().join(SKILLS_PATH).exists());
    }

    #[test]
    fn test_empty_skills_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("empty.csv");
        fs::write(&custom, " , \n").unwrap();

        let err = ensure_resources_ready(temp_dir.path(), Some(&custom)).unwrap_err();
        assert!(matches!(err, SetupError::EmptyResource(p) if p == custom));
    }

    #[test]
    fn test_vocabulary_keeps_first_spelling() {
        let vocabulary = SkillVocabulary::from_entries(["PostgreSQL", "postgresql", "Ruby on Rails"]);

        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.lookup("postgresql"), Some("PostgreSQL"));
        assert_eq!(vocabulary.max_tokens(), 3);
    }
}

//! Sample registry: the fixed, ordered catalog of showcase programs.

use std::collections::HashMap;

use serde::Deserialize;
use shared::{
    domain::{ArtifactRule, SampleEntry, SampleId},
    error::ShowcaseError,
    protocol::SampleSummary,
};
use tracing::debug;

mod builtin;

use builtin::BUILTIN_SAMPLES;

/// Read-only after construction. Construction is the only place the
/// non-empty and unique-id invariants are checked; every accessor relies on them.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<SampleEntry>,
    index: HashMap<SampleId, usize>,
    artifacts: ArtifactRule,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    artifacts: ArtifactRule,
    #[serde(default)]
    samples: Vec<SampleEntry>,
}

impl Registry {
    pub fn new(entries: Vec<SampleEntry>, artifacts: ArtifactRule) -> Result<Self, ShowcaseError> {
        if entries.is_empty() {
            return Err(ShowcaseError::EmptyCatalog);
        }
        artifacts.validate()?;

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(ShowcaseError::DuplicateSampleId(entry.id.clone()));
            }
        }

        debug!(
            samples = entries.len(),
            artifact_dir = %artifacts.directory,
            artifact_ext = %artifacts.extension,
            "sample registry built"
        );

        Ok(Self {
            entries,
            index,
            artifacts,
        })
    }

    /// Registry over the shipped sample table.
    pub fn builtin() -> Result<Self, ShowcaseError> {
        let entries = BUILTIN_SAMPLES
            .iter()
            .map(|sample| {
                Ok(SampleEntry {
                    id: SampleId::parse(sample.id)?,
                    title: sample.title.to_string(),
                    source_text: sample.source_text.to_string(),
                    expected_output: sample.expected_output.to_string(),
                })
            })
            .collect::<Result<Vec<_>, ShowcaseError>>()?;
        Self::new(entries, ArtifactRule::default())
    }

    /// Parses a catalog file:
    ///
    /// ```toml
    /// [artifacts]
    /// directory = "artifacts"
    /// extension = "ll"
    ///
    /// [[samples]]
    /// id = "test1"
    /// title = "FOR-DO loop 1..5"
    /// source_text = "PROGRAM TEST1; ..."
    /// expected_output = "1\n2\n"
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, ShowcaseError> {
        let file: CatalogFile =
            toml::from_str(raw).map_err(|e| ShowcaseError::CatalogParse(e.to_string()))?;
        Self::new(file.samples, file.artifacts)
    }

    pub fn all(&self) -> &[SampleEntry] {
        &self.entries
    }

    pub fn first(&self) -> &SampleEntry {
        &self.entries[0]
    }

    pub fn find(&self, id: &str) -> Option<&SampleEntry> {
        self.position(id).map(|position| &self.entries[position])
    }

    /// Like [`Registry::find`], but treats absence as an error.
    pub fn get(&self, id: &str) -> Result<&SampleEntry, ShowcaseError> {
        self.find(id)
            .ok_or_else(|| ShowcaseError::UnknownSample(id.to_string()))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn entry_at(&self, position: usize) -> Option<&SampleEntry> {
        self.entries.get(position)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn artifact_rule(&self) -> &ArtifactRule {
        &self.artifacts
    }

    /// Path of the entry's artifact relative to the deployment base path.
    pub fn artifact_path(&self, entry: &SampleEntry) -> String {
        self.artifacts.relative_path(&entry.id)
    }

    pub fn download_label(&self, entry: &SampleEntry) -> String {
        self.artifacts.file_name(&entry.id)
    }

    pub fn summaries(&self) -> Vec<SampleSummary> {
        self.entries
            .iter()
            .map(|entry| SampleSummary {
                id: entry.id.clone(),
                title: entry.title.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

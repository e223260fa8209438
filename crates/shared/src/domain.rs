use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

/// Stable catalog key of a sample, e.g. `test1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SampleId(String);

impl SampleId {
    /// Ids end up as path segments (`artifacts/{id}.ll`, `samples/{id}/`), so they
    /// must be non-empty and limited to `[A-Za-z0-9_-]`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ShowcaseError> {
        let raw = raw.into();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(raw))
        } else {
            Err(ShowcaseError::InvalidSampleId(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SampleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SampleId {
    type Error = ShowcaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SampleId> for String {
    fn from(value: SampleId) -> Self {
        value.0
    }
}

impl PartialEq<str> for SampleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SampleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One catalog item. The artifact path is not stored here; it is derived from
/// `id` through the registry's [`ArtifactRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEntry {
    pub id: SampleId,
    pub title: String,
    pub source_text: String,
    pub expected_output: String,
}

/// Naming rule mapping a sample id to its precomputed artifact file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactRule {
    pub directory: String,
    pub extension: String,
}

impl Default for ArtifactRule {
    fn default() -> Self {
        Self {
            directory: "artifacts".into(),
            extension: "ll".into(),
        }
    }
}

impl ArtifactRule {
    /// The directory becomes part of served paths and route patterns: only
    /// `[A-Za-z0-9._-]` segments separated by `/`, no `.`/`..` segments. The
    /// extension must be non-empty ASCII alphanumerics.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        let directory = self.directory.trim_matches('/');
        if !directory.is_empty() {
            for segment in directory.split('/') {
                let valid = !segment.is_empty()
                    && segment != "."
                    && segment != ".."
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
                if !valid {
                    return Err(ShowcaseError::InvalidArtifactRule(format!(
                        "directory '{}' has invalid segment '{segment}'",
                        self.directory
                    )));
                }
            }
        }

        if self.extension.is_empty() || !self.extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ShowcaseError::InvalidArtifactRule(format!(
                "extension '{}' must be ASCII alphanumeric",
                self.extension
            )));
        }
        Ok(())
    }

    /// `{id}.{extension}`, also used as the human download label.
    pub fn file_name(&self, id: &SampleId) -> String {
        format!("{id}.{}", self.extension)
    }

    /// `{directory}/{id}.{extension}`, relative to the deployment base path.
    pub fn relative_path(&self, id: &SampleId) -> String {
        let directory = self.directory.trim_matches('/');
        if directory.is_empty() {
            self.file_name(id)
        } else {
            format!("{directory}/{}", self.file_name(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_id_rejects_path_characters() {
        assert!(SampleId::parse("test1").is_ok());
        assert!(SampleId::parse("for-loop_2").is_ok());
        assert!(matches!(
            SampleId::parse(""),
            Err(ShowcaseError::InvalidSampleId(_))
        ));
        assert!(SampleId::parse("../etc").is_err());
        assert!(SampleId::parse("a b").is_err());
    }

    #[test]
    fn sample_id_deserializes_through_validation() {
        let id: SampleId = serde_json::from_str("\"test3\"").expect("id");
        assert_eq!(id, "test3");
        assert!(serde_json::from_str::<SampleId>("\"bad/id\"").is_err());
    }

    #[test]
    fn default_rule_maps_id_to_ll_file_under_artifacts() {
        let rule = ArtifactRule::default();
        let id = SampleId::parse("test1").expect("id");
        assert_eq!(rule.file_name(&id), "test1.ll");
        assert_eq!(rule.relative_path(&id), "artifacts/test1.ll");
    }

    #[test]
    fn rule_rejects_route_and_traversal_characters() {
        assert!(ArtifactRule::default().validate().is_ok());
        for directory in ["ir*", "a:b", "../up", "a//b", "sp ace", "./x"] {
            let rule = ArtifactRule {
                directory: directory.into(),
                extension: "ll".into(),
            };
            assert!(
                matches!(rule.validate(), Err(ShowcaseError::InvalidArtifactRule(_))),
                "{directory:?} should be rejected"
            );
        }

        let nested = ArtifactRule {
            directory: "/build/ir.v1/".into(),
            extension: "ll".into(),
        };
        assert!(nested.validate().is_ok());

        let bad_ext = ArtifactRule {
            directory: "artifacts".into(),
            extension: "l*".into(),
        };
        assert!(bad_ext.validate().is_err());
    }

    #[test]
    fn rule_directory_slashes_are_trimmed() {
        let rule = ArtifactRule {
            directory: "/ir/".into(),
            extension: "ll".into(),
        };
        let id = SampleId::parse("test2").expect("id");
        assert_eq!(rule.relative_path(&id), "ir/test2.ll");

        let flat = ArtifactRule {
            directory: String::new(),
            extension: "bc".into(),
        };
        assert_eq!(flat.relative_path(&id), "test2.bc");
    }
}

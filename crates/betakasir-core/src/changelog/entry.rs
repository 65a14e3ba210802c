//! Changelog entry records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{ChangelogError, VersionError};
use crate::version::SemanticVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
}

impl ReleaseType {
    /// Kind of bump from `previous` to `next`; `None` unless `next` is newer.
    pub fn between(previous: &SemanticVersion, next: &SemanticVersion) -> Option<Self> {
        if next <= previous {
            None
        } else if next.major != previous.major {
            Some(Self::Major)
        } else if next.minor != previous.minor {
            Some(Self::Minor)
        } else {
            Some(Self::Patch)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    Feature,
    Improvement,
    #[serde(alias = "fix")]
    Bugfix,
    Security,
    /// Categories this client does not know yet.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeItem {
    #[serde(alias = "type")]
    pub category: ChangeCategory,
    pub text: String,
}

/// One release in the changelog.
///
/// `version` keeps the identifier exactly as stored so merges can compare
/// it the way the store does; `semantic_version` parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub id: String,
    pub version: String,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub release_type: ReleaseType,
    #[serde(default)]
    pub changes: Vec<ChangeItem>,
}

impl ChangelogEntry {
    pub fn semantic_version(&self) -> Result<SemanticVersion, VersionError> {
        SemanticVersion::parse(&self.version)
    }
}

/// Changelog record as held in the store, before validation.
///
/// Every field is optional on the wire; `TryFrom` enforces what a
/// `ChangelogEntry` requires. The version text is kept as stored once it
/// parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangelogDocument {
    pub id: String,
    pub version: String,
    pub date: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub release_type: Option<ReleaseType>,
    pub changes: Vec<ChangeItem>,
}

impl TryFrom<ChangelogDocument> for ChangelogEntry {
    type Error = ChangelogError;

    fn try_from(doc: ChangelogDocument) -> Result<Self, Self::Error> {
        SemanticVersion::parse(&doc.version)?;

        if doc.id.trim().is_empty() {
            return Err(ChangelogError::MissingField { field: "id" });
        }
        if doc.title.trim().is_empty() {
            return Err(ChangelogError::MissingField { field: "title" });
        }
        let release_type = doc
            .release_type
            .ok_or(ChangelogError::MissingField { field: "type" })?;
        let date = NaiveDate::parse_from_str(doc.date.trim(), "%Y-%m-%d")
            .map_err(|_| ChangelogError::InvalidDate { value: doc.date.clone() })?;

        Ok(ChangelogEntry {
            id: doc.id,
            version: doc.version,
            date,
            title: doc.title,
            description: doc.description,
            release_type,
            changes: doc.changes,
        })
    }
}

/// A fetched document that did not become a `ChangelogEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedDocument {
    pub index: usize,
    pub reason: String,
}

/// Decode and validate fetched documents, keeping order. Rejected documents
/// are returned alongside the entries rather than dropped silently.
pub fn parse_documents(
    documents: &[serde_json::Value],
) -> (Vec<ChangelogEntry>, Vec<RejectedDocument>) {
    let mut entries = Vec::with_capacity(documents.len());
    let mut rejected = Vec::new();

    for (index, doc) in documents.iter().enumerate() {
        let decoded = ChangelogDocument::deserialize(doc)
            .map_err(|e| e.to_string())
            .and_then(|doc| ChangelogEntry::try_from(doc).map_err(|e| e.to_string()));
        match decoded {
            Ok(entry) => entries.push(entry),
            Err(reason) => rejected.push(RejectedDocument { index, reason }),
        }
    }

    if !rejected.is_empty() {
        warn!(
            rejected = rejected.len(),
            total = documents.len(),
            "Skipped malformed changelog documents"
        );
    }
    (entries, rejected)
}

/// Entry as typed into the admin changelog editor, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangelogDraft {
    pub id: String,
    pub version: String,
    pub date: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub release_type: Option<ReleaseType>,
    pub changes: Vec<ChangeItem>,
}

impl ChangelogDraft {
    /// Validate and normalize for saving. The version is stored in canonical
    /// form; an empty id becomes `v<version>`; a missing release type is
    /// derived from `previous` when given, otherwise `patch`.
    pub fn validate(
        self,
        previous: Option<&SemanticVersion>,
    ) -> Result<ChangelogEntry, ChangelogError> {
        let version = SemanticVersion::parse(&self.version)?;

        if self.title.trim().is_empty() {
            return Err(ChangelogError::MissingField { field: "title" });
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            ChangelogError::InvalidDate {
                value: self.date.clone(),
            }
        })?;

        if let Some(index) = self.changes.iter().position(|c| c.text.trim().is_empty()) {
            return Err(ChangelogError::EmptyChange { index });
        }

        let release_type = self
            .release_type
            .or_else(|| previous.and_then(|prev| ReleaseType::between(prev, &version)))
            .unwrap_or(ReleaseType::Patch);

        let id = if self.id.trim().is_empty() {
            format!("v{version}")
        } else {
            self.id.trim().to_string()
        };

        Ok(ChangelogEntry {
            id,
            version: version.canonical(),
            date,
            title: self.title.trim().to_string(),
            description: self.description,
            release_type,
            changes: self.changes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(version: &str) -> ChangelogDraft {
        ChangelogDraft {
            version: version.to_string(),
            date: "2024-06-01".to_string(),
            title: "Faster checkout".to_string(),
            changes: vec![ChangeItem {
                category: ChangeCategory::Improvement,
                text: "Receipt prints quicker".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn draft_normalizes_version_and_id() {
        let entry = draft("1.02.0").validate(None).unwrap();
        assert_eq!(entry.version, "1.2.0");
        assert_eq!(entry.id, "v1.2.0");
        assert_eq!(entry.release_type, ReleaseType::Patch);
    }

    #[test]
    fn draft_release_type_from_previous() {
        let prev = SemanticVersion::new(1, 1, 10);
        let entry = draft("1.2.0").validate(Some(&prev)).unwrap();
        assert_eq!(entry.release_type, ReleaseType::Minor);
    }

    #[test]
    fn draft_with_bad_version_is_rejected() {
        assert!(matches!(
            draft("1.2").validate(None),
            Err(ChangelogError::InvalidVersion(_))
        ));
    }

    #[test]
    fn draft_with_bad_date_is_rejected() {
        let mut d = draft("1.2.0");
        d.date = "01/06/2024".to_string();
        assert!(matches!(d.validate(None), Err(ChangelogError::InvalidDate { .. })));
    }

    #[test]
    fn draft_with_empty_change_is_rejected() {
        let mut d = draft("1.2.0");
        d.changes.push(ChangeItem {
            category: ChangeCategory::Bugfix,
            text: " ".to_string(),
        });
        assert_eq!(d.validate(None), Err(ChangelogError::EmptyChange { index: 1 }));
    }

    #[test]
    fn document_keeps_stored_version_text() {
        let doc = ChangelogDocument {
            id: "v1.02.0".to_string(),
            version: "1.02.0".to_string(),
            date: "2024-06-01".to_string(),
            title: "Padded".to_string(),
            release_type: Some(ReleaseType::Minor),
            ..Default::default()
        };
        let entry = ChangelogEntry::try_from(doc).unwrap();
        assert_eq!(entry.version, "1.02.0");
    }

    #[test]
    fn document_without_type_is_rejected() {
        let doc = ChangelogDocument {
            id: "x".to_string(),
            version: "1.2.0".to_string(),
            date: "2024-06-01".to_string(),
            title: "No type".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ChangelogEntry::try_from(doc),
            Err(ChangelogError::MissingField { field: "type" })
        );
    }

    #[test]
    fn unknown_category_decodes_as_other() {
        let item: ChangeItem =
            serde_json::from_str(r#"{"category":"performance","text":"x"}"#).unwrap();
        assert_eq!(item.category, ChangeCategory::Other);
    }

    #[test]
    fn release_type_between() {
        let v = |s: &str| SemanticVersion::parse(s).unwrap();
        assert_eq!(ReleaseType::between(&v("1.2.2"), &v("2.0.0")), Some(ReleaseType::Major));
        assert_eq!(ReleaseType::between(&v("1.2.2"), &v("1.2.3")), Some(ReleaseType::Patch));
        assert_eq!(ReleaseType::between(&v("1.2.2"), &v("1.2.2")), None);
    }
}

//! ChangelogMerger: fetched entries first, then fallback entries filling the gaps.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::version::SemanticVersion;

use super::entry::ChangelogEntry;

/// How two version identifiers are judged equal during de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionKey {
    /// String equality on the identifier as stored.
    #[default]
    Exact,
    /// Parse to `SemanticVersion` and compare canonical forms, so `"1.02.0"`
    /// matches `"1.2.0"`. Unparseable identifiers fall back to their trimmed text.
    Canonical,
}

impl VersionKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Some(Self::Exact),
            "canonical" => Some(Self::Canonical),
            _ => None,
        }
    }

    pub fn key(&self, version: &str) -> String {
        match self {
            Self::Exact => version.to_string(),
            Self::Canonical => SemanticVersion::parse(version)
                .map(|v| v.canonical())
                .unwrap_or_else(|_| version.trim().to_string()),
        }
    }
}

/// Merge with exact string comparison of versions.
pub fn merge(fetched: &[ChangelogEntry], fallback: &[ChangelogEntry]) -> Vec<ChangelogEntry> {
    merge_with(fetched, fallback, VersionKey::Exact)
}

/// Fetched entries in their order, followed by every fallback entry whose
/// version is not already present, in fallback order. With nothing fetched
/// the result is the fallback list.
///
/// The first occurrence of a version wins, so the result never holds two
/// entries with the same key even if an input repeats one. This applies to
/// the fallback list too: with nothing fetched, a repeated fallback version
/// appears once.
pub fn merge_with(
    fetched: &[ChangelogEntry],
    fallback: &[ChangelogEntry],
    key: VersionKey,
) -> Vec<ChangelogEntry> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut merged = Vec::with_capacity(fetched.len() + fallback.len());

    let mut duplicates = 0usize;
    for entry in fetched {
        if seen.insert(key.key(&entry.version)) {
            merged.push(entry.clone());
        } else {
            duplicates += 1;
        }
    }
    let fetched_kept = merged.len();

    for entry in fallback {
        if seen.insert(key.key(&entry.version)) {
            merged.push(entry.clone());
        }
    }

    debug!(
        fetched = fetched_kept,
        fetched_duplicates = duplicates,
        from_fallback = merged.len() - fetched_kept,
        "Changelog merged"
    );
    merged
}

/// Entry with the greatest parseable version. Ties keep the first
/// occurrence; entries whose version does not parse are ignored.
pub fn latest_entry(entries: &[ChangelogEntry]) -> Option<&ChangelogEntry> {
    let mut best: Option<(SemanticVersion, &ChangelogEntry)> = None;
    for entry in entries {
        let Ok(version) = entry.semantic_version() else {
            continue;
        };
        let newer = best.as_ref().map_or(true, |(current, _)| version > *current);
        if newer {
            best = Some((version, entry));
        }
    }
    best.map(|(_, entry)| entry)
}

//! Changelog documents, admin drafts, and merge behavior.

use betakasir_core::changelog::fallback::bundled;
use betakasir_core::changelog::{
    latest_entry, merge, merge_with, parse_documents, ChangeCategory, ChangelogDraft,
    ChangelogEntry, ReleaseType, VersionKey,
};
use betakasir_core::errors::{error_code, ChangelogError};
use betakasir_core::KasirErrorCode;
use serde_json::json;

fn live_entry(version: &str) -> ChangelogEntry {
    let doc = json!({
        "id": format!("doc-{version}"),
        "version": version,
        "date": "2024-12-01",
        "title": format!("Live {version}"),
        "type": "patch",
        "changes": [{ "category": "bugfix", "text": "Fix" }]
    });
    serde_json::from_value(doc).unwrap()
}

#[test]
fn empty_fetch_shows_bundled_list() {
    let fallback = bundled();
    assert_eq!(merge(&[], &fallback), fallback);
}

#[test]
fn fetched_first_then_gap_filling() {
    let fetched = vec![live_entry("1.3.0"), live_entry("1.2.2")];
    let fallback = bundled();
    let merged = merge(&fetched, &fallback);

    assert_eq!(merged[0].id, "doc-1.3.0");
    assert_eq!(merged[1].id, "doc-1.2.2");
    let rest: Vec<&str> = merged[2..].iter().map(|e| e.version.as_str()).collect();
    assert_eq!(rest, vec!["1.2.1", "1.2.0", "1.1.10", "1.1.9"]);
}

#[test]
fn merge_is_deterministic() {
    let fetched = vec![live_entry("1.2.1")];
    let fallback = bundled();
    assert_eq!(merge(&fetched, &fallback), merge(&fetched, &fallback));
}

#[test]
fn canonical_key_matches_padded_versions() {
    let fetched = vec![live_entry("1.02.0")];
    let fallback = bundled();

    let exact = merge_with(&fetched, &fallback, VersionKey::Exact);
    let canonical = merge_with(&fetched, &fallback, VersionKey::Canonical);

    assert_eq!(exact.len(), fallback.len() + 1);
    assert_eq!(canonical.len(), fallback.len());
    assert!(canonical.iter().all(|e| e.version != "1.2.0"));
}

#[test]
fn documents_decode_and_report_rejects() {
    let docs = vec![
        json!({"id":"a","version":"1.2.3","date":"2024-12-01","title":"A","type":"minor"}),
        json!({"id":"b","version":"1.2.4","date":"yesterday","title":"B","type":"patch"}),
        json!({"id":"c","version":"1.2.5","date":"2024-12-03","title":"C","type":"patch",
               "changes":[{"type":"feature","text":"New"},{"category":"docs","text":"Guide"}]}),
    ];
    let (entries, rejected) = parse_documents(&docs);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].release_type, ReleaseType::Minor);
    assert!(entries[0].changes.is_empty());
    assert_eq!(entries[1].changes[0].category, ChangeCategory::Feature);
    assert_eq!(entries[1].changes[1].category, ChangeCategory::Other);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].index, 1);
}

#[test]
fn draft_blocks_malformed_version() {
    let draft = ChangelogDraft {
        version: "1.3".to_string(),
        date: "2024-12-01".to_string(),
        title: "Next".to_string(),
        ..Default::default()
    };
    let err = draft.validate(None).unwrap_err();
    assert!(matches!(err, ChangelogError::InvalidVersion(_)));
    assert_eq!(err.error_code(), error_code::INVALID_CHANGELOG_ENTRY);
}

#[test]
fn draft_requires_title() {
    let draft = ChangelogDraft {
        version: "1.3.0".to_string(),
        date: "2024-12-01".to_string(),
        ..Default::default()
    };
    assert_eq!(
        draft.validate(None),
        Err(ChangelogError::MissingField { field: "title" })
    );
}

#[test]
fn draft_derives_release_type_from_latest() {
    let fallback = bundled();
    let previous = latest_entry(&fallback)
        .and_then(|e| e.semantic_version().ok())
        .unwrap();
    let draft = ChangelogDraft {
        version: "2.0.0".to_string(),
        date: "2025-01-10".to_string(),
        title: "BetaKasir 2".to_string(),
        ..Default::default()
    };
    let entry = draft.validate(Some(&previous)).unwrap();
    assert_eq!(entry.release_type, ReleaseType::Major);
    assert_eq!(entry.id, "v2.0.0");
}

#[test]
fn latest_of_bundled_is_first() {
    let fallback = bundled();
    assert_eq!(latest_entry(&fallback).map(|e| e.version.as_str()), Some("1.2.2"));
}

#[test]
fn documents_with_malformed_versions_are_rejected() {
    let docs = vec![
        json!({"id":"short","version":"1.2","date":"2024-12-01","title":"Short","type":"patch"}),
        json!({"id":"blank","version":"","date":"2024-12-02","title":"Blank","type":"patch"}),
        json!({"id":"ok","version":"1.2.3","date":"2024-12-03","title":"Ok","type":"patch"}),
    ];
    let (entries, rejected) = parse_documents(&docs);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "ok");
    let indexes: Vec<usize> = rejected.iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![0, 1]);
    assert!(rejected[0].reason.contains("version"));

    let merged = merge(&entries, &[]);
    assert!(merged.iter().all(|e| e.semantic_version().is_ok()));
}

//! Changelog entries and the fetched/fallback merge.
//!
//! ## Components
//! - **entry**: `ChangelogEntry`, store document validation, admin draft validation
//! - **merger**: fetched-first merge with gap-filling from the fallback list
//! - **fallback**: the list bundled with the client

pub mod entry;
pub mod fallback;
pub mod merger;

pub use entry::{
    parse_documents, ChangeCategory, ChangeItem, ChangelogDocument, ChangelogDraft,
    ChangelogEntry, RejectedDocument, ReleaseType,
};
pub use merger::{latest_entry, merge, merge_with, VersionKey};

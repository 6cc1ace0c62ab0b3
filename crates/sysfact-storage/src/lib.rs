//! Artifact-pair persistence for received fact submissions.
//!
//! Each accepted submission is written as two files sharing a base name of
//! `{caller}_{YYYY-MM-DD}`: a `.csv` holding the verbatim request body and a
//! `.json` holding the indented projection of the decoded record. A second
//! submission from the same caller on the same date overwrites the pair
//! (last write wins; no locking, no versioning).

pub mod error;


use chrono::NaiveDate;
use error::{Result, StorageError};
use std::fs;
use std::path::{Path, PathBuf};
use sysfact_common::types::SystemFactRecord;

/// Validates a caller identifier for use as a filename component.
///
/// The identifier comes from the network peer address and is untrusted.
/// Empty strings, path separators, NUL bytes and the `.`/`..` components are
/// rejected so the identifier can never escape the storage root.
pub fn sanitize_caller_id(id: &str) -> Result<&str> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return Err(StorageError::InvalidCallerId { id: id.to_string() });
    }
    Ok(id)
}

/// Computes the shared base filename for an artifact pair.
///
/// Naming is deterministic: the same caller and date always produce the same
/// base, which is what gives resubmissions their overwrite semantics.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sysfact_storage::base_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(base_name("10.0.0.5:443", date).unwrap(), "10.0.0.5:443_2024-03-01");
/// ```
pub fn base_name(caller_id: &str, date: NaiveDate) -> Result<String> {
    let id = sanitize_caller_id(caller_id)?;
    Ok(format!("{id}_{}", date.format("%Y-%m-%d")))
}

/// Paths of a written artifact pair.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Filesystem-backed store for submission artifacts.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Opens a store rooted at `root`, creating the directory if absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the artifact pair for one submission.
    ///
    /// The CSV file gets the original raw bytes, not a re-serialization of
    /// the parsed record, so the persisted wire content is exact. The two
    /// writes are independent: if the JSON marshal or write fails after the
    /// CSV write succeeded, the CSV file stays on disk and the error is
    /// reported to the caller (accepted partial-failure state, no rollback).
    pub fn write_pair(
        &self,
        caller_id: &str,
        date: NaiveDate,
        raw_csv: &[u8],
        record: &SystemFactRecord,
    ) -> Result<ArtifactPaths> {
        let base = base_name(caller_id, date)?;

        let csv_path = self.root.join(format!("{base}.csv"));
        fs::write(&csv_path, raw_csv)?;

        let json_path = self.root.join(format!("{base}.json"));
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(&json_path, json)?;

        tracing::debug!(base = %base, "Artifact pair written");
        Ok(ArtifactPaths {
            csv: csv_path,
            json: json_path,
        })
    }
}

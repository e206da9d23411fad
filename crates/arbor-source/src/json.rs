//! JSON snapshot source.
//!
//! Reads a snapshot exported from the hosted store as a JSON document of the
//! form `{"people": [...], "relationships": [...]}`, with the store's column
//! names on each record.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{FamilySource, Snapshot, SourceError};

use arbor_core::model::{Person, Relationship};

/// A file-backed snapshot source.
///
/// The file is read and parsed eagerly at construction time, so later
/// fetches cannot fail and always return the same records.
#[derive(Debug, Clone)]
pub struct JsonSource {
    snapshot: Snapshot,
}

impl JsonSource {
    /// Opens and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read and
    /// [`SourceError::Json`] if its content is not a valid snapshot document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Reading snapshot file");

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a snapshot from a JSON string.
    pub fn parse(content: &str) -> Result<Self, SourceError> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        debug!(
            people_count = snapshot.people.len(),
            relationships_count = snapshot.relationships.len();
            "Snapshot parsed",
        );

        Ok(Self { snapshot })
    }
}

impl FamilySource for JsonSource {
    fn fetch_all_people(&self) -> Result<Vec<Person>, SourceError> {
        Ok(self.snapshot.people.clone())
    }

    fn fetch_all_relationships(&self) -> Result<Vec<Relationship>, SourceError> {
        Ok(self.snapshot.relationships.clone())
    }
}

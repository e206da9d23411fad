//! Snapshot sources for Arbor family data.
//!
//! The layout engine is a pure function over an immutable snapshot of people
//! and relationships; this crate provides the ways of obtaining such a
//! snapshot. The [`FamilySource`] trait mirrors the hosted store's read
//! surface, with two implementations:
//!
//! - [`json::JsonSource`] reads a snapshot exported from the store as JSON
//! - [`memory::MemorySource`] serves an in-memory snapshot, including a
//!   deterministic built-in sample family
//!
//! Which source backs a given run is entirely the caller's decision; the
//! engine itself never reaches out to a source.

pub mod json;
pub mod memory;

mod error;

pub use error::SourceError;

use serde::{Deserialize, Serialize};

use arbor_core::model::{Person, Relationship};

/// An immutable snapshot of the family store.
///
/// This is also the JSON wire format read by [`json::JsonSource`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All person records.
    #[serde(default)]
    pub people: Vec<Person>,

    /// All relationship records.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Snapshot {
    /// Creates a snapshot from the given records.
    pub fn new(people: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self {
            people,
            relationships,
        }
    }

    /// Returns true if the snapshot contains no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Read access to a family store.
///
/// Implementations return owned record lists so the caller holds a stable
/// snapshot for the duration of a layout computation.
pub trait FamilySource {
    /// Fetches all person records.
    fn fetch_all_people(&self) -> Result<Vec<Person>, SourceError>;

    /// Fetches all relationship records.
    fn fetch_all_relationships(&self) -> Result<Vec<Relationship>, SourceError>;

    /// Fetches both record lists as one snapshot.
    fn fetch_snapshot(&self) -> Result<Snapshot, SourceError> {
        Ok(Snapshot::new(
            self.fetch_all_people()?,
            self.fetch_all_relationships()?,
        ))
    }
}

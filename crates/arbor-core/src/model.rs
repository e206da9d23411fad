//! Genealogy domain model.
//!
//! This module contains the value types a layout request is computed from:
//! people and the typed pairwise relationships between them. The serde field
//! names follow the hosted store's table schema (`full_name`, `person_id`,
//! `related_person_id`, `type`), so snapshots exported from the store
//! deserialize directly.
//!
//! # Pipeline Position
//!
//! ```text
//! Snapshot (people + relationships)
//!     ↓ normalize
//! FamilyGraph (adjacency indexes)
//!     ↓ layout
//! FamilyLayout (positioned nodes + connectors)
//!     ↓ export
//! SVG
//! ```

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// A person record.
///
/// The birth year is carried for sorting and display only; layout
/// correctness never depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier of this person.
    pub id: Id,

    /// Display name.
    #[serde(rename = "full_name")]
    pub name: String,

    /// Birth year, used for sorting and display.
    #[serde(rename = "birth_year")]
    pub birth_year: i32,
}

impl Person {
    /// Creates a new person record.
    pub fn new(id: Id, name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            id,
            name: name.into(),
            birth_year,
        }
    }
}

/// A directed relationship record between two people.
///
/// Relationships are normally stored as a complementary pair (`A→B PARENT`
/// and `B→A CHILD`), but a record appearing in only one direction must be
/// tolerated; the normalizer resolves both conventions to the same adjacency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier of this relationship record.
    pub id: Id,

    /// The person this record belongs to.
    #[serde(rename = "person_id")]
    pub source: Id,

    /// The person the record points at.
    #[serde(rename = "related_person_id")]
    pub target: Id,

    /// How `source` relates to `target`.
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
}

impl Relationship {
    /// Creates a new relationship record.
    pub fn new(id: Id, source: Id, target: Id, kind: RelationshipKind) -> Self {
        Self {
            id,
            source,
            target,
            kind,
        }
    }
}

/// The closed set of relationship kinds the store records.
///
/// `Unknown` absorbs unrecognized kind strings so that a snapshot containing
/// a newer kind still deserializes; the layout engine ignores such records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    /// `source` is a parent of `target`.
    Parent,

    /// `source` is a child of `target`.
    Child,

    /// `source` and `target` are siblings.
    Sibling,

    /// `source` and `target` are spouses.
    Spouse,

    /// An unrecognized kind value, preserved but never laid out.
    #[serde(other)]
    Unknown,
}

impl RelationshipKind {
    /// Returns true for kinds that hold in both directions regardless of
    /// which direction was physically stored.
    pub fn is_symmetric(self) -> bool {
        matches!(self, Self::Sibling | Self::Spouse)
    }
}

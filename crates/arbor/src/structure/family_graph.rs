//! Normalized family graph built from raw relationship records.
//!
//! This module provides [`FamilyGraph`], the canonical adjacency view of a
//! snapshot. Raw relationship records may be directional, duplicated, or
//! recorded in only one direction; a single linear scan resolves them into
//! two indexes:
//!
//! - `children_of`: parent → the set of that parent's children
//! - `spouses_of`: person → the set of that person's spouses
//!
//! The PARENT/CHILD direction inversion and the forced SPOUSE symmetry live
//! here and nowhere else; no other component re-implements them. SIBLING
//! records carry no layout semantics and are left untouched in the
//! relationship list for other consumers, as are records of unrecognized
//! kinds.
//!
//! All maps use insertion-ordered collections so that iteration order (and
//! therefore every downstream layout decision) is a deterministic function
//! of the input record order. Duplicate records collapse naturally because
//! adjacency targets are stored as sets.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use arbor_core::{
    identifier::Id,
    model::{Person, Relationship, RelationshipKind},
};

/// Canonical adjacency indexes over one snapshot.
///
/// Built fresh per layout call and owned exclusively by the engine; callers
/// never mutate it.
#[derive(Debug)]
pub struct FamilyGraph {
    people: IndexMap<Id, Person>,
    relationships: Vec<Relationship>,
    children_of: IndexMap<Id, IndexSet<Id>>,
    spouses_of: IndexMap<Id, IndexSet<Id>>,
}

impl FamilyGraph {
    /// Builds the graph from a snapshot of people and relationships.
    ///
    /// Relationship records referencing a person absent from `people` are
    /// dropped from the adjacency indexes; they must not disturb the
    /// traversal.
    pub fn from_snapshot(people: &[Person], relationships: &[Relationship]) -> Self {
        let people: IndexMap<Id, Person> =
            people.iter().map(|p| (p.id, p.clone())).collect();

        let mut graph = Self {
            people,
            relationships: relationships.to_vec(),
            children_of: IndexMap::new(),
            spouses_of: IndexMap::new(),
        };

        for relationship in relationships {
            graph.index_relationship(relationship);
        }

        debug!(
            people_count = graph.people.len(),
            parents_count = graph.children_of.len(),
            spouses_count = graph.spouses_of.len();
            "Family graph built",
        );

        graph
    }

    /// Folds one raw record into the adjacency indexes.
    fn index_relationship(&mut self, relationship: &Relationship) {
        if !self.contains_person(relationship.source) || !self.contains_person(relationship.target)
        {
            trace!(
                relationship_id = relationship.id.to_string(),
                source = relationship.source.to_string(),
                target = relationship.target.to_string();
                "Dropped relationship referencing an unknown person",
            );
            return;
        }

        match relationship.kind {
            // source is the parent, target the child
            RelationshipKind::Parent => {
                self.children_of
                    .entry(relationship.source)
                    .or_default()
                    .insert(relationship.target);
            }
            // source is the child, target the parent: the direction-inverted
            // equivalent of PARENT
            RelationshipKind::Child => {
                self.children_of
                    .entry(relationship.target)
                    .or_default()
                    .insert(relationship.source);
            }
            // symmetric regardless of which direction was stored
            RelationshipKind::Spouse => {
                self.spouses_of
                    .entry(relationship.source)
                    .or_default()
                    .insert(relationship.target);
                self.spouses_of
                    .entry(relationship.target)
                    .or_default()
                    .insert(relationship.source);
            }
            // no generation or position semantics
            RelationshipKind::Sibling => {}
            RelationshipKind::Unknown => {
                trace!(
                    relationship_id = relationship.id.to_string();
                    "Ignored relationship of unrecognized kind",
                );
            }
        }
    }

    /// Returns the person record for the given ID, if it exists.
    pub fn person(&self, id: Id) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Checks if a person with the given ID exists in the graph.
    pub fn contains_person(&self, id: Id) -> bool {
        self.people.contains_key(&id)
    }

    /// Returns the total number of people in the graph.
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the raw relationship records the graph was built from.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    /// Returns an iterator over the people recorded as parents, in first
    /// occurrence order.
    pub fn parents(&self) -> impl Iterator<Item = Id> + '_ {
        self.children_of.keys().copied()
    }

    /// Returns an iterator over the children of the given person, in first
    /// occurrence order. Empty if the person has no recorded children.
    pub fn children_of(&self, id: Id) -> impl Iterator<Item = Id> + '_ {
        self.children_of.get(&id).into_iter().flatten().copied()
    }

    /// Returns an iterator over the spouses of the given person, in first
    /// occurrence order. Empty if the person has no recorded spouses.
    pub fn spouses_of(&self, id: Id) -> impl Iterator<Item = Id> + '_ {
        self.spouses_of.get(&id).into_iter().flatten().copied()
    }

    /// Checks whether the two people are recorded as spouses.
    pub fn are_spouses(&self, a: Id, b: Id) -> bool {
        self.spouses_of
            .get(&a)
            .is_some_and(|spouses| spouses.contains(&b))
    }
}

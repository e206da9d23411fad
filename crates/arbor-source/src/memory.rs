//! In-memory snapshot source.
//!
//! Serves a snapshot held entirely in memory. The built-in sample family is
//! deterministic: identifiers are assigned from insertion counters, so two
//! runs produce identical records and therefore identical layouts.

use std::collections::HashSet;

use log::debug;

use crate::{FamilySource, Snapshot, SourceError};

use arbor_core::{
    identifier::Id,
    model::{Person, Relationship, RelationshipKind},
};

/// A snapshot source backed by in-memory records.
#[derive(Debug, Clone)]
pub struct MemorySource {
    snapshot: Snapshot,
}

impl MemorySource {
    /// Creates a source over the given snapshot.
    ///
    /// Exact duplicate relationship records (same source, target, and kind)
    /// are dropped; duplicates otherwise survive into every consumer of the
    /// snapshot, and the store has been observed to contain them.
    pub fn new(snapshot: Snapshot) -> Self {
        let mut snapshot = snapshot;
        snapshot.relationships = dedup_relationships(snapshot.relationships);

        Self { snapshot }
    }

    /// Creates a source serving the built-in sample family.
    ///
    /// The sample spans four generations and exercises every record shape
    /// the store produces: parent/child pairs recorded in both directions,
    /// symmetric spouse pairs, and pairwise sibling links.
    pub fn with_sample_family() -> Self {
        Self::new(sample_family())
    }
}

impl FamilySource for MemorySource {
    fn fetch_all_people(&self) -> Result<Vec<Person>, SourceError> {
        Ok(self.snapshot.people.clone())
    }

    fn fetch_all_relationships(&self) -> Result<Vec<Relationship>, SourceError> {
        Ok(self.snapshot.relationships.clone())
    }
}

/// Drops exact duplicate relationship records, keeping the first occurrence.
fn dedup_relationships(relationships: Vec<Relationship>) -> Vec<Relationship> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(relationships.len());

    for rel in relationships {
        if seen.insert((rel.source, rel.target, rel.kind)) {
            unique.push(rel);
        } else {
            debug!(kind:? = rel.kind; "Dropped duplicate relationship");
        }
    }

    unique
}

/// Incrementally assembles a snapshot with the record conventions the
/// store's wizard uses when saving a family.
struct FamilyBuilder {
    people: Vec<Person>,
    relationships: Vec<Relationship>,
    next_relationship: usize,
}

impl FamilyBuilder {
    fn new() -> Self {
        Self {
            people: Vec::new(),
            relationships: Vec::new(),
            next_relationship: 0,
        }
    }

    fn person(&mut self, name: &str, birth_year: i32) -> Id {
        let id = Id::new(&format!("p{}", self.people.len() + 1));
        self.people.push(Person::new(id, name, birth_year));
        id
    }

    fn record(&mut self, source: Id, target: Id, kind: RelationshipKind) {
        self.next_relationship += 1;
        let id = Id::new(&format!("r{}", self.next_relationship));
        self.relationships
            .push(Relationship::new(id, source, target, kind));
    }

    /// Links a parent and child, recording both directions as the wizard
    /// does: a CHILD row from the child and a PARENT row from the parent.
    fn parent_child(&mut self, parent: Id, child: Id) {
        self.record(child, parent, RelationshipKind::Child);
        self.record(parent, child, RelationshipKind::Parent);
    }

    /// Links two spouses, recording both directions.
    fn spouses(&mut self, a: Id, b: Id) {
        self.record(a, b, RelationshipKind::Spouse);
        self.record(b, a, RelationshipKind::Spouse);
    }

    /// Links every pair among the given people as siblings, both directions.
    fn siblings(&mut self, ids: &[Id]) {
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                self.record(ids[i], ids[j], RelationshipKind::Sibling);
                self.record(ids[j], ids[i], RelationshipKind::Sibling);
            }
        }
    }

    fn build(self) -> Snapshot {
        Snapshot::new(self.people, self.relationships)
    }
}

/// Builds the sample family snapshot.
pub fn sample_family() -> Snapshot {
    let mut family = FamilyBuilder::new();

    // Generation I
    let elena = family.person("Elena Vasquez", 1921);
    let mateo = family.person("Mateo Vasquez", 1918);
    family.spouses(elena, mateo);

    // Generation II
    let carmen = family.person("Carmen Miller", 1945);
    let diego = family.person("Diego Vasquez", 1948);
    let lucia = family.person("Lucia Ortega", 1951);
    family.parent_child(elena, carmen);
    family.parent_child(elena, diego);
    family.parent_child(elena, lucia);
    family.siblings(&[carmen, diego, lucia]);

    let robert = family.person("Robert Miller", 1943);
    family.spouses(carmen, robert);

    // Generation III
    let sofia = family.person("Sofia Clark", 1970);
    let james = family.person("James Miller", 1973);
    family.parent_child(carmen, sofia);
    family.parent_child(carmen, james);
    family.siblings(&[sofia, james]);

    let ethan = family.person("Ethan Clark", 1969);
    family.spouses(sofia, ethan);

    let nora = family.person("Nora Vasquez", 1976);
    family.parent_child(diego, nora);

    // Generation IV
    let maya = family.person("Maya Clark", 1999);
    let leo = family.person("Leo Clark", 2002);
    family.parent_child(sofia, maya);
    family.parent_child(sofia, leo);
    family.siblings(&[maya, leo]);

    family.build()
}

//! Generation level assignment.
//!
//! A breadth-first traversal from the chosen root assigns every reachable
//! person an integer generation level: the root sits at level 0, spouses
//! share their partner's level, and children sit one level below their
//! parent. People with no relationship path from the root are absent from
//! the assignment and therefore from the drawn tree.
//!
//! A spouse is recorded at the partner's level but never enqueued, so a
//! person's children enter the tree only through that person's own
//! `children_of` edges; a co-level spouse's edges are not followed. This
//! matches the store's observed attribution of children to the partner
//! whose own records name them.
//!
//! The `visited` set bounds the traversal on malformed cyclic input:
//! already-visited people are never re-enqueued, so the walk always
//! terminates and a back-edge simply produces no second placement.

use std::collections::{HashMap, HashSet, VecDeque};

use arbor_core::identifier::Id;

use crate::structure::FamilyGraph;

/// Level assignment for everyone reachable from the root.
///
/// Holds the person → level map and its reverse index (per-level member
/// lists in discovery order).
#[derive(Debug, Default)]
pub(crate) struct LevelAssignment {
    level_of: HashMap<Id, usize>,
    /// Per-level member lists in discovery order; index is the level.
    members: Vec<Vec<Id>>,
}

impl LevelAssignment {
    /// Records a person at a level, growing the level list as needed.
    fn record(&mut self, person: Id, level: usize) {
        if self.members.len() <= level {
            self.members.resize_with(level + 1, Vec::new);
        }
        self.level_of.insert(person, level);
        self.members[level].push(person);
    }

    /// Returns the level of the given person, if they were reached.
    pub(crate) fn level_of(&self, person: Id) -> Option<usize> {
        self.level_of.get(&person).copied()
    }

    /// Returns true if both people were reached and share a level.
    pub(crate) fn same_level(&self, a: Id, b: Id) -> bool {
        match (self.level_of(a), self.level_of(b)) {
            (Some(level_a), Some(level_b)) => level_a == level_b,
            _ => false,
        }
    }

    /// Returns (level, members) pairs in ascending level order.
    pub(crate) fn levels(&self) -> impl Iterator<Item = (usize, &[Id])> {
        self.members
            .iter()
            .enumerate()
            .map(|(level, members)| (level, members.as_slice()))
    }

    /// Returns the number of generations reached.
    pub(crate) fn generation_count(&self) -> usize {
        self.members.len()
    }

    /// Returns the number of people reached.
    pub(crate) fn people_count(&self) -> usize {
        self.members.iter().map(Vec::len).sum()
    }
}

/// Runs the breadth-first level assignment from `root`.
///
/// Returns an empty assignment if the root is not part of the graph.
pub(crate) fn assign_levels(graph: &FamilyGraph, root: Id) -> LevelAssignment {
    let mut assignment = LevelAssignment::default();
    if !graph.contains_person(root) {
        return assignment;
    }

    let mut visited: HashSet<Id> = HashSet::new();
    let mut queue: VecDeque<(Id, usize)> = VecDeque::new();

    visited.insert(root);
    queue.push_back((root, 0));

    while let Some((person, level)) = queue.pop_front() {
        assignment.record(person, level);

        // Spouses share the level but are not traversed further themselves;
        // their children only enter through their own partner's edges.
        for spouse in graph.spouses_of(person) {
            if visited.insert(spouse) {
                assignment.record(spouse, level);
            }
        }

        for child in graph.children_of(person) {
            if visited.insert(child) {
                queue.push_back((child, level + 1));
            }
        }
    }

    assignment
}

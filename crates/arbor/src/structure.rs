//! Graph structures derived from a family snapshot.

mod family_graph;

pub use family_graph::FamilyGraph;

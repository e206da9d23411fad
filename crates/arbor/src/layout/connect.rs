//! Connector geometry derivation.
//!
//! Turns the placed positions into drawable paths: a horizontal segment
//! between the facing sides of each couple, and an elbow from each parent
//! down to each of their children. Both passes consume positions read-only.
//!
//! Spouse records arrive in up to two directions; an order-independent pair
//! key deduplicates them so each couple gets exactly one link. A link is
//! only emitted when both ends were placed at the same level, guarding
//! against a spouse who was never reached from the root or an inconsistent
//! record.
//!
//! A couple shares one descending line: when a parent has a placed
//! same-level spouse, the drop starts at the midpoint between the two cards
//! instead of the parent's own center.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::trace;

use arbor_core::{geometry::Point, identifier::Id, model::RelationshipKind};

use crate::{
    config::LayoutConfig,
    layout::{Connector, generation::LevelAssignment},
    structure::FamilyGraph,
};

/// Builds all connector paths for the placed nodes.
///
/// Spouse links come first, in relationship record order; parent-child
/// elbows follow in adjacency order.
pub(crate) fn build_connectors(
    graph: &FamilyGraph,
    levels: &LevelAssignment,
    positions: &IndexMap<Id, Point>,
    config: &LayoutConfig,
) -> Vec<Connector> {
    let mut connectors = Vec::new();

    build_spouse_links(graph, levels, positions, config, &mut connectors);
    build_child_links(graph, levels, positions, config, &mut connectors);

    connectors
}

fn build_spouse_links(
    graph: &FamilyGraph,
    levels: &LevelAssignment,
    positions: &IndexMap<Id, Point>,
    config: &LayoutConfig,
    connectors: &mut Vec<Connector>,
) {
    let half_width = config.node_width() / 2.0;
    let mut linked_pairs: HashSet<(String, String)> = HashSet::new();

    for relationship in graph.relationships() {
        if relationship.kind != RelationshipKind::Spouse {
            continue;
        }
        if !linked_pairs.insert(pair_key(relationship.source, relationship.target)) {
            continue;
        }

        let (Some(&a), Some(&b)) = (
            positions.get(&relationship.source),
            positions.get(&relationship.target),
        ) else {
            trace!(
                relationship_id = relationship.id.to_string();
                "Skipped spouse link with an unplaced end",
            );
            continue;
        };
        if !levels.same_level(relationship.source, relationship.target) {
            continue;
        }

        // Horizontal segment between the facing sides of the two cards.
        let left_x = a.x().min(b.x()) + half_width;
        let right_x = a.x().max(b.x()) - half_width;

        connectors.push(Connector::Spouse {
            points: [Point::new(left_x, a.y()), Point::new(right_x, b.y())],
        });
    }
}

fn build_child_links(
    graph: &FamilyGraph,
    levels: &LevelAssignment,
    positions: &IndexMap<Id, Point>,
    config: &LayoutConfig,
    connectors: &mut Vec<Connector>,
) {
    let half_height = config.node_height() / 2.0;

    for parent in graph.parents() {
        let Some(&parent_position) = positions.get(&parent) else {
            continue;
        };

        // A couple shares one descending line from their midpoint.
        let start_x = graph
            .spouses_of(parent)
            .find(|spouse| {
                positions.contains_key(spouse) && levels.same_level(parent, *spouse)
            })
            .and_then(|spouse| positions.get(&spouse))
            .map(|&spouse_position| parent_position.midpoint(spouse_position).x())
            .unwrap_or_else(|| parent_position.x());

        let start = Point::new(start_x, parent_position.y() + half_height);

        for child in graph.children_of(parent) {
            let Some(&child_position) = positions.get(&child) else {
                continue;
            };

            let end = Point::new(child_position.x(), child_position.y() - half_height);
            let mid_y = (start.y() + end.y()) / 2.0;

            connectors.push(Connector::ParentChild {
                points: [
                    start,
                    Point::new(start.x(), mid_y),
                    Point::new(end.x(), mid_y),
                    end,
                ],
            });
        }
    }
}

/// Order-independent key identifying a spouse pair.
fn pair_key(a: Id, b: Id) -> (String, String) {
    let a = a.to_string();
    let b = b.to_string();
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::assert_approx_eq;

    use arbor_core::model::{Person, Relationship, RelationshipKind};

    use crate::layout::{generation::assign_levels, row::pack_rows};

    fn graph(people: &[(&str, &str)], rels: &[(&str, &str, RelationshipKind)]) -> FamilyGraph {
        let people: Vec<Person> = people
            .iter()
            .map(|(id, name)| Person::new(Id::new(id), *name, 1950))
            .collect();
        let rels: Vec<Relationship> = rels
            .iter()
            .enumerate()
            .map(|(i, (source, target, kind))| {
                Relationship::new(
                    Id::new(&format!("r{i}")),
                    Id::new(source),
                    Id::new(target),
                    *kind,
                )
            })
            .collect();
        FamilyGraph::from_snapshot(&people, &rels)
    }

    fn connectors_for(graph: &FamilyGraph, root: &str, config: &LayoutConfig) -> Vec<Connector> {
        let levels = assign_levels(graph, Id::new(root));
        let positions = pack_rows(graph, &levels, config);
        build_connectors(graph, &levels, &positions, config)
    }

    fn spouse_links(connectors: &[Connector]) -> Vec<&Connector> {
        connectors
            .iter()
            .filter(|c| matches!(c, Connector::Spouse { .. }))
            .collect()
    }

    fn child_links(connectors: &[Connector]) -> Vec<&Connector> {
        connectors
            .iter()
            .filter(|c| matches!(c, Connector::ParentChild { .. }))
            .collect()
    }

    #[test]
    fn test_couple_gets_exactly_one_link() {
        let config = LayoutConfig::default();
        // Recorded in both directions, as the store normally does.
        let graph = graph(
            &[("p1", "Ana"), ("p2", "Ben")],
            &[
                ("p1", "p2", RelationshipKind::Spouse),
                ("p2", "p1", RelationshipKind::Spouse),
            ],
        );
        let connectors = connectors_for(&graph, "p1", &config);

        assert_eq!(spouse_links(&connectors).len(), 1);
        assert_eq!(child_links(&connectors).len(), 0);
    }

    #[test]
    fn test_spouse_link_spans_facing_sides() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[("p1", "Ana"), ("p2", "Ben")],
            &[("p1", "p2", RelationshipKind::Spouse)],
        );
        let connectors = connectors_for(&graph, "p1", &config);

        let Connector::Spouse { points } = spouse_links(&connectors)[0] else {
            unreachable!();
        };
        // Gap between facing sides equals the spouse gap.
        assert_approx_eq!(f32, points[1].x() - points[0].x(), config.spouse_gap());
        assert_approx_eq!(f32, points[0].y(), points[1].y());
    }

    #[test]
    fn test_unplaced_spouse_pair_produces_no_link() {
        let config = LayoutConfig::default();
        // A spouse pair with no path from the root is never placed, so no
        // link may be emitted for it.
        let graph = graph(
            &[("p1", "Root"), ("p4", "StrangerA"), ("p5", "StrangerB")],
            &[("p4", "p5", RelationshipKind::Spouse)],
        );
        let connectors = connectors_for(&graph, "p1", &config);

        assert_eq!(spouse_links(&connectors).len(), 0);
    }

    #[test]
    fn test_elbow_path_shape() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[("p1", "Parent"), ("p2", "Child")],
            &[("p1", "p2", RelationshipKind::Parent)],
        );
        let connectors = connectors_for(&graph, "p1", &config);

        let Connector::ParentChild { points } = child_links(&connectors)[0] else {
            unreachable!();
        };

        // Start at the parent's bottom edge, end at the child's top edge.
        assert_approx_eq!(f32, points[0].y(), 100.0 + config.node_height() / 2.0);
        assert_approx_eq!(
            f32,
            points[3].y(),
            100.0 + config.node_height() + config.vertical_gap() - config.node_height() / 2.0
        );

        // The two middle points share the inter-row midline.
        let mid_y = (points[0].y() + points[3].y()) / 2.0;
        assert_approx_eq!(f32, points[1].y(), mid_y);
        assert_approx_eq!(f32, points[2].y(), mid_y);
        assert_approx_eq!(f32, points[1].x(), points[0].x());
        assert_approx_eq!(f32, points[2].x(), points[3].x());
    }

    #[test]
    fn test_couple_shares_descent_line() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[("p1", "Ana"), ("p2", "Ben"), ("p3", "Kid")],
            &[
                ("p1", "p2", RelationshipKind::Spouse),
                ("p1", "p3", RelationshipKind::Parent),
            ],
        );
        let levels = assign_levels(&graph, Id::new("p1"));
        let positions = pack_rows(&graph, &levels, &config);
        let connectors = build_connectors(&graph, &levels, &positions, &config);

        let Connector::ParentChild { points } = child_links(&connectors)[0] else {
            unreachable!();
        };

        let ana = positions[&Id::new("p1")];
        let ben = positions[&Id::new("p2")];
        assert_approx_eq!(f32, points[0].x(), (ana.x() + ben.x()) / 2.0);
    }

    #[test]
    fn test_dangling_child_is_skipped() {
        let config = LayoutConfig::default();
        // p3 is a child of p2, but only the p1 component is drawn.
        let graph = graph(
            &[("p1", "Root"), ("p2", "Other"), ("p3", "OtherChild")],
            &[("p2", "p3", RelationshipKind::Parent)],
        );
        let connectors = connectors_for(&graph, "p1", &config);

        assert!(connectors.is_empty());
    }
}

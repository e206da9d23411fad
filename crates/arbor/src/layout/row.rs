//! Horizontal packing of generation rows.
//!
//! Within each level, people are sorted into a reproducible order and walked
//! left to right with a horizontal cursor. A person whose spouse is a member
//! of the same level is placed together with that spouse as an adjacent
//! pair; everyone else occupies a single slot. Positions are card centers.
//!
//! The sort key is `(display name, id)`: rows read in display-name order,
//! and the id breaks ties between identical names so the order stays
//! total. A person with several spouses pairs with the first
//! unplaced one in sorted order; the rest fall through to later iterations
//! and are placed as standalone nodes at the same level.

use indexmap::IndexMap;
use log::trace;

use arbor_core::{geometry::Point, identifier::Id};

use crate::{config::LayoutConfig, layout::generation::LevelAssignment, structure::FamilyGraph};

/// Assigns a center position to every person in the level assignment.
///
/// The returned map's iteration order is placement order: levels ascending,
/// then left to right.
pub(crate) fn pack_rows(
    graph: &FamilyGraph,
    levels: &LevelAssignment,
    config: &LayoutConfig,
) -> IndexMap<Id, Point> {
    let margins = config.margins();
    let row_pitch = config.node_height() + config.vertical_gap();
    let half_width = config.node_width() / 2.0;

    let mut positions: IndexMap<Id, Point> = IndexMap::new();

    for (level, members) in levels.levels() {
        let y = margins.top() + level as f32 * row_pitch;

        // Reproducible order within the row.
        let mut ordered: Vec<Id> = members.to_vec();
        ordered.sort_by_cached_key(|id| sort_key(graph, *id));

        let mut cursor = margins.left();

        for (index, &person) in ordered.iter().enumerate() {
            if positions.contains_key(&person) {
                continue;
            }

            // First unplaced spouse in sorted order who shares this level.
            let partner = ordered[index + 1..]
                .iter()
                .copied()
                .find(|candidate| {
                    !positions.contains_key(candidate) && graph.are_spouses(person, *candidate)
                });

            if let Some(partner) = partner {
                let left_x = cursor + half_width;
                let right_x = left_x + config.node_width() + config.spouse_gap();

                positions.insert(person, Point::new(left_x, y));
                positions.insert(partner, Point::new(right_x, y));
                trace!(
                    level,
                    person = person.to_string(),
                    partner = partner.to_string();
                    "Placed couple",
                );

                cursor = right_x + half_width + config.horizontal_gap();
            } else {
                let x = cursor + half_width;

                positions.insert(person, Point::new(x, y));
                trace!(level, person = person.to_string(); "Placed single");

                cursor = x + half_width + config.horizontal_gap();
            }
        }
    }

    positions
}

/// Total sort key for a row member.
fn sort_key(graph: &FamilyGraph, id: Id) -> (String, String) {
    let name = graph
        .person(id)
        .map(|person| person.name.clone())
        .unwrap_or_default();
    (name, id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use float_cmp::assert_approx_eq;

    use arbor_core::model::{Person, Relationship, RelationshipKind};

    use crate::layout::generation::assign_levels;

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

    fn layout(
        graph: &FamilyGraph,
        root: &str,
        config: &LayoutConfig,
    ) -> IndexMap<Id, Point> {
        let levels = assign_levels(graph, Id::new(root));
        pack_rows(graph, &levels, config)
    }

    #[test]
    fn test_single_person_position() {
        let config = LayoutConfig::default();
        let graph = graph(&[("p1", "A")], &[]);
        let positions = layout(&graph, "p1", &config);

        let position = positions[&Id::new("p1")];
        // Center sits half a node in from each margin.
        assert_approx_eq!(f32, position.x(), 100.0 + 80.0);
        assert_approx_eq!(f32, position.y(), 100.0);
    }

    #[test]
    fn test_couple_spacing() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[("p1", "Ana"), ("p2", "Ben")],
            &[("p1", "p2", RelationshipKind::Spouse)],
        );
        let positions = layout(&graph, "p1", &config);

        let ana = positions[&Id::new("p1")];
        let ben = positions[&Id::new("p2")];

        assert_approx_eq!(f32, ana.y(), ben.y());
        // Centers are one node width plus the spouse gap apart.
        assert_approx_eq!(
            f32,
            (ben.x() - ana.x()).abs(),
            config.node_width() + config.spouse_gap()
        );
    }

    #[test]
    fn test_row_sorted_by_name() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[("p1", "Root"), ("p2", "Zoe"), ("p3", "Abe")],
            &[
                ("p1", "p2", RelationshipKind::Parent),
                ("p1", "p3", RelationshipKind::Parent),
            ],
        );
        let positions = layout(&graph, "p1", &config);

        // Abe was discovered after Zoe but sorts first.
        assert!(positions[&Id::new("p3")].x() < positions[&Id::new("p2")].x());
    }

    #[test]
    fn test_identical_names_break_ties_by_id() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[("p1", "Root"), ("pb", "Twin"), ("pa", "Twin")],
            &[
                ("p1", "pb", RelationshipKind::Parent),
                ("p1", "pa", RelationshipKind::Parent),
            ],
        );
        let positions = layout(&graph, "p1", &config);

        assert!(positions[&Id::new("pa")].x() < positions[&Id::new("pb")].x());
    }

    #[test]
    fn test_rows_are_vertically_separated() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[("p1", "A"), ("p2", "B")],
            &[("p1", "p2", RelationshipKind::Parent)],
        );
        let positions = layout(&graph, "p1", &config);

        let parent = positions[&Id::new("p1")];
        let child = positions[&Id::new("p2")];
        assert_approx_eq!(
            f32,
            child.y() - parent.y(),
            config.node_height() + config.vertical_gap()
        );
    }

    #[test]
    fn test_extra_spouse_falls_through_to_own_slot() {
        let config = LayoutConfig::default();
        // Both "Bea" and "Cara" are spouses of "Ana"; only the first in
        // sorted order pairs, the other is placed standalone.
        let graph = graph(
            &[("p1", "Ana"), ("p2", "Bea"), ("p3", "Cara")],
            &[
                ("p1", "p2", RelationshipKind::Spouse),
                ("p1", "p3", RelationshipKind::Spouse),
            ],
        );
        let positions = layout(&graph, "p1", &config);

        let ana = positions[&Id::new("p1")];
        let bea = positions[&Id::new("p2")];
        let cara = positions[&Id::new("p3")];

        assert_approx_eq!(f32, ana.y(), bea.y());
        assert_approx_eq!(f32, ana.y(), cara.y());
        assert_approx_eq!(
            f32,
            bea.x() - ana.x(),
            config.node_width() + config.spouse_gap()
        );
        // Cara sits past the couple, separated by the inter-group gap.
        assert!(cara.x() > bea.x());
        assert_approx_eq!(
            f32,
            cara.x() - bea.x(),
            config.node_width() + config.horizontal_gap()
        );
    }

    #[test]
    fn test_no_overlap_within_row() {
        let config = LayoutConfig::default();
        let graph = graph(
            &[
                ("p1", "Root"),
                ("p2", "A"),
                ("p3", "B"),
                ("p4", "C"),
                ("p5", "D"),
            ],
            &[
                ("p1", "p2", RelationshipKind::Parent),
                ("p1", "p3", RelationshipKind::Parent),
                ("p1", "p4", RelationshipKind::Parent),
                ("p1", "p5", RelationshipKind::Parent),
                ("p2", "p3", RelationshipKind::Spouse),
            ],
        );
        let positions = layout(&graph, "p1", &config);

        let mut row: Vec<f32> = ["p2", "p3", "p4", "p5"]
            .iter()
            .map(|id| positions[&Id::new(id)].x())
            .collect();
        row.sort_by(|a, b| a.partial_cmp(b).unwrap());

        for pair in row.windows(2) {
            assert!(pair[1] - pair[0] >= config.node_width() + config.spouse_gap() - 0.01);
        }
    }
}

//! Final layout assembly and canvas sizing.
//!
//! Gathers the placed nodes and connectors into a [`FamilyLayout`] and
//! computes the canvas as the bounding box of every card plus the uniform
//! margin, so the canvas always fully contains the drawing. An empty
//! placement yields the default canvas instead of a degenerate zero-size
//! one.

use indexmap::IndexMap;

use arbor_core::{
    geometry::{Point, Size},
    identifier::Id,
};

use crate::{
    config::LayoutConfig,
    layout::{Connector, FamilyLayout, PlacedPerson},
    structure::FamilyGraph,
};

/// Canvas served when there is nothing to draw.
pub(crate) fn default_canvas() -> Size {
    Size::new(800.0, 600.0)
}

/// Assembles the final layout from the placement and connector passes.
pub(crate) fn assemble(
    graph: &FamilyGraph,
    positions: &IndexMap<Id, Point>,
    connectors: Vec<Connector>,
    config: &LayoutConfig,
) -> FamilyLayout {
    let nodes: Vec<PlacedPerson> = positions
        .iter()
        .map(|(id, &position)| {
            let person = graph
                .person(*id)
                .expect("Placed person should exist in the graph")
                .clone();
            PlacedPerson::new(person, position)
        })
        .collect();

    let canvas = canvas_size(&nodes, config);

    FamilyLayout::new(nodes, connectors, canvas)
}

/// Computes the canvas from the union of all card bounds plus the margin.
fn canvas_size(nodes: &[PlacedPerson], config: &LayoutConfig) -> Size {
    if nodes.is_empty() {
        return default_canvas();
    }

    let card = Size::new(config.node_width(), config.node_height());
    let bounds = nodes
        .iter()
        .skip(1)
        .map(|node| node.position().to_bounds(card))
        .fold(nodes[0].position().to_bounds(card), |acc, bounds| {
            acc.merge(&bounds)
        });

    let margins = config.margins();
    Size::new(
        bounds.max_x() + margins.right(),
        bounds.max_y() + margins.bottom(),
    )
}

//! Family tree layout engine.
//!
//! Given the normalized [`FamilyGraph`] and a chosen root person, the engine
//! computes a deterministic 2-D placement: an integer generation level per
//! reachable person, non-overlapping horizontal slots with couples adjacent,
//! and the connector paths linking the placed nodes. The stages run in a
//! fixed pipeline:
//!
//! ```text
//! FamilyGraph
//!     ↓ generation   (breadth-first level assignment)
//! LevelAssignment
//!     ↓ row          (per-level ordering and horizontal packing)
//! positions
//!     ↓ connect      (spouse links and parent-child elbows)
//! connectors
//!     ↓ envelope     (canvas bounds)
//! FamilyLayout
//! ```
//!
//! The engine is a pure function of its inputs: it holds no state between
//! calls, performs no I/O, and two calls with identical inputs yield
//! bit-identical layouts.

mod connect;
mod envelope;
mod generation;
mod row;

use log::{debug, info};

use arbor_core::{
    geometry::{Point, Size},
    identifier::Id,
    model::Person,
};

use crate::{
    config::{ConfigError, LayoutConfig},
    structure::FamilyGraph,
};

/// A person together with the center position assigned to their card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPerson {
    person: Person,
    position: Point,
}

impl PlacedPerson {
    pub(crate) fn new(person: Person, position: Point) -> Self {
        Self { person, position }
    }

    /// Returns the person record.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Returns the center position of the person's card.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// A drawable connector between placed nodes.
///
/// Each variant carries the full path to stroke, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Connector {
    /// A horizontal segment between the facing sides of a couple's cards.
    Spouse { points: [Point; 2] },

    /// An elbow from a parent (or couple midpoint) down to a child: a
    /// vertical drop to the midline between the two rows, a horizontal run
    /// to the child's x, and a vertical drop to the child's top.
    ParentChild { points: [Point; 4] },
}

impl Connector {
    /// Returns the path points of this connector, in stroke order.
    pub fn points(&self) -> &[Point] {
        match self {
            Connector::Spouse { points } => points,
            Connector::ParentChild { points } => points,
        }
    }
}

/// The complete result of one layout computation.
///
/// A new `FamilyLayout` is produced on every layout request; it is never
/// patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyLayout {
    nodes: Vec<PlacedPerson>,
    connectors: Vec<Connector>,
    canvas: Size,
}

impl FamilyLayout {
    pub(crate) fn new(nodes: Vec<PlacedPerson>, connectors: Vec<Connector>, canvas: Size) -> Self {
        Self {
            nodes,
            connectors,
            canvas,
        }
    }

    /// The well-defined empty layout: no nodes, no connectors, and the
    /// default canvas, so callers can render a uniform "no data" state.
    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), envelope::default_canvas())
    }

    /// Returns the placed nodes, ordered by level and then by slot.
    pub fn nodes(&self) -> &[PlacedPerson] {
        &self.nodes
    }

    /// Returns the connectors, spouse links first.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Returns the canvas size containing the whole drawing.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Returns the canvas width.
    pub fn canvas_width(&self) -> f32 {
        self.canvas.width()
    }

    /// Returns the canvas height.
    pub fn canvas_height(&self) -> f32 {
        self.canvas.height()
    }

    /// Returns true if the layout contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The tree layout engine, configured once and reusable across calls.
#[derive(Debug, Clone)]
pub struct Engine {
    config: LayoutConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any configured dimension is not a
    /// positive, finite number. This is a caller error, distinct from the
    /// empty-layout path taken for missing data.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine's layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes the layout of the tree rooted at `root`.
    ///
    /// People not reachable from the root are excluded: the layout draws one
    /// connected tree, not the full forest. A missing root (`None`, or an
    /// id absent from the graph) yields the empty layout rather than an
    /// error, since that is a normal state (e.g., first load before data
    /// arrives).
    pub fn calculate(&self, graph: &FamilyGraph, root: Option<Id>) -> FamilyLayout {
        let Some(root) = root else {
            debug!("No root selected, producing empty layout");
            return FamilyLayout::empty();
        };

        if !graph.contains_person(root) {
            debug!(root = root.to_string(); "Root not present in snapshot, producing empty layout");
            return FamilyLayout::empty();
        }

        let levels = generation::assign_levels(graph, root);
        debug!(
            generations = levels.generation_count(),
            placed_people = levels.people_count();
            "Generations assigned",
        );

        let positions = row::pack_rows(graph, &levels, &self.config);
        let connectors = connect::build_connectors(graph, &levels, &positions, &self.config);
        debug!(connectors_count = connectors.len(); "Connectors built");

        let layout = envelope::assemble(graph, &positions, connectors, &self.config);
        info!(
            nodes_count = layout.nodes().len(),
            canvas_width = layout.canvas_width(),
            canvas_height = layout.canvas_height();
            "Layout calculated",
        );

        layout
    }
}

//! Arbor - A layout engine for family tree diagrams.
//!
//! Given an unordered snapshot of people and typed pairwise relationships,
//! Arbor computes a deterministic 2-D placement (generation rows, couple
//! adjacency, non-overlapping slots) and the connector paths to stroke
//! between them, in an abstract coordinate space any rendering layer can
//! consume. An SVG exporter is included.
//!
//! The engine is a pure function of `(people, relationships, root, config)`:
//! it holds no shared state, performs no I/O, and never reaches out to a
//! data source itself. Callers obtain the snapshot (see the `arbor-source`
//! crate) and inject it explicitly.

pub mod config;

mod error;
mod export;
mod layout;
mod structure;

pub use arbor_core::{color, geometry, identifier, model};

pub use error::ArborError;
pub use layout::{Connector, Engine, FamilyLayout, PlacedPerson};
pub use structure::FamilyGraph;

use log::{debug, info};

use arbor_core::identifier::Id;
use arbor_core::model::{Person, Relationship};

use crate::config::AppConfig;
use crate::export::svg::Svg;

/// Builder for computing and rendering family tree layouts.
///
/// Wraps a validated [`Engine`] together with the style settings, and is
/// reusable across any number of snapshots.
///
/// # Examples
///
/// ```rust,no_run
/// use arbor::{TreeBuilder, config::AppConfig, identifier::Id, model::Person};
///
/// let people = vec![Person::new(Id::new("p1"), "Ana Gray", 1950)];
/// let relationships = vec![];
///
/// let builder = TreeBuilder::new(AppConfig::default())
///     .expect("default configuration is valid");
///
/// // Compute positions and connectors
/// let layout = builder.layout(&people, &relationships, Some(Id::new("p1")));
/// assert_eq!(layout.nodes().len(), 1);
///
/// // Render to SVG
/// let svg = builder.render_svg(&layout)
///     .expect("Failed to render");
/// ```
pub struct TreeBuilder {
    config: AppConfig,
    engine: Engine,
}

impl TreeBuilder {
    /// Creates a new tree builder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Config`] if any layout dimension is not a
    /// positive, finite number. Configuration problems are rejected here,
    /// at the call boundary, and never conflated with the empty-layout
    /// path taken for missing data.
    pub fn new(config: AppConfig) -> Result<Self, ArborError> {
        let engine = Engine::new(config.layout().clone())?;
        Ok(Self { config, engine })
    }

    /// Computes the layout of the tree rooted at `root`.
    ///
    /// Builds the normalized adjacency view of the snapshot and runs the
    /// layout pipeline over it. People unreachable from the root are not
    /// part of the result; a missing or unknown root yields the well-defined
    /// empty layout.
    pub fn layout(
        &self,
        people: &[Person],
        relationships: &[Relationship],
        root: Option<Id>,
    ) -> FamilyLayout {
        info!(
            people_count = people.len(),
            relationships_count = relationships.len();
            "Building family graph",
        );
        let graph = FamilyGraph::from_snapshot(people, relationships);

        self.engine.calculate(&graph, root)
    }

    /// Renders a computed layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Export`] if a configured style color is
    /// invalid.
    pub fn render_svg(&self, layout: &FamilyLayout) -> Result<String, ArborError> {
        let renderer = Svg::new(self.engine.config().clone()).with_style(self.config.style())?;

        let doc = renderer.render_document(layout);
        debug!("SVG document rendered");

        Ok(doc.to_string())
    }
}

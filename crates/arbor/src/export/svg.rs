//! SVG rendering of family tree layouts.
//!
//! Renders a [`FamilyLayout`] into an SVG document: person cards as rounded
//! rectangles with the name and birth year, spouse links as straight
//! horizontal strokes, and parent-child links as elbow paths. Rendering is
//! in-memory; callers decide where the document goes.

use log::debug;
use svg::{
    Document,
    node::element::{Group, Path, Rectangle, Text},
};

use arbor_core::{color::Color, geometry::Point};

use crate::{
    config::{LayoutConfig, StyleConfig},
    export::Error,
    layout::{Connector, FamilyLayout, PlacedPerson},
};

/// Default stroke for spouse links.
const SPOUSE_STROKE: &str = "#e91e63";

/// Default stroke for parent-child links.
const PARENT_CHILD_STROKE: &str = "#9e9e9e";

/// Card fill and border.
const CARD_FILL: &str = "#ffffff";
const CARD_BORDER: &str = "#bbdefb";

/// SVG renderer for family tree layouts.
pub struct Svg {
    layout_config: LayoutConfig,
    background: Option<Color>,
    spouse_stroke: Option<Color>,
    parent_child_stroke: Option<Color>,
}

impl Svg {
    /// Creates a renderer with default styling.
    ///
    /// The layout configuration must be the one the layout was computed
    /// with; card dimensions come from it.
    pub fn new(layout_config: LayoutConfig) -> Self {
        Self {
            layout_config,
            background: None,
            spouse_stroke: None,
            parent_child_stroke: None,
        }
    }

    /// Applies the configured style colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] if any configured color string is invalid.
    pub fn with_style(mut self, style: &StyleConfig) -> Result<Self, Error> {
        self.background = style.background_color().map_err(Error::Style)?;
        self.spouse_stroke = style.spouse_color().map_err(Error::Style)?;
        self.parent_child_stroke = style.parent_child_color().map_err(Error::Style)?;
        Ok(self)
    }

    /// Renders the layout into an SVG document.
    pub fn render_document(&self, layout: &FamilyLayout) -> Document {
        let width = layout.canvas_width();
        let height = layout.canvas_height();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = &self.background {
            let rect = Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", background);
            doc = doc.add(rect);
        }

        // Connectors go below the cards.
        for connector in layout.connectors() {
            doc = doc.add(self.render_connector(connector));
        }
        for node in layout.nodes() {
            doc = doc.add(self.render_card(node));
        }

        debug!(
            nodes_count = layout.nodes().len(),
            connectors_count = layout.connectors().len();
            "SVG document rendered",
        );

        doc
    }

    fn render_connector(&self, connector: &Connector) -> Path {
        let (stroke, stroke_width, opacity) = match connector {
            Connector::Spouse { .. } => (
                self.spouse_stroke
                    .as_ref()
                    .map(Color::to_string)
                    .unwrap_or_else(|| SPOUSE_STROKE.to_string()),
                2.5,
                1.0,
            ),
            Connector::ParentChild { .. } => (
                self.parent_child_stroke
                    .as_ref()
                    .map(Color::to_string)
                    .unwrap_or_else(|| PARENT_CHILD_STROKE.to_string()),
                2.0,
                0.6,
            ),
        };

        Path::new()
            .set("d", path_data(connector.points()))
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", stroke_width)
            .set("stroke-opacity", opacity)
    }

    fn render_card(&self, node: &PlacedPerson) -> Group {
        let width = self.layout_config.node_width();
        let height = self.layout_config.node_height();
        let position = node.position();
        let min_x = position.x() - width / 2.0;
        let min_y = position.y() - height / 2.0;

        let card = Rectangle::new()
            .set("x", min_x)
            .set("y", min_y)
            .set("width", width)
            .set("height", height)
            .set("rx", 10)
            .set("fill", CARD_FILL)
            .set("stroke", CARD_BORDER);

        let name = Text::new(node.person().name.clone())
            .set("x", position.x())
            .set("y", position.y() - 4.0)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 13)
            .set("font-weight", "bold");

        let born = Text::new(format!("Born {}", node.person().birth_year))
            .set("x", position.x())
            .set("y", position.y() + 14.0)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 11)
            .set("fill", "#757575");

        Group::new().add(card).add(name).add(born)
    }
}

/// Builds an SVG path data string from a point sequence.
fn path_data(points: &[Point]) -> String {
    let mut data = String::new();

    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            data.push(' ');
        }
        data.push_str(&format!("{command} {} {}", point.x(), point.y()));
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    use arbor_core::{
        identifier::Id,
        model::{Person, Relationship, RelationshipKind},
    };

    use crate::{layout::Engine, structure::FamilyGraph};

    fn sample_layout() -> (FamilyLayout, LayoutConfig) {
        let people = [
            Person::new(Id::new("p1"), "Ana Gray", 1950),
            Person::new(Id::new("p2"), "Ben Gray", 1948),
            Person::new(Id::new("p3"), "Cal Gray", 1975),
        ];
        let rels = [
            Relationship::new(
                Id::new("r1"),
                Id::new("p1"),
                Id::new("p2"),
                RelationshipKind::Spouse,
            ),
            Relationship::new(
                Id::new("r2"),
                Id::new("p1"),
                Id::new("p3"),
                RelationshipKind::Parent,
            ),
        ];
        let graph = FamilyGraph::from_snapshot(&people, &rels);
        let config = LayoutConfig::default();
        let engine = Engine::new(config.clone()).unwrap();

        (engine.calculate(&graph, Some(Id::new("p1"))), config)
    }

    #[test]
    fn test_path_data() {
        let points = [
            Point::new(1.0, 2.0),
            Point::new(1.0, 5.0),
            Point::new(4.0, 5.0),
        ];
        assert_eq!(path_data(&points), "M 1 2 L 1 5 L 4 5");
    }

    #[test]
    fn test_render_document_contains_cards_and_links() {
        let (layout, config) = sample_layout();
        let svg = Svg::new(config);

        let rendered = svg.render_document(&layout).to_string();

        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("Ana Gray"));
        assert!(rendered.contains("Born 1950"));
        assert!(rendered.contains(SPOUSE_STROKE));
        assert!(rendered.contains(PARENT_CHILD_STROKE));
    }

    #[test]
    fn test_configured_colors_override_defaults() {
        let (layout, config) = sample_layout();
        let style = StyleConfig::new(None, Some("#123456".to_string()), None);

        let svg = Svg::new(config).with_style(&style).unwrap();
        let rendered = svg.render_document(&layout).to_string();

        assert!(!rendered.contains(SPOUSE_STROKE));
    }

    #[test]
    fn test_invalid_style_color_is_rejected() {
        let (_, config) = sample_layout();
        let style = StyleConfig::new(Some("definitely-not-a-color".to_string()), None, None);

        let result = Svg::new(config).with_style(&style);
        assert!(matches!(result, Err(Error::Style(_))));
    }

    #[test]
    fn test_empty_layout_renders_bare_canvas() {
        let config = LayoutConfig::default();
        let engine = Engine::new(config.clone()).unwrap();
        let graph = FamilyGraph::from_snapshot(&[], &[]);
        let layout = engine.calculate(&graph, None);

        let rendered = Svg::new(config)
            .render_document(&layout)
            .to_string();

        assert!(rendered.contains("<svg"));
        assert!(!rendered.contains("<path"));
    }
}

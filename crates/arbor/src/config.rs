//! Configuration types for Arbor layout and rendering.
//!
//! This module provides configuration structures that control how family
//! trees are laid out and styled. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Node dimensions, gaps, and margins used by the layout engine.
//! - [`StyleConfig`] - Visual styling options such as stroke and background colors.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.layout().validate().is_ok());
//! ```

use serde::Deserialize;
use thiserror::Error;

use arbor_core::{color::Color, geometry::Insets};

/// Errors raised when a configuration fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("layout option `{name}` must be a positive number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Top-level application configuration combining layout and style settings.
///
/// Groups [`LayoutConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Node geometry settings for the layout engine.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Node geometry configuration for the layout engine.
///
/// All values are in abstract coordinate-space units and must be positive;
/// the engine rejects a non-positive or non-finite value with
/// [`ConfigError`] rather than silently clamping it.
///
/// | Option | Default | Meaning |
/// |---|---|---|
/// | `node_width` | 160 | Width of a person card |
/// | `node_height` | 70 | Height of a person card |
/// | `horizontal_gap` | 50 | Gap between adjacent groups in a row |
/// | `vertical_gap` | 50 | Gap between the bottom of one row and the top of the next |
/// | `spouse_gap` | 25 | Gap between the two cards of a couple |
/// | `top_margin` | 100 | Margin above the first row; also the uniform margin on the remaining sides |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    node_width: f32,
    node_height: f32,
    horizontal_gap: f32,
    vertical_gap: f32,
    spouse_gap: f32,
    top_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 160.0,
            node_height: 70.0,
            horizontal_gap: 50.0,
            vertical_gap: 50.0,
            spouse_gap: 25.0,
            top_margin: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the width of a person card.
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    /// Returns the height of a person card.
    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    /// Returns the horizontal gap between adjacent groups in a row.
    pub fn horizontal_gap(&self) -> f32 {
        self.horizontal_gap
    }

    /// Returns the vertical gap between rows.
    pub fn vertical_gap(&self) -> f32 {
        self.vertical_gap
    }

    /// Returns the gap between the two cards of a couple.
    pub fn spouse_gap(&self) -> f32 {
        self.spouse_gap
    }

    /// Returns the margin above the first row.
    pub fn top_margin(&self) -> f32 {
        self.top_margin
    }

    /// Returns a builder-style copy with the given node width.
    pub fn with_node_width(mut self, node_width: f32) -> Self {
        self.node_width = node_width;
        self
    }

    /// Returns a builder-style copy with the given node height.
    pub fn with_node_height(mut self, node_height: f32) -> Self {
        self.node_height = node_height;
        self
    }

    /// Returns a builder-style copy with the given horizontal gap.
    pub fn with_horizontal_gap(mut self, horizontal_gap: f32) -> Self {
        self.horizontal_gap = horizontal_gap;
        self
    }

    /// Returns a builder-style copy with the given vertical gap.
    pub fn with_vertical_gap(mut self, vertical_gap: f32) -> Self {
        self.vertical_gap = vertical_gap;
        self
    }

    /// Returns a builder-style copy with the given spouse gap.
    pub fn with_spouse_gap(mut self, spouse_gap: f32) -> Self {
        self.spouse_gap = spouse_gap;
        self
    }

    /// Returns a builder-style copy with the given top margin.
    pub fn with_top_margin(mut self, top_margin: f32) -> Self {
        self.top_margin = top_margin;
        self
    }

    /// The margin applied around the whole drawing.
    ///
    /// The top margin doubles as the uniform margin on the remaining sides:
    /// the horizontal cursor starts at it and the canvas envelope pads the
    /// drawing's maximum extents by it.
    pub(crate) fn margins(&self) -> Insets {
        Insets::uniform(self.top_margin)
    }

    /// Validates that every option is a positive, finite number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] naming the first offending
    /// option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("horizontal_gap", self.horizontal_gap),
            ("vertical_gap", self.vertical_gap),
            ("spouse_gap", self.spouse_gap),
            ("top_margin", self.top_margin),
        ];

        for (name, value) in options {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        Ok(())
    }
}

/// Visual styling configuration for rendered trees.
///
/// Controls appearance options such as stroke colors. Fields that are not
/// set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for the canvas, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Stroke [`Color`] for spouse links, as a color string.
    #[serde(default)]
    spouse_color: Option<String>,

    /// Stroke [`Color`] for parent-child links, as a color string.
    #[serde(default)]
    parent_child_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] from optional color strings.
    ///
    /// Strings are validated lazily, when the corresponding accessor is
    /// called.
    pub fn new(
        background_color: Option<String>,
        spouse_color: Option<String>,
        parent_child_color: Option<String>,
    ) -> Self {
        Self {
            background_color,
            spouse_color,
            parent_child_color,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.background_color.as_deref(), "background")
    }

    /// Returns the parsed spouse-link stroke [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn spouse_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.spouse_color.as_deref(), "spouse link")
    }

    /// Returns the parsed parent-child stroke [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn parent_child_color(&self) -> Result<Option<Color>, String> {
        parse_color(self.parent_child_color.as_deref(), "parent-child link")
    }
}

fn parse_color(value: Option<&str>, what: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {what} color in config: {err}"))
}

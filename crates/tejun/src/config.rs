//! Configuration types for Tejun model generation and rendering.
//!
//! All types implement [`serde::Deserialize`] so configuration can be loaded
//! from external sources (the CLI loads TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Diagram-plane origin and horizontal spacing.
//! - [`StyleConfig`] - Visual styling options for the SVG preview.

use serde::Deserialize;

/// Top-level application configuration combining layout and style settings.
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
    /// Creates a new [`AppConfig`] with the specified layout and style
    /// configurations.
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

/// Placement constants for the deterministic left-to-right layout.
///
/// Defaults reproduce the canonical plane: elements start at `(100, 100)`
/// with 180 units between successive x positions.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// X-coordinate of the first element's bounding box.
    #[serde(default = "default_origin_x")]
    origin_x: f32,

    /// Y-coordinate of the top of the tallest element row.
    #[serde(default = "default_origin_y")]
    origin_y: f32,

    /// Horizontal distance between successive element x positions.
    #[serde(default = "default_spacing")]
    spacing: f32,
}

fn default_origin_x() -> f32 {
    100.0
}

fn default_origin_y() -> f32 {
    100.0
}

fn default_spacing() -> f32 {
    180.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: default_origin_x(),
            origin_y: default_origin_y(),
            spacing: default_spacing(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified constants.
    pub fn new(origin_x: f32, origin_y: f32, spacing: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            spacing,
        }
    }

    /// Returns the x-coordinate of the first element.
    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    /// Returns the y-coordinate of the top of the element row.
    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    /// Returns the horizontal spacing between elements.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }
}

/// Visual styling configuration for the SVG preview.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Background color for the preview canvas, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the given background color.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the configured background color, defaulting to white.
    pub fn background_color(&self) -> &str {
        self.background_color.as_deref().unwrap_or("white")
    }
}

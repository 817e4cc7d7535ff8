//! Heroicons renderer - SVG icon components for template engines
//!
//! This library resolves a named icon against a bundled dataset, merges
//! default and caller-supplied presentation attributes, and hands the
//! result to a template layer (or serializes it to markup itself).
//!
//! # Example
//!
//! ```rust
//! use heroicons_render::{render, RenderRequest};
//!
//! let svg = render(&RenderRequest::new("ellipsis-vertical")).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("stroke=\"currentColor\""));
//! ```

pub mod dataset;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod resolver;
pub mod suggest;

pub use dataset::{AttrMap, DatasetError, IconSet, Variant};
pub use error::IconError;
pub use registry::{
    register_icon_component, ComponentRegistry, IconComponent, RegistryConfig, RegistryError,
};
pub use renderer::{render_svg, SvgConfig};
pub use resolver::{resolve, RenderRequest, RenderedIcon};

use std::sync::Arc;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Dataset to resolve against
    pub icons: Arc<IconSet>,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            icons: IconSet::bundled(),
            svg: SvgConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dataset to resolve against
    pub fn with_icons(mut self, icons: Arc<IconSet>) -> Self {
        self.icons = icons;
        self
    }

    /// Set the SVG output configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Resolve and serialize one icon with default configuration
///
/// This is the main entry point for standalone use. Hosts that own their
/// markup serialization should call [`resolve`] instead and consume the
/// attribute maps directly.
///
/// # Example
///
/// ```rust
/// use heroicons_render::{render, RenderRequest};
///
/// let svg = render(
///     &RenderRequest::new("heart")
///         .with_variant("solid")
///         .with_color("crimson"),
/// )
/// .unwrap();
///
/// assert!(svg.contains("fill=\"crimson\""));
/// assert!(svg.contains("stroke=\"none\""));
/// ```
pub fn render(request: &RenderRequest) -> Result<String, IconError> {
    render_with_config(request, RenderConfig::default())
}

/// Resolve and serialize one icon with custom configuration
///
/// # Example
///
/// ```rust
/// use heroicons_render::{render_with_config, RenderConfig, RenderRequest, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::new().with_pretty_print(true));
/// let svg = render_with_config(&RenderRequest::new("x-mark"), config).unwrap();
///
/// assert!(svg.contains("\n"));
/// ```
pub fn render_with_config(
    request: &RenderRequest,
    config: RenderConfig,
) -> Result<String, IconError> {
    let icon = resolve(&config.icons, request)?;
    Ok(render_svg(&icon, &config.svg))
}

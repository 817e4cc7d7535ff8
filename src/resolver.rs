//! Icon resolution: request validation, dataset lookup, attribute merging

use crate::dataset::{AttrMap, IconSet, Variant};
use crate::error::IconError;
use crate::suggest;

/// One icon render request
///
/// Carries the defaults a caller most often wants; use the `with_*` methods
/// to adjust individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Icon name without the variant prefix, e.g. `"ellipsis-vertical"`
    pub name: String,
    /// Variant string, validated against the fixed set during resolution
    pub variant: String,
    /// Pixel dimension applied to both width and height
    pub size: u32,
    /// Any CSS color token
    pub color: String,
    /// Only meaningful for the outline variant
    pub stroke_width: f32,
    /// Passed through to the `viewBox` attribute unvalidated
    pub viewbox: String,
    /// Extra `<svg>` attributes; win over computed defaults on collision
    pub attrs: AttrMap,
}

impl RenderRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: "outline".to_string(),
            size: 24,
            color: "currentColor".to_string(),
            stroke_width: 1.5,
            viewbox: "0 0 24 24".to_string(),
            attrs: AttrMap::new(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_viewbox(mut self, viewbox: impl Into<String>) -> Self {
        self.viewbox = viewbox.into();
        self
    }

    /// Add one overlay attribute, e.g. `class`, `id`, or an ARIA attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// The resolved output: merged `<svg>` attributes plus the ordered path
/// sequence to emit as child elements
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    pub attrs: AttrMap,
    pub paths: Vec<AttrMap>,
}

/// Resolve a request against a dataset
///
/// Pure function: identical inputs always produce identical output. Path
/// attributes pass through verbatim; there is no per-path override
/// mechanism.
pub fn resolve(icons: &IconSet, request: &RenderRequest) -> Result<RenderedIcon, IconError> {
    let variant: Variant = request.variant.parse()?;

    let paths = icons
        .lookup(variant, &request.name)
        .ok_or_else(|| IconError::UnknownIcon {
            name: request.name.clone(),
            suggestions: suggest::nearest(&request.name, icons.base_names()),
        })?;

    // Defaults go in first so overlay keys replace them in place on
    // collision; unknown overlay keys append in overlay order.
    let mut attrs = AttrMap::new();
    attrs.insert("viewBox".to_string(), request.viewbox.clone());
    attrs.insert(
        "style".to_string(),
        format!("width: {0}px; height: {0}px", request.size),
    );
    attrs.insert("aria-hidden".to_string(), "true".to_string());

    // The SVG applies the color differently in the two variants
    match variant {
        Variant::Outline => {
            attrs.insert("fill".to_string(), "none".to_string());
            attrs.insert("stroke".to_string(), request.color.clone());
            attrs.insert("stroke-width".to_string(), request.stroke_width.to_string());
        }
        Variant::Solid => {
            attrs.insert("fill".to_string(), request.color.clone());
            attrs.insert("stroke".to_string(), "none".to_string());
        }
    }

    for (key, value) in &request.attrs {
        attrs.insert(key.clone(), value.clone());
    }

    Ok(RenderedIcon {
        attrs,
        paths: paths.to_vec(),
    })
}

//! Icon dataset: variants, path descriptors, and TOML asset loading
//!
//! The dataset is a static mapping from `"<variant>_<name>"` keys to the
//! ordered list of `<path>` attribute maps that compose one glyph. A bundled
//! asset ships with the crate and is parsed once on first use; alternate
//! datasets can be loaded from TOML files with the same layout.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::error::IconError;

/// Attribute map for a single SVG element, in document order
///
/// Order matters twice over: multiple paths compose a glyph and draw in
/// sequence, and merged `<svg>` attributes must serialize deterministically.
pub type AttrMap = IndexMap<String, String>;

/// Errors that can occur when loading or parsing icon datasets
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read icon dataset file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon dataset TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Visual style of an icon: stroked ("outline") or filled ("solid")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Outline,
    Solid,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Outline, Variant::Solid];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Outline => "outline",
            Variant::Solid => "solid",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = IconError;

    /// Template engines hand us untyped input; the fixed two-value set is
    /// enforced here at the string boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outline" => Ok(Variant::Outline),
            "solid" => Ok(Variant::Solid),
            other => Err(IconError::InvalidVariant {
                value: other.to_string(),
            }),
        }
    }
}

/// TOML structure for deserializing icon datasets
#[derive(Deserialize)]
struct TomlDataset {
    metadata: Option<TomlMetadata>,
    icons: IndexMap<String, Vec<AttrMap>>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    source: Option<String>,
    version: Option<String>,
    license: Option<String>,
}

/// The dataset asset shipped with the crate (Heroicons, MIT)
const BUNDLED_TOML: &str = include_str!("../assets/heroicons.toml");

static BUNDLED: Lazy<Arc<IconSet>> = Lazy::new(|| {
    Arc::new(IconSet::from_str(BUNDLED_TOML).expect("Bundled icon dataset should be valid TOML"))
});

/// An immutable icon dataset
///
/// Read-only after construction, so sharing one instance across
/// request-handling threads needs no locking.
#[derive(Debug, Clone)]
pub struct IconSet {
    /// Where the path data was extracted from
    pub source: Option<String>,
    /// Upstream iconset version
    pub version: Option<String>,
    /// Upstream license
    pub license: Option<String>,
    icons: IndexMap<String, Vec<AttrMap>>,
}

impl IconSet {
    /// Load a dataset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a dataset from a TOML string
    pub fn from_str(content: &str) -> Result<Self, DatasetError> {
        let parsed: TomlDataset = toml::from_str(content)?;

        Ok(IconSet {
            source: parsed.metadata.as_ref().and_then(|m| m.source.clone()),
            version: parsed.metadata.as_ref().and_then(|m| m.version.clone()),
            license: parsed.metadata.as_ref().and_then(|m| m.license.clone()),
            icons: parsed.icons,
        })
    }

    /// The dataset bundled with the crate, parsed once per process
    pub fn bundled() -> Arc<IconSet> {
        Arc::clone(&BUNDLED)
    }

    /// Look up the path sequence for a `(variant, name)` pair
    pub fn lookup(&self, variant: Variant, name: &str) -> Option<&[AttrMap]> {
        let key = format!("{}_{}", variant.as_str(), name);
        self.icons.get(&key).map(|paths| paths.as_slice())
    }

    /// Check whether a `(variant, name)` pair exists
    pub fn contains(&self, variant: Variant, name: &str) -> bool {
        self.lookup(variant, name).is_some()
    }

    /// All raw `variant_name` keys, in dataset order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(|key| key.as_str())
    }

    /// All base names with the variant prefix stripped, deduplicated
    /// across variants and sorted
    pub fn base_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .icons
            .keys()
            .filter_map(|key| key.split_once('_').map(|(_, name)| name))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Base names available in one variant, sorted
    pub fn names_for(&self, variant: Variant) -> Vec<&str> {
        let prefix = format!("{}_", variant.as_str());
        let mut names: Vec<&str> = self
            .icons
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[metadata]
source = "heroicons.com"
version = "2.1.5"
license = "MIT"

[icons]
outline_dot = [
    { stroke-linecap = "round", d = "M12 12h.01" },
]
solid_dot = [
    { fill-rule = "evenodd", d = "M12 11a1 1 0 1 0 0 2 1 1 0 0 0 0-2Z", clip-rule = "evenodd" },
]
solid_pair = [
    { d = "M4 4h4v4H4Z" },
    { d = "M16 16h4v4h-4Z" },
]
"#;

    #[test]
    fn test_parse_with_metadata() {
        let icons = IconSet::from_str(SAMPLE).expect("Should parse");
        assert_eq!(icons.source.as_deref(), Some("heroicons.com"));
        assert_eq!(icons.version.as_deref(), Some("2.1.5"));
        assert_eq!(icons.license.as_deref(), Some("MIT"));
        assert_eq!(icons.len(), 3);
    }

    #[test]
    fn test_parse_without_metadata() {
        let icons = IconSet::from_str(
            r#"
[icons]
outline_dot = [{ d = "M12 12h.01" }]
"#,
        )
        .expect("Should parse");
        assert_eq!(icons.source, None);
        assert!(icons.contains(Variant::Outline, "dot"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = IconSet::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(DatasetError::ParseError(_))));
    }

    #[test]
    fn test_lookup_returns_ordered_paths() {
        let icons = IconSet::from_str(SAMPLE).expect("Should parse");
        let paths = icons.lookup(Variant::Solid, "pair").expect("Should exist");
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].get("d").map(String::as_str), Some("M4 4h4v4H4Z"));
        assert_eq!(
            paths[1].get("d").map(String::as_str),
            Some("M16 16h4v4h-4Z")
        );
    }

    #[test]
    fn test_lookup_missing() {
        let icons = IconSet::from_str(SAMPLE).expect("Should parse");
        assert_eq!(icons.lookup(Variant::Outline, "pair"), None);
        assert_eq!(icons.lookup(Variant::Outline, "nope"), None);
    }

    #[test]
    fn test_base_names_deduplicated_and_sorted() {
        let icons = IconSet::from_str(SAMPLE).expect("Should parse");
        assert_eq!(icons.base_names(), vec!["dot", "pair"]);
    }

    #[test]
    fn test_names_for_variant() {
        let icons = IconSet::from_str(SAMPLE).expect("Should parse");
        assert_eq!(icons.names_for(Variant::Outline), vec!["dot"]);
        assert_eq!(icons.names_for(Variant::Solid), vec!["dot", "pair"]);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("outline".parse::<Variant>().unwrap(), Variant::Outline);
        assert_eq!("solid".parse::<Variant>().unwrap(), Variant::Solid);
        let err = "triangle".parse::<Variant>().unwrap_err();
        assert!(matches!(err, IconError::InvalidVariant { .. }));
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let icons = IconSet::bundled();
        assert!(!icons.is_empty());
        assert!(icons.contains(Variant::Outline, "ellipsis-vertical"));
        assert!(icons.contains(Variant::Solid, "ellipsis-vertical"));
        assert_eq!(icons.license.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_bundled_dataset_covers_both_variants() {
        let icons = IconSet::bundled();
        for name in icons.base_names() {
            assert!(
                icons.contains(Variant::Outline, name),
                "missing outline variant for {}",
                name
            );
            assert!(
                icons.contains(Variant::Solid, name),
                "missing solid variant for {}",
                name
            );
        }
    }
}

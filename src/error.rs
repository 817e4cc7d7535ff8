//! Error types for icon resolution

use thiserror::Error;

/// Errors raised while resolving an icon request
///
/// Both kinds are caller input errors: resolution is a pure lookup, so
/// there is no transient failure to retry and no partial result.
#[derive(Error, Debug)]
pub enum IconError {
    /// The requested variant is not one of the two supported styles
    #[error("Invalid variant: {value}. Must be either 'outline' or 'solid'.")]
    InvalidVariant { value: String },

    /// The composed `variant_name` key is absent from the dataset
    #[error("Invalid icon name: {name}.{}", format_suggestions(.suggestions))]
    UnknownIcon {
        name: String,
        /// Nearest known base names, best match first; may be empty
        suggestions: Vec<String>,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted = suggestions
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(" Did you mean any of {}?", quoted)
}

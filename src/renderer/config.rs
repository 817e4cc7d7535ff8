//! Configuration for SVG markup output

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration for standalone .svg files
    pub standalone: bool,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    /// Defaults suit the inline-fragment case, where the markup lands
    /// inside a host page
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: false,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

//! SVG element writing and escaping

use crate::dataset::AttrMap;
use crate::resolver::RenderedIcon;

use super::SvgConfig;

/// Serialize a resolved icon to SVG markup
///
/// Attributes emit in map order; the `xmlns` namespace always leads on the
/// root element so the output is valid both inline and standalone.
pub fn render_svg(icon: &RenderedIcon, config: &SvgConfig) -> String {
    let nl = if config.pretty_print { "\n" } else { "" };
    let indent = if config.pretty_print { "  " } else { "" };

    let mut svg = String::new();

    if config.standalone {
        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push_str(nl);
    }

    svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    push_attrs(&mut svg, &icon.attrs);
    svg.push('>');
    svg.push_str(nl);

    for path in &icon.paths {
        svg.push_str(indent);
        svg.push_str("<path");
        push_attrs(&mut svg, path);
        svg.push_str("/>");
        svg.push_str(nl);
    }

    svg.push_str("</svg>");

    svg
}

fn push_attrs(out: &mut String, attrs: &AttrMap) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_xml(value));
        out.push('"');
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

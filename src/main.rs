//! Heroicons renderer CLI
//!
//! Usage:
//!   heroicons-render [OPTIONS] [NAME]
//!
//! Options:
//!   -v, --variant <VARIANT>   Icon variant: outline or solid
//!   -s, --size <PX>           Pixel size for width and height
//!   -c, --color <COLOR>       Stroke or fill color
//!   -l, --list                List all icon keys in the dataset
//!       --gallery             Emit an HTML preview page of the dataset
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use heroicons_render::{
    render_svg, render_with_config, resolve, IconSet, RenderConfig, RenderRequest, SvgConfig,
    Variant,
};

#[derive(Parser)]
#[command(name = "heroicons-render")]
#[command(about = "Render Heroicons as SVG markup")]
struct Cli {
    /// Icon name without variant prefix (e.g. "ellipsis-vertical")
    name: Option<String>,

    /// Icon variant: outline or solid
    #[arg(short, long, default_value = "outline")]
    variant: String,

    /// Pixel size applied to both width and height
    #[arg(short, long, default_value_t = 24)]
    size: u32,

    /// Stroke or fill color (any CSS color token)
    #[arg(short, long, default_value = "currentColor")]
    color: String,

    /// Stroke width, outline variant only
    #[arg(short = 'w', long, default_value_t = 1.5)]
    stroke_width: f32,

    /// viewBox for the <svg> element
    #[arg(long, default_value = "0 0 24 24")]
    viewbox: String,

    /// Extra <svg> attribute as KEY=VALUE (repeatable)
    #[arg(short, long = "attr", value_name = "KEY=VALUE")]
    attrs: Vec<String>,

    /// Icon dataset file (TOML) to use instead of the bundled set
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List all icon keys in the dataset
    #[arg(short, long)]
    list: bool,

    /// Emit an HTML page previewing every icon in the dataset
    #[arg(long)]
    gallery: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load the dataset
    let icons = match &cli.dataset {
        Some(path) => match IconSet::from_file(path) {
            Ok(set) => Arc::new(set),
            Err(e) => {
                eprintln!("Error loading dataset '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => IconSet::bundled(),
    };

    // Handle dataset-browsing flags first
    if cli.list {
        for name in icons.names() {
            println!("{}", name);
        }
        return;
    }

    if cli.gallery {
        emit(cli.output.as_ref(), &gallery(&icons));
        return;
    }

    // If no icon name and stdin is a terminal (interactive), show intro help
    let name = match &cli.name {
        Some(name) => name.clone(),
        None => {
            if io::stdin().is_terminal() {
                print_intro();
                return;
            }
            eprintln!("Error: no icon name given");
            std::process::exit(1);
        }
    };

    let mut request = RenderRequest::new(name)
        .with_variant(cli.variant.as_str())
        .with_size(cli.size)
        .with_color(cli.color.as_str())
        .with_stroke_width(cli.stroke_width)
        .with_viewbox(cli.viewbox.as_str());

    for attr in &cli.attrs {
        match attr.split_once('=') {
            Some((key, value)) => request = request.with_attr(key, value),
            None => {
                eprintln!("Error: invalid attribute '{}', expected KEY=VALUE", attr);
                std::process::exit(1);
            }
        }
    }

    let config = RenderConfig::new().with_icons(icons).with_svg(
        SvgConfig::new()
            .with_standalone(cli.output.is_some())
            .with_pretty_print(true),
    );

    match render_with_config(&request, config) {
        Ok(svg) => emit(cli.output.as_ref(), &svg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn emit(output: Option<&PathBuf>, content: &str) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, content) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", content),
    }
}

/// Build an HTML page previewing every icon in the dataset, grouped by
/// variant, each cell captioned with its dataset key
fn gallery(icons: &IconSet) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
<title>heroicons-render</title>
<style>
.icons-grid { display: flex; flex-wrap: wrap; gap: 16px; font-size: 12px; font-family: monospace; }
.icon { flex: 1 0 160px; display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 8px 0; }
</style>
</head>
<body>
"#,
    );

    for variant in Variant::ALL {
        html.push_str(&format!("<h2>{}</h2>\n<div class=\"icons-grid\">\n", variant));
        for name in icons.names_for(variant) {
            let request = RenderRequest::new(name)
                .with_variant(variant.as_str())
                .with_size(64);
            let Ok(icon) = resolve(icons, &request) else {
                // Names come from the dataset itself, so this only fires
                // on a malformed custom asset; skip the cell.
                continue;
            };
            html.push_str("<div class=\"icon\">");
            html.push_str(&render_svg(&icon, &SvgConfig::default()));
            html.push_str(&format!("<code>{}_{}</code></div>\n", variant, name));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn print_intro() {
    println!(
        r#"heroicons-render - Heroicons as SVG markup

USAGE:
    heroicons-render [OPTIONS] [NAME]

OPTIONS:
    -v, --variant       Icon variant: outline (default) or solid
    -s, --size          Pixel size for width and height (default 24)
    -c, --color         Stroke or fill color (default currentColor)
    -w, --stroke-width  Stroke width, outline only (default 1.5)
    -a, --attr          Extra <svg> attribute as KEY=VALUE (repeatable)
    -d, --dataset       Alternate icon dataset (TOML file)
    -o, --output        Write to a file instead of stdout
    -l, --list          List all icon keys in the dataset
        --gallery       Emit an HTML preview page of the dataset
    -h, --help          Print help

QUICK START:
    heroicons-render ellipsis-vertical -c red > icon.svg
    heroicons-render --gallery -o gallery.html

Run --list to see every icon bundled with this build."#
    );
}

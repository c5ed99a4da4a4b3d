// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render values to SVG.
//!
//! Insert comma-separated values into a BST through the in-memory service,
//! lay the tree out and print the SVG on stdout.
//!
//! Run:
//! - `cargo run -p canopy_demos --example render_values -- "50, 30, 70, 20, 40"`
//! - `RUST_LOG=canopy_layout=trace cargo run -p canopy_demos --example render_values`

use canopy_api::{CreateTreeRequest, MemoryTreeApi, TreeApi, display, input};
use canopy_layout::{LayoutConfig, TreeLayoutRenderer};
use canopy_scene::SvgStyle;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "50, 30, 70, 20, 40, 60, 80".to_owned());
    let values = match input::parse_values(&text) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut api = MemoryTreeApi::new();
    let record = api
        .create(&CreateTreeRequest::new("cli", values))
        .expect("in-memory create");
    for (label, value) in display::summary(&record) {
        eprintln!("{label}: {value}");
    }

    let renderer = TreeLayoutRenderer::new(LayoutConfig::default().with_decay(0.9));
    let scene = renderer
        .layout(&record.snapshot, 800.0)
        .expect("default config is valid");
    print!("{}", scene.to_svg(&SvgStyle::default()));
}

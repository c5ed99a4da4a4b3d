// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a service snapshot.
//!
//! Read a tree record as returned by the service (JSON) from stdin, check its
//! metadata against the node graph and print the SVG on stdout.
//!
//! Run:
//! - `cargo run -p canopy_demos --example render_snapshot < tree.json`

use std::io::Read;

use canopy_api::{TreeRecord, decode, display};
use canopy_layout::{LayoutConfig, layout};
use canopy_scene::SvgStyle;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut json = String::new();
    std::io::stdin()
        .read_to_string(&mut json)
        .expect("read stdin");
    let record: TreeRecord = match decode(&json) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("malformed tree record: {err}");
            std::process::exit(2);
        }
    };
    if let Err(err) = record.snapshot.validate() {
        warn!(%err, "snapshot metadata is inconsistent");
    }
    eprintln!(
        "{}",
        serde_json::to_string_pretty(&display::simplified_json(&record.snapshot))
            .expect("serialize JSON value")
    );

    match layout(&record.snapshot, 800.0, &LayoutConfig::default()) {
        Ok(scene) => print!("{}", scene.to_svg(&SvgStyle::default())),
        Err(err) => {
            eprintln!("cannot lay out tree: {err}");
            std::process::exit(1);
        }
    }
}

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browse trees.
//!
//! Drive a viewer session against the in-memory service: create a few
//! trees, page through them, load one, delete one.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p canopy_demos --example browse_trees`

use canopy_api::{ApiConfig, Browser, MemoryTreeApi, display};
use canopy_layout::LayoutConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::from_env().with_page_size(3);
    let mut browser = Browser::with_config(MemoryTreeApi::new(), config);
    let inputs = [
        ("balanced", "50, 30, 70, 20, 40, 60, 80"),
        ("chain", "1, 2, 3, 4, 5"),
        ("dupes", "5, 5, 3, 8, 3"),
        ("bad name <x>", "1"),
        ("bad values", "1, two"),
        ("single", "42"),
    ];
    for (name, numbers) in inputs {
        if !browser.submit(name, numbers) {
            println!("{name:?}: {}", browser.error().unwrap_or("rejected"));
        }
    }

    browser.show_previous();
    loop {
        println!("page {} of {}", browser.page() + 1, browser.total_pages());
        for tree in browser.trees() {
            let badge = display::balance_badge(&tree.snapshot).unwrap_or("-");
            println!("  #{} {}  {}  [{badge}]", tree.id, tree.name, display::list_metadata(tree));
            if let Some(date) = display::list_date(tree) {
                println!("    created {date}");
            }
        }
        if !browser.next_page() {
            break;
        }
    }

    if browser.load("2") {
        let cfg = LayoutConfig::default();
        if let Some(Ok(scene)) = browser.render(640.0, &cfg) {
            println!(
                "tree 2 drawn on {}x{} with {} primitives",
                scene.size().width,
                scene.size().height,
                scene.len()
            );
        }
    }

    browser.show_previous();
    if browser.delete("1") {
        println!("deleted tree 1, {} trees on first page", browser.trees().len());
    }
    if !browser.load("1") {
        println!("load 1: {}", browser.error().unwrap_or("failed"));
    }
}

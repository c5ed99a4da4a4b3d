// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Layout: place the nodes of a serialized binary tree on a canvas.
//!
//! Given a [`TreeSnapshot`] (a root [`TreeNode`] plus node count, height, balance
//! flag and the submitted values) and a viewport width, this crate computes a
//! 2-D position for every node and emits a [`Scene`](canopy_scene::Scene) of
//! discs, value labels and parent→child edges sized to fit the tree's depth.
//!
//! ## Algorithm
//!
//! - The root sits at `(width / 2, top_margin)`.
//! - A node at depth `d` places its children `width / 2^(d + 2) * decay^d` to its
//!   left and right ([`LayoutConfig::offset_at`]), one `level_spacing` lower.
//!   The horizontal budget at each depth is the full width split evenly between
//!   `2^d` slots, so sibling subtrees never overlap. `decay` (default `1.0`) only
//!   shrinks offsets, which keeps that guarantee.
//! - The canvas is `width` wide and `max(min_height, (H + 1) * level_spacing +
//!   canvas_margin)` tall, where `H` is the larger of the reported height and the
//!   deepest level actually laid out.
//!
//! Traversal is pre-order over an explicit stack. A node graph deeper than its
//! node count allows fails with [`LayoutError::MalformedTree`] instead of
//! recursing without bound.
//!
//! ## Height convention
//!
//! Heights count edges: a single node has height `0` and an empty tree has
//! height [`EMPTY_HEIGHT`] (`-1`). Snapshots that report `0` for an empty tree
//! are accepted too.
//!
//! ## Not a tree library
//!
//! Insertion, search and balancing happen wherever the snapshot was produced.
//! This crate reads the node graph as given and does not re-check BST ordering.
//!
//! # Example
//!
//! ```rust
//! use canopy_layout::{LayoutConfig, TreeLayoutRenderer, TreeNode, TreeSnapshot};
//!
//! let root = TreeNode::leaf(50)
//!     .with_left(TreeNode::leaf(30))
//!     .with_right(TreeNode::leaf(70));
//! let snapshot = TreeSnapshot::from_root(Some(root));
//!
//! let renderer = TreeLayoutRenderer::new(LayoutConfig::default());
//! let layout = renderer.position(&snapshot, 800.0).unwrap();
//! let xs: Vec<f64> = layout.nodes().iter().map(|n| n.x()).collect();
//! assert_eq!(xs, [400.0, 200.0, 600.0]);
//!
//! let scene = layout.to_scene();
//! assert_eq!(scene.circles().count(), 3);
//! assert_eq!(scene.edges().count(), 2);
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`TreeSnapshot`], [`TreeNode`] and [`LayoutConfig`]
//!   using the collaborator's camelCase field names.
//! - `tracing`: emit `tracing` events for each layout pass.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod logging;

pub mod config;
pub mod error;
pub mod layout;
pub mod types;

pub use config::LayoutConfig;
pub use error::{LayoutError, SnapshotError};
pub use layout::{PositionedNode, TreeLayout, TreeLayoutRenderer, layout};
pub use types::{EMPTY_HEIGHT, NodeKey, TreeNode, TreeSnapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_function_matches_renderer() {
        let snap = TreeSnapshot::from_root(Some(TreeNode::leaf(1).with_right(TreeNode::leaf(2))));
        let cfg = LayoutConfig::default().with_decay(0.75);
        assert_eq!(
            layout(&snap, 500.0, &cfg),
            TreeLayoutRenderer::new(cfg).layout(&snap, 500.0)
        );
    }
}

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for layout and snapshot validation.

/// Errors returned by a layout pass.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The viewport width was zero, negative, or not finite.
    #[error("viewport width must be positive and finite, got {0}")]
    InvalidViewport(f64),
    /// A [`LayoutConfig`](crate::LayoutConfig) field is out of range.
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(&'static str),
    /// The node graph is deeper than its reported size allows.
    ///
    /// A well-formed snapshot of `n` nodes is at most `n - 1` levels deep, so
    /// this indicates a collaborator contract violation.
    #[error("malformed tree: reached depth {depth}, limit is {limit}")]
    MalformedTree {
        /// Depth at which traversal stopped.
        depth: usize,
        /// The bound that was exceeded.
        limit: usize,
    },
}

/// Inconsistencies between a snapshot's metadata and its node graph.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// `nodeCount` disagrees with the number of reachable nodes.
    #[error("snapshot reports {reported} nodes but {actual} are reachable")]
    NodeCountMismatch {
        /// Value carried by the snapshot.
        reported: usize,
        /// Nodes reachable from the root.
        actual: usize,
    },
    /// `height` disagrees with the longest root-to-leaf path.
    #[error("snapshot reports height {reported} but the tree has height {actual}")]
    HeightMismatch {
        /// Value carried by the snapshot.
        reported: i32,
        /// Longest root-to-leaf path in edges, or -1 for an empty tree.
        actual: i32,
    },
}

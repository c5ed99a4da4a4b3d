// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass: snapshot → positioned nodes → scene.

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use canopy_scene::{Label, Scene};
use kurbo::{Circle, Line, Point, Size};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::logging::{debug, trace, warn};
use crate::types::{NodeKey, TreeNode, TreeSnapshot};

/// A node with its computed position. Read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode<'a> {
    node: &'a TreeNode,
    center: Point,
    depth: usize,
    parent: Option<Point>,
}

impl<'a> PositionedNode<'a> {
    /// The source node.
    pub fn node(&self) -> &'a TreeNode {
        self.node
    }

    /// The node's value.
    pub fn value(&self) -> i64 {
        self.node.value
    }

    /// Disc center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Horizontal position of the center.
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Vertical position of the center.
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Distance from the root; the root has depth `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Parent's disc center, or `None` for the root.
    pub fn parent_center(&self) -> Option<Point> {
        self.parent
    }

    /// Stable identity for diffing.
    pub fn key(&self) -> NodeKey {
        match &self.node.id {
            Some(id) => NodeKey::Id(id.clone()),
            None => NodeKey::Derived {
                value: self.node.value,
                x_bits: self.center.x.to_bits(),
                y_bits: self.center.y.to_bits(),
            },
        }
    }
}

/// Result of a layout pass: positioned nodes in pre-order plus the canvas size.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLayout<'a> {
    nodes: Vec<PositionedNode<'a>>,
    size: Size,
    node_radius: f64,
}

impl<'a> TreeLayout<'a> {
    /// Positioned nodes in pre-order (node, left subtree, right subtree).
    pub fn nodes(&self) -> &[PositionedNode<'a>] {
        &self.nodes
    }

    /// Canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of positioned nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree was empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest depth reached, or `None` when empty.
    pub fn max_depth(&self) -> Option<usize> {
        self.nodes.iter().map(PositionedNode::depth).max()
    }

    /// Emit drawable primitives.
    ///
    /// Per node, in pre-order: the edge from its parent (if any), its disc, then
    /// its label. Edges run from the bottom of the parent disc to the top of the
    /// child disc.
    pub fn to_scene(&self) -> Scene {
        let r = self.node_radius;
        let mut scene = Scene::with_capacity(self.size, self.nodes.len() * 3);
        for n in &self.nodes {
            if let Some(parent) = n.parent {
                scene.push_edge(Line::new(
                    Point::new(parent.x, parent.y + r),
                    Point::new(n.center.x, n.center.y - r),
                ));
            }
            scene.push_node(Circle::new(n.center, r));
            scene.push_label(Label::new(n.center, n.node.value.to_string()));
        }
        scene
    }
}

/// Lays out binary tree snapshots with a fixed [`LayoutConfig`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeLayoutRenderer {
    config: LayoutConfig,
}

struct Frame<'a> {
    node: &'a TreeNode,
    center: Point,
    depth: usize,
    parent: Option<Point>,
}

impl TreeLayoutRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute node positions for `snapshot` across `viewport_width`.
    ///
    /// The root sits at `(viewport_width / 2, top_margin)`. Children of a node at
    /// depth `d` sit [`LayoutConfig::offset_at`] to its left and right, one
    /// `level_spacing` lower. Traversal is pre-order on an explicit stack and
    /// fails with [`LayoutError::MalformedTree`] past
    /// `min(max_depth, 2 * max(node_count, 1))`.
    pub fn position<'a>(
        &self,
        snapshot: &'a TreeSnapshot,
        viewport_width: f64,
    ) -> Result<TreeLayout<'a>, LayoutError> {
        let cfg = &self.config;
        cfg.validate()?;
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            return Err(LayoutError::InvalidViewport(viewport_width));
        }

        let Some(root) = snapshot.root_node.as_ref() else {
            debug!(viewport_width, "layout of empty tree");
            return Ok(TreeLayout {
                nodes: Vec::new(),
                size: Size::new(viewport_width, cfg.canvas_height(None)),
                node_radius: cfg.node_radius,
            });
        };

        let limit = cfg.max_depth.min(snapshot.node_count.max(1).saturating_mul(2));
        let step = cfg.offset_step();
        // offsets[d] is the child offset for a parent at depth d.
        let mut offsets: Vec<f64> = vec![viewport_width * 0.25];
        let mut nodes = Vec::new();
        let mut deepest = 0;
        let mut stack = vec![Frame {
            node: root,
            center: Point::new(viewport_width * 0.5, cfg.top_margin),
            depth: 0,
            parent: None,
        }];

        while let Some(frame) = stack.pop() {
            if frame.depth > limit {
                warn!(
                    depth = frame.depth,
                    limit,
                    node_count = snapshot.node_count,
                    "tree deeper than its node count allows"
                );
                return Err(LayoutError::MalformedTree {
                    depth: frame.depth,
                    limit,
                });
            }
            deepest = deepest.max(frame.depth);
            nodes.push(PositionedNode {
                node: frame.node,
                center: frame.center,
                depth: frame.depth,
                parent: frame.parent,
            });
            if frame.node.is_leaf() {
                continue;
            }

            while offsets.len() <= frame.depth {
                let next = offsets[offsets.len() - 1] * step;
                offsets.push(next);
            }
            let offset = offsets[frame.depth];
            let child_y = frame.center.y + cfg.level_spacing;
            trace!(value = frame.node.value, depth = frame.depth, offset, "placing children");

            // Right is pushed first so the left subtree is visited first.
            if let Some(right) = frame.node.right.as_deref() {
                stack.push(Frame {
                    node: right,
                    center: Point::new(frame.center.x + offset, child_y),
                    depth: frame.depth + 1,
                    parent: Some(frame.center),
                });
            }
            if let Some(left) = frame.node.left.as_deref() {
                stack.push(Frame {
                    node: left,
                    center: Point::new(frame.center.x - offset, child_y),
                    depth: frame.depth + 1,
                    parent: Some(frame.center),
                });
            }
        }

        if nodes.len() != snapshot.node_count {
            warn!(
                reported = snapshot.node_count,
                actual = nodes.len(),
                "node count disagrees with node graph"
            );
        }
        let reported = snapshot.reported_height().unwrap_or(0);
        let levels = reported.max(deepest);
        let size = Size::new(viewport_width, cfg.canvas_height(Some(levels)));
        debug!(
            nodes = nodes.len(),
            height = levels,
            width = size.width,
            canvas_height = size.height,
            "laid out tree"
        );
        Ok(TreeLayout {
            nodes,
            size,
            node_radius: cfg.node_radius,
        })
    }

    /// Lay out `snapshot` and emit its scene.
    pub fn layout(&self, snapshot: &TreeSnapshot, viewport_width: f64) -> Result<Scene, LayoutError> {
        Ok(self.position(snapshot, viewport_width)?.to_scene())
    }
}

/// Lay out `snapshot` with `config` and emit its scene.
///
/// Shorthand for `TreeLayoutRenderer::new(*config).layout(snapshot, viewport_width)`.
pub fn layout(
    snapshot: &TreeSnapshot,
    viewport_width: f64,
    config: &LayoutConfig,
) -> Result<Scene, LayoutError> {
    TreeLayoutRenderer::new(*config).layout(snapshot, viewport_width)
}

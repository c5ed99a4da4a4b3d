// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration.

use crate::error::LayoutError;

/// Geometry parameters for a layout pass.
///
/// All lengths are in scene units (SVG user units).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutConfig {
    /// Radius `R` of each node disc.
    pub node_radius: f64,
    /// Vertical position `y0` of the root's center.
    pub top_margin: f64,
    /// Vertical distance between a parent's center and its children's centers.
    pub level_spacing: f64,
    /// Slack added below the last level when sizing the canvas.
    pub canvas_margin: f64,
    /// The canvas is never shorter than this.
    pub min_height: f64,
    /// Per-level damping `r` of the horizontal child offset, in `(0, 1]`.
    ///
    /// `1.0` is plain halving. Smaller values pull deep levels toward their
    /// parents; offsets only shrink, so subtrees still never cross.
    pub decay: f64,
    /// Optional cap on traversal depth, on top of the node-count bound.
    ///
    /// Unlimited by default: a well-formed chain of `n` nodes is `n - 1`
    /// levels deep and must still lay out.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_radius: 20.0,
            top_margin: 40.0,
            level_spacing: 80.0,
            canvas_margin: 40.0,
            min_height: 200.0,
            decay: 1.0,
            max_depth: usize::MAX,
        }
    }
}

impl LayoutConfig {
    /// Set the node radius.
    pub fn with_node_radius(mut self, radius: f64) -> Self {
        self.node_radius = radius;
        self
    }

    /// Set the level spacing.
    pub fn with_level_spacing(mut self, spacing: f64) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the per-level offset decay.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the minimum canvas height.
    pub fn with_min_height(mut self, min_height: f64) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the traversal depth cap.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that every field is usable and that the deepest disc fits the canvas.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            self.node_radius,
            self.top_margin,
            self.level_spacing,
            self.canvas_margin,
            self.min_height,
            self.decay,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(LayoutError::InvalidConfig("all lengths must be finite"));
        }
        if self.node_radius <= 0.0 {
            return Err(LayoutError::InvalidConfig("node radius must be positive"));
        }
        if self.level_spacing <= 0.0 {
            return Err(LayoutError::InvalidConfig("level spacing must be positive"));
        }
        if self.canvas_margin < 0.0 || self.min_height < 0.0 {
            return Err(LayoutError::InvalidConfig(
                "canvas margin and minimum height must not be negative",
            ));
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(LayoutError::InvalidConfig("decay must be in (0, 1]"));
        }
        if self.top_margin < self.node_radius {
            return Err(LayoutError::InvalidConfig(
                "top margin must be at least the node radius",
            ));
        }
        // Deepest center sits at top_margin + H * spacing; canvas bottom is
        // (H + 1) * spacing + canvas_margin.
        if self.top_margin + self.node_radius > self.level_spacing + self.canvas_margin {
            return Err(LayoutError::InvalidConfig(
                "top margin plus node radius must fit within one level plus the canvas margin",
            ));
        }
        Ok(())
    }

    /// Multiplier applied to a parent's child offset to get the next level's.
    pub(crate) fn offset_step(&self) -> f64 {
        self.decay * 0.5
    }

    /// Horizontal distance from a node at `depth` to each of its children.
    ///
    /// `width / 2^(depth + 2) * decay^depth`: the root's children sit at the
    /// centers of the two halves of the viewport, and every level halves the
    /// slot width again before damping.
    pub fn offset_at(&self, viewport_width: f64, depth: usize) -> f64 {
        let step = self.offset_step();
        let mut offset = viewport_width * 0.25;
        for _ in 0..depth {
            offset *= step;
        }
        offset
    }

    /// Canvas height for a tree whose deepest level index is `height`.
    ///
    /// `None` (an empty tree) yields `min_height`.
    pub fn canvas_height(&self, height: Option<usize>) -> f64 {
        match height {
            None => self.min_height,
            Some(h) => {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "Depths are bounded by the node count and far below 2^52."
                )]
                let levels = (h + 1) as f64;
                self.min_height
                    .max(levels * self.level_spacing + self.canvas_margin)
            }
        }
    }
}

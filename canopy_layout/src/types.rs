// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree model consumed by the layout: nodes, snapshots, and node identity.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};

use crate::error::SnapshotError;

/// Height reported for a tree with no nodes.
///
/// A single node has height `0`; heights count edges on the longest
/// root-to-leaf path. Some collaborators report `0` for an empty tree as well;
/// [`TreeSnapshot::validate`] accepts either for an empty snapshot.
pub const EMPTY_HEIGHT: i32 = -1;

/// A binary tree node that exclusively owns its children.
///
/// The structure is a strict tree: every non-root node has exactly one parent.
/// Cloning, comparing, hashing and dropping walk the tree with an explicit
/// stack, so arbitrarily deep chains are safe.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Stored key. Rendered as its decimal literal.
    pub value: i64,
    /// Left child, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub left: Option<Box<TreeNode>>,
    /// Right child, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub right: Option<Box<TreeNode>>,
    /// Stable identity for rendering and diffing.
    ///
    /// When absent, [`NodeKey::Derived`] is used instead.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<String>,
}

impl TreeNode {
    /// A node with no children and no id.
    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
            id: None,
        }
    }

    /// Replace the left child.
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Replace the right child.
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Set a stable id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Present children, left first.
    pub fn children(&self) -> impl Iterator<Item = &Self> + '_ {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Longest path to a leaf, in edges. A leaf has height `0`.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().map(|c| (c, depth + 1)));
        }
        deepest
    }

    /// Values in in-order (left, node, right) sequence.
    ///
    /// For a binary search tree this is sorted.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut stack: Vec<&Self> = Vec::new();
        let mut cursor = Some(self);
        while cursor.is_some() || !stack.is_empty() {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            let Some(node) = stack.pop() else { break };
            out.push(node.value);
            cursor = node.right.as_deref();
        }
        out
    }
}

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        // Post-order: children are finished before their parent is rebuilt.
        let mut done: Vec<Self> = Vec::new();
        let mut stack = vec![(self, false)];
        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right.as_deref().map(|n| (n, false)));
                stack.extend(node.left.as_deref().map(|n| (n, false)));
                continue;
            }
            // The left subtree finishes first, so the right clone is on top.
            let right = node.right.as_ref().and_then(|_| done.pop()).map(Box::new);
            let left = node.left.as_ref().and_then(|_| done.pop()).map(Box::new);
            done.push(Self {
                value: node.value,
                left,
                right,
                id: node.id.clone(),
            });
        }
        done.pop().unwrap_or_else(|| Self::leaf(self.value))
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value || a.id != b.id {
                return false;
            }
            for pair in [(&a.left, &b.left), (&a.right, &b.right)] {
                match pair {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TreeNode {}

impl Hash for TreeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            node.value.hash(state);
            node.id.hash(state);
            node.left.is_some().hash(state);
            node.right.is_some().hash(state);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Self>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// A tree as delivered by the collaborator: a root plus summary metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeSnapshot {
    /// Root node; absent only for an empty tree.
    #[cfg_attr(feature = "serde", serde(default))]
    pub root_node: Option<TreeNode>,
    /// Number of nodes reachable from `root_node`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub node_count: usize,
    /// Longest root-to-leaf path in edges; see [`EMPTY_HEIGHT`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: i32,
    /// Server-computed balance flag, `None` when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_balanced: Option<bool>,
    /// Raw values submitted to build the tree, in submission order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub original_inputs: Vec<i64>,
}

impl TreeSnapshot {
    /// A snapshot with no nodes.
    pub fn empty() -> Self {
        Self {
            root_node: None,
            node_count: 0,
            height: EMPTY_HEIGHT,
            is_balanced: None,
            original_inputs: Vec::new(),
        }
    }

    /// Build a snapshot around `root`, deriving `node_count` and `height`.
    pub fn from_root(root: Option<TreeNode>) -> Self {
        let (node_count, height) = match &root {
            Some(node) => (node.count(), clamp_height(node.height())),
            None => (0, EMPTY_HEIGHT),
        };
        Self {
            root_node: root,
            node_count,
            height,
            is_balanced: None,
            original_inputs: Vec::new(),
        }
    }

    /// Set the balance flag.
    pub fn with_balanced(mut self, balanced: Option<bool>) -> Self {
        self.is_balanced = balanced;
        self
    }

    /// Set the submitted values.
    pub fn with_original_inputs(mut self, inputs: impl Into<Vec<i64>>) -> Self {
        self.original_inputs = inputs.into();
        self
    }

    /// True if there is no root node.
    pub fn is_empty(&self) -> bool {
        self.root_node.is_none()
    }

    /// Reported height as a level index, or `None` for an empty tree.
    ///
    /// Negative heights on a non-empty snapshot are read as `0`.
    pub fn reported_height(&self) -> Option<usize> {
        self.root_node
            .as_ref()
            .map(|_| usize::try_from(self.height).unwrap_or(0))
    }

    /// Check `node_count` and `height` against the node graph.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let Some(root) = &self.root_node else {
            if self.node_count != 0 {
                return Err(SnapshotError::NodeCountMismatch {
                    reported: self.node_count,
                    actual: 0,
                });
            }
            if self.height != EMPTY_HEIGHT && self.height != 0 {
                return Err(SnapshotError::HeightMismatch {
                    reported: self.height,
                    actual: EMPTY_HEIGHT,
                });
            }
            return Ok(());
        };
        let actual = root.count();
        if actual != self.node_count {
            return Err(SnapshotError::NodeCountMismatch {
                reported: self.node_count,
                actual,
            });
        }
        let actual = clamp_height(root.height());
        if actual != self.height {
            return Err(SnapshotError::HeightMismatch {
                reported: self.height,
                actual,
            });
        }
        Ok(())
    }
}

fn clamp_height(height: usize) -> i32 {
    i32::try_from(height).unwrap_or(i32::MAX)
}

/// Identity of a laid-out node.
///
/// Explicit ids win. Without one, a node is identified by its value and the bit
/// patterns of its coordinates, which is stable across identical layout passes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Id carried by the node.
    Id(String),
    /// Identity derived from value and position.
    Derived {
        /// Node value.
        value: i64,
        /// `x.to_bits()`.
        x_bits: u64,
        /// `y.to_bits()`.
        y_bits: u64,
    },
}

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory stand-in for the tree service.
//!
//! Trees are built by standard BST insertion in submission order. Duplicate
//! values are ignored (they stay in `originalInputs`). Height counts edges and
//! a tree is balanced when, at every node, the subtree heights differ by at most
//! one.

use canopy_layout::{TreeNode, TreeSnapshot};
use tracing::{debug, info};

use crate::api::TreeApi;
use crate::error::{ApiError, Result};
use crate::input::validate_name;
use crate::wire::{CreateTreeRequest, TreePage, TreeRecord};

/// A [`TreeApi`] that keeps every tree in a `Vec`.
#[derive(Clone, Debug, Default)]
pub struct MemoryTreeApi {
    // Oldest first; listing walks it backwards.
    trees: Vec<TreeRecord>,
    next_id: u64,
}

impl MemoryTreeApi {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored trees.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl TreeApi for MemoryTreeApi {
    fn create(&mut self, request: &CreateTreeRequest) -> Result<TreeRecord> {
        let name = validate_name(&request.name)?;
        if request.values.is_empty() {
            return Err(ApiError::Validation("Values must not be empty".to_owned()));
        }
        self.next_id += 1;
        let record = TreeRecord {
            id: self.next_id.to_string(),
            name: name.to_owned(),
            created_at: None,
            snapshot: build_snapshot(&request.values),
        };
        info!(
            id = %record.id,
            nodes = record.snapshot.node_count,
            height = record.snapshot.height,
            "created tree"
        );
        self.trees.push(record.clone());
        Ok(record)
    }

    fn get(&self, id: &str) -> Result<TreeRecord> {
        self.trees
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_owned()))
    }

    fn list(&self, page: usize, page_size: usize) -> Result<TreePage> {
        if page_size == 0 {
            return Err(ApiError::Validation("Page size must be positive".to_owned()));
        }
        let trees: Vec<TreeRecord> = self
            .trees
            .iter()
            .rev()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect();
        debug!(page, page_size, returned = trees.len(), "listed trees");
        Ok(TreePage {
            trees,
            total_count: self.trees.len(),
            size: page_size,
        })
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let pos = self
            .trees
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_owned()))?;
        self.trees.remove(pos);
        info!(id, "deleted tree");
        Ok(())
    }
}

/// Insert `values` into an empty BST and summarize the result.
pub fn build_snapshot(values: &[i64]) -> TreeSnapshot {
    let mut root: Option<Box<TreeNode>> = None;
    for &value in values {
        insert(&mut root, value);
    }
    let root = root.map(|b| *b);
    let balanced = root.as_ref().map(is_balanced);
    TreeSnapshot::from_root(root)
        .with_balanced(balanced)
        .with_original_inputs(values)
}

fn insert(slot: &mut Option<Box<TreeNode>>, value: i64) {
    let mut slot = slot;
    while let Some(node) = slot {
        if value == node.value {
            return;
        }
        slot = if value < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *slot = Some(Box::new(TreeNode::leaf(value)));
}

/// True if, at every node, the subtree heights differ by at most one.
fn is_balanced(root: &TreeNode) -> bool {
    // Post-order; `levels` holds the heights (in levels) of finished subtrees.
    let mut levels: Vec<usize> = Vec::new();
    let mut stack = vec![(root, false)];
    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            stack.extend(node.right.as_deref().map(|n| (n, false)));
            stack.extend(node.left.as_deref().map(|n| (n, false)));
            continue;
        }
        let right = node.right.as_ref().and_then(|_| levels.pop()).unwrap_or(0);
        let left = node.left.as_ref().and_then(|_| levels.pop()).unwrap_or(0);
        if left.abs_diff(right) > 1 {
            return false;
        }
        levels.push(left.max(right) + 1);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(api: &mut MemoryTreeApi, name: &str, values: &[i64]) -> TreeRecord {
        api.create(&CreateTreeRequest::new(name, values)).unwrap()
    }

    #[test]
    fn builds_standard_bst() {
        let snap = build_snapshot(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(snap.node_count, 7);
        assert_eq!(snap.height, 2);
        assert_eq!(snap.is_balanced, Some(true));
        let root = snap.root_node.as_ref().unwrap();
        assert_eq!(root.value, 50);
        assert_eq!(root.left.as_ref().unwrap().value, 30);
        assert_eq!(root.right.as_ref().unwrap().right.as_ref().unwrap().value, 80);
        assert_eq!(snap.validate(), Ok(()));
    }

    #[test]
    fn chain_is_unbalanced() {
        let snap = build_snapshot(&[1, 2, 3, 4, 5]);
        assert_eq!(snap.height, 4);
        assert_eq!(snap.is_balanced, Some(false));
    }

    #[test]
    fn balance_checks_every_node() {
        // The root is within one level, but 30 leans left by two.
        let snap = build_snapshot(&[50, 30, 70, 20, 10, 60, 80]);
        assert_eq!(snap.is_balanced, Some(false));
        assert_eq!(build_snapshot(&[2, 1, 3, 4]).is_balanced, Some(true));
        assert_eq!(build_snapshot(&[7]).is_balanced, Some(true));
    }

    #[test]
    fn sorted_submission_builds_a_deep_chain() {
        let values: Vec<i64> = (0..20_000).collect();
        let mut api = MemoryTreeApi::new();
        let rec = create(&mut api, "sorted", &values);
        assert_eq!(rec.snapshot.height, 19_999);
        assert_eq!(rec.snapshot.is_balanced, Some(false));
        assert_eq!(rec.snapshot.validate(), Ok(()));
        assert_eq!(api.get(&rec.id).unwrap().snapshot.node_count, 20_000);
        api.delete(&rec.id).unwrap();
    }

    #[test]
    fn duplicates_are_ignored_but_kept_as_inputs() {
        let snap = build_snapshot(&[5, 3, 5, 3, 8]);
        assert_eq!(snap.node_count, 3);
        assert_eq!(snap.original_inputs, [5, 3, 5, 3, 8]);
        assert_eq!(snap.root_node.as_ref().unwrap().in_order(), [3, 5, 8]);
    }

    #[test]
    fn create_validates() {
        let mut api = MemoryTreeApi::new();
        let err = api.create(&CreateTreeRequest::new("  ", [1])).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = api.create(&CreateTreeRequest::new("ok", Vec::new())).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = api.create(&CreateTreeRequest::new("a<b", [1])).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(api.is_empty());
    }

    #[test]
    fn get_and_delete_unknown_ids() {
        let mut api = MemoryTreeApi::new();
        let rec = create(&mut api, " oak ", &[2, 1]);
        assert_eq!(rec.name, "oak");
        assert_eq!(api.get(&rec.id).unwrap(), rec);
        assert!(matches!(api.get("nope"), Err(ApiError::NotFound(id)) if id == "nope"));
        api.delete(&rec.id).unwrap();
        assert!(matches!(api.delete(&rec.id), Err(ApiError::NotFound(_))));
        assert!(matches!(api.get(&rec.id), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn list_pages_newest_first() {
        let mut api = MemoryTreeApi::new();
        for i in 0..7 {
            create(&mut api, &format!("t{i}"), &[i]);
        }
        let first = api.list(0, 5).unwrap();
        let names: Vec<_> = first.trees.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["t6", "t5", "t4", "t3", "t2"]);
        assert_eq!(first.total_count, 7);
        assert_eq!(first.total_pages(), 2);

        let second = api.list(1, 5).unwrap();
        assert_eq!(second.trees.len(), 2);
        assert_eq!(second.trees[1].name, "t0");
        assert!(api.list(5, 5).unwrap().trees.is_empty());
        assert!(matches!(api.list(0, 0), Err(ApiError::Validation(_))));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut api = MemoryTreeApi::new();
        let a = create(&mut api, "a", &[1]);
        api.delete(&a.id).unwrap();
        let b = create(&mut api, "b", &[1]);
        assert_ne!(a.id, b.id);
        assert_eq!(api.len(), 1);
    }
}

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree service contract.

use crate::error::Result;
use crate::wire::{CreateTreeRequest, TreePage, TreeRecord};

/// Operations the viewer needs from the tree service.
///
/// Implementations own transport concerns (HTTP, retries, timeouts). The
/// in-crate [`MemoryTreeApi`](crate::MemoryTreeApi) implements the same
/// semantics without a network.
pub trait TreeApi {
    /// Build and persist a tree from a name and values, in insertion order.
    ///
    /// Fails with [`ApiError::Validation`](crate::ApiError::Validation) on an
    /// empty or unsafe name or an empty value list.
    fn create(&mut self, request: &CreateTreeRequest) -> Result<TreeRecord>;

    /// Fetch one tree.
    ///
    /// Fails with [`ApiError::NotFound`](crate::ApiError::NotFound) for an
    /// unknown id.
    fn get(&self, id: &str) -> Result<TreeRecord>;

    /// Fetch one zero-based page of trees, newest first.
    fn list(&self, page: usize, page_size: usize) -> Result<TreePage>;

    /// Delete one tree.
    ///
    /// Fails with [`ApiError::NotFound`](crate::ApiError::NotFound) for an
    /// unknown id.
    fn delete(&mut self, id: &str) -> Result<()>;
}

impl<T: TreeApi + ?Sized> TreeApi for &mut T {
    fn create(&mut self, request: &CreateTreeRequest) -> Result<TreeRecord> {
        (**self).create(request)
    }

    fn get(&self, id: &str) -> Result<TreeRecord> {
        (**self).get(id)
    }

    fn list(&self, page: usize, page_size: usize) -> Result<TreePage> {
        (**self).list(page, page_size)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        (**self).delete(id)
    }
}

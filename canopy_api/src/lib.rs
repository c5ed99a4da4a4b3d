// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy API: the client side of the binary search tree service.
//!
//! The service builds trees from submitted values and stores them. This crate
//! describes what a viewer needs from it and what it does with the answers:
//!
//! - [`TreeApi`]: create, fetch, list (paged, newest first) and delete trees.
//! - Wire types ([`TreeRecord`], [`CreateTreeRequest`], [`TreePage`]) in the
//!   service's camelCase JSON, read with [`decode`].
//! - [`ApiError`]: validation, not-found, transport and decode failures.
//! - [`input`]: checks for the create form (tree name, comma-separated values).
//! - [`MemoryTreeApi`]: an in-process service for tests and demos.
//! - [`Browser`]: a viewer session that turns every failure into a message.
//! - [`display`]: the summary table and simplified JSON shown beside a tree.
//!
//! Layout and drawing come from `canopy_layout` and `canopy_scene`.
//!
//! # Example
//!
//! ```rust
//! use canopy_api::{Browser, MemoryTreeApi};
//! use canopy_layout::LayoutConfig;
//!
//! let mut browser = Browser::new(MemoryTreeApi::new());
//! assert!(browser.submit("demo", "50, 30, 70"));
//!
//! let scene = browser.render(800.0, &LayoutConfig::default()).unwrap().unwrap();
//! assert_eq!(scene.labels().count(), 3);
//!
//! assert!(!browser.submit("demo", "1, two"));
//! assert_eq!(
//!     browser.error(),
//!     Some("Please enter valid numbers separated by commas")
//! );
//! ```

mod api;
mod browser;
mod config;
pub mod display;
mod error;
pub mod input;
mod memory;
mod wire;

pub use api::TreeApi;
pub use browser::{Browser, View};
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::{ApiError, Result};
pub use memory::{MemoryTreeApi, build_snapshot};
pub use wire::{CreateTreeRequest, ErrorBody, TreePage, TreeRecord, decode};

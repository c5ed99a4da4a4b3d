// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A viewer session over a [`TreeApi`].
//!
//! [`Browser`] holds what a tree viewer shows: the tree being displayed, the
//! current page of previously created trees, and the last error. Collaborator
//! failures never escape; they become the text returned by
//! [`Browser::error`].

use canopy_layout::{LayoutConfig, LayoutError, layout};
use canopy_scene::Scene;
use tracing::{debug, warn};

use crate::api::TreeApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::input::{MSG_FIX_NAME, MSG_NAME_REQUIRED, name_feedback, parse_values};
use crate::wire::{CreateTreeRequest, TreeRecord};

const FALLBACK_CREATE: &str = "Error creating tree";
const FALLBACK_LIST: &str = "Failed to fetch previous trees";
const FALLBACK_LOAD: &str = "Failed to load tree";
const FALLBACK_DELETE: &str = "Failed to delete tree";

/// Which panel the session shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// The create form, with the current tree below it.
    #[default]
    Input,
    /// The paged list of previous trees.
    Previous,
}

/// State of one viewer session.
#[derive(Debug)]
pub struct Browser<A> {
    api: A,
    config: ApiConfig,
    view: View,
    current: Option<TreeRecord>,
    trees: Vec<TreeRecord>,
    page: usize,
    total_pages: usize,
    error: Option<String>,
}

impl<A: TreeApi> Browser<A> {
    /// Start a session on the input view with default paging.
    pub fn new(api: A) -> Self {
        Self::with_config(api, ApiConfig::default())
    }

    /// Start a session with explicit paging.
    pub fn with_config(api: A, config: ApiConfig) -> Self {
        Self {
            api,
            config,
            view: View::Input,
            current: None,
            trees: Vec::new(),
            page: 0,
            total_pages: 1,
            error: None,
        }
    }

    /// Validate the form and create a tree.
    ///
    /// On success the new tree becomes current and the input view is shown.
    /// Returns whether a tree was created.
    pub fn submit(&mut self, name: &str, numbers: &str) -> bool {
        self.error = None;
        if name.trim().is_empty() {
            self.error = Some(MSG_NAME_REQUIRED.to_owned());
            return false;
        }
        if name_feedback(name).is_some() {
            self.error = Some(MSG_FIX_NAME.to_owned());
            return false;
        }
        let values = match parse_values(numbers) {
            Ok(values) => values,
            Err(err) => {
                self.fail(&err, FALLBACK_CREATE);
                return false;
            }
        };
        let request = CreateTreeRequest::new(name.trim(), values);
        match self.api.create(&request) {
            Ok(record) => {
                debug!(id = %record.id, "showing new tree");
                self.current = Some(record);
                self.view = View::Input;
                true
            }
            Err(err) => {
                self.fail(&err, FALLBACK_CREATE);
                false
            }
        }
    }

    /// Switch to the list of previous trees, starting at the first page.
    ///
    /// Clears the displayed tree.
    pub fn show_previous(&mut self) {
        self.view = View::Previous;
        self.current = None;
        self.error = None;
        self.page = 0;
        self.refresh();
    }

    /// Switch back to the create form.
    pub fn show_input(&mut self) {
        self.view = View::Input;
        self.error = None;
    }

    /// Re-fetch the current page.
    ///
    /// If the page no longer exists (after a delete, say) the last page is
    /// fetched instead.
    pub fn refresh(&mut self) {
        self.error = None;
        if self.fetch_page() && self.page >= self.total_pages {
            self.page = self.total_pages - 1;
            self.fetch_page();
        }
    }

    fn fetch_page(&mut self) -> bool {
        match self.api.list(self.page, self.config.page_size) {
            Ok(page) => {
                self.total_pages = page.total_pages();
                self.trees = page.trees;
                true
            }
            Err(err) => {
                self.fail(&err, FALLBACK_LIST);
                false
            }
        }
    }

    /// Fetch a tree and display it on the input view.
    pub fn load(&mut self, id: &str) -> bool {
        self.error = None;
        match self.api.get(id) {
            Ok(record) => {
                self.current = Some(record);
                self.view = View::Input;
                true
            }
            Err(err) => {
                self.fail(&err, FALLBACK_LOAD);
                false
            }
        }
    }

    /// Delete a tree and refresh the list.
    ///
    /// If the deleted tree is displayed it is cleared.
    pub fn delete(&mut self, id: &str) -> bool {
        self.error = None;
        if let Err(err) = self.api.delete(id) {
            self.fail(&err, FALLBACK_DELETE);
            return false;
        }
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
        }
        self.refresh();
        true
    }

    /// Move to `page` if it exists. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        self.refresh();
        true
    }

    /// Move one page forward.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    /// Move one page back.
    pub fn previous_page(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Lay out the displayed tree, if any.
    pub fn render(
        &self,
        viewport_width: f64,
        config: &LayoutConfig,
    ) -> Option<Result<Scene, LayoutError>> {
        self.current
            .as_ref()
            .map(|t| layout(&t.snapshot, viewport_width, config))
    }

    fn fail(&mut self, err: &ApiError, fallback: &str) {
        let message = err.user_message(fallback);
        warn!(error = %err, "{fallback}");
        self.error = Some(message);
    }
}

impl<A> Browser<A> {
    /// The active panel.
    pub fn view(&self) -> View {
        self.view
    }

    /// The displayed tree.
    pub fn current(&self) -> Option<&TreeRecord> {
        self.current.as_ref()
    }

    /// Trees on the current page of the list.
    pub fn trees(&self) -> &[TreeRecord] {
        &self.trees
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages, at least one.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The last failure, if the most recent action failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Paging and routing settings.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The collaborator.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Give back the collaborator.
    pub fn into_api(self) -> A {
        self.api
    }
}

// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Service location and paging defaults.

/// Base path of the tree collection when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "/api/trees";

/// Trees per page in the previous-trees list.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "CANOPY_API_BASE_URL";

/// Where the tree service lives and how lists are paged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Collection URL, e.g. `https://host/api/trees`.
    pub base_url: String,
    /// Trees per page.
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Defaults, with the base URL taken from [`BASE_URL_ENV`] when it is set
    /// and non-empty.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        match base_url {
            Some(url) => Self::default().with_base_url(url),
            None => Self::default(),
        }
    }

    /// Replace the base URL. A trailing `/` is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Replace the page size. Zero is raised to one.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// `POST` target for creation, `GET` target for listing.
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single tree.
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// URL of one page of the list (pages are zero-based).
    pub fn page_url(&self, page: usize) -> String {
        format!("{}?page={}&size={}", self.base_url, page, self.page_size)
    }
}

//
//  jira-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Jira API Requests and Responses
//!
//! Jira uses offset-based pagination everywhere: requests carry `startAt` and
//! `maxResults`, and list responses echo them back together with `total`
//! and/or `isLast`.
//!
//! The client never walks pages on its own. [`Pagination`] is passed through
//! to the query string, and [`Page`] exposes enough to let callers request
//! the next page themselves.
//!
//! # Example
//!
//! ```rust
//! use jira_client::api::common::{Page, Pagination};
//!
//! let json = r#"{"startAt": 0, "maxResults": 2, "total": 5, "values": [1, 2]}"#;
//! let page: Page<u32> = serde_json::from_str(json).unwrap();
//!
//! assert!(page.has_next());
//! assert_eq!(page.next_page(), Some(Pagination::new(2, 2)));
//! ```

use serde::{Deserialize, Serialize};

/// Offset-based pagination parameters.
///
/// The [`Default`] is `startAt=0, maxResults=50`, the default of most Jira
/// list operations. Operations with a different default document it and
/// fall back to it when given `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Index of the first item to return (0-based).
    pub start_at: u32,
    /// Maximum number of items to return.
    pub max_results: u32,
}

impl Pagination {
    /// Creates pagination parameters.
    pub const fn new(start_at: u32, max_results: u32) -> Self {
        Self {
            start_at,
            max_results,
        }
    }

    /// Pagination for the first page with the given page size.
    pub const fn first(max_results: u32) -> Self {
        Self::new(0, max_results)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::first(50)
    }
}

/// A single page of results from a Jira list endpoint.
///
/// Matches the envelope used by the Agile API and by most `PageBean` results
/// of the core API.
///
/// # Notes
///
/// - `total` is omitted by some endpoints for performance reasons
/// - `is_last` is the authoritative end marker when present
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Offset of the first item in this page.
    #[serde(default)]
    pub start_at: u32,

    /// Page size used by the server.
    #[serde(default)]
    pub max_results: u32,

    /// Total number of items, when the endpoint reports it.
    #[serde(default)]
    pub total: Option<u32>,

    /// Whether this is the last page, when the endpoint reports it.
    #[serde(default)]
    pub is_last: Option<bool>,

    /// Items in this page.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

impl<T> Page<T> {
    /// Checks if there are more items after this page.
    ///
    /// An empty page never has a successor, whatever `isLast` says.
    pub fn has_next(&self) -> bool {
        if self.values.is_empty() {
            return false;
        }
        if let Some(is_last) = self.is_last {
            return !is_last;
        }
        match self.total {
            Some(total) => self.end() < total,
            None => false,
        }
    }

    /// Pagination parameters for the following page, if there is one.
    pub fn next_page(&self) -> Option<Pagination> {
        self.has_next()
            .then(|| Pagination::new(self.end(), self.max_results))
    }

    fn end(&self) -> u32 {
        self.start_at
            .saturating_add(u32::try_from(self.values.len()).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        assert_eq!(Pagination::default(), Pagination::new(0, 50));
    }

    #[test]
    fn test_is_last_wins_over_total() {
        let page: Page<u8> =
            serde_json::from_str(r#"{"startAt":0,"maxResults":1,"total":10,"isLast":true,"values":[1]}"#)
                .unwrap();
        assert!(!page.has_next());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_total_drives_next_page() {
        let page: Page<u8> =
            serde_json::from_str(r#"{"startAt":50,"maxResults":50,"total":60,"values":[1,2,3]}"#)
                .unwrap();
        assert_eq!(page.next_page(), Some(Pagination::new(53, 50)));
    }

    #[test]
    fn test_empty_page_ends_paging_even_if_not_last() {
        let page: Page<u8> =
            serde_json::from_str(r#"{"startAt":10,"maxResults":50,"isLast":false,"values":[]}"#)
                .unwrap();
        assert!(!page.has_next());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn test_missing_markers_mean_single_page() {
        let page: Page<u8> = serde_json::from_str(r#"{"values":[]}"#).unwrap();
        assert!(!page.has_next());
        assert_eq!(page.start_at, 0);
    }
}

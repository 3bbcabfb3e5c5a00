//! This module defines the common functionality for paging data.

use serde::{Deserialize, Serialize};

/// The config for pagination.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum records to return per page when not specified in a request.
    pub default_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_limit: 50,
        }
    }
}

/// Describes the position of a page within the full result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The number of records across all pages.
    pub total: u64,
    /// The returned page number, starting at 1.
    pub page: u64,
    /// The maximum number of records per page.
    pub limit: u64,
    /// The number of pages the result set spans.
    pub pages: u64,
}

/// Cut one page out of `items` and describe where it sits.
///
/// A page or limit below 1 is treated as 1 rather than rejected, so a sloppy
/// query string cannot cause a division by zero or an unbounded response.
pub fn paginate<T>(items: Vec<T>, page: u64, limit: u64) -> (Vec<T>, Pagination) {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = items.len() as u64;

    let start = (page - 1).saturating_mul(limit);
    let page_items = items
        .into_iter()
        .skip(start as usize)
        .take(limit as usize)
        .collect();

    let pagination = Pagination {
        total,
        page,
        limit,
        pages: total.div_ceil(limit),
    };

    (page_items, pagination)
}

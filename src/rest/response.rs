//! List response shapes.
//!
//! The API uses two pagination conventions side by side, and both are kept
//! as they are on the wire:
//!
//! - [`ListResponse`]: `{items, pagination: {total, limit, offset}}`, the
//!   offset/limit shape returned by `list`.
//! - [`Page`]: `{data, has_more}`, the page-number shape returned by the
//!   paged listings and consumed by [`AutoPager`](crate::rest::AutoPager).
//!
//! # Deref Pattern
//!
//! `ListResponse<T>` implements `Deref<Target = Vec<T>>`:
//!
//! ```rust,ignore
//! let invoices = client.invoices().list(&InvoiceListParams::default()).await?;
//!
//! for invoice in invoices.iter() {
//!     println!("{} {}", invoice.id, invoice.status);
//! }
//!
//! if let Some(offset) = invoices.pagination().next_offset() {
//!     // request the next window with `offset`
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// Offset/limit pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPagination {
    /// Total number of records matching the filters.
    pub total: u64,
    /// Maximum number of records in this response.
    pub limit: u64,
    /// Index of the first record in this response.
    pub offset: u64,
}

impl OffsetPagination {
    /// Returns `true` if records remain after this window.
    ///
    /// A window with `limit == 0` never advances, so it has no next window.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.limit > 0 && self.offset.saturating_add(self.limit) < self.total
    }

    /// Returns the offset of the next window, if there is one.
    #[must_use]
    pub const fn next_offset(&self) -> Option<u64> {
        if self.has_next() {
            Some(self.offset.saturating_add(self.limit))
        } else {
            None
        }
    }
}

/// Normalized items of a `list` call plus their pagination metadata.
///
/// # Example
///
/// ```rust
/// use commerce_api::rest::{ListResponse, OffsetPagination};
///
/// let response = ListResponse::new(
///     vec!["po_1", "po_2"],
///     OffsetPagination { total: 5, limit: 2, offset: 0 },
/// );
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.pagination().next_offset(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct ListResponse<T> {
    items: Vec<T>,
    pagination: OffsetPagination,
}

impl<T> ListResponse<T> {
    /// Creates a new `ListResponse`.
    #[must_use]
    pub const fn new(items: Vec<T>, pagination: OffsetPagination) -> Self {
        Self { items, pagination }
    }

    /// Returns the pagination metadata.
    #[must_use]
    pub const fn pagination(&self) -> &OffsetPagination {
        &self.pagination
    }

    /// Consumes the response and returns the items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Consumes the response and returns items and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, OffsetPagination) {
        (self.items, self.pagination)
    }
}

impl<T> Deref for ListResponse<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for ListResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

/// One page of a page-number listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in server order.
    pub data: Vec<T>,
    /// Whether the server has another page after this one.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub const fn new(data: Vec<T>, has_more: bool) -> Self {
        Self { data, has_more }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_pagination_next_window() {
        let first = OffsetPagination {
            total: 45,
            limit: 20,
            offset: 20,
        };
        assert!(first.has_next());
        assert_eq!(first.next_offset(), Some(40));

        let last = OffsetPagination {
            total: 45,
            limit: 20,
            offset: 40,
        };
        assert!(!last.has_next());
        assert_eq!(last.next_offset(), None);
    }

    #[test]
    fn test_zero_limit_has_no_next_window() {
        let stuck = OffsetPagination {
            total: 45,
            limit: 0,
            offset: 10,
        };
        assert!(!stuck.has_next());
        assert_eq!(stuck.next_offset(), None);
    }

    #[test]
    fn test_offset_pagination_deserializes() {
        let pagination: OffsetPagination =
            serde_json::from_str(r#"{"total": 3, "limit": 50, "offset": 0}"#).unwrap();
        assert_eq!(pagination.total, 3);
        assert!(!pagination.has_next());
    }

    #[test]
    fn test_list_response_deref_and_into_parts() {
        let mut response = ListResponse::new(
            vec![1, 2, 3],
            OffsetPagination {
                total: 3,
                limit: 10,
                offset: 0,
            },
        );

        assert_eq!(response.len(), 3);
        assert_eq!(response[1], 2);
        response.push(4);

        let (items, pagination) = response.into_parts();
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(pagination.limit, 10);
    }
}

//! Auto-pagination over page-number listings.
//!
//! [`AutoPager`] walks a `{data, has_more}` listing page by page, starting
//! at page 1, and stops as soon as the server reports `has_more: false`,
//! a caller-supplied limit is reached, or the callback asks to stop. Pages
//! are fetched lazily: a page is only requested once every item of the
//! previous page has been consumed.
//!
//! Items are visited in page order, then in array order within a page. No
//! deduplication is done; if the collection changes between page fetches,
//! items may be skipped or repeated.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::ops::ControlFlow;
//!
//! let shipments = client.shipments();
//!
//! // Collect at most 50 in-transit shipments
//! let first_fifty = shipments
//!     .auto_paging(ShipmentListParams::default())
//!     .to_vec(50)
//!     .await?;
//!
//! // Stop at the first exception
//! shipments
//!     .auto_paging(ShipmentListParams::default())
//!     .each(|shipment| {
//!         if shipment.status.is_exception() {
//!             return ControlFlow::Break(());
//!         }
//!         ControlFlow::Continue(())
//!     })
//!     .await?;
//! ```

use std::ops::ControlFlow;

use crate::rest::{Page, PagedResource, ResourceClient, ResourceError};

/// A source of numbered pages.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// The item type on each page.
    type Item;

    /// The error returned when a page cannot be fetched.
    type Error;

    /// Fetches page `page` (1-based).
    async fn fetch_page(&mut self, page: u32) -> Result<Page<Self::Item>, Self::Error>;
}

impl<S: PageSource> PageSource for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    async fn fetch_page(&mut self, page: u32) -> Result<Page<S::Item>, S::Error> {
        (**self).fetch_page(page).await
    }
}

/// Iterates every item of a [`PageSource`] without manual page counters.
#[derive(Debug)]
pub struct AutoPager<S> {
    source: S,
}

impl<S: PageSource> AutoPager<S> {
    /// Wraps a page source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Collects items across pages until `limit` items are gathered or the
    /// server reports no more pages.
    ///
    /// Returns at most `limit` items. Extra items of the last fetched page
    /// are dropped. A `limit` of zero returns immediately without a request.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    pub async fn to_vec(self, limit: usize) -> Result<Vec<S::Item>, S::Error> {
        let mut items = Vec::new();
        if limit == 0 {
            return Ok(items);
        }

        self.each(|item| {
            items.push(item);
            if items.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await?;

        Ok(items)
    }

    /// Invokes `callback` for every item across pages.
    ///
    /// Returning [`ControlFlow::Break`] stops iteration immediately, even
    /// mid-page, and no further pages are requested.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    pub async fn each<F>(mut self, mut callback: F) -> Result<(), S::Error>
    where
        F: FnMut(S::Item) -> ControlFlow<()>,
    {
        let mut page = 1;

        loop {
            let Page { data, has_more } = self.source.fetch_page(page).await?;
            if data.is_empty() && has_more {
                tracing::warn!(page, "Empty page reported has_more; requesting next page");
            }

            for item in data {
                if callback(item).is_break() {
                    return Ok(());
                }
            }

            if !has_more {
                return Ok(());
            }

            page += 1;
        }
    }
}

/// Page source backed by a resource's paged listing.
///
/// Created by [`ResourceClient::auto_paging`].
pub struct PagedList<'a, R: PagedResource> {
    client: ResourceClient<'a, R>,
    params: R::ListParams,
}

impl<'a, R: PagedResource> PagedList<'a, R> {
    pub(crate) const fn new(client: ResourceClient<'a, R>, params: R::ListParams) -> Self {
        Self { client, params }
    }
}

impl<R: PagedResource> PageSource for PagedList<'_, R> {
    type Item = R;
    type Error = ResourceError;

    async fn fetch_page(&mut self, page: u32) -> Result<Page<R>, ResourceError> {
        self.client.list_page(&self.params, page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Serves fixed pages and records which pages were requested.
    struct FakePages {
        pages: Vec<Page<u32>>,
        requested: Vec<u32>,
    }

    impl FakePages {
        fn new(pages: Vec<Page<u32>>) -> Self {
            Self {
                pages,
                requested: Vec::new(),
            }
        }

        /// Two pages of five items: 1..=5 then 6..=10.
        fn two_pages_of_five() -> Self {
            Self::new(vec![
                Page::new((1..=5).collect(), true),
                Page::new((6..=10).collect(), false),
            ])
        }
    }

    impl PageSource for FakePages {
        type Item = u32;
        type Error = Infallible;

        async fn fetch_page(&mut self, page: u32) -> Result<Page<u32>, Infallible> {
            self.requested.push(page);
            let index = usize::try_from(page - 1).unwrap();
            Ok(self
                .pages
                .get(index)
                .cloned()
                .unwrap_or_else(|| Page::new(Vec::new(), false)))
        }
    }

    struct FailingPages;

    impl PageSource for FailingPages {
        type Item = u32;
        type Error = String;

        async fn fetch_page(&mut self, page: u32) -> Result<Page<u32>, String> {
            if page == 1 {
                Ok(Page::new(vec![1, 2], true))
            } else {
                Err(format!("page {page} unavailable"))
            }
        }
    }

    #[tokio::test]
    async fn test_to_vec_collects_all_pages_in_order() {
        let items = AutoPager::new(FakePages::two_pages_of_five())
            .to_vec(100)
            .await
            .unwrap();
        assert_eq!(items, (1..=10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_to_vec_truncates_to_limit() {
        let mut source = FakePages::two_pages_of_five();
        let items = AutoPager::new(&mut source).to_vec(7).await.unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(source.requested, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_to_vec_limit_within_first_page_fetches_one_page() {
        let mut source = FakePages::two_pages_of_five();
        let items = AutoPager::new(&mut source).to_vec(3).await.unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(source.requested, vec![1]);
    }

    #[tokio::test]
    async fn test_to_vec_zero_limit_fetches_nothing() {
        let mut source = FakePages::two_pages_of_five();
        let items = AutoPager::new(&mut source).to_vec(0).await.unwrap();
        assert!(items.is_empty());
        assert!(source.requested.is_empty());
    }

    #[tokio::test]
    async fn test_each_stops_mid_second_page() {
        let mut source = FakePages::new(vec![
            Page::new((1..=5).collect(), true),
            Page::new((6..=10).collect(), true),
            Page::new((11..=15).collect(), false),
        ]);
        let mut calls = 0;

        AutoPager::new(&mut source)
            .each(|item| {
                calls += 1;
                if item == 7 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await
            .unwrap();

        assert_eq!(calls, 7);
        assert_eq!(source.requested, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_page_with_has_more_continues_to_next_page() {
        let mut source = FakePages::new(vec![
            Page::new(vec![1, 2], true),
            Page::new(Vec::new(), true),
            Page::new(vec![3, 4], false),
        ]);

        let items = AutoPager::new(&mut source).to_vec(10).await.unwrap();
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(source.requested, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result = AutoPager::new(FailingPages).to_vec(10).await;
        assert_eq!(result, Err("page 2 unavailable".to_string()));
    }
}

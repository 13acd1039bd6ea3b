use async_trait::async_trait;

use crate::ShopfeedResult;

/// One discrete batch of items returned by a single page fetch.
///
/// Consumed once by the feed and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    /// Items in arrival order.
    pub items: Vec<T>,
    /// Permanent indicator that no further pages exist. Must be `true`
    /// exactly on (and after) the last page; callers trust it as
    /// authoritative.
    pub end_of_data: bool,
}

/// A paged source of items.
///
/// `fetch_page(n)` must return the nth page deterministically for the
/// lifetime of the source instance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource<T: Send + Sync + 'static>: Send + Sync {
    async fn fetch_page(&self, page: u32) -> ShopfeedResult<PageResult<T>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_serves_scripted_page() {
        let mut source = MockPageSource::<u32>::new();
        source
            .expect_fetch_page()
            .returning(|page| {
                Ok(PageResult {
                    items: vec![page * 10, page * 10 + 1],
                    end_of_data: page >= 1,
                })
            });

        let first = source.fetch_page(0).await.unwrap();
        assert_eq!(first.items, vec![0, 1]);
        assert!(!first.end_of_data);

        let last = source.fetch_page(1).await.unwrap();
        assert_eq!(last.items, vec![10, 11]);
        assert!(last.end_of_data);
    }
}

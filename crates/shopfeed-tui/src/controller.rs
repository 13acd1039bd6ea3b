//! Async half of the pagination feed: owns the accumulated state, spawns
//! page fetches, and applies their outcomes on the UI task.

use std::sync::Arc;

use shopfeed_core::{Feed, PageSource, ShopfeedResult};
use shopfeed_domain::{total_price, Product, ProductPage};
use tokio::sync::mpsc;

use crate::sentinel::Sentinel;

/// Result of one page fetch, delivered back to the UI task over the
/// outcome channel.
#[derive(Debug)]
pub struct FetchOutcome {
    pub page: u32,
    pub result: ShopfeedResult<ProductPage>,
}

pub struct FeedController {
    feed: Feed<Product>,
    sentinel: Sentinel,
    source: Arc<dyn PageSource<Product>>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    total_price: u64,
}

impl FeedController {
    pub fn new(
        source: Arc<dyn PageSource<Product>>,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let controller = Self {
            feed: Feed::new(),
            sentinel: Sentinel::new(),
            source,
            outcome_tx,
            total_price: 0,
        };
        (controller, outcome_rx)
    }

    /// Ask for the next page. No-op while a fetch is in flight or after the
    /// source reported end-of-data.
    pub fn trigger(&mut self) {
        if let Some(page) = self.feed.begin_fetch() {
            tracing::debug!(page, "requesting page");
            let source = Arc::clone(&self.source);
            let tx = self.outcome_tx.clone();
            tokio::spawn(async move {
                let result = source.fetch_page(page).await;
                // If the app shut down mid-flight the receiver is gone and
                // the late result is discarded here.
                let _ = tx.send(FetchOutcome { page, result });
            });
        }
    }

    /// Report the marker row's visibility; fetches when the sentinel fires
    /// and the feed guard allows it.
    pub fn observe_marker(&mut self, visible: bool) {
        if self.sentinel.observe(visible) {
            self.trigger();
        }
    }

    /// Apply a settled fetch. Runs on the UI task, which is the only place
    /// feed state is mutated.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome.result {
            Ok(page) => {
                if self.feed.complete(page) {
                    self.total_price = total_price(self.feed.items());
                    tracing::debug!(page = outcome.page, items = self.feed.len(), "merged page");
                } else {
                    tracing::debug!(page = outcome.page, "dropped result with no fetch in flight");
                }
            }
            Err(error) => {
                tracing::error!(page = outcome.page, %error, "page fetch failed");
                self.feed.fail();
            }
        }
        self.sentinel.rearm();
    }

    pub fn items(&self) -> &[Product] {
        self.feed.items()
    }

    pub fn item_count(&self) -> usize {
        self.feed.len()
    }

    /// Sum of prices over everything fetched so far.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    pub fn is_exhausted(&self) -> bool {
        self.feed.is_exhausted()
    }

    pub fn next_page(&self) -> u32 {
        self.feed.next_page()
    }
}

//! In-memory mock catalog with simulated transport latency.
//!
//! Stands in for a remote product API: pages are deterministic for the
//! lifetime of the instance, every fetch waits out a configurable delay,
//! and individual pages can be primed to fail once to exercise the
//! feed's failure path.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use shopfeed_core::{AppConfig, PageSource, ShopfeedError, ShopfeedResult};
use shopfeed_domain::{Product, ProductPage};

use crate::paging::page_slice;

const NAME_PREFIXES: [&str; 10] = [
    "Walnut", "Brushed Steel", "Matte Black", "Vintage", "Compact", "Foldable", "Wireless",
    "Ceramic", "Linen", "Oak",
];

const NAME_ITEMS: [&str; 12] = [
    "Desk Lamp",
    "Keyboard",
    "Headphones",
    "Notebook",
    "Backpack",
    "Water Bottle",
    "Monitor Stand",
    "Coffee Grinder",
    "Desk Mat",
    "Speaker",
    "Charger",
    "Bookshelf",
];

/// Generate `count` products with stable names, prices, and dates.
///
/// The sequence is a pure function of `count`, so two catalogs of the same
/// size agree item-for-item apart from their freshly minted ids.
pub fn generate_catalog(count: usize) -> Vec<Product> {
    let first_day = NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid calendar date");
    (0..count)
        .map(|i| {
            let name = format!(
                "{} {}",
                NAME_PREFIXES[i % NAME_PREFIXES.len()],
                NAME_ITEMS[(i / NAME_PREFIXES.len()) % NAME_ITEMS.len()]
            );
            let price = ((i as u64) * 7_919) % 95_000 + 5_000;
            let bought_date = first_day + chrono::Duration::days(i as i64);
            Product::new(name, price, bought_date)
        })
        .collect()
}

pub struct MockCatalog {
    products: Vec<Product>,
    page_size: usize,
    delay: Duration,
    fail_once: Mutex<HashSet<u32>>,
}

impl MockCatalog {
    pub fn new(catalog_size: usize, page_size: usize) -> Self {
        Self {
            products: generate_catalog(catalog_size),
            page_size,
            delay: Duration::ZERO,
            fail_once: Mutex::new(HashSet::new()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.catalog_size, config.page_size)
            .with_delay(Duration::from_millis(config.fetch_delay_ms))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Prime the listed pages to fail on their first fetch and succeed on
    /// any later attempt.
    pub fn with_fail_once_pages(self, pages: &[u32]) -> Self {
        {
            let mut fail_once = self.fail_once.lock().unwrap_or_else(|e| e.into_inner());
            fail_once.extend(pages.iter().copied());
        }
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn take_injected_failure(&self, page: u32) -> bool {
        let mut fail_once = self.fail_once.lock().unwrap_or_else(|e| e.into_inner());
        fail_once.remove(&page)
    }
}

#[async_trait]
impl PageSource<Product> for MockCatalog {
    async fn fetch_page(&self, page: u32) -> ShopfeedResult<ProductPage> {
        tokio::time::sleep(self.delay).await;

        if self.take_injected_failure(page) {
            return Err(ShopfeedError::Fetch {
                page,
                reason: "injected transport failure".to_string(),
            });
        }

        Ok(page_slice(&self.products, self.page_size, page))
    }
}

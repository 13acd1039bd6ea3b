use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shopfeed_core::{PageSource, ShopfeedError, ShopfeedResult};
use shopfeed_domain::{Product, ProductPage};

use crate::paging::page_slice;

pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// On-disk catalog format.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,
    pub products: Vec<Product>,
}

impl CatalogFile {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            version: CATALOG_FORMAT_VERSION,
            products,
        }
    }

    pub fn to_json_string(&self) -> ShopfeedResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ShopfeedError::Serialization(e.to_string()))
    }
}

/// Page source backed by a catalog file loaded once at startup.
#[derive(Debug)]
pub struct JsonCatalog {
    products: Vec<Product>,
    page_size: usize,
    delay: Duration,
}

impl JsonCatalog {
    pub async fn load(path: impl AsRef<Path>, page_size: usize) -> ShopfeedResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file: CatalogFile = serde_json::from_slice(&bytes)
            .map_err(|e| ShopfeedError::Serialization(e.to_string()))?;

        if file.version != CATALOG_FORMAT_VERSION {
            return Err(ShopfeedError::Catalog(format!(
                "unsupported catalog version {} in {}",
                file.version,
                path.display()
            )));
        }

        tracing::debug!(
            path = %path.display(),
            products = file.products.len(),
            "loaded catalog file"
        );

        Ok(Self {
            products: file.products,
            page_size,
            delay: Duration::ZERO,
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[async_trait]
impl PageSource<Product> for JsonCatalog {
    async fn fetch_page(&self, page: u32) -> ShopfeedResult<ProductPage> {
        tokio::time::sleep(self.delay).await;
        Ok(page_slice(&self.products, self.page_size, page))
    }
}

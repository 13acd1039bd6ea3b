use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shopfeed_core::PageResult;
use uuid::Uuid;

pub type ProductId = Uuid;

/// One page of products as served by a `PageSource<Product>`.
pub type ProductPage = PageResult<Product>;

/// A purchased product. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in whole currency units.
    pub price: u64,
    /// Date the product was bought.
    pub bought_date: NaiveDate,
}

impl Product {
    pub fn new(name: String, price: u64, bought_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            bought_date,
        }
    }

    /// Date as shown in the feed.
    pub fn bought_date_display(&self) -> String {
        self.bought_date.format("%Y-%m-%d").to_string()
    }
}

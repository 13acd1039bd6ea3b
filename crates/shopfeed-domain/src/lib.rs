pub mod price;
pub mod product;

pub use price::{format_price, total_price};
pub use product::{Product, ProductId, ProductPage};

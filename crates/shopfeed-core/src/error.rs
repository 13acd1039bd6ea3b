use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopfeedError {
    #[error("page fetch failed for page {page}: {reason}")]
    Fetch { page: u32, reason: String },

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

use crate::error::ShopfeedError;

pub type ShopfeedResult<T> = Result<T, ShopfeedError>;

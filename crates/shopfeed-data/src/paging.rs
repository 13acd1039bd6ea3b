use shopfeed_domain::{Product, ProductPage};

/// Cut one page out of an in-memory catalog.
///
/// `end_of_data` is true exactly on the page containing the final product,
/// and stays true for any page requested past it.
pub(crate) fn page_slice(products: &[Product], page_size: usize, page: u32) -> ProductPage {
    let start = (page as usize).saturating_mul(page_size);
    let items: Vec<Product> = products.iter().skip(start).take(page_size).cloned().collect();
    let end_of_data = start + items.len() >= products.len();
    ProductPage { items, end_of_data }
}

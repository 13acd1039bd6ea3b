use crate::product::Product;

/// Format a price for display: `$` plus comma-grouped digits.
///
/// Pure; handles zero and the full `u64` range.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Sum of prices over the full accumulated sequence.
///
/// Always recomputed from scratch rather than maintained incrementally, so
/// the total cannot drift from the list it describes.
pub fn total_price(products: &[Product]) -> u64 {
    products.iter().map(|p| p.price).sum()
}

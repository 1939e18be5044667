//! Display-only price math.

/// Price before the discount was applied: `price / (1 - discount / 100)`.
///
/// Returns `price` unchanged when there is no discount or the discount is
/// 100% or more.
pub fn original_price(price: f64, discount_percentage: f64) -> f64 {
    if discount_percentage <= 0.0 || discount_percentage >= 100.0 {
        return price;
    }
    price / (1.0 - discount_percentage / 100.0)
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// "N% OFF" badge, or `None` when the product is not discounted.
pub fn discount_badge(discount_percentage: f64) -> Option<String> {
    (discount_percentage > 0.0).then(|| format!("{}% OFF", discount_percentage.round()))
}

pub fn stock_label(stock: u32) -> &'static str {
    if stock > 0 {
        "In Stock"
    } else {
        "Out of Stock"
    }
}

/// Similar products with a rating above this get a "Top" badge.
pub const TOP_RATED_THRESHOLD: f64 = 4.5;

pub fn is_top_rated(rating: f64) -> bool {
    rating > TOP_RATED_THRESHOLD
}

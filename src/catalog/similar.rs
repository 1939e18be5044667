use crate::api::Product;

/// How many category products are requested for the similar panel.
/// One more than the default cap so the current product can be dropped.
pub const SIMILAR_FETCH_LIMIT: u64 = 7;

/// Products from the same category, minus `current_id`, at most `cap`.
pub fn select_similar(products: Vec<Product>, current_id: u64, cap: usize) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| product.id != current_id)
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: String::new(),
            price: 10.0,
            discount_percentage: 0.0,
            rating: 4.0,
            stock: 1,
            brand: None,
            category: "laptops".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn excludes_current_product() {
        let products = (1..=7).map(product).collect();
        let similar = select_similar(products, 3, 6);
        assert_eq!(similar.len(), 6);
        assert!(similar.iter().all(|p| p.id != 3));
    }

    #[test]
    fn caps_length_when_current_absent() {
        let products = (10..=16).map(product).collect();
        let similar = select_similar(products, 3, 6);
        assert_eq!(
            similar.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    fn short_category_returns_what_is_left() {
        let products = vec![product(5), product(6)];
        let similar = select_similar(products, 5, 6);
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id, 6);
    }
}

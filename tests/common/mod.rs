//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use retailflow::api::{CatalogClient, Product};
use retailflow::config::ApiConfig;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

/// Client pointed at `base_url` with short timeouts.
pub fn client_for(base_url: &str) -> CatalogClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    CatalogClient::new(&config).expect("Failed to build client")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        price,
        discount_percentage: 10.0,
        rating: 4.2,
        stock: 12,
        brand: Some("Acme".to_string()),
        category: category.to_string(),
        thumbnail: format!("https://cdn.test/{}/thumbnail.png", id),
        images: vec![format!("https://cdn.test/{}/1.png", id)],
    }
}

/// JSON body of a listing page.
pub fn page_json(products: &[Product], total: u64, skip: u64, limit: u64) -> String {
    json!({
        "products": products,
        "total": total,
        "skip": skip,
        "limit": limit,
    })
    .to_string()
}

pub fn product_json(product: &Product) -> String {
    serde_json::to_string(product).expect("Failed to encode product")
}

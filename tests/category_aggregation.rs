mod common;

use common::mock_catalog::{MockCatalog, MockResponse};
use common::{client_for, page_json, product};
use retailflow::catalog::{aggregate_categories, list_categories};

#[tokio::test]
async fn keeps_list_order_when_responses_finish_out_of_order() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/products/categories",
        MockResponse::json(r#"["beauty", "fragrances", "furniture"]"#),
    )
    .await;

    let beauty = vec![
        product(1, "Mascara", 9.99, "beauty"),
        product(2, "Palette", 19.99, "beauty"),
    ];
    let fragrances = vec![product(6, "Perfume", 49.0, "fragrances")];
    // First category answers last.
    mock.route(
        "/products/category/beauty",
        MockResponse::json(page_json(&beauty, 2, 0, 30)).with_delay(150),
    )
    .await;
    mock.route(
        "/products/category/fragrances",
        MockResponse::json(page_json(&fragrances, 1, 0, 30)).with_delay(50),
    )
    .await;
    mock.route(
        "/products/category/furniture",
        MockResponse::json(page_json(&[], 0, 0, 30)),
    )
    .await;

    let client = client_for(&mock.base_url());
    let categories = aggregate_categories(&client).await.unwrap();

    let slugs: Vec<&str> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["beauty", "fragrances", "furniture"]);
    assert_eq!(categories[0].count, 2);
    assert_eq!(
        categories[0].thumbnail.as_deref(),
        Some("https://cdn.test/1/thumbnail.png")
    );
    assert_eq!(categories[1].count, 1);
    assert_eq!(categories[2].count, 0);
    assert!(categories[2].thumbnail.is_none());
}

#[tokio::test]
async fn one_failing_category_fails_the_aggregation() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/products/categories",
        MockResponse::json(r#"[{"slug": "beauty", "name": "Beauty"}, {"slug": "tops", "name": "Tops"}]"#),
    )
    .await;
    mock.route(
        "/products/category/beauty",
        MockResponse::json(page_json(&[product(1, "Mascara", 9.99, "beauty")], 1, 0, 30)),
    )
    .await;
    mock.route("/products/category/tops", MockResponse::error(503, "unavailable"))
        .await;

    let client = client_for(&mock.base_url());
    let err = aggregate_categories(&client).await.unwrap_err();
    assert_eq!(err.kind(), "status");
}

#[tokio::test]
async fn category_list_failure_skips_fan_out() {
    let mock = MockCatalog::start().await;
    mock.route("/products/categories", MockResponse::error(500, "boom"))
        .await;

    let client = client_for(&mock.base_url());
    assert!(aggregate_categories(&client).await.is_err());
    assert!(mock.requests_to("/products/category/").await.is_empty());
}

#[tokio::test]
async fn fans_out_one_request_per_category() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/products/categories",
        MockResponse::json(r#"["a", "b", "c", "d"]"#),
    )
    .await;
    for slug in ["a", "b", "c", "d"] {
        mock.route(
            &format!("/products/category/{}", slug),
            MockResponse::json(page_json(&[], 0, 0, 30)),
        )
        .await;
    }

    let client = client_for(&mock.base_url());
    aggregate_categories(&client).await.unwrap();
    assert_eq!(mock.requests_to("/products/category/").await.len(), 4);
}

#[tokio::test]
async fn dropdown_list_uses_display_names() {
    let mock = MockCatalog::start().await;
    mock.route(
        "/products/categories",
        MockResponse::json(r#"["home-decoration", {"slug": "mens-shirts", "name": "Mens Shirts"}]"#),
    )
    .await;

    let client = client_for(&mock.base_url());
    let options = list_categories(&client).await.unwrap();
    assert_eq!(options[0].name, "home decoration");
    assert_eq!(options[1].slug, "mens-shirts");
    assert_eq!(options[1].name, "Mens Shirts");
}

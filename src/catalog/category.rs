use tokio::task::JoinSet;

use crate::api::{ApiError, CatalogClient, CategoryEntry, ProductPage};

/// Slug and display name only, as offered by the inventory dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub slug: String,
    pub name: String,
}

impl From<&CategoryEntry> for CategoryRef {
    fn from(entry: &CategoryEntry) -> Self {
        Self {
            slug: entry.slug(),
            name: entry.display_name(),
        }
    }
}

/// A category with its product count and a representative thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub count: usize,
    /// Borrowed from the category's first product.
    pub thumbnail: Option<String>,
}

impl Category {
    fn from_page(entry: &CategoryEntry, page: &ProductPage) -> Self {
        Self {
            slug: entry.slug(),
            name: entry.display_name(),
            count: page.products.len(),
            thumbnail: page
                .products
                .first()
                .map(|product| product.thumbnail.clone())
                .filter(|thumbnail| !thumbnail.is_empty()),
        }
    }
}

/// Flat category list for filter dropdowns.
pub async fn list_categories(client: &CatalogClient) -> Result<Vec<CategoryRef>, ApiError> {
    let entries = client.categories().await?;
    Ok(entries.iter().map(CategoryRef::from).collect())
}

/// Fetch the category list, then every category's products concurrently.
///
/// Output order matches the category list regardless of which request
/// finishes first. The first failing request fails the whole aggregation;
/// requests still in flight are aborted when the task set is dropped.
pub async fn aggregate_categories(client: &CatalogClient) -> Result<Vec<Category>, ApiError> {
    let entries = client.categories().await?;
    tracing::debug!(count = entries.len(), "Aggregating categories");

    let mut tasks = JoinSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let client = client.clone();
        let slug = entry.slug();
        tasks.spawn(async move { (index, client.category_products(&slug, None).await) });
    }

    let mut pages: Vec<Option<ProductPage>> = vec![None; entries.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = match joined {
            Ok(output) => output,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => continue,
        };
        pages[index] = Some(result?);
    }

    Ok(entries
        .iter()
        .zip(pages)
        .map(|(entry, page)| Category::from_page(entry, &page.unwrap_or_default()))
        .collect())
}

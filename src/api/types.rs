use serde::{Deserialize, Serialize};

/// A catalog product, decoded verbatim from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    /// Some catalog entries (groceries, mostly) carry no brand.
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// One page of a listing, category or search response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Raw entry of the category list endpoint.
///
/// Older API revisions return bare slugs, newer ones return objects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    Slug(String),
    Object {
        #[serde(default)]
        slug: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryEntry {
    /// Stable identifier, falling back to the name when no slug is present.
    pub fn slug(&self) -> String {
        match self {
            CategoryEntry::Slug(slug) => slug.clone(),
            CategoryEntry::Object { slug, name } => slug
                .clone()
                .or_else(|| name.clone())
                .unwrap_or_default(),
        }
    }

    /// Human readable name. Bare slugs have their separators replaced.
    pub fn display_name(&self) -> String {
        match self {
            CategoryEntry::Slug(slug) => slug.replace('-', " "),
            CategoryEntry::Object { slug, name } => name
                .clone()
                .or_else(|| slug.clone())
                .unwrap_or_default(),
        }
    }
}

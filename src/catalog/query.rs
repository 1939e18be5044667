use crate::api::{ApiError, CatalogClient, PageRequest, ProductPage};
use crate::catalog::pagination::page_request;

/// Filter state of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Selected category slug; `None` means "All Categories".
    pub category: Option<String>,
    /// Debounced search term.
    pub search: String,
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
}

impl ListingQuery {
    pub fn new(page_size: u64) -> Self {
        Self {
            category: None,
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Decide which endpoint serves this query.
    ///
    /// A selected category wins over the search term; the search term is
    /// only used when no category is selected.
    pub fn resolve(&self) -> ProductQuery {
        let page = page_request(self.page, self.page_size);
        if let Some(slug) = &self.category {
            return ProductQuery::Category {
                slug: slug.clone(),
                page,
            };
        }
        let term = self.search.trim();
        if !term.is_empty() {
            return ProductQuery::Search {
                term: term.to_string(),
                page,
            };
        }
        ProductQuery::All { page }
    }
}

/// A concrete request against one of the listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    Category { slug: String, page: PageRequest },
    Search { term: String, page: PageRequest },
    All { page: PageRequest },
}

impl ProductQuery {
    pub async fn fetch(&self, client: &CatalogClient) -> Result<ProductPage, ApiError> {
        match self {
            ProductQuery::Category { slug, page } => {
                client.category_products(slug, Some(*page)).await
            }
            ProductQuery::Search { term, page } => client.search(term, *page).await,
            ProductQuery::All { page } => client.products(*page).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_list_everything() {
        let query = ListingQuery::new(20);
        assert_eq!(
            query.resolve(),
            ProductQuery::All {
                page: PageRequest { limit: 20, skip: 0 }
            }
        );
    }

    #[test]
    fn search_term_used_without_category() {
        let query = ListingQuery {
            search: "phone".to_string(),
            page: 2,
            ..ListingQuery::new(20)
        };
        assert_eq!(
            query.resolve(),
            ProductQuery::Search {
                term: "phone".to_string(),
                page: PageRequest { limit: 20, skip: 20 }
            }
        );
    }

    #[test]
    fn category_wins_over_search_term() {
        let query = ListingQuery {
            category: Some("smartphones".to_string()),
            search: "laptop".to_string(),
            page: 1,
            page_size: 20,
        };
        assert_eq!(
            query.resolve(),
            ProductQuery::Category {
                slug: "smartphones".to_string(),
                page: PageRequest { limit: 20, skip: 0 }
            }
        );
    }

    #[test]
    fn whitespace_search_lists_everything() {
        let query = ListingQuery {
            search: "   ".to_string(),
            ..ListingQuery::new(20)
        };
        assert!(matches!(query.resolve(), ProductQuery::All { .. }));
    }
}

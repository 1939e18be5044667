use crate::api::{Product, ProductPage};
use crate::catalog::{sort_products, total_pages, CategoryRef, ListingQuery, SortOrder};
use crate::ui::load::{Generation, LoadState};
use crate::ui::mvi::UiState;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryState {
    /// Filters the current listing was (or is being) fetched with.
    pub query: ListingQuery,
    /// Raw search box contents; applied to `query` once debounced.
    pub search_input: String,
    /// True while keystrokes go to the search box.
    pub editing_search: bool,
    pub sort: Option<SortOrder>,
    /// Options of the category dropdown, without "All Categories".
    pub categories: Vec<CategoryRef>,
    pub listing: LoadState<ProductPage>,
    /// Row cursor within the visible page.
    pub selected: usize,
    pub generation: Generation,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for InventoryState {}

impl InventoryState {
    pub fn new(page_size: u64) -> Self {
        Self {
            query: ListingQuery::new(page_size),
            search_input: String::new(),
            editing_search: false,
            sort: None,
            categories: Vec::new(),
            listing: LoadState::Idle,
            selected: 0,
            generation: Generation::default(),
        }
    }

    /// Loaded page in display order. Sorting covers this page only.
    pub fn visible_products(&self) -> Vec<Product> {
        let mut products = self
            .listing
            .loaded()
            .map(|page| page.products.clone())
            .unwrap_or_default();
        sort_products(&mut products, self.sort);
        products
    }

    pub fn selected_product(&self) -> Option<Product> {
        self.visible_products().into_iter().nth(self.selected)
    }

    pub fn total(&self) -> u64 {
        self.listing.loaded().map(|page| page.total).unwrap_or(0)
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total(), self.query.page_size)
    }

    pub fn has_prev_page(&self) -> bool {
        self.query.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.query.page < self.total_pages()
    }

    /// Display name of the selected category, or "All Categories".
    pub fn category_label(&self) -> String {
        match &self.query.category {
            None => "All Categories".to_string(),
            Some(slug) => self
                .categories
                .iter()
                .find(|category| &category.slug == slug)
                .map(|category| category.name.clone())
                .unwrap_or_else(|| slug.clone()),
        }
    }
}

use crate::api::Product;
use crate::catalog::Category;
use crate::ui::load::{Generation, LoadState};
use crate::ui::mvi::UiState;

/// Cards per row in grid mode.
pub const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogueState {
    pub categories: LoadState<Vec<Category>>,
    pub view_mode: ViewMode,
    /// Cursor over `categories`.
    pub selected: usize,
    /// Category drilled into, if any.
    pub open: Option<Category>,
    pub products: LoadState<Vec<Product>>,
    /// Cursor over `products`.
    pub product_selected: usize,
    pub categories_generation: Generation,
    pub products_generation: Generation,
}

impl UiState for CatalogueState {}

impl CatalogueState {
    pub fn selected_category(&self) -> Option<&Category> {
        self.categories.loaded()?.get(self.selected)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.loaded()?.get(self.product_selected)
    }

    /// Cursor step for Up/Down in the current layout.
    pub fn row_stride(&self) -> usize {
        if self.open.is_some() {
            return GRID_COLUMNS;
        }
        match self.view_mode {
            ViewMode::Grid => GRID_COLUMNS,
            ViewMode::List => 1,
        }
    }
}

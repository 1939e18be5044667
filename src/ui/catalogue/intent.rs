use crate::api::{ApiError, Product};
use crate::catalog::Category;
use crate::ui::load::Generation;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum CatalogueIntent {
    /// Screen mounted: aggregate categories again.
    Reload,
    ToggleViewMode,
    /// Move the active cursor by `delta` items, clamped to the list.
    Move { delta: isize },
    /// Drill into the category under the cursor.
    OpenSelected,
    /// Leave the open category.
    Close,
    CategoriesLoaded {
        generation: Generation,
        result: Result<Vec<Category>, ApiError>,
    },
    ProductsLoaded {
        generation: Generation,
        result: Result<Vec<Product>, ApiError>,
    },
}

impl Intent for CatalogueIntent {}

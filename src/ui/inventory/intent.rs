use crate::api::{ApiError, ProductPage};
use crate::catalog::CategoryRef;
use crate::ui::load::Generation;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum InventoryIntent {
    /// Screen mounted: fetch the current filter combination again.
    Reload,
    BeginSearch,
    EndSearch,
    SearchInput(char),
    SearchBackspace,
    /// Search box has been stable for the debounce delay.
    SearchSettled { term: String },
    /// Step through "All Categories" and the dropdown options.
    CycleCategory { forward: bool },
    SelectCategory { slug: Option<String> },
    NextPage,
    PrevPage,
    CycleSort,
    MoveUp,
    MoveDown,
    ListingLoaded {
        generation: Generation,
        result: Result<ProductPage, ApiError>,
    },
    CategoriesLoaded {
        result: Result<Vec<CategoryRef>, ApiError>,
    },
}

impl Intent for InventoryIntent {}

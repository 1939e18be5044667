mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::CatalogueIntent;
pub use reducer::{CatalogueReducer, LOAD_CATEGORIES_FAILED, LOAD_CATEGORY_PRODUCTS_FAILED};
pub use state::{CatalogueState, ViewMode, GRID_COLUMNS};

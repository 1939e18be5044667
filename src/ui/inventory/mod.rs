mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::InventoryIntent;
pub use reducer::{InventoryReducer, LOAD_PRODUCTS_FAILED};
pub use state::InventoryState;

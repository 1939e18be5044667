mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::ProductIntent;
pub use reducer::{ProductReducer, LOAD_PRODUCT_FAILED, LOAD_SIMILAR_FAILED, PRODUCT_NOT_FOUND};
pub use state::ProductState;

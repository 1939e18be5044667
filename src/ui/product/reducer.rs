use crate::ui::load::{is_current, LoadState};
use crate::ui::mvi::Reducer;
use crate::ui::product::intent::ProductIntent;
use crate::ui::product::state::ProductState;

pub const LOAD_PRODUCT_FAILED: &str = "Failed to load product";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const LOAD_SIMILAR_FAILED: &str = "Failed to load similar products";

pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductState;
    type Intent = ProductIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductIntent::Open { id } => ProductState {
                id: Some(id),
                product: LoadState::Loading,
                image_index: 0,
                similar: LoadState::Idle,
                similar_selected: 0,
                generation: state.generation.next(),
                // Similar results of the previous product must not land either.
                similar_generation: state.similar_generation.next(),
            },
            ProductIntent::NextImage => {
                let count = image_count(&state);
                if count > 0 {
                    state.image_index = (state.image_index + 1) % count;
                }
                state
            }
            ProductIntent::PrevImage => {
                let count = image_count(&state);
                if count > 0 {
                    state.image_index = (state.image_index + count - 1) % count;
                }
                state
            }
            ProductIntent::MoveUp => {
                state.similar_selected = state.similar_selected.saturating_sub(1);
                state
            }
            ProductIntent::MoveDown => {
                let len = state.similar.loaded().map(Vec::len).unwrap_or(0);
                if state.similar_selected + 1 < len {
                    state.similar_selected += 1;
                }
                state
            }
            ProductIntent::ProductLoaded { generation, result } => {
                if !is_current(state.generation, generation) {
                    return state;
                }
                match result {
                    Ok(product) => {
                        state.product = LoadState::Loaded(product);
                        // Similar products depend on the category we just learned.
                        state.similar = LoadState::Loading;
                        state.similar_generation = state.similar_generation.next();
                        state.similar_selected = 0;
                    }
                    Err(err) => {
                        let message = if err.is_not_found() {
                            PRODUCT_NOT_FOUND
                        } else {
                            LOAD_PRODUCT_FAILED
                        };
                        state.product = LoadState::Failed(message.to_string());
                    }
                }
                state
            }
            ProductIntent::SimilarLoaded { generation, result } => {
                if !is_current(state.similar_generation, generation) {
                    return state;
                }
                state.similar = match result {
                    Ok(products) => LoadState::Loaded(products),
                    Err(_) => LoadState::Failed(LOAD_SIMILAR_FAILED.to_string()),
                };
                state.similar_selected = 0;
                state
            }
        }
    }
}

fn image_count(state: &ProductState) -> usize {
    state
        .product
        .loaded()
        .map(|product| product.images.len())
        .unwrap_or(0)
}

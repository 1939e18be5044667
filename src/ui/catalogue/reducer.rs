use crate::ui::catalogue::intent::CatalogueIntent;
use crate::ui::catalogue::state::CatalogueState;
use crate::ui::load::{is_current, LoadState};
use crate::ui::mvi::Reducer;

pub const LOAD_CATEGORIES_FAILED: &str = "Failed to load categories.";
pub const LOAD_CATEGORY_PRODUCTS_FAILED: &str = "Failed to load products.";

pub struct CatalogueReducer;

impl Reducer for CatalogueReducer {
    type State = CatalogueState;
    type Intent = CatalogueIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogueIntent::Reload => {
                state.categories = LoadState::Loading;
                state.categories_generation = state.categories_generation.next();
                state.selected = 0;
                state.open = None;
                state.products = LoadState::Idle;
                state
            }
            CatalogueIntent::ToggleViewMode => {
                state.view_mode = state.view_mode.toggled();
                state
            }
            CatalogueIntent::Move { delta } => {
                if state.open.is_some() {
                    let len = state.products.loaded().map(Vec::len).unwrap_or(0);
                    state.product_selected = step(state.product_selected, delta, len);
                } else {
                    let len = state.categories.loaded().map(Vec::len).unwrap_or(0);
                    state.selected = step(state.selected, delta, len);
                }
                state
            }
            CatalogueIntent::OpenSelected => {
                if state.open.is_some() {
                    return state;
                }
                let Some(category) = state.selected_category().cloned() else {
                    return state;
                };
                state.open = Some(category);
                state.products = LoadState::Loading;
                state.products_generation = state.products_generation.next();
                state.product_selected = 0;
                state
            }
            CatalogueIntent::Close => {
                state.open = None;
                state.products = LoadState::Idle;
                // Late responses for the closed category must not land.
                state.products_generation = state.products_generation.next();
                state.product_selected = 0;
                state
            }
            CatalogueIntent::CategoriesLoaded { generation, result } => {
                if !is_current(state.categories_generation, generation) {
                    return state;
                }
                state.categories = match result {
                    Ok(categories) => LoadState::Loaded(categories),
                    Err(_) => LoadState::Failed(LOAD_CATEGORIES_FAILED.to_string()),
                };
                state.selected = 0;
                state
            }
            CatalogueIntent::ProductsLoaded { generation, result } => {
                if !is_current(state.products_generation, generation) {
                    return state;
                }
                state.products = match result {
                    Ok(products) => LoadState::Loaded(products),
                    Err(_) => LoadState::Failed(LOAD_CATEGORY_PRODUCTS_FAILED.to_string()),
                };
                state.product_selected = 0;
                state
            }
        }
    }
}

/// Move `current` by `delta`, clamped to `0..len`.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = len - 1;
    if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn step_clamps_at_both_ends() {
        assert_eq!(step(0, -1, 5), 0);
        assert_eq!(step(2, -4, 5), 0);
        assert_eq!(step(2, 4, 5), 4);
        assert_eq!(step(1, 1, 5), 2);
        assert_eq!(step(3, 1, 0), 0);
    }
}

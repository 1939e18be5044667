use crate::catalog::SortOrder;
use crate::ui::inventory::intent::InventoryIntent;
use crate::ui::inventory::state::InventoryState;
use crate::ui::load::{is_current, LoadState};
use crate::ui::mvi::Reducer;

pub const LOAD_PRODUCTS_FAILED: &str = "Failed to load products.";

pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventoryState;
    type Intent = InventoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InventoryIntent::Reload => start_load(state),
            InventoryIntent::BeginSearch => {
                state.editing_search = true;
                state
            }
            InventoryIntent::EndSearch => {
                state.editing_search = false;
                state
            }
            InventoryIntent::SearchInput(ch) => {
                state.search_input.push(ch);
                state
            }
            InventoryIntent::SearchBackspace => {
                state.search_input.pop();
                state
            }
            InventoryIntent::SearchSettled { term } => {
                let term = term.trim().to_string();
                if term == state.query.search {
                    return state;
                }
                state.query.search = term;
                state.query.page = 1;
                start_load(state)
            }
            InventoryIntent::CycleCategory { forward } => {
                let mut options: Vec<Option<String>> = vec![None];
                options.extend(state.categories.iter().map(|c| Some(c.slug.clone())));
                let current = options
                    .iter()
                    .position(|option| *option == state.query.category)
                    .unwrap_or(0);
                let next = if forward {
                    (current + 1) % options.len()
                } else if current == 0 {
                    options.len() - 1
                } else {
                    current - 1
                };
                let slug = options.swap_remove(next);
                select_category(state, slug)
            }
            InventoryIntent::SelectCategory { slug } => select_category(state, slug),
            InventoryIntent::NextPage => {
                if !state.has_next_page() {
                    return state;
                }
                state.query.page += 1;
                start_load(state)
            }
            InventoryIntent::PrevPage => {
                if !state.has_prev_page() {
                    return state;
                }
                state.query.page -= 1;
                start_load(state)
            }
            InventoryIntent::CycleSort => {
                state.sort = SortOrder::cycle(state.sort);
                state.selected = 0;
                state
            }
            InventoryIntent::MoveUp => {
                let len = row_count(&state);
                state.selected = if state.selected == 0 {
                    len.saturating_sub(1)
                } else {
                    state.selected - 1
                };
                state
            }
            InventoryIntent::MoveDown => {
                let len = row_count(&state);
                state.selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                state
            }
            InventoryIntent::ListingLoaded { generation, result } => {
                if !is_current(state.generation, generation) {
                    return state;
                }
                state.listing = match result {
                    Ok(page) => LoadState::Loaded(page),
                    Err(_) => LoadState::Failed(LOAD_PRODUCTS_FAILED.to_string()),
                };
                state.selected = 0;
                state
            }
            InventoryIntent::CategoriesLoaded { result } => {
                // Dropdown failures leave only "All Categories".
                if let Ok(categories) = result {
                    state.categories = categories;
                }
                state
            }
        }
    }
}

fn start_load(mut state: InventoryState) -> InventoryState {
    state.listing = LoadState::Loading;
    state.generation = state.generation.next();
    state.selected = 0;
    state
}

fn select_category(mut state: InventoryState, slug: Option<String>) -> InventoryState {
    if slug == state.query.category {
        return state;
    }
    state.query.category = slug;
    state.query.page = 1;
    start_load(state)
}

fn row_count(state: &InventoryState) -> usize {
    state
        .listing
        .loaded()
        .map(|page| page.products.len())
        .unwrap_or(0)
}

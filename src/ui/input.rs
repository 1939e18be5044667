use crate::ui::app::{App, Route};
use crate::ui::catalogue::CatalogueIntent;
use crate::ui::home::HomeIntent;
use crate::ui::inventory::InventoryIntent;
use crate::ui::product::ProductIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The search box swallows everything but quit while it has focus.
    if app.route() == Route::Inventory && app.inventory().editing_search {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Esc | KeyCode::Backspace => {
            on_back(app);
            return;
        }
        KeyCode::Char('1') => {
            app.navigate(Route::Home);
            return;
        }
        KeyCode::Char('2') => {
            app.navigate(Route::Inventory);
            return;
        }
        KeyCode::Char('3') => {
            app.navigate(Route::Catalogue);
            return;
        }
        _ => {}
    }

    match app.route() {
        Route::Home => handle_home_key(app, key),
        Route::Inventory => handle_inventory_key(app, key),
        Route::Catalogue => handle_catalogue_key(app, key),
        Route::Product(_) => handle_product_key(app, key),
    }
}

/// Back closes an open category before leaving the screen.
fn on_back(app: &mut App) {
    if app.route() == Route::Catalogue && app.catalogue().open.is_some() {
        app.dispatch_catalogue(CatalogueIntent::Close);
        return;
    }
    app.back();
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_home(HomeIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_home(HomeIntent::MoveDown),
        KeyCode::Enter => {
            let route = app.home().selected_route();
            app.navigate(route);
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.dispatch_inventory(InventoryIntent::EndSearch),
        KeyCode::Backspace => app.on_search_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_search_input(ch)
        }
        _ => {}
    }
}

fn handle_inventory_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Char('/') => InventoryIntent::BeginSearch,
        KeyCode::Left => InventoryIntent::PrevPage,
        KeyCode::Right => InventoryIntent::NextPage,
        KeyCode::Char('c') => InventoryIntent::CycleCategory { forward: true },
        KeyCode::Char('C') => InventoryIntent::CycleCategory { forward: false },
        KeyCode::Char('a') => InventoryIntent::SelectCategory { slug: None },
        KeyCode::Char('s') => InventoryIntent::CycleSort,
        KeyCode::Up | KeyCode::Char('k') => InventoryIntent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => InventoryIntent::MoveDown,
        KeyCode::Char('r') => InventoryIntent::Reload,
        KeyCode::Enter => {
            if let Some(product) = app.inventory().selected_product() {
                app.navigate(Route::Product(product.id));
            }
            return;
        }
        _ => return,
    };
    app.dispatch_inventory(intent);
}

fn handle_catalogue_key(app: &mut App, key: KeyEvent) {
    let stride = app.catalogue().row_stride() as isize;
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('h') => CatalogueIntent::Move { delta: -1 },
        KeyCode::Right | KeyCode::Char('l') => CatalogueIntent::Move { delta: 1 },
        KeyCode::Up | KeyCode::Char('k') => CatalogueIntent::Move { delta: -stride },
        KeyCode::Down | KeyCode::Char('j') => CatalogueIntent::Move { delta: stride },
        KeyCode::Char('v') => CatalogueIntent::ToggleViewMode,
        KeyCode::Char('r') => CatalogueIntent::Reload,
        KeyCode::Enter => {
            if app.catalogue().open.is_none() {
                CatalogueIntent::OpenSelected
            } else {
                if let Some(product) = app.catalogue().selected_product() {
                    let id = product.id;
                    app.navigate(Route::Product(id));
                }
                return;
            }
        }
        _ => return,
    };
    app.dispatch_catalogue(intent);
}

fn handle_product_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Left | KeyCode::Char('h') => ProductIntent::PrevImage,
        KeyCode::Right | KeyCode::Char('l') => ProductIntent::NextImage,
        KeyCode::Up | KeyCode::Char('k') => ProductIntent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => ProductIntent::MoveDown,
        KeyCode::Enter => {
            if let Some(similar) = app.product().selected_similar() {
                let id = similar.id;
                app.navigate(Route::Product(id));
            }
            return;
        }
        _ => return,
    };
    app.dispatch_product(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

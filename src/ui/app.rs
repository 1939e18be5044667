use crate::config::UiConfig;
use crate::debounce::Debouncer;
use crate::ui::catalogue::{
    CatalogueIntent, CatalogueReducer, CatalogueState, LOAD_CATEGORIES_FAILED,
    LOAD_CATEGORY_PRODUCTS_FAILED,
};
use crate::ui::home::{HomeIntent, HomeReducer, HomeState};
use crate::ui::inventory::{
    InventoryIntent, InventoryReducer, InventoryState, LOAD_PRODUCTS_FAILED,
};
use crate::ui::load::LoadState;
use crate::ui::mvi::Reducer;
use crate::ui::product::{
    ProductIntent, ProductReducer, ProductState, LOAD_PRODUCT_FAILED, LOAD_SIMILAR_FAILED,
};
use crate::ui::worker::{CatalogEvent, UiCommand, UiCommandSender};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Home,
    Inventory,
    Catalogue,
    Product(u64),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Inventory => "Inventory",
            Route::Catalogue => "Catalogue",
            Route::Product(_) => "Product",
        }
    }
}

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    /// Routes to return to on Back.
    back_stack: Vec<Route>,
    config: UiConfig,
    tick: u64,
    home: HomeState,
    inventory: InventoryState,
    catalogue: CatalogueState,
    product: ProductState,
    commands: Option<UiCommandSender>,
    search_debouncer: Option<Debouncer<String>>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            route: Route::Home,
            back_stack: Vec::new(),
            inventory: InventoryState::new(config.page_size),
            config,
            tick: 0,
            home: HomeState::default(),
            catalogue: CatalogueState::default(),
            product: ProductState::default(),
            commands: None,
            search_debouncer: None,
            last_command_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn inventory(&self) -> &InventoryState {
        &self.inventory
    }

    pub fn catalogue(&self) -> &CatalogueState {
        &self.catalogue
    }

    pub fn product(&self) -> &ProductState {
        &self.product
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Current frame of the loading indicator.
    pub fn spinner(&self) -> char {
        SPINNER[(self.tick % SPINNER.len() as u64) as usize]
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn set_search_debouncer(&mut self, debouncer: Debouncer<String>) {
        self.search_debouncer = Some(debouncer);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Show `route`, remembering the current one for Back. Every forward
    /// navigation mounts the screen and fetches its data again.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            self.enter(route);
            return;
        }
        self.leave();
        self.back_stack.push(self.route);
        self.route = route;
        self.enter(route);
    }

    /// Return to the previous route without refetching it. Detail screens
    /// share one slot, so an earlier product is opened again.
    pub fn back(&mut self) -> bool {
        let Some(route) = self.back_stack.pop() else {
            return false;
        };
        self.leave();
        self.route = route;
        if let Route::Product(id) = route {
            if self.product.id != Some(id) {
                self.dispatch_product(ProductIntent::Open { id });
            }
        }
        true
    }

    /// Initial route; does not create a Back entry.
    pub fn start(&mut self, route: Route) {
        self.route = route;
        self.back_stack.clear();
        self.enter(route);
    }

    fn enter(&mut self, route: Route) {
        match route {
            Route::Home => {}
            Route::Inventory => {
                self.remount_inventory();
                self.dispatch_inventory(InventoryIntent::Reload);
                if self.inventory.categories.is_empty() {
                    self.send_command(UiCommand::LoadCategoryOptions);
                }
            }
            Route::Catalogue => self.dispatch_catalogue(CatalogueIntent::Reload),
            Route::Product(id) => self.dispatch_product(ProductIntent::Open { id }),
        }
    }

    fn leave(&mut self) {
        if self.route == Route::Inventory {
            self.cancel_search();
        }
    }

    /// Fresh filters for a new mount. The dropdown cache survives and the
    /// generation keeps counting so replies for the old mount stay stale.
    fn remount_inventory(&mut self) {
        self.cancel_search();
        let mut fresh = InventoryState::new(self.config.page_size);
        fresh.categories = std::mem::take(&mut self.inventory.categories);
        fresh.generation = self.inventory.generation;
        self.inventory = fresh;
    }

    // ========================================================================
    // Screen dispatch (MVI pattern)
    // ========================================================================

    pub fn dispatch_home(&mut self, intent: HomeIntent) {
        dispatch_mvi!(self, home, HomeReducer, intent);
    }

    /// Dispatch to the inventory reducer and fetch if it started a request.
    pub fn dispatch_inventory(&mut self, intent: InventoryIntent) {
        let before = self.inventory.generation;
        dispatch_mvi!(self, inventory, InventoryReducer, intent);
        if self.inventory.generation != before {
            let command = UiCommand::LoadListing {
                generation: self.inventory.generation,
                query: self.inventory.query.clone(),
            };
            if !self.send_command(command) {
                self.inventory.listing = LoadState::Failed(LOAD_PRODUCTS_FAILED.to_string());
            }
        }
    }

    pub fn dispatch_catalogue(&mut self, intent: CatalogueIntent) {
        let categories_before = self.catalogue.categories_generation;
        let products_before = self.catalogue.products_generation;
        dispatch_mvi!(self, catalogue, CatalogueReducer, intent);

        if self.catalogue.categories_generation != categories_before
            && self.catalogue.categories.is_loading()
        {
            let command = UiCommand::LoadCategories {
                generation: self.catalogue.categories_generation,
            };
            if !self.send_command(command) {
                self.catalogue.categories = LoadState::Failed(LOAD_CATEGORIES_FAILED.to_string());
            }
        }
        if self.catalogue.products_generation != products_before
            && self.catalogue.products.is_loading()
        {
            if let Some(category) = &self.catalogue.open {
                let command = UiCommand::LoadCategoryProducts {
                    generation: self.catalogue.products_generation,
                    slug: category.slug.clone(),
                };
                if !self.send_command(command) {
                    self.catalogue.products =
                        LoadState::Failed(LOAD_CATEGORY_PRODUCTS_FAILED.to_string());
                }
            }
        }
    }

    /// Dispatch to the product reducer. Detail and similar products are two
    /// dependent fetches: the second is only issued once the detail loaded.
    pub fn dispatch_product(&mut self, intent: ProductIntent) {
        let before = self.product.generation;
        let similar_before = self.product.similar_generation;
        dispatch_mvi!(self, product, ProductReducer, intent);

        if self.product.generation != before && self.product.product.is_loading() {
            if let Some(id) = self.product.id {
                let command = UiCommand::LoadProduct {
                    generation: self.product.generation,
                    id,
                };
                if !self.send_command(command) {
                    self.product.product = LoadState::Failed(LOAD_PRODUCT_FAILED.to_string());
                }
            }
        }
        if self.product.similar_generation != similar_before && self.product.similar.is_loading() {
            if let Some(product) = self.product.product.loaded() {
                let command = UiCommand::LoadSimilar {
                    generation: self.product.similar_generation,
                    product_id: product.id,
                    category: product.category.clone(),
                    cap: self.config.similar_limit,
                };
                if !self.send_command(command) {
                    self.product.similar = LoadState::Failed(LOAD_SIMILAR_FAILED.to_string());
                }
            }
        }
    }

    // ========================================================================
    // Search box
    // ========================================================================

    pub fn on_search_input(&mut self, ch: char) {
        self.dispatch_inventory(InventoryIntent::SearchInput(ch));
        self.schedule_search();
    }

    pub fn on_search_backspace(&mut self) {
        self.dispatch_inventory(InventoryIntent::SearchBackspace);
        self.schedule_search();
    }

    pub fn on_search_settled(&mut self, term: String) {
        if self.route != Route::Inventory {
            return;
        }
        self.dispatch_inventory(InventoryIntent::SearchSettled { term });
    }

    fn schedule_search(&mut self) {
        let term = self.inventory.search_input.clone();
        if let Some(debouncer) = &mut self.search_debouncer {
            debouncer.push(term);
        }
    }

    fn cancel_search(&mut self) {
        if let Some(debouncer) = &mut self.search_debouncer {
            debouncer.cancel();
        }
    }

    // ========================================================================
    // Fetch results
    // ========================================================================

    pub fn on_catalog_event(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Listing { generation, result } => {
                if let Err(err) = &result {
                    tracing::warn!(kind = err.kind(), "Listing fetch failed: {}", err);
                }
                self.dispatch_inventory(InventoryIntent::ListingLoaded { generation, result });
            }
            CatalogEvent::CategoryOptions { result } => {
                if let Err(err) = &result {
                    tracing::warn!(kind = err.kind(), "Category list fetch failed: {}", err);
                }
                self.dispatch_inventory(InventoryIntent::CategoriesLoaded { result });
            }
            CatalogEvent::Categories { generation, result } => {
                if let Err(err) = &result {
                    tracing::warn!(kind = err.kind(), "Category aggregation failed: {}", err);
                }
                self.dispatch_catalogue(CatalogueIntent::CategoriesLoaded { generation, result });
            }
            CatalogEvent::CategoryProducts { generation, result } => {
                if let Err(err) = &result {
                    tracing::warn!(kind = err.kind(), "Category products fetch failed: {}", err);
                }
                self.dispatch_catalogue(CatalogueIntent::ProductsLoaded { generation, result });
            }
            CatalogEvent::Product { generation, result } => {
                if let Err(err) = &result {
                    tracing::warn!(kind = err.kind(), "Product fetch failed: {}", err);
                }
                self.dispatch_product(ProductIntent::ProductLoaded { generation, result });
            }
            CatalogEvent::Similar { generation, result } => {
                if let Err(err) = &result {
                    tracing::warn!(kind = err.kind(), "Similar products fetch failed: {}", err);
                }
                self.dispatch_product(ProductIntent::SimilarLoaded { generation, result });
            }
        }
    }

    /// Queue a fetch for the worker. False only when the queue refused it;
    /// without a worker attached the command is skipped.
    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            return true;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!("Catalog command not sent: {}", err);
                self.last_command_error = Some(format!("Request not sent: {}", err));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Product, ProductPage};
    use crate::catalog::{CategoryRef, ProductQuery};
    use crate::ui::load::Generation;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel(32);
        let mut app = App::new(UiConfig::default());
        app.set_command_sender(tx);
        (app, rx)
    }

    fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }
        commands
    }

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: String::new(),
            price: 10.0,
            discount_percentage: 0.0,
            rating: 4.0,
            stock: 3,
            brand: Some("Acme".to_string()),
            category: category.to_string(),
            thumbnail: String::new(),
            images: vec!["a.png".to_string(), "b.png".to_string()],
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            url: "http://catalog/products/1".to_string(),
        }
    }

    // -- navigation -------------------------------------------------------

    #[test]
    fn navigate_and_back() {
        let (mut app, _rx) = make_app();
        app.navigate(Route::Inventory);
        app.navigate(Route::Product(5));
        assert_eq!(app.route(), Route::Product(5));
        assert!(app.back());
        assert_eq!(app.route(), Route::Inventory);
        assert!(app.back());
        assert_eq!(app.route(), Route::Home);
        assert!(!app.back());
    }

    #[test]
    fn back_does_not_refetch() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Inventory);
        app.navigate(Route::Product(5));
        drain(&mut rx);
        app.back();
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn back_reopens_earlier_product() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Product(1));
        let generation = app.product().generation;
        app.on_catalog_event(CatalogEvent::Product {
            generation,
            result: Ok(product(1, "laptops")),
        });
        app.navigate(Route::Product(2));
        drain(&mut rx);

        assert!(app.back());
        assert_eq!(app.route(), Route::Product(1));
        assert_eq!(app.product().id, Some(1));
        assert!(app.product().product.is_loading());
        let commands = drain(&mut rx);
        assert!(matches!(&commands[..], [UiCommand::LoadProduct { id: 1, .. }]));
    }

    #[test]
    fn back_to_same_product_keeps_detail() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Product(1));
        let generation = app.product().generation;
        app.on_catalog_event(CatalogEvent::Product {
            generation,
            result: Ok(product(1, "laptops")),
        });
        app.navigate(Route::Home);
        drain(&mut rx);

        assert!(app.back());
        assert_eq!(app.route(), Route::Product(1));
        assert!(app.product().product.loaded().is_some());
        assert!(drain(&mut rx).is_empty());
    }

    // -- inventory --------------------------------------------------------

    #[test]
    fn entering_inventory_fetches_listing_and_dropdown() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Inventory);
        let commands = drain(&mut rx);
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            &commands[0],
            UiCommand::LoadListing { query, .. } if query.page == 1 && query.category.is_none()
        ));
        assert_eq!(commands[1], UiCommand::LoadCategoryOptions);
    }

    #[test]
    fn category_and_search_resolve_to_category_request() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Inventory);
        app.dispatch_inventory(InventoryIntent::CategoriesLoaded {
            result: Ok(vec![CategoryRef {
                slug: "laptops".to_string(),
                name: "Laptops".to_string(),
            }]),
        });
        app.on_search_settled("apple".to_string());
        app.dispatch_inventory(InventoryIntent::CycleCategory { forward: true });

        let last = drain(&mut rx).pop().unwrap();
        let UiCommand::LoadListing { query, .. } = last else {
            panic!("expected listing command");
        };
        assert_eq!(query.search, "apple");
        assert!(matches!(query.resolve(), ProductQuery::Category { ref slug, .. } if slug == "laptops"));
    }

    #[test]
    fn stale_listing_does_not_overwrite_newer_request() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Inventory);
        let first = app.inventory().generation;
        app.on_search_settled("phone".to_string());
        let second = app.inventory().generation;
        drain(&mut rx);

        let newer = ProductPage {
            products: vec![product(2, "smartphones")],
            total: 1,
            skip: 0,
            limit: 20,
        };
        app.on_catalog_event(CatalogEvent::Listing {
            generation: second,
            result: Ok(newer.clone()),
        });
        app.on_catalog_event(CatalogEvent::Listing {
            generation: first,
            result: Ok(ProductPage::default()),
        });

        assert_eq!(app.inventory().listing, LoadState::Loaded(newer));
    }

    #[test]
    fn listing_failure_shows_flat_message() {
        let (mut app, _rx) = make_app();
        app.navigate(Route::Inventory);
        let generation = app.inventory().generation;
        app.on_catalog_event(CatalogEvent::Listing {
            generation,
            result: Err(not_found()),
        });
        assert_eq!(
            app.inventory().listing.error(),
            Some(crate::ui::inventory::LOAD_PRODUCTS_FAILED)
        );
    }

    #[test]
    fn remounting_inventory_starts_fresh() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Inventory);
        app.dispatch_inventory(InventoryIntent::CategoriesLoaded {
            result: Ok(vec![CategoryRef {
                slug: "laptops".to_string(),
                name: "Laptops".to_string(),
            }]),
        });
        app.dispatch_inventory(InventoryIntent::SelectCategory {
            slug: Some("laptops".to_string()),
        });
        app.on_search_settled("apple".to_string());
        app.dispatch_inventory(InventoryIntent::CycleSort);
        let stale = app.inventory().generation;
        drain(&mut rx);

        app.navigate(Route::Home);
        app.navigate(Route::Inventory);

        let inventory = app.inventory();
        assert_eq!(inventory.query.category, None);
        assert!(inventory.query.search.is_empty());
        assert!(inventory.search_input.is_empty());
        assert_eq!(inventory.sort, None);
        assert_eq!(inventory.query.page, 1);
        assert_eq!(inventory.categories.len(), 1);
        assert!(inventory.generation > stale);

        let commands = drain(&mut rx);
        assert!(matches!(
            &commands[..],
            [UiCommand::LoadListing { query, .. }] if query.category.is_none() && query.search.is_empty()
        ));

        app.on_catalog_event(CatalogEvent::Listing {
            generation: stale,
            result: Ok(ProductPage::default()),
        });
        assert!(app.inventory().listing.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_inventory_drops_pending_search() {
        let (mut app, mut rx) = make_app();
        let settled = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&settled);
        app.set_search_debouncer(Debouncer::new(
            Duration::from_millis(300),
            move |term: String| sink.lock().push(term),
        ));

        app.navigate(Route::Inventory);
        app.dispatch_inventory(InventoryIntent::BeginSearch);
        app.on_search_input('x');
        app.navigate(Route::Home);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(settled.lock().is_empty());

        drain(&mut rx);
        app.on_search_settled("late".to_string());
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn refused_listing_request_fails_slot() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut app = App::new(UiConfig::default());
        app.set_command_sender(tx);

        app.navigate(Route::Inventory);
        assert_eq!(
            app.inventory().listing.error(),
            Some(crate::ui::inventory::LOAD_PRODUCTS_FAILED)
        );
        assert!(app.last_command_error().is_some());
    }

    #[test]
    fn refused_product_request_fails_slot() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut app = App::new(UiConfig::default());
        app.set_command_sender(tx);

        app.navigate(Route::Product(3));
        assert_eq!(
            app.product().product.error(),
            Some(crate::ui::product::LOAD_PRODUCT_FAILED)
        );
        assert_eq!(app.product().similar, LoadState::Idle);
    }

    // -- product detail ---------------------------------------------------

    #[test]
    fn similar_fetch_waits_for_detail() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Product(7));
        let commands = drain(&mut rx);
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], UiCommand::LoadProduct { id: 7, .. }));

        let generation = app.product().generation;
        app.on_catalog_event(CatalogEvent::Product {
            generation,
            result: Ok(product(7, "laptops")),
        });
        let commands = drain(&mut rx);
        assert_eq!(
            commands,
            vec![UiCommand::LoadSimilar {
                generation: app.product().similar_generation,
                product_id: 7,
                category: "laptops".to_string(),
                cap: 6,
            }]
        );
    }

    #[test]
    fn missing_product_has_no_similar_fetch() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Product(9999));
        drain(&mut rx);
        let generation = app.product().generation;
        app.on_catalog_event(CatalogEvent::Product {
            generation,
            result: Err(not_found()),
        });
        assert!(drain(&mut rx).is_empty());
        assert_eq!(
            app.product().product.error(),
            Some(crate::ui::product::PRODUCT_NOT_FOUND)
        );
    }

    #[test]
    fn similar_result_for_previous_product_is_dropped() {
        let (mut app, _rx) = make_app();
        app.navigate(Route::Product(1));
        let generation = app.product().generation;
        app.on_catalog_event(CatalogEvent::Product {
            generation,
            result: Ok(product(1, "laptops")),
        });
        let stale_similar = app.product().similar_generation;

        app.navigate(Route::Product(2));
        app.on_catalog_event(CatalogEvent::Similar {
            generation: stale_similar,
            result: Ok(vec![product(3, "laptops")]),
        });
        assert_eq!(app.product().similar, LoadState::Idle);
    }

    // -- catalogue --------------------------------------------------------

    #[test]
    fn opening_category_fetches_its_products() {
        let (mut app, mut rx) = make_app();
        app.navigate(Route::Catalogue);
        let generation = app.catalogue().categories_generation;
        app.on_catalog_event(CatalogEvent::Categories {
            generation,
            result: Ok(vec![crate::catalog::Category {
                slug: "beauty".to_string(),
                name: "Beauty".to_string(),
                count: 5,
                thumbnail: None,
            }]),
        });
        drain(&mut rx);

        app.dispatch_catalogue(CatalogueIntent::OpenSelected);
        let commands = drain(&mut rx);
        assert!(matches!(
            &commands[..],
            [UiCommand::LoadCategoryProducts { slug, .. }] if slug == "beauty"
        ));

        app.dispatch_catalogue(CatalogueIntent::Close);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn commands_without_sender_are_skipped() {
        let mut app = App::new(UiConfig::default());
        app.navigate(Route::Inventory);
        assert!(app.inventory().listing.is_loading());
        assert!(app.last_command_error().is_none());
        assert_eq!(app.inventory().generation, Generation::default().next());
    }
}

//! Executes catalog fetches on behalf of the UI.
//!
//! The UI sends [`UiCommand`]s; each command runs as its own task and its
//! result comes back as an [`AppEvent::Catalog`]. In-flight requests are
//! never cancelled: reducers drop results whose generation is stale.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{ApiError, CatalogClient, PageRequest, Product, ProductPage};
use crate::catalog::{
    aggregate_categories, list_categories, select_similar, Category, CategoryRef, ListingQuery,
    SIMILAR_FETCH_LIMIT,
};
use crate::ui::events::AppEvent;
use crate::ui::load::Generation;

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    LoadListing {
        generation: Generation,
        query: ListingQuery,
    },
    LoadCategoryOptions,
    LoadCategories {
        generation: Generation,
    },
    LoadCategoryProducts {
        generation: Generation,
        slug: String,
    },
    LoadProduct {
        generation: Generation,
        id: u64,
    },
    LoadSimilar {
        generation: Generation,
        product_id: u64,
        category: String,
        cap: usize,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Fetch results routed back to the screens.
#[derive(Debug)]
pub enum CatalogEvent {
    Listing {
        generation: Generation,
        result: Result<ProductPage, ApiError>,
    },
    CategoryOptions {
        result: Result<Vec<CategoryRef>, ApiError>,
    },
    Categories {
        generation: Generation,
        result: Result<Vec<Category>, ApiError>,
    },
    CategoryProducts {
        generation: Generation,
        result: Result<Vec<Product>, ApiError>,
    },
    Product {
        generation: Generation,
        result: Result<Product, ApiError>,
    },
    Similar {
        generation: Generation,
        result: Result<Vec<Product>, ApiError>,
    },
}

pub struct CatalogWorker {
    receiver: mpsc::Receiver<UiCommand>,
}

impl CatalogWorker {
    pub fn new(receiver: mpsc::Receiver<UiCommand>) -> Self {
        Self { receiver }
    }

    pub fn spawn(
        self,
        client: CatalogClient,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> JoinHandle<()> {
        tokio::spawn(self.run(client, events))
    }

    pub async fn run(mut self, client: CatalogClient, events: mpsc::UnboundedSender<AppEvent>) {
        while let Some(command) = self.receiver.recv().await {
            let client = client.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let event = execute(&client, command).await;
                if events.send(AppEvent::Catalog(event)).is_err() {
                    tracing::trace!("Catalog result dropped (UI gone)");
                }
            });
        }
        tracing::debug!("Catalog worker stopped");
    }
}

/// Run one command against the catalog.
pub async fn execute(client: &CatalogClient, command: UiCommand) -> CatalogEvent {
    match command {
        UiCommand::LoadListing { generation, query } => {
            let request = query.resolve();
            tracing::info!(?request, generation = generation.value(), "Fetching listing");
            CatalogEvent::Listing {
                generation,
                result: request.fetch(client).await,
            }
        }
        UiCommand::LoadCategoryOptions => CatalogEvent::CategoryOptions {
            result: list_categories(client).await,
        },
        UiCommand::LoadCategories { generation } => {
            tracing::info!(generation = generation.value(), "Aggregating categories");
            CatalogEvent::Categories {
                generation,
                result: aggregate_categories(client).await,
            }
        }
        UiCommand::LoadCategoryProducts { generation, slug } => {
            tracing::info!(%slug, "Fetching category products");
            CatalogEvent::CategoryProducts {
                generation,
                result: client
                    .category_products(&slug, None)
                    .await
                    .map(|page| page.products),
            }
        }
        UiCommand::LoadProduct { generation, id } => {
            tracing::info!(id, "Fetching product");
            CatalogEvent::Product {
                generation,
                result: client.product(id).await,
            }
        }
        UiCommand::LoadSimilar {
            generation,
            product_id,
            category,
            cap,
        } => {
            let window = PageRequest {
                limit: SIMILAR_FETCH_LIMIT.max(cap as u64 + 1),
                skip: 0,
            };
            let result = client
                .category_products(&category, Some(window))
                .await
                .map(|page| select_similar(page.products, product_id, cap));
            CatalogEvent::Similar { generation, result }
        }
    }
}

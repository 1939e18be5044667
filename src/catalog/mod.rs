//! Catalog logic that runs on already-fetched data.
//!
//! Everything here is independent of the terminal UI: page arithmetic,
//! query resolution, sorting, pricing, similar products selection and the
//! category aggregation fan-out.

pub mod category;
pub mod pagination;
pub mod pricing;
pub mod query;
pub mod similar;
pub mod sort;

pub use category::{aggregate_categories, list_categories, Category, CategoryRef};
pub use pagination::{page_request, skip_for, total_pages};
pub use query::{ListingQuery, ProductQuery};
pub use similar::{select_similar, SIMILAR_FETCH_LIMIT};
pub use sort::{sort_products, SortDirection, SortKey, SortOrder};

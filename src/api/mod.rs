//! Typed client for the remote product catalog.
//!
//! The catalog is a fixed third-party HTTP API (DummyJSON). Every screen
//! reads from it through [`CatalogClient`]; nothing is cached locally.

mod client;
mod error;
mod types;

pub use client::{CatalogClient, PageRequest};
pub use error::ApiError;
pub use types::{CategoryEntry, Product, ProductPage};

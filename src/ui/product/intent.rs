use crate::api::{ApiError, Product};
use crate::ui::load::Generation;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum ProductIntent {
    Open { id: u64 },
    NextImage,
    PrevImage,
    MoveUp,
    MoveDown,
    ProductLoaded {
        generation: Generation,
        result: Result<Product, ApiError>,
    },
    SimilarLoaded {
        generation: Generation,
        result: Result<Vec<Product>, ApiError>,
    },
}

impl Intent for ProductIntent {}

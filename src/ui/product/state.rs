use crate::api::Product;
use crate::ui::load::{Generation, LoadState};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductState {
    pub id: Option<u64>,
    pub product: LoadState<Product>,
    /// Gallery cursor into `product.images`.
    pub image_index: usize,
    pub similar: LoadState<Vec<Product>>,
    pub similar_selected: usize,
    pub generation: Generation,
    pub similar_generation: Generation,
}

impl UiState for ProductState {}

impl ProductState {
    /// Image shown in the gallery, falling back to the thumbnail.
    pub fn current_image(&self) -> Option<&str> {
        let product = self.product.loaded()?;
        product
            .images
            .get(self.image_index)
            .map(String::as_str)
            .or(Some(product.thumbnail.as_str()))
            .filter(|url| !url.is_empty())
    }

    pub fn selected_similar(&self) -> Option<&Product> {
        self.similar.loaded()?.get(self.similar_selected)
    }
}

//! Product list state and the mutate-then-refresh flow.
//!
//! DESIGN
//! ======
//! The list is a snapshot of one backend page. Every successful fetch
//! replaces products and pagination wholesale; a failed fetch is logged and
//! leaves the snapshot as it was. Mutations are never applied locally: each
//! one is sent to the backend and followed by a re-fetch of the current page,
//! whether or not the mutation succeeded.
//!
//! Concurrent fetches are not sequenced. Whichever response is applied last
//! wins.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::api::CatalogApi;
use crate::net::error::ApiError;
use crate::net::types::{Pagination, Product, ProductPage};
use crate::state::modal::ProductAction;

/// Cached product page shared through context as `RwSignal<ProductsState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub pagination: Option<Pagination>,
    /// Page the view is showing; only a successful fetch moves it.
    pub page: u32,
    /// Set once the first fetch has resolved, successfully or not.
    pub loaded: bool,
    /// Product shown in the read-only details panel.
    pub selected: Option<Product>,
}

impl ProductsState {
    /// Page to re-fetch after a mutation.
    pub fn current_page(&self) -> u32 {
        self.page.max(1)
    }

    /// Apply a fetch outcome: replace on success, keep everything on failure.
    pub fn apply_fetch(&mut self, result: Result<ProductPage, ApiError>) {
        match result {
            Ok(page) => {
                if page.pagination.current_page > 0 {
                    self.page = page.pagination.current_page;
                }
                if let Some(selected) = &self.selected {
                    self.selected = page.products.iter().find(|p| p.id == selected.id).cloned();
                }
                self.items = page.products;
                self.pagination = Some(page.pagination);
            }
            Err(e) => log::error!("product fetch failed: {e}"),
        }
        self.loaded = true;
    }

    pub fn select(&mut self, product: &Product) {
        self.selected = Some(product.clone());
    }
}

/// Send one mutation to the backend.
///
/// # Errors
///
/// Returns whatever the backend call returned.
pub async fn dispatch<C>(api: &C, token: &str, action: &ProductAction) -> Result<(), ApiError>
where
    C: CatalogApi + ?Sized,
{
    match action {
        ProductAction::Create(product) => api.create_product(token, product).await,
        ProductAction::Update { id, product } => api.update_product(token, id, product).await,
        ProductAction::Delete { id } => api.delete_product(token, id).await,
    }
}

/// Send `action`, log a failure, then re-fetch `page` regardless.
///
/// # Errors
///
/// Returns the re-fetch error; the mutation error is only logged.
pub async fn dispatch_then_refresh<C>(
    api: &C,
    token: &str,
    action: &ProductAction,
    page: u32,
) -> Result<ProductPage, ApiError>
where
    C: CatalogApi + ?Sized,
{
    if let Err(e) = dispatch(api, token, action).await {
        log::error!("product mutation failed: {e}");
    }
    api.list_products(token, page).await
}

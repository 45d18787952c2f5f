//! Product console: table, pagination, details panel and the product dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only rendered once the session gate reports a signed-in user. The page
//! owns the product snapshot and the modal state; every backend call takes
//! the session token explicitly.

use leptos::prelude::*;

use crate::components::pagination::PaginationBar;
use crate::components::product_detail::ProductDetail;
use crate::components::product_modal::ProductModalDialog;
use crate::components::product_table::ProductTable;
use crate::net::api::HttpBackend;
use crate::net::types::Product;
use crate::state::modal::{ProductAction, ProductModal};
use crate::state::products::ProductsState;
use crate::state::session::SessionState;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = StoredValue::new(expect_context::<HttpBackend>());
    let products = RwSignal::new(ProductsState::default());
    let modal = RwSignal::new(ProductModal::default());

    let token = move || session.with_untracked(|s| s.credential().map(str::to_owned));

    // The shown page only changes once the fetch succeeds.
    let load = Callback::new(move |page: u32| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::CatalogApi;

            let Some(token) = token() else {
                log::warn!("product fetch skipped: not signed in");
                return;
            };
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                let result = backend.list_products(&token, page).await;
                products.update(|p| p.apply_fetch(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, backend, page);
        }
    });

    let on_confirm = Callback::new(move |action: ProductAction| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = token() else {
                log::warn!("product mutation skipped: not signed in");
                return;
            };
            let backend = backend.get_value();
            let page = products.with_untracked(ProductsState::current_page);
            leptos::task::spawn_local(async move {
                let result = crate::state::products::dispatch_then_refresh(&backend, &token, &action, page).await;
                products.update(|p| p.apply_fetch(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
        }
    });

    // First page on mount.
    Effect::new(move || load.run(1));

    let on_details = Callback::new(move |product: Product| products.update(|p| p.select(&product)));
    let on_edit = Callback::new(move |product: Product| modal.set(ProductModal::edit(&product)));
    let on_delete = Callback::new(move |product: Product| modal.set(ProductModal::delete(&product)));
    let on_create = move |_| modal.set(ProductModal::create());

    let pagination = Signal::derive(move || products.with(|p| p.pagination.clone()));
    let selected = Signal::derive(move || products.with(|p| p.selected.clone()));

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <h1>"Products"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "New Product"
                </button>
            </header>
            <div class="products-page__body">
                <section class="products-page__list">
                    <ProductTable products on_details on_edit on_delete/>
                    <PaginationBar pagination on_page=load/>
                </section>
                <aside class="products-page__detail">
                    <ProductDetail product=selected/>
                </aside>
            </div>
            <ProductModalDialog modal on_confirm/>
        </div>
    }
}

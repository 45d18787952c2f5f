//! Product rows with per-row details/edit/delete actions.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::products::ProductsState;

/// Table of the cached product page.
///
/// Shows a loading row until the first fetch resolves and an empty-state row
/// when the page has no products.
#[component]
pub fn ProductTable(
    products: RwSignal<ProductsState>,
    on_details: Callback<Product>,
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
) -> impl IntoView {
    let rows = move || {
        let state = products.get();
        if !state.loaded {
            return view! {
                <tr>
                    <td class="product-table__placeholder" colspan="6">"Loading..."</td>
                </tr>
            }
            .into_any();
        }
        if state.items.is_empty() {
            return view! {
                <tr>
                    <td class="product-table__placeholder" colspan="6">"No products yet"</td>
                </tr>
            }
            .into_any();
        }
        state
            .items
            .into_iter()
            .map(|product| view! { <ProductRow product on_details on_edit on_delete/> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th class="product-table__col--narrow">"Category"</th>
                    <th>"Title"</th>
                    <th class="product-table__col--narrow product-table__num">"Original price"</th>
                    <th class="product-table__col--narrow product-table__num">"Price"</th>
                    <th class="product-table__col--narrow">"Status"</th>
                    <th class="product-table__col--actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn ProductRow(
    product: Product,
    on_details: Callback<Product>,
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
) -> impl IntoView {
    let enabled = product.is_enabled;
    let details_target = product.clone();
    let edit_target = product.clone();
    let delete_target = product.clone();

    view! {
        <tr class="product-table__row">
            <td>{product.category.clone()}</td>
            <td>{product.title.clone()}</td>
            <td class="product-table__num">{product.origin_price.to_string()}</td>
            <td class="product-table__num">{product.price.to_string()}</td>
            <td>
                {if enabled {
                    view! { <span class="product-table__status product-table__status--on">"Enabled"</span> }
                        .into_any()
                } else {
                    view! { <span class="product-table__status">"Disabled"</span> }.into_any()
                }}
            </td>
            <td>
                <div class="btn-group">
                    <button class="btn btn--small" on:click=move |_| on_details.run(details_target.clone())>
                        "Details"
                    </button>
                    <button class="btn btn--small btn--outline" on:click=move |_| on_edit.run(edit_target.clone())>
                        "Edit"
                    </button>
                    <button
                        class="btn btn--small btn--outline-danger"
                        on:click=move |_| on_delete.run(delete_target.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}

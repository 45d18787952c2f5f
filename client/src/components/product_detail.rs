//! Read-only details card for the selected product.

use leptos::prelude::*;

use crate::net::types::Product;

#[component]
pub fn ProductDetail(#[prop(into)] product: Signal<Option<Product>>) -> impl IntoView {
    view! {
        <div class="product-detail">
            <h2>"Product details"</h2>
            {move || match product.get() {
                None => view! { <p class="product-detail__empty">"Select a product to view it here."</p> }.into_any(),
                Some(p) => view! { <DetailCard product=p/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DetailCard(product: Product) -> impl IntoView {
    let Product { title, category, origin_price, price, unit, description, content, image_url, images_url, .. } =
        product;
    let has_image = !image_url.is_empty();

    view! {
        <div class="product-detail__card">
            <Show when=move || has_image>
                <img class="product-detail__primary" src=image_url.clone() alt="Primary image"/>
            </Show>
            <h3 class="product-detail__title">
                {title}
                <span class="badge">{category}</span>
            </h3>
            <p>"Description: " {description}</p>
            <p>"Content: " {content}</p>
            <p class="product-detail__price">
                <del>{origin_price.to_string()}</del>
                " / "
                {price.to_string()}
                " per "
                {unit}
            </p>
            <h4>"More images"</h4>
            <div class="product-detail__images">
                {images_url
                    .into_iter()
                    .filter(|url| !url.is_empty())
                    .map(|url| view! { <img class="product-detail__image" src=url alt="Secondary image"/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

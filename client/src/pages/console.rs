//! Session gate: spinner, then either the login form or the product console.

use leptos::prelude::*;

use crate::pages::login::LoginPage;
use crate::pages::products::ProductsPage;
use crate::state::session::SessionState;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let loading = Memo::new(move |_| session.with(|s| s.loading));
    let authenticated = Memo::new(move |_| session.with(|s| s.authenticated));

    view! {
        <main class="console">
            {move || {
                if loading.get() {
                    view! { <p class="console__loading">"Loading..."</p> }.into_any()
                } else if authenticated.get() {
                    view! { <ProductsPage/> }.into_any()
                } else {
                    view! { <LoginPage/> }.into_any()
                }
            }}
        </main>
    }
}

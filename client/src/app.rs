//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::HttpBackend;
use crate::pages::console::ConsolePage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal and the backend client (which owns the
/// `ApiConfig`), then restores the session from the token cookie once the app
/// is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::starting());
    provide_context(session);
    provide_context(HttpBackend::new(ApiConfig::from_build_env()));

    #[cfg(feature = "hydrate")]
    {
        let backend = expect_context::<HttpBackend>();
        leptos::task::spawn_local(async move {
            let restored = crate::state::session::restore_session(&crate::util::cookie::BrowserCookies, &backend).await;
            session.set(restored);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog-admin.css"/>
        <Title text="Catalog Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}

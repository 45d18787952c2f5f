//! Username/password sign-in form shown while the session gate is closed.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::HttpBackend;
use crate::net::types::SigninRequest;
use crate::state::session::SessionState;

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields before a request is built.
///
/// The password is sent verbatim.
pub fn validate_credentials(username: &str, password: &str) -> Result<SigninRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(SigninRequest { username: username.to_owned(), password: password.to_owned() })
}

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = StoredValue::new(expect_context::<HttpBackend>());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_credentials(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                let store = crate::util::cookie::BrowserCookies;
                match crate::state::session::sign_in(&store, &backend, &request).await {
                    Ok(next) => session.set(next),
                    Err(e) => info.set(format!("Sign in failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, backend);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Catalog Admin"</h1>
                <p class="login-card__subtitle">"Please sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="form-field__label" for="username">"Email"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="email"
                        placeholder="name@example.com"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="form-field__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

//! Bearer-token cookie persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token cookie is the only state that survives a reload. The session
//! gate reads it on startup and the login form writes it; both go through
//! `TokenStore` so the gate can be exercised without a browser.
//!
//! Parsing and formatting are plain string functions; only
//! `BrowserCookies` touches `document.cookie`, and it no-ops during SSR.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use time::OffsetDateTime;

/// Cookie name the backend's sample admin uses for its token.
pub const TOKEN_COOKIE: &str = "hexToken";

/// Read/write access to the persisted bearer token.
pub trait TokenStore {
    /// Stored token, if any.
    fn load(&self) -> Option<String>;

    /// Persist `token` until `expires_ms` (milliseconds since the Unix epoch).
    fn save(&self, token: &str, expires_ms: i64);
}

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
///
/// Returns `None` when the cookie is missing or its value is empty.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Format a millisecond timestamp as an RFC 7231 HTTP-date
/// (`Tue, 14 Nov 2023 22:13:20 GMT`).
pub fn http_date(expires_ms: i64) -> Option<String> {
    let format = time::macros::format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    let at = OffsetDateTime::from_unix_timestamp_nanos(i128::from(expires_ms) * 1_000_000).ok()?;
    at.format(format).ok()
}

/// Build the `document.cookie` assignment for the token.
///
/// An expiry outside the representable range yields a session cookie.
pub fn token_cookie(token: &str, expires_ms: i64) -> String {
    match http_date(expires_ms) {
        Some(date) => format!("{TOKEN_COOKIE}={token}; expires={date}; path=/"),
        None => format!("{TOKEN_COOKIE}={token}; path=/"),
    }
}

/// `TokenStore` over the page's `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

impl TokenStore for BrowserCookies {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let cookies = html_document()?.cookie().ok()?;
            find_cookie(&cookies, TOKEN_COOKIE)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str, expires_ms: i64) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = html_document() else {
                log::warn!("token cookie not written: no document");
                return;
            };
            if let Err(e) = doc.set_cookie(&token_cookie(token, expires_ms)) {
                log::error!("token cookie write failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, expires_ms);
        }
    }
}

//! Backend location and endpoint URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console talks to one external REST backend. Its origin and the
//! per-tenant API path segment are fixed when the WASM bundle and the SSR
//! binary are built (`CATALOG_API_BASE`, `CATALOG_API_PATH`), so both sides of
//! hydration see the same values. `App` provides an `HttpBackend` built
//! from it as context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "https://ec-course-api.hexschool.io/v2";
pub const DEFAULT_API_PATH: &str = "catalog";

/// Backend origin plus API path segment, with URL builders for every endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
    path: String,
}

impl ApiConfig {
    /// Build a config, trimming a trailing `/` from `base` and surrounding
    /// slashes from `path`.
    pub fn new(base: &str, path: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_owned(),
            path: path.trim().trim_matches('/').to_owned(),
        }
    }

    /// Config baked in at build time, falling back to the development defaults.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("CATALOG_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("CATALOG_API_PATH").unwrap_or(DEFAULT_API_PATH),
        )
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn signin_url(&self) -> String {
        format!("{}/admin/signin", self.base)
    }

    pub fn user_check_url(&self) -> String {
        format!("{}/api/user/check", self.base)
    }

    /// Product list for a 1-based page. Page `0` is treated as page 1.
    pub fn products_url(&self, page: u32) -> String {
        format!("{}/api/{}/admin/products?page={}", self.base, self.path, page.max(1))
    }

    pub fn product_create_url(&self) -> String {
        format!("{}/api/{}/admin/product", self.base, self.path)
    }

    pub fn product_url(&self, id: &str) -> String {
        format!("{}/api/{}/admin/product/{id}", self.base, self.path)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/{}/admin/upload", self.base, self.path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

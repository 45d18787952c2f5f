//! REST calls against the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since the
//! backend is only ever reached from the browser.
//!
//! DESIGN
//! ======
//! The bearer token is an explicit argument of every authenticated call.
//! Nothing is stored on a shared client, so there is no default header to
//! forget to set or to leak between sessions. The backend expects the raw
//! token in `Authorization`, without a `Bearer ` prefix.
//!
//! `AuthApi` and `CatalogApi` are the seams the session gate and the product
//! list are written against; tests drive them with in-memory fakes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{Ack, ProductListResponse};
use super::types::{Product, ProductPage, SigninRequest, SigninResponse};
#[cfg(feature = "hydrate")]
use super::types::{ProductEnvelope, UploadResponse};
use crate::config::ApiConfig;

pub const AUTHORIZATION: &str = "Authorization";
pub const UPLOAD_FIELD: &str = "file-to-upload";

/// Sign-in and token verification.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a token and its expiry.
    async fn sign_in(&self, request: &SigninRequest) -> Result<SigninResponse, ApiError>;

    /// Ask the backend whether `token` is still accepted.
    async fn check(&self, token: &str) -> Result<(), ApiError>;
}

/// Admin product endpoints.
#[async_trait(?Send)]
pub trait CatalogApi {
    async fn list_products(&self, token: &str, page: u32) -> Result<ProductPage, ApiError>;
    async fn create_product(&self, token: &str, product: &Product) -> Result<(), ApiError>;
    async fn update_product(&self, token: &str, id: &str, product: &Product) -> Result<(), ApiError>;
    async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError>;
}

/// Image upload. The file type is whatever the platform hands out for a
/// picked file (`web_sys::File` in the browser).
#[async_trait(?Send)]
pub trait ImageUpload {
    type File;

    /// Upload `file` and return the hosted URL.
    async fn upload_image(&self, token: &str, file: &Self::File) -> Result<String, ApiError>;
}

/// `gloo-net` implementation of the API seams.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Turn a `{success, message}` body into a result.
#[cfg(any(test, feature = "hydrate"))]
fn ensure_success(operation: &'static str, ack: Ack) -> Result<(), ApiError> {
    if ack.success {
        Ok(())
    } else {
        Err(ApiError::Rejected { operation, message: ack.message })
    }
}

/// Reject a sign-in body that carries no usable token.
#[cfg(any(test, feature = "hydrate"))]
fn ensure_signed_in(body: SigninResponse) -> Result<SigninResponse, ApiError> {
    if !body.success {
        return Err(ApiError::Rejected { operation: "sign in", message: body.message });
    }
    if body.token.is_empty() {
        return Err(ApiError::Decode("sign in response has no token".to_owned()));
    }
    Ok(body)
}

/// Turn a list body into a page, rejecting `success: false` and bodies
/// missing either half of the page.
#[cfg(any(test, feature = "hydrate"))]
fn ensure_listed(body: ProductListResponse) -> Result<ProductPage, ApiError> {
    if !body.success {
        return Err(ApiError::Rejected { operation: "list products", message: body.message });
    }
    match (body.products, body.pagination) {
        (Some(products), Some(pagination)) => Ok(ProductPage { products, pagination }),
        (None, _) => Err(ApiError::Decode("product list response has no products".to_owned())),
        (_, None) => Err(ApiError::Decode("product list response has no pagination".to_owned())),
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status { operation, status: resp.status() });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for HttpBackend {
    async fn sign_in(&self, request: &SigninRequest) -> Result<SigninResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.signin_url())
                .json(request)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body: SigninResponse = decode("sign in", resp).await?;
            ensure_signed_in(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn check(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.user_check_url())
                .header(AUTHORIZATION, token)
                .send()
                .await
                .map_err(transport)?;
            let ack: Ack = decode("token check", resp).await?;
            ensure_success("token check", ack)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpBackend {
    async fn list_products(&self, token: &str, page: u32) -> Result<ProductPage, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.products_url(page))
                .header(AUTHORIZATION, token)
                .send()
                .await
                .map_err(transport)?;
            let body: ProductListResponse = decode("list products", resp).await?;
            ensure_listed(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, page);
            Err(ApiError::Unavailable)
        }
    }

    async fn create_product(&self, token: &str, product: &Product) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.product_create_url())
                .header(AUTHORIZATION, token)
                .json(&ProductEnvelope { data: product })
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let ack: Ack = decode("create product", resp).await?;
            ensure_success("create product", ack)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, product);
            Err(ApiError::Unavailable)
        }
    }

    async fn update_product(&self, token: &str, id: &str, product: &Product) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.config.product_url(id))
                .header(AUTHORIZATION, token)
                .json(&ProductEnvelope { data: product })
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let ack: Ack = decode("update product", resp).await?;
            ensure_success("update product", ack)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id, product);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.config.product_url(id))
                .header(AUTHORIZATION, token)
                .send()
                .await
                .map_err(transport)?;
            let ack: Ack = decode("delete product", resp).await?;
            ensure_success("delete product", ack)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl ImageUpload for HttpBackend {
    type File = web_sys::File;

    async fn upload_image(&self, token: &str, file: &web_sys::File) -> Result<String, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        let resp = gloo_net::http::Request::post(&self.config.upload_url())
            .header(AUTHORIZATION, token)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let body: UploadResponse = decode("upload image", resp).await?;
        Ok(body.image_url)
    }
}

//! Wire DTOs for the catalog backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend exactly, which mixes `snake_case`
//! (`origin_price`, `is_enabled`) with `camelCase` (`imageUrl`, `imagesUrl`).
//! Decoding is lenient about numeric encodings because the backend stores
//! whatever the last writer sent: prices may arrive as numbers or numeric
//! strings and `is_enabled` as a bool or `0`/`1`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product as exchanged with the admin endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Backend-assigned identifier; empty for a product not yet created.
    pub id: String,
    pub title: String,
    pub category: String,
    /// List price shown struck through next to the sale price.
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub origin_price: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub price: f64,
    pub unit: String,
    pub description: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_lenient_bool")]
    pub is_enabled: bool,
    /// Primary image.
    #[serde(rename = "imageUrl", deserialize_with = "deserialize_nullable_string")]
    pub image_url: String,
    /// Secondary images in display order.
    #[serde(rename = "imagesUrl", deserialize_with = "deserialize_string_list")]
    pub images_url: Vec<String>,
}

/// Server-computed page position for the product list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total_pages: u32,
    pub current_page: u32,
    #[serde(rename = "has_pre")]
    pub has_previous: bool,
    pub has_next: bool,
    pub category: String,
}

/// One page of products as shown by the list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// `GET /api/{path}/admin/products` response body.
///
/// `products` and `pagination` stay optional so a `{success: false}` body
/// still decodes and can be reported as a rejection.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductListResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Request envelope for product create/update.
#[derive(Debug, Serialize)]
pub struct ProductEnvelope<'a> {
    pub data: &'a Product,
}

/// `POST /admin/signin` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

/// `POST /admin/signin` response body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SigninResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: String,
    /// Token expiry in milliseconds since the Unix epoch.
    #[serde(default, alias = "expiredAt", deserialize_with = "deserialize_lenient_i64")]
    pub expired: i64,
}

/// Generic `{success, message}` acknowledgement used by check and mutation endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

/// `POST /api/{path}/admin/upload` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

fn default_success() -> bool {
    true
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) if raw.trim().is_empty() => Ok(0.0),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        _ => Err(D::Error::custom("expected bool or 0/1")),
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

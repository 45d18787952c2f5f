//! In-memory fakes for the API seams and a capturing logger.

use std::cell::{Cell, RefCell};
use std::sync::{Mutex, Once};

use async_trait::async_trait;

use crate::net::api::{AuthApi, CatalogApi, ImageUpload};
use crate::net::error::ApiError;
use crate::net::types::{Pagination, Product, ProductPage, SigninRequest, SigninResponse};
use crate::util::cookie::TokenStore;

// =============================================================================
// LOG CAPTURE
// =============================================================================

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { lines: Mutex::new(Vec::new()) };
static INSTALL: Once = Once::new();

/// Route `log` records into an in-memory buffer shared by all tests.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Whether any captured line contains `needle`.
pub fn logged(needle: &str) -> bool {
    LOGGER.lines.lock().unwrap().iter().any(|line| line.contains(needle))
}

// =============================================================================
// TOKEN STORE
// =============================================================================

#[derive(Default)]
pub struct MemoryTokens {
    pub token: RefCell<Option<String>>,
    pub expires_ms: Cell<Option<i64>>,
}

impl MemoryTokens {
    pub fn holding(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())), expires_ms: Cell::new(None) }
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str, expires_ms: i64) {
        *self.token.borrow_mut() = Some(token.to_owned());
        self.expires_ms.set(Some(expires_ms));
    }
}

// =============================================================================
// AUTH
// =============================================================================

pub struct FakeAuth {
    pub check_result: Result<(), ApiError>,
    pub sign_in_result: Result<SigninResponse, ApiError>,
    pub checked_tokens: RefCell<Vec<String>>,
}

impl FakeAuth {
    pub fn accepting() -> Self {
        Self {
            check_result: Ok(()),
            sign_in_result: Ok(SigninResponse {
                success: true,
                message: String::new(),
                token: "fresh-token".to_owned(),
                expired: 1_700_000_000_000,
            }),
            checked_tokens: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting(err: ApiError) -> Self {
        Self { check_result: Err(err.clone()), sign_in_result: Err(err), ..Self::accepting() }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuth {
    async fn sign_in(&self, _request: &SigninRequest) -> Result<SigninResponse, ApiError> {
        self.sign_in_result.clone()
    }

    async fn check(&self, token: &str) -> Result<(), ApiError> {
        self.checked_tokens.borrow_mut().push(token.to_owned());
        self.check_result.clone()
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Records every call as `"<verb> <arg>"` and answers from canned results.
pub struct FakeCatalog {
    pub calls: RefCell<Vec<String>>,
    pub tokens: RefCell<Vec<String>>,
    pub list_result: RefCell<Result<ProductPage, ApiError>>,
    pub mutation_result: Result<(), ApiError>,
    pub upload_result: Result<String, ApiError>,
    pub sent: RefCell<Vec<Product>>,
}

impl FakeCatalog {
    pub fn serving(page: ProductPage) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            tokens: RefCell::new(Vec::new()),
            list_result: RefCell::new(Ok(page)),
            mutation_result: Ok(()),
            upload_result: Ok("https://img.test/uploaded.png".to_owned()),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, token: &str, call: String) {
        self.tokens.borrow_mut().push(token.to_owned());
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl CatalogApi for FakeCatalog {
    async fn list_products(&self, token: &str, page: u32) -> Result<ProductPage, ApiError> {
        self.record(token, format!("list {page}"));
        self.list_result.borrow().clone()
    }

    async fn create_product(&self, token: &str, product: &Product) -> Result<(), ApiError> {
        self.record(token, format!("create {}", product.title));
        self.sent.borrow_mut().push(product.clone());
        self.mutation_result.clone()
    }

    async fn update_product(&self, token: &str, id: &str, product: &Product) -> Result<(), ApiError> {
        self.record(token, format!("update {id}"));
        self.sent.borrow_mut().push(product.clone());
        self.mutation_result.clone()
    }

    async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.record(token, format!("delete {id}"));
        self.mutation_result.clone()
    }
}

#[async_trait(?Send)]
impl ImageUpload for FakeCatalog {
    type File = String;

    async fn upload_image(&self, token: &str, file: &String) -> Result<String, ApiError> {
        self.record(token, format!("upload {file}"));
        self.upload_result.clone()
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

pub fn product(id: &str, title: &str) -> Product {
    Product {
        id: id.to_owned(),
        title: title.to_owned(),
        category: "tea".to_owned(),
        origin_price: 200.0,
        price: 150.0,
        unit: "box".to_owned(),
        description: "desc".to_owned(),
        content: "content".to_owned(),
        is_enabled: true,
        image_url: format!("https://img.test/{id}.png"),
        images_url: vec!["a".to_owned(), "b".to_owned()],
    }
}

pub fn page_of(products: Vec<Product>, current_page: u32, total_pages: u32) -> ProductPage {
    ProductPage {
        products,
        pagination: Pagination {
            total_pages,
            current_page,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            category: String::new(),
        },
    }
}

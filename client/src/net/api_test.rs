use super::*;
use futures::executor::block_on;

#[test]
fn ensure_success_passes_successful_ack() {
    let ack = Ack { success: true, message: String::new() };
    assert_eq!(ensure_success("delete product", ack), Ok(()));
}

#[test]
fn ensure_success_maps_rejection_with_message() {
    let ack = Ack { success: false, message: "not found".to_owned() };
    let err = ensure_success("delete product", ack).unwrap_err();
    assert_eq!(err, ApiError::Rejected { operation: "delete product", message: "not found".to_owned() });
    assert_eq!(err.to_string(), "delete product rejected: not found");
}

#[test]
fn ensure_signed_in_requires_success_flag() {
    let body = SigninResponse {
        success: false,
        message: "bad password".to_owned(),
        token: String::new(),
        expired: 0,
    };
    assert!(matches!(ensure_signed_in(body), Err(ApiError::Rejected { operation: "sign in", .. })));
}

#[test]
fn ensure_signed_in_requires_token() {
    let body = SigninResponse { success: true, message: String::new(), token: String::new(), expired: 1 };
    assert!(matches!(ensure_signed_in(body), Err(ApiError::Decode(_))));
}

#[test]
fn ensure_signed_in_passes_token_through() {
    let body = SigninResponse { success: true, message: String::new(), token: "tok".to_owned(), expired: 9 };
    let body = ensure_signed_in(body).unwrap();
    assert_eq!(body.token, "tok");
    assert_eq!(body.expired, 9);
}

fn list_body(raw: serde_json::Value) -> ProductListResponse {
    serde_json::from_value(raw).unwrap()
}

#[test]
fn ensure_listed_builds_page_from_full_body() {
    let body = list_body(serde_json::json!({
        "success": true,
        "products": [{ "id": "p1", "title": "One" }],
        "pagination": { "total_pages": 1, "current_page": 1, "has_pre": false, "has_next": false }
    }));

    let page = ensure_listed(body).unwrap();

    assert_eq!(page.products.len(), 1);
    assert_eq!(page.pagination.current_page, 1);
}

#[test]
fn ensure_listed_maps_rejection_with_message() {
    let body = list_body(serde_json::json!({ "success": false, "message": "token invalid" }));

    assert_eq!(
        ensure_listed(body),
        Err(ApiError::Rejected { operation: "list products", message: "token invalid".to_owned() })
    );
}

#[test]
fn ensure_listed_rejects_empty_body() {
    let err = ensure_listed(list_body(serde_json::json!({}))).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    let no_pagination = list_body(serde_json::json!({ "products": [] }));
    assert!(matches!(ensure_listed(no_pagination), Err(ApiError::Decode(_))));
}

#[test]
fn rejected_list_body_leaves_snapshot_untouched() {
    use crate::state::products::ProductsState;
    use crate::test_helpers::{page_of, product};

    let mut state = ProductsState::default();
    state.apply_fetch(Ok(page_of(vec![product("p1", "One"), product("p2", "Two")], 2, 3)));
    let before = state.clone();

    let body = list_body(serde_json::json!({ "success": false, "message": "token invalid" }));
    state.apply_fetch(ensure_listed(body));

    assert_eq!(state, before);
}

#[test]
fn status_error_formats_operation_and_code() {
    let err = ApiError::Status { operation: "list products", status: 401 };
    assert_eq!(err.to_string(), "list products failed: 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_is_unavailable_outside_browser() {
    let backend = HttpBackend::new(ApiConfig::new("https://api.test", "shop"));
    assert_eq!(block_on(backend.check("tok")), Err(ApiError::Unavailable));
    assert_eq!(block_on(backend.list_products("tok", 1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(backend.delete_product("tok", "p1")), Err(ApiError::Unavailable));
}

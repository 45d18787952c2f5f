use super::*;

// =============================================================
// Product decoding
// =============================================================

#[test]
fn product_decodes_mixed_case_wire_names() {
    let raw = serde_json::json!({
        "id": "-Nabc",
        "title": "Green tea",
        "category": "drinks",
        "origin_price": 120,
        "price": 99,
        "unit": "cup",
        "description": "loose leaf",
        "content": "350ml",
        "is_enabled": 1,
        "imageUrl": "https://img.test/main.jpg",
        "imagesUrl": ["https://img.test/1.jpg", "https://img.test/2.jpg"]
    });

    let product: Product = serde_json::from_value(raw).unwrap();
    assert_eq!(product.id, "-Nabc");
    assert!((product.origin_price - 120.0).abs() < f64::EPSILON);
    assert!((product.price - 99.0).abs() < f64::EPSILON);
    assert!(product.is_enabled);
    assert_eq!(product.image_url, "https://img.test/main.jpg");
    assert_eq!(product.images_url.len(), 2);
}

#[test]
fn product_tolerates_missing_and_null_fields() {
    let raw = serde_json::json!({
        "id": "p1",
        "title": "Bare",
        "imageUrl": null,
        "imagesUrl": null,
        "is_enabled": 0
    });

    let product: Product = serde_json::from_value(raw).unwrap();
    assert_eq!(product.title, "Bare");
    assert!(product.image_url.is_empty());
    assert!(product.images_url.is_empty());
    assert!(!product.is_enabled);
    assert!(product.price.abs() < f64::EPSILON);
}

#[test]
fn product_accepts_numeric_string_prices() {
    let raw = serde_json::json!({ "origin_price": "300", "price": "" });
    let product: Product = serde_json::from_value(raw).unwrap();
    assert!((product.origin_price - 300.0).abs() < f64::EPSILON);
    assert!(product.price.abs() < f64::EPSILON);
}

#[test]
fn product_rejects_non_numeric_price_string() {
    let raw = serde_json::json!({ "price": "cheap" });
    assert!(serde_json::from_value::<Product>(raw).is_err());
}

#[test]
fn product_serializes_with_backend_field_names() {
    let product = Product {
        id: "p1".to_owned(),
        title: "Mug".to_owned(),
        is_enabled: true,
        image_url: "main.png".to_owned(),
        images_url: vec!["a.png".to_owned()],
        ..Product::default()
    };

    let value = serde_json::to_value(ProductEnvelope { data: &product }).unwrap();
    assert_eq!(value["data"]["imageUrl"], "main.png");
    assert_eq!(value["data"]["imagesUrl"], serde_json::json!(["a.png"]));
    assert_eq!(value["data"]["is_enabled"], true);
    assert!(value["data"].get("image_url").is_none());
}

// =============================================================
// Page + pagination
// =============================================================

#[test]
fn product_page_decodes_pagination_flags() {
    let raw = serde_json::json!({
        "success": true,
        "products": [{ "id": "p1", "title": "One" }],
        "pagination": {
            "total_pages": 3,
            "current_page": 2,
            "has_pre": true,
            "has_next": true,
            "category": ""
        },
        "messages": []
    });

    let body: ProductListResponse = serde_json::from_value(raw).unwrap();
    assert!(body.success);
    assert_eq!(body.products.map(|p| p.len()), Some(1));
    assert_eq!(
        body.pagination,
        Some(Pagination {
            total_pages: 3,
            current_page: 2,
            has_previous: true,
            has_next: true,
            category: String::new(),
        })
    );
}

#[test]
fn product_list_rejection_decodes_without_products() {
    let raw = serde_json::json!({ "success": false, "message": "token invalid" });

    let body: ProductListResponse = serde_json::from_value(raw).unwrap();

    assert!(!body.success);
    assert_eq!(body.message, "token invalid");
    assert_eq!(body.products, None);
    assert_eq!(body.pagination, None);
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn signin_response_reads_expired_millis() {
    let raw = serde_json::json!({
        "success": true,
        "message": "ok",
        "uid": "u1",
        "token": "tok",
        "expired": 1_700_000_000_000_i64
    });
    let body: SigninResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(body.token, "tok");
    assert_eq!(body.expired, 1_700_000_000_000);
}

#[test]
fn signin_response_accepts_expired_at_alias() {
    let raw = serde_json::json!({ "token": "tok", "expiredAt": 42 });
    let body: SigninResponse = serde_json::from_value(raw).unwrap();
    assert!(body.success);
    assert_eq!(body.expired, 42);
}

#[test]
fn ack_defaults_to_unsuccessful() {
    let ack: Ack = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(!ack.success);
}

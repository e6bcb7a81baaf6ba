//! HTTP-level integration tests for the `/forms` API endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /api/v1/forms lists every schema
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_schemas() {
    let response = get(build_test_app(), "/api/v1/forms").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    let names: Vec<_> = data.iter().filter_map(|s| s["name"].as_str()).collect();
    assert_eq!(
        names,
        [
            "sign_up",
            "sign_in",
            "otp_sign_in",
            "bulk_order",
            "checkout",
            "track_order",
            "customer_intake"
        ]
    );
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/forms/{schema} describes field rules
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_schema() {
    let response = get(build_test_app(), "/api/v1/forms/sign_up").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let fields = json["data"]["fields"].as_array().unwrap();
    assert_eq!(fields[0]["field"], "username");
    assert_eq!(fields[0]["required"], true);
    assert_eq!(fields[0]["min_length"], 3);
    assert_eq!(fields[1]["pattern"], r"[6-9]\d{9}");
    assert_eq!(fields[3]["has_custom"], true);
}

#[tokio::test]
async fn test_get_unknown_schema_returns_404() {
    let response = get(build_test_app(), "/api/v1/forms/newsletter").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/forms/{schema}/validate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_validate_valid_sign_up() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/sign_up/validate",
        json!({
            "username": "validuser",
            "phone_number": "9876543210",
            "password": "secret1",
            "confirmPassword": "secret1"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], json!({"is_valid": true, "errors": {}}));
}

#[tokio::test]
async fn test_validate_invalid_sign_up_still_returns_200() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/sign_up/validate",
        json!({
            "username": "ab",
            "phone_number": "9876543210",
            "password": "secret1",
            "confirmPassword": "different"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_valid"], false);
    assert_eq!(
        json["data"]["errors"],
        json!({
            "confirmPassword": "Passwords do not match",
            "username": "Username must be at least 3 characters long"
        })
    );
}

#[tokio::test]
async fn test_validate_track_order() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/track_order/validate",
        json!({"orderId": "ab"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"]["errors"]["orderId"],
        "Please enter a valid Order ID"
    );
}

#[tokio::test]
async fn test_validate_unknown_schema_returns_404() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/newsletter/validate",
        json!({"email": "a@b.co"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_rejects_non_object_body() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/sign_in/validate",
        json!(["not", "a", "record"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_validate_rejects_oversized_record() {
    // The test config accepts at most 8 fields.
    let record: serde_json::Map<String, serde_json::Value> = (0..9)
        .map(|i| (format!("field_{i}"), json!("x")))
        .collect();

    let response = post_json(
        build_test_app(),
        "/api/v1/forms/customer_intake/validate",
        serde_json::Value::Object(record),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/forms/{schema}/submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_submit_valid_record_returns_202_with_declared_fields() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/track_order/submit",
        json!({"orderId": "ORD-1042", "utm_source": "newsletter"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let json = body_json(response).await;
    assert_eq!(json["data"], json!({"orderId": "ORD-1042"}));
}

#[tokio::test]
async fn test_submit_invalid_record_is_rejected() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/sign_up/submit",
        json!({
            "username": "ab",
            "phone_number": "9876543210",
            "password": "secret1",
            "confirmPassword": "different"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "confirmPassword: Passwords do not match; \
         username: Username must be at least 3 characters long"
    );
}

#[tokio::test]
async fn test_submit_unknown_schema_returns_404() {
    let response = post_json(
        build_test_app(),
        "/api/v1/forms/newsletter/submit",
        json!({"email": "a@b.co"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

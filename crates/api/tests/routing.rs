//! HTTP behaviour that does not need a live database.
//!
//! The router is built over a pool pointing at a closed port, so anything
//! decided before the first query (routing, extraction, middleware) can be
//! checked, and anything after it hits the 500 path.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json, put, put_json, unreachable_pool};
use tower::ServiceExt;

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_returns_405() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/create-property").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/this-route-does-not-exist").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = common::build_test_app(unreachable_pool());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/change-price")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");
}

#[tokio::test]
async fn health_reports_unreachable_database_as_503() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["service"], "estate-api");
    assert_eq!(json["status"], "database_unreachable");
    assert!(json["databaseLatencyMs"].is_null());
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn openapi_document_lists_every_endpoint() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let paths = json["paths"].as_object().unwrap();
    for path in [
        "/create-property",
        "/add-image",
        "/change-price",
        "/update-property",
        "/list-properties",
        "/health",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(paths["/change-price"].get("put").is_some());
    assert!(paths["/list-properties"].get("get").is_some());
}

#[tokio::test]
async fn docs_page_is_served() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/docs").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn change_price_without_new_price_is_rejected() {
    let app = common::build_test_app(unreachable_pool());
    let response = put(app, "/change-price?propertyId=1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_price_filter_is_rejected() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/list-properties?minPrice=cheap&maxPrice=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_image_requires_property_id() {
    let app = common::build_test_app(unreachable_pool());
    let response = post_json(app, "/add-image", serde_json::json!({ "filed": "aW1n" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_with_unreachable_database_returns_500_envelope() {
    let app = common::build_test_app(unreachable_pool());
    let response = get(app, "/list-properties?codeInternal=C1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "An error occurred while showing the property");
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn update_with_unreachable_database_returns_500_envelope() {
    let app = common::build_test_app(unreachable_pool());
    let response = put_json(
        app,
        "/update-property?propertyId=1",
        serde_json::json!({ "name": "Villa" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "An error occurred while updating the property");
}

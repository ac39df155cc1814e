//! OpenAPI document for the listing endpoints.
//!
//! Served as JSON at [`OPENAPI_JSON_PATH`] with an interactive Scalar
//! reference at [`DOCS_PATH`].

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::handlers::property;
use crate::routes::health;
use crate::state::AppState;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(title = "Real-estate listing API"),
    paths(
        property::create_property,
        property::add_image,
        property::change_price,
        property::update_property,
        property::list_properties,
        health::service_report,
    ),
    tags(
        (name = "property", description = "Create, update and list properties"),
        (name = "health", description = "Service liveness"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url(DOCS_PATH, ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_fields_are_documented_as_numbers() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let property = &doc["components"]["schemas"]["Property"]["properties"];
        assert_eq!(property["price"]["type"], "number");
    }
}

//! Liveness endpoint for load balancers and deploy scripts.
//!
//! A listing service that cannot reach PostgreSQL cannot answer any listing
//! request, so a failed `SELECT 1` turns the whole report into a 503.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Serving,
    DatabaseUnreachable,
}

/// `{ service, version, status, databaseLatencyMs }`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReport {
    #[schema(value_type = String)]
    pub service: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
    pub status: ListingStatus,
    /// Round trip of the `SELECT 1` check. Absent when it failed.
    pub database_latency_ms: Option<u64>,
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = ServiceReport),
        (status = 503, description = "Database unreachable", body = ServiceReport),
    )
)]
pub async fn service_report(State(state): State<AppState>) -> (StatusCode, Json<ServiceReport>) {
    let started = Instant::now();
    let (code, status, database_latency_ms) = match estate_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            ListingStatus::Serving,
            Some(started.elapsed().as_millis() as u64),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Listing database is unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, ListingStatus::DatabaseUnreachable, None)
        }
    };

    let report = ServiceReport {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status,
        database_latency_ms,
    };
    (code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(service_report))
}

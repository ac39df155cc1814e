/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Configuration is consumed while building the router and is not kept here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: estate_db::DbPool,
}

//! Real-estate listing API server library.
//!
//! Exposes the building blocks (config, state, error handling, handlers,
//! routes, OpenAPI document) so integration tests and the binary entrypoint
//! share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

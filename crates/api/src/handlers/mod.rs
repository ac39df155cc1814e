//! Request handlers.
//!
//! Handlers check that referenced rows exist, delegate to the repositories
//! in `estate_db`, and wrap the result in a `{ message, ... }` envelope.
//! Failures map to HTTP responses via [`crate::error::AppError`].

pub mod property;

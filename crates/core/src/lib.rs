//! Shared primitives for the real-estate listing service.
//!
//! Holds the database-facing type aliases, the domain error enum, and the
//! listing filter policy. Nothing in here touches I/O.

pub mod error;
pub mod filter;
pub mod types;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the writes the API performs
//!
//! Wire names are camelCase (`idProperty`, `codeInternal`, ...).

pub mod encoding;
pub mod owner;
pub mod property;
pub mod property_filter;
pub mod property_image;
pub mod property_trace;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method issues single
//! statements; nothing here opens an explicit transaction.

pub mod owner_repo;
pub mod property_image_repo;
pub mod property_repo;
pub mod property_trace_repo;

pub use owner_repo::OwnerRepo;
pub use property_image_repo::PropertyImageRepo;
pub use property_repo::PropertyRepo;
pub use property_trace_repo::PropertyTraceRepo;

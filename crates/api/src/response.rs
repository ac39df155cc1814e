//! Response envelopes for the listing endpoints.
//!
//! Every successful response is `{ "message": ..., <payload key>: ... }`.
//! One struct per payload key keeps the wire names checked at compile time.

use estate_db::models::property::{Property, PropertySummary};
use estate_db::models::property_image::PropertyImage;
use serde::Serialize;
use utoipa::ToSchema;

/// `{ message, property }`
#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
    pub property: Property,
}

/// `{ message, propertyImage }`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImageResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
    pub property_image: PropertyImage,
}

/// `{ message, properties }`
#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyListResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
    pub properties: Vec<PropertySummary>,
}

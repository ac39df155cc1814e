//! PropertyImage entity model and DTOs.

use estate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::encoding::base64_bytes;

/// A row from the `property_image` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    #[schema(value_type = i64)]
    pub id_property_image: DbId,
    #[schema(value_type = i64)]
    pub id_property: DbId,
    #[serde(with = "base64_bytes")]
    #[schema(value_type = String, format = Byte)]
    pub filed: Vec<u8>,
    pub enabled: bool,
}

/// DTO for attaching an image.
///
/// The target property comes from the query string and new images are
/// always enabled, so the only accepted field is the payload. Any `enabled`
/// value in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePropertyImage {
    #[serde(with = "base64_bytes")]
    #[schema(value_type = String, format = Byte)]
    pub filed: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_supplied_enabled_flag_is_ignored() {
        let input: CreatePropertyImage =
            serde_json::from_str(r#"{"filed":"aW1n","enabled":false}"#).unwrap();
        assert_eq!(input.filed, b"img");
    }
}

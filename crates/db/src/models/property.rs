//! Property entity model and DTOs.
//!
//! Amounts are written to JSON as numbers, not strings, via
//! `bigdecimal::serde::json_num`.

use estate_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::property_trace::TraceSummary;

/// A row from the `property` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[schema(value_type = i64)]
    pub id_property: DbId,
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub price: Money,
    pub code_internal: Option<String>,
    pub year: i32,
    #[schema(value_type = i64)]
    pub id_owner: DbId,
}

/// DTO for creating a property.
///
/// Every field is optional on the wire. Missing text fields are stored as
/// NULL, a missing price or year as zero, and a missing `idOwner` as 0
/// (which never matches an owner).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub price: Money,
    pub code_internal: Option<String>,
    pub year: i32,
    #[schema(value_type = i64)]
    pub id_owner: DbId,
}

/// DTO for replacing a property's mutable fields.
///
/// Not a patch: all five columns are overwritten with whatever the input
/// carries, defaults included. The owner is never reassigned.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub price: Money,
    pub code_internal: Option<String>,
    pub year: i32,
}

/// Listing projection: the public fields of a property plus its sale history.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub price: Money,
    pub code_internal: Option<String>,
    pub year: i32,
    pub traces: Vec<TraceSummary>,
}

impl PropertySummary {
    pub fn new(property: Property, traces: Vec<TraceSummary>) -> Self {
        Self {
            name: property.name,
            address: property.address,
            price: property.price,
            code_internal: property.code_internal,
            year: property.year,
            traces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loft(price: &str) -> Property {
        Property {
            id_property: 9,
            name: Some("Loft".into()),
            address: None,
            price: price.parse().unwrap(),
            code_internal: Some("L9".into()),
            year: 1999,
            id_owner: 3,
        }
    }

    #[test]
    fn create_dto_reads_camel_case() {
        let input: CreateProperty = serde_json::from_value(serde_json::json!({
            "name": "Villa",
            "address": "1 Main St",
            "price": 100000,
            "codeInternal": "C1",
            "year": 2020,
            "idOwner": 1
        }))
        .unwrap();

        assert_eq!(input.name.as_deref(), Some("Villa"));
        assert_eq!(input.code_internal.as_deref(), Some("C1"));
        assert_eq!(input.price, Money::from(100000));
        assert_eq!(input.year, 2020);
        assert_eq!(input.id_owner, 1);
    }

    #[test]
    fn fractional_price_is_read_exactly() {
        let input: CreateProperty =
            serde_json::from_str(r#"{"price": 1234.56, "idOwner": 1}"#).unwrap();
        assert_eq!(input.price, "1234.56".parse::<Money>().unwrap());
    }

    #[test]
    fn update_dto_defaults_missing_fields() {
        let input: UpdateProperty =
            serde_json::from_value(serde_json::json!({ "name": "Only name" })).unwrap();

        assert_eq!(input.name.as_deref(), Some("Only name"));
        assert_eq!(input.address, None);
        assert_eq!(input.code_internal, None);
        assert_eq!(input.price, Money::from(0));
        assert_eq!(input.year, 0);
    }

    #[test]
    fn price_is_written_as_a_json_number() {
        let json = serde_json::to_value(loft("120000")).unwrap();
        assert!(json["price"].is_number());
        assert_eq!(json["price"], 120000);

        let text = serde_json::to_string(&loft("1234.56")).unwrap();
        assert!(text.contains(r#""price":1234.56"#), "got {text}");
    }

    #[test]
    fn summary_drops_identifiers() {
        let json =
            serde_json::to_value(PropertySummary::new(loft("5"), Vec::new())).unwrap();

        assert!(json.get("idProperty").is_none());
        assert!(json.get("idOwner").is_none());
        assert_eq!(json["codeInternal"], "L9");
        assert_eq!(json["price"], 5);
        assert!(json["traces"].as_array().unwrap().is_empty());
    }
}

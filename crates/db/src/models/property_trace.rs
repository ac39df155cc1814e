//! PropertyTrace entity model and DTOs.
//!
//! Traces are the sale/valuation history of a property. They are removed
//! together with their property (`ON DELETE CASCADE`).

use estate_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `property_trace` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTrace {
    #[schema(value_type = i64)]
    pub id_property_trace: DbId,
    #[schema(value_type = String, format = DateTime)]
    pub date_sale: Timestamp,
    pub name: Option<String>,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub value: Money,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub tax: Money,
    #[schema(value_type = i64)]
    pub id_property: DbId,
}

/// DTO for recording a trace against a property.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyTrace {
    pub date_sale: Timestamp,
    pub name: Option<String>,
    #[serde(with = "bigdecimal::serde::json_num")]
    pub value: Money,
    #[serde(with = "bigdecimal::serde::json_num")]
    pub tax: Money,
}

/// The slice of a trace shown in property listings.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TraceSummary {
    #[schema(value_type = String, format = DateTime)]
    pub date_sale: Timestamp,
    pub name: Option<String>,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub value: Money,
    #[serde(with = "bigdecimal::serde::json_num")]
    #[schema(value_type = f64)]
    pub tax: Money,
}

impl From<PropertyTrace> for TraceSummary {
    fn from(trace: PropertyTrace) -> Self {
        Self {
            date_sale: trace.date_sale,
            name: trace.name,
            value: trace.value,
            tax: trace.tax,
        }
    }
}

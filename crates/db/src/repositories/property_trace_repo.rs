//! Repository for the `property_trace` table.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::property_trace::{CreatePropertyTrace, PropertyTrace};

const COLUMNS: &str = "id_property_trace, date_sale, name, value, tax, id_property";

pub struct PropertyTraceRepo;

impl PropertyTraceRepo {
    /// Record a sale/valuation against a property.
    pub async fn create(
        pool: &PgPool,
        property_id: DbId,
        input: &CreatePropertyTrace,
    ) -> Result<PropertyTrace, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_trace (date_sale, name, value, tax, id_property)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyTrace>(&query)
            .bind(input.date_sale)
            .bind(&input.name)
            .bind(&input.value)
            .bind(&input.tax)
            .bind(property_id)
            .fetch_one(pool)
            .await
    }

    /// Traces belonging to any of `property_ids`, oldest sale first.
    pub async fn list_by_properties(
        pool: &PgPool,
        property_ids: &[DbId],
    ) -> Result<Vec<PropertyTrace>, sqlx::Error> {
        if property_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM property_trace
             WHERE id_property = ANY($1)
             ORDER BY id_property, date_sale, id_property_trace"
        );
        sqlx::query_as::<_, PropertyTrace>(&query)
            .bind(property_ids)
            .fetch_all(pool)
            .await
    }
}

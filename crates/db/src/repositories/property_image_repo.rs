//! Repository for the `property_image` table.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::property_image::{CreatePropertyImage, PropertyImage};

const COLUMNS: &str = "id_property_image, id_property, filed, enabled";

pub struct PropertyImageRepo;

impl PropertyImageRepo {
    /// Attach an image to a property. New images are always enabled.
    pub async fn create(
        pool: &PgPool,
        property_id: DbId,
        input: &CreatePropertyImage,
    ) -> Result<PropertyImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO property_image (id_property, filed, enabled)
             VALUES ($1, $2, TRUE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_id)
            .bind(&input.filed)
            .fetch_one(pool)
            .await
    }

    /// All images of a property in insertion order.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<PropertyImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM property_image
             WHERE id_property = $1
             ORDER BY id_property_image"
        );
        sqlx::query_as::<_, PropertyImage>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }
}

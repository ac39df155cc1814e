//! Repository for the `owner` table.

use estate_core::types::DbId;
use sqlx::PgPool;

use crate::models::owner::{CreateOwner, Owner};

const COLUMNS: &str = "id_owner, name, address, photo, birthday";

/// Lookup and seeding for owners.
pub struct OwnerRepo;

impl OwnerRepo {
    /// Insert a new owner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOwner) -> Result<Owner, sqlx::Error> {
        let query = format!(
            "INSERT INTO owner (name, address, photo, birthday)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.photo)
            .bind(input.birthday)
            .fetch_one(pool)
            .await
    }

    /// Find an owner by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owner WHERE id_owner = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

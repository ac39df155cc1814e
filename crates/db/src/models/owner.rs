//! Owner entity model and DTOs.
//!
//! Owners are never created over HTTP. [`CreateOwner`] exists for seeding.

use chrono::NaiveDate;
use estate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::encoding::base64_bytes_opt;

/// A row from the `owner` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id_owner: DbId,
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(with = "base64_bytes_opt")]
    pub photo: Option<Vec<u8>>,
    pub birthday: NaiveDate,
}

/// DTO for seeding an owner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOwner {
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(with = "base64_bytes_opt", default)]
    pub photo: Option<Vec<u8>>,
    pub birthday: NaiveDate,
}

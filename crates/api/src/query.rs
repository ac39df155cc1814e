//! Query-string parameter types.
//!
//! The listing filter lives in `estate_db::models::property_filter` since
//! the repository consumes it directly.

use estate_core::types::{DbId, Money};
use serde::Deserialize;
use utoipa::IntoParams;

/// `?propertyId=`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PropertyIdParams {
    #[param(value_type = i64)]
    pub property_id: DbId,
}

/// `?propertyId=&newPrice=`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ChangePriceParams {
    #[param(value_type = i64)]
    pub property_id: DbId,
    /// Stored as given: no sign or difference checks.
    #[param(value_type = f64)]
    pub new_price: Money,
}

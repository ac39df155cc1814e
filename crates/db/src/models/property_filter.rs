//! Listing filter input.
//!
//! Not a table. Deserialized from the `list-properties` query string and
//! turned into a `WHERE` clause by the property repository.

use estate_core::filter::{non_empty, PriceRange};
use estate_core::types::Money;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PropertyFilter {
    pub name: Option<String>,
    /// Lower price bound. Ignored unless `maxPrice` is also given.
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Money>,
    /// Upper price bound. Ignored unless `minPrice` is also given.
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Money>,
    pub code_internal: Option<String>,
}

impl PropertyFilter {
    /// Substring the property name must contain, if any.
    pub fn name_fragment(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    /// Price window, present only when both bounds were given.
    pub fn price_range(&self) -> Option<PriceRange<'_>> {
        PriceRange::from_bounds(self.min_price.as_ref(), self.max_price.as_ref())
    }

    /// Exact internal code to match, if any.
    pub fn code_internal(&self) -> Option<&str> {
        non_empty(self.code_internal.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.name_fragment().is_none()
            && self.price_range().is_none()
            && self.code_internal().is_none()
    }
}

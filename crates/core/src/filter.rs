//! Listing filter policy.
//!
//! Decides which of the optional listing inputs actually narrow the result
//! set. The SQL that applies them lives in the repository layer; the rules
//! about *when* a filter is active live here so they can be tested without a
//! database.

use crate::types::Money;

/// An inclusive price window. Only exists when both bounds were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRange<'a> {
    pub min: &'a Money,
    pub max: &'a Money,
}

impl<'a> PriceRange<'a> {
    /// Build a range from optional bounds.
    ///
    /// A single bound on its own applies no price filtering at all: both
    /// `min` and `max` must be present. An inverted window (`min > max`) is
    /// still returned and simply matches nothing.
    pub fn from_bounds(min: Option<&'a Money>, max: Option<&'a Money>) -> Option<Self> {
        match (min, max) {
            (Some(min), Some(max)) => Some(Self { min, max }),
            _ => None,
        }
    }
}

/// Treat `None` and the empty string the same way: no filter.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! Repository for the `property` table.

use std::collections::HashMap;

use estate_core::types::{DbId, Money};
use sqlx::PgPool;

use crate::models::property::{CreateProperty, Property, PropertySummary, UpdateProperty};
use crate::models::property_filter::PropertyFilter;
use crate::models::property_trace::TraceSummary;
use crate::repositories::PropertyTraceRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_property, name, address, price, code_internal, year, id_owner";

/// Provides create, update and filtered listing for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    ///
    /// The caller is expected to have checked that the owner exists; a
    /// dangling `id_owner` surfaces as a foreign-key error.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO property (name, address, price, code_internal, year, id_owner)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.price)
            .bind(&input.code_internal)
            .bind(input.year)
            .bind(input.id_owner)
            .fetch_one(pool)
            .await
    }

    /// Find a property by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM property WHERE id_property = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the price of a property.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_price(
        pool: &PgPool,
        id: DbId,
        new_price: &Money,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE property SET price = $2
             WHERE id_property = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(new_price)
            .fetch_optional(pool)
            .await
    }

    /// Replace all mutable fields of a property.
    ///
    /// Unlike a patch, `NULL`/zero values in `input` are written as-is.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE property SET
                name = $2,
                address = $3,
                price = $4,
                code_internal = $5,
                year = $6
             WHERE id_property = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.price)
            .bind(&input.code_internal)
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    /// List properties matching `filter`, ordered by id.
    pub async fn list(pool: &PgPool, filter: &PropertyFilter) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM property {where_clause} ORDER BY id_property",
            where_clause = where_clause(filter),
        );

        let mut q = sqlx::query_as::<_, Property>(&query);

        // Bind in the same order `where_clause` numbered the placeholders.
        if let Some(name) = filter.name_fragment() {
            q = q.bind(name);
        }
        if let Some(range) = filter.price_range() {
            q = q.bind(range.min).bind(range.max);
        }
        if let Some(code) = filter.code_internal() {
            q = q.bind(code);
        }

        q.fetch_all(pool).await
    }

    /// List properties matching `filter` together with their traces,
    /// projected to the listing shape.
    pub async fn list_with_traces(
        pool: &PgPool,
        filter: &PropertyFilter,
    ) -> Result<Vec<PropertySummary>, sqlx::Error> {
        let properties = Self::list(pool, filter).await?;
        let ids: Vec<DbId> = properties.iter().map(|p| p.id_property).collect();

        let mut traces: HashMap<DbId, Vec<TraceSummary>> = HashMap::new();
        for trace in PropertyTraceRepo::list_by_properties(pool, &ids).await? {
            traces
                .entry(trace.id_property)
                .or_default()
                .push(trace.into());
        }

        tracing::debug!(
            properties = properties.len(),
            traces = traces.values().map(Vec::len).sum::<usize>(),
            "Loaded property listing"
        );

        Ok(properties
            .into_iter()
            .map(|p| {
                let history = traces.remove(&p.id_property).unwrap_or_default();
                PropertySummary::new(p, history)
            })
            .collect())
    }
}

/// Build the `WHERE` clause for a listing filter.
///
/// Placeholders are numbered from `$1` in the order: name fragment, price
/// bounds, internal code. The name match uses `strpos` so `%` and `_` in the
/// fragment are literal; case sensitivity follows the column collation.
fn where_clause(filter: &PropertyFilter) -> String {
    if filter.is_empty() {
        return String::new();
    }

    let mut conditions = Vec::new();
    let mut bind_idx = 1u32;

    if filter.name_fragment().is_some() {
        conditions.push(format!("strpos(name, ${bind_idx}) > 0"));
        bind_idx += 1;
    }
    if filter.price_range().is_some() {
        conditions.push(format!(
            "price >= ${bind_idx} AND price <= ${next_idx}",
            next_idx = bind_idx + 1
        ));
        bind_idx += 2;
    }
    if filter.code_internal().is_some() {
        conditions.push(format!("code_internal = ${bind_idx}"));
    }

    format!("WHERE {}", conditions.join(" AND "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(
        name: Option<&str>,
        min: Option<i64>,
        max: Option<i64>,
        code: Option<&str>,
    ) -> PropertyFilter {
        PropertyFilter {
            name: name.map(str::to_string),
            min_price: min.map(Money::from),
            max_price: max.map(Money::from),
            code_internal: code.map(str::to_string),
        }
    }

    #[test]
    fn no_filters_no_where_clause() {
        assert_eq!(where_clause(&PropertyFilter::default()), "");
        assert_eq!(where_clause(&filter(Some(""), None, None, Some(""))), "");
    }

    #[test]
    fn single_price_bound_is_ignored() {
        assert_eq!(where_clause(&filter(None, Some(100), None, None)), "");
        assert_eq!(where_clause(&filter(None, None, Some(100), None)), "");
    }

    #[test]
    fn price_range_uses_both_bounds() {
        assert_eq!(
            where_clause(&filter(None, Some(1), Some(2), None)),
            "WHERE price >= $1 AND price <= $2"
        );
    }

    #[test]
    fn placeholders_follow_bind_order() {
        assert_eq!(
            where_clause(&filter(Some("Villa"), Some(1), Some(2), Some("C1"))),
            "WHERE strpos(name, $1) > 0 AND price >= $2 AND price <= $3 AND code_internal = $4"
        );
        assert_eq!(
            where_clause(&filter(Some("Villa"), Some(1), None, Some("C1"))),
            "WHERE strpos(name, $1) > 0 AND code_internal = $2"
        );
    }
}

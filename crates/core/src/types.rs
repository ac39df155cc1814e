/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts (prices, sale values, taxes) are stored as NUMERIC.
pub type Money = bigdecimal::BigDecimal;

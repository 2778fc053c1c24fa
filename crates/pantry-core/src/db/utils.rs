//! Column conversion helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

/// Reads an RFC 3339 timestamp column.
pub(super) fn timestamp_column(row: &Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads a JSON array of strings stored in a text column.
pub(super) fn list_column(row: &Row, index: usize) -> rusqlite::Result<Vec<String>> {
    let json: String = row.get(index)?;
    serde_json::from_str(&json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads an `INTEGER` id column as `u64`.
pub(super) fn id_column(row: &Row, index: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(index)? as u64)
}

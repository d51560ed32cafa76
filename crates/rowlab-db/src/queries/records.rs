//! Insert and lookup operations for `test_records`.
//!
//! The table is insert-only: nothing here updates or deletes rows.

use rowlab_core::{Error, RecordId, Result};
use rusqlite::Connection;

use crate::models::{NewRecord, TestRecord};

/// Column list used in SELECT statements.
const COLS: &str = "id, name, email, age, city, created_at";

/// Insert a batch of records through one prepared statement.
///
/// Does not open its own transaction: the caller decides commit
/// granularity (the seeder wraps an entire generation pass in one
/// transaction and commits once at the end).
pub fn insert_batch(conn: &Connection, records: &[NewRecord]) -> Result<usize> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO test_records (name, email, age, city) VALUES (?1, ?2, ?3, ?4)",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    for record in records {
        stmt.execute(rusqlite::params![
            record.name,
            record.email,
            record.age,
            record.city,
        ])
        .map_err(|e| Error::database(e.to_string()))?;
    }

    Ok(records.len())
}

/// Fetch up to `limit` record ids in id order.
pub fn fetch_ids(conn: &Connection, limit: u32) -> Result<Vec<RecordId>> {
    let mut stmt = conn
        .prepare("SELECT id FROM test_records ORDER BY id LIMIT ?1")
        .map_err(|e| Error::database(e.to_string()))?;
    let ids = stmt
        .query_map([limit], |row| row.get::<_, i64>(0).map(RecordId::from))
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(ids)
}

/// Look up a single record by id.
pub fn get_record(conn: &Connection, id: RecordId) -> Result<Option<TestRecord>> {
    let result = conn.query_row(
        &format!("SELECT {COLS} FROM test_records WHERE id = ?1"),
        [id.as_i64()],
        TestRecord::from_row,
    );
    match result {
        Ok(r) => Ok(Some(r)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Count all rows in the table.
pub fn count_records(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM test_records", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

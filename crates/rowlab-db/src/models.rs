//! Rust structs mapping to database tables.
//!
//! Each persisted model implements `from_row` for constructing itself from
//! a `rusqlite::Row`.

use rowlab_core::RecordId;

/// A fully persisted row of `test_records`.
#[derive(Debug, Clone)]
pub struct TestRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub city: String,
    pub created_at: String,
}

impl TestRecord {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: RecordId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            email: row.get(2)?,
            age: row.get(3)?,
            city: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

/// A record about to be inserted.  The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub city: String,
}

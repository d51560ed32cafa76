//! rowlab-db: database access and persistence layer.
//!
//! SQLite-backed storage with connection pooling, embedded migrations, a
//! typed model, and the query module the demonstration procedures run on.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;

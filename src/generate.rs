//! Bulk data generator.
//!
//! Populates `test_records` with synthetic rows, submitted in fixed-size
//! batches through one prepared statement.  The whole generation pass runs
//! inside a single transaction committed at the end.

use anyhow::{Context, Result};
use rand::Rng;
use rowlab_db::models::NewRecord;
use rowlab_db::pool::DbPool;
use rowlab_db::queries::records;
use std::time::{Duration, Instant};

/// Rows submitted per batch.  Fixed: the batch granularity is part of the
/// demonstration, not a tuning knob.
pub const BATCH_SIZE: usize = 10_000;

/// Emit a progress line every this many inserted rows.
const PROGRESS_EVERY: u64 = 100_000;

/// Length of generated names.
const NAME_LEN: usize = 10;

/// Domain suffix appended to the lowercased name to form the email.
const EMAIL_DOMAIN: &str = "@example.com";

/// The fixed city set records are drawn from.
pub const CITIES: [&str; 10] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

const ASCII_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Outcome of a seeding run.
#[derive(Debug)]
pub struct SeedReport {
    /// Rows inserted by this run.
    pub inserted: u64,
    /// Rows now in the table, including earlier runs.
    pub total: i64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Populate `test_records` with `count` synthetic rows.
///
/// When `count` is not a multiple of [`BATCH_SIZE`], the final batch
/// carries the remainder.  A count of zero inserts nothing.
pub fn run(pool: &DbPool, count: u64) -> Result<SeedReport> {
    let mut conn = rowlab_db::pool::get_conn(pool)?;
    let mut rng = rand::thread_rng();

    tracing::info!("Inserting {count} records...");
    let start = Instant::now();

    let tx = conn.transaction().context("failed to begin transaction")?;

    let mut inserted: u64 = 0;
    while inserted < count {
        let batch_len = usize::min(BATCH_SIZE, (count - inserted) as usize);
        let batch: Vec<NewRecord> = (0..batch_len).map(|_| random_record(&mut rng)).collect();

        records::insert_batch(&tx, &batch)?;
        inserted += batch_len as u64;

        if inserted % PROGRESS_EVERY == 0 {
            tracing::info!("Inserted {inserted} records...");
        }
    }

    tx.commit().context("failed to commit seed transaction")?;

    let total = records::count_records(&conn)?;

    Ok(SeedReport {
        inserted,
        total,
        elapsed: start.elapsed(),
    })
}

/// Generate one record with randomized field values.
///
/// The email is derived from the name, not drawn independently: it is the
/// lowercase form of the name plus a fixed domain.
fn random_record(rng: &mut impl Rng) -> NewRecord {
    let name: String = (0..NAME_LEN)
        .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())] as char)
        .collect();
    let email = format!("{}{EMAIL_DOMAIN}", name.to_lowercase());

    NewRecord {
        name,
        email,
        age: rng.gen_range(18..=80),
        city: CITIES[rng.gen_range(0..CITIES.len())].to_string(),
    }
}

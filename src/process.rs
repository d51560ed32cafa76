//! Slow per-record processor.
//!
//! Fetches a capped list of record ids, then issues one single-row lookup
//! per id, sequentially.  Deliberately unbatched: the cost of one query
//! per record is what this procedure exists to demonstrate.

use anyhow::Result;
use rowlab_db::pool::DbPool;
use rowlab_db::queries::records;
use std::time::{Duration, Instant};

/// Cap on how many ids a scan walks.
pub const SCAN_LIMIT: u32 = 10_000;

/// Emit a progress line every this many processed records.
const PROGRESS_EVERY: usize = 1_000;

/// Outcome of a scan run.
#[derive(Debug)]
pub struct ScanReport {
    /// Ids fetched up front.
    pub fetched: usize,
    /// Records actually found by the per-id lookups.
    pub processed: usize,
    /// Wall-clock duration of the lookup loop.
    pub elapsed: Duration,
}

/// Walk up to [`SCAN_LIMIT`] records one query at a time.
///
/// No retries, no batching, no error recovery: a failed lookup aborts the
/// run with the database error.
pub fn run(pool: &DbPool) -> Result<ScanReport> {
    let conn = rowlab_db::pool::get_conn(pool)?;

    let ids = records::fetch_ids(&conn, SCAN_LIMIT)?;
    tracing::info!("Processing {} records individually...", ids.len());

    let start = Instant::now();
    let mut processed: usize = 0;

    for id in &ids {
        if records::get_record(&conn, *id)?.is_some() {
            processed += 1;

            if processed % PROGRESS_EVERY == 0 {
                tracing::info!("Processed {processed} records...");
            }
        }
    }

    Ok(ScanReport {
        fetched: ids.len(),
        processed,
        elapsed: start.elapsed(),
    })
}

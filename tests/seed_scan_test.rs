//! Integration tests running the seed and scan procedures end to end
//! against real databases, on disk and in memory.

use rowlab::{generate, process};
use rowlab_db::pool::{get_conn, init_memory_pool, init_pool};
use rowlab_db::queries::records;
use tempfile::tempdir;

#[test]
fn seed_then_scan_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lab.db");
    let pool = init_pool(path.to_str().unwrap()).unwrap();

    let report = generate::run(&pool, 1_200).unwrap();
    assert_eq!(report.inserted, 1_200);
    assert_eq!(report.total, 1_200);

    let scan = process::run(&pool).unwrap();
    assert_eq!(scan.fetched, 1_200);
    assert_eq!(scan.processed, 1_200);
}

#[test]
fn seeded_rows_satisfy_field_invariants() {
    let pool = init_memory_pool().unwrap();
    generate::run(&pool, 500).unwrap();

    let conn = get_conn(&pool).unwrap();
    let ids = records::fetch_ids(&conn, 500).unwrap();
    assert_eq!(ids.len(), 500);

    for id in ids {
        let record = records::get_record(&conn, id).unwrap().unwrap();
        assert!(!record.name.is_empty());
        assert!((18..=80).contains(&record.age));
        assert_eq!(
            record.email,
            format!("{}@example.com", record.name.to_lowercase())
        );
        assert!(generate::CITIES.contains(&record.city.as_str()));
        assert!(!record.created_at.is_empty());
    }
}

#[test]
fn reseeding_across_runs_appends() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lab.db");

    // separate pools model separate invocations of the tool
    {
        let pool = init_pool(path.to_str().unwrap()).unwrap();
        let report = generate::run(&pool, 300).unwrap();
        assert_eq!(report.total, 300);
    }
    {
        let pool = init_pool(path.to_str().unwrap()).unwrap();
        let report = generate::run(&pool, 400).unwrap();
        assert_eq!(report.inserted, 400);
        assert_eq!(report.total, 700);
    }
}

#[test]
fn scan_never_exceeds_cap() {
    let pool = init_memory_pool().unwrap();
    generate::run(&pool, process::SCAN_LIMIT as u64 + 1_000).unwrap();

    let scan = process::run(&pool).unwrap();
    assert_eq!(scan.fetched, process::SCAN_LIMIT as usize);
    assert!(scan.processed <= scan.fetched);
}

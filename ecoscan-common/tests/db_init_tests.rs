//! Database initialization tests

use ecoscan_common::db::{init_database, ScanRecord};
use ecoscan_common::ScoreBreakdown;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("scans.db");
    assert!(!db_path.exists());

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("scans.db");

    let pool1 = init_database(&db_path).await.unwrap();
    pool1.close().await;

    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_scans_table_declared_and_empty() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("scans.db")).await.unwrap();

    let rows: Vec<ScanRecord> = sqlx::query_as("SELECT id, barcode, score, breakdown FROM scans")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_scan_record_row_shape() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("scans.db")).await.unwrap();

    sqlx::query("INSERT INTO scans (barcode, score, breakdown) VALUES (?, ?, ?)")
        .bind("012345")
        .bind(17_i64)
        .bind(r#"{"carbon":43,"water":21,"other":19}"#)
        .execute(&pool)
        .await
        .unwrap();

    let record: ScanRecord = sqlx::query_as("SELECT id, barcode, score, breakdown FROM scans")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(record.barcode, "012345");
    assert_eq!(record.score, 17);
    assert_eq!(record.breakdown.0, ScoreBreakdown::new(43, 21, 19));
}

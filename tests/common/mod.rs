#![allow(dead_code)]

use tempfile::TempDir;

use sqlx_dbops::database::{create_database, database_exists, drop_database};

pub fn sqlite_dsn(dir: &TempDir, name: &str) -> (String, String) {
    let path = dir.path().join(name).to_str().unwrap().to_string();
    (format!("sqlite://{}", path), path)
}

pub fn server_dsn(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

/// Full lifecycle against a fresh database name: absent, created,
/// present, dropped, absent again.
pub async fn create_and_drop(dsn: &str) {
    assert!(!database_exists(dsn).await.unwrap(), "database should not exist yet");
    create_database(dsn).await.unwrap();
    assert!(database_exists(dsn).await.unwrap(), "database should exist after create");
    drop_database(dsn).await.unwrap();
    assert!(!database_exists(dsn).await.unwrap(), "database should not exist after drop");
}

//! Database operations module.
//!
//! Parses connection URLs into an engine family plus database name, builds a
//! per-engine connector and dispatches the three server-level operations:
//! existence check, creation and removal.

pub mod enums;
pub mod helpers;
pub mod impls;
pub mod structs;
pub mod traits;
#[cfg(test)]
mod tests;

use std::str::FromStr;

use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::connection_url::ConnectionUrl;
use crate::database::structs::create_database_options::CreateDatabaseOptions;
use crate::database::structs::database_connector::DatabaseConnector;

fn target_database(url: &ConnectionUrl) -> Result<String, DatabaseError> {
    match url.engine {
        // SQLite with no path is the in-memory database.
        DatabaseDrivers::sqlite3 => Ok(url.database.clone().unwrap_or_default()),
        _ => url.database.clone().ok_or(DatabaseError::MissingDatabaseName),
    }
}

/// Checks whether the database named by the URL exists.
///
/// Side-effect free for every engine: server engines run a catalog probe
/// against the maintenance database, SQLite checks the file header on disk.
pub async fn database_exists(url: &str) -> Result<bool, DatabaseError> {
    let parsed = ConnectionUrl::from_str(url)?;
    let database = target_database(&parsed)?;
    let connector = DatabaseConnector::new(&parsed).await?;
    connector.database_exists(database.as_str()).await
}

/// Creates the database named by the URL with default options
/// (`utf8` encoding, no template).
pub async fn create_database(url: &str) -> Result<(), DatabaseError> {
    create_database_with(url, &CreateDatabaseOptions::default()).await
}

/// Creates the database named by the URL.
///
/// Creating a database that already exists surfaces the engine error.
pub async fn create_database_with(url: &str, options: &CreateDatabaseOptions) -> Result<(), DatabaseError> {
    let parsed = ConnectionUrl::from_str(url)?;
    let database = target_database(&parsed)?;
    let connector = DatabaseConnector::new(&parsed).await?;
    connector.create_database(database.as_str(), options).await
}

/// Drops the database named by the URL.
///
/// PostgreSQL terminates other sessions connected to the target first;
/// SQL Server forces SINGLE_USER with rollback. SQLite removes the file.
pub async fn drop_database(url: &str) -> Result<(), DatabaseError> {
    let parsed = ConnectionUrl::from_str(url)?;
    let database = target_database(&parsed)?;
    let connector = DatabaseConnector::new(&parsed).await?;
    connector.drop_database(database.as_str()).await
}

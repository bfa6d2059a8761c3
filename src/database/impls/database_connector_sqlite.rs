use std::fs::File;
use std::io::Read;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Sqlite};

use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::connection_url::ConnectionUrl;
use crate::database::structs::create_database_options::CreateDatabaseOptions;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;

const LOG_PREFIX: &str = "[SQLite]";

// Every SQLite database file starts with this header; the first page is
// at least 100 bytes.
const SQLITE_HEADER: &[u8; 16] = b"SQLite format 3\0";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Sqlite>, Error> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.create_if_missing(true))
            .await
    }

    pub async fn database_connector(url: &ConnectionUrl) -> Result<DatabaseConnector, DatabaseError> {
        if let Some(driver) = &url.driver {
            debug!("{} Ignoring driver variant '{}', using the native driver", LOG_PREFIX, driver);
        }
        Ok(DatabaseConnector {
            mysql: None,
            sqlite: Some(DatabaseConnectorSQLite {}),
            pgsql: None,
            mssql: None,
            engine: Some(DatabaseDrivers::sqlite3),
        })
    }

    /// A database exists when the file exists, holds at least one page
    /// and carries the SQLite header. An empty or foreign file at the
    /// same path is not a database.
    fn file_exists(path: &str) -> Result<bool, DatabaseError> {
        let metadata = match std::fs::metadata(path) {
            Err(_) => {
                return Ok(false);
            }
            Ok(metadata) => metadata,
        };
        if !metadata.is_file() || metadata.len() < 100 {
            return Ok(false);
        }
        let mut header = [0u8; 16];
        let mut file = File::open(path)?;
        file.read_exact(&mut header)?;
        Ok(&header == SQLITE_HEADER)
    }

    fn is_memory(database: &str) -> bool {
        database.is_empty() || database == ":memory:"
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    async fn database_exists(&self, database: &str) -> Result<bool, DatabaseError> {
        if DatabaseConnectorSQLite::is_memory(database) {
            return Ok(true);
        }
        DatabaseConnectorSQLite::file_exists(database)
    }

    async fn create_database(&self, database: &str, _options: &CreateDatabaseOptions) -> Result<(), DatabaseError> {
        if DatabaseConnectorSQLite::is_memory(database) {
            return Ok(());
        }
        info!("{} Creating database {}", LOG_PREFIX, database);
        let pool = DatabaseConnectorSQLite::create(format!("sqlite://{}", database).as_str()).await?;
        // A fresh file stays empty until something is written; create and
        // drop a scratch table so the header lands on disk.
        sqlx::query("CREATE TABLE DB(id INTEGER)").execute(&pool).await?;
        sqlx::query("DROP TABLE DB").execute(&pool).await?;
        pool.close().await;
        Ok(())
    }

    async fn drop_database(&self, database: &str) -> Result<(), DatabaseError> {
        if DatabaseConnectorSQLite::is_memory(database) {
            return Ok(());
        }
        info!("{} Removing database file {}", LOG_PREFIX, database);
        std::fs::remove_file(database)?;
        Ok(())
    }
}

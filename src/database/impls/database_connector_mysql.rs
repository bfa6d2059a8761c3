use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, Error, MySql, Pool};

use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::helpers::{build_create_query, build_drop_query, build_exists_query};
use crate::database::structs::connection_url::ConnectionUrl;
use crate::database::structs::create_database_options::CreateDatabaseOptions;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::traits::database_backend::DatabaseBackend;

const LOG_PREFIX: &str = "[MySQL]";

impl DatabaseConnectorMySQL {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<MySql>, Error> {
        let options = MySqlConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
    }

    /// Connects to the server with no database selected; the operations
    /// act on other databases, which may not exist yet.
    pub async fn database_connector(url: &ConnectionUrl) -> Result<DatabaseConnector, DatabaseError> {
        if let Some(driver) = &url.driver {
            debug!("{} Ignoring driver variant '{}', using the native driver", LOG_PREFIX, driver);
        }
        let admin_url = url.admin_url()?;
        let mysql_connect = DatabaseConnectorMySQL::create(admin_url.as_str()).await;
        match mysql_connect {
            Err(error) => {
                error!("{} Unable to connect to MySQL on DSL {}", LOG_PREFIX, admin_url);
                error!("{} Message: {}", LOG_PREFIX, error);
                Err(error.into())
            }
            Ok(pool) => Ok(DatabaseConnector {
                mysql: Some(DatabaseConnectorMySQL { pool }),
                sqlite: None,
                pgsql: None,
                mssql: None,
                engine: Some(DatabaseDrivers::mysql),
            }),
        }
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMySQL {
    async fn database_exists(&self, database: &str) -> Result<bool, DatabaseError> {
        let row = sqlx::query(build_exists_query(DatabaseDrivers::mysql))
            .bind(database)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn create_database(&self, database: &str, options: &CreateDatabaseOptions) -> Result<(), DatabaseError> {
        let query = build_create_query(DatabaseDrivers::mysql, database, options);
        info!("{} Creating database {}", LOG_PREFIX, database);
        sqlx::query(query.as_str()).execute(&self.pool).await?;
        Ok(())
    }

    async fn drop_database(&self, database: &str) -> Result<(), DatabaseError> {
        let query = build_drop_query(DatabaseDrivers::mysql, database);
        info!("{} Dropping database {}", LOG_PREFIX, database);
        sqlx::query(query.as_str()).execute(&self.pool).await?;
        Ok(())
    }
}

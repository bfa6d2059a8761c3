use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Postgres};

use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::helpers::{
    build_create_query, build_drop_query, build_exists_query,
    build_terminate_sessions_query,
};
use crate::database::structs::connection_url::ConnectionUrl;
use crate::database::structs::create_database_options::CreateDatabaseOptions;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::traits::database_backend::DatabaseBackend;

const LOG_PREFIX: &str = "[PgSQL]";

impl DatabaseConnectorPgSQL {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Postgres>, Error> {
        let options = PgConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
    }

    /// Connects to the `postgres` maintenance database; CREATE/DROP
    /// DATABASE must run from a different database than their target.
    pub async fn database_connector(url: &ConnectionUrl) -> Result<DatabaseConnector, DatabaseError> {
        if let Some(driver) = &url.driver {
            debug!("{} Ignoring driver variant '{}', using the native driver", LOG_PREFIX, driver);
        }
        let admin_url = url.admin_url()?;
        let pgsql_connect = DatabaseConnectorPgSQL::create(admin_url.as_str()).await;
        match pgsql_connect {
            Err(error) => {
                error!("{} Unable to connect to PgSQL on DSL {}", LOG_PREFIX, admin_url);
                error!("{} Message: {}", LOG_PREFIX, error);
                Err(error.into())
            }
            Ok(pool) => Ok(DatabaseConnector {
                mysql: None,
                sqlite: None,
                pgsql: Some(DatabaseConnectorPgSQL { pool }),
                mssql: None,
                engine: Some(DatabaseDrivers::pgsql),
            }),
        }
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorPgSQL {
    async fn database_exists(&self, database: &str) -> Result<bool, DatabaseError> {
        let row = sqlx::query(build_exists_query(DatabaseDrivers::pgsql))
            .bind(database)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn create_database(&self, database: &str, options: &CreateDatabaseOptions) -> Result<(), DatabaseError> {
        let query = build_create_query(DatabaseDrivers::pgsql, database, options);
        info!("{} Creating database {}", LOG_PREFIX, database);
        sqlx::query(query.as_str()).execute(&self.pool).await?;
        Ok(())
    }

    async fn drop_database(&self, database: &str) -> Result<(), DatabaseError> {
        // Lingering sessions make DROP DATABASE fail; sweep them first.
        let terminate = build_terminate_sessions_query(database);
        if let Err(error) = sqlx::query(terminate.as_str()).execute(&self.pool).await {
            warn!("{} Unable to terminate sessions on {}: {}", LOG_PREFIX, database, error);
        }
        let query = build_drop_query(DatabaseDrivers::pgsql, database);
        info!("{} Dropping database {}", LOG_PREFIX, database);
        sqlx::query(query.as_str()).execute(&self.pool).await?;
        Ok(())
    }
}

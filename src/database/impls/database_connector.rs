use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::connection_url::ConnectionUrl;
use crate::database::structs::create_database_options::CreateDatabaseOptions;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mssql::DatabaseConnectorMSSQL;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;

impl DatabaseConnector {
    pub async fn new(url: &ConnectionUrl) -> Result<DatabaseConnector, DatabaseError> {
        match url.engine {
            DatabaseDrivers::sqlite3 => DatabaseConnectorSQLite::database_connector(url).await,
            DatabaseDrivers::mysql => DatabaseConnectorMySQL::database_connector(url).await,
            DatabaseDrivers::pgsql => DatabaseConnectorPgSQL::database_connector(url).await,
            DatabaseDrivers::mssql => DatabaseConnectorMSSQL::database_connector(url).await,
        }
    }

    pub async fn database_exists(&self, database: &str) -> Result<bool, DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => {
                self.sqlite.as_ref().ok_or(DatabaseError::NotConnected)?.database_exists(database).await
            }
            Some(DatabaseDrivers::mysql) => {
                self.mysql.as_ref().ok_or(DatabaseError::NotConnected)?.database_exists(database).await
            }
            Some(DatabaseDrivers::pgsql) => {
                self.pgsql.as_ref().ok_or(DatabaseError::NotConnected)?.database_exists(database).await
            }
            Some(DatabaseDrivers::mssql) => {
                self.mssql.as_ref().ok_or(DatabaseError::NotConnected)?.database_exists(database).await
            }
            None => Err(DatabaseError::NotConnected),
        }
    }

    pub async fn create_database(&self, database: &str, options: &CreateDatabaseOptions) -> Result<(), DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => {
                self.sqlite.as_ref().ok_or(DatabaseError::NotConnected)?.create_database(database, options).await
            }
            Some(DatabaseDrivers::mysql) => {
                self.mysql.as_ref().ok_or(DatabaseError::NotConnected)?.create_database(database, options).await
            }
            Some(DatabaseDrivers::pgsql) => {
                self.pgsql.as_ref().ok_or(DatabaseError::NotConnected)?.create_database(database, options).await
            }
            Some(DatabaseDrivers::mssql) => {
                self.mssql.as_ref().ok_or(DatabaseError::NotConnected)?.create_database(database, options).await
            }
            None => Err(DatabaseError::NotConnected),
        }
    }

    pub async fn drop_database(&self, database: &str) -> Result<(), DatabaseError> {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => {
                self.sqlite.as_ref().ok_or(DatabaseError::NotConnected)?.drop_database(database).await
            }
            Some(DatabaseDrivers::mysql) => {
                self.mysql.as_ref().ok_or(DatabaseError::NotConnected)?.drop_database(database).await
            }
            Some(DatabaseDrivers::pgsql) => {
                self.pgsql.as_ref().ok_or(DatabaseError::NotConnected)?.drop_database(database).await
            }
            Some(DatabaseDrivers::mssql) => {
                self.mssql.as_ref().ok_or(DatabaseError::NotConnected)?.drop_database(database).await
            }
            None => Err(DatabaseError::NotConnected),
        }
    }
}

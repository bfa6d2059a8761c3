use async_trait::async_trait;
use log::{debug, info, warn};
use tiberius::{AuthMethod, Client, Config};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::helpers::{
    build_create_query, build_drop_query, build_exists_query,
    build_single_user_query,
};
use crate::database::structs::connection_url::ConnectionUrl;
use crate::database::structs::create_database_options::CreateDatabaseOptions;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mssql::DatabaseConnectorMSSQL;
use crate::database::traits::database_backend::DatabaseBackend;

const LOG_PREFIX: &str = "[MSSQL]";
const DEFAULT_PORT: u16 = 1433;

impl DatabaseConnectorMSSQL {
    pub async fn database_connector(url: &ConnectionUrl) -> Result<DatabaseConnector, DatabaseError> {
        if let Some(driver) = &url.driver {
            debug!("{} Ignoring driver variant '{}', using the native driver", LOG_PREFIX, driver);
        }
        let connector = DatabaseConnectorMSSQL { url: url.clone() };
        // Validate the URL up front so a broken DSN fails here and not
        // in the middle of an operation.
        connector.config()?;
        Ok(DatabaseConnector {
            mysql: None,
            sqlite: None,
            pgsql: None,
            mssql: Some(connector),
            engine: Some(DatabaseDrivers::mssql),
        })
    }

    fn config(&self) -> Result<Config, DatabaseError> {
        let host = match self.url.host() {
            None => {
                return Err(DatabaseError::InvalidUrl(String::from("mssql url without host")));
            }
            Some(host) => host,
        };
        let mut config = Config::new();
        config.host(host);
        config.port(self.url.port().unwrap_or(DEFAULT_PORT));
        if let Some(username) = self.url.username() {
            config.authentication(AuthMethod::sql_server(
                username,
                self.url.password().unwrap_or_default(),
            ));
        }
        config.database("master");
        config.trust_cert();
        Ok(config)
    }

    async fn connect(&self) -> Result<Client<Compat<TcpStream>>, DatabaseError> {
        let config = self.config()?;
        let tcp = TcpStream::connect(config.get_addr()).await?;
        tcp.set_nodelay(true)?;
        Ok(Client::connect(config, tcp.compat_write()).await?)
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMSSQL {
    async fn database_exists(&self, database: &str) -> Result<bool, DatabaseError> {
        let mut client = self.connect().await?;
        let row = client
            .query(build_exists_query(DatabaseDrivers::mssql), &[&database])
            .await?
            .into_row()
            .await?;
        Ok(row.is_some())
    }

    async fn create_database(&self, database: &str, options: &CreateDatabaseOptions) -> Result<(), DatabaseError> {
        let query = build_create_query(DatabaseDrivers::mssql, database, options);
        info!("{} Creating database {}", LOG_PREFIX, database);
        let mut client = self.connect().await?;
        client.execute(query, &[]).await?;
        Ok(())
    }

    async fn drop_database(&self, database: &str) -> Result<(), DatabaseError> {
        let mut client = self.connect().await?;
        // Other sessions block the drop; force SINGLE_USER and roll them
        // back first.
        let single_user = build_single_user_query(database);
        if let Err(error) = client.execute(single_user, &[]).await {
            warn!("{} Unable to switch {} to single user: {}", LOG_PREFIX, database, error);
        }
        let query = build_drop_query(DatabaseDrivers::mssql, database);
        info!("{} Dropping database {}", LOG_PREFIX, database);
        client.execute(query, &[]).await?;
        Ok(())
    }
}

pub mod connection_url;
pub mod create_database_options;
pub mod database_connector;
pub mod database_connector_mssql;
pub mod database_connector_mysql;
pub mod database_connector_pgsql;
pub mod database_connector_sqlite;

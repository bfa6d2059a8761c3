use async_trait::async_trait;

use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::create_database_options::CreateDatabaseOptions;

#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    async fn database_exists(&self, database: &str) -> Result<bool, DatabaseError>;

    async fn create_database(&self, database: &str, options: &CreateDatabaseOptions) -> Result<(), DatabaseError>;

    async fn drop_database(&self, database: &str) -> Result<(), DatabaseError>;
}

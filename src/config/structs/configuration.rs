use serde::{Deserialize, Serialize};

use crate::config::structs::database_config::DatabaseConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub database: DatabaseConfig,
}

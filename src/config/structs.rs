pub mod configuration;
pub mod database_config;

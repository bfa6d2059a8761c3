pub mod database_drivers;
pub mod database_error;

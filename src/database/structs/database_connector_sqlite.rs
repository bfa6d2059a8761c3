/// SQLite works on files, not servers: no pool is held, the operations
/// touch the filesystem (and open a short-lived pool only to create).
#[derive(Debug, Clone)]
pub struct DatabaseConnectorSQLite {}

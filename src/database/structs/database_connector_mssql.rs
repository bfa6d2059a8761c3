use crate::database::structs::connection_url::ConnectionUrl;

/// tiberius has no connection pool; a fresh client against `master` is
/// opened per operation from the stored URL.
#[derive(Debug, Clone)]
pub struct DatabaseConnectorMSSQL {
    pub(crate) url: ConnectionUrl,
}

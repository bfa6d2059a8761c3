use url::Url;

use crate::database::enums::database_drivers::DatabaseDrivers;

/// A parsed connection descriptor: the engine family, the optional
/// `+driver` variant carried by the scheme, and the database name.
///
/// Server URLs keep their authority and query string around so the
/// maintenance ("admin") URL can be rebuilt against the same server.
#[derive(Debug, Clone)]
pub struct ConnectionUrl {
    pub engine: DatabaseDrivers,
    pub driver: Option<String>,
    pub database: Option<String>,
    pub(crate) server: Option<Url>,
}

use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::connection_url::ConnectionUrl;

impl ConnectionUrl {
    /// True for the SQLite in-memory database, named either `:memory:`
    /// or by leaving the path out entirely.
    pub fn is_memory(&self) -> bool {
        self.engine == DatabaseDrivers::sqlite3
            && match &self.database {
                None => true,
                Some(database) => database == ":memory:",
            }
    }

    pub fn host(&self) -> Option<&str> {
        self.server.as_ref().and_then(|server| server.host_str())
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|server| server.port())
    }

    pub fn username(&self) -> Option<String> {
        let server = self.server.as_ref()?;
        if server.username().is_empty() {
            return None;
        }
        Some(percent_decode_str(server.username()).decode_utf8_lossy().to_string())
    }

    pub fn password(&self) -> Option<String> {
        let server = self.server.as_ref()?;
        let password = server.password()?;
        Some(percent_decode_str(password).decode_utf8_lossy().to_string())
    }

    /// Rebuilds the URL against the engine's maintenance database, with
    /// the scheme normalized so the native driver accepts it: `postgres`
    /// for PgSQL, no database at all for MySQL, `master` for MSSQL.
    pub fn admin_url(&self) -> Result<String, DatabaseError> {
        match self.engine {
            DatabaseDrivers::sqlite3 => {
                let database = match &self.database {
                    None => String::from(":memory:"),
                    Some(database) => database.clone(),
                };
                Ok(format!("sqlite://{}", database))
            }
            DatabaseDrivers::mysql => self.server_url("mysql", None),
            DatabaseDrivers::pgsql => self.server_url("postgres", Some("postgres")),
            DatabaseDrivers::mssql => self.server_url("mssql", Some("master")),
        }
    }

    fn server_url(&self, scheme: &str, database: Option<&str>) -> Result<String, DatabaseError> {
        let server = match &self.server {
            None => {
                return Err(DatabaseError::NotConnected);
            }
            Some(server) => server,
        };
        let host = match server.host_str() {
            None => {
                return Err(DatabaseError::InvalidUrl(server.as_str().to_string()));
            }
            Some(host) => host,
        };
        let mut out = format!("{}://", scheme);
        if !server.username().is_empty() {
            out.push_str(server.username());
            if let Some(password) = server.password() {
                out.push(':');
                out.push_str(password);
            }
            out.push('@');
        }
        out.push_str(host);
        if let Some(port) = server.port() {
            out.push(':');
            out.push_str(port.to_string().as_str());
        }
        if let Some(database) = database {
            out.push('/');
            out.push_str(database);
        }
        if let Some(query) = server.query() {
            out.push('?');
            out.push_str(query);
        }
        Ok(out)
    }
}

fn engine_for_scheme(family: &str) -> Option<DatabaseDrivers> {
    match family {
        "sqlite" | "sqlite3" => Some(DatabaseDrivers::sqlite3),
        "mysql" | "mariadb" => Some(DatabaseDrivers::mysql),
        "postgres" | "postgresql" | "pgsql" => Some(DatabaseDrivers::pgsql),
        "mssql" | "sqlserver" => Some(DatabaseDrivers::mssql),
        _ => None,
    }
}

impl FromStr for ConnectionUrl {
    type Err = DatabaseError;

    /// Parsing is purely textual: no connection is opened and no file is
    /// touched. Unknown schemes and host-less server URLs fail here,
    /// before any driver gets involved.
    fn from_str(raw: &str) -> Result<ConnectionUrl, DatabaseError> {
        let (scheme, rest) = match raw.split_once("://") {
            None => {
                return Err(DatabaseError::InvalidUrl(raw.to_string()));
            }
            Some((scheme, rest)) => (scheme.to_lowercase(), rest),
        };
        let (family, driver) = match scheme.split_once('+') {
            None => (scheme.as_str(), None),
            Some((family, driver)) => (family, Some(driver.to_string())),
        };
        let engine = match engine_for_scheme(family) {
            None => {
                return Err(DatabaseError::UnsupportedScheme(scheme.clone()));
            }
            Some(engine) => engine,
        };

        if engine == DatabaseDrivers::sqlite3 {
            // SQLite has no authority component; everything after the
            // separator is the path, taken verbatim.
            let path = match rest.split_once('?') {
                None => rest,
                Some((path, _query)) => path,
            };
            let database = if path.is_empty() { None } else { Some(path.to_string()) };
            return Ok(ConnectionUrl {
                engine,
                driver,
                database,
                server: None,
            });
        }

        let server = match Url::parse(raw) {
            Err(_) => {
                return Err(DatabaseError::InvalidUrl(raw.to_string()));
            }
            Ok(server) => server,
        };
        if server.host_str().is_none_or(|host| host.is_empty()) {
            return Err(DatabaseError::InvalidUrl(raw.to_string()));
        }
        let path = server.path().trim_start_matches('/');
        let database = if path.is_empty() {
            None
        } else {
            Some(percent_decode_str(path).decode_utf8_lossy().to_string())
        };
        Ok(ConnectionUrl {
            engine,
            driver,
            database,
            server: Some(server),
        })
    }
}

use lazy_static::lazy_static;
use regex::Regex;

use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::create_database_options::CreateDatabaseOptions;

lazy_static! {
    static ref SAFE_IDENTIFIER: Regex = Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap();
}

pub fn engine_name(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "SQLite",
        DatabaseDrivers::mysql => "MySQL",
        DatabaseDrivers::pgsql => "PgSQL",
        DatabaseDrivers::mssql => "MSSQL",
    }
}

pub fn needs_quoting(identifier: &str) -> bool {
    !SAFE_IDENTIFIER.is_match(identifier)
}

/// Quotes an identifier for the given engine, but only when it has to be
/// quoted. Safe lowercase identifiers pass through unchanged so the emitted
/// DDL stays readable.
pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    if !needs_quoting(identifier) {
        return identifier.to_string();
    }
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => {
            format!("`{}`", identifier.replace('`', "``"))
        }
        DatabaseDrivers::pgsql => {
            format!("\"{}\"", identifier.replace('"', "\"\""))
        }
        DatabaseDrivers::mssql => {
            format!("[{}]", identifier.replace(']', "]]"))
        }
    }
}

pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Catalog probe with a bind placeholder for the database name.
/// SQLite has no catalog to ask; its existence check is a file check.
pub fn build_exists_query(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "",
        DatabaseDrivers::mysql => "SELECT SCHEMA_NAME FROM INFORMATION_SCHEMA.SCHEMATA WHERE SCHEMA_NAME = ?",
        DatabaseDrivers::pgsql => "SELECT 1 FROM pg_database WHERE datname = $1",
        DatabaseDrivers::mssql => "SELECT 1 FROM master.sys.databases WHERE name = @P1",
    }
}

/// CREATE DATABASE statement. DDL cannot be parameterized, so the name is
/// interpolated with conditional quoting.
pub fn build_create_query(engine: DatabaseDrivers, database: &str, options: &CreateDatabaseOptions) -> String {
    let quoted = quote_identifier(engine, database);
    match engine {
        DatabaseDrivers::sqlite3 => String::new(),
        DatabaseDrivers::mysql => {
            format!(
                "CREATE DATABASE {} CHARACTER SET = {}",
                quoted,
                quote_literal(options.encoding.as_str())
            )
        }
        DatabaseDrivers::pgsql => {
            let mut query = format!(
                "CREATE DATABASE {} ENCODING {}",
                quoted,
                quote_literal(options.encoding.as_str())
            );
            if let Some(template) = &options.template {
                query.push_str(" TEMPLATE ");
                query.push_str(quote_identifier(engine, template.as_str()).as_str());
            }
            query
        }
        DatabaseDrivers::mssql => {
            format!("CREATE DATABASE {}", quoted)
        }
    }
}

pub fn build_drop_query(engine: DatabaseDrivers, database: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 => String::new(),
        _ => format!("DROP DATABASE {}", quote_identifier(engine, database)),
    }
}

/// PostgreSQL refuses to drop a database with live sessions; this sweeps
/// them away first, sparing the caller's own backend.
pub fn build_terminate_sessions_query(database: &str) -> String {
    format!(
        "SELECT pg_terminate_backend(pg_stat_activity.pid) FROM pg_stat_activity WHERE pg_stat_activity.datname = {} AND pid <> pg_backend_pid()",
        quote_literal(database)
    )
}

/// SQL Server equivalent: force the database into SINGLE_USER mode and roll
/// back everything still running before the drop.
pub fn build_single_user_query(database: &str) -> String {
    format!(
        "ALTER DATABASE {} SET SINGLE_USER WITH ROLLBACK IMMEDIATE",
        quote_identifier(DatabaseDrivers::mssql, database)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_quoting() {
        assert!(!needs_quoting("db_test_util"));
        assert!(!needs_quoting("_private"));
        assert!(needs_quoting("db_test-util"));
        assert!(needs_quoting("DbTest"));
        assert!(needs_quoting("9lives"));
        assert!(needs_quoting(""));
    }

    #[test]
    fn test_quote_identifier_safe_passthrough() {
        assert_eq!(quote_identifier(DatabaseDrivers::sqlite3, "db_test"), "db_test");
        assert_eq!(quote_identifier(DatabaseDrivers::mysql, "db_test"), "db_test");
        assert_eq!(quote_identifier(DatabaseDrivers::pgsql, "db_test"), "db_test");
        assert_eq!(quote_identifier(DatabaseDrivers::mssql, "db_test"), "db_test");
    }

    #[test]
    fn test_quote_identifier_per_engine() {
        assert_eq!(quote_identifier(DatabaseDrivers::sqlite3, "db-test"), "`db-test`");
        assert_eq!(quote_identifier(DatabaseDrivers::mysql, "db-test"), "`db-test`");
        assert_eq!(quote_identifier(DatabaseDrivers::pgsql, "db-test"), "\"db-test\"");
        assert_eq!(quote_identifier(DatabaseDrivers::mssql, "db-test"), "[db-test]");
    }

    #[test]
    fn test_quote_identifier_escapes_quote_characters() {
        assert_eq!(quote_identifier(DatabaseDrivers::mysql, "we`ird"), "`we``ird`");
        assert_eq!(quote_identifier(DatabaseDrivers::pgsql, "we\"ird"), "\"we\"\"ird\"");
        assert_eq!(quote_identifier(DatabaseDrivers::mssql, "we]ird"), "[we]]ird]");
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("utf8"), "'utf8'");
        assert_eq!(quote_literal("it's"), "'it''s'");
    }

    #[test]
    fn test_build_exists_query() {
        assert_eq!(
            build_exists_query(DatabaseDrivers::mysql),
            "SELECT SCHEMA_NAME FROM INFORMATION_SCHEMA.SCHEMATA WHERE SCHEMA_NAME = ?"
        );
        assert_eq!(
            build_exists_query(DatabaseDrivers::pgsql),
            "SELECT 1 FROM pg_database WHERE datname = $1"
        );
        assert_eq!(
            build_exists_query(DatabaseDrivers::mssql),
            "SELECT 1 FROM master.sys.databases WHERE name = @P1"
        );
        assert_eq!(build_exists_query(DatabaseDrivers::sqlite3), "");
    }

    #[test]
    fn test_build_create_query_pgsql() {
        let options = CreateDatabaseOptions::default();
        assert_eq!(
            build_create_query(DatabaseDrivers::pgsql, "db_test_util", &options),
            "CREATE DATABASE db_test_util ENCODING 'utf8'"
        );
        let options = CreateDatabaseOptions {
            encoding: String::from("utf8"),
            template: Some(String::from("my_template")),
        };
        assert_eq!(
            build_create_query(DatabaseDrivers::pgsql, "db_test_util", &options),
            "CREATE DATABASE db_test_util ENCODING 'utf8' TEMPLATE my_template"
        );
    }

    #[test]
    fn test_build_create_query_pgsql_quoted() {
        let options = CreateDatabaseOptions {
            encoding: String::from("utf8"),
            template: Some(String::from("my-template")),
        };
        assert_eq!(
            build_create_query(DatabaseDrivers::pgsql, "db_test-util", &options),
            "CREATE DATABASE \"db_test-util\" ENCODING 'utf8' TEMPLATE \"my-template\""
        );
    }

    #[test]
    fn test_build_create_query_mysql() {
        let options = CreateDatabaseOptions::default();
        assert_eq!(
            build_create_query(DatabaseDrivers::mysql, "db_test_util", &options),
            "CREATE DATABASE db_test_util CHARACTER SET = 'utf8'"
        );
        assert_eq!(
            build_create_query(DatabaseDrivers::mysql, "db_test-util", &options),
            "CREATE DATABASE `db_test-util` CHARACTER SET = 'utf8'"
        );
    }

    #[test]
    fn test_build_create_query_mssql() {
        let options = CreateDatabaseOptions::default();
        assert_eq!(
            build_create_query(DatabaseDrivers::mssql, "db_test_util", &options),
            "CREATE DATABASE db_test_util"
        );
        assert_eq!(
            build_create_query(DatabaseDrivers::mssql, "db test", &options),
            "CREATE DATABASE [db test]"
        );
    }

    #[test]
    fn test_build_drop_query() {
        assert_eq!(
            build_drop_query(DatabaseDrivers::mysql, "db_test-util"),
            "DROP DATABASE `db_test-util`"
        );
        assert_eq!(
            build_drop_query(DatabaseDrivers::pgsql, "db_test_util"),
            "DROP DATABASE db_test_util"
        );
        assert_eq!(
            build_drop_query(DatabaseDrivers::mssql, "db_test_util"),
            "DROP DATABASE db_test_util"
        );
        assert_eq!(build_drop_query(DatabaseDrivers::sqlite3, "data.db"), "");
    }

    #[test]
    fn test_build_terminate_sessions_query() {
        assert_eq!(
            build_terminate_sessions_query("db_test"),
            "SELECT pg_terminate_backend(pg_stat_activity.pid) FROM pg_stat_activity WHERE pg_stat_activity.datname = 'db_test' AND pid <> pg_backend_pid()"
        );
    }

    #[test]
    fn test_build_single_user_query() {
        assert_eq!(
            build_single_user_query("db_test"),
            "ALTER DATABASE db_test SET SINGLE_USER WITH ROLLBACK IMMEDIATE"
        );
        assert_eq!(
            build_single_user_query("db-test"),
            "ALTER DATABASE [db-test] SET SINGLE_USER WITH ROLLBACK IMMEDIATE"
        );
    }

    #[test]
    fn test_engine_name() {
        assert_eq!(engine_name(DatabaseDrivers::sqlite3), "SQLite");
        assert_eq!(engine_name(DatabaseDrivers::mysql), "MySQL");
        assert_eq!(engine_name(DatabaseDrivers::pgsql), "PgSQL");
        assert_eq!(engine_name(DatabaseDrivers::mssql), "MSSQL");
    }
}

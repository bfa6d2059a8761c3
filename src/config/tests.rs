#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;
    use crate::database::enums::database_drivers::DatabaseDrivers;

    mod configuration_tests {
        use super::*;

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.database.engine, DatabaseDrivers::sqlite3);
            assert_eq!(config.database.url, "sqlite://data.db");
        }

        #[test]
        fn test_toml_roundtrip() {
            let config = Configuration::init();
            let data = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(loaded.log_level, config.log_level);
            assert_eq!(loaded.database.engine, config.database.engine);
            assert_eq!(loaded.database.url, config.database.url);
        }

        #[test]
        fn test_load_parses_engines() {
            let data = r#"
log_level = "debug"

[database]
engine = "pgsql"
url = "postgres://postgres@localhost/db_test"
"#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.database.engine, DatabaseDrivers::pgsql);
        }

        #[test]
        fn test_load_rejects_unknown_engine() {
            let data = r#"
log_level = "info"

[database]
engine = "oracle"
url = "oracle://scott@localhost/tiger"
"#;
            assert!(Configuration::load(data.as_bytes()).is_err());
        }

        #[test]
        fn test_load_file_missing() {
            let error = Configuration::load_file("/nonexistent/config.toml").unwrap_err();
            assert!(matches!(error, ConfigurationError::IOError(_)));
        }

        #[test]
        fn test_validate_accepts_defaults() {
            Configuration::validate(&Configuration::init());
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            Configuration::validate(&config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_empty_url() {
            let mut config = Configuration::init();
            config.database.url = String::new();
            Configuration::validate(&config);
        }
    }
}

use std::fs::File;
use std::io::Write;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

lazy_static! {
    static ref LOG_LEVEL: Regex = Regex::new(r"^(off|trace|debug|info|warn|error)$").unwrap();
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                url: String::from("sqlite://data.db"),
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        let config = Self::load(data.as_slice())?;
        Ok(config)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file("config.toml") {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(ConfigurationError::Bootstrap(String::from("will not automatically create the config.toml file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(config_toml) => config_toml,
                    Err(error) => {
                        return Err(ConfigurationError::Bootstrap(error.to_string()));
                    }
                };
                return match Configuration::save_file("config.toml", config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the config.toml in the root folder, exiting now...");
                        Err(ConfigurationError::Bootstrap(String::from("created the config.toml file")))
                    }
                    Err(error) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{error}");
                        Err(error)
                    }
                };
            }
        };

        Self::validate(&config);
        Ok(config)
    }

    pub fn validate(config: &Configuration) {
        Self::validate_value("log_level", config.log_level.as_str(), &LOG_LEVEL);
        if config.database.url.is_empty() {
            panic!("[VALIDATE CONFIG] Error checking [database] url [:] value is empty");
        }
    }

    pub fn validate_value(name: &str, value: &str, regex: &Regex) {
        if !regex.is_match(value) {
            panic!("[VALIDATE CONFIG] Error checking {} [:] Value: \"{}\" [:] Regex: \"{}\"", name, value, regex);
        }
    }
}

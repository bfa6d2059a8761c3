use std::process::exit;

use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;

use sqlx_dbops::common::common::setup_logging;
use sqlx_dbops::config::structs::configuration::Configuration;
use sqlx_dbops::database::structs::create_database_options::CreateDatabaseOptions;
use sqlx_dbops::database::{create_database_with, database_exists, drop_database};
use sqlx_dbops::structs::Cli;

fn main() -> std::io::Result<()> {
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101),
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if !args.exists && !args.create && !args.drop {
        error!("Nothing to do, pass --exists, --create or --drop.");
        exit(2);
    }

    let url = args.url.clone().unwrap_or_else(|| config.database.url.clone());

    Builder::new_multi_thread().enable_all().build()?.block_on(async {
        if args.exists {
            match database_exists(url.as_str()).await {
                Ok(true) => {
                    info!("Database exists.");
                }
                Ok(false) => {
                    info!("Database does not exist.");
                    if !args.create {
                        exit(1);
                    }
                }
                Err(error) => {
                    error!("Unable to check database: {}", error);
                    exit(1);
                }
            }
        }
        if args.create {
            let options = CreateDatabaseOptions {
                encoding: args.encoding.clone(),
                template: args.template.clone(),
            };
            match create_database_with(url.as_str(), &options).await {
                Ok(_) => {
                    info!("Database created.");
                }
                Err(error) => {
                    error!("Unable to create database: {}", error);
                    exit(1);
                }
            }
        }
        if args.drop {
            match drop_database(url.as_str()).await {
                Ok(_) => {
                    info!("Database dropped.");
                }
                Err(error) => {
                    error!("Unable to drop database: {}", error);
                    exit(1);
                }
            }
        }
    });

    Ok(())
}

//! # sqlx-dbops
//!
//! Server-level database administration helpers on top of the sqlx toolkit.
//!
//! ## Overview
//!
//! sqlx and the native drivers are good at talking *to* a database, but stay
//! silent on the step before that: does the database exist at all, and how do
//! you create or remove it? This crate fills that gap with three operations
//! dispatched across heterogeneous engines:
//!
//! - [`database::database_exists`] - catalog probe (or file check for SQLite)
//! - [`database::create_database`] - `CREATE DATABASE` with engine-correct
//!   identifier quoting, encoding and template handling
//! - [`database::drop_database`] - `DROP DATABASE`, terminating competing
//!   sessions where the engine requires it
//!
//! ## Supported engines
//!
//! - SQLite, file-based and in-memory (`sqlite://`)
//! - MySQL / MariaDB (`mysql://`, `mariadb://`)
//! - PostgreSQL (`postgres://`, `postgresql://`, `pgsql://`)
//! - Microsoft SQL Server (`mssql://`, `sqlserver://`)
//!
//! A scheme may carry a `+driver` variant suffix (for example
//! `postgresql+pg8000://`); all variants of a family are routed to the same
//! native driver.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sqlx_dbops::database::{create_database, database_exists, drop_database};
//!
//! if !database_exists("postgres://postgres@localhost/app_test").await? {
//!     create_database("postgres://postgres@localhost/app_test").await?;
//! }
//! drop_database("postgres://postgres@localhost/app_test").await?;
//! ```

/// Shared utilities: logging setup.
pub mod common;

/// Configuration management and TOML parsing.
pub mod config;

/// Connection URL parsing, per-engine connectors and the three
/// server-level operations.
pub mod database;

/// CLI argument parsing for the admin binary.
pub mod structs;

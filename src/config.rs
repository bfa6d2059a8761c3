//! Configuration management module.
//!
//! Handles loading, parsing and validating the `config.toml` file used by
//! the admin binary. The file carries two sections: the log level and the
//! `[database]` block with the engine and connection URL.

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;

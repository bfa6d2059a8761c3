use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    ParseError(#[from] toml::de::Error),

    #[error("{0}")]
    Bootstrap(String),
}

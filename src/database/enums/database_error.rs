use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("unsupported database scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("invalid database url '{0}'")]
    InvalidUrl(String),

    #[error("no database name present in the url")]
    MissingDatabaseName,

    #[error("database connector is not initialized")]
    NotConnected,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Tds(#[from] tiberius::error::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] erm_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] erm_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] erm_auth::AuthError),

    #[error("Invalid seed data: {0}")]
    Seed(#[from] erm_core::CoreError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

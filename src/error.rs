use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not signed in")]
    Unauthorized,

    #[error("I/O error: {0}")]
    #[allow(dead_code)]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[allow(dead_code)]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

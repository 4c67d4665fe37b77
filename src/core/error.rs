use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VacaturError {
    #[error("Ground not found: {0}")]
    GroundNotFound(String),
    #[error("Knowledge base error: {0}")]
    Catalog(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<zip::result::ZipError> for VacaturError {
    fn from(err: zip::result::ZipError) -> Self {
        VacaturError::Render(err.to_string())
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content error: {0}")]
    Content(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

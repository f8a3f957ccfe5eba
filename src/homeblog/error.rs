use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Front matter error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid record id: {0:?}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A blog record with id '{0}' already exists")]
    RecordExists(String),

    #[error("A post with slug '{0}' already exists")]
    PostExists(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Card title must not be blank")]
    EmptyTitle,

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Invalid column ID: {0}. Valid columns: todo, in-progress, done")]
    InvalidColumnId(String),

    #[error("Invalid card ID: {0:?}")]
    InvalidCardId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RespondError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Response already written")]
    AlreadyWritten,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RespondError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Cascade delete blocked by locked tags. Carries every locked id in the
    /// subtree so the caller can decide whether to unlock or abort.
    #[error("Locked tags block deletion: {ids:?}")]
    Locked { ids: Vec<String> },

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Probability out of range: {0}")]
    InvalidProbability(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

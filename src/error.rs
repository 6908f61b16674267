use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupted forecast data: {0}")]
    DataCorruption(String),

    #[error("Invalid selection argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid forecast format: {0}")]
    InvalidFormat(String),
}

impl ProcessingError {
    /// True for failures that abort the whole batch during validation.
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, ProcessingError::DataCorruption(_))
    }
}

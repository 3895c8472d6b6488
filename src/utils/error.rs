use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZipfError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A source name failed the `.csv` suffix rule. Raised before any I/O
    /// is attempted on the source, distinct from "file not found".
    #[error("{name}: filename must end in .csv")]
    ValidationError { name: String },

    /// A source was missing or unreadable; the run skips it and continues.
    #[error("{name} not processed: {reason}")]
    SourceUnavailable { name: String, reason: String },

    /// A source row could not be parsed into (word, integer count).
    #[error("{name} not processed: {reason}")]
    MalformedSource { name: String, reason: String },

    /// The estimator was handed input the likelihood is undefined for, or
    /// the fitted beta left alpha undefined. Fatal to the estimation call.
    #[error("domain error: {message}")]
    DomainError { message: String },

    /// The bounded search did not settle within its budget. Fatal to the
    /// estimation call; never papered over with an approximate answer.
    #[error("power-law fit did not converge: {message}")]
    ConvergenceError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, ZipfError>;

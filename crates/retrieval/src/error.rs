use thiserror::Error;

/// Result type for retrieval operations
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Errors from the semantic question-answering collaborator.
///
/// These are isolated per query: one failing risk-factor question is logged
/// and skipped, the remaining questions still run.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// The index rejected the question
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The collaborator is not reachable or not ready
    #[error("Index unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the document text source. Terminal for the run: without text
/// there is nothing to analyze.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document could not be read
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document was read but its content is not usable text
    #[error("Malformed document: {0}")]
    Malformed(String),
}

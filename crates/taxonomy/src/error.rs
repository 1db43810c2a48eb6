use thiserror::Error;

/// Result type for taxonomy operations
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Errors that can occur while loading or validating a taxonomy
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// IO error while reading a taxonomy file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid TOML in a taxonomy file
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize a taxonomy to TOML
    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A factor or subtype has an empty name
    #[error("Empty risk name")]
    EmptyName,

    /// Two factors (or two subtypes of one factor) share a name
    #[error("Duplicate risk name: {0}")]
    DuplicateName(String),
}

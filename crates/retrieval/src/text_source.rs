use crate::error::ExtractionError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Boundary to the document text extractor.
///
/// Implementations own the format-specific work (plain text, PDF, OCR). The
/// core only requires the full text; an empty result means "nothing to
/// analyze" and ends the run cleanly rather than failing.
pub trait TextSource {
    /// Produce the raw contract text
    fn extract(&self) -> std::result::Result<String, ExtractionError>;
}

/// [`TextSource`] reading a UTF-8 text file from disk
pub struct PlainTextFile {
    path: PathBuf,
}

impl PlainTextFile {
    /// Create a source for the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The wrapped file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for PlainTextFile {
    fn extract(&self) -> std::result::Result<String, ExtractionError> {
        let text = fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == ErrorKind::InvalidData {
                ExtractionError::Malformed(format!("{} is not UTF-8 text", self.path.display()))
            } else {
                ExtractionError::IoError(err)
            }
        })?;

        log::info!(
            "Extracted {} characters from {}",
            text.chars().count(),
            self.path.display()
        );
        Ok(text)
    }
}

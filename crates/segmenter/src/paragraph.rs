use serde::{Deserialize, Serialize};

/// A segmented contract clause
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paragraph {
    /// Dotted section numbering ("3.2.1"), or [`Paragraph::UNKNOWN_SECTION`]
    /// when the clause carries no leading number. Not necessarily unique.
    pub section_id: String,

    /// Whitespace-normalized clause body, numbering line included
    pub text: String,
}

impl Paragraph {
    /// Sentinel section id for text without a leading number
    pub const UNKNOWN_SECTION: &'static str = "Unknown";

    /// Create a new paragraph
    #[must_use]
    pub fn new(section_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            text: text.into(),
        }
    }

    /// True when this paragraph had no leading section number
    #[must_use]
    pub fn is_unnumbered(&self) -> bool {
        self.section_id == Self::UNKNOWN_SECTION
    }
}

//! # Contract Retrieval
//!
//! The collaborator boundary of the risk analyzer: document text extraction
//! and semantic question answering.
//!
//! The scoring core never talks to a PDF parser, an embedding model, or an
//! LLM directly. It consumes two narrow traits defined here:
//!
//! - [`TextSource`]: hand over the raw contract text, or fail with an
//!   [`ExtractionError`].
//! - [`SemanticIndex`]: answer one natural-language question about the
//!   contract, citing the section ids used as evidence.
//!
//! [`KeywordIndex`] is the bundled deterministic implementation: folded
//! substring retrieval over the segmented paragraphs. It keeps the binary
//! runnable offline and gives tests a collaborator with predictable answers;
//! a network-backed retrieval chain can replace it without touching the core.

mod error;
mod index;
mod keyword;
mod text_source;

pub use error::{ExtractionError, Result, RetrievalError};
pub use index::{RetrievedAnswer, SemanticIndex};
pub use keyword::KeywordIndex;
pub use text_source::{PlainTextFile, TextSource};

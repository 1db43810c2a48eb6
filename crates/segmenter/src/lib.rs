//! # Contract Segmenter
//!
//! Splits raw contract text into addressable clause units.
//!
//! Contracts are numbered documents: a line opening with a dotted section
//! number (`3.`, `3.2.`, `12.4.1.`) starts a new clause, and everything up
//! to the next numbered line belongs to it. Preamble text before the first
//! numbered line is collected under the sentinel section `"Unknown"`.
//!
//! ```rust
//! use contract_segmenter::segment;
//!
//! let paragraphs = segment("1. Nájemce platí nájem.\n2. Pronajímatel udržuje byt.");
//! assert_eq!(paragraphs.len(), 2);
//! assert_eq!(paragraphs[0].section_id, "1");
//! ```
//!
//! The crate also hosts [`fold`], the shared text normalization used by every
//! detector in the workspace.

mod fold;
mod paragraph;
mod segmenter;

pub use fold::fold;
pub use paragraph::Paragraph;
pub use segmenter::{section_id_of, segment};

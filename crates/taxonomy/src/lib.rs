//! # Contract Taxonomy
//!
//! Static risk definitions for contract analysis.
//!
//! A taxonomy is an ordered tree of weighted risk factors, each optionally
//! carrying a flat list of subtypes. It is loaded once at startup, either the
//! built-in Czech rental-contract defaults or a TOML file, validated, and
//! never mutated afterwards. Detectors copy weight and description out of
//! the taxonomy at detection time, so taxonomy iteration order fixes the
//! order of semantic queries and report entries.
//!
//! ## Example
//!
//! ```rust
//! use contract_taxonomy::RiskTaxonomy;
//!
//! let taxonomy = RiskTaxonomy::builtin();
//! for factor in &taxonomy.factors {
//!     println!("{} (weight {})", factor.name, factor.weight);
//! }
//! ```

mod builtin;
mod error;
mod loader;
mod types;

pub use error::{Result, TaxonomyError};
pub use types::{RiskFactor, RiskSubtype, RiskTaxonomy};

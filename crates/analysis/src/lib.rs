//! # Contract Analysis
//!
//! The risk detection and scoring engine.
//!
//! ## Pipeline
//!
//! ```text
//! Contract text
//!     │
//!     ├──> Segmenter → numbered paragraphs
//!     │
//!     ├──> Lexical matcher  ──┐
//!     │      (folded substring │  detections
//!     │       containment)     ├──> Merger → merged risks
//!     ├──> Semantic adapter  ──┘       │
//!     │      (one query per factor,    └──> Scorer → recommendation
//!     │       negative-marker filter)
//!     │
//!     └──> AnalysisReport (merged risks + semantic log + score)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use contract_analysis::{AnalysisOptions, ContractAnalyzer};
//! use contract_retrieval::KeywordIndex;
//! use contract_segmenter::segment;
//! use contract_taxonomy::RiskTaxonomy;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let analyzer = ContractAnalyzer::new(
//!     RiskTaxonomy::builtin().clone(),
//!     AnalysisOptions::default(),
//! );
//!
//! let text = "1. Nájemce může vypovědět smlouvu bez udání důvodu.";
//! let paragraphs = segment(text);
//! let index = KeywordIndex::from_paragraphs(&paragraphs);
//!
//! let report = analyzer.analyze_paragraphs(&paragraphs, &index).await;
//! println!("total weight {}", report.score.total_weight);
//! # }
//! ```

mod analyzer;
mod lexical;
mod merge;
mod score;
mod semantic;
mod types;

pub use analyzer::{AnalysisOptions, ContractAnalyzer, DEFAULT_THRESHOLD};
pub use lexical::LexicalMatcher;
pub use merge::merge;
pub use score::score;
pub use semantic::{SemanticScan, SemanticScanConfig, SemanticScanOutcome};
pub use types::{
    AnalysisReport, DetectionType, MergedRisk, Recommendation, RiskDetection, ScoreResult,
    SemanticFinding, SourceRef,
};
